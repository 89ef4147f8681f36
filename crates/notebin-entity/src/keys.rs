//! Reserved blob keys.
//!
//! System records share the blob namespace with user content. These keys
//! are hidden from content listings and refused by content writes/deletes.

/// Key of the admin credential record.
pub const ADMIN_CONFIG_KEY: &str = "_sys_admin_config";

/// Key of the share index record.
pub const SHARE_INDEX_KEY: &str = "_sys_shares.json";

/// All reserved keys.
pub const RESERVED_KEYS: [&str; 2] = [ADMIN_CONFIG_KEY, SHARE_INDEX_KEY];

/// Whether `key` names a system record.
pub fn is_reserved_key(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}
