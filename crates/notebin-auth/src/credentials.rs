//! Credential comparison.

use subtle::ConstantTimeEq;

use notebin_entity::admin::AdminConfig;

/// Constant-time string equality.
pub fn secure_eq(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// Whether `username`/`password` equal the stored admin credentials.
///
/// Both fields are always compared so the timing does not reveal which
/// one differed.
pub fn credentials_match(config: &AdminConfig, username: &str, password: &str) -> bool {
    let user_ok = secure_eq(&config.username, username);
    let pass_ok = secure_eq(&config.password, password);
    user_ok & pass_ok
}
