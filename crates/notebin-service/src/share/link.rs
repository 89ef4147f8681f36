//! Share link token generation.

use uuid::Uuid;

/// Generates share link tokens.
#[derive(Debug, Clone)]
pub struct LinkService;

impl LinkService {
    /// Creates a new link service.
    pub fn new() -> Self {
        Self
    }

    /// Generates a random token (UUID v4, 122 random bits). Tokens are not
    /// checked against the index for collisions.
    pub fn generate_token(&self) -> String {
        Uuid::new_v4().to_string()
    }

    /// Generates a short content id: the first eight hex digits of a UUID v4.
    pub fn generate_content_id(&self) -> String {
        let mut id = Uuid::new_v4().simple().to_string();
        id.truncate(8);
        id
    }
}

impl Default for LinkService {
    fn default() -> Self {
        Self::new()
    }
}
