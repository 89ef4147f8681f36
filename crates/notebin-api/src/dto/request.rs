//! Request DTOs with validation.

use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// Setup and login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CredentialsRequest {
    /// Username.
    #[serde(default)]
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Create share request body.
///
/// `expire` is a lifetime in seconds and `maxVisits` a view cap; both
/// accept numbers or numeric strings, and `0`, `null` or `""` mean none.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShareRequest {
    /// Content id being shared.
    #[serde(default)]
    pub file_id: String,
    /// Optional password.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub password: String,
    /// Lifetime in seconds.
    #[serde(default, deserialize_with = "lenient_u64")]
    pub expire: u64,
    /// Maximum successful views.
    #[serde(default, deserialize_with = "lenient_u32")]
    pub max_visits: u32,
}

/// Batch delete request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchDeleteRequest {
    /// Tokens to delete.
    #[serde(default)]
    pub tokens: Option<Vec<String>>,
}

/// `?token=` query.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenQuery {
    /// Share token.
    pub token: Option<String>,
}

/// `?id=` query.
#[derive(Debug, Clone, Deserialize)]
pub struct IdQuery {
    /// Content id.
    pub id: Option<String>,
}

/// Save content request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveContentRequest {
    /// Content id; generated when absent or blank.
    #[serde(default)]
    pub id: Option<String>,
    /// The content itself.
    #[serde(default)]
    pub code: String,
}

/// Query of the public `/share` page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SharePageQuery {
    /// Share token.
    pub k: Option<String>,
    /// Content id for an admin preview.
    pub id: Option<String>,
    /// `true` for a plain-text response.
    pub raw: Option<String>,
}

impl SharePageQuery {
    /// Whether raw (plain text) mode was requested.
    pub fn is_raw(&self) -> bool {
        self.raw.as_deref() == Some("true")
    }
}

/// Password form posted to the `/share` page.
#[derive(Debug, Clone, Deserialize)]
pub struct UnlockForm {
    /// Supplied share password.
    pub password: Option<String>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(serde_json::Number),
    Text(String),
}

fn lenient_u64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    use serde::de::Error;

    let value = match Option::<NumberOrText>::deserialize(deserializer)? {
        None => return Ok(0),
        Some(NumberOrText::Number(n)) => n.to_string(),
        Some(NumberOrText::Text(s)) => s.trim().to_string(),
    };
    if value.is_empty() {
        return Ok(0);
    }
    if let Ok(n) = value.parse::<u64>() {
        return Ok(n);
    }
    match value.parse::<f64>() {
        Ok(f) if f.is_finite() && f >= 0.0 && f <= u64::MAX as f64 => Ok(f.trunc() as u64),
        _ => Err(D::Error::custom(format!(
            "expected a non-negative number, got {value:?}"
        ))),
    }
}

fn lenient_u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    use serde::de::Error;

    let n = lenient_u64(deserializer)?;
    u32::try_from(n).map_err(|_| D::Error::custom(format!("{n} is too large")))
}
