use serde::Serialize;

use super::user::UserError;

const MAX_NAME_LENGTH: usize = 100;

/// Display name shown next to a user's contacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UserName(String);

impl UserName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserName {
    type Error = UserError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.chars().count() > MAX_NAME_LENGTH {
            return Err(UserError::InvalidName(format!(
                "name must be between 1 and {MAX_NAME_LENGTH} characters"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }
}
