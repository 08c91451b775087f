//! Session model

use std::fmt;

/// Token and username of the signed-in user.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub token: String,
    pub username: String,
}

impl Credentials {
    pub fn new(token: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            username: username.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Credentials")
            .field("token", &"[REDACTED]")
            .field("username", &self.username)
            .finish()
    }
}

/// In-memory session: either fully authenticated or anonymous.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated(Credentials),
}

impl Session {
    pub const fn credentials(&self) -> Option<&Credentials> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(credentials) => Some(credentials),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.credentials().map(|credentials| credentials.token.as_str())
    }

    pub fn username(&self) -> Option<&str> {
        self.credentials()
            .map(|credentials| credentials.username.as_str())
    }

    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_session_is_anonymous() {
        let session = Session::default();
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
        assert_eq!(session.username(), None);
    }

    #[test]
    fn credentials_debug_redacts_token() {
        let rendered = format!("{:?}", Credentials::new("secret-token", "alice"));
        assert!(!rendered.contains("secret-token"));
        assert!(rendered.contains("[REDACTED]"));
        assert!(rendered.contains("alice"));
    }
}
