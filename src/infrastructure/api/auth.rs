/// API credential material. Exactly one variant is configured per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Static API token, attached as an Authorization header on every
    /// request. No round-trip is needed before the data call.
    Token { user: String, token: String },
    /// Username and password, exchanged for a session ticket with one POST
    /// to the ticket endpoint.
    Password { user: String, password: String },
}

impl Credentials {
    /// Authorization header value for token mode, `None` for password mode.
    #[must_use]
    pub fn authorization_header(&self) -> Option<String> {
        match self {
            Self::Token { user, token } => Some(format!("PVEAPIToken={user}!{token}")),
            Self::Password { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_mode_builds_header() {
        let credentials = Credentials::Token {
            user: "monitoring@pve".to_string(),
            token: "mytoken=123f922a".to_string(),
        };
        assert_eq!(
            credentials.authorization_header().as_deref(),
            Some("PVEAPIToken=monitoring@pve!mytoken=123f922a")
        );
    }

    #[test]
    fn password_mode_has_no_header() {
        let credentials = Credentials::Password {
            user: "monitoring@pve".to_string(),
            password: "secret".to_string(),
        };
        assert!(credentials.authorization_header().is_none());
    }
}
