use std::fmt::Debug;
use std::fmt::Formatter;

use crate::constants::DEFAULT_HOST;
use crate::utils::Redact;

/// Credential that holds the access key pair for the Sonma print API.
///
/// This is an immutable value: construct it once and hand it to
/// [`Client::with_http_send`][crate::Client::with_http_send]. Nothing mutates
/// it afterwards, so it can be shared freely across threads.
#[derive(Clone)]
pub struct Credential {
    /// Access key identifying the caller.
    pub access_key: String,
    /// Secret key used for HMAC-SHA1 signing.
    pub secret_key: String,
    /// API endpoint, e.g. `https://api.sonma.net`.
    pub host: String,
}

impl Credential {
    /// Create a credential against the default endpoint.
    pub fn new(access_key: &str, secret_key: &str) -> Self {
        Self {
            access_key: access_key.to_string(),
            secret_key: secret_key.to_string(),
            host: DEFAULT_HOST.to_string(),
        }
    }

    /// Point the credential at another endpoint.
    pub fn with_host(mut self, host: &str) -> Self {
        self.host = host.trim_end_matches('/').to_string();
        self
    }

    /// Check that both keys are present.
    pub fn is_valid(&self) -> bool {
        !self.access_key.is_empty() && !self.secret_key.is_empty()
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("access_key", &Redact::from(&self.access_key))
            .field("secret_key", &Redact::from(&self.secret_key))
            .field("host", &self.host)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_keys() {
        let cred = Credential::new("AKIDEXAMPLEKEY", "TopSecretSigningKey");
        let repr = format!("{cred:?}");
        assert!(!repr.contains("EXAMPLEKEY"));
        assert!(!repr.contains("SecretSigning"));
        assert!(repr.contains(DEFAULT_HOST));
    }

    #[test]
    fn test_with_host_trims_trailing_slash() {
        let cred = Credential::new("ak", "sk").with_host("http://127.0.0.1:8080/");
        assert_eq!(cred.host, "http://127.0.0.1:8080");
    }

    #[test]
    fn test_is_valid() {
        assert!(Credential::new("ak", "sk").is_valid());
        assert!(!Credential::new("", "sk").is_valid());
        assert!(!Credential::new("ak", "").is_valid());
    }
}
