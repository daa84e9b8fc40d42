use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use serde::{Deserialize, Serialize};

/// Static client configuration. Both fields are required; nothing else is
/// recognized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Root endpoint of the provider API, e.g. `https://api2.getresponse.com`.
    pub base_url: String,
    /// Static API key attached to every call envelope.
    pub api_key: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_non_empty_string("api_key", &self.api_key)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config = ClientConfig::new("https://api2.getresponse.com", "secret-key");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_base_url() {
        let config = ClientConfig::new("not-a-url", "secret-key");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_empty_api_key() {
        let config = ClientConfig::new("https://api2.getresponse.com", "  ");
        assert!(config.validate().is_err());
    }
}
