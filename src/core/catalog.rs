use crate::utils::error::Result;
use serde::Deserialize;
use std::collections::HashMap;

/// HTTP method of a remote operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum HttpMethod {
    #[serde(rename = "GET")]
    Get,
    #[serde(rename = "POST")]
    Post,
}

/// Wire shape of one remote command: how to address it relative to the
/// provider's base URL.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Operation {
    pub http_method: HttpMethod,
    pub path: String,
}

/// Static table mapping command names to their wire shapes.
///
/// Parsed once from a JSON service description at client construction and
/// only ever read afterwards. The dispatch pipeline consults it for address
/// resolution; it performs no validation of its own.
#[derive(Debug, Clone, Deserialize)]
pub struct OperationCatalog {
    operations: HashMap<String, Operation>,
}

impl OperationCatalog {
    pub fn from_json_str(description: &str) -> Result<Self> {
        Ok(serde_json::from_str(description)?)
    }

    pub fn get(&self, command: &str) -> Option<&Operation> {
        self.operations.get(command)
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_service_description() {
        let description = r#"
        {
            "operations": {
                "addContact": { "http_method": "POST", "path": "/addContact" },
                "getCampaigns": { "http_method": "POST", "path": "/getCampaigns" }
            }
        }
        "#;

        let catalog = OperationCatalog::from_json_str(description).unwrap();

        assert_eq!(catalog.len(), 2);
        let op = catalog.get("addContact").unwrap();
        assert_eq!(op.http_method, HttpMethod::Post);
        assert_eq!(op.path, "/addContact");
    }

    #[test]
    fn test_unknown_command_has_no_entry() {
        let catalog = OperationCatalog::from_json_str(r#"{"operations": {}}"#).unwrap();

        assert!(catalog.is_empty());
        assert!(catalog.get("doesNotExist").is_none());
    }

    #[test]
    fn test_invalid_description_is_rejected() {
        assert!(OperationCatalog::from_json_str("not json").is_err());
        assert!(OperationCatalog::from_json_str(r#"{"operations": {"x": {"path": "/x"}}}"#).is_err());
    }
}
