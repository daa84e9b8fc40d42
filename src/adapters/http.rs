use crate::core::catalog::{HttpMethod, Operation};
use crate::core::dispatch::RpcEnvelope;
use crate::domain::ports::Transport;
use crate::utils::error::{MailvanError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

/// reqwest-backed transport. Resolves the request URL from the base URL and
/// the catalog entry, sends the envelope as the JSON body and decodes the
/// response body as JSON.
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(
        &self,
        command: &str,
        operation: Option<&Operation>,
        envelope: &RpcEnvelope,
    ) -> Result<Value> {
        let operation = operation.ok_or_else(|| MailvanError::UnknownCommand {
            command: command.to_string(),
        })?;

        let url = format!("{}{}", self.base_url.trim_end_matches('/'), operation.path);
        tracing::debug!(command, %url, "sending provider request");

        let request = match operation.http_method {
            HttpMethod::Post => self.client.post(&url).json(envelope),
            HttpMethod::Get => self.client.get(&url),
        };

        let response = request.send().await?;
        tracing::debug!(command, status = %response.status(), "provider responded");

        Ok(response.json::<Value>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn post_operation(path: &str) -> Operation {
        Operation {
            http_method: HttpMethod::Post,
            path: path.to_string(),
        }
    }

    #[tokio::test]
    async fn test_send_posts_envelope_and_decodes_response() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/addContact")
                .json_body(json!({"id": 101, "params": ["test-key"]}));
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({"queued": 1}));
        });

        let transport = HttpTransport::new(server.base_url());
        let envelope = RpcEnvelope {
            id: 101,
            params: vec![json!("test-key")],
        };

        let response = transport
            .send("addContact", Some(&post_operation("/addContact")), &envelope)
            .await
            .unwrap();

        mock.assert();
        assert_eq!(response, json!({"queued": 1}));
    }

    #[tokio::test]
    async fn test_unknown_command_fails_at_transport() {
        let transport = HttpTransport::new("http://localhost:1");
        let envelope = RpcEnvelope {
            id: 100,
            params: vec![],
        };

        let result = transport.send("bogusCommand", None, &envelope).await;

        match result.unwrap_err() {
            MailvanError::UnknownCommand { command } => assert_eq!(command, "bogusCommand"),
            other => panic!("expected unknown command error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_connection_failure_propagates_as_transport_error() {
        // Port 1 is never listening.
        let transport = HttpTransport::new("http://127.0.0.1:1");
        let envelope = RpcEnvelope {
            id: 100,
            params: vec![json!("test-key")],
        };

        let result = transport
            .send("addContact", Some(&post_operation("/addContact")), &envelope)
            .await;

        assert!(matches!(result, Err(MailvanError::Transport(_))));
    }
}
