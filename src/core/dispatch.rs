use crate::core::catalog::OperationCatalog;
use crate::domain::ports::{ProviderHooks, Transport};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parameter bag assembled per call and discarded afterwards.
pub type ParamMap = serde_json::Map<String, Value>;

/// Provider call envelope: a correlation id plus a positional argument list.
///
/// Serializes to exactly `{"id": <int>, "params": [...]}`. The id is
/// advisory — drawn from a bounded range, not unique and not monotonic —
/// so callers must not rely on it for idempotency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcEnvelope {
    pub id: u32,
    pub params: Vec<Value>,
}

/// Executes logical remote commands: one envelope out, one raw response in.
///
/// The pipeline is provider-agnostic; everything provider-specific (envelope
/// shape, error detection, error mapping) comes in through [`ProviderHooks`].
pub struct Dispatcher<T: Transport> {
    transport: T,
    catalog: OperationCatalog,
}

impl<T: Transport> Dispatcher<T> {
    pub fn new(transport: T, catalog: OperationCatalog) -> Self {
        Self { transport, catalog }
    }

    /// Runs one remote command and transforms its response.
    ///
    /// The command is not validated against the catalog here: an unknown
    /// command is passed through and fails at the transport boundary.
    /// `transform` is pure and is never invoked when the response carries a
    /// provider-level error. Exactly one network round trip per call; no
    /// retries, no caching.
    pub async fn execute<P, R, F>(
        &self,
        provider: &P,
        command: &str,
        params: Option<ParamMap>,
        transform: F,
    ) -> Result<R>
    where
        P: ProviderHooks,
        F: FnOnce(&Value) -> R,
    {
        let envelope = provider.build_envelope(params);
        tracing::debug!(command, correlation_id = envelope.id, "dispatching remote command");

        let operation = self.catalog.get(command);
        let response = self.transport.send(command, operation, &envelope).await?;

        if provider.is_error(&response) {
            tracing::warn!(command, "provider returned an error response");
            return Err(provider.to_error(&response));
        }

        Ok(transform(&response))
    }
}
