use crate::core::catalog::Operation;
use crate::core::dispatch::{ParamMap, RpcEnvelope};
use crate::utils::error::{MailvanError, Result};
use async_trait::async_trait;
use serde_json::Value;

/// Boundary to the remote provider's HTTP endpoint.
///
/// Implementations resolve the request address from the catalog entry and
/// return the decoded JSON body. Transport failures (connection, DNS,
/// timeout, malformed body) propagate as-is; the dispatch pipeline never
/// wraps or reinterprets them.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends one call envelope for `command`. `operation` is the catalog
    /// entry for the command, or `None` when the catalog has no such
    /// command — in that case the transport fails the call.
    async fn send(
        &self,
        command: &str,
        operation: Option<&Operation>,
        envelope: &RpcEnvelope,
    ) -> Result<Value>;
}

/// Provider-specific hooks consumed by the dispatch pipeline.
///
/// One implementation per provider: how to wrap a parameter bag into the
/// provider's call envelope, how to recognize an error embedded in an
/// otherwise-successful response, and how to turn it into a normalized
/// failure.
pub trait ProviderHooks {
    /// Wraps a parameter bag into the provider's call envelope.
    fn build_envelope(&self, params: Option<ParamMap>) -> RpcEnvelope;

    /// True iff the response encodes a provider-level error.
    fn is_error(&self, response: &Value) -> bool;

    /// Builds the normalized error from an error response. Only called when
    /// `is_error` returned true.
    fn to_error(&self, response: &Value) -> MailvanError;
}
