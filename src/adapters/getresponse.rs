use crate::adapters::http::HttpTransport;
use crate::config::ClientConfig;
use crate::core::catalog::OperationCatalog;
use crate::core::dispatch::{Dispatcher, ParamMap, RpcEnvelope};
use crate::domain::model::{SubscriptionList, User};
use crate::domain::ports::{ProviderHooks, Transport};
use crate::utils::error::{MailvanError, Result};
use crate::utils::validation::Validate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{json, Value};
use std::sync::{Mutex, PoisonError};

/// Service description for the GetResponse API, parsed into the operation
/// catalog at client construction.
const SERVICE_DESCRIPTION: &str = include_str!("operations.json");

/// GetResponse client: the provider-specific hooks plus the public list
/// management operations, all expressed as compositions of dispatch calls.
///
/// Each operation performs 1-3 strictly sequential round trips. The only
/// state shared between concurrent calls is the immutable configuration and
/// the correlation-id RNG behind a mutex, so a client can be shared freely
/// given a concurrency-safe transport.
pub struct GetResponseClient<T: Transport = HttpTransport> {
    dispatcher: Dispatcher<T>,
    api_key: String,
    rng: Mutex<StdRng>,
}

impl GetResponseClient<HttpTransport> {
    /// Builds a client from validated configuration, wiring up the HTTP
    /// transport and the embedded service description.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        Self::with_transport(HttpTransport::new(&config.base_url), config.api_key)
    }
}

impl<T: Transport> GetResponseClient<T> {
    /// Builds a client over a caller-supplied transport.
    pub fn with_transport(transport: T, api_key: impl Into<String>) -> Result<Self> {
        let catalog = OperationCatalog::from_json_str(SERVICE_DESCRIPTION)?;
        Ok(Self {
            dispatcher: Dispatcher::new(transport, catalog),
            api_key: api_key.into(),
            rng: Mutex::new(StdRng::from_entropy()),
        })
    }

    /// Replaces the correlation-id source with a seeded one, for
    /// deterministic tests.
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    /// Subscribes `user` to `list`. Returns `true` on any non-error response.
    pub async fn subscribe(&self, user: &User, list: &SubscriptionList) -> Result<bool> {
        let mut params = ParamMap::new();
        params.insert("campaign".to_string(), json!(list.id()));
        params.insert("name".to_string(), json!(user.name()));
        params.insert("email".to_string(), json!(user.email()));

        self.dispatcher
            .execute(self, "addContact", Some(params), |_| true)
            .await
    }

    /// Unsubscribes `user` from `list`: resolves the contact id, then issues
    /// one `deleteContact` call.
    pub async fn unsubscribe(&self, user: &User, list: &SubscriptionList) -> Result<bool> {
        let contact_id = self.find_contact_id(user, Some(list)).await?;

        let mut params = ParamMap::new();
        params.insert("contact".to_string(), json!(contact_id));

        self.dispatcher
            .execute(self, "deleteContact", Some(params), |_| true)
            .await
    }

    /// Moves `user` from one list to another. Two sequential lookups precede
    /// the mutating call; there is no atomicity and no compensating action on
    /// partial failure — stronger consistency must be layered by the caller.
    pub async fn move_contact(
        &self,
        user: &User,
        from: &SubscriptionList,
        to: &SubscriptionList,
    ) -> Result<bool> {
        let contact_id = self.find_contact_id(user, Some(from)).await?;
        let campaign_id = self.find_list_id(to).await?;

        let mut params = ParamMap::new();
        params.insert("contact".to_string(), json!(contact_id));
        params.insert("campaign".to_string(), json!(campaign_id));

        self.dispatcher
            .execute(self, "moveContact", Some(params), |_| true)
            .await
    }

    /// Returns the subscription lists owned by the account, one per entry of
    /// the response mapping in its iteration order. The mapping key is the
    /// provider's campaign id and is carried into the constructed list.
    pub async fn get_lists(&self) -> Result<Vec<SubscriptionList>> {
        self.dispatcher
            .execute(self, "getCampaigns", None, |response| {
                response
                    .as_object()
                    .map(|items| {
                        items
                            .iter()
                            .map(|(id, item)| {
                                SubscriptionList::new(
                                    id.as_str(),
                                    item.get("name").and_then(Value::as_str).unwrap_or_default(),
                                )
                            })
                            .collect()
                    })
                    .unwrap_or_default()
            })
            .await
    }

    async fn find_contact_id(
        &self,
        user: &User,
        list: Option<&SubscriptionList>,
    ) -> Result<String> {
        let mut params = ParamMap::new();
        params.insert("email".to_string(), json!({"EQUALS": user.email()}));
        if let Some(list) = list {
            params.insert("campaigns".to_string(), json!([list.id()]));
        }

        self.dispatcher
            .execute(self, "getContacts", Some(params), first_key)
            .await
    }

    async fn find_list_id(&self, list: &SubscriptionList) -> Result<String> {
        let mut params = ParamMap::new();
        params.insert("name".to_string(), json!({"EQUALS": list.id()}));

        self.dispatcher
            .execute(self, "getCampaigns", Some(params), first_key)
            .await
    }
}

/// First key of a response mapping. `serde_json` maps iterate in key order,
/// so "first" means the smallest key; the lookup filters are expected to
/// narrow the result to a single match, and tie-breaking beyond that is
/// arbitrary. An empty mapping yields an empty id that is passed to the next
/// call and fails there.
fn first_key(response: &Value) -> String {
    response
        .as_object()
        .and_then(|map| map.keys().next().cloned())
        .unwrap_or_default()
}

impl<T: Transport> ProviderHooks for GetResponseClient<T> {
    fn build_envelope(&self, params: Option<ParamMap>) -> RpcEnvelope {
        let mut args = vec![Value::String(self.api_key.clone())];
        if let Some(params) = params {
            args.push(Value::Object(params));
        }

        let id = self
            .rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .gen_range(100..=120);

        RpcEnvelope { id, params: args }
    }

    fn is_error(&self, response: &Value) -> bool {
        response.get("error").is_some()
    }

    fn to_error(&self, response: &Value) -> MailvanError {
        MailvanError::Provider {
            message: response["error"]["message"]
                .as_str()
                .unwrap_or_default()
                .to_string(),
            code: response["error"]["code"].clone(),
        }
    }
}
