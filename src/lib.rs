pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::getresponse::GetResponseClient;
pub use adapters::http::HttpTransport;
pub use config::ClientConfig;
pub use domain::model::{SubscriptionList, User};
pub use utils::error::{MailvanError, Result};
