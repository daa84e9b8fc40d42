pub mod catalog;
pub mod dispatch;

pub use crate::domain::model::{SubscriptionList, User};
pub use crate::domain::ports::{ProviderHooks, Transport};
pub use crate::utils::error::Result;
