use serde::{Deserialize, Serialize};

/// A subscriber identified by display name and email address.
///
/// Immutable value object; created by the caller before any operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    name: String,
    email: String,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

/// A provider-side mailing list (campaign).
///
/// Instances returned from `get_lists` carry the provider's campaign id as
/// `id` and the display name as `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionList {
    id: String,
    name: String,
}

impl SubscriptionList {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_accessors() {
        let user = User::new("John Doe", "john@example.com");
        assert_eq!(user.name(), "John Doe");
        assert_eq!(user.email(), "john@example.com");
    }

    #[test]
    fn test_subscription_list_accessors() {
        let list = SubscriptionList::new("1045", "Newsletter");
        assert_eq!(list.id(), "1045");
        assert_eq!(list.name(), "Newsletter");
    }
}
