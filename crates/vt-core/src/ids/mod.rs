//! Identifier newtypes. Values are issued by the backend; `new()` exists for
//! locally created records and tests.

mod id_macro;

use serde::{Deserialize, Serialize};

use id_macro::impl_id;

/// Identifier of a social action.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionId(String);

/// Identifier of a notification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(String);

impl_id!(ActionId, NotificationId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_serialize_as_plain_strings() {
        let id = NotificationId::from("n-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"n-1\"");
        assert_eq!(id.to_string(), "n-1");
    }

    #[test]
    fn test_new_ids_are_unique() {
        assert_ne!(ActionId::new(), ActionId::new());
    }
}
