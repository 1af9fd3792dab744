use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Status written by the batch processor.
pub const PROCESSED: &str = "PROCESSED";

lazy_static! {
    static ref EMAIL_PATTERN: Regex = Regex::new(r"^[A-Za-z0-9+_.-]+@(.+)$").unwrap();
}

/// Store-assigned identifier of an [`Item`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub i64);

/// Store counter values. Ids past `i64::MAX` saturate; the counter never gets there.
impl From<u64> for ItemId {
    fn from(raw: u64) -> Self {
        Self(i64::try_from(raw).unwrap_or(i64::MAX))
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An item record.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_store::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_store::ResourceActor).
/// `id` stays `None` until the store assigns one.
///
/// Every field is optional on the wire, so a partial JSON body still binds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    pub id: Option<ItemId>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub email: Option<String>,
}

impl Item {
    /// Creates a new, unsaved item.
    pub fn new(name: impl Into<String>, description: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            description: Some(description.into()),
            status: None,
            email: Some(email.into()),
        }
    }

    /// Marks the item as handled by the batch processor.
    pub fn mark_processed(&mut self) {
        self.status = Some(PROCESSED.to_string());
    }
}

/// Field path → message map of failed constraints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Declarative constraints checked before a record reaches the store.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

impl Validate for Item {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        // Missing or empty email is allowed
        if let Some(email) = self.email.as_deref().filter(|e| !e.is_empty()) {
            if !EMAIL_PATTERN.is_match(email) {
                errors.add("email", "Invalid email!");
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_email(email: Option<&str>) -> Item {
        Item {
            email: email.map(str::to_string),
            ..Item::default()
        }
    }

    #[test]
    fn test_email_rule() {
        for ok in ["valid@example.com", "user+test@email.gmail.com", "a.b_c-d@x"] {
            assert!(with_email(Some(ok)).validate().is_ok(), "{ok} should pass");
        }
        for bad in ["invalid-email", "@example.com", "no spaces@x.com", "user@"] {
            let errors = with_email(Some(bad)).validate().unwrap_err();
            assert_eq!(errors.get("email"), Some("Invalid email!"), "{bad} should fail");
        }
    }

    #[test]
    fn test_absent_or_empty_email_is_valid() {
        assert!(with_email(None).validate().is_ok());
        assert!(with_email(Some("")).validate().is_ok());
    }

    #[test]
    fn test_json_shape() {
        let item: Item = serde_json::from_str(r#"{"name":"Lamp","status":null}"#).unwrap();
        assert_eq!(item.id, None);
        assert_eq!(item.name.as_deref(), Some("Lamp"));

        let mut saved = item.clone();
        saved.id = Some(ItemId(7));
        saved.mark_processed();
        let json = serde_json::to_value(&saved).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["status"], "PROCESSED");
        assert!(json["email"].is_null());
    }

    #[test]
    fn test_validation_errors_serialize_as_map() {
        let mut errors = ValidationErrors::default();
        errors.add("email", "Invalid email!");
        assert_eq!(
            serde_json::to_string(&errors).unwrap(),
            r#"{"email":"Invalid email!"}"#
        );
    }
}
