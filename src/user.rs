//! The user record exchanged over the API and held in the store.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A user profile as submitted by clients.
///
/// Identity is not part of the record; the store assigns ids on insert.
/// Wire field names are PascalCase (`Name`, `Age`) to match existing clients.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Display name. Required to be non-empty on create.
    #[serde(rename = "Name", default)]
    pub name: String,

    /// Age in years, if the client provided one.
    #[serde(rename = "Age", default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u64>,

    /// Any other profile fields in the payload, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
