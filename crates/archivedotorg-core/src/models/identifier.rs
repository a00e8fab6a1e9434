use serde::{Deserialize, Serialize};

/// Answer of the `identifierAvailable` lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifierResponse {
    pub identifier: String,
    pub success: bool,
}
