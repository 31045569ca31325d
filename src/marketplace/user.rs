use serde::{Deserialize, Serialize};

/// A marketplace user as held by the backend-of-record.
///
/// The `id` is a string because accounts are keyed by the identity
/// provider's subject id, not by a database integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub full_name: String,
    pub avatar_url: String,
}
