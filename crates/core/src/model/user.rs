use serde::{Deserialize, Serialize};

/// The authenticated identity as reported by the backend.
///
/// Owned by the session; the UI only ever reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub email: String,
}
