use serde::Deserialize;

const APPROVED_STATE: &str = "APPROVED";

/// A single code review on a pull request, as returned by the Github API.
///
/// The API sends many more fields; only `state` matters here. A review
/// without a `state` field deserializes with an empty state and never counts
/// as an approval.
#[derive(Debug, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub state: String,
}

impl Review {
    pub fn is_approved(&self) -> bool {
        self.state == APPROVED_STATE
    }
}
