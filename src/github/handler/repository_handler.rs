use crate::github::{github_client, response::Review};
use anyhow::Result;

pub struct RepositoryHandler {
    owner: String,
    repo: String,
    base_url: String,
}

impl RepositoryHandler {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        RepositoryHandler {
            owner: owner.into(),
            repo: repo.into(),
            base_url: github_client::GITHUB_API_URL.to_string(),
        }
    }

    /// Points the handler at another API host. Used by tests to talk to a
    /// local mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub async fn pull_request_reviews(&self, number: &str) -> Result<Vec<Review>> {
        github_client::instance()
            .pull_request_reviews(&self.base_url, &self.owner, &self.repo, number)
            .await
    }
}
