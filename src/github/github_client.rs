use super::response::Review;
use crate::{get, http::Error};
use anyhow::Result;
use once_cell::sync::Lazy;

pub const GITHUB_API_URL: &str = "https://api.github.com";

static CLIENT: Lazy<GithubClient> = Lazy::new(|| GithubClient);

pub fn instance() -> &'static GithubClient {
    &CLIENT
}

pub struct GithubClient;

impl GithubClient {
    pub(super) async fn pull_request_reviews(
        &self,
        base_url: &str,
        owner: &str,
        repo: &str,
        number: &str,
    ) -> Result<Vec<Review>> {
        // The number lands in the path verbatim, exactly as it was typed.
        let uri = format!(
            "{}/repos/{}/{}/pulls/{}/reviews",
            base_url, owner, repo, number
        );

        log::debug!("listing reviews from {}", uri);

        let raw = get!(&uri)?;

        let reviews = serde_json::from_str::<Vec<Review>>(&raw)
            .map_err(|cause| Error::ParseResponseError { body: raw, cause })?;

        Ok(reviews)
    }
}
