pub mod github_client;
mod handler;
mod macros;
mod response;

pub use response::Review;

use anyhow::Result;

const REPO_OWNER: &str = "golemfactory";
const REPO_NAME: &str = "golem";

/// Fetches the reviews of the given pull request and counts the approvals.
pub async fn approvals(pull_request: &str) -> Result<usize> {
    let reviews = github_client::instance()
        .repo(REPO_OWNER, REPO_NAME)
        .pull_request_reviews(pull_request)
        .await?;

    let approvals = count_approved(&reviews);

    log::debug!("{} of {} reviews are approvals", approvals, reviews.len());

    Ok(approvals)
}

pub fn count_approved(reviews: &[Review]) -> usize {
    reviews.iter().filter(|review| review.is_approved()).count()
}
