mod github;
mod http;
mod logger;

use anyhow::Result;
use clap::Parser;

/// Counts the approved reviews on a golemfactory/golem pull request.
#[derive(Parser, Debug)]
#[command(name = "approvalcounter", version, about)]
struct Args {
    /// Number of the pull request to inspect
    pull_request: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    logger::init()?;

    let args = Args::parse();

    log::debug!("checking approvals on pull request {}", args.pull_request);

    match github::approvals(&args.pull_request).await {
        Ok(approvals) => println!("{}", approvals),
        Err(err) => {
            // A body that was not JSON is still echoed before the error.
            if let Some(http::Error::ParseResponseError { body, .. }) =
                err.downcast_ref::<http::Error>()
            {
                println!("{}", body);
            }
            return Err(err);
        }
    }

    Ok(())
}
