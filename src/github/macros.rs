use reqwest::{header::USER_AGENT, RequestBuilder};

// The Github API rejects requests without a user agent.
const USER_AGENT_VALUE: &str = "build-bot";

pub trait Headers {
    fn default_headers(self) -> RequestBuilder;
}

impl Headers for RequestBuilder {
    fn default_headers(self) -> RequestBuilder {
        self.header(USER_AGENT, USER_AGENT_VALUE)
    }
}

#[macro_export]
macro_rules! get {
    ($url:expr) => {{
        use $crate::{github::macros::Headers, http::ResponseHandler};

        $crate::http::HttpClient::new()
            .get($url)
            .default_headers()
            .send()
            .await
            .handle()
            .await
    }};
}

#[cfg(test)]
mod tests {
    use crate::http::Error;
    use anyhow::Result;
    use mockito::Server;

    #[tokio::test]
    async fn get_macro() -> Result<()> {
        let mut server = Server::new_async().await;
        let url = server.url();

        let expected_body = "test_body";
        let mock = server
            .mock("GET", "/")
            .match_header("user-agent", "build-bot")
            .with_body(expected_body)
            .create_async()
            .await;

        let response = get!(&url)?;

        mock.assert_async().await;
        assert_eq!(response, expected_body);

        Ok(())
    }

    #[tokio::test]
    async fn get_macro_surfaces_the_status_code() -> Result<()> {
        let mut server = Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/")
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let err = get!(&url).expect_err("a 500 should not be handled as success");

        mock.assert_async().await;
        match err {
            Error::ResponseStatusError { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "boom");
            }
            other => panic!("unexpected error kind: {:?}", other),
        }

        Ok(())
    }

    #[tokio::test]
    async fn get_macro_reports_transport_failures() {
        // Port 1 is unassigned, the connection is refused right away.
        let err = get!("http://127.0.0.1:1/").expect_err("nothing listens on port 1");

        assert!(matches!(err, Error::RequestError { .. }));
    }
}
