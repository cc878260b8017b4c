//! HTTP client for the Azure Resource Manager endpoint.

use reqwest::Response;

use crate::error::ArmvError;

/// Base URL of the Azure Resource Manager endpoint.
pub const MANAGEMENT_ENDPOINT: &str = "https://management.azure.com";

/// ARM api-version used for every management call.
pub const API_VERSION: &str = "2021-04-01";

/// A bearer-authenticated client for one validation run.
///
/// Owned per run and passed explicitly; there is no shared package-level
/// client handle.
pub struct ArmClient {
    http: reqwest::Client,
    bearer: String,
}

impl ArmClient {
    /// Build a client around an already acquired bearer token.
    pub fn new(bearer: String) -> Result<Self, ArmvError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|source| ArmvError::Transport {
                stage: "client setup",
                source,
            })?;
        Ok(ArmClient { http, bearer })
    }

    /// GET a management URL, tagging transport failures with the calling stage.
    pub(crate) async fn get(&self, stage: &'static str, url: &str) -> Result<Response, ArmvError> {
        log::debug!("{stage}: GET {url}");
        self.http
            .get(url)
            .bearer_auth(&self.bearer)
            .send()
            .await
            .map_err(|source| ArmvError::Transport { stage, source })
    }

    /// HEAD a management URL.
    pub(crate) async fn head(&self, stage: &'static str, url: &str) -> Result<Response, ArmvError> {
        log::debug!("{stage}: HEAD {url}");
        self.http
            .head(url)
            .bearer_auth(&self.bearer)
            .send()
            .await
            .map_err(|source| ArmvError::Transport { stage, source })
    }

    /// POST a JSON body to a management URL.
    pub(crate) async fn post_json<B: serde::Serialize>(
        &self,
        stage: &'static str,
        url: &str,
        body: &B,
    ) -> Result<Response, ArmvError> {
        log::debug!("{stage}: POST {url}");
        self.http
            .post(url)
            .bearer_auth(&self.bearer)
            .json(body)
            .send()
            .await
            .map_err(|source| ArmvError::Transport { stage, source })
    }
}

/// Parse a JSON response body, reporting the failing path on error.
pub(crate) fn parse_json<T: serde::de::DeserializeOwned>(
    stage: &'static str,
    body: &str,
) -> Result<T, ArmvError> {
    let mut deserializer = serde_json::Deserializer::from_str(body);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        log::error!("{stage}: unparseable body:\n{body}");
        ArmvError::Api {
            stage,
            detail: format!("error parsing JSON: path={} error={}", e.path(), e),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize, Debug)]
    struct Sample {
        id: String,
    }

    #[test]
    fn test_parse_json_ok() {
        let sample: Sample = parse_json("test", r#"{"id":"/subscriptions/x"}"#)
            .expect("Valid JSON should parse");
        assert_eq!(sample.id, "/subscriptions/x");
    }

    #[test]
    fn test_parse_json_reports_path() {
        let err = parse_json::<Sample>("test", r#"{"id":42}"#)
            .expect_err("Wrong type should fail to parse");
        assert!(
            err.to_string().contains("path=id"),
            "Error should name the failing path: {err}"
        );
    }
}
