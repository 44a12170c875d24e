use gloo_net::http::Request;
use thiserror::Error;

use crate::collection::CollectionMetadata;
use crate::config::AppConfig;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[source] gloo_net::Error),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("malformed body: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Classifies a finished response. Only a 2xx status with a JSON object body
/// counts as metadata.
pub fn parse_collection(status: u16, body: &str) -> Result<CollectionMetadata, FetchError> {
    if !(200..300).contains(&status) {
        return Err(FetchError::Status(status));
    }
    serde_json::from_str(body).map_err(FetchError::Decode)
}

/// Single best-effort fetch of the collection metadata. No retries.
pub async fn fetch_collection(config: &AppConfig) -> Result<CollectionMetadata, FetchError> {
    let response = Request::get(&config.collection_endpoint())
        .send()
        .await
        .map_err(FetchError::Transport)?;

    let status = response.status();
    let body = response.text().await.map_err(FetchError::Transport)?;
    parse_collection(status, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::{CollectionDetails, DEFAULT_CONTRACT_ADDRESS};

    const OBJECT_BODY: &str = r#"{ "network": "Ethereum", "contract_address": "0xabc0000000000000000000000000000000000def" }"#;

    #[test]
    fn ok_status_with_object_body_is_metadata() {
        let metadata = parse_collection(200, OBJECT_BODY).expect("object body should parse");
        assert_eq!(metadata.network.as_deref(), Some("Ethereum"));
        assert_eq!(metadata.opensea_url, None);
    }

    #[test]
    fn any_success_status_is_accepted() {
        assert!(parse_collection(203, "{}").is_ok());
    }

    #[test]
    fn array_body_is_rejected() {
        let result = parse_collection(200, r#"["Ethereum", "0xdead", "https://evil.example"]"#);
        assert!(matches!(result, Err(FetchError::Decode(_))));
    }

    #[test]
    fn html_body_is_rejected() {
        let result = parse_collection(200, "<!doctype html><html><body>Oops</body></html>");
        assert!(matches!(result, Err(FetchError::Decode(_))));
    }

    #[test]
    fn error_statuses_are_rejected_even_with_valid_json() {
        assert!(matches!(parse_collection(404, OBJECT_BODY), Err(FetchError::Status(404))));
        assert!(matches!(parse_collection(500, OBJECT_BODY), Err(FetchError::Status(500))));
        assert!(matches!(parse_collection(304, OBJECT_BODY), Err(FetchError::Status(304))));
    }

    #[test]
    fn failures_leave_every_field_at_its_default() {
        for (status, body) in [
            (500, OBJECT_BODY),
            (200, "[]"),
            (200, "not json"),
            (200, ""),
        ] {
            let metadata = parse_collection(status, body).ok();
            let details = CollectionDetails::resolve(metadata.as_ref());
            assert_eq!(details, CollectionDetails::default(), "status={status} body={body:?}");
            assert_eq!(details.contract_address, DEFAULT_CONTRACT_ADDRESS);
        }
    }
}
