use serde::Deserialize;
use serde_json::{Map, Value};

use crate::utils::format::shorten_address;

pub const DEFAULT_NETWORK: &str = "Polygon";
pub const DEFAULT_CONTRACT_ADDRESS: &str = "0x20a0cc3d86a6fbf803d4b448b200df3288a9104b";
pub const DEFAULT_OPENSEA_URL: &str = "https://opensea.io/collection/the-cluckers-collective";

/// Body of `GET /api/collection`. Any subset of fields may be present, but
/// the body itself must be a JSON object.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(try_from = "Map<String, Value>")]
pub struct CollectionMetadata {
    pub network: Option<String>,
    pub contract_address: Option<String>,
    pub opensea_url: Option<String>,
}

#[derive(Deserialize)]
struct MetadataFields {
    #[serde(default)]
    network: Option<String>,
    #[serde(default)]
    contract_address: Option<String>,
    #[serde(default)]
    opensea_url: Option<String>,
}

impl TryFrom<Map<String, Value>> for CollectionMetadata {
    type Error = serde_json::Error;

    fn try_from(object: Map<String, Value>) -> Result<Self, Self::Error> {
        let fields: MetadataFields = serde_json::from_value(Value::Object(object))?;
        Ok(Self {
            network: fields.network,
            contract_address: fields.contract_address,
            opensea_url: fields.opensea_url,
        })
    }
}

/// What the page actually shows: every field filled in, either from the
/// backend or from the literal defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct CollectionDetails {
    pub network: String,
    pub contract_address: String,
    pub opensea_url: String,
}

/// Blank values count as missing; anything else is shown exactly as sent.
fn present(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.trim().is_empty())
}

impl CollectionDetails {
    pub fn resolve(metadata: Option<&CollectionMetadata>) -> Self {
        let network = metadata.and_then(|m| present(m.network.as_ref()));
        let contract_address = metadata.and_then(|m| present(m.contract_address.as_ref()));
        let opensea_url = metadata.and_then(|m| present(m.opensea_url.as_ref()));

        Self {
            network: network.unwrap_or(DEFAULT_NETWORK).to_string(),
            contract_address: contract_address
                .unwrap_or(DEFAULT_CONTRACT_ADDRESS)
                .to_string(),
            opensea_url: opensea_url.unwrap_or(DEFAULT_OPENSEA_URL).to_string(),
        }
    }

    pub fn short_address(&self) -> String {
        shorten_address(&self.contract_address)
    }

    /// Block explorer page for the contract, for the networks we know about.
    pub fn explorer_url(&self) -> Option<String> {
        let base = match self.network.to_ascii_lowercase().as_str() {
            "polygon" | "matic" => "https://polygonscan.com/address/",
            "ethereum" | "mainnet" => "https://etherscan.io/address/",
            _ => return None,
        };
        Some(format!("{}{}", base, self.contract_address))
    }
}

impl Default for CollectionDetails {
    fn default() -> Self {
        Self::resolve(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(body: &str) -> Option<CollectionMetadata> {
        serde_json::from_str(body).ok()
    }

    #[test]
    fn absent_metadata_uses_every_default() {
        let details = CollectionDetails::resolve(None);
        assert_eq!(details.network, "Polygon");
        assert_eq!(
            details.contract_address,
            "0x20a0cc3d86a6fbf803d4b448b200df3288a9104b"
        );
        assert_eq!(
            details.opensea_url,
            "https://opensea.io/collection/the-cluckers-collective"
        );
    }

    #[test]
    fn partial_response_falls_back_per_field() {
        let metadata = decode(r#"{ "network": "Ethereum" }"#);
        let details = CollectionDetails::resolve(metadata.as_ref());
        assert_eq!(details.network, "Ethereum");
        assert_eq!(details.contract_address, DEFAULT_CONTRACT_ADDRESS);
        assert_eq!(details.opensea_url, DEFAULT_OPENSEA_URL);
    }

    #[test]
    fn full_response_overrides_defaults() {
        let metadata = decode(
            r#"{
                "network": "Base",
                "contract_address": "0xabc0000000000000000000000000000000000def",
                "opensea_url": "https://opensea.io/collection/cluckers-base",
                "total_supply": 5000
            }"#,
        );
        let details = CollectionDetails::resolve(metadata.as_ref());
        assert_eq!(details.network, "Base");
        assert_eq!(
            details.contract_address,
            "0xabc0000000000000000000000000000000000def"
        );
        assert_eq!(
            details.opensea_url,
            "https://opensea.io/collection/cluckers-base"
        );
    }

    #[test]
    fn null_and_blank_fields_count_as_missing() {
        let metadata = decode(r#"{ "network": null, "contract_address": "  ", "opensea_url": "" }"#);
        assert_eq!(CollectionDetails::resolve(metadata.as_ref()), CollectionDetails::default());
    }

    #[test]
    fn malformed_bodies_do_not_decode() {
        assert!(decode("<html>502 Bad Gateway</html>").is_none());
        assert!(decode(r#"["Polygon"]"#).is_none());
        assert!(decode(r#"{ "network": 137 }"#).is_none());
        assert!(decode(r#""Polygon""#).is_none());
        assert!(decode("null").is_none());
        assert_eq!(
            CollectionDetails::resolve(decode("not json").as_ref()),
            CollectionDetails::default()
        );
    }

    #[test]
    fn array_bodies_never_override_defaults() {
        let metadata = decode(r#"["Ethereum", "0xdead", "https://evil.example"]"#);
        assert!(metadata.is_none());
        assert_eq!(
            CollectionDetails::resolve(metadata.as_ref()),
            CollectionDetails::default()
        );
    }

    #[test]
    fn empty_object_is_valid_and_uses_defaults() {
        let metadata = decode("{}");
        assert_eq!(metadata, Some(CollectionMetadata::default()));
        assert_eq!(
            CollectionDetails::resolve(metadata.as_ref()),
            CollectionDetails::default()
        );
    }

    #[test]
    fn present_values_are_shown_untrimmed() {
        let metadata = decode(r#"{ "network": " Ethereum " }"#);
        let details = CollectionDetails::resolve(metadata.as_ref());
        assert_eq!(details.network, " Ethereum ");
    }

    #[test]
    fn short_address_is_display_only() {
        let details = CollectionDetails::default();
        assert_eq!(details.short_address(), "0x20a0…104b");
        assert_eq!(details.contract_address, DEFAULT_CONTRACT_ADDRESS);
    }

    #[test]
    fn explorer_follows_network() {
        let mut details = CollectionDetails::default();
        assert_eq!(
            details.explorer_url().as_deref(),
            Some("https://polygonscan.com/address/0x20a0cc3d86a6fbf803d4b448b200df3288a9104b")
        );

        details.network = "Ethereum".to_string();
        assert!(details
            .explorer_url()
            .is_some_and(|url| url.starts_with("https://etherscan.io/address/")));

        details.network = "Solana".to_string();
        assert_eq!(details.explorer_url(), None);
    }
}
