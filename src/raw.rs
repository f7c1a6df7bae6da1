//! Raw OpenRouter `/api/v1/models` response types.
//!
//! These mirror the upstream JSON as closely as possible and stay tolerant:
//! every field the API marks optional defaults instead of failing the whole
//! payload. Normalization into [`crate::model::LLMModel`] happens in the
//! registry builder, not here.

use serde::{Deserialize, Serialize};

/// Envelope of the models list endpoint (`{"data": [...]}`).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ModelsResponse {
    pub data: Vec<OpenRouterModel>,
}

/// A single raw model record as returned by OpenRouter.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct OpenRouterModel {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created: Option<i64>,
    #[serde(default)]
    pub context_length: Option<u64>,
    #[serde(default)]
    pub pricing: RawPricing,
    #[serde(default)]
    pub architecture: Option<RawArchitecture>,
    #[serde(default)]
    pub top_provider: Option<RawTopProvider>,
    #[serde(default)]
    pub supported_parameters: Vec<String>,
    /// Opaque upstream field; kept as-is so snapshots round-trip.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_request_limits: Option<serde_json::Value>,
}

/// Pricing as string-encoded decimals, cost per single token (per image for
/// `image`, per call for `request`).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RawPricing {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub completion: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub request: Option<String>,
}

/// Architecture metadata (modality, tokenizer, instruct style).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RawArchitecture {
    #[serde(default)]
    pub modality: Option<String>,
    #[serde(default)]
    pub tokenizer: Option<String>,
    #[serde(default)]
    pub instruct_type: Option<String>,
}

/// Per-model limits reported by the top-ranked provider for that model.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RawTopProvider {
    #[serde(default)]
    pub context_length: Option<u64>,
    #[serde(default)]
    pub max_completion_tokens: Option<u64>,
    #[serde(default)]
    pub is_moderated: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_full_record() {
        let json = r#"{
            "id": "openai/gpt-4o",
            "name": "OpenAI: GPT-4o",
            "context_length": 128000,
            "pricing": {"prompt": "0.000005", "completion": "0.000015"},
            "architecture": {"modality": "text+image->text", "instruct_type": "chatml"},
            "top_provider": {"max_completion_tokens": 16384, "is_moderated": true},
            "supported_parameters": ["tools", "temperature"]
        }"#;
        let m: OpenRouterModel = serde_json::from_str(json).expect("valid record");
        assert_eq!(m.id, "openai/gpt-4o");
        assert_eq!(m.context_length, Some(128000));
        assert_eq!(m.pricing.prompt.as_deref(), Some("0.000005"));
        assert_eq!(
            m.architecture.unwrap().modality.as_deref(),
            Some("text+image->text")
        );
        assert_eq!(m.top_provider.unwrap().max_completion_tokens, Some(16384));
    }

    #[test]
    fn deserialize_minimal_record_defaults_optionals() {
        let m: OpenRouterModel = serde_json::from_str(r#"{"id": "foo/bar"}"#).expect("minimal");
        assert_eq!(m.id, "foo/bar");
        assert!(m.name.is_empty());
        assert!(m.context_length.is_none());
        assert!(m.pricing.prompt.is_none());
        assert!(m.architecture.is_none());
        assert!(m.supported_parameters.is_empty());
    }

    #[test]
    fn deserialize_models_envelope() {
        let json = r#"{"data": [{"id": "a/b"}, {"id": "c/d"}]}"#;
        let resp: ModelsResponse = serde_json::from_str(json).expect("envelope");
        assert_eq!(resp.data.len(), 2);
    }
}
