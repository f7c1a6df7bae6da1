//! Provider derivation from model id prefixes.
//!
//! OpenRouter ids are `vendor/model-slug`. The vendor prefix is matched
//! against an ordered table of known providers; unmatched prefixes fall back
//! to the `unknown` sentinel so every model still lands in `by_provider`.

use serde::{Deserialize, Serialize};

/// A model vendor, derived deterministically from the model id prefix.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelProvider {
    /// Stable provider id (the matched prefix, or `"unknown"`).
    pub id: String,
    /// Human-readable vendor name.
    pub name: String,
    /// Brand color as a hex string, for client display.
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Known providers, checked in order against the id prefix.
///
/// Longer/more specific prefixes come before shorter ones that could shadow
/// them (e.g. `meta-llama` before `meta`).
const KNOWN_PROVIDERS: &[(&str, &str, &str)] = &[
    ("openai", "OpenAI", "#10a37f"),
    ("anthropic", "Anthropic", "#d97757"),
    ("google", "Google", "#4285f4"),
    ("meta-llama", "Meta", "#0668e1"),
    ("meta", "Meta", "#0668e1"),
    ("mistralai", "Mistral AI", "#ff7000"),
    ("mistral", "Mistral AI", "#ff7000"),
    ("deepseek", "DeepSeek", "#4d6bfe"),
    ("qwen", "Qwen", "#615ced"),
    ("x-ai", "xAI", "#000000"),
    ("cohere", "Cohere", "#39594d"),
    ("microsoft", "Microsoft", "#00a4ef"),
    ("nvidia", "NVIDIA", "#76b900"),
    ("amazon", "Amazon", "#ff9900"),
    ("perplexity", "Perplexity", "#20808d"),
    ("moonshotai", "Moonshot AI", "#16191e"),
    ("minimax", "MiniMax", "#f23f5d"),
    ("ai21", "AI21 Labs", "#e91e63"),
];

const UNKNOWN_PROVIDER_ID: &str = "unknown";

/// Sentinel for vendors not in the known table.
pub fn unknown_provider() -> ModelProvider {
    ModelProvider {
        id: UNKNOWN_PROVIDER_ID.to_string(),
        name: "Unknown".to_string(),
        color: "#9ca3af".to_string(),
        icon: None,
    }
}

/// Derive the provider for a model id. Matches the `vendor/` prefix against
/// the known table in priority order; ids without a `/` or with an unknown
/// vendor get the sentinel.
pub fn provider_for_id(model_id: &str) -> ModelProvider {
    let prefix = match model_id.split_once('/') {
        Some((vendor, _)) => vendor,
        None => return unknown_provider(),
    };
    for (id, name, color) in KNOWN_PROVIDERS {
        if prefix == *id {
            return ModelProvider {
                id: (*id).to_string(),
                name: (*name).to_string(),
                color: (*color).to_string(),
                icon: None,
            };
        }
    }
    unknown_provider()
}
