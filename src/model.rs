//! Canonical enriched model record and its normalization from raw records.

use serde::{Deserialize, Serialize};

use crate::capabilities::{ModelCapabilities, infer_capabilities};
use crate::pricing::{ModelPricing, parse_pricing};
use crate::provider::{ModelProvider, provider_for_id};
use crate::raw::OpenRouterModel;
use crate::tier::SizeTier;

/// Context length assumed when the upstream omits one.
pub const DEFAULT_CONTEXT_LENGTH: u64 = 4_096;

/// A normalized model record, owned by a registry and immutable after
/// construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LLMModel {
    /// Upstream id, e.g. `openai/gpt-4o`.
    pub id: String,
    /// URL/key-safe form of the id, e.g. `openai-gpt-4o`.
    pub slug: String,
    /// Display name; falls back to the id when upstream omits one.
    pub name: String,
    pub provider: ModelProvider,
    pub context_length: u64,
    pub max_completion_tokens: u64,
    pub size_tier: SizeTier,
    pub pricing: ModelPricing,
    pub capabilities: ModelCapabilities,
    /// When this record was normalized (the registry's fetch time).
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Normalize one raw record. The caller has already rejected records with a
/// missing or empty id.
pub fn normalize(raw: &OpenRouterModel, updated_at: chrono::DateTime<chrono::Utc>) -> LLMModel {
    let context_length = raw.context_length.unwrap_or(DEFAULT_CONTEXT_LENGTH);
    let max_completion_tokens = raw
        .top_provider
        .as_ref()
        .and_then(|tp| tp.max_completion_tokens)
        .unwrap_or(context_length);
    let name = if raw.name.trim().is_empty() {
        raw.id.clone()
    } else {
        raw.name.clone()
    };

    LLMModel {
        id: raw.id.clone(),
        slug: slugify(&raw.id),
        name,
        provider: provider_for_id(&raw.id),
        context_length,
        max_completion_tokens,
        size_tier: SizeTier::classify(context_length),
        pricing: parse_pricing(&raw.pricing),
        capabilities: infer_capabilities(raw),
        updated_at,
    }
}

/// Deterministic slug: lowercase, runs of non-alphanumerics collapsed to a
/// single `-`, no leading/trailing dash.
pub fn slugify(id: &str) -> String {
    let mut slug = String::with_capacity(id.len());
    let mut pending_dash = false;
    for c in id.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}
