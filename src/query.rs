//! Filtering and sorting over a registry.
//!
//! Filters AND across fields and OR within multi-valued fields. Querying
//! never errors: contradictory options just produce an empty result.

use std::cmp::Ordering;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::model::LLMModel;
use crate::registry::ModelRegistry;
use crate::tier::SizeTier;

/// Comparison key for sorting query results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    Context,
    Price,
    Name,
    Provider,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Query options. All filters are optional; an empty set of options returns
/// every model in upstream order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ModelQueryOptions {
    /// Provider ids to include (OR within the list).
    #[serde(default)]
    pub providers: Vec<String>,
    /// Size tiers to include (OR within the list).
    #[serde(default)]
    pub tiers: Vec<SizeTier>,
    /// Inclusive lower bound on context length.
    #[serde(default)]
    pub min_context: Option<u64>,
    /// Inclusive upper bound on context length.
    #[serde(default)]
    pub max_context: Option<u64>,
    #[serde(default)]
    pub free_only: bool,
    #[serde(default)]
    pub require_tools: bool,
    #[serde(default)]
    pub require_images: bool,
    /// Case-insensitive substring match over name and id.
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub sort_by: Option<SortBy>,
    #[serde(default)]
    pub sort_order: SortOrder,
    /// Truncates the result after filtering and sorting.
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Run a query. Deterministic and idempotent for a given registry and
/// options; the result is an owned, restartable sequence.
pub fn query_models(registry: &ModelRegistry, options: &ModelQueryOptions) -> Vec<Arc<LLMModel>> {
    let search = options.search.as_deref().map(str::to_lowercase);

    let mut results: Vec<Arc<LLMModel>> = registry
        .models()
        .iter()
        .filter(|m| matches(m, options, search.as_deref()))
        .cloned()
        .collect();

    if let Some(sort_by) = options.sort_by {
        results.sort_by(|a, b| compare(a, b, sort_by, options.sort_order));
    }

    if let Some(limit) = options.limit {
        results.truncate(limit);
    }
    results
}

fn matches(model: &LLMModel, options: &ModelQueryOptions, search: Option<&str>) -> bool {
    if !options.providers.is_empty()
        && !options.providers.iter().any(|p| *p == model.provider.id)
    {
        return false;
    }
    if !options.tiers.is_empty() && !options.tiers.contains(&model.size_tier) {
        return false;
    }
    if let Some(min) = options.min_context
        && model.context_length < min
    {
        return false;
    }
    if let Some(max) = options.max_context
        && model.context_length > max
    {
        return false;
    }
    if options.free_only && !model.pricing.is_free {
        return false;
    }
    if options.require_tools && !model.capabilities.supports_tools {
        return false;
    }
    if options.require_images && !model.capabilities.supports_images {
        return false;
    }
    if let Some(q) = search
        && !q.is_empty()
        && !model.name.to_lowercase().contains(q)
        && !model.id.to_lowercase().contains(q)
    {
        return false;
    }
    true
}

/// Compare on the selected key, reversing only the primary key for
/// descending order; ties always break by id ascending for determinism.
fn compare(a: &LLMModel, b: &LLMModel, sort_by: SortBy, order: SortOrder) -> Ordering {
    let primary = match sort_by {
        SortBy::Context => a.context_length.cmp(&b.context_length),
        SortBy::Price => a
            .pricing
            .prompt_per_million
            .total_cmp(&b.pricing.prompt_per_million),
        SortBy::Name => a.name.cmp(&b.name),
        SortBy::Provider => a.provider.name.cmp(&b.provider.name),
    };
    let primary = match order {
        SortOrder::Asc => primary,
        SortOrder::Desc => primary.reverse(),
    };
    primary.then_with(|| a.id.cmp(&b.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::{OpenRouterModel, RawPricing};
    use crate::registry::{RegistrySource, build_registry};

    fn raw(id: &str, context_length: u64, prompt: &str, completion: &str) -> OpenRouterModel {
        OpenRouterModel {
            id: id.to_string(),
            context_length: Some(context_length),
            pricing: RawPricing {
                prompt: Some(prompt.to_string()),
                completion: Some(completion.to_string()),
                image: None,
                request: None,
            },
            ..Default::default()
        }
    }

    fn sample_registry() -> ModelRegistry {
        let batch = vec![
            raw("openai/gpt-4o", 128_000, "0.000005", "0.000015"),
            raw("meta/llama-3-8b", 8_192, "0", "0"),
            raw("anthropic/claude-sonnet", 200_000, "0.000003", "0.000015"),
            raw("mistralai/mistral-small", 32_000, "0.000001", "0.000003"),
        ];
        build_registry(&batch, RegistrySource::Api).expect("build")
    }

    fn ids(models: &[Arc<LLMModel>]) -> Vec<&str> {
        models.iter().map(|m| m.id.as_str()).collect()
    }

    #[test]
    fn no_options_returns_everything_in_upstream_order() {
        let registry = sample_registry();
        let out = query_models(&registry, &ModelQueryOptions::default());
        assert_eq!(out.len(), 4);
        assert_eq!(ids(&out)[0], "openai/gpt-4o");
    }

    #[test]
    fn provider_filter_is_or_within_field() {
        let registry = sample_registry();
        let out = query_models(
            &registry,
            &ModelQueryOptions {
                providers: vec!["openai".to_string(), "meta".to_string()],
                ..Default::default()
            },
        );
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn context_bounds_are_inclusive() {
        let registry = sample_registry();
        let out = query_models(
            &registry,
            &ModelQueryOptions {
                min_context: Some(8_192),
                max_context: Some(128_000),
                ..Default::default()
            },
        );
        assert_eq!(
            ids(&out),
            vec!["openai/gpt-4o", "meta/llama-3-8b", "mistralai/mistral-small"]
        );
    }

    #[test]
    fn contradictory_bounds_yield_empty_not_error() {
        let registry = sample_registry();
        let out = query_models(
            &registry,
            &ModelQueryOptions {
                min_context: Some(100_000),
                max_context: Some(10_000),
                ..Default::default()
            },
        );
        assert!(out.is_empty());
    }

    #[test]
    fn search_matches_name_and_id_case_insensitive() {
        let registry = sample_registry();
        let out = query_models(
            &registry,
            &ModelQueryOptions {
                search: Some("CLAUDE".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(ids(&out), vec!["anthropic/claude-sonnet"]);
    }

    #[test]
    fn free_only_filter() {
        let registry = sample_registry();
        let out = query_models(
            &registry,
            &ModelQueryOptions {
                free_only: true,
                ..Default::default()
            },
        );
        assert_eq!(ids(&out), vec!["meta/llama-3-8b"]);
    }

    #[test]
    fn tier_filter() {
        let registry = sample_registry();
        let out = query_models(
            &registry,
            &ModelQueryOptions {
                tiers: vec![SizeTier::Tiny, SizeTier::Small],
                ..Default::default()
            },
        );
        assert_eq!(ids(&out), vec!["meta/llama-3-8b", "mistralai/mistral-small"]);
    }

    #[test]
    fn sort_by_context_desc_with_id_tiebreak() {
        let registry = sample_registry();
        let out = query_models(
            &registry,
            &ModelQueryOptions {
                sort_by: Some(SortBy::Context),
                sort_order: SortOrder::Desc,
                ..Default::default()
            },
        );
        assert_eq!(
            ids(&out),
            vec![
                "anthropic/claude-sonnet",
                "openai/gpt-4o",
                "mistralai/mistral-small",
                "meta/llama-3-8b"
            ]
        );
    }

    #[test]
    fn sort_by_price_asc() {
        let registry = sample_registry();
        let out = query_models(
            &registry,
            &ModelQueryOptions {
                sort_by: Some(SortBy::Price),
                ..Default::default()
            },
        );
        assert_eq!(ids(&out)[0], "meta/llama-3-8b");
        assert_eq!(*ids(&out).last().unwrap(), "openai/gpt-4o");
    }

    #[test]
    fn ties_break_by_id_ascending_even_when_descending() {
        let batch = vec![
            raw("b/model", 1_000, "0", "0"),
            raw("a/model", 1_000, "0", "0"),
        ];
        let registry = build_registry(&batch, RegistrySource::Api).expect("build");
        let out = query_models(
            &registry,
            &ModelQueryOptions {
                sort_by: Some(SortBy::Context),
                sort_order: SortOrder::Desc,
                ..Default::default()
            },
        );
        assert_eq!(ids(&out), vec!["a/model", "b/model"]);
    }

    #[test]
    fn limit_truncates_after_sorting() {
        let registry = sample_registry();
        let out = query_models(
            &registry,
            &ModelQueryOptions {
                providers: vec!["openai".to_string(), "meta".to_string()],
                min_context: Some(10_000),
                sort_by: Some(SortBy::Context),
                sort_order: SortOrder::Desc,
                limit: Some(1),
                ..Default::default()
            },
        );
        // meta/llama-3-8b is excluded by min_context, so only gpt-4o remains
        assert_eq!(ids(&out), vec!["openai/gpt-4o"]);
    }

    #[test]
    fn querying_is_idempotent() {
        let registry = sample_registry();
        let options = ModelQueryOptions {
            sort_by: Some(SortBy::Name),
            limit: Some(3),
            ..Default::default()
        };
        let first = query_models(&registry, &options);
        let second = query_models(&registry, &options);
        assert_eq!(ids(&first), ids(&second));
    }
}
