//! Immutable registry snapshots and the builder that produces them.
//!
//! A registry is built wholesale from one upstream batch and never mutated:
//! a refresh builds a brand-new registry. The three indices are pure derived
//! views over the flat model list; every indexed entry is the same `Arc` as
//! the flat-list entry.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::BuildError;
use crate::model::{LLMModel, normalize};
use crate::raw::OpenRouterModel;
use crate::tier::SizeTier;

/// Registry schema version, bumped on breaking shape changes.
pub const REGISTRY_VERSION: u32 = 1;

/// How long a freshly built registry is considered current.
const REGISTRY_TTL_SECS: i64 = 24 * 60 * 60;

/// Where a registry's data came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrySource {
    /// Live API fetch.
    Api,
    /// Rehydrated from a persisted snapshot.
    Snapshot,
    /// Built-in fallback dataset.
    Fallback,
}

impl RegistrySource {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistrySource::Api => "api",
            RegistrySource::Snapshot => "snapshot",
            RegistrySource::Fallback => "fallback",
        }
    }
}

impl std::fmt::Display for RegistrySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Provenance of one registry snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryMetadata {
    pub version: u32,
    pub fetched_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub model_count: usize,
    pub source: RegistrySource,
}

/// Immutable snapshot of all known models plus derived lookup indices.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "RegistrySnapshot", into = "RegistrySnapshot")]
pub struct ModelRegistry {
    pub metadata: RegistryMetadata,
    /// Flat list in upstream order. Owns the models; the indices share them.
    pub models: Vec<Arc<LLMModel>>,
    pub by_id: HashMap<String, Arc<LLMModel>>,
    pub by_provider: HashMap<String, Vec<Arc<LLMModel>>>,
    pub by_tier: HashMap<SizeTier, Vec<Arc<LLMModel>>>,
}

/// Build a registry from one raw batch.
///
/// Records with a missing or empty id are skipped and logged; malformed
/// pricing is zeroed and flagged by the normalizer. A batch with zero usable
/// records fails with [`BuildError::EmptyUpstream`] since an empty feed
/// usually means an upstream outage, not an empty catalog.
pub fn build_registry(
    records: &[OpenRouterModel],
    source: RegistrySource,
) -> Result<ModelRegistry, BuildError> {
    let fetched_at = Utc::now();
    let mut models: Vec<Arc<LLMModel>> = Vec::with_capacity(records.len());
    let mut rejected = 0usize;

    for raw in records {
        if raw.id.trim().is_empty() {
            log::warn!("skipping model record with missing id");
            rejected += 1;
            continue;
        }
        let model = normalize(raw, fetched_at);
        if model.pricing.malformed {
            log::warn!("malformed pricing for {}, substituted zero", model.id);
        }
        models.push(Arc::new(model));
    }

    if models.is_empty() {
        return Err(BuildError::EmptyUpstream {
            feed: source,
            rejected,
        });
    }

    log::debug!(
        "built {} registry with {} models ({} rejected)",
        source,
        models.len(),
        rejected
    );

    let metadata = RegistryMetadata {
        version: REGISTRY_VERSION,
        fetched_at,
        expires_at: fetched_at + Duration::seconds(REGISTRY_TTL_SECS),
        model_count: models.len(),
        source,
    };

    Ok(ModelRegistry {
        metadata,
        by_id: index_by_id(&models),
        by_provider: index_by_provider(&models),
        by_tier: index_by_tier(&models),
        models,
    })
}

impl ModelRegistry {
    /// Look up a model by upstream id.
    pub fn get(&self, id: &str) -> Option<&Arc<LLMModel>> {
        self.by_id.get(id)
    }

    /// All models, in upstream order.
    pub fn models(&self) -> &[Arc<LLMModel>] {
        &self.models
    }

    /// Models for one provider id, in upstream order. Empty if unknown.
    pub fn models_for_provider(&self, provider_id: &str) -> &[Arc<LLMModel>] {
        self.by_provider
            .get(provider_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Models in one size tier, in upstream order.
    pub fn models_for_tier(&self, tier: SizeTier) -> &[Arc<LLMModel>] {
        self.by_tier.get(&tier).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Whether the snapshot has outlived its TTL at the given instant.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.metadata.expires_at
    }
}

/// Derive the id index from a flat list.
pub fn index_by_id(models: &[Arc<LLMModel>]) -> HashMap<String, Arc<LLMModel>> {
    let mut index = HashMap::with_capacity(models.len());
    for model in models {
        index.insert(model.id.clone(), Arc::clone(model));
    }
    index
}

/// Derive the provider index from a flat list, preserving list order.
pub fn index_by_provider(models: &[Arc<LLMModel>]) -> HashMap<String, Vec<Arc<LLMModel>>> {
    let mut index: HashMap<String, Vec<Arc<LLMModel>>> = HashMap::new();
    for model in models {
        index
            .entry(model.provider.id.clone())
            .or_default()
            .push(Arc::clone(model));
    }
    index
}

/// Derive the tier index from a flat list, preserving list order.
pub fn index_by_tier(models: &[Arc<LLMModel>]) -> HashMap<SizeTier, Vec<Arc<LLMModel>>> {
    let mut index: HashMap<SizeTier, Vec<Arc<LLMModel>>> = HashMap::new();
    for model in models {
        index
            .entry(model.size_tier)
            .or_default()
            .push(Arc::clone(model));
    }
    index
}

/// Persistable form of a registry: metadata plus the flat list. Indices are
/// derived, so they are rebuilt on rehydration instead of being stored.
#[derive(Serialize, Deserialize)]
struct RegistrySnapshot {
    metadata: RegistryMetadata,
    models: Vec<Arc<LLMModel>>,
}

impl From<RegistrySnapshot> for ModelRegistry {
    fn from(s: RegistrySnapshot) -> Self {
        ModelRegistry {
            metadata: s.metadata,
            by_id: index_by_id(&s.models),
            by_provider: index_by_provider(&s.models),
            by_tier: index_by_tier(&s.models),
            models: s.models,
        }
    }
}

impl From<ModelRegistry> for RegistrySnapshot {
    fn from(r: ModelRegistry) -> Self {
        RegistrySnapshot {
            metadata: r.metadata,
            models: r.models,
        }
    }
}
