//! # llm-registry
//!
//! Client-side registry of LLM models built from OpenRouter-shaped metadata:
//! raw records are normalized into enriched [`LLMModel`] records (provider
//! derivation, pricing parsing, size-tier classification, capability
//! inference), assembled into an immutable indexed [`ModelRegistry`], and
//! queried with [`ModelQueryOptions`].
//!
//! Fetching and persistence are left to the caller; this crate only shapes
//! the data. A typical refresh loop deserializes the models endpoint into
//! [`raw::ModelsResponse`], builds a registry, and publishes it through a
//! [`SharedRegistry`]:
//!
//! ```
//! use llm_registry::{ModelQueryOptions, RegistrySource, SortBy, SortOrder, build_registry, query_models};
//!
//! let payload = r#"{"data": [
//!     {"id": "openai/gpt-4o", "context_length": 128000,
//!      "pricing": {"prompt": "0.000005", "completion": "0.000015"}}
//! ]}"#;
//! let response: llm_registry::raw::ModelsResponse = serde_json::from_str(payload)?;
//! let registry = build_registry(&response.data, RegistrySource::Api)?;
//!
//! let options = ModelQueryOptions {
//!     sort_by: Some(SortBy::Context),
//!     sort_order: SortOrder::Desc,
//!     ..Default::default()
//! };
//! let models = query_models(&registry, &options);
//! assert_eq!(models[0].id, "openai/gpt-4o");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod capabilities;
pub mod error;
pub mod model;
pub mod pricing;
pub mod provider;
pub mod query;
pub mod raw;
pub mod registry;
pub mod shared;
pub mod tier;

pub use capabilities::{Modality, ModelCapabilities};
pub use error::BuildError;
pub use model::LLMModel;
pub use pricing::ModelPricing;
pub use provider::ModelProvider;
pub use query::{ModelQueryOptions, SortBy, SortOrder, query_models};
pub use raw::OpenRouterModel;
pub use registry::{ModelRegistry, RegistryMetadata, RegistrySource, build_registry};
pub use shared::SharedRegistry;
pub use tier::SizeTier;
