//! Pricing normalization.
//!
//! OpenRouter reports prices as decimal strings of USD per single token
//! (e.g. `"0.000005"` = $5 per million tokens). We convert to per-million
//! floats since that is the unit every client actually displays.

use serde::{Deserialize, Serialize};

use crate::raw::RawPricing;

const TOKENS_PER_MILLION: f64 = 1_000_000.0;

/// Normalized cost figures for a model.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelPricing {
    /// USD per million prompt tokens.
    pub prompt_per_million: f64,
    /// USD per million completion tokens.
    pub completion_per_million: f64,
    /// USD per image, when the model prices image inputs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_per_image: Option<f64>,
    /// True iff both per-million rates are exactly zero.
    pub is_free: bool,
    /// True when an upstream pricing string failed to parse and zero was
    /// substituted. `is_free` should not be trusted for such records.
    #[serde(default)]
    pub malformed: bool,
}

/// Parse raw pricing strings into per-million rates.
///
/// A missing field counts as zero (the API omits fields for free models).
/// A present but non-numeric or negative field is malformed: the rate is
/// zeroed and the record is flagged so the batch can continue.
pub fn parse_pricing(raw: &RawPricing) -> ModelPricing {
    let mut malformed = false;
    let mut per_million = |s: &Option<String>| -> f64 {
        match s.as_deref() {
            None => 0.0,
            Some(s) => match s.trim().parse::<f64>() {
                Ok(v) if v >= 0.0 && v.is_finite() => v * TOKENS_PER_MILLION,
                _ => {
                    malformed = true;
                    0.0
                }
            },
        }
    };

    let prompt_per_million = per_million(&raw.prompt);
    let completion_per_million = per_million(&raw.completion);

    // Image price is already per image, not per token.
    let image_per_image = match raw.image.as_deref() {
        None => None,
        Some(s) => match s.trim().parse::<f64>() {
            Ok(v) if v >= 0.0 && v.is_finite() => Some(v),
            _ => {
                malformed = true;
                None
            }
        },
    };

    ModelPricing {
        prompt_per_million,
        completion_per_million,
        image_per_image,
        is_free: prompt_per_million == 0.0 && completion_per_million == 0.0,
        malformed,
    }
}
