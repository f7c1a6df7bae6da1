//! Capability inference from raw architecture metadata.

use serde::{Deserialize, Serialize};

use crate::raw::OpenRouterModel;

/// Input/output modality of a model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    Text,
    Image,
    Multimodal,
}

impl Default for Modality {
    fn default() -> Self {
        Modality::Text
    }
}

/// Feature flags inferred for a model.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelCapabilities {
    pub supports_images: bool,
    pub supports_tools: bool,
    pub supports_streaming: bool,
    pub is_moderated: bool,
    pub modality: Modality,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instruct_type: Option<String>,
}

/// Infer capabilities from a raw record.
///
/// Modality comes from `architecture.modality` (e.g. `"text->text"`,
/// `"text+image->text"`), defaulting to text when absent. `supports_images`
/// is kept consistent with the modality: image or multimodal implies true.
pub fn infer_capabilities(raw: &OpenRouterModel) -> ModelCapabilities {
    let modality = raw
        .architecture
        .as_ref()
        .and_then(|a| a.modality.as_deref())
        .map(parse_modality)
        .unwrap_or_default();

    let supports_tools = raw
        .supported_parameters
        .iter()
        .any(|p| p == "tools" || p == "tool_choice");

    let is_moderated = raw
        .top_provider
        .as_ref()
        .and_then(|tp| tp.is_moderated)
        .unwrap_or(false);

    let instruct_type = raw
        .architecture
        .as_ref()
        .and_then(|a| a.instruct_type.clone());

    ModelCapabilities {
        supports_images: modality != Modality::Text,
        supports_tools,
        // All chat-completion models on the platform stream.
        supports_streaming: true,
        is_moderated,
        modality,
        instruct_type,
    }
}

/// Map an upstream modality string to our enum.
///
/// Upstream uses arrow notation; anything mentioning both text and image is
/// multimodal, image alone is image, everything else is text.
fn parse_modality(s: &str) -> Modality {
    let s = s.to_lowercase();
    let inputs = s.split("->").next().unwrap_or(&s);
    let has_image = inputs.contains("image");
    let has_text = inputs.contains("text");
    match (has_text, has_image) {
        (true, true) => Modality::Multimodal,
        (false, true) => Modality::Image,
        _ => Modality::Text,
    }
}
