use promptshape_core::model::{ModelInfo, Provider};

/// Wire-level model name for a catalog entry, if OpenAI serves it.
pub(crate) fn map_model(model: &ModelInfo) -> Option<&'static str> {
    (model.provider == Provider::OpenAi).then_some(model.provider_model)
}
