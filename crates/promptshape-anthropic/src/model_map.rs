use promptshape_core::model::{ModelInfo, Provider};

pub(crate) fn map_model(model: &ModelInfo) -> Option<&'static str> {
    (model.provider == Provider::Anthropic).then_some(model.provider_model)
}
