use serde::{Deserialize, Serialize};
use crate::config::constants::KNOWN_MODELS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub id: String,
    pub description: String,
}

/// Static list served by `GET /models`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelCatalog {
    pub default_model: String,
    pub models: Vec<ModelInfo>,
}

impl ModelCatalog {
    pub fn known(default_model: &str) -> Self {
        Self {
            default_model: default_model.to_string(),
            models: KNOWN_MODELS
                .iter()
                .map(|(id, description)| ModelInfo {
                    id: id.to_string(),
                    description: description.to_string(),
                })
                .collect(),
        }
    }

    pub fn contains(&self, model_id: &str) -> bool {
        self.models.iter().any(|m| m.id == model_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lists_default_model() {
        let catalog = ModelCatalog::known("gemini-2.0-flash-001");
        assert!(catalog.contains("gemini-2.0-flash-001"));
        assert!(catalog.contains("gemini-1.5-pro-001"));
        assert!(!catalog.contains("gpt-4o"));
    }
}
