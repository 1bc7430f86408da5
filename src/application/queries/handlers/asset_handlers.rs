//! Asset Query Handlers - V2 架构

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::queries::{FindAssets, GetAsset};
use crate::domain::asset::{AssetCatalog, VoiceAsset};

// ============================================================================
// Handlers
// ============================================================================

/// GetAsset Handler
pub struct GetAssetHandler {
    catalog: Arc<AssetCatalog>,
}

impl GetAssetHandler {
    pub fn new(catalog: Arc<AssetCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, query: GetAsset) -> Result<VoiceAsset, ApplicationError> {
        self.catalog
            .get(&query.id)
            .cloned()
            .ok_or_else(|| ApplicationError::not_found("Voice asset", query.id.as_str()))
    }
}

/// FindAssets Handler
pub struct FindAssetsHandler {
    catalog: Arc<AssetCatalog>,
}

impl FindAssetsHandler {
    pub fn new(catalog: Arc<AssetCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, query: FindAssets) -> Result<Vec<VoiceAsset>, ApplicationError> {
        let assets = self
            .catalog
            .find_by_query(&query.query)
            .into_iter()
            .cloned()
            .collect();

        Ok(assets)
    }
}
