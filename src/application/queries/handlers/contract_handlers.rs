//! Contract Query Handlers - V2 架构

use std::sync::Arc;

use crate::application::contract_store::ContractStore;
use crate::application::error::ApplicationError;
use crate::application::queries::{GetContract, ListContracts};
use crate::domain::contract::CharacterContract;

// ============================================================================
// Handlers
// ============================================================================

/// GetContract Handler
pub struct GetContractHandler {
    store: Arc<ContractStore>,
}

impl GetContractHandler {
    pub fn new(store: Arc<ContractStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetContract) -> Result<CharacterContract, ApplicationError> {
        self.store
            .load(&query.id)
            .await
            .ok_or_else(|| ApplicationError::not_found("Contract", query.id.as_str()))
    }
}

/// ListContracts Handler
pub struct ListContractsHandler {
    store: Arc<ContractStore>,
}

impl ListContractsHandler {
    pub fn new(store: Arc<ContractStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        _query: ListContracts,
    ) -> Result<Vec<CharacterContract>, ApplicationError> {
        Ok(self.store.load_all().await)
    }
}
