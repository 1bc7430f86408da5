//! Contract Command Handlers - V2 架构

use std::sync::Arc;

use crate::application::commands::{CreateContract, SaveContract};
use crate::application::contract_store::ContractStore;
use crate::application::error::ApplicationError;
use crate::domain::contract::{CharacterContract, ContractDraft};

// ============================================================================
// CreateContract
// ============================================================================

/// 创建契约响应
///
/// 返回补全默认值后实际入库的契约。
#[derive(Debug, Clone)]
pub struct CreateContractResponse {
    pub contract: CharacterContract,
}

/// CreateContract Handler
pub struct CreateContractHandler {
    store: Arc<ContractStore>,
}

impl CreateContractHandler {
    pub fn new(store: Arc<ContractStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        command: CreateContract,
    ) -> Result<CreateContractResponse, ApplicationError> {
        let draft = ContractDraft {
            id: command.id,
            display_name: command.display_name,
            archetype: command.archetype,
            psych_profile: command.psych_profile,
            voice_requirements: command.voice_requirements,
            forbidden_traits: command.forbidden_traits,
            test_script: command.test_script,
            description: command.description,
            notes: command.notes,
        };

        let contract = CharacterContract::with_defaults(draft)?;

        self.store.save(&contract).await?;

        tracing::info!(
            contract_id = %contract.id,
            display_name = %contract.display_name,
            "Contract created"
        );

        Ok(CreateContractResponse { contract })
    }
}

// ============================================================================
// SaveContract
// ============================================================================

/// SaveContract Handler
pub struct SaveContractHandler {
    store: Arc<ContractStore>,
}

impl SaveContractHandler {
    pub fn new(store: Arc<ContractStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: SaveContract) -> Result<(), ApplicationError> {
        let contract = command.contract;

        self.store.save(&contract).await?;

        tracing::info!(
            contract_id = %contract.id,
            display_name = %contract.display_name,
            "Contract saved"
        );

        Ok(())
    }
}
