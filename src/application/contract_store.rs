//! Contract Store - 契约存取服务
//!
//! 仓储端口之上的读穿缓存：命中直取，未命中回源并回填。
//! 读失败降级为"不存在"并记日志；失败从不进入缓存，
//! 修复后的记录下次读取即可生效。

use std::sync::Arc;

use dashmap::DashMap;
use thiserror::Error;

use crate::application::ports::ContractRepositoryPort;
use crate::domain::contract::{validate_structure, CharacterContract, ContractId, StructureReport};

/// 存取服务错误
///
/// 对调用方只暴露粗粒度结论，底层细节进日志
#[derive(Debug, Error)]
pub enum ContractStoreError {
    #[error("Failed to save contract: {0}")]
    SaveFailed(String),
}

/// 契约存取服务
pub struct ContractStore {
    repository: Arc<dyn ContractRepositoryPort>,
    cache: DashMap<ContractId, CharacterContract>,
}

impl ContractStore {
    pub fn new(repository: Arc<dyn ContractRepositoryPort>) -> Self {
        Self {
            repository,
            cache: DashMap::new(),
        }
    }

    /// 读取单条契约
    ///
    /// 缓存命中直接返回；未命中回源，成功后回填缓存。
    /// 仓储错误记 warn 后降级为 `None`
    pub async fn load(&self, id: &ContractId) -> Option<CharacterContract> {
        if let Some(cached) = self.cache.get(id) {
            return Some(cached.clone());
        }

        match self.repository.read(id).await {
            Ok(Some(contract)) => {
                self.cache.insert(id.clone(), contract.clone());
                Some(contract)
            }
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(contract_id = %id, error = %e, "Failed to load contract");
                None
            }
        }
    }

    /// 读取全部契约
    ///
    /// 单条失败跳过并记日志，从不整体失败
    pub async fn load_all(&self) -> Vec<CharacterContract> {
        let ids = match self.repository.list_ids().await {
            Ok(ids) => ids,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to list contracts");
                return Vec::new();
            }
        };

        let mut contracts = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(contract) = self.load(&id).await {
                contracts.push(contract);
            }
        }
        contracts
    }

    /// 保存契约，成功后刷新缓存条目
    pub async fn save(&self, contract: &CharacterContract) -> Result<(), ContractStoreError> {
        match self.repository.write(contract).await {
            Ok(()) => {
                self.cache.insert(contract.id.clone(), contract.clone());
                tracing::debug!(contract_id = %contract.id, "Contract cache refreshed");
                Ok(())
            }
            Err(e) => {
                tracing::error!(contract_id = %contract.id, error = %e, "Failed to save contract");
                Err(ContractStoreError::SaveFailed(contract.id.to_string()))
            }
        }
    }

    /// 入库前的结构校验，收集全部问题一次返回
    pub fn validate_structure(&self, candidate: &serde_json::Value) -> StructureReport {
        validate_structure(candidate)
    }

    /// 当前缓存条目数
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }
}
