//! JSON Contract Repository - 文件系统契约存储实现
//!
//! 实现 ContractRepositoryPort trait，一份契约对应一个 `<id>.json` 文件

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::application::ports::{ContractRepositoryPort, RepositoryError};
use crate::domain::contract::{CharacterContract, ContractId};

/// 文件系统契约仓储
pub struct JsonContractRepository {
    /// 存储根目录
    base_dir: PathBuf,
}

impl JsonContractRepository {
    /// 创建新的契约仓储
    pub async fn new(base_dir: impl AsRef<Path>) -> Result<Self, RepositoryError> {
        let base_dir = base_dir.as_ref().to_path_buf();

        // 确保目录存在
        fs::create_dir_all(&base_dir)
            .await
            .map_err(|e| RepositoryError::IoError(e.to_string()))?;

        Ok(Self { base_dir })
    }

    /// 获取存储根目录
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn contract_path(&self, id: &ContractId) -> PathBuf {
        self.base_dir.join(format!("{}.json", id.as_str()))
    }
}

#[async_trait]
impl ContractRepositoryPort for JsonContractRepository {
    async fn read(&self, id: &ContractId) -> Result<Option<CharacterContract>, RepositoryError> {
        let path = self.contract_path(id);

        if !path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&path)
            .await
            .map_err(|e| RepositoryError::IoError(e.to_string()))?;

        let contract = serde_json::from_str(&raw)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;

        Ok(Some(contract))
    }

    async fn write(&self, contract: &CharacterContract) -> Result<(), RepositoryError> {
        let path = self.contract_path(&contract.id);

        let raw = serde_json::to_string_pretty(contract)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;

        fs::write(&path, raw)
            .await
            .map_err(|e| RepositoryError::IoError(e.to_string()))?;

        tracing::debug!(
            "Saved contract: id={}, path={}",
            contract.id,
            path.display()
        );

        Ok(())
    }

    async fn list_ids(&self) -> Result<Vec<ContractId>, RepositoryError> {
        let mut ids = Vec::new();

        let mut entries = fs::read_dir(&self.base_dir)
            .await
            .map_err(|e| RepositoryError::IoError(e.to_string()))?;

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| RepositoryError::IoError(e.to_string()))?
        {
            let path = entry.path();
            if !path.extension().map_or(false, |ext| ext == "json") {
                continue;
            }

            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                match ContractId::new(stem) {
                    Ok(id) => ids.push(id),
                    Err(e) => {
                        tracing::warn!(
                            "Skipping contract file with invalid id: path={}, reason={}",
                            path.display(),
                            e
                        );
                    }
                }
            }
        }

        // 目录遍历顺序不稳定，排序保证审计输出可复现
        ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));

        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    use crate::domain::contract::ContractDraft;

    fn sample_contract(id: &str) -> CharacterContract {
        CharacterContract::with_defaults(ContractDraft {
            id: id.to_string(),
            display_name: "Test Character".to_string(),
            archetype: Some("villain".to_string()),
            psych_profile: None,
            voice_requirements: None,
            forbidden_traits: Some(vec!["laughter".to_string()]),
            test_script: None,
            description: None,
            notes: None,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_write_and_read_contract() {
        let temp_dir = tempdir().unwrap();
        let repo = JsonContractRepository::new(temp_dir.path()).await.unwrap();

        let contract = sample_contract("villain_01");
        repo.write(&contract).await.unwrap();

        let loaded = repo.read(&contract.id).await.unwrap().unwrap();
        assert_eq!(loaded, contract);
    }

    #[tokio::test]
    async fn test_read_missing_returns_none() {
        let temp_dir = tempdir().unwrap();
        let repo = JsonContractRepository::new(temp_dir.path()).await.unwrap();

        let id = ContractId::new("nobody").unwrap();
        assert!(repo.read(&id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error() {
        let temp_dir = tempdir().unwrap();
        let repo = JsonContractRepository::new(temp_dir.path()).await.unwrap();

        tokio::fs::write(temp_dir.path().join("broken.json"), b"{not json")
            .await
            .unwrap();

        let id = ContractId::new("broken").unwrap();
        let result = repo.read(&id).await;
        assert!(matches!(
            result,
            Err(RepositoryError::SerializationError(_))
        ));
    }

    #[tokio::test]
    async fn test_list_ids_sorted_and_json_only() {
        let temp_dir = tempdir().unwrap();
        let repo = JsonContractRepository::new(temp_dir.path()).await.unwrap();

        repo.write(&sample_contract("zeta")).await.unwrap();
        repo.write(&sample_contract("alpha")).await.unwrap();
        tokio::fs::write(temp_dir.path().join("notes.txt"), b"ignore me")
            .await
            .unwrap();

        let ids = repo.list_ids().await.unwrap();
        let names: Vec<&str> = ids.iter().map(|id| id.as_str()).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }

    #[tokio::test]
    async fn test_write_overwrites_existing() {
        let temp_dir = tempdir().unwrap();
        let repo = JsonContractRepository::new(temp_dir.path()).await.unwrap();

        let mut contract = sample_contract("hero");
        repo.write(&contract).await.unwrap();

        contract.display_name = "Renamed Hero".to_string();
        repo.write(&contract).await.unwrap();

        let loaded = repo.read(&contract.id).await.unwrap().unwrap();
        assert_eq!(loaded.display_name, "Renamed Hero");
        assert_eq!(repo.list_ids().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_store_over_repository_degrades_on_corrupt_record() {
        use crate::application::contract_store::ContractStore;
        use std::sync::Arc;

        let temp_dir = tempdir().unwrap();
        let repo = JsonContractRepository::new(temp_dir.path()).await.unwrap();
        repo.write(&sample_contract("alpha")).await.unwrap();
        tokio::fs::write(temp_dir.path().join("broken.json"), b"{not json")
            .await
            .unwrap();

        let store = ContractStore::new(Arc::new(repo));

        // 损坏记录降级为不存在，完好记录照常加载
        assert!(store.load(&ContractId::new("broken").unwrap()).await.is_none());
        let loaded = store.load_all().await;
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id.as_str(), "alpha");
    }
}
