//! Enforcement Query Handlers - V2 架构

use std::sync::Arc;

use crate::application::contract_store::ContractStore;
use crate::application::error::ApplicationError;
use crate::application::ports::AnalysisSourcePort;
use crate::application::queries::{
    AuditContracts, CheckAudioCompliance, CheckVoiceCompliance, FindBestVoice,
};
use crate::domain::asset::{AssetCatalog, AssetId, VoiceAsset};
use crate::domain::contract::ContractId;
use crate::domain::enforcement::{
    find_best_voice, generate_report, generate_unmatched_report, validate_audio_for_contract,
    validate_voice_for_contract, EnforcementResult,
};

// ============================================================================
// Response DTOs
// ============================================================================

/// 选型响应
#[derive(Debug, Clone)]
pub struct BestVoiceResponse {
    pub asset: Option<VoiceAsset>,
    pub result: EnforcementResult,
}

/// 单个契约的审计结论
#[derive(Debug, Clone)]
pub struct ContractAuditOutcome {
    pub contract_id: ContractId,
    pub display_name: String,
    pub best_asset_id: Option<AssetId>,
    pub static_result: EnforcementResult,
    pub dynamic_result: Option<EnforcementResult>,
    pub report: String,
}

/// 全量审计响应
#[derive(Debug, Clone)]
pub struct AuditContractsResponse {
    pub outcomes: Vec<ContractAuditOutcome>,
}

// ============================================================================
// CheckVoiceCompliance
// ============================================================================

/// CheckVoiceCompliance Handler
pub struct CheckVoiceComplianceHandler {
    store: Arc<ContractStore>,
    catalog: Arc<AssetCatalog>,
}

impl CheckVoiceComplianceHandler {
    pub fn new(store: Arc<ContractStore>, catalog: Arc<AssetCatalog>) -> Self {
        Self { store, catalog }
    }

    pub async fn handle(
        &self,
        query: CheckVoiceCompliance,
    ) -> Result<EnforcementResult, ApplicationError> {
        let contract = self
            .store
            .load(&query.contract_id)
            .await
            .ok_or_else(|| ApplicationError::not_found("Contract", query.contract_id.as_str()))?;

        let asset = self
            .catalog
            .get(&query.asset_id)
            .ok_or_else(|| ApplicationError::not_found("Voice asset", query.asset_id.as_str()))?;

        Ok(validate_voice_for_contract(&contract, asset))
    }
}

// ============================================================================
// CheckAudioCompliance
// ============================================================================

/// CheckAudioCompliance Handler
pub struct CheckAudioComplianceHandler {
    store: Arc<ContractStore>,
}

impl CheckAudioComplianceHandler {
    pub fn new(store: Arc<ContractStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        query: CheckAudioCompliance,
    ) -> Result<EnforcementResult, ApplicationError> {
        let contract = self
            .store
            .load(&query.contract_id)
            .await
            .ok_or_else(|| ApplicationError::not_found("Contract", query.contract_id.as_str()))?;

        Ok(validate_audio_for_contract(&contract, &query.analysis))
    }
}

// ============================================================================
// FindBestVoice
// ============================================================================

/// FindBestVoice Handler
pub struct FindBestVoiceHandler {
    store: Arc<ContractStore>,
    catalog: Arc<AssetCatalog>,
}

impl FindBestVoiceHandler {
    pub fn new(store: Arc<ContractStore>, catalog: Arc<AssetCatalog>) -> Self {
        Self { store, catalog }
    }

    pub async fn handle(&self, query: FindBestVoice) -> Result<BestVoiceResponse, ApplicationError> {
        let contract = self
            .store
            .load(&query.contract_id)
            .await
            .ok_or_else(|| ApplicationError::not_found("Contract", query.contract_id.as_str()))?;

        // 未指定候选集时在整个目录中选型
        let owned;
        let candidates = match &query.candidate_ids {
            Some(ids) => {
                let mut resolved = Vec::with_capacity(ids.len());
                for id in ids {
                    let asset = self
                        .catalog
                        .get(id)
                        .ok_or_else(|| ApplicationError::not_found("Voice asset", id.as_str()))?;
                    resolved.push(asset.clone());
                }
                owned = resolved;
                owned.as_slice()
            }
            None => self.catalog.all(),
        };

        let best = find_best_voice(&contract, candidates);
        let asset = best.asset.cloned();
        let mut result = best.result;
        result.recommended_asset_id = asset.as_ref().map(|a| a.id.clone());

        match &asset {
            Some(chosen) => tracing::info!(
                contract_id = %contract.id,
                asset_id = %chosen.id,
                score = result.score,
                passed = result.passed,
                "Best voice selected"
            ),
            None => tracing::warn!(
                contract_id = %contract.id,
                "No candidate assets available"
            ),
        }

        Ok(BestVoiceResponse { asset, result })
    }
}

// ============================================================================
// AuditContracts
// ============================================================================

/// AuditContracts Handler
pub struct AuditContractsHandler {
    store: Arc<ContractStore>,
    catalog: Arc<AssetCatalog>,
    analysis_source: Arc<dyn AnalysisSourcePort>,
}

impl AuditContractsHandler {
    pub fn new(
        store: Arc<ContractStore>,
        catalog: Arc<AssetCatalog>,
        analysis_source: Arc<dyn AnalysisSourcePort>,
    ) -> Self {
        Self {
            store,
            catalog,
            analysis_source,
        }
    }

    pub async fn handle(
        &self,
        _query: AuditContracts,
    ) -> Result<AuditContractsResponse, ApplicationError> {
        let contracts = self.store.load_all().await;
        let mut outcomes = Vec::with_capacity(contracts.len());

        for contract in contracts {
            let best = find_best_voice(&contract, self.catalog.all());

            let asset = match best.asset {
                Some(asset) => asset,
                None => {
                    tracing::warn!(contract_id = %contract.id, "No candidate assets available");
                    outcomes.push(ContractAuditOutcome {
                        contract_id: contract.id.clone(),
                        display_name: contract.display_name.clone(),
                        best_asset_id: None,
                        static_result: best.result,
                        dynamic_result: None,
                        report: generate_unmatched_report(&contract),
                    });
                    continue;
                }
            };

            let mut static_result = best.result;
            static_result.recommended_asset_id = Some(asset.id.clone());

            // 声学测量缺失或拉取失败都降级为仅静态审计
            let analysis = match self.analysis_source.fetch(&contract.id).await {
                Ok(found) => found,
                Err(e) => {
                    tracing::warn!(
                        contract_id = %contract.id,
                        error = %e,
                        "Failed to fetch acoustic analysis"
                    );
                    None
                }
            };

            let dynamic_result = analysis
                .as_ref()
                .map(|measured| validate_audio_for_contract(&contract, measured));
            let report = generate_report(&contract, asset, analysis.as_ref());

            tracing::info!(
                contract_id = %contract.id,
                asset_id = %asset.id,
                static_score = static_result.score,
                static_passed = static_result.passed,
                dynamic = analysis.is_some(),
                "Contract audited"
            );

            outcomes.push(ContractAuditOutcome {
                contract_id: contract.id.clone(),
                display_name: contract.display_name.clone(),
                best_asset_id: Some(asset.id.clone()),
                static_result,
                dynamic_result,
                report,
            });
        }

        Ok(AuditContractsResponse { outcomes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::application::ports::{
        AnalysisSourceError, ContractRepositoryPort, RepositoryError,
    };
    use crate::domain::contract::{CharacterContract, ContractDraft};
    use crate::domain::enforcement::AcousticAnalysis;

    struct MemoryRepository {
        records: Mutex<HashMap<ContractId, CharacterContract>>,
    }

    impl MemoryRepository {
        fn with_contracts(contracts: Vec<CharacterContract>) -> Self {
            let mut records = HashMap::new();
            for contract in contracts {
                records.insert(contract.id.clone(), contract);
            }
            Self {
                records: Mutex::new(records),
            }
        }
    }

    #[async_trait]
    impl ContractRepositoryPort for MemoryRepository {
        async fn read(
            &self,
            id: &ContractId,
        ) -> Result<Option<CharacterContract>, RepositoryError> {
            Ok(self.records.lock().unwrap().get(id).cloned())
        }

        async fn write(&self, contract: &CharacterContract) -> Result<(), RepositoryError> {
            self.records
                .lock()
                .unwrap()
                .insert(contract.id.clone(), contract.clone());
            Ok(())
        }

        async fn list_ids(&self) -> Result<Vec<ContractId>, RepositoryError> {
            let mut ids: Vec<ContractId> =
                self.records.lock().unwrap().keys().cloned().collect();
            ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
            Ok(ids)
        }
    }

    struct FixedAnalysisSource {
        analyses: HashMap<String, AcousticAnalysis>,
        fail: bool,
    }

    #[async_trait]
    impl AnalysisSourcePort for FixedAnalysisSource {
        async fn fetch(
            &self,
            id: &ContractId,
        ) -> Result<Option<AcousticAnalysis>, AnalysisSourceError> {
            if self.fail {
                return Err(AnalysisSourceError::IoError("analysis volume offline".to_string()));
            }
            Ok(self.analyses.get(id.as_str()).cloned())
        }
    }

    fn contract(id: &str) -> CharacterContract {
        CharacterContract::with_defaults(ContractDraft {
            id: id.to_string(),
            display_name: format!("Character {}", id),
            archetype: None,
            psych_profile: None,
            voice_requirements: None,
            forbidden_traits: None,
            test_script: None,
            description: None,
            notes: None,
        })
        .unwrap()
    }

    fn store_with(contracts: Vec<CharacterContract>) -> Arc<ContractStore> {
        Arc::new(ContractStore::new(Arc::new(MemoryRepository::with_contracts(contracts))))
    }

    #[tokio::test]
    async fn test_find_best_voice_fills_recommended_id() {
        let store = store_with(vec![contract("hero")]);
        let catalog = Arc::new(AssetCatalog::builtin());
        let handler = FindBestVoiceHandler::new(store, catalog);

        let response = handler
            .handle(FindBestVoice {
                contract_id: ContractId::new("hero").unwrap(),
                candidate_ids: None,
            })
            .await
            .unwrap();

        let chosen = response.asset.expect("builtin catalog is non-empty");
        assert_eq!(response.result.recommended_asset_id, Some(chosen.id.clone()));
    }

    #[tokio::test]
    async fn test_find_best_voice_rejects_unknown_candidate() {
        let store = store_with(vec![contract("hero")]);
        let catalog = Arc::new(AssetCatalog::builtin());
        let handler = FindBestVoiceHandler::new(store, catalog);

        let result = handler
            .handle(FindBestVoice {
                contract_id: ContractId::new("hero").unwrap(),
                candidate_ids: Some(vec![AssetId::new("no_such_voice").unwrap()]),
            })
            .await;

        assert!(matches!(result, Err(ApplicationError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_check_voice_compliance_missing_contract() {
        let store = store_with(vec![]);
        let catalog = Arc::new(AssetCatalog::builtin());
        let handler = CheckVoiceComplianceHandler::new(store, catalog);

        let result = handler
            .handle(CheckVoiceCompliance {
                contract_id: ContractId::new("ghost").unwrap(),
                asset_id: AssetId::new("gemini_charon").unwrap(),
            })
            .await;

        assert!(matches!(result, Err(ApplicationError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_audit_includes_dynamic_result_when_analysis_present() {
        let store = store_with(vec![contract("hero"), contract("villain")]);
        let catalog = Arc::new(AssetCatalog::builtin());

        let mut analyses = HashMap::new();
        analyses.insert(
            "hero".to_string(),
            AcousticAnalysis {
                fundamental_freq_hz: 150.0,
                pitch_variance_hz: 20.0,
                tempo_wpm: 120.0,
                loudness: 0.05,
                detected_traits: vec![],
            },
        );
        let source = Arc::new(FixedAnalysisSource {
            analyses,
            fail: false,
        });

        let handler = AuditContractsHandler::new(store, catalog, source);
        let response = handler.handle(AuditContracts).await.unwrap();

        assert_eq!(response.outcomes.len(), 2);

        let hero = response
            .outcomes
            .iter()
            .find(|o| o.contract_id.as_str() == "hero")
            .unwrap();
        assert!(hero.best_asset_id.is_some());
        assert!(hero.dynamic_result.as_ref().unwrap().passed);
        assert!(hero.report.contains("### Dynamic Validation"));

        let villain = response
            .outcomes
            .iter()
            .find(|o| o.contract_id.as_str() == "villain")
            .unwrap();
        assert!(villain.dynamic_result.is_none());
        assert!(!villain.report.contains("### Dynamic Validation"));
    }

    #[tokio::test]
    async fn test_audit_degrades_when_analysis_source_fails() {
        let store = store_with(vec![contract("hero")]);
        let catalog = Arc::new(AssetCatalog::builtin());
        let source = Arc::new(FixedAnalysisSource {
            analyses: HashMap::new(),
            fail: true,
        });

        let handler = AuditContractsHandler::new(store, catalog, source);
        let response = handler.handle(AuditContracts).await.unwrap();

        assert_eq!(response.outcomes.len(), 1);
        assert!(response.outcomes[0].dynamic_result.is_none());
        assert!(response.outcomes[0].static_result.passed);
    }

    #[tokio::test]
    async fn test_audit_reports_contract_with_no_candidates() {
        let store = store_with(vec![contract("hero")]);
        let catalog = Arc::new(AssetCatalog::from_assets(vec![]));
        let source = Arc::new(FixedAnalysisSource {
            analyses: HashMap::new(),
            fail: false,
        });

        let handler = AuditContractsHandler::new(store, catalog, source);
        let response = handler.handle(AuditContracts).await.unwrap();

        assert_eq!(response.outcomes.len(), 1);
        let outcome = &response.outcomes[0];
        assert!(outcome.best_asset_id.is_none());
        assert!(!outcome.static_result.passed);
        // 无候选时仍要产出可渲染的小节
        assert!(outcome.report.contains("## Character: Character hero"));
        assert!(outcome.report.contains("No candidate assets available"));
    }
}
