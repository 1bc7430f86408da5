//! Enforcement Queries - V2 架构

use crate::domain::asset::AssetId;
use crate::domain::contract::ContractId;
use crate::domain::enforcement::AcousticAnalysis;

/// 静态合规检查查询：声线画像是否满足契约
#[derive(Debug, Clone)]
pub struct CheckVoiceCompliance {
    pub contract_id: ContractId,
    pub asset_id: AssetId,
}

/// 动态合规检查查询：生成音频的声学测量是否满足契约
#[derive(Debug, Clone)]
pub struct CheckAudioCompliance {
    pub contract_id: ContractId,
    pub analysis: AcousticAnalysis,
}

/// 选型查询：在候选集合（缺省为全目录）中为契约挑选最优声线
#[derive(Debug, Clone)]
pub struct FindBestVoice {
    pub contract_id: ContractId,
    pub candidate_ids: Option<Vec<AssetId>>,
}

/// 全量审计查询：对每个契约做选型与合规检查并生成报告
#[derive(Debug, Clone)]
pub struct AuditContracts;
