//! Analysis Source Port - 出站端口
//!
//! 外部声学测量方的抽象接口。测量值（基频、波动、语速、响度、
//! 检测特征）由外部分析器产出，本系统只按契约 id 取用

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::contract::ContractId;
use crate::domain::enforcement::AcousticAnalysis;

/// 分析源错误
#[derive(Debug, Error)]
pub enum AnalysisSourceError {
    #[error("Malformed analysis: {0}")]
    Malformed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Analysis Source Port
#[async_trait]
pub trait AnalysisSourcePort: Send + Sync {
    /// 取某契约对应样本的声学分析，无测量返回 `Ok(None)`
    async fn fetch(&self, id: &ContractId)
        -> Result<Option<AcousticAnalysis>, AnalysisSourceError>;
}
