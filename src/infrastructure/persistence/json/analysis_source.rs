//! JSON Analysis Source - 文件系统声学测量读取实现
//!
//! 实现 AnalysisSourcePort trait，按 `<契约 id>.json` 读取外部分析器
//! 落盘的声学测量结果

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::application::ports::{AnalysisSourceError, AnalysisSourcePort};
use crate::domain::contract::ContractId;
use crate::domain::enforcement::AcousticAnalysis;

/// 文件系统声学测量来源
///
/// 目录由外部分析器写入，可能尚不存在，此时一律视为无测量。
pub struct JsonAnalysisSource {
    base_dir: PathBuf,
}

impl JsonAnalysisSource {
    /// 创建新的测量来源
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    fn analysis_path(&self, id: &ContractId) -> PathBuf {
        self.base_dir.join(format!("{}.json", id.as_str()))
    }
}

#[async_trait]
impl AnalysisSourcePort for JsonAnalysisSource {
    async fn fetch(
        &self,
        id: &ContractId,
    ) -> Result<Option<AcousticAnalysis>, AnalysisSourceError> {
        let path = self.analysis_path(id);

        if !path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&path)
            .await
            .map_err(|e| AnalysisSourceError::IoError(e.to_string()))?;

        let analysis = serde_json::from_str(&raw)
            .map_err(|e| AnalysisSourceError::Malformed(e.to_string()))?;

        Ok(Some(analysis))
    }
}
