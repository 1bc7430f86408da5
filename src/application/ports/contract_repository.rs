//! Contract Repository Port - 出站端口
//!
//! 定义契约记录持久化的抽象接口
//! 具体实现在 infrastructure 层（如 JSON 文件仓储）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::contract::{CharacterContract, ContractId};

/// Repository 错误
///
/// 端口层区分"记录不存在"（`Ok(None)`）与"存在但不可读"（`Err`），
/// 后者分为内容损坏与底层 I/O 两类
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Contract Repository Port
///
/// 契约记录按 id 寻址，一条记录一份文档
#[async_trait]
pub trait ContractRepositoryPort: Send + Sync {
    /// 读取单条契约，不存在返回 `Ok(None)`
    async fn read(&self, id: &ContractId) -> Result<Option<CharacterContract>, RepositoryError>;

    /// 写入（新建或整体覆盖）单条契约
    async fn write(&self, contract: &CharacterContract) -> Result<(), RepositoryError>;

    /// 列出仓储中全部契约 id
    async fn list_ids(&self) -> Result<Vec<ContractId>, RepositoryError>;
}
