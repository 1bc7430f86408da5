//! Contract Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContractError {
    #[error("无效的契约 ID: {0}")]
    InvalidId(String),

    #[error("无效的角色名称: {0}")]
    InvalidDisplayName(String),
}
