//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 仓储错误
    #[error("Repository error: {0}")]
    RepositoryError(String),

    /// 存储错误
    #[error("Storage error: {0}")]
    StorageError(String),

    /// 外部服务错误
    #[error("External service error: {0}")]
    ExternalServiceError(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type,
            id: id.into(),
        }
    }

    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }
}

impl From<crate::application::ports::RepositoryError> for ApplicationError {
    fn from(err: crate::application::ports::RepositoryError) -> Self {
        Self::RepositoryError(err.to_string())
    }
}

impl From<crate::application::ports::AnalysisSourceError> for ApplicationError {
    fn from(err: crate::application::ports::AnalysisSourceError) -> Self {
        Self::ExternalServiceError(err.to_string())
    }
}

impl From<crate::domain::contract::ContractError> for ApplicationError {
    fn from(err: crate::domain::contract::ContractError) -> Self {
        Self::ValidationError(err.to_string())
    }
}

impl From<crate::application::contract_store::ContractStoreError> for ApplicationError {
    fn from(err: crate::application::contract_store::ContractStoreError) -> Self {
        Self::StorageError(err.to_string())
    }
}
