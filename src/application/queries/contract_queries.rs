//! Contract Queries - V2 架构

use crate::domain::contract::ContractId;

/// 获取契约详情查询
#[derive(Debug, Clone)]
pub struct GetContract {
    pub id: ContractId,
}

/// 列出所有契约查询
#[derive(Debug, Clone)]
pub struct ListContracts;
