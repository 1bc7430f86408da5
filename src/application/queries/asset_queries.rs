//! Asset Queries - V2 架构

use crate::domain::asset::{AssetId, AssetQuery};

/// 获取声线资产详情查询
#[derive(Debug, Clone)]
pub struct GetAsset {
    pub id: AssetId,
}

/// 按声学条件筛选资产查询
#[derive(Debug, Clone)]
pub struct FindAssets {
    pub query: AssetQuery,
}
