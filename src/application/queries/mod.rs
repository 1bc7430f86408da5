//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：处理所有读操作

mod asset_queries;
mod contract_queries;
mod enforcement_queries;

pub mod handlers;

pub use asset_queries::*;
pub use contract_queries::*;
pub use enforcement_queries::*;
