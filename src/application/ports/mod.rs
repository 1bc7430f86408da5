//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod analysis_source;
mod contract_repository;

pub use analysis_source::{AnalysisSourceError, AnalysisSourcePort};
pub use contract_repository::{ContractRepositoryPort, RepositoryError};
