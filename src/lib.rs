//! Voxpact - 角色声线契约执行系统
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Asset Context: 声线资产目录上下文
//! - Contract Context: 角色契约上下文
//! - Enforcement Context: 契约执行上下文
//!
//! 应用层 (application/):
//! - Ports: 端口定义（ContractRepository, AnalysisSource）
//! - ContractStore: 带读缓存的契约存取服务
//! - Commands: CQRS 命令处理器
//! - Queries: CQRS 查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - Persistence: JSON 文件存储（契约仓储、声学测量来源）

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
