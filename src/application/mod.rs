//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（ContractRepository、AnalysisSource）
//! - contract_store: 带读缓存的契约存取服务
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod contract_store;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    // Contract commands
    CreateContract,
    SaveContract,
    // Handlers
    handlers::{CreateContractHandler, CreateContractResponse, SaveContractHandler},
};

pub use contract_store::{ContractStore, ContractStoreError};

pub use error::ApplicationError;

pub use ports::{
    // Analysis source
    AnalysisSourceError,
    AnalysisSourcePort,
    // Contract repository
    ContractRepositoryPort,
    RepositoryError,
};

pub use queries::{
    // Asset queries
    FindAssets,
    GetAsset,
    // Contract queries
    GetContract,
    ListContracts,
    // Enforcement queries
    AuditContracts,
    CheckAudioCompliance,
    CheckVoiceCompliance,
    FindBestVoice,
    // Handlers
    handlers::{
        AuditContractsHandler, AuditContractsResponse, BestVoiceResponse,
        CheckAudioComplianceHandler, CheckVoiceComplianceHandler, ContractAuditOutcome,
        FindAssetsHandler, FindBestVoiceHandler, GetAssetHandler, GetContractHandler,
        ListContractsHandler,
    },
};
