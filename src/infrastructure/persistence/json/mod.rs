//! JSON 文件存储实现

mod analysis_source;
mod contract_repo;

pub use analysis_source::JsonAnalysisSource;
pub use contract_repo::JsonContractRepository;
