//! Enforcement Context - 契约执行限界上下文
//!
//! 职责:
//! - 声线画像对契约的静态校验
//! - 实测音频对契约的动态校验
//! - 候选集最佳匹配与执行报告

mod engine;
mod report;
mod value_objects;

pub use engine::{
    find_best_voice, validate_audio_for_contract, validate_voice_for_contract, BestMatch,
};
pub use report::{generate_report, generate_unmatched_report};
pub use value_objects::{
    AcousticAnalysis, ContractViolation, EnforcementResult, Severity, ViolationCode,
};
