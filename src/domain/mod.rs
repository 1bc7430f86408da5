//! Domain Layer - 领域层
//!
//! 包含三个限界上下文:
//! - Asset Context: 声线资产目录
//! - Contract Context: 角色契约
//! - Enforcement Context: 契约执行

pub mod asset;
pub mod contract;
pub mod enforcement;

// 共享的声学词汇表
mod acoustics;

pub use acoustics::{AgeRange, Gender, PitchRange};
