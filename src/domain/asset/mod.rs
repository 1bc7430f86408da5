//! Asset Context - 声线资产限界上下文
//!
//! 职责:
//! - 声线声学画像管理
//! - 目录筛选与兼容性评分
//! - 内置声线表

mod aggregate;
mod catalog;
pub mod registry;
mod value_objects;

pub use aggregate::VoiceAsset;
pub use catalog::{compatibility_score, AssetCatalog, AssetQuery, CompatibilityReport};
pub use value_objects::{AssetId, Capability, EmotionalRange, Provider};
