//! Contract Context - 角色契约限界上下文
//!
//! 职责:
//! - 角色契约聚合与草稿补全
//! - 声线要求值对象
//! - 录入 JSON 的结构校验

mod aggregate;
mod errors;
mod validation;
mod value_objects;

pub use aggregate::{CharacterContract, ContractDraft};
pub use errors::ContractError;
pub use validation::{validate_structure, StructureReport};
pub use value_objects::{ContractId, PsychProfile, VoiceRequirements};
