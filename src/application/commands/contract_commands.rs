//! Contract Commands - V2 架构

use crate::domain::contract::{CharacterContract, PsychProfile, VoiceRequirements};

/// 创建契约命令
///
/// 除 id 与 display_name 外均可省略，省略项由领域层补默认值。
#[derive(Debug, Clone)]
pub struct CreateContract {
    pub id: String,
    pub display_name: String,
    pub archetype: Option<String>,
    pub psych_profile: Option<PsychProfile>,
    pub voice_requirements: Option<VoiceRequirements>,
    pub forbidden_traits: Option<Vec<String>>,
    pub test_script: Option<String>,
    pub description: Option<String>,
    pub notes: Option<String>,
}

/// 保存完整契约命令（新建或整体覆盖）
#[derive(Debug, Clone)]
pub struct SaveContract {
    pub contract: CharacterContract,
}
