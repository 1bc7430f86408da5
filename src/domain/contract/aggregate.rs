//! Contract Context - Aggregate Root

use serde::{Deserialize, Serialize};

use super::{ContractError, ContractId, PsychProfile, VoiceRequirements};

/// 未提供 archetype 时的默认值
const DEFAULT_ARCHETYPE: &str = "default";
/// 未提供 test_script 时的默认测试文案
const DEFAULT_TEST_SCRIPT: &str = "Hello, I am a test character.";

/// 角色契约
///
/// 角色即契约：声线资产必须满足的一份完整规格。
///
/// 不变量:
/// - voice_requirements 的区间字段 min ≤ max（由类型保证）
/// - 契约本身不引用具体声线，绑定关系由执行结果给出
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterContract {
    pub id: ContractId,
    pub display_name: String,
    pub archetype: String,
    pub psych_profile: PsychProfile,
    pub voice_requirements: VoiceRequirements,
    /// 禁止出现的特征名，动态校验按包含关系匹配
    pub forbidden_traits: Vec<String>,
    /// 用于试音的固定台词
    pub test_script: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// 契约草稿
///
/// 只有 id 与 display_name 必填，其余缺省项由
/// [`CharacterContract::with_defaults`] 补全
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContractDraft {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub archetype: Option<String>,
    #[serde(default)]
    pub psych_profile: Option<PsychProfile>,
    #[serde(default)]
    pub voice_requirements: Option<VoiceRequirements>,
    #[serde(default)]
    pub forbidden_traits: Option<Vec<String>>,
    #[serde(default)]
    pub test_script: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl CharacterContract {
    /// 以文档化默认值补全草稿
    pub fn with_defaults(draft: ContractDraft) -> Result<Self, ContractError> {
        let id = ContractId::new(draft.id).map_err(|e| ContractError::InvalidId(e.to_string()))?;
        if draft.display_name.is_empty() {
            return Err(ContractError::InvalidDisplayName(
                "角色名称不能为空".to_string(),
            ));
        }

        Ok(Self {
            id,
            display_name: draft.display_name,
            archetype: draft.archetype.unwrap_or_else(|| DEFAULT_ARCHETYPE.to_string()),
            psych_profile: draft.psych_profile.unwrap_or_default(),
            voice_requirements: draft.voice_requirements.unwrap_or_default(),
            forbidden_traits: draft.forbidden_traits.unwrap_or_default(),
            test_script: draft
                .test_script
                .unwrap_or_else(|| DEFAULT_TEST_SCRIPT.to_string()),
            description: draft.description,
            notes: draft.notes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::acoustics::Gender;

    #[test]
    fn test_with_defaults_fills_documented_values() {
        let draft = ContractDraft {
            id: "test_char".to_string(),
            display_name: "Test Character".to_string(),
            ..Default::default()
        };
        let contract = CharacterContract::with_defaults(draft).unwrap();

        assert_eq!(contract.archetype, "default");
        assert_eq!(contract.psych_profile.dominance, 0.5);
        assert_eq!(contract.voice_requirements.gender, Gender::Neutral);
        assert!(contract.forbidden_traits.is_empty());
        assert_eq!(contract.test_script, "Hello, I am a test character.");
        assert!(contract.description.is_none());
    }

    #[test]
    fn test_with_defaults_keeps_provided_values() {
        let draft = ContractDraft {
            id: "villain_001".to_string(),
            display_name: "The Strategist".to_string(),
            archetype: Some("sophisticated_villain".to_string()),
            forbidden_traits: Some(vec!["shouting".to_string()]),
            test_script: Some("Every move has already been decided.".to_string()),
            ..Default::default()
        };
        let contract = CharacterContract::with_defaults(draft).unwrap();

        assert_eq!(contract.archetype, "sophisticated_villain");
        assert_eq!(contract.forbidden_traits, vec!["shouting".to_string()]);
        assert_eq!(contract.test_script, "Every move has already been decided.");
    }

    #[test]
    fn test_with_defaults_rejects_invalid_identity() {
        let bad_id = ContractDraft {
            id: "a/b".to_string(),
            display_name: "X".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            CharacterContract::with_defaults(bad_id),
            Err(ContractError::InvalidId(_))
        ));

        let bad_name = ContractDraft {
            id: "ok".to_string(),
            display_name: String::new(),
            ..Default::default()
        };
        assert!(matches!(
            CharacterContract::with_defaults(bad_name),
            Err(ContractError::InvalidDisplayName(_))
        ));
    }

    #[test]
    fn test_contract_serde_round_trip_is_exact() {
        let draft = ContractDraft {
            id: "round_trip".to_string(),
            display_name: "Round Trip".to_string(),
            ..Default::default()
        };
        let contract = CharacterContract::with_defaults(draft).unwrap();

        let json = serde_json::to_string_pretty(&contract).unwrap();
        let back: CharacterContract = serde_json::from_str(&json).unwrap();

        assert_eq!(back.id, contract.id);
        assert_eq!(back.voice_requirements, contract.voice_requirements);
        assert_eq!(back.psych_profile, contract.psych_profile);
        // 缺省的可选字段不应出现在序列化结果中
        assert!(!json.contains("\"description\""));
        assert!(!json.contains("\"notes\""));
    }
}
