//! Contract Context - Value Objects

use serde::{Deserialize, Serialize};

use crate::domain::acoustics::{AgeRange, Gender, PitchRange};

/// 角色契约唯一标识
///
/// 同时用作存储适配器的记录文件名，因此拒绝路径危险字符
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContractId(String);

impl ContractId {
    pub fn new(id: impl Into<String>) -> Result<Self, &'static str> {
        let id = id.into();
        if id.is_empty() {
            return Err("契约 ID 不能为空");
        }
        if id.len() > 100 {
            return Err("契约 ID 长度不能超过100字符");
        }
        if id.contains('/') || id.contains('\\') || id.contains("..") {
            return Err("契约 ID 不能包含路径字符");
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ContractId {
    type Error = &'static str;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ContractId::new(value)
    }
}

impl From<ContractId> for String {
    fn from(id: ContractId) -> Self {
        id.0
    }
}

impl std::fmt::Display for ContractId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 角色心理画像
///
/// 记录性元数据，不参与执行判定。
/// 三项均为 0-1 标量；构造函数检查范围，
/// 但已有记录中的越界值在反序列化时保留，由结构校验器报告
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PsychProfile {
    /// 支配性：影响音量与节奏
    pub dominance: f64,
    /// 亲和力：影响音色柔和度
    pub warmth: f64,
    /// 情绪外露程度：影响音高波动
    pub emotional_variance: f64,
}

impl PsychProfile {
    pub fn new(dominance: f64, warmth: f64, emotional_variance: f64) -> Result<Self, &'static str> {
        for value in [dominance, warmth, emotional_variance] {
            if !(0.0..=1.0).contains(&value) {
                return Err("心理画像各项必须在 0-1 之间");
            }
        }
        Ok(Self {
            dominance,
            warmth,
            emotional_variance,
        })
    }
}

impl Default for PsychProfile {
    fn default() -> Self {
        Self {
            dominance: 0.5,
            warmth: 0.5,
            emotional_variance: 0.5,
        }
    }
}

/// 声线要求
///
/// 契约对声线的全部硬性约束，执行引擎据此判定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceRequirements {
    pub gender: Gender,
    /// 要求的表观年龄区间（岁）
    pub age_range: AgeRange,
    /// 允许的基频区间（Hz）
    pub pitch_range_hz: PitchRange,
    /// 允许的最大音高波动（Hz），低值表示克制
    pub max_pitch_variance: f64,
    /// 允许的最大语速（词/分钟）
    pub max_tempo_wpm: f64,
    /// 允许的最大响度（均方根，0-1）
    pub max_loudness: f64,
}

impl Default for VoiceRequirements {
    fn default() -> Self {
        Self {
            gender: Gender::Neutral,
            age_range: AgeRange::new_unchecked(20, 60),
            pitch_range_hz: PitchRange::new_unchecked(80.0, 300.0),
            max_pitch_variance: 100.0,
            max_tempo_wpm: 150.0,
            max_loudness: 0.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_id_rejects_path_characters() {
        assert!(ContractId::new("villain_001").is_ok());
        assert!(ContractId::new("").is_err());
        assert!(ContractId::new("a/b").is_err());
        assert!(ContractId::new("a\\b").is_err());
        assert!(ContractId::new("..secret").is_err());
    }

    #[test]
    fn test_contract_id_deserialization_enforces_rules() {
        assert!(serde_json::from_str::<ContractId>("\"villain_001\"").is_ok());
        assert!(serde_json::from_str::<ContractId>("\"../etc\"").is_err());
    }

    #[test]
    fn test_psych_profile_range_check() {
        assert!(PsychProfile::new(0.0, 0.5, 1.0).is_ok());
        assert!(PsychProfile::new(1.1, 0.5, 0.5).is_err());
        assert!(PsychProfile::new(0.5, -0.1, 0.5).is_err());
    }

    #[test]
    fn test_requirements_defaults() {
        let req = VoiceRequirements::default();
        assert_eq!(req.gender, Gender::Neutral);
        assert_eq!(req.age_range.min(), 20);
        assert_eq!(req.age_range.max(), 60);
        assert_eq!(req.pitch_range_hz.min_hz(), 80.0);
        assert_eq!(req.pitch_range_hz.max_hz(), 300.0);
        assert_eq!(req.max_pitch_variance, 100.0);
        assert_eq!(req.max_tempo_wpm, 150.0);
        assert_eq!(req.max_loudness, 0.1);
    }
}
