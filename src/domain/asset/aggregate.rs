//! Asset Context - Aggregate Root

use serde::{Deserialize, Serialize};

use crate::domain::acoustics::{AgeRange, Gender, PitchRange};

use super::{AssetId, Capability, EmotionalRange, Provider};

/// 声线资产
///
/// 一条具有固定声学画像的合成声线记录。
/// 画像值描述声线的典型输出，契约执行以此为静态依据。
///
/// 不变量:
/// - age_range / pitch_range_hz 的 min ≤ max（由类型保证）
/// - 画像值创建后不可变，目录只提供读路径
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceAsset {
    pub id: AssetId,
    pub name: String,
    pub provider: Provider,
    /// 提供方侧的声线 ID（如 Fish Audio voice ID）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    // 声学画像
    pub gender: Gender,
    pub age_range: AgeRange,
    pub pitch_range_hz: PitchRange,
    /// 典型语速基线（词/分钟）
    pub typical_tempo_wpm: f64,
    /// 典型响度基线（均方根，0-1）
    pub typical_loudness: f64,

    // 能力
    pub can_whisper: bool,
    pub can_shout: bool,
    pub emotional_range: EmotionalRange,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,

    // 元数据
    pub tags: Vec<String>,
    pub description: String,
}

impl VoiceAsset {
    /// 声线自身的音高波动幅度（Hz）
    pub fn pitch_width_hz(&self) -> f64 {
        self.pitch_range_hz.width_hz()
    }

    pub fn has_capability(&self, capability: Capability) -> bool {
        match capability {
            Capability::CanWhisper => self.can_whisper,
            Capability::CanShout => self.can_shout,
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_asset() -> VoiceAsset {
        VoiceAsset {
            id: AssetId::new("test_voice").unwrap(),
            name: "Test Voice".to_string(),
            provider: Provider::Gemini,
            external_id: None,
            gender: Gender::Male,
            age_range: AgeRange::new(30, 50).unwrap(),
            pitch_range_hz: PitchRange::new(90.0, 160.0).unwrap(),
            typical_tempo_wpm: 100.0,
            typical_loudness: 0.08,
            can_whisper: false,
            can_shout: true,
            emotional_range: EmotionalRange::Wide,
            accent: None,
            tags: vec!["strong".to_string(), "commanding".to_string()],
            description: "Test voice".to_string(),
        }
    }

    #[test]
    fn test_pitch_width() {
        assert_eq!(sample_asset().pitch_width_hz(), 70.0);
    }

    #[test]
    fn test_capability_lookup() {
        let asset = sample_asset();
        assert!(asset.has_capability(Capability::CanShout));
        assert!(!asset.has_capability(Capability::CanWhisper));
    }

    #[test]
    fn test_tag_lookup() {
        let asset = sample_asset();
        assert!(asset.has_tag("strong"));
        assert!(!asset.has_tag("gentle"));
    }

    #[test]
    fn test_serde_omits_absent_optionals() {
        let json = serde_json::to_value(sample_asset()).unwrap();
        assert!(json.get("external_id").is_none());
        assert!(json.get("accent").is_none());
        assert_eq!(json["age_range"], serde_json::json!([30, 50]));
        assert_eq!(json["pitch_range_hz"], serde_json::json!([90.0, 160.0]));
    }
}
