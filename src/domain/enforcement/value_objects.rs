//! Enforcement Context - Value Objects

use serde::{Deserialize, Serialize};

use crate::domain::asset::AssetId;

/// 违规严重级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Major,
    Minor,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Major => "major",
            Severity::Minor => "minor",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 违规代码
///
/// 封闭枚举，线上格式为稳定的大写蛇形代码，
/// 下游按代码而非消息文本做程序化处理
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolationCode {
    // 静态校验（声线画像）
    GenderMismatch,
    AgeRangeViolation,
    PitchRangeViolation,
    PitchVarianceViolation,
    TempoViolation,
    LoudnessViolation,
    // 动态校验（实测音频）
    AudioPitchViolation,
    AudioVarianceViolation,
    AudioTempoViolation,
    AudioLoudnessViolation,
    ForbiddenTraitDetected,
}

impl ViolationCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationCode::GenderMismatch => "GENDER_MISMATCH",
            ViolationCode::AgeRangeViolation => "AGE_RANGE_VIOLATION",
            ViolationCode::PitchRangeViolation => "PITCH_RANGE_VIOLATION",
            ViolationCode::PitchVarianceViolation => "PITCH_VARIANCE_VIOLATION",
            ViolationCode::TempoViolation => "TEMPO_VIOLATION",
            ViolationCode::LoudnessViolation => "LOUDNESS_VIOLATION",
            ViolationCode::AudioPitchViolation => "AUDIO_PITCH_VIOLATION",
            ViolationCode::AudioVarianceViolation => "AUDIO_VARIANCE_VIOLATION",
            ViolationCode::AudioTempoViolation => "AUDIO_TEMPO_VIOLATION",
            ViolationCode::AudioLoudnessViolation => "AUDIO_LOUDNESS_VIOLATION",
            ViolationCode::ForbiddenTraitDetected => "FORBIDDEN_TRAIT_DETECTED",
        }
    }
}

impl std::fmt::Display for ViolationCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 一条具体的契约违规
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractViolation {
    pub code: ViolationCode,
    pub message: String,
    pub severity: Severity,
    pub expected: String,
    pub actual: String,
}

/// 一次契约执行的结论
///
/// 通过判定：无 critical 违规且得分 ≥ 70
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnforcementResult {
    pub passed: bool,
    /// 0-100
    pub score: u8,
    pub violations: Vec<ContractViolation>,
    pub warnings: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_asset_id: Option<AssetId>,
}

/// 实测音频的声学分析
///
/// 测量值由外部分析器提供，本系统只消费不计算
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcousticAnalysis {
    /// 基频 F0（Hz）
    pub fundamental_freq_hz: f64,
    /// 音高波动幅度（Hz）
    pub pitch_variance_hz: f64,
    /// 语速（词/分钟）
    pub tempo_wpm: f64,
    /// 响度（均方根，0-1）
    pub loudness: f64,
    /// 检测到的特征名，如 shouting、whispering
    #[serde(default)]
    pub detected_traits: Vec<String>,
}
