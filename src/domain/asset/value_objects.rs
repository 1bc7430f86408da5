//! Asset Context - Value Objects

use serde::{Deserialize, Serialize};

/// 声线资产唯一标识
///
/// 人类可读的稳定 slug，如 `gemini_charon`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AssetId(String);

impl AssetId {
    pub fn new(id: impl Into<String>) -> Result<Self, &'static str> {
        let id = id.into();
        if id.is_empty() {
            return Err("资产 ID 不能为空");
        }
        if id.len() > 100 {
            return Err("资产 ID 长度不能超过100字符");
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 仅供 crate 内编译期常量数据使用，调用方保证 id 合法
    pub(crate) fn new_unchecked(id: &str) -> Self {
        debug_assert!(!id.is_empty() && id.len() <= 100);
        Self(id.to_string())
    }
}

impl TryFrom<String> for AssetId {
    type Error = &'static str;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        AssetId::new(value)
    }
}

impl From<AssetId> for String {
    fn from(id: AssetId) -> Self {
        id.0
    }
}

impl std::fmt::Display for AssetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 合成服务提供方
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    Gemini,
    FishAudio,
    ElevenLabs,
    Kokoro,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Gemini => "gemini",
            Provider::FishAudio => "fish_audio",
            Provider::ElevenLabs => "eleven_labs",
            Provider::Kokoro => "kokoro",
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 情绪表达幅度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionalRange {
    Narrow,
    Medium,
    Wide,
}

impl EmotionalRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionalRange::Narrow => "narrow",
            EmotionalRange::Medium => "medium",
            EmotionalRange::Wide => "wide",
        }
    }
}

impl std::fmt::Display for EmotionalRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 可被查询排除的声线能力
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    CanWhisper,
    CanShout,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::CanWhisper => "can_whisper",
            Capability::CanShout => "can_shout",
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
