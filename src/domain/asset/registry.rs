//! Asset Context - 内置声线表
//!
//! 随二进制内置的声线画像。画像值来自对各提供方输出的
//! 人工测量，作为目录未配置外部资产文件时的默认数据。

use crate::domain::acoustics::{AgeRange, Gender, PitchRange};

use super::{AssetId, EmotionalRange, Provider, VoiceAsset};

fn tags(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// 内置声线，固定顺序
pub fn builtin_assets() -> Vec<VoiceAsset> {
    vec![
        // ==================== Gemini ====================
        VoiceAsset {
            id: AssetId::new_unchecked("gemini_charon"),
            name: "Charon".to_string(),
            provider: Provider::Gemini,
            external_id: None,
            gender: Gender::Male,
            age_range: AgeRange::new_unchecked(45, 65),
            pitch_range_hz: PitchRange::new_unchecked(85.0, 140.0),
            typical_tempo_wpm: 85.0,
            typical_loudness: 0.06,
            can_whisper: true,
            can_shout: false,
            emotional_range: EmotionalRange::Narrow,
            accent: None,
            tags: tags(&["deep", "authoritative", "calm", "wise"]),
            description: "Deep, authoritative male voice. Excellent for wise, controlled characters.".to_string(),
        },
        VoiceAsset {
            id: AssetId::new_unchecked("gemini_fenrir"),
            name: "Fenrir".to_string(),
            provider: Provider::Gemini,
            external_id: None,
            gender: Gender::Male,
            age_range: AgeRange::new_unchecked(30, 50),
            pitch_range_hz: PitchRange::new_unchecked(90.0, 160.0),
            typical_tempo_wpm: 100.0,
            typical_loudness: 0.08,
            can_whisper: false,
            can_shout: true,
            emotional_range: EmotionalRange::Wide,
            accent: None,
            tags: tags(&["strong", "commanding", "energetic", "warrior"]),
            description: "Strong, commanding male voice with good range for action characters.".to_string(),
        },
        VoiceAsset {
            id: AssetId::new_unchecked("gemini_puck"),
            name: "Puck".to_string(),
            provider: Provider::Gemini,
            external_id: None,
            gender: Gender::Male,
            age_range: AgeRange::new_unchecked(20, 35),
            pitch_range_hz: PitchRange::new_unchecked(100.0, 180.0),
            typical_tempo_wpm: 120.0,
            typical_loudness: 0.07,
            can_whisper: false,
            can_shout: true,
            emotional_range: EmotionalRange::Wide,
            accent: None,
            tags: tags(&["energetic", "expressive", "comedic", "animated"]),
            description: "Energetic, expressive male voice. Good for comedic or animated characters.".to_string(),
        },
        VoiceAsset {
            id: AssetId::new_unchecked("gemini_kore"),
            name: "Kore".to_string(),
            provider: Provider::Gemini,
            external_id: None,
            gender: Gender::Neutral,
            age_range: AgeRange::new_unchecked(25, 40),
            pitch_range_hz: PitchRange::new_unchecked(150.0, 250.0),
            typical_tempo_wpm: 95.0,
            typical_loudness: 0.06,
            can_whisper: true,
            can_shout: false,
            emotional_range: EmotionalRange::Medium,
            accent: None,
            tags: tags(&["warm", "friendly", "calm", "gentle"]),
            description: "Warm, friendly neutral voice. Versatile for many character types.".to_string(),
        },
        VoiceAsset {
            id: AssetId::new_unchecked("gemini_aoede"),
            name: "Aoede".to_string(),
            provider: Provider::Gemini,
            external_id: None,
            gender: Gender::Female,
            age_range: AgeRange::new_unchecked(25, 45),
            pitch_range_hz: PitchRange::new_unchecked(180.0, 280.0),
            typical_tempo_wpm: 100.0,
            typical_loudness: 0.06,
            can_whisper: true,
            can_shout: true,
            emotional_range: EmotionalRange::Wide,
            accent: None,
            tags: tags(&["professional", "clear", "articulate", "expressive"]),
            description: "Professional, clear female voice with good emotional range.".to_string(),
        },
        VoiceAsset {
            id: AssetId::new_unchecked("villain_sophisticated"),
            name: "Sophisticated Villain".to_string(),
            provider: Provider::Gemini,
            external_id: None,
            gender: Gender::Male,
            age_range: AgeRange::new_unchecked(40, 55),
            // 窄区间，始终克制
            pitch_range_hz: PitchRange::new_unchecked(90.0, 130.0),
            typical_tempo_wpm: 90.0,
            typical_loudness: 0.05,
            can_whisper: true,
            can_shout: false,
            emotional_range: EmotionalRange::Narrow,
            accent: None,
            tags: tags(&["controlled", "menacing", "intellectual", "calm"]),
            description: "Ultra-controlled male voice for sophisticated villains. Never raises voice.".to_string(),
        },
        // ==================== Fish Audio ====================
        VoiceAsset {
            id: AssetId::new_unchecked("fish_spongebob"),
            name: "SpongeBob".to_string(),
            provider: Provider::FishAudio,
            external_id: Some("54e3a85ac9594ffa83264b8a494b901b".to_string()),
            gender: Gender::Male,
            age_range: AgeRange::new_unchecked(8, 15),
            pitch_range_hz: PitchRange::new_unchecked(200.0, 400.0),
            typical_tempo_wpm: 130.0,
            typical_loudness: 0.09,
            can_whisper: false,
            can_shout: true,
            emotional_range: EmotionalRange::Wide,
            accent: None,
            tags: tags(&["cartoon", "energetic", "squeaky", "enthusiastic"]),
            description: "High-pitched, enthusiastic cartoon voice.".to_string(),
        },
        // ==================== ElevenLabs ====================
        VoiceAsset {
            id: AssetId::new_unchecked("eleven_rachel"),
            name: "Rachel".to_string(),
            provider: Provider::ElevenLabs,
            external_id: Some("21m00Tcm4TlvDq8ikWAM".to_string()),
            gender: Gender::Female,
            age_range: AgeRange::new_unchecked(25, 40),
            pitch_range_hz: PitchRange::new_unchecked(165.0, 255.0),
            typical_tempo_wpm: 110.0,
            typical_loudness: 0.07,
            can_whisper: true,
            can_shout: false,
            emotional_range: EmotionalRange::Medium,
            accent: Some("american".to_string()),
            tags: tags(&["clear", "narrative", "composed", "professional"]),
            description: "Clear, composed female narration voice.".to_string(),
        },
        // ==================== Kokoro ====================
        VoiceAsset {
            id: AssetId::new_unchecked("kokoro_bella"),
            name: "Bella".to_string(),
            provider: Provider::Kokoro,
            external_id: Some("af_bella".to_string()),
            gender: Gender::Female,
            age_range: AgeRange::new_unchecked(20, 35),
            pitch_range_hz: PitchRange::new_unchecked(170.0, 270.0),
            typical_tempo_wpm: 105.0,
            typical_loudness: 0.06,
            can_whisper: false,
            can_shout: false,
            emotional_range: EmotionalRange::Medium,
            accent: Some("american".to_string()),
            tags: tags(&["soft", "youthful", "friendly"]),
            description: "Soft, youthful female voice for lighthearted characters.".to_string(),
        },
    ]
}
