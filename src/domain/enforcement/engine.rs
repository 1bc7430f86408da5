//! 契约执行引擎
//!
//! 纯函数：静态校验（声线画像对要求）、动态校验（实测音频对要求）、
//! 候选集最佳匹配。不做 I/O，输入类型良构即无错误路径。
//!
//! 判定规则：满分 100 逐项扣分，下限 0；
//! 通过 = 无 critical 违规且得分 ≥ 70。

use crate::domain::asset::{EmotionalRange, VoiceAsset};
use crate::domain::contract::CharacterContract;

use super::{AcousticAnalysis, ContractViolation, EnforcementResult, Severity, ViolationCode};

/// 通过线
const PASS_THRESHOLD: i32 = 70;

// ==================== 静态校验扣分表 ====================

const GENDER_MISMATCH_PENALTY: i32 = 50;
const AGE_RANGE_PENALTY: i32 = 25;
const PITCH_RANGE_PENALTY: i32 = 20;
const PITCH_VARIANCE_PENALTY: i32 = 20;
const TEMPO_PENALTY: i32 = 10;
const LOUDNESS_PENALTY: i32 = 10;

/// 声线画像允许超出契约基频边界的容差（Hz）
const PITCH_EDGE_TOLERANCE_HZ: f64 = 30.0;

// ==================== 动态校验扣分表 ====================

const AUDIO_PITCH_PENALTY: i32 = 25;
const AUDIO_VARIANCE_PENALTY: i32 = 20;
const AUDIO_TEMPO_PENALTY: i32 = 15;
const AUDIO_LOUDNESS_PENALTY: i32 = 10;
/// 每命中一对（禁止特征 × 检测特征）扣一次
const FORBIDDEN_TRAIT_PENALTY: i32 = 30;

/// 静态校验：声线画像是否满足契约要求
pub fn validate_voice_for_contract(
    contract: &CharacterContract,
    asset: &VoiceAsset,
) -> EnforcementResult {
    let mut violations = Vec::new();
    let mut warnings = Vec::new();
    let mut score: i32 = 100;

    let req = &contract.voice_requirements;

    // ==================== CRITICAL ====================

    if !asset.gender.satisfies(req.gender) {
        violations.push(ContractViolation {
            code: ViolationCode::GenderMismatch,
            message: format!("Contract requires {} voice", req.gender),
            severity: Severity::Critical,
            expected: req.gender.to_string(),
            actual: asset.gender.to_string(),
        });
        score -= GENDER_MISMATCH_PENALTY;
    }

    // ==================== MAJOR ====================

    if !asset.age_range.overlaps(&req.age_range) {
        violations.push(ContractViolation {
            code: ViolationCode::AgeRangeViolation,
            message: format!(
                "Voice age range {} doesn't overlap with required {}",
                asset.age_range, req.age_range
            ),
            severity: Severity::Major,
            expected: req.age_range.to_string(),
            actual: asset.age_range.to_string(),
        });
        score -= AGE_RANGE_PENALTY;
    }

    if asset.pitch_range_hz.min_hz() < req.pitch_range_hz.min_hz() - PITCH_EDGE_TOLERANCE_HZ
        || asset.pitch_range_hz.max_hz() > req.pitch_range_hz.max_hz() + PITCH_EDGE_TOLERANCE_HZ
    {
        violations.push(ContractViolation {
            code: ViolationCode::PitchRangeViolation,
            message: "Voice pitch range outside contract bounds".to_string(),
            severity: Severity::Major,
            expected: req.pitch_range_hz.to_string(),
            actual: asset.pitch_range_hz.to_string(),
        });
        score -= PITCH_RANGE_PENALTY;
    }

    let pitch_width = asset.pitch_width_hz();
    if pitch_width > req.max_pitch_variance {
        violations.push(ContractViolation {
            code: ViolationCode::PitchVarianceViolation,
            message: "Voice has too much pitch variance for this controlled character".to_string(),
            severity: Severity::Major,
            expected: format!("≤{}Hz", req.max_pitch_variance),
            actual: format!("{}Hz", pitch_width),
        });
        score -= PITCH_VARIANCE_PENALTY;
    }

    // ==================== MINOR ====================

    if asset.typical_tempo_wpm > req.max_tempo_wpm {
        violations.push(ContractViolation {
            code: ViolationCode::TempoViolation,
            message: "Voice speaks too fast for this character".to_string(),
            severity: Severity::Minor,
            expected: format!("≤{}wpm", req.max_tempo_wpm),
            actual: format!("{}wpm", asset.typical_tempo_wpm),
        });
        score -= TEMPO_PENALTY;
    }

    if asset.typical_loudness > req.max_loudness {
        violations.push(ContractViolation {
            code: ViolationCode::LoudnessViolation,
            message: "Voice is too loud for this character".to_string(),
            severity: Severity::Minor,
            expected: format!("≤{}", req.max_loudness),
            actual: format!("{}", asset.typical_loudness),
        });
        score -= LOUDNESS_PENALTY;
    }

    // ==================== 能力与禁止特征的冲突（仅警告） ====================

    for forbidden in &contract.forbidden_traits {
        let lower = forbidden.to_lowercase();

        if lower == "shouting" && asset.can_shout {
            warnings.push(
                "Voice CAN shout but character forbids shouting - ensure TTS never triggers shout mode"
                    .to_string(),
            );
        }

        if lower == "laughter" && asset.emotional_range == EmotionalRange::Wide {
            warnings.push(
                "Voice has wide emotional range but character forbids laughter - monitor output carefully"
                    .to_string(),
            );
        }
    }

    finalize(score, violations, warnings)
}

/// 动态校验：实测音频是否满足契约要求
pub fn validate_audio_for_contract(
    contract: &CharacterContract,
    analysis: &AcousticAnalysis,
) -> EnforcementResult {
    let mut violations = Vec::new();
    let mut score: i32 = 100;

    let req = &contract.voice_requirements;

    // ==================== 音高 ====================

    if !req.pitch_range_hz.contains_hz(analysis.fundamental_freq_hz) {
        violations.push(ContractViolation {
            code: ViolationCode::AudioPitchViolation,
            message: "Generated audio pitch outside contract bounds".to_string(),
            severity: Severity::Major,
            expected: req.pitch_range_hz.to_string(),
            actual: format!("{}Hz", analysis.fundamental_freq_hz),
        });
        score -= AUDIO_PITCH_PENALTY;
    }

    if analysis.pitch_variance_hz > req.max_pitch_variance {
        violations.push(ContractViolation {
            code: ViolationCode::AudioVarianceViolation,
            message: "Generated audio has too much pitch variation".to_string(),
            severity: Severity::Major,
            expected: format!("≤{}Hz", req.max_pitch_variance),
            actual: format!("{}Hz", analysis.pitch_variance_hz),
        });
        score -= AUDIO_VARIANCE_PENALTY;
    }

    // ==================== 语速 ====================

    if analysis.tempo_wpm > req.max_tempo_wpm {
        violations.push(ContractViolation {
            code: ViolationCode::AudioTempoViolation,
            message: "Generated audio speaks too fast".to_string(),
            severity: Severity::Minor,
            expected: format!("≤{}wpm", req.max_tempo_wpm),
            actual: format!("{}wpm", analysis.tempo_wpm),
        });
        score -= AUDIO_TEMPO_PENALTY;
    }

    // ==================== 响度 ====================

    if analysis.loudness > req.max_loudness {
        violations.push(ContractViolation {
            code: ViolationCode::AudioLoudnessViolation,
            message: "Generated audio is too loud".to_string(),
            severity: Severity::Minor,
            expected: format!("≤{}", req.max_loudness),
            actual: format!("{}", analysis.loudness),
        });
        score -= AUDIO_LOUDNESS_PENALTY;
    }

    // ==================== 禁止特征 ====================

    // 按（禁止 × 检测）对逐一记违规，大小写不敏感的包含匹配
    for forbidden in &contract.forbidden_traits {
        let forbidden_lower = forbidden.to_lowercase();

        for detected in &analysis.detected_traits {
            if detected.to_lowercase().contains(&forbidden_lower) {
                violations.push(ContractViolation {
                    code: ViolationCode::ForbiddenTraitDetected,
                    message: format!("Detected forbidden trait: {}", forbidden),
                    severity: Severity::Critical,
                    expected: format!("No {}", forbidden),
                    actual: format!("Detected: {}", detected),
                });
                score -= FORBIDDEN_TRAIT_PENALTY;
            }
        }
    }

    finalize(score, violations, Vec::new())
}

/// 候选集中的最佳匹配
#[derive(Debug, Clone)]
pub struct BestMatch<'a> {
    pub asset: Option<&'a VoiceAsset>,
    pub result: EnforcementResult,
}

/// 在候选集中为契约挑选得分最高的声线
///
/// 首个候选作为初始最佳；仅在得分严格更高时替换，
/// 平局保留更早的候选。空候选集返回空结论
pub fn find_best_voice<'a>(
    contract: &CharacterContract,
    candidates: &'a [VoiceAsset],
) -> BestMatch<'a> {
    let mut best: Option<(&'a VoiceAsset, EnforcementResult)> = None;

    for asset in candidates {
        let result = validate_voice_for_contract(contract, asset);
        let replace = match &best {
            None => true,
            Some((_, best_result)) => result.score > best_result.score,
        };
        if replace {
            best = Some((asset, result));
        }
    }

    match best {
        Some((asset, result)) => BestMatch {
            asset: Some(asset),
            result,
        },
        None => BestMatch {
            asset: None,
            result: EnforcementResult::default(),
        },
    }
}

fn finalize(
    score: i32,
    violations: Vec<ContractViolation>,
    warnings: Vec<String>,
) -> EnforcementResult {
    let has_critical = violations.iter().any(|v| v.severity == Severity::Critical);
    EnforcementResult {
        passed: !has_critical && score >= PASS_THRESHOLD,
        score: score.max(0) as u8,
        violations,
        warnings,
        recommended_asset_id: None,
    }
}
