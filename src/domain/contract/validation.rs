//! Contract Context - 结构校验器
//!
//! 对未解析的 JSON 候选做逐项形状检查，收集全部问题后一次返回，
//! 不在首个错误处中断。供录入工具在落盘前给出完整修复清单。

use serde_json::Value;

/// 结构校验结论
#[derive(Debug, Clone)]
pub struct StructureReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

/// 校验候选 JSON 是否具备契约的完整结构
///
/// 只检查形状（字段存在、类型、数值范围），
/// 区间的 min ≤ max 不变量由类型在反序列化时强制
pub fn validate_structure(candidate: &Value) -> StructureReport {
    let mut errors = Vec::new();

    let Some(c) = candidate.as_object() else {
        return StructureReport {
            valid: false,
            errors: vec!["Contract must be an object".to_string()],
        };
    };

    // 必填字符串字段
    for field in ["id", "display_name", "archetype", "test_script"] {
        if !c.get(field).map_or(false, Value::is_string) {
            errors.push(format!("{} must be a string", field));
        }
    }

    // 心理画像
    match c.get("psych_profile").and_then(Value::as_object) {
        None => errors.push("psych_profile must be an object".to_string()),
        Some(psych) => {
            for field in ["dominance", "warmth", "emotional_variance"] {
                let in_range = psych
                    .get(field)
                    .and_then(Value::as_f64)
                    .map_or(false, |v| (0.0..=1.0).contains(&v));
                if !in_range {
                    errors.push(format!(
                        "psych_profile.{} must be a number between 0 and 1",
                        field
                    ));
                }
            }
        }
    }

    // 声线要求
    match c.get("voice_requirements").and_then(Value::as_object) {
        None => errors.push("voice_requirements must be an object".to_string()),
        Some(vr) => {
            let gender_ok = vr
                .get("gender")
                .and_then(Value::as_str)
                .map_or(false, |g| matches!(g, "male" | "female" | "neutral"));
            if !gender_ok {
                errors.push("voice_requirements.gender must be male, female, or neutral".to_string());
            }

            for field in ["age_range", "pitch_range_hz"] {
                let pair_ok = vr
                    .get(field)
                    .and_then(Value::as_array)
                    .map_or(false, |a| a.len() == 2);
                if !pair_ok {
                    errors.push(format!("voice_requirements.{} must be [min, max]", field));
                }
            }

            for field in ["max_pitch_variance", "max_tempo_wpm", "max_loudness"] {
                if !vr.get(field).map_or(false, Value::is_number) {
                    errors.push(format!("voice_requirements.{} must be a number", field));
                }
            }
        }
    }

    // 禁止特征
    if !c.get("forbidden_traits").map_or(false, Value::is_array) {
        errors.push("forbidden_traits must be an array".to_string());
    }

    StructureReport {
        valid: errors.is_empty(),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn complete_contract() -> Value {
        json!({
            "id": "villain_001",
            "display_name": "The Strategist",
            "archetype": "sophisticated_villain",
            "psych_profile": {
                "dominance": 0.9,
                "warmth": 0.1,
                "emotional_variance": 0.2
            },
            "voice_requirements": {
                "gender": "male",
                "age_range": [40, 55],
                "pitch_range_hz": [85.0, 135.0],
                "max_pitch_variance": 40.0,
                "max_tempo_wpm": 110.0,
                "max_loudness": 0.07
            },
            "forbidden_traits": ["shouting", "laughter"],
            "test_script": "Every move has already been decided."
        })
    }

    #[test]
    fn test_complete_contract_is_valid() {
        let report = validate_structure(&complete_contract());
        assert!(report.valid, "unexpected errors: {:?}", report.errors);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_non_object_short_circuits() {
        let report = validate_structure(&json!("not an object"));
        assert!(!report.valid);
        assert_eq!(report.errors, vec!["Contract must be an object".to_string()]);
    }

    #[test]
    fn test_all_problems_are_collected() {
        let mut candidate = complete_contract();
        let obj = candidate.as_object_mut().unwrap();
        obj.remove("id");
        obj.remove("test_script");
        obj["psych_profile"]["dominance"] = json!(1.5);
        obj["voice_requirements"]["gender"] = json!("robot");
        obj["voice_requirements"]["age_range"] = json!([40]);
        obj["forbidden_traits"] = json!("shouting");

        let report = validate_structure(&candidate);
        assert!(!report.valid);
        assert_eq!(report.errors.len(), 6);
        assert!(report.errors.contains(&"id must be a string".to_string()));
        assert!(report
            .errors
            .contains(&"psych_profile.dominance must be a number between 0 and 1".to_string()));
        assert!(report
            .errors
            .contains(&"voice_requirements.age_range must be [min, max]".to_string()));
        assert!(report
            .errors
            .contains(&"forbidden_traits must be an array".to_string()));
    }

    #[test]
    fn test_missing_sections_reported_once() {
        let report = validate_structure(&json!({
            "id": "x",
            "display_name": "X",
            "archetype": "default",
            "test_script": "hi"
        }));
        assert!(!report.valid);
        assert_eq!(report.errors.len(), 3);
        assert!(report
            .errors
            .contains(&"psych_profile must be an object".to_string()));
        assert!(report
            .errors
            .contains(&"voice_requirements must be an object".to_string()));
    }

    #[test]
    fn test_shape_check_does_not_order_ranges() {
        // min > max 是形状合法的，解析阶段才会拒绝
        let mut candidate = complete_contract();
        candidate["voice_requirements"]["age_range"] = json!([55, 40]);
        let report = validate_structure(&candidate);
        assert!(report.valid);
    }

    #[test]
    fn test_serialized_contract_passes_structure_check() {
        use crate::domain::contract::{CharacterContract, ContractDraft};

        // 聚合自身的序列化输出必须满足结构校验
        let contract = CharacterContract::with_defaults(ContractDraft {
            id: "villain_001".to_string(),
            display_name: "The Strategist".to_string(),
            forbidden_traits: Some(vec!["shouting".to_string()]),
            ..Default::default()
        })
        .unwrap();

        let value = serde_json::to_value(&contract).unwrap();
        let report = validate_structure(&value);
        assert!(report.valid, "unexpected errors: {:?}", report.errors);
    }
}
