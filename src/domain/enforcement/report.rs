//! 执行报告渲染
//!
//! 把一次静态校验（可选附带动态校验）渲染为 Markdown 文本，
//! 供审计产物与人工复核使用。

use crate::domain::asset::VoiceAsset;
use crate::domain::contract::CharacterContract;

use super::{
    validate_audio_for_contract, validate_voice_for_contract, AcousticAnalysis, EnforcementResult,
};

/// 为一对（契约, 声线）生成执行报告
///
/// 静态校验总是包含；动态校验部分仅在提供了声学分析时出现
pub fn generate_report(
    contract: &CharacterContract,
    asset: &VoiceAsset,
    analysis: Option<&AcousticAnalysis>,
) -> String {
    let static_result = validate_voice_for_contract(contract, asset);
    let dynamic_result = analysis.map(|a| validate_audio_for_contract(contract, a));

    let mut report = String::new();
    report.push_str("# Contract Enforcement Report\n");
    report.push_str(&format!("## Character: {}\n", contract.display_name));
    report.push_str(&format!("## Voice: {}\n\n", asset.name));

    report.push_str("### Static Validation (Voice Profile)\n");
    push_summary(&mut report, &static_result);

    if !static_result.violations.is_empty() {
        report.push_str("\n#### Violations:\n");
        for v in &static_result.violations {
            report.push_str(&format!(
                "- [{}] {}: {}\n",
                v.severity.as_str().to_uppercase(),
                v.code,
                v.message
            ));
            report.push_str(&format!("  - Expected: {}\n", v.expected));
            report.push_str(&format!("  - Actual: {}\n", v.actual));
        }
    }

    if !static_result.warnings.is_empty() {
        report.push_str("\n#### Warnings:\n");
        for warning in &static_result.warnings {
            report.push_str(&format!("- ⚠️ {}\n", warning));
        }
    }

    if let Some(dynamic) = dynamic_result {
        report.push_str("\n### Dynamic Validation (Generated Audio)\n");
        push_summary(&mut report, &dynamic);

        if !dynamic.violations.is_empty() {
            report.push_str("\n#### Audio Violations:\n");
            for v in &dynamic.violations {
                report.push_str(&format!(
                    "- [{}] {}: {}\n",
                    v.severity.as_str().to_uppercase(),
                    v.code,
                    v.message
                ));
            }
        }
    }

    report
}

/// 为没有任何候选声线的契约生成占位报告
///
/// 审计 Markdown 按契约数渲染小节，候选集为空的契约也要占一节
pub fn generate_unmatched_report(contract: &CharacterContract) -> String {
    let mut report = String::new();
    report.push_str("# Contract Enforcement Report\n");
    report.push_str(&format!("## Character: {}\n\n", contract.display_name));
    report.push_str("- **Status**: ❌ FAILED\n");
    report.push_str("- No candidate assets available\n");
    report
}

fn push_summary(report: &mut String, result: &EnforcementResult) {
    let status = if result.passed { "✅ PASSED" } else { "❌ FAILED" };
    report.push_str(&format!("- **Status**: {}\n", status));
    report.push_str(&format!("- **Score**: {}/100\n", result.score));
}
