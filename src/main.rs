//! Voxpact - 角色声线契约执行系统
//!
//! 审计入口：加载契约库与资产目录，为每个契约选型并做静态/动态
//! 合规检查，输出 Markdown 审计报告与 JSON 结果

use std::sync::Arc;

use serde::Serialize;

use voxpact::application::{
    AuditContracts, AuditContractsHandler, ContractAuditOutcome, ContractStore,
};
use voxpact::config::{load_config, print_config};
use voxpact::domain::asset::{AssetCatalog, VoiceAsset};
use voxpact::domain::enforcement::EnforcementResult;
use voxpact::infrastructure::{JsonAnalysisSource, JsonContractRepository};

// ============================================================================
// 审计结果落盘格式
// ============================================================================

/// 单个契约的结果条目
#[derive(Debug, Serialize)]
struct AuditEntry {
    contract_id: String,
    display_name: String,
    best_asset_id: Option<String>,
    static_result: EnforcementResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    dynamic_result: Option<EnforcementResult>,
    passed: bool,
}

/// 整次审计的 JSON 摘要
#[derive(Debug, Serialize)]
struct AuditRunSummary {
    run_id: uuid::Uuid,
    generated_at: String,
    total: usize,
    passed: usize,
    failed: usize,
    results: Vec<AuditEntry>,
}

/// 契约整体通过：静态通过，且动态检查存在时也通过
fn outcome_passed(outcome: &ContractAuditOutcome) -> bool {
    outcome.static_result.passed
        && outcome.dynamic_result.as_ref().map_or(true, |r| r.passed)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!("{},voxpact={}", config.log.level, config.log.level);
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));
    if config.log.json {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    tracing::info!("Voxpact - 角色声线契约执行系统");
    print_config(&config);

    // 确保输出目录存在
    if let Some(parent) = config.audit.report_file.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    if let Some(parent) = config.audit.results_file.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    // 构建资产目录：有自定义清单用清单，否则用内置资产
    let catalog = match &config.catalog.assets_file {
        Some(path) => {
            let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
                anyhow::anyhow!("Failed to read asset catalog {}: {}", path.display(), e)
            })?;
            let assets: Vec<VoiceAsset> = serde_json::from_str(&raw).map_err(|e| {
                anyhow::anyhow!("Failed to parse asset catalog {}: {}", path.display(), e)
            })?;
            tracing::info!(
                "Loaded {} voice assets from {}",
                assets.len(),
                path.display()
            );
            AssetCatalog::from_assets(assets)
        }
        None => AssetCatalog::builtin(),
    };
    let catalog = Arc::new(catalog);

    // 组装仓储与审计服务
    let repository = Arc::new(JsonContractRepository::new(&config.contracts.dir).await?);
    let store = Arc::new(ContractStore::new(repository));
    let analysis_source = Arc::new(JsonAnalysisSource::new(&config.audit.analysis_dir));

    let auditor = AuditContractsHandler::new(store, catalog, analysis_source);

    // 执行全量审计
    let response = auditor.handle(AuditContracts).await?;

    if response.outcomes.is_empty() {
        tracing::warn!(
            "No contracts found in {:?}; nothing to audit",
            config.contracts.dir
        );
    }

    // 组合 Markdown 报告
    let run_id = uuid::Uuid::new_v4();
    let generated_at = chrono::Utc::now().to_rfc3339();

    let sections: Vec<&str> = response
        .outcomes
        .iter()
        .map(|o| o.report.as_str())
        .collect();
    let report = format!(
        "# Voice Contract Audit\n\n- **Run**: {}\n- **Generated**: {}\n- **Contracts**: {}\n\n---\n\n{}",
        run_id,
        generated_at,
        response.outcomes.len(),
        sections.join("\n---\n\n"),
    );
    tokio::fs::write(&config.audit.report_file, report).await?;

    // 写 JSON 结果
    let entries: Vec<AuditEntry> = response
        .outcomes
        .iter()
        .map(|o| AuditEntry {
            contract_id: o.contract_id.to_string(),
            display_name: o.display_name.clone(),
            best_asset_id: o.best_asset_id.as_ref().map(|id| id.to_string()),
            static_result: o.static_result.clone(),
            dynamic_result: o.dynamic_result.clone(),
            passed: outcome_passed(o),
        })
        .collect();
    let passed = entries.iter().filter(|e| e.passed).count();

    let summary = AuditRunSummary {
        run_id,
        generated_at,
        total: entries.len(),
        passed,
        failed: entries.len() - passed,
        results: entries,
    };
    tokio::fs::write(
        &config.audit.results_file,
        serde_json::to_string_pretty(&summary)?,
    )
    .await?;

    tracing::info!(
        "Audit complete: total={}, passed={}, failed={}",
        summary.total,
        summary.passed,
        summary.failed
    );
    tracing::info!("Report: {:?}", config.audit.report_file);
    tracing::info!("Results: {:?}", config.audit.results_file);

    Ok(())
}
