//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// 契约存储配置
    #[serde(default)]
    pub contracts: ContractsConfig,

    /// 资产目录配置
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// 审计配置
    #[serde(default)]
    pub audit: AuditConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            contracts: ContractsConfig::default(),
            catalog: CatalogConfig::default(),
            audit: AuditConfig::default(),
            log: LogConfig::default(),
        }
    }
}

/// 契约存储配置
#[derive(Debug, Clone, Deserialize)]
pub struct ContractsConfig {
    /// 契约 JSON 文件目录
    #[serde(default = "default_contracts_dir")]
    pub dir: PathBuf,
}

fn default_contracts_dir() -> PathBuf {
    PathBuf::from("data/contracts")
}

impl Default for ContractsConfig {
    fn default() -> Self {
        Self {
            dir: default_contracts_dir(),
        }
    }
}

/// 资产目录配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// 自定义资产清单（JSON 数组文件）
    /// 未设置时使用内置资产目录
    #[serde(default)]
    pub assets_file: Option<PathBuf>,
}

/// 审计配置
#[derive(Debug, Clone, Deserialize)]
pub struct AuditConfig {
    /// 外部分析器落盘的声学测量目录
    #[serde(default = "default_analysis_dir")]
    pub analysis_dir: PathBuf,

    /// Markdown 审计报告输出路径
    #[serde(default = "default_report_file")]
    pub report_file: PathBuf,

    /// JSON 审计结果输出路径
    #[serde(default = "default_results_file")]
    pub results_file: PathBuf,
}

fn default_analysis_dir() -> PathBuf {
    PathBuf::from("data/analysis")
}

fn default_report_file() -> PathBuf {
    PathBuf::from("data/reports/enforcement-report.md")
}

fn default_results_file() -> PathBuf {
    PathBuf::from("data/reports/enforcement-results.json")
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            analysis_dir: default_analysis_dir(),
            report_file: default_report_file(),
            results_file: default_results_file(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.contracts.dir, PathBuf::from("data/contracts"));
        assert!(config.catalog.assets_file.is_none());
        assert_eq!(config.audit.analysis_dir, PathBuf::from("data/analysis"));
        assert_eq!(config.log.level, "info");
        assert!(!config.log.json);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let raw = r#"{ "contracts": { "dir": "custom/contracts" } }"#;
        let config: AppConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(config.contracts.dir, PathBuf::from("custom/contracts"));
        assert_eq!(
            config.audit.report_file,
            PathBuf::from("data/reports/enforcement-report.md")
        );
    }
}
