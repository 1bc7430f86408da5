//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `VOXPACT_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `VOXPACT_CONTRACTS__DIR=/data/contracts`
/// - `VOXPACT_AUDIT__ANALYSIS_DIR=/data/analysis`
/// - `VOXPACT_LOG__LEVEL=debug`
///
/// # 返回
/// - `Ok(AppConfig)` - 成功加载的配置
/// - `Err(ConfigError)` - 加载失败
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 首先设置默认值（最低优先级）
    builder = builder
        .set_default("contracts.dir", "data/contracts")?
        .set_default("audit.analysis_dir", "data/analysis")?
        .set_default("audit.report_file", "data/reports/enforcement-report.md")?
        .set_default("audit.results_file", "data/reports/enforcement-results.json")?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 添加配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        // 搜索默认配置文件
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 添加环境变量（最高优先级）
    // 前缀: VOXPACT_
    // 层级分隔符: __ (双下划线)
    // 例如: VOXPACT_CONTRACTS__DIR=/data/contracts
    // 注意: 环境变量名会被转换为小写
    builder = builder.add_source(
        Environment::with_prefix("VOXPACT")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. 构建配置
    let config = builder.build()?;

    // 5. 反序列化为 AppConfig
    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::ParseError(format!("Failed to deserialize config: {}", e)))?;

    // 6. 验证配置
    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    // 验证契约目录
    if config.contracts.dir.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "Contracts directory cannot be empty".to_string(),
        ));
    }

    // 验证审计输出路径
    if config.audit.report_file.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "Report file path cannot be empty".to_string(),
        ));
    }
    if config.audit.results_file.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "Results file path cannot be empty".to_string(),
        ));
    }

    // 验证日志级别
    if config.log.level.is_empty() {
        return Err(ConfigError::ValidationError(
            "Log level cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Contracts Directory: {:?}", config.contracts.dir);
    match &config.catalog.assets_file {
        Some(path) => tracing::info!("Asset Catalog: {:?}", path),
        None => tracing::info!("Asset Catalog: builtin"),
    }
    tracing::info!("Analysis Directory: {:?}", config.audit.analysis_dir);
    tracing::info!("Report File: {:?}", config.audit.report_file);
    tracing::info!("Results File: {:?}", config.audit.results_file);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
