use std::time::Duration;

use chrono_tz::Tz;

use crate::gate::PinCode;
use crate::utils::time::parse_timezone;
use crate::utils::{AppError, AppResult};

/// 前台配置 - 所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖 (支持 `.env` 文件)：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | ADMIN_PIN | 1234 | 设置页 PIN |
/// | OVERVIEW_PIN | 5678 | 预约总览 PIN |
/// | BOOKING_DELAY_MS | 1000 | 提交预约时的模拟延迟(毫秒) |
/// | BUSINESS_TIMEZONE | Asia/Tokyo | 业务时区 (决定"今天") |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | - | 日志目录 (可选) |
/// | ENVIRONMENT | development | 运行环境 |
///
/// Nothing here is persisted: PIN changes made at runtime are lost on restart.
#[derive(Debug, Clone)]
pub struct Config {
    /// 设置页 (admin) 初始 PIN
    pub admin_pin: String,
    /// 预约总览初始 PIN
    pub overview_pin: String,
    /// 提交预约的模拟延迟 (毫秒, 0 = 无延迟)
    pub booking_delay_ms: u64,
    /// 业务时区 (IANA 名称)
    pub business_timezone: String,
    /// 日志级别
    pub log_level: String,
    /// 日志目录
    pub log_dir: Option<String>,
    /// 运行环境: development | staging | production
    pub environment: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            admin_pin: "1234".into(),
            overview_pin: "5678".into(),
            booking_delay_ms: 1000,
            business_timezone: "Asia/Tokyo".into(),
            log_level: "info".into(),
            log_dir: None,
            environment: "development".into(),
        }
    }
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        let defaults = Self::default();

        Self {
            admin_pin: std::env::var("ADMIN_PIN").unwrap_or(defaults.admin_pin),
            overview_pin: std::env::var("OVERVIEW_PIN").unwrap_or(defaults.overview_pin),
            booking_delay_ms: std::env::var("BOOKING_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.booking_delay_ms),
            business_timezone: std::env::var("BUSINESS_TIMEZONE")
                .unwrap_or(defaults.business_timezone),
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            environment: std::env::var("ENVIRONMENT").unwrap_or(defaults.environment),
        }
    }

    /// 使用自定义 PIN 覆盖部分配置，且不做模拟延迟
    ///
    /// 常用于测试场景
    pub fn with_overrides(admin_pin: impl Into<String>, overview_pin: impl Into<String>) -> Self {
        Self {
            admin_pin: admin_pin.into(),
            overview_pin: overview_pin.into(),
            booking_delay_ms: 0,
            ..Self::default()
        }
    }

    /// 校验配置 (PIN 格式、时区)
    pub fn validate(&self) -> AppResult<()> {
        PinCode::parse(&self.admin_pin)
            .map_err(|e| AppError::invalid_config(format!("ADMIN_PIN: {}", e)))?;
        PinCode::parse(&self.overview_pin)
            .map_err(|e| AppError::invalid_config(format!("OVERVIEW_PIN: {}", e)))?;
        self.timezone()?;
        Ok(())
    }

    /// 业务时区
    pub fn timezone(&self) -> AppResult<Tz> {
        parse_timezone(&self.business_timezone)
    }

    /// 提交预约的模拟延迟
    pub fn booking_delay(&self) -> Duration {
        Duration::from_millis(self.booking_delay_ms)
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
