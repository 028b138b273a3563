//! 설정 관리.
//!
//! 기본값 → 설정 파일(TOML, 선택) → 환경 변수 순서로 덮어씁니다.
//! 환경 변수는 `COACH__API__BASE_URL`처럼 `COACH` 접두사와 `__` 구분자를 사용하며,
//! 단축 변수 `COACH_API_URL`은 API 기본 URL만 덮어씁니다.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{CoachError, CoachResult};

/// 분석 서비스 기본 URL.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api/v1";

/// 기본 사용자 ID.
pub const DEFAULT_USER_ID: &str = "demo_user";

/// API 기본 URL 단축 환경 변수.
pub const API_URL_ENV: &str = "COACH_API_URL";

/// 애플리케이션 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct AppConfig {
    /// 원격 분석 서비스 설정
    #[serde(default)]
    pub api: ApiConfig,
    /// 로깅 설정
    #[serde(default)]
    pub logging: LoggingConfig,
    /// 대시보드 표시 설정
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

/// 원격 분석 서비스 설정.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ApiConfig {
    /// REST API 기본 URL
    pub base_url: String,
    /// 요청 타임아웃 (초)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// 데모 모드: 호출 실패 시 데모 데이터로 대체
    #[serde(default = "default_demo_mode")]
    pub demo_mode: bool,
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_demo_mode() -> bool {
    true
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: default_timeout_secs(),
            demo_mode: default_demo_mode(),
        }
    }
}

impl ApiConfig {
    /// 기본 URL을 변경합니다.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// 끝의 `/`를 제거한 기본 URL.
    pub fn trimmed_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "compact".to_string(),
        }
    }
}

/// 행동 추이 차트의 데이터 출처.
///
/// 차트는 원래 전달된 분석 값과 무관하게 고정된 예시 시계열을 그립니다.
/// 실제 추이 API가 생기기 전까지는 `Illustrative`가 기본값입니다.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChartSource {
    /// 고정된 4개월 예시 시계열
    #[default]
    Illustrative,
    /// 전달된 분석 값 하나만 찍는 스냅샷
    Snapshot,
}

impl std::str::FromStr for ChartSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "illustrative" => Ok(Self::Illustrative),
            "snapshot" => Ok(Self::Snapshot),
            _ => Err(format!(
                "Unknown chart source: {}. Use: illustrative, snapshot",
                s
            )),
        }
    }
}

/// 대시보드 표시 설정.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct DashboardConfig {
    /// 조회할 사용자 ID
    pub user_id: String,
    /// 행동 추이 차트 데이터 출처
    #[serde(default)]
    pub chart_source: ChartSource,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            user_id: DEFAULT_USER_ID.to_string(),
            chart_source: ChartSource::default(),
        }
    }
}

impl AppConfig {
    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError>
    {
        config::Config::builder()
            .set_default("api.base_url", DEFAULT_API_BASE_URL)?
            .set_default("api.timeout_secs", default_timeout_secs() as i64)?
            .set_default("api.demo_mode", default_demo_mode())?
            .set_default("logging.level", "warn")?
            .set_default("logging.format", "compact")?
            .set_default("dashboard.user_id", DEFAULT_USER_ID)?
            .set_default("dashboard.chart_source", "illustrative")
    }

    /// 파일(선택)과 환경 변수에서 설정을 로드합니다.
    ///
    /// `path`가 주어졌는데 파일이 없으면 에러, `None`이면 `config/default.toml`을
    /// 있을 때만 읽습니다.
    pub fn load(path: Option<&Path>) -> CoachResult<Self> {
        let file = match path {
            Some(p) => config::File::from(p).required(true),
            None => config::File::with_name("config/default").required(false),
        };

        let settings = Self::builder()?
            .add_source(file)
            .add_source(
                config::Environment::with_prefix("COACH")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut config: Self = settings.try_deserialize()?;

        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                config.api.base_url = url;
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// TOML 문자열에서 설정을 로드합니다 (환경 변수 미적용).
    pub fn from_toml_str(toml: &str) -> CoachResult<Self> {
        let settings = Self::builder()?
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// 설정 값을 검증합니다.
    pub fn validate(&self) -> CoachResult<()> {
        let url = self.api.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(CoachError::Config(format!(
                "api.base_url must start with http:// or https://: {}",
                self.api.base_url
            )));
        }

        if self.api.timeout_secs == 0 {
            return Err(CoachError::Config(
                "api.timeout_secs must be greater than 0".into(),
            ));
        }

        if self.dashboard.user_id.trim().is_empty() {
            return Err(CoachError::Config("dashboard.user_id must not be empty".into()));
        }

        Ok(())
    }
}
