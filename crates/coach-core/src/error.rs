//! 대시보드 공통 에러 타입.
//!
//! 설정 로드와 로깅 초기화 과정에서 발생하는 에러를 정의합니다.
//! HTTP 호출과 응답 검증 에러는 `coach-client` 크레이트의 `ClientError`가 담당합니다.

use thiserror::Error;

/// 핵심 대시보드 에러.
#[derive(Debug, Error)]
pub enum CoachError {
    /// 설정 에러
    #[error("설정 에러: {0}")]
    Config(String),

    /// 로깅 초기화 에러
    #[error("로깅 에러: {0}")]
    Logging(String),
}

/// 대시보드 작업을 위한 Result 타입.
pub type CoachResult<T> = Result<T, CoachError>;

impl From<config::ConfigError> for CoachError {
    fn from(err: config::ConfigError) -> Self {
        CoachError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_error() {
        let err = config::ConfigError::NotFound("api.base_url".into());
        let coach_err: CoachError = err.into();
        assert!(matches!(coach_err, CoachError::Config(ref m) if m.contains("api.base_url")));
        assert!(coach_err.to_string().starts_with("설정 에러"));
    }
}
