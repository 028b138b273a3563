//! 분석 서비스 클라이언트 에러 타입.

use thiserror::Error;

/// 분석 서비스 호출 에러.
#[derive(Debug, Error)]
pub enum ClientError {
    /// 연결 실패 (서버 미기동, DNS 실패 등)
    #[error("Network unavailable: {0}")]
    NetworkUnavailable(String),

    /// 요청 시간 초과
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// 2xx가 아닌 응답
    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    /// 응답 본문 역직렬화 실패
    #[error("Decode error: {0}")]
    DecodeError(String),

    /// 형태는 맞지만 값 검증 실패
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// 잘못된 클라이언트 설정
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// 클라이언트 작업 Result 타입.
pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    /// 서버가 응답했지만 실패 상태였는지 확인.
    pub fn is_server_error(&self) -> bool {
        matches!(self, ClientError::ServerError { .. })
    }

    /// HTTP 상태 코드 (서버 에러일 때만).
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::ServerError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// 백엔드에 닿지 못한 에러인지 확인.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ClientError::NetworkUnavailable(_) | ClientError::Timeout(_)
        )
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout(err.to_string())
        } else if err.is_builder() {
            ClientError::InvalidConfig(err.to_string())
        } else if err.is_decode() {
            ClientError::DecodeError(err.to_string())
        } else if let Some(status) = err.status() {
            ClientError::ServerError {
                status: status.as_u16(),
                body: err.to_string(),
            }
        } else {
            ClientError::NetworkUnavailable(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::DecodeError(err.to_string())
    }
}

impl From<validator::ValidationErrors> for ClientError {
    fn from(err: validator::ValidationErrors) -> Self {
        ClientError::InvalidResponse(err.to_string())
    }
}
