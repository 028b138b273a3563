//! 분석 서비스 REST 클라이언트.
//!
//! JSON 응답을 레코드로 디코딩한 뒤 `validator` 규칙으로 검증합니다.
//! 재시도나 캐시는 하지 않습니다.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error};
use validator::Validate;

use coach_core::{
    AnalysisReport, ApiConfig, GamificationStatus, Leaderboard, PortfolioSnapshot,
    RebalanceRequest, RebalancingPlan,
};

use crate::{AnalyticsApi, ClientError, ClientResult};

// ============================================================================
// 엔드포인트
// ============================================================================

fn analysis_path(user_id: &str) -> [&str; 3] {
    ["analysis", "demo", user_id]
}

fn portfolio_path(user_id: &str) -> [&str; 3] {
    ["portfolio", "current", user_id]
}

const REBALANCE_PATH: [&str; 2] = ["portfolio", "rebalance"];

fn gamification_status_path(user_id: &str) -> [&str; 4] {
    ["gamification", "user", user_id, "status"]
}

const LEADERBOARD_PATH: [&str; 2] = ["gamification", "leaderboard"];

// ============================================================================
// 클라이언트
// ============================================================================

/// `reqwest` 기반 분석 서비스 클라이언트.
#[derive(Debug, Clone)]
pub struct HttpAnalyticsClient {
    base_url: Url,
    client: Client,
}

impl HttpAnalyticsClient {
    /// 설정으로부터 클라이언트를 생성합니다.
    pub fn new(config: &ApiConfig) -> ClientResult<Self> {
        let raw = config.trimmed_base_url().trim();
        if !(raw.starts_with("http://") || raw.starts_with("https://")) {
            return Err(ClientError::InvalidConfig(format!(
                "base URL must start with http:// or https://: {}",
                config.base_url
            )));
        }
        let base_url = Url::parse(raw)
            .map_err(|e| ClientError::InvalidConfig(format!("invalid base URL {}: {}", raw, e)))?;
        if config.timeout_secs == 0 {
            return Err(ClientError::InvalidConfig(
                "timeout must be greater than 0".into(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ClientError::InvalidConfig(format!("HTTP 클라이언트 생성 실패: {}", e)))?;

        Ok(Self { base_url, client })
    }

    /// 요청 대상 기본 URL.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// 기본 URL 뒤에 경로 세그먼트를 붙입니다. 각 세그먼트는 퍼센트 인코딩됩니다.
    fn url(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ClientError::InvalidConfig(format!("base URL cannot take a path: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get<T>(&self, segments: &[&str]) -> ClientResult<T>
    where
        T: DeserializeOwned + Validate,
    {
        let url = self.url(segments)?;
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        self.handle_response(response).await
    }

    async fn post<B, T>(&self, segments: &[&str], body: &B) -> ClientResult<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Validate,
    {
        let url = self.url(segments)?;
        debug!("POST {}", url);

        let response = self.client.post(url).json(body).send().await?;
        self.handle_response(response).await
    }

    /// 응답 처리: 상태 확인 → 디코딩 → 검증.
    async fn handle_response<T>(&self, response: reqwest::Response) -> ClientResult<T>
    where
        T: DeserializeOwned + Validate,
    {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::ServerError {
                status: status.as_u16(),
                body,
            });
        }

        let record: T = serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse response: {} - Body: {}", e, body);
            ClientError::DecodeError(e.to_string())
        })?;

        record.validate().map_err(|e| {
            error!("Response failed validation: {}", e);
            ClientError::InvalidResponse(e.to_string())
        })?;

        Ok(record)
    }
}

#[async_trait]
impl AnalyticsApi for HttpAnalyticsClient {
    async fn get_analysis(&self, user_id: &str) -> ClientResult<AnalysisReport> {
        self.get(&analysis_path(user_id)).await
    }

    async fn get_portfolio(&self, user_id: &str) -> ClientResult<PortfolioSnapshot> {
        self.get(&portfolio_path(user_id)).await
    }

    async fn create_rebalancing_plan(&self, user_id: &str) -> ClientResult<RebalancingPlan> {
        let request = RebalanceRequest::new(user_id);
        self.post(&REBALANCE_PATH, &request).await
    }

    async fn get_gamification_status(&self, user_id: &str) -> ClientResult<GamificationStatus> {
        self.get(&gamification_status_path(user_id)).await
    }

    async fn get_leaderboard(&self) -> ClientResult<Leaderboard> {
        self.get(&LEADERBOARD_PATH).await
    }
}
