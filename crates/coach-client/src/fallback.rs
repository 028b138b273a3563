//! 데모 데이터 대체 정책을 적용하는 클라이언트 façade.
//!
//! 화면 코드는 이 타입만 사용합니다. 각 호출 결과에는 실제 응답인지
//! 데모 데이터로 대체된 것인지를 나타내는 [`DataOrigin`]이 붙습니다.

use std::fmt;
use std::future::Future;

use serde::Serialize;
use tracing::{debug, warn};

use coach_core::{
    AnalysisReport, ApiConfig, GamificationStatus, Leaderboard, PortfolioSnapshot, RebalancingPlan,
};

use crate::{AnalyticsApi, ClientError, ClientResult, DemoFixture, HttpAnalyticsClient};

/// 호출 실패 시 동작.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// 실패를 데모 데이터로 대체
    Demo(DemoFixture),
    /// 실패를 그대로 반환
    Strict,
}

impl FallbackPolicy {
    /// 설정의 `demo_mode` 값으로 정책을 만듭니다.
    pub fn from_demo_mode(demo_mode: bool) -> Self {
        if demo_mode {
            FallbackPolicy::Demo(DemoFixture::default())
        } else {
            FallbackPolicy::Strict
        }
    }

    pub fn is_demo(&self) -> bool {
        matches!(self, FallbackPolicy::Demo(_))
    }
}

/// 데이터 출처.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "origin", rename_all = "lowercase")]
pub enum DataOrigin {
    /// 분석 서비스 실제 응답
    Live,
    /// 호출 실패로 데모 데이터 사용
    Demo {
        /// 대체 원인 (에러 메시지)
        cause: String,
    },
}

impl DataOrigin {
    pub fn is_demo(&self) -> bool {
        matches!(self, DataOrigin::Demo { .. })
    }
}

impl fmt::Display for DataOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataOrigin::Live => write!(f, "live"),
            DataOrigin::Demo { cause } => write!(f, "demo ({})", cause),
        }
    }
}

/// 출처가 붙은 조회 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched<T> {
    pub data: T,
    pub origin: DataOrigin,
}

impl<T> Fetched<T> {
    pub fn live(data: T) -> Self {
        Self {
            data,
            origin: DataOrigin::Live,
        }
    }

    pub fn demo(data: T, cause: &ClientError) -> Self {
        Self {
            data,
            origin: DataOrigin::Demo {
                cause: cause.to_string(),
            },
        }
    }

    /// 데이터만 변환하고 출처는 유지합니다.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Fetched<U> {
        Fetched {
            data: f(self.data),
            origin: self.origin,
        }
    }
}

/// 화면에서 사용하는 분석 서비스 클라이언트.
pub struct AnalyticsClient<C = HttpAnalyticsClient> {
    api: C,
    policy: FallbackPolicy,
}

impl AnalyticsClient<HttpAnalyticsClient> {
    /// 설정으로부터 HTTP 클라이언트와 대체 정책을 구성합니다.
    pub fn from_config(config: &ApiConfig) -> ClientResult<Self> {
        let api = HttpAnalyticsClient::new(config)?;
        Ok(Self::new(api, FallbackPolicy::from_demo_mode(config.demo_mode)))
    }
}

impl<C: AnalyticsApi> AnalyticsClient<C> {
    pub fn new(api: C, policy: FallbackPolicy) -> Self {
        Self { api, policy }
    }

    pub fn policy(&self) -> &FallbackPolicy {
        &self.policy
    }

    /// 호출 결과에 대체 정책을 적용합니다.
    async fn resolve<T, Fut>(
        &self,
        operation: &'static str,
        call: Fut,
        demo: impl FnOnce(&DemoFixture) -> T,
    ) -> ClientResult<Fetched<T>>
    where
        Fut: Future<Output = ClientResult<T>>,
    {
        match call.await {
            Ok(data) => {
                debug!(operation, "live response");
                Ok(Fetched::live(data))
            }
            Err(err) => match &self.policy {
                FallbackPolicy::Demo(fixture) => {
                    warn!(operation, error = %err, "Using demo data due to API error");
                    Ok(Fetched::demo(demo(fixture), &err))
                }
                FallbackPolicy::Strict => Err(err),
            },
        }
    }

    /// 종합 분석 리포트.
    pub async fn get_analysis(&self, user_id: &str) -> ClientResult<Fetched<AnalysisReport>> {
        self.resolve("get_analysis", self.api.get_analysis(user_id), |f| f.analysis())
            .await
    }

    /// 현재 포트폴리오.
    pub async fn get_portfolio(&self, user_id: &str) -> ClientResult<Fetched<PortfolioSnapshot>> {
        self.resolve("get_portfolio", self.api.get_portfolio(user_id), |f| {
            f.portfolio()
        })
        .await
    }

    /// 리밸런싱 계획 생성.
    pub async fn create_rebalancing_plan(
        &self,
        user_id: &str,
    ) -> ClientResult<Fetched<RebalancingPlan>> {
        self.resolve(
            "create_rebalancing_plan",
            self.api.create_rebalancing_plan(user_id),
            |f| f.rebalancing_plan(),
        )
        .await
    }

    /// 게이미피케이션 현황.
    pub async fn get_gamification_status(
        &self,
        user_id: &str,
    ) -> ClientResult<Fetched<GamificationStatus>> {
        self.resolve(
            "get_gamification_status",
            self.api.get_gamification_status(user_id),
            |f| f.gamification_status(user_id),
        )
        .await
    }

    /// 주간 리더보드.
    pub async fn get_leaderboard(&self) -> ClientResult<Fetched<Leaderboard>> {
        self.resolve("get_leaderboard", self.api.get_leaderboard(), |f| {
            f.leaderboard()
        })
        .await
    }
}
