//! 분석 서비스 trait 정의.

use async_trait::async_trait;
use coach_core::{AnalysisReport, GamificationStatus, Leaderboard, PortfolioSnapshot, RebalancingPlan};

use crate::ClientResult;

/// 분석 서비스가 제공하는 다섯 가지 조회/요청 작업.
///
/// HTTP 구현 외에 테스트용 가짜 구현을 끼울 수 있도록 trait으로 분리합니다.
#[async_trait]
pub trait AnalyticsApi: Send + Sync {
    /// 종합 행동 분석 리포트 조회.
    async fn get_analysis(&self, user_id: &str) -> ClientResult<AnalysisReport>;

    /// 현재 보유 포트폴리오 조회.
    async fn get_portfolio(&self, user_id: &str) -> ClientResult<PortfolioSnapshot>;

    /// 리밸런싱 계획 생성 요청 (즉시 실행하지 않음).
    async fn create_rebalancing_plan(&self, user_id: &str) -> ClientResult<RebalancingPlan>;

    /// 게이미피케이션 현황 조회.
    async fn get_gamification_status(&self, user_id: &str) -> ClientResult<GamificationStatus>;

    /// 주간 리더보드 조회.
    async fn get_leaderboard(&self) -> ClientResult<Leaderboard>;
}
