//! 종합 분석 리포트 레코드 (`/analysis/demo/{user_id}` 응답).

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::behavior::{BehaviorAnalysis, MarketComparison};
use super::coaching::CoachingAction;
use super::gamification::GamificationSummary;
use super::ordered_map::OrderedMap;
use super::rebalancing::RebalancingPlan;

/// 종합 투자 행동 분석 리포트.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct AnalysisReport {
    /// 리포트 ID
    pub report_id: String,
    /// 사용자 ID
    pub user_id: String,
    /// 분석 시각 (서버 문자열 그대로)
    pub analysis_date: String,
    /// 행동 지표
    #[validate(nested)]
    pub behavior_analysis: BehaviorAnalysis,
    /// 투자자 유형 (예: "단타형", "FOMO 취약형")
    #[serde(default)]
    pub investor_types: Vec<String>,
    /// AI 코칭 요약 문구
    #[serde(default)]
    pub behavior_summary: String,
    /// 추천 코칭 액션
    #[serde(default)]
    #[validate(nested)]
    pub coaching_actions: Vec<CoachingAction>,
    /// 함께 생성된 리밸런싱 계획 (있을 때만)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rebalancing_plan: Option<RebalancingPlan>,
    /// 게이미피케이션 요약
    #[serde(default)]
    pub gamification: GamificationSummary,
    /// 시장 평균 비교
    #[serde(default)]
    pub market_comparison: MarketComparison,
    /// 개선 목표 (자유 형식)
    #[serde(default)]
    pub improvement_goals: OrderedMap<serde_json::Value>,
    /// 다음 점검 예정일 (서버 문자열 그대로)
    #[serde(default)]
    pub next_review_date: String,
}

impl AnalysisReport {
    /// 다음 점검 예정일 (UTC). 형식을 해석할 수 없으면 `None`.
    pub fn next_review_at(&self) -> Option<DateTime<Utc>> {
        parse_server_timestamp(&self.next_review_date)
    }
}

/// 서버 시각 문자열을 해석합니다.
///
/// 백엔드는 시간대 없는 ISO-8601(`2024-01-15T10:30:00.123456`)을, 데모 데이터는
/// RFC 3339(`...Z`)를 보냅니다. 시간대가 없으면 UTC로 간주합니다.
pub fn parse_server_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_both_timestamp_forms() {
        let z = parse_server_timestamp("2024-01-15T10:30:00.000Z").unwrap();
        let naive = parse_server_timestamp("2024-01-15T10:30:00").unwrap();
        let micros = parse_server_timestamp("2024-01-15T10:30:00.123456").unwrap();

        assert_eq!(z, Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap());
        assert_eq!(z, naive);
        assert!(micros > naive);
        assert!(parse_server_timestamp("next week").is_none());
        assert!(parse_server_timestamp("").is_none());
    }
}
