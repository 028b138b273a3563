//! 대시보드 화면.

use coach_core::targets::{AVG_HOLDING_PERIOD, MONTHLY_TURNOVER, WIN_RATE};
use coach_core::{AnalysisReport, ChartSource};
use serde::Serialize;

use crate::components::{BehaviorChart, CoachingCard, MetricCard};
use crate::format::fixed;

/// 화면 부제.
pub const TAGLINE: &str = "투자, 공부보다 습관이 더 중요합니다";

/// 대시보드 표시 모델.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    /// 보유기간, 회전율, 승률, 레벨 순서의 카드 4장
    pub cards: Vec<MetricCard>,
    /// 오늘의 AI 코칭 문구
    pub coaching_message: String,
    pub chart: BehaviorChart,
    pub coaching_cards: Vec<CoachingCard>,
}

impl DashboardView {
    pub fn build(report: &AnalysisReport, chart_source: ChartSource) -> Self {
        let behavior = &report.behavior_analysis;

        let cards = vec![
            MetricCard::evaluated(
                "평균 보유기간",
                behavior.avg_holding_period,
                format!("{}일", fixed(behavior.avg_holding_period, 1)),
                "목표: 7일 이상",
                AVG_HOLDING_PERIOD,
            ),
            MetricCard::evaluated(
                "월 회전율",
                behavior.turnover_rate,
                format!("{}%", fixed(behavior.turnover_rate, 0)),
                "목표: 30% 이하",
                MONTHLY_TURNOVER,
            ),
            MetricCard::evaluated(
                "승률",
                behavior.win_rate,
                format!("{}%", fixed(behavior.win_rate, 1)),
                "목표: 60% 이상",
                WIN_RATE,
            ),
            MetricCard::neutral(
                "레벨",
                report.gamification.level_title().to_string(),
                format!("{}P", report.gamification.points),
            ),
        ];

        Self {
            cards,
            coaching_message: report.behavior_summary.clone(),
            chart: BehaviorChart::build(chart_source, Some(behavior)),
            coaching_cards: report
                .coaching_actions
                .iter()
                .map(CoachingCard::from_action)
                .collect(),
        }
    }

    /// 제목으로 카드를 찾습니다.
    pub fn card(&self, title: &str) -> Option<&MetricCard> {
        self.cards.iter().find(|c| c.title == title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::MetricStatus;
    use coach_client::DemoFixture;
    use proptest::prelude::*;

    fn report_with(holding: f64, turnover: f64) -> AnalysisReport {
        let mut report = DemoFixture::new().analysis();
        report.behavior_analysis.avg_holding_period = holding;
        report.behavior_analysis.turnover_rate = turnover;
        report
    }

    #[test]
    fn test_demo_dashboard() {
        let view = DashboardView::build(&DemoFixture::new().analysis(), ChartSource::Illustrative);

        assert_eq!(view.cards.len(), 4);
        let holding = view.card("평균 보유기간").unwrap();
        assert_eq!(holding.value, "5.9일");
        assert_eq!(holding.status, MetricStatus::Bad);
        assert_eq!(view.card("월 회전율").unwrap().value, "45%");
        assert_eq!(view.card("승률").unwrap().value, "42.3%");

        let level = view.card("레벨").unwrap();
        assert_eq!(level.value, "투자 수련생");
        assert_eq!(level.target, "1500P");
        assert_eq!(level.status, MetricStatus::Neutral);

        assert_eq!(view.coaching_cards.len(), 3);
        assert!(view.chart.is_illustrative());
    }

    #[test]
    fn test_level_defaults_without_gamification() {
        let mut report = DemoFixture::new().analysis();
        report.gamification = Default::default();
        let view = DashboardView::build(&report, ChartSource::Illustrative);

        let level = view.card("레벨").unwrap();
        assert_eq!(level.value, "투자 입문자");
        assert_eq!(level.target, "0P");
    }

    #[test]
    fn test_boundaries() {
        let view = DashboardView::build(&report_with(7.0, 30.0), ChartSource::Illustrative);
        assert_eq!(view.card("평균 보유기간").unwrap().status, MetricStatus::Good);
        assert_eq!(view.card("월 회전율").unwrap().status, MetricStatus::Good);
    }

    #[test]
    fn test_turnover_tie_rounds_up() {
        let view = DashboardView::build(&report_with(10.0, 30.5), ChartSource::Illustrative);
        let turnover = view.card("월 회전율").unwrap();
        assert_eq!(turnover.value, "31%");
        assert_eq!(turnover.status, MetricStatus::Bad);
    }

    proptest! {
        #[test]
        fn prop_holding_badge_good_iff_at_least_seven(holding in 0.0f64..60.0) {
            let view = DashboardView::build(&report_with(holding, 10.0), ChartSource::Illustrative);
            let good = view.card("평균 보유기간").unwrap().status == MetricStatus::Good;
            prop_assert_eq!(good, holding >= 7.0);
        }

        #[test]
        fn prop_turnover_badge_good_iff_at_most_thirty(turnover in 0.0f64..200.0) {
            let view = DashboardView::build(&report_with(10.0, turnover), ChartSource::Illustrative);
            let good = view.card("월 회전율").unwrap().status == MetricStatus::Good;
            prop_assert_eq!(good, turnover <= 30.0);
        }
    }
}
