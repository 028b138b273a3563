//! 상세 분석 화면.

use coach_core::targets::{
    self, Threshold, MARKET_AVG_HOLDING_PERIOD, MARKET_AVG_TURNOVER, MARKET_AVG_WIN_RATE,
};
use coach_core::{AnalysisReport, BehaviorAnalysis};
use serde::Serialize;

use crate::components::MetricStatus;
use crate::format::fixed;

/// 섹터 파이 차트 색상 (인덱스 순환).
pub const SECTOR_PALETTE: [&str; 5] = ["#3B82F6", "#10B981", "#F59E0B", "#EF4444", "#8B5CF6"];

/// 목표 대비 지표 한 줄.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricRow {
    pub label: &'static str,
    /// 포맷된 값
    pub value: String,
    pub current: f64,
    pub threshold: Threshold,
    pub status: MetricStatus,
}

impl MetricRow {
    fn new(label: &'static str, value: String, current: f64, threshold: Threshold) -> Self {
        Self {
            label,
            value,
            current,
            threshold,
            status: MetricStatus::evaluate(current, threshold),
        }
    }

    pub fn is_good(&self) -> bool {
        self.status == MetricStatus::Good
    }
}

/// 섹터 파이 조각.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub sector: String,
    /// 비중 (%)
    pub percent: f64,
    pub color: &'static str,
}

/// 시장 평균 비교 카드.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonCard {
    pub label: &'static str,
    pub mine: f64,
    pub market: f64,
    pub unit: &'static str,
    /// 낮을수록 좋은 지표
    pub inverse: bool,
}

impl ComparisonCard {
    /// 시장 대비 차이 (%) = (내 값 - 시장 값) / 시장 값 × 100.
    pub fn diff_pct(&self) -> f64 {
        (self.mine - self.market) / self.market * 100.0
    }

    /// 시장보다 엄격하게 나은지.
    pub fn is_good(&self) -> bool {
        if self.inverse {
            self.mine < self.market
        } else {
            self.mine > self.market
        }
    }

    /// "+12.3%" 형태의 차이 문구.
    pub fn diff_label(&self) -> String {
        let diff = fixed(self.diff_pct(), 1);
        let positive = diff.parse::<f64>().map(|d| d > 0.0).unwrap_or(false);
        format!("{}{}%", if positive { "+" } else { "" }, diff)
    }
}

/// 상세 분석 표시 모델.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisView {
    pub investor_types: Vec<String>,
    pub behavior_rows: Vec<MetricRow>,
    pub risk_rows: Vec<MetricRow>,
    pub sector_slices: Vec<PieSlice>,
    pub comparisons: Vec<ComparisonCard>,
    /// 다음 점검 예정일 (`YYYY-MM-DD`), 해석할 수 없으면 `None`
    pub next_review: Option<String>,
}

impl AnalysisView {
    pub fn build(report: &AnalysisReport) -> Self {
        let b = &report.behavior_analysis;

        Self {
            investor_types: report.investor_types.clone(),
            behavior_rows: behavior_rows(b),
            risk_rows: risk_rows(b),
            sector_slices: sector_slices(b),
            comparisons: comparisons(b),
            next_review: report
                .next_review_at()
                .map(|at| at.format("%Y-%m-%d").to_string()),
        }
    }
}

fn behavior_rows(b: &BehaviorAnalysis) -> Vec<MetricRow> {
    vec![
        MetricRow::new(
            "평균 보유기간",
            format!("{}일", fixed(b.avg_holding_period, 1)),
            b.avg_holding_period,
            targets::AVG_HOLDING_PERIOD,
        ),
        MetricRow::new(
            "월 회전율",
            format!("{}%", fixed(b.turnover_rate, 0)),
            b.turnover_rate,
            targets::MONTHLY_TURNOVER,
        ),
        MetricRow::new(
            "승률",
            format!("{}%", fixed(b.win_rate, 1)),
            b.win_rate,
            targets::WIN_RATE,
        ),
        MetricRow::new(
            "손익비",
            fixed(b.win_loss_ratio, 2),
            b.win_loss_ratio,
            targets::WIN_LOSS_RATIO,
        ),
    ]
}

fn risk_rows(b: &BehaviorAnalysis) -> Vec<MetricRow> {
    let cash_pct = b.cash_ratio_pct();
    vec![
        MetricRow::new(
            "포트폴리오 변동성",
            format!("{}%", fixed(b.portfolio_volatility, 1)),
            b.portfolio_volatility,
            targets::PORTFOLIO_VOLATILITY,
        ),
        MetricRow::new(
            "최대 손실폭 (MDD)",
            format!("{}%", fixed(b.max_drawdown, 1)),
            b.max_drawdown,
            targets::MAX_DRAWDOWN,
        ),
        MetricRow::new(
            "현금 비중",
            format!("{}%", fixed(cash_pct, 0)),
            cash_pct,
            targets::CASH_RATIO_PCT,
        ),
        MetricRow::new(
            "FOMO 매수 횟수",
            format!("{}회/월", b.fomo_purchase_count),
            f64::from(b.fomo_purchase_count),
            targets::FOMO_COUNT,
        ),
    ]
}

/// 섹터 비중을 파이 조각으로 변환합니다. 순서는 서버 응답 순서를 따릅니다.
pub fn sector_slices(b: &BehaviorAnalysis) -> Vec<PieSlice> {
    b.sector_concentration
        .iter()
        .enumerate()
        .map(|(index, (sector, fraction))| PieSlice {
            sector: sector.to_string(),
            percent: fraction * 100.0,
            color: SECTOR_PALETTE[index % SECTOR_PALETTE.len()],
        })
        .collect()
}

fn comparisons(b: &BehaviorAnalysis) -> Vec<ComparisonCard> {
    vec![
        ComparisonCard {
            label: "평균 보유기간",
            mine: b.avg_holding_period,
            market: MARKET_AVG_HOLDING_PERIOD,
            unit: "일",
            inverse: false,
        },
        ComparisonCard {
            label: "월 회전율",
            mine: b.turnover_rate,
            market: MARKET_AVG_TURNOVER,
            unit: "%",
            inverse: true,
        },
        ComparisonCard {
            label: "승률",
            mine: b.win_rate,
            market: MARKET_AVG_WIN_RATE,
            unit: "%",
            inverse: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use coach_client::DemoFixture;
    use coach_core::OrderedMap;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_demo_analysis_rows() {
        let view = AnalysisView::build(&DemoFixture::new().analysis());

        assert_eq!(view.investor_types, vec!["단타형", "FOMO 취약형"]);
        let labels: Vec<_> = view.behavior_rows.iter().map(|r| r.value.as_str()).collect();
        assert_eq!(labels, vec!["5.9일", "45%", "42.3%", "0.82"]);
        assert!(view.behavior_rows.iter().all(|r| !r.is_good()));

        let cash = &view.risk_rows[2];
        assert_eq!(cash.value, "5%");
        assert!(!cash.is_good());
        assert_eq!(view.risk_rows[3].value, "12회/월");
    }

    #[test]
    fn test_next_review_date() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        let view = AnalysisView::build(&DemoFixture::new().analysis_at(now));
        assert_eq!(view.next_review.as_deref(), Some("2024-01-22"));

        let mut report = DemoFixture::new().analysis_at(now);
        report.next_review_date = "다음 주".into();
        assert!(AnalysisView::build(&report).next_review.is_none());
    }

    #[test]
    fn test_demo_sector_slices() {
        let view = AnalysisView::build(&DemoFixture::new().analysis());
        let slices = &view.sector_slices;

        assert_eq!(slices.len(), 5);
        assert_eq!(slices[0].sector, "IT");
        assert_eq!(slices[0].percent, 0.65 * 100.0);
        assert_eq!(slices[0].color, "#3B82F6");
        assert_eq!(slices[4].color, "#8B5CF6");
    }

    #[test]
    fn test_palette_cycles() {
        let mut analysis = DemoFixture::new().analysis().behavior_analysis;
        analysis.sector_concentration = (0..7).map(|i| (format!("S{}", i), 0.1)).collect();
        let slices = sector_slices(&analysis);
        assert_eq!(slices[5].color, SECTOR_PALETTE[0]);
        assert_eq!(slices[6].color, SECTOR_PALETTE[1]);
    }

    #[test]
    fn test_comparison_against_market() {
        let view = AnalysisView::build(&DemoFixture::new().analysis());
        // 데모 값은 시장 평균과 같아 모두 "좋음"이 아님
        assert!(view.comparisons.iter().all(|c| !c.is_good()));
        assert_eq!(view.comparisons[0].diff_label(), "0.0%");

        let card = ComparisonCard {
            label: "월 회전율",
            mine: 30.0,
            market: MARKET_AVG_TURNOVER,
            unit: "%",
            inverse: true,
        };
        assert!(card.is_good());
        assert_eq!(card.diff_label(), "-33.6%");

        let card = ComparisonCard {
            label: "승률",
            mine: 50.0,
            market: MARKET_AVG_WIN_RATE,
            unit: "%",
            inverse: false,
        };
        assert!(card.is_good());
        assert_eq!(card.diff_label(), "+18.2%");
    }

    proptest! {
        #[test]
        fn prop_slices_scale_each_fraction_by_hundred(
            fractions in proptest::collection::btree_map("[A-Z가-힣]{1,6}", 0.0f64..=1.0, 0..8)
        ) {
            let mut analysis = DemoFixture::new().analysis().behavior_analysis;
            analysis.sector_concentration = fractions.iter().map(|(k, v)| (k.clone(), *v)).collect::<OrderedMap<f64>>();

            let slices = sector_slices(&analysis);

            let names: BTreeSet<&str> = slices.iter().map(|s| s.sector.as_str()).collect();
            let expected: BTreeSet<&str> = fractions.keys().map(String::as_str).collect();
            prop_assert_eq!(names, expected);
            for slice in &slices {
                prop_assert_eq!(slice.percent, fractions[&slice.sector] * 100.0);
            }
        }
    }
}
