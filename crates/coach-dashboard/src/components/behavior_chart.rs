//! 투자 행동 추이 차트.
//!
//! 추이 데이터를 주는 API가 아직 없어 기본값은 고정된 4개월 예시 시계열입니다.
//! `ChartSource::Snapshot`이면 전달된 분석 값 하나만 현재 시점으로 그립니다.

use coach_core::{BehaviorAnalysis, ChartSource};
use serde::Serialize;

/// 차트 제목.
pub const CHART_TITLE: &str = "투자 행동 추이";

/// 시계열 이름과 선 색상.
pub const SERIES: [(&str, &str); 3] = [
    ("보유기간", "#3B82F6"),
    ("회전율", "#EF4444"),
    ("승률", "#10B981"),
];

/// 차트의 한 시점.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    /// x축 라벨 (예: "10월")
    pub label: String,
    pub holding_period: f64,
    pub turnover: f64,
    pub win_rate: f64,
}

impl ChartPoint {
    fn new(label: &str, holding_period: f64, turnover: f64, win_rate: f64) -> Self {
        Self {
            label: label.to_string(),
            holding_period,
            turnover,
            win_rate,
        }
    }

    /// `SERIES` 순서의 값.
    pub fn values(&self) -> [f64; 3] {
        [self.holding_period, self.turnover, self.win_rate]
    }
}

/// 차트 표시 모델.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BehaviorChart {
    pub source: ChartSource,
    pub points: Vec<ChartPoint>,
}

impl BehaviorChart {
    /// 차트 데이터를 만듭니다.
    ///
    /// `Illustrative`에서는 `analysis`를 보지 않습니다.
    pub fn build(source: ChartSource, analysis: Option<&BehaviorAnalysis>) -> Self {
        let points = match (source, analysis) {
            (ChartSource::Snapshot, Some(a)) => vec![ChartPoint::new(
                "현재",
                a.avg_holding_period,
                a.turnover_rate,
                a.win_rate,
            )],
            (ChartSource::Snapshot, None) => Vec::new(),
            (ChartSource::Illustrative, _) => illustrative_series(),
        };

        Self { source, points }
    }

    pub fn is_illustrative(&self) -> bool {
        self.source == ChartSource::Illustrative
    }
}

/// 10월 → 1월 예시 시계열.
pub fn illustrative_series() -> Vec<ChartPoint> {
    vec![
        ChartPoint::new("10월", 3.2, 52.0, 38.0),
        ChartPoint::new("11월", 4.5, 48.0, 42.0),
        ChartPoint::new("12월", 5.1, 45.0, 45.0),
        ChartPoint::new("1월", 5.9, 42.0, 48.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis(holding: f64) -> BehaviorAnalysis {
        serde_json::from_value(serde_json::json!({
            "user_id": "u",
            "analysis_date": "2024-01-15T10:30:00",
            "avg_holding_period": holding,
            "turnover_rate": 20.0,
            "win_loss_ratio": 1.0,
            "win_rate": 55.0,
            "sector_concentration": {}
        }))
        .unwrap()
    }

    #[test]
    fn test_illustrative_ignores_input() {
        let a = BehaviorChart::build(ChartSource::Illustrative, Some(&analysis(30.0)));
        let b = BehaviorChart::build(ChartSource::Illustrative, None);
        assert_eq!(a, b);
        assert_eq!(a.points.len(), 4);
        assert_eq!(a.points[0].label, "10월");
        assert_eq!(a.points[3].values(), [5.9, 42.0, 48.0]);
        assert!(a.is_illustrative());
    }

    #[test]
    fn test_snapshot_plots_current_values() {
        let chart = BehaviorChart::build(ChartSource::Snapshot, Some(&analysis(12.5)));
        assert_eq!(chart.points.len(), 1);
        assert_eq!(chart.points[0].values(), [12.5, 20.0, 55.0]);

        assert!(BehaviorChart::build(ChartSource::Snapshot, None).points.is_empty());
    }
}
