//! 지표 카드.

use coach_core::Threshold;
use serde::Serialize;

/// 카드 상태.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricStatus {
    Good,
    Bad,
    Neutral,
}

impl MetricStatus {
    /// 목표 기준으로 상태를 판정합니다.
    pub fn evaluate(value: f64, threshold: Threshold) -> Self {
        if threshold.is_met(value) {
            MetricStatus::Good
        } else {
            MetricStatus::Bad
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            MetricStatus::Good => "green",
            MetricStatus::Bad => "red",
            MetricStatus::Neutral => "gray",
        }
    }

    /// 터미널 표시용 기호.
    pub fn marker(&self) -> &'static str {
        match self {
            MetricStatus::Good => "▲",
            MetricStatus::Bad => "▼",
            MetricStatus::Neutral => "·",
        }
    }
}

/// 지표 카드 표시 모델.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricCard {
    pub title: String,
    /// 포맷된 값 (예: "5.9일")
    pub value: String,
    /// 목표 문구 (예: "목표: 7일 이상")
    pub target: String,
    pub status: MetricStatus,
}

impl MetricCard {
    /// 목표와 비교해 상태가 정해지는 카드.
    pub fn evaluated(
        title: impl Into<String>,
        value: f64,
        display: String,
        target: impl Into<String>,
        threshold: Threshold,
    ) -> Self {
        Self {
            title: title.into(),
            value: display,
            target: target.into(),
            status: MetricStatus::evaluate(value, threshold),
        }
    }

    /// 판정 없이 보여주기만 하는 카드.
    pub fn neutral(title: impl Into<String>, display: String, target: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: display,
            target: target.into(),
            status: MetricStatus::Neutral,
        }
    }

    pub fn color(&self) -> &'static str {
        self.status.color()
    }
}
