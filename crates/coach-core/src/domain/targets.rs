//! KPI 목표치 및 시장 평균 기준값.
//!
//! 화면의 상태 배지와 비교 카드는 서버 값을 아래 고정 기준과 비교해 결정합니다.

use serde::{Deserialize, Serialize};

/// 목표 비교 방향.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// 값이 목표 이상이면 달성
    AtLeast,
    /// 값이 목표 이하이면 달성
    AtMost,
}

/// 목표치 하나.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Threshold {
    pub target: f64,
    pub direction: Direction,
}

impl Threshold {
    pub const fn at_least(target: f64) -> Self {
        Self {
            target,
            direction: Direction::AtLeast,
        }
    }

    pub const fn at_most(target: f64) -> Self {
        Self {
            target,
            direction: Direction::AtMost,
        }
    }

    /// 값이 목표를 달성했는지 확인합니다. 경계값은 달성으로 봅니다.
    pub fn is_met(&self, value: f64) -> bool {
        match self.direction {
            Direction::AtLeast => value >= self.target,
            Direction::AtMost => value <= self.target,
        }
    }

    /// 값이 낮을수록 좋은 지표인지.
    pub fn is_inverse(&self) -> bool {
        self.direction == Direction::AtMost
    }
}

/// 평균 보유기간 목표: 7일 이상
pub const AVG_HOLDING_PERIOD: Threshold = Threshold::at_least(7.0);
/// 월 회전율 목표: 30% 이하
pub const MONTHLY_TURNOVER: Threshold = Threshold::at_most(30.0);
/// 승률 목표: 60% 이상
pub const WIN_RATE: Threshold = Threshold::at_least(60.0);
/// 손익비 목표: 1.5 이상
pub const WIN_LOSS_RATIO: Threshold = Threshold::at_least(1.5);
/// 포트폴리오 변동성 목표: 12% 이하
pub const PORTFOLIO_VOLATILITY: Threshold = Threshold::at_most(12.0);
/// 최대 손실폭 목표: 15% 이하
pub const MAX_DRAWDOWN: Threshold = Threshold::at_most(15.0);
/// 현금 비중 목표: 10% 이상
pub const CASH_RATIO_PCT: Threshold = Threshold::at_least(10.0);
/// FOMO 매수 목표: 월 5회 이하
pub const FOMO_COUNT: Threshold = Threshold::at_most(5.0);

/// 시장 평균 보유기간 (일)
pub const MARKET_AVG_HOLDING_PERIOD: f64 = 5.9;
/// 시장 평균 월 회전율 (%)
pub const MARKET_AVG_TURNOVER: f64 = 45.2;
/// 시장 평균 승률 (%)
pub const MARKET_AVG_WIN_RATE: f64 = 42.3;
