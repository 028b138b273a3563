//! 리밸런싱 계획 레코드.
//!
//! 목표 비중과 필요한 매매 목록은 백엔드 최적화 엔진이 산출합니다.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use super::ordered_map::OrderedMap;
use super::portfolio::validate_non_negative;

/// 리밸런싱 계획 생성 요청 본문.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RebalanceRequest {
    /// 사용자 ID
    pub user_id: String,
    /// 즉시 실행 여부
    #[serde(default)]
    pub execute_immediately: bool,
}

impl RebalanceRequest {
    /// 즉시 실행하지 않는 요청을 생성합니다.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            execute_immediately: false,
        }
    }
}

/// 매매 방향.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeAction {
    Buy,
    Sell,
}

impl TradeAction {
    /// 화면 표시용 한글 라벨.
    pub fn label(&self) -> &'static str {
        match self {
            TradeAction::Buy => "매수",
            TradeAction::Sell => "매도",
        }
    }
}

impl fmt::Display for TradeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeAction::Buy => write!(f, "buy"),
            TradeAction::Sell => write!(f, "sell"),
        }
    }
}

/// 현재 보유 비중 항목.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentAllocation {
    pub name: String,
    pub sector: String,
    /// 비중 (0.0 ~ 1.0)
    pub weight: f64,
    /// 평가금액
    pub value: Decimal,
}

/// 목표 비중 항목.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TargetAllocation {
    pub name: String,
    pub sector: String,
    /// 목표 비중 (0.0 ~ 1.0)
    pub target_weight: f64,
}

/// 리밸런싱을 위한 필요 매매 한 건.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct RequiredTrade {
    pub stock_code: String,
    pub stock_name: String,
    /// 매매 방향
    pub action: TradeAction,
    /// 수량
    pub shares: u64,
    /// 거래 금액
    #[validate(custom(function = "validate_non_negative"))]
    pub trade_value: Decimal,
    /// 사유
    #[serde(default)]
    pub reason: String,
}

/// 예상 거래 비용.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Validate)]
pub struct EstimatedCost {
    /// 수수료
    #[serde(default)]
    #[validate(custom(function = "validate_non_negative"))]
    pub commission: Decimal,
    /// 세금
    #[serde(default)]
    #[validate(custom(function = "validate_non_negative"))]
    pub tax: Decimal,
}

impl EstimatedCost {
    /// 총 비용 = 수수료 + 세금.
    pub fn total(&self) -> Decimal {
        self.commission + self.tax
    }
}

/// 리밸런싱 계획.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct RebalancingPlan {
    /// 계획 ID
    #[validate(length(min = 1))]
    pub plan_id: String,
    /// 생성 시각 (서버 문자열 그대로)
    pub created_at: String,
    /// 종목 코드 → 현재 비중
    #[serde(default)]
    pub current_portfolio: OrderedMap<CurrentAllocation>,
    /// 종목 코드 → 목표 비중
    #[serde(default)]
    pub target_portfolio: OrderedMap<TargetAllocation>,
    /// 필요한 매매 목록
    #[serde(default)]
    #[validate(nested)]
    pub required_trades: Vec<RequiredTrade>,
    /// 기대 효과 (지표명 → 변화 %)
    #[serde(default)]
    pub expected_results: OrderedMap<f64>,
    /// 예상 거래 비용
    #[serde(default)]
    #[validate(nested)]
    pub estimated_cost: EstimatedCost,
}

impl RebalancingPlan {
    /// 방향별 거래 금액 합계.
    pub fn trade_value(&self, action: TradeAction) -> Decimal {
        self.required_trades
            .iter()
            .filter(|t| t.action == action)
            .map(|t| t.trade_value)
            .sum()
    }
}
