//! 포트폴리오 화면.

use rust_decimal::Decimal;
use serde::Serialize;

use coach_core::{PortfolioSnapshot, RebalancingPlan, TradeAction};

use crate::format::round_half_up;

/// 리밸런싱 제안 상단 경고 문구.
pub const CONCENTRATION_WARNING: &str =
    "IT 섹터 집중도가 65%로 과도합니다. 분산 투자를 통해 리스크를 줄이세요.";

/// 보유 종목 한 줄.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoldingRow {
    pub stock_code: String,
    pub stock_name: String,
    pub sector: String,
    pub shares: u64,
    pub value: Decimal,
    /// 비중 (%, 소수 첫째 자리)
    pub weight_pct: Decimal,
    /// 수익률 (%, 소수 둘째 자리). 평균가가 0이면 `None`.
    pub return_rate_pct: Option<Decimal>,
}

impl HoldingRow {
    /// 수익률이 0 이상이면 초록색.
    pub fn is_gain(&self) -> bool {
        self.return_rate_pct
            .map(|r| r >= Decimal::ZERO)
            .unwrap_or(false)
    }

    pub fn return_color(&self) -> &'static str {
        if self.is_gain() {
            "green"
        } else {
            "red"
        }
    }

    /// "+2.86%" 형태의 수익률 문구.
    pub fn return_label(&self) -> String {
        match self.return_rate_pct {
            Some(rate) if rate >= Decimal::ZERO => format!("+{:.2}%", rate),
            Some(rate) => format!("{:.2}%", rate),
            None => "-".to_string(),
        }
    }
}

/// 추천 거래 한 줄.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradeRow {
    /// "매도" / "매수"
    pub label: &'static str,
    pub action: TradeAction,
    pub stock_name: String,
    pub reason: String,
    pub trade_value: Decimal,
    pub shares: u64,
}

/// 리밸런싱 제안 표시 모델.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RebalancingProposal {
    pub warning: &'static str,
    pub trades: Vec<TradeRow>,
    pub sell_total: Decimal,
    pub buy_total: Decimal,
    /// 예상 거래 비용 = 수수료 + 세금
    pub estimated_cost: Decimal,
}

impl RebalancingProposal {
    pub fn build(plan: &RebalancingPlan) -> Self {
        Self {
            warning: CONCENTRATION_WARNING,
            trades: plan
                .required_trades
                .iter()
                .map(|t| TradeRow {
                    label: t.action.label(),
                    action: t.action,
                    stock_name: t.stock_name.clone(),
                    reason: t.reason.clone(),
                    trade_value: t.trade_value,
                    shares: t.shares,
                })
                .collect(),
            sell_total: plan.trade_value(TradeAction::Sell),
            buy_total: plan.trade_value(TradeAction::Buy),
            estimated_cost: plan.estimated_cost.total(),
        }
    }
}

/// 포트폴리오 표시 모델.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioView {
    pub total_value: Decimal,
    pub holdings: Vec<HoldingRow>,
    /// 요청한 경우에만 존재
    pub proposal: Option<RebalancingProposal>,
}

impl PortfolioView {
    pub fn build(snapshot: &PortfolioSnapshot) -> Self {
        let total = snapshot.total_value;

        Self {
            total_value: total,
            holdings: snapshot
                .portfolio
                .iter()
                .map(|h| HoldingRow {
                    stock_code: h.stock_code.clone(),
                    stock_name: h.stock_name.clone(),
                    sector: h.sector.clone(),
                    shares: h.shares,
                    value: h.value,
                    weight_pct: round_half_up(h.weight_pct(total), 1),
                    return_rate_pct: h.return_rate_pct().map(|r| round_half_up(r, 2)),
                })
                .collect(),
            proposal: None,
        }
    }

    /// 리밸런싱 제안을 붙입니다.
    pub fn with_proposal(mut self, plan: &RebalancingPlan) -> Self {
        self.proposal = Some(RebalancingProposal::build(plan));
        self
    }
}

/// 천 단위 구분 기호가 있는 원화 표시 (예: "₩8,760,000").
pub fn format_krw(amount: Decimal) -> String {
    let rounded = round_half_up(amount, 0);
    let digits = rounded.abs().trunc().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    format!("{}₩{}", sign, grouped)
}
