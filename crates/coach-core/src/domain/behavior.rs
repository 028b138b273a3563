//! 투자 행동 분석 레코드.
//!
//! 백엔드가 계산한 사용자 매매 행동 요약입니다. 이 크레이트는 값을 계산하지 않고
//! 응답 형태만 검증합니다.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::ordered_map::OrderedMap;

/// 사용자 투자 행동 분석 결과.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct BehaviorAnalysis {
    /// 사용자 ID
    pub user_id: String,
    /// 분석 시각 (서버 문자열 그대로)
    pub analysis_date: String,
    /// 평균 보유기간 (일)
    #[validate(range(min = 0.0, message = "평균 보유기간은 0 이상이어야 합니다"))]
    pub avg_holding_period: f64,
    /// 월 회전율 (%)
    #[validate(range(min = 0.0, message = "회전율은 0 이상이어야 합니다"))]
    pub turnover_rate: f64,
    /// 손익비 (평균 수익 / 평균 손실)
    #[validate(range(min = 0.0, message = "손익비는 0 이상이어야 합니다"))]
    pub win_loss_ratio: f64,
    /// 승률 (%)
    #[validate(range(min = 0.0, max = 100.0, message = "승률은 0~100 사이여야 합니다"))]
    pub win_rate: f64,
    /// 손절 지연 비율 (0.0 ~ 1.0)
    #[serde(default)]
    #[validate(range(min = 0.0, max = 1.0))]
    pub loss_delay_rate: f64,
    /// 급등 후 추격 매수 횟수 (월)
    #[serde(default)]
    pub fomo_purchase_count: u32,
    /// 포트폴리오 변동성 (%)
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub portfolio_volatility: f64,
    /// 섹터명 → 비중 (0.0 ~ 1.0)
    #[validate(custom(function = "validate_fractions"))]
    pub sector_concentration: OrderedMap<f64>,
    /// 총 거래 횟수
    #[serde(default)]
    pub total_trades: u32,
    /// 평균 거래 금액 (원)
    #[serde(default)]
    pub avg_trade_size: Decimal,
    /// 최대 손실폭 (%)
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub max_drawdown: f64,
    /// 현금 비중 (0.0 ~ 1.0)
    #[serde(default)]
    #[validate(range(min = 0.0, max = 1.0, message = "현금 비중은 0~1 사이여야 합니다"))]
    pub cash_ratio: f64,
}

impl BehaviorAnalysis {
    /// 현금 비중을 백분율로 반환합니다.
    pub fn cash_ratio_pct(&self) -> f64 {
        self.cash_ratio * 100.0
    }
}

/// 섹터 비중 매핑 검증: 각 값은 0~1 사이.
///
/// 합계는 서버 반올림 때문에 정확히 1이 아닐 수 있어 검사하지 않습니다.
fn validate_fractions(value: &OrderedMap<f64>) -> Result<(), ValidationError> {
    for (sector, fraction) in value.iter() {
        if !(0.0..=1.0).contains(fraction) {
            let mut err = ValidationError::new("fraction_out_of_range")
                .with_message(format!("섹터 비중은 0~1 사이여야 합니다: {}", sector).into());
            err.add_param("sector".into(), &sector);
            return Err(err);
        }
    }
    Ok(())
}

/// 나와 시장 평균 비교 블록.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MarketComparison {
    /// 사용자 지표
    #[serde(default)]
    pub your_metrics: OrderedMap<f64>,
    /// 시장 평균 지표
    #[serde(default)]
    pub market_average: OrderedMap<f64>,
}
