//! 보유 종목 및 포트폴리오 스냅샷 레코드.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 금액 검증 (0 이상).
pub(crate) fn validate_non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if *value < Decimal::ZERO {
        return Err(ValidationError::new("negative_amount")
            .with_message("금액은 0 이상이어야 합니다".into()));
    }
    Ok(())
}

/// 가격 검증 (0 초과).
fn validate_positive_price(value: &Decimal) -> Result<(), ValidationError> {
    if *value <= Decimal::ZERO {
        return Err(ValidationError::new("non_positive_price")
            .with_message("가격은 0보다 커야 합니다".into()));
    }
    Ok(())
}

/// 보유 종목 한 건.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct PortfolioHolding {
    /// 종목 코드 (예: "A005930")
    #[validate(length(min = 1, max = 20, message = "종목 코드는 1-20자여야 합니다"))]
    pub stock_code: String,
    /// 종목명
    pub stock_name: String,
    /// 섹터
    pub sector: String,
    /// 보유 수량
    pub shares: u64,
    /// 평균 매입가 (무상 취득 등은 0)
    #[validate(custom(function = "validate_non_negative"))]
    pub avg_price: Decimal,
    /// 현재가
    #[validate(custom(function = "validate_positive_price"))]
    pub current_price: Decimal,
    /// 평가금액
    #[validate(custom(function = "validate_non_negative"))]
    pub value: Decimal,
}

impl PortfolioHolding {
    /// 수익률 (%) = (현재가 - 평균가) / 평균가 × 100.
    ///
    /// 평균가가 0이면 계산할 수 없으므로 `None`.
    pub fn return_rate_pct(&self) -> Option<Decimal> {
        (self.current_price - self.avg_price)
            .checked_div(self.avg_price)
            .map(|r| r * dec!(100))
    }

    /// 포트폴리오 내 비중 (%). 총액이 0이면 0.
    pub fn weight_pct(&self, total_value: Decimal) -> Decimal {
        self.value
            .checked_div(total_value)
            .map(|w| w * dec!(100))
            .unwrap_or(Decimal::ZERO)
    }
}

/// 사용자 포트폴리오 조회 결과.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct PortfolioSnapshot {
    /// 사용자 ID
    pub user_id: String,
    /// 보유 종목
    #[validate(nested)]
    pub portfolio: Vec<PortfolioHolding>,
    /// 총 평가금액
    #[validate(custom(function = "validate_non_negative"))]
    pub total_value: Decimal,
    /// 마지막 갱신 시각 (서버 문자열 그대로)
    pub last_updated: String,
}

impl PortfolioSnapshot {
    /// 보유 종목 평가금액 합계.
    pub fn holdings_value(&self) -> Decimal {
        self.portfolio.iter().map(|h| h.value).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holding(avg: Decimal, current: Decimal, shares: u64) -> PortfolioHolding {
        PortfolioHolding {
            stock_code: "A005930".to_string(),
            stock_name: "삼성전자".to_string(),
            sector: "IT".to_string(),
            shares,
            avg_price: avg,
            current_price: current,
            value: current * Decimal::from(shares),
        }
    }

    #[test]
    fn test_return_rate() {
        let h = holding(dec!(70000), dec!(72000), 50);
        let rate = h.return_rate_pct().unwrap();
        assert_eq!(rate.round_dp(2), dec!(2.86));

        let flat = holding(dec!(42000), dec!(42000), 60);
        assert_eq!(flat.return_rate_pct(), Some(Decimal::ZERO));
    }

    #[test]
    fn test_return_rate_zero_avg_is_none() {
        let h = holding(Decimal::ZERO, dec!(100), 1);
        assert_eq!(h.return_rate_pct(), None);
        assert!(h.validate().is_ok());

        let free = holding(dec!(100), Decimal::ZERO, 1);
        assert!(free.validate().is_err());
    }

    #[test]
    fn test_weight_pct() {
        let h = holding(dec!(70000), dec!(72000), 50);
        assert_eq!(h.weight_pct(dec!(7200000)), dec!(50));
        assert_eq!(h.weight_pct(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_holdings_value() {
        let snapshot = PortfolioSnapshot {
            user_id: "demo_user".to_string(),
            portfolio: vec![holding(dec!(1), dec!(2), 10), holding(dec!(7500), dec!(7500), 200)],
            total_value: dec!(1500020),
            last_updated: "2024-01-15T10:30:00".to_string(),
        };
        assert_eq!(snapshot.holdings_value(), dec!(1500020));
    }

    #[test]
    fn test_decode_integer_amounts() {
        let h: PortfolioHolding = serde_json::from_str(
            r#"{"stock_code":"A035720","stock_name":"카카오","sector":"IT",
                "shares":60,"avg_price":42000,"current_price":41000,"value":2460000}"#,
        )
        .unwrap();
        assert_eq!(h.value, dec!(2460000));
        assert!(h.return_rate_pct().unwrap() < Decimal::ZERO);
        assert!(h.validate().is_ok());
    }
}
