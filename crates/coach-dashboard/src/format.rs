//! 숫자 표시 형식.
//!
//! 화면 숫자는 모두 0.5를 0에서 먼 쪽으로 올립니다 (`12.25` → `12.3`, `30.5` → `31`).
//! `format!("{:.1}")`와 `Decimal::round_dp`는 짝수 쪽으로 반올림하므로 직접 쓰지 않습니다.

use rust_decimal::{Decimal, RoundingStrategy};

/// 소수점 `decimals`자리 고정 표시.
pub fn fixed(value: f64, decimals: u32) -> String {
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    format!("{:.*}", decimals as usize, rounded)
}

/// `Decimal`을 소수점 `decimals`자리로 반올림합니다.
pub fn round_half_up(value: Decimal, decimals: u32) -> Decimal {
    value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero)
}
