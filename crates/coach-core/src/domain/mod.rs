//! 분석 서비스 응답 도메인 모델.

mod behavior;
mod coaching;
mod gamification;
mod ordered_map;
mod portfolio;
mod rebalancing;
mod report;
pub mod targets;

pub use behavior::*;
pub use coaching::*;
pub use gamification::*;
pub use ordered_map::*;
pub use portfolio::*;
pub use rebalancing::*;
pub use report::*;
pub use targets::{Direction, Threshold};
