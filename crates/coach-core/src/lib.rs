//! # Coach Core
//!
//! AI 투자주치의 대시보드의 핵심 도메인 모델 및 타입을 제공합니다.
//!
//! 이 크레이트는 워크스페이스 전반에서 사용되는 기본 타입을 제공합니다:
//! - 행동 분석 / 코칭 / 포트폴리오 / 리밸런싱 / 게이미피케이션 응답 레코드
//! - KPI 목표치 및 시장 평균 기준값
//! - 설정 관리
//! - 로깅 인프라

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;

pub use config::*;
pub use domain::*;
pub use error::*;
pub use logging::*;
