//! 투자 행동 분석 서비스 클라이언트.
//!
//! 이 크레이트는 다음을 제공합니다:
//! - AnalyticsApi trait: 분석 서비스의 다섯 가지 작업
//! - HttpAnalyticsClient: reqwest 기반 REST 구현
//! - DemoFixture: 서비스 장애 시 사용하는 데모 응답
//! - AnalyticsClient: 데모 대체 정책을 적용하는 façade

pub mod error;
pub mod fallback;
pub mod fixture;
pub mod http;
pub mod traits;

pub use error::*;
pub use fallback::{AnalyticsClient, DataOrigin, FallbackPolicy, Fetched};
pub use fixture::DemoFixture;
pub use http::HttpAnalyticsClient;
pub use traits::*;
