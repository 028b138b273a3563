//! AI 투자주치의 터미널 대시보드.
//!
//! 이 crate는 다음 기능을 제공합니다:
//! - 화면 생명주기 (로딩, 준비, 실패, 종료)
//! - 지표 카드, 코칭 카드, 행동 추이 차트, 내비게이션 구성 요소
//! - 대시보드, 상세분석, 포트폴리오, 게이미피케이션 화면 표시 모델
//! - 텍스트 렌더링과 `coach` CLI 명령

pub mod commands;
pub mod components;
pub mod format;
pub mod lifecycle;
pub mod pages;
pub mod render;

pub use lifecycle::{PageLifecycle, PageState, TeardownHandle};
