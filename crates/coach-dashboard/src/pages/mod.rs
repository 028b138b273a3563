//! 화면별 표시 모델. 조회한 레코드에서만 파생되며 상태를 갖지 않습니다.

pub mod analysis;
pub mod dashboard;
pub mod gamification;
pub mod portfolio;

pub use analysis::AnalysisView;
pub use dashboard::DashboardView;
pub use gamification::{GamificationView, LeaderboardView};
pub use portfolio::PortfolioView;
