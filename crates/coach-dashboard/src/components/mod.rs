//! 화면 구성 요소. 모두 데이터를 받아 표시 모델을 돌려주는 순수 함수입니다.

pub mod behavior_chart;
pub mod coaching_card;
pub mod metric_card;
pub mod navigation;

pub use behavior_chart::{BehaviorChart, ChartPoint};
pub use coaching_card::{CardIcon, CardTone, CoachingCard};
pub use metric_card::{MetricCard, MetricStatus};
pub use navigation::{NavItem, NavigationBar, Route, APP_TITLE, ROUTES};
