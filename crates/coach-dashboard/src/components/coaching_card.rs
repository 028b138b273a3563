//! 코칭 액션 카드.

use coach_core::{ActionCategory, CoachingAction, Priority};
use serde::Serialize;

/// 카드 아이콘.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardIcon {
    AlertCircle,
    Target,
    TrendingUp,
    Shield,
}

impl CardIcon {
    pub fn for_category(category: &ActionCategory) -> Self {
        match category {
            ActionCategory::Warning => CardIcon::AlertCircle,
            ActionCategory::GoalSetting => CardIcon::Target,
            ActionCategory::Rebalancing => CardIcon::TrendingUp,
            _ => CardIcon::Shield,
        }
    }

    /// 터미널 표시용 기호.
    pub fn glyph(&self) -> &'static str {
        match self {
            CardIcon::AlertCircle => "⚠",
            CardIcon::Target => "◎",
            CardIcon::TrendingUp => "↗",
            CardIcon::Shield => "◆",
        }
    }
}

/// 우선순위 색조.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CardTone {
    Red,
    Yellow,
    Green,
    Gray,
}

impl CardTone {
    pub fn for_priority(priority: &Priority) -> Self {
        match priority {
            Priority::High => CardTone::Red,
            Priority::Medium => CardTone::Yellow,
            Priority::Low => CardTone::Green,
            Priority::Other(_) => CardTone::Gray,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CardTone::Red => "red",
            CardTone::Yellow => "yellow",
            CardTone::Green => "green",
            CardTone::Gray => "gray",
        }
    }
}

/// 코칭 카드 표시 모델.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoachingCard {
    pub icon: CardIcon,
    pub tone: CardTone,
    pub title: String,
    pub description: String,
    /// "예상 개선: -30%" 배지. 기대 효과가 비어 있으면 없음.
    pub impact_badge: Option<String>,
}

impl CoachingCard {
    pub fn from_action(action: &CoachingAction) -> Self {
        Self {
            icon: CardIcon::for_category(&action.category),
            tone: CardTone::for_priority(&action.priority),
            title: action.title.clone(),
            description: action.description.clone(),
            impact_badge: action
                .headline_impact()
                .map(|value| format!("예상 개선: {}%", value)),
        }
    }
}
