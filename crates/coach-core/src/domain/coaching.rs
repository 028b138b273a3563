//! AI 코칭 액션 레코드.

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use super::ordered_map::OrderedMap;

/// 코칭 액션 분류 태그.
///
/// 알 수 없는 태그도 버리지 않고 `Other`로 보존합니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActionCategory {
    /// 경고
    Warning,
    /// 목표 설정
    GoalSetting,
    /// 리밸런싱 제안
    Rebalancing,
    /// 습관 교정
    HabitCorrection,
    /// 그 밖의 태그
    Other(String),
}

impl From<String> for ActionCategory {
    fn from(s: String) -> Self {
        match s.as_str() {
            "warning" => Self::Warning,
            "goal_setting" => Self::GoalSetting,
            "rebalancing" => Self::Rebalancing,
            "habit_correction" => Self::HabitCorrection,
            _ => Self::Other(s),
        }
    }
}

impl From<ActionCategory> for String {
    fn from(c: ActionCategory) -> Self {
        c.as_str().to_string()
    }
}

impl ActionCategory {
    /// 서버 태그 문자열.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Warning => "warning",
            Self::GoalSetting => "goal_setting",
            Self::Rebalancing => "rebalancing",
            Self::HabitCorrection => "habit_correction",
            Self::Other(s) => s,
        }
    }
}

impl fmt::Display for ActionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 코칭 액션 우선순위 태그.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    High,
    Medium,
    Low,
    /// 그 밖의 태그
    Other(String),
}

impl From<String> for Priority {
    fn from(s: String) -> Self {
        match s.as_str() {
            "high" => Self::High,
            "medium" => Self::Medium,
            "low" => Self::Low,
            _ => Self::Other(s),
        }
    }
}

impl From<Priority> for String {
    fn from(p: Priority) -> Self {
        p.as_str().to_string()
    }
}

impl Priority {
    /// 서버 태그 문자열.
    pub fn as_str(&self) -> &str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Other(s) => s,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 사용자에게 제안하는 코칭 액션.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct CoachingAction {
    /// 액션 ID (예: "R-001_demo")
    #[validate(length(min = 1, message = "액션 ID는 비어 있을 수 없습니다"))]
    pub action_id: String,
    /// 분류 태그
    #[serde(rename = "type")]
    pub category: ActionCategory,
    /// 우선순위 태그
    pub priority: Priority,
    /// 제목
    pub title: String,
    /// 설명
    pub description: String,
    /// 구체적 권장 값 (자유 형식)
    #[serde(default)]
    pub recommendation: OrderedMap<serde_json::Value>,
    /// 기대 효과 (지표명 → 개선 %)
    #[serde(default)]
    pub expected_impact: OrderedMap<f64>,
}

impl CoachingAction {
    /// 카드에 표시할 대표 기대 효과 (첫 번째 값).
    pub fn headline_impact(&self) -> Option<f64> {
        self.expected_impact.first_value().copied()
    }
}
