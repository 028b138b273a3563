//! 게이미피케이션 레코드 (레벨, 배지, 연속 기록, 리더보드).
//!
//! 포인트/레벨 규칙은 서버가 계산하며 여기서는 표시용 형태만 다룹니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::ordered_map::OrderedMap;

/// 레벨 정보가 없을 때 표시하는 기본 칭호.
pub const DEFAULT_LEVEL_TITLE: &str = "투자 입문자";

/// 현재 레벨.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentLevel {
    pub level: u32,
    pub title: String,
    /// 이 레벨의 최소 포인트
    #[serde(default)]
    pub min_points: u64,
}

/// 다음 레벨.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NextLevel {
    pub level: u32,
    pub title: String,
    /// 도달에 필요한 포인트
    pub required_points: u64,
}

/// 레벨 진행 상황.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct LevelProgress {
    pub current: CurrentLevel,
    /// 최고 레벨이면 `None`
    #[serde(default)]
    pub next: Option<NextLevel>,
    /// 다음 레벨까지 진행률 (%)
    #[serde(default)]
    #[validate(range(min = 0.0, max = 100.0, message = "진행률은 0~100 사이여야 합니다"))]
    pub progress: f64,
}

/// 획득한 배지.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Badge {
    #[serde(default)]
    pub badge_id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    /// 획득 시각 (서버 문자열 그대로)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achieved_at: Option<String>,
}

/// 분석 리포트에 포함되는 게이미피케이션 요약.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GamificationSummary {
    #[serde(default)]
    pub level: Option<LevelProgress>,
    #[serde(default)]
    pub points: u64,
    #[serde(default)]
    pub new_badges: Vec<Badge>,
}

impl GamificationSummary {
    /// 현재 레벨 칭호 (없으면 기본 칭호).
    pub fn level_title(&self) -> &str {
        self.level
            .as_ref()
            .map(|l| l.current.title.as_str())
            .unwrap_or(DEFAULT_LEVEL_TITLE)
    }
}

/// 사용자 게이미피케이션 현황.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct GamificationStatus {
    pub user_id: String,
    pub total_points: u64,
    #[validate(nested)]
    pub level: LevelProgress,
    #[serde(default)]
    pub badges: Vec<Badge>,
    /// 연속 기록 이름 → 일수
    #[serde(default)]
    pub streaks: OrderedMap<u32>,
}

impl GamificationStatus {
    /// 다음 레벨까지 남은 포인트. 최고 레벨이면 `None`.
    pub fn points_to_next_level(&self) -> Option<u64> {
        self.level
            .next
            .as_ref()
            .map(|next| next.required_points.saturating_sub(self.total_points))
    }
}

/// 리더보드 항목.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub user_name: String,
    pub points: u64,
    /// 개선율 표시 문자열 (예: "+15%")
    #[serde(default)]
    pub improvement: String,
}

/// 리더보드.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Validate)]
pub struct Leaderboard {
    #[serde(default)]
    #[validate(custom(function = "validate_ranks"))]
    pub weekly: Vec<LeaderboardEntry>,
}

/// 순위는 1부터 시작하고 내려가지 않아야 합니다 (동순위 허용).
fn validate_ranks(entries: &[LeaderboardEntry]) -> Result<(), validator::ValidationError> {
    let ordered = entries
        .windows(2)
        .all(|pair| pair[0].rank <= pair[1].rank);
    if entries.iter().any(|e| e.rank == 0) || !ordered {
        return Err(validator::ValidationError::new("rank_order")
            .with_message("순위는 1부터 내려가지 않아야 합니다".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_title_defaults() {
        let summary = GamificationSummary::default();
        assert_eq!(summary.level_title(), "투자 입문자");
        assert_eq!(summary.points, 0);
    }

    #[test]
    fn test_status_decode_and_next_level_gap() {
        let status: GamificationStatus = serde_json::from_value(serde_json::json!({
            "user_id": "kim",
            "total_points": 1500,
            "level": {
                "current": {"level": 2, "title": "투자 수련생", "min_points": 1000},
                "next": {"level": 3, "title": "투자 중급자", "required_points": 3000},
                "progress": 25
            },
            "badges": [{"badge_id": "first_week", "name": "첫 주 완주", "icon": "🎯",
                        "achieved_at": "2024-01-10T15:30:00"}],
            "streaks": {"plan_adherence": 7, "no_fomo": 14}
        }))
        .unwrap();

        assert!(status.validate().is_ok());
        assert_eq!(status.points_to_next_level(), Some(1500));
        assert_eq!(status.streaks.get("no_fomo"), Some(&14));
    }

    #[test]
    fn test_top_level_has_no_next() {
        let level: LevelProgress = serde_json::from_value(serde_json::json!({
            "current": {"level": 5, "title": "투자 마스터"},
            "next": null,
            "progress": 100
        }))
        .unwrap();
        assert!(level.next.is_none());
        assert_eq!(level.current.min_points, 0);
    }

    #[test]
    fn test_leaderboard_rank_validation() {
        let ok: Leaderboard = serde_json::from_value(serde_json::json!({
            "weekly": [
                {"rank": 1, "user_name": "투자왕", "points": 2500, "improvement": "+15%"},
                {"rank": 2, "user_name": "현명한투자자", "points": 2300}
            ]
        }))
        .unwrap();
        assert!(ok.validate().is_ok());
        assert_eq!(ok.weekly[1].improvement, "");

        let mut bad = ok.clone();
        bad.weekly.swap(0, 1);
        assert!(bad.validate().is_err());

        let mut tied = ok.clone();
        tied.weekly[1].rank = 1;
        tied.weekly.push(LeaderboardEntry {
            rank: 3,
            user_name: "장기투자자".into(),
            points: 2100,
            improvement: String::new(),
        });
        assert!(tied.validate().is_ok());
    }
}
