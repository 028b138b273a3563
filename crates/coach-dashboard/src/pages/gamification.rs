//! 게이미피케이션 화면 (레벨, 배지, 연속 기록, 주간 리더보드).

use serde::Serialize;

use coach_core::{GamificationStatus, Leaderboard};

/// 연속 기록 이름의 표시 라벨. 모르는 이름은 그대로 씁니다.
pub fn streak_label(name: &str) -> &str {
    match name {
        "plan_adherence" => "계획 준수",
        "no_fomo" => "FOMO 없는 날",
        other => other,
    }
}

/// 게이미피케이션 현황 표시 모델.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GamificationView {
    pub user_id: String,
    pub points: u64,
    pub level: u32,
    pub level_title: String,
    /// 다음 레벨 진행률 (%)
    pub progress: f64,
    /// 다음 레벨까지 남은 포인트 (최고 레벨이면 없음)
    pub points_to_next: Option<u64>,
    pub next_title: Option<String>,
    /// "🎯 첫 주 완주" 형태
    pub badges: Vec<String>,
    /// (라벨, 일수)
    pub streaks: Vec<(String, u32)>,
}

impl GamificationView {
    pub fn build(status: &GamificationStatus) -> Self {
        Self {
            user_id: status.user_id.clone(),
            points: status.total_points,
            level: status.level.current.level,
            level_title: status.level.current.title.clone(),
            progress: status.level.progress,
            points_to_next: status.points_to_next_level(),
            next_title: status.level.next.as_ref().map(|n| n.title.clone()),
            badges: status
                .badges
                .iter()
                .map(|b| {
                    if b.icon.is_empty() {
                        b.name.clone()
                    } else {
                        format!("{} {}", b.icon, b.name)
                    }
                })
                .collect(),
            streaks: status
                .streaks
                .iter()
                .map(|(name, days)| (streak_label(name).to_string(), *days))
                .collect(),
        }
    }
}

/// 리더보드 한 줄.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardRow {
    pub rank: u32,
    pub user_name: String,
    pub points: u64,
    pub improvement: String,
}

/// 주간 리더보드 표시 모델.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardView {
    pub rows: Vec<LeaderboardRow>,
}

impl LeaderboardView {
    pub fn build(board: &Leaderboard) -> Self {
        Self {
            rows: board
                .weekly
                .iter()
                .map(|e| LeaderboardRow {
                    rank: e.rank,
                    user_name: e.user_name.clone(),
                    points: e.points,
                    improvement: e.improvement.clone(),
                })
                .collect(),
        }
    }
}
