//! 게이미피케이션 현황 및 리더보드 명령.

use anyhow::Result;

use coach_client::AnalyticsApi;

use super::{finish, load_page, CommandContext};
use crate::pages::{GamificationView, LeaderboardView};
use crate::render::{render_gamification, render_leaderboard};

pub async fn show_gamification<C: AnalyticsApi>(
    ctx: &CommandContext<C>,
    user: Option<&str>,
) -> Result<String> {
    let user_id = ctx.user(user);
    let state = load_page("gamification", ctx.client.get_gamification_status(user_id)).await;

    finish("게이미피케이션", &state, ctx.json, |status| {
        render_gamification(&GamificationView::build(status))
    })
}

pub async fn show_leaderboard<C: AnalyticsApi>(ctx: &CommandContext<C>) -> Result<String> {
    let state = load_page("leaderboard", ctx.client.get_leaderboard()).await;

    finish("리더보드", &state, ctx.json, |board| {
        render_leaderboard(&LeaderboardView::build(board))
    })
}
