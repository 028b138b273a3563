//! 대시보드 화면 명령.

use anyhow::Result;

use coach_client::AnalyticsApi;

use super::{finish, header, load_page, CommandContext};
use crate::pages::DashboardView;
use crate::render::render_dashboard;

/// 대시보드를 조회해 출력할 문자열을 만듭니다.
pub async fn show_dashboard<C: AnalyticsApi>(
    ctx: &CommandContext<C>,
    user: Option<&str>,
) -> Result<String> {
    let user_id = ctx.user(user);
    let state = load_page("dashboard", ctx.client.get_analysis(user_id)).await;

    let body = finish("대시보드", &state, ctx.json, |report| {
        render_dashboard(&DashboardView::build(report, ctx.chart_source))
    })?;

    Ok(if ctx.json { body } else { header("/") + &body })
}
