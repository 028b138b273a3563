//! 상세 분석 화면 명령.

use anyhow::Result;

use coach_client::AnalyticsApi;

use super::{finish, header, load_page, CommandContext};
use crate::pages::AnalysisView;
use crate::render::render_analysis;

pub async fn show_analysis<C: AnalyticsApi>(
    ctx: &CommandContext<C>,
    user: Option<&str>,
) -> Result<String> {
    let user_id = ctx.user(user);
    let state = load_page("analysis", ctx.client.get_analysis(user_id)).await;

    let body = finish("상세분석", &state, ctx.json, |report| {
        render_analysis(&AnalysisView::build(report))
    })?;

    Ok(if ctx.json { body } else { header("/analysis") + &body })
}
