//! 포트폴리오 화면 명령.

use anyhow::{Context, Result};
use serde_json::json;

use coach_client::AnalyticsApi;

use super::{finish, header, load_page, CommandContext};
use crate::lifecycle::PageState;
use crate::pages::PortfolioView;
use crate::render::{render_portfolio, render_state};

/// 포트폴리오를 조회합니다. `rebalance`면 리밸런싱 계획도 요청합니다.
pub async fn show_portfolio<C: AnalyticsApi>(
    ctx: &CommandContext<C>,
    user: Option<&str>,
    rebalance: bool,
) -> Result<String> {
    let user_id = ctx.user(user);
    let portfolio = load_page("portfolio", ctx.client.get_portfolio(user_id)).await;

    if !rebalance {
        let body = finish("포트폴리오", &portfolio, ctx.json, |snapshot| {
            render_portfolio(&PortfolioView::build(snapshot))
        })?;
        return Ok(if ctx.json { body } else { header("/portfolio") + &body });
    }

    let plan = load_page("rebalancing", ctx.client.create_rebalancing_plan(user_id)).await;

    if ctx.json {
        finish("포트폴리오", &portfolio, false, |_| String::new())?;
        finish("리밸런싱", &plan, false, |_| String::new())?;
        let (Some(snapshot), Some(plan)) = (portfolio.fetched(), plan.fetched()) else {
            return Ok(String::new());
        };
        return serde_json::to_string_pretty(&json!({
            "portfolio": snapshot.data,
            "rebalancing_plan": plan.data,
        }))
        .context("Failed to serialize to JSON");
    }

    // 계획 조회가 실패해도 포트폴리오는 보여줍니다.
    let mut body = finish("포트폴리오", &portfolio, false, |snapshot| {
        let view = PortfolioView::build(snapshot);
        match plan.fetched() {
            Some(fetched) => render_portfolio(&view.with_proposal(&fetched.data)),
            None => render_portfolio(&view),
        }
    })?;
    if let PageState::Failed(_) = plan {
        body.push('\n');
        body.push_str(&render_state(&plan, |_| String::new()));
    }

    Ok(header("/portfolio") + &body)
}
