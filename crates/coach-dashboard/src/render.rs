//! 표시 모델을 터미널 텍스트로 렌더링합니다.

use coach_client::{DataOrigin, Fetched};

use crate::components::behavior_chart::{CHART_TITLE, SERIES};
use crate::components::{BehaviorChart, CoachingCard, MetricCard, NavigationBar};
use crate::format::fixed;
use crate::lifecycle::PageState;
use crate::pages::dashboard::TAGLINE;
use crate::pages::portfolio::format_krw;
use crate::pages::{AnalysisView, DashboardView, GamificationView, LeaderboardView, PortfolioView};

const RULE_WIDTH: usize = 72;

fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

fn heading(out: &mut String, title: &str) {
    out.push_str(title);
    out.push('\n');
    out.push_str(&rule());
    out.push('\n');
}

/// 문자열 자르기 (UTF-8 안전).
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();

    if char_count <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

/// 화면 상태에 맞게 렌더링합니다. 준비된 경우에만 `view`를 호출합니다.
pub fn render_state<T>(state: &PageState<T>, view: impl FnOnce(&Fetched<T>) -> String) -> String {
    match state {
        PageState::Loading => "로딩 중...\n".to_string(),
        PageState::Ready(fetched) => {
            let mut out = origin_notice(&fetched.origin);
            out.push_str(&view(fetched));
            out
        }
        PageState::Failed(message) => format!("데이터를 불러오지 못했습니다: {}\n", message),
        PageState::Disposed => String::new(),
    }
}

/// 데모 데이터로 대체된 경우 상단 안내 문구.
pub fn origin_notice(origin: &DataOrigin) -> String {
    match origin {
        DataOrigin::Live => String::new(),
        DataOrigin::Demo { cause } => format!(
            "[데모 데이터] 분석 서비스에 연결하지 못해 예시 데이터를 표시합니다 ({})\n\n",
            cause
        ),
    }
}

// ============================================================================
// 구성 요소
// ============================================================================

pub fn render_navigation(nav: &NavigationBar) -> String {
    let items: Vec<String> = nav
        .items
        .iter()
        .map(|item| {
            if item.active {
                format!("[{}]", item.route.label)
            } else {
                format!(" {} ", item.route.label)
            }
        })
        .collect();
    format!("{}  |  {}\n", nav.title, items.join(" "))
}

fn render_metric_card(card: &MetricCard) -> String {
    format!(
        "{} {:<14} {:>12}   {}\n",
        card.status.marker(),
        card.title,
        card.value,
        card.target
    )
}

fn render_coaching_card(card: &CoachingCard) -> String {
    let mut out = format!("{} [{}] {}\n", card.icon.glyph(), card.tone.as_str(), card.title);
    out.push_str(&format!("    {}\n", card.description));
    if let Some(badge) = &card.impact_badge {
        out.push_str(&format!("    ({})\n", badge));
    }
    out
}

fn render_chart(chart: &BehaviorChart) -> String {
    let mut out = String::new();
    let title = if chart.is_illustrative() {
        format!("{} (예시 데이터)", CHART_TITLE)
    } else {
        CHART_TITLE.to_string()
    };
    heading(&mut out, &title);

    out.push_str(&format!("{:<8}", ""));
    for (name, _) in SERIES {
        out.push_str(&format!("{:>10}", name));
    }
    out.push('\n');
    for point in &chart.points {
        out.push_str(&format!("{:<8}", point.label));
        for value in point.values() {
            out.push_str(&format!("{:>10}", fixed(value, 1)));
        }
        out.push('\n');
    }
    out
}

// ============================================================================
// 화면
// ============================================================================

pub fn render_dashboard(view: &DashboardView) -> String {
    let mut out = String::new();
    heading(&mut out, TAGLINE);
    for card in &view.cards {
        out.push_str(&render_metric_card(card));
    }

    out.push_str("\n오늘의 AI 코칭\n");
    out.push_str(&format!("  {}\n\n", view.coaching_message));

    out.push_str(&render_chart(&view.chart));

    out.push('\n');
    heading(&mut out, "추천 행동");
    for card in &view.coaching_cards {
        out.push_str(&render_coaching_card(card));
    }
    out
}

pub fn render_analysis(view: &AnalysisView) -> String {
    let mut out = String::new();
    heading(&mut out, "상세 행동 분석");
    out.push_str(&format!("투자자 유형: {}\n", view.investor_types.join(", ")));
    if let Some(date) = &view.next_review {
        out.push_str(&format!("다음 점검일: {}\n", date));
    }
    out.push('\n');

    for (title, rows) in [("행동 지표", &view.behavior_rows), ("리스크 지표", &view.risk_rows)] {
        out.push_str(&format!("{}\n", title));
        for row in rows {
            out.push_str(&format!(
                "  {:<18} {:>10} {}\n",
                row.label,
                row.value,
                row.status.marker()
            ));
        }
        out.push('\n');
    }

    heading(&mut out, "섹터별 투자 비중");
    for slice in &view.sector_slices {
        out.push_str(&format!(
            "  {:<12} {:>6}%  {}\n",
            truncate(&slice.sector, 12),
            fixed(slice.percent, 0),
            slice.color
        ));
    }

    out.push('\n');
    heading(&mut out, "시장 평균과 비교");
    for card in &view.comparisons {
        out.push_str(&format!(
            "  {:<14} {:>8}{} vs {}{}  {} ({})\n",
            card.label,
            fixed(card.mine, 1),
            card.unit,
            card.market,
            card.unit,
            card.diff_label(),
            if card.is_good() { "green" } else { "red" }
        ));
    }
    out
}

pub fn render_portfolio(view: &PortfolioView) -> String {
    let mut out = String::new();
    heading(&mut out, "내 포트폴리오");
    out.push_str(&format!("총 평가금액: {}\n\n", format_krw(view.total_value)));

    out.push_str(&format!(
        "{:<14} {:<8} {:>8} {:>14} {:>8} {:>10}\n",
        "종목명", "섹터", "보유수량", "평가금액", "비중", "수익률"
    ));
    out.push_str(&rule());
    out.push('\n');
    for h in &view.holdings {
        out.push_str(&format!(
            "{:<14} {:<8} {:>8} {:>14} {:>7}% {:>10}\n",
            truncate(&h.stock_name, 14),
            h.sector,
            format!("{}주", h.shares),
            format_krw(h.value),
            h.weight_pct,
            h.return_label()
        ));
    }

    if let Some(proposal) = &view.proposal {
        out.push('\n');
        heading(&mut out, "리밸런싱 제안");
        out.push_str(&format!("! {}\n\n", proposal.warning));
        out.push_str("추천 거래\n");
        for trade in &proposal.trades {
            out.push_str(&format!(
                "  [{}] {:<12} {:>14} {:>8}  {}\n",
                trade.label,
                trade.stock_name,
                format_krw(trade.trade_value),
                format!("{}주", trade.shares),
                trade.reason
            ));
        }
        out.push_str(&format!(
            "\n매도 합계: {}  매수 합계: {}\n",
            format_krw(proposal.sell_total),
            format_krw(proposal.buy_total)
        ));
        out.push_str(&format!(
            "예상 거래 비용: {}\n",
            format_krw(proposal.estimated_cost)
        ));
    }
    out
}

pub fn render_gamification(view: &GamificationView) -> String {
    let mut out = String::new();
    heading(&mut out, "나의 투자 레벨");
    out.push_str(&format!(
        "Lv.{} {}  ({}P, 진행률 {}%)\n",
        view.level,
        view.level_title,
        view.points,
        fixed(view.progress, 0)
    ));
    if let (Some(next), Some(remaining)) = (&view.next_title, view.points_to_next) {
        out.push_str(&format!("다음 레벨 {}까지 {}P\n", next, remaining));
    }

    if !view.badges.is_empty() {
        out.push_str(&format!("\n배지: {}\n", view.badges.join(", ")));
    }
    if !view.streaks.is_empty() {
        out.push_str("\n연속 기록\n");
        for (label, days) in &view.streaks {
            out.push_str(&format!("  {:<14} {}일\n", label, days));
        }
    }
    out
}

pub fn render_leaderboard(view: &LeaderboardView) -> String {
    let mut out = String::new();
    heading(&mut out, "주간 리더보드");
    out.push_str(&format!(
        "{:<6} {:<16} {:>10} {:>10}\n",
        "RANK", "NAME", "POINTS", "IMPROVE"
    ));
    for row in &view.rows {
        out.push_str(&format!(
            "{:<6} {:<16} {:>10} {:>10}\n",
            row.rank,
            truncate(&row.user_name, 16),
            row.points,
            row.improvement
        ));
    }
    out.push_str(&format!("\nTotal: {} users", view.rows.len()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use coach_client::{ClientError, DemoFixture};
    use coach_core::ChartSource;

    #[test]
    fn test_truncate_is_char_safe() {
        assert_eq!(truncate("삼성전자우선주", 5), "삼성...");
        assert_eq!(truncate("카카오", 5), "카카오");
    }

    #[test]
    fn test_state_rendering() {
        let loading: PageState<u32> = PageState::Loading;
        assert_eq!(render_state(&loading, |_| unreachable!()), "로딩 중...\n");

        let failed: PageState<u32> = PageState::Failed("boom".into());
        assert!(render_state(&failed, |_| String::new()).contains("boom"));

        let disposed: PageState<u32> = PageState::Disposed;
        assert!(render_state(&disposed, |_| "x".into()).is_empty());
    }

    #[test]
    fn test_demo_notice_is_shown() {
        let ready = PageState::Ready(Fetched::demo(1u32, &ClientError::Timeout("10s".into())));
        let text = render_state(&ready, |f| format!("value={}", f.data));
        assert!(text.starts_with("[데모 데이터]"));
        assert!(text.ends_with("value=1"));

        let live = PageState::Ready(Fetched::live(1u32));
        assert_eq!(render_state(&live, |f| format!("value={}", f.data)), "value=1");
    }

    #[test]
    fn test_render_pages_contain_key_values() {
        let fixture = DemoFixture::new();
        let report = fixture.analysis();

        let dashboard = render_dashboard(&DashboardView::build(&report, ChartSource::Illustrative));
        assert!(dashboard.contains("5.9일"));
        assert!(dashboard.contains("예상 개선: -30%"));
        assert!(dashboard.contains("10월"));

        let analysis = render_analysis(&AnalysisView::build(&report));
        assert!(analysis.contains("단타형"));
        assert!(analysis.contains("#3B82F6"));

        let portfolio = render_portfolio(
            &PortfolioView::build(&fixture.portfolio()).with_proposal(&fixture.rebalancing_plan()),
        );
        assert!(portfolio.contains("₩8,760,000"));
        assert!(portfolio.contains("[매도]"));
        assert!(portfolio.contains("₩7,457"));

        let nav = render_navigation(&NavigationBar::for_path("/portfolio"));
        assert!(nav.contains("[포트폴리오]"));
        assert!(nav.starts_with("AI 투자주치의"));

        let board = render_leaderboard(&LeaderboardView::build(&fixture.leaderboard()));
        assert!(board.contains("투자왕"));
    }
}
