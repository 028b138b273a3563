//! 화면 명령 통합 테스트
//!
//! mockito 분석 서비스 또는 닿지 않는 주소를 대상으로 명령을 실행하고
//! 출력 문자열을 확인합니다.

use std::time::Duration;

use coach_client::{AnalyticsClient, DemoFixture, FallbackPolicy, Fetched, HttpAnalyticsClient};
use coach_core::{ApiConfig, AppConfig};
use coach_dashboard::commands::{
    analysis::show_analysis, dashboard::show_dashboard, gamification::show_leaderboard,
    portfolio::show_portfolio, CommandContext,
};
use coach_dashboard::{PageLifecycle, PageState};
use mockito::Server;

fn context(base_url: &str, policy: FallbackPolicy) -> CommandContext<HttpAnalyticsClient> {
    let api = ApiConfig::default().with_base_url(base_url);
    let client = AnalyticsClient::new(HttpAnalyticsClient::new(&api).unwrap(), policy);
    CommandContext::new(client, &AppConfig::default())
}

const UNREACHABLE: &str = "http://127.0.0.1:1/api/v1";

#[tokio::test]
async fn test_dashboard_falls_back_to_demo_data() {
    let ctx = context(UNREACHABLE, FallbackPolicy::Demo(DemoFixture::new()));

    let out = show_dashboard(&ctx, None).await.unwrap();

    assert!(out.starts_with("AI 투자주치의"));
    assert!(out.contains("[데모 데이터]"));
    assert!(out.contains("5.9일"));
    assert!(out.contains("투자 수련생"));
    assert!(out.contains("과도한 회전율 경고"));
}

#[tokio::test]
async fn test_strict_mode_surfaces_error() {
    let ctx = context(UNREACHABLE, FallbackPolicy::Strict);

    let err = show_analysis(&ctx, None).await.unwrap_err();
    assert!(err.to_string().contains("Network unavailable"));
}

#[tokio::test]
async fn test_live_analysis_has_no_demo_notice() {
    let mut server = Server::new_async().await;
    let mut report = DemoFixture::new().analysis();
    report.investor_types = vec!["장기투자형".into()];
    let _m = server
        .mock("GET", "/api/v1/analysis/demo/demo_user")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(serde_json::to_string(&report).unwrap())
        .create_async()
        .await;

    let ctx = context(&format!("{}/api/v1", server.url()), FallbackPolicy::Strict);
    let out = show_analysis(&ctx, None).await.unwrap();

    assert!(!out.contains("[데모 데이터]"));
    assert!(out.contains("장기투자형"));
    assert!(out.contains("[상세분석]"));
}

#[tokio::test]
async fn test_user_override_is_used_in_path() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/portfolio/current/alice")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(serde_json::to_string(&DemoFixture::new().portfolio()).unwrap())
        .create_async()
        .await;

    let ctx = context(&format!("{}/api/v1", server.url()), FallbackPolicy::Strict);
    let out = show_portfolio(&ctx, Some("alice"), false).await.unwrap();

    mock.assert_async().await;
    assert!(out.contains("₩8,760,000"));
    assert!(!out.contains("리밸런싱 제안"));
}

#[tokio::test]
async fn test_zero_average_price_renders_dash_from_live_data() {
    let mut server = Server::new_async().await;
    let mut snapshot = DemoFixture::new().portfolio();
    snapshot.user_id = "alice".into();
    snapshot.portfolio.truncate(1);
    snapshot.portfolio[0].avg_price = rust_decimal::Decimal::ZERO;
    snapshot.total_value = snapshot.portfolio[0].value;
    let _m = server
        .mock("GET", "/api/v1/portfolio/current/alice")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(serde_json::to_string(&snapshot).unwrap())
        .create_async()
        .await;

    let ctx = context(
        &format!("{}/api/v1", server.url()),
        FallbackPolicy::Demo(DemoFixture::new()),
    );
    let out = show_portfolio(&ctx, Some("alice"), false).await.unwrap();

    assert!(!out.contains("[데모 데이터]"));
    assert!(!out.contains("카카오"));
    let row = out.lines().find(|l| l.contains("삼성전자")).unwrap();
    assert!(row.trim_end().ends_with('-'));
}

#[tokio::test]
async fn test_portfolio_with_rebalance_in_demo_mode() {
    let ctx = context(UNREACHABLE, FallbackPolicy::Demo(DemoFixture::new()));

    let out = show_portfolio(&ctx, None, true).await.unwrap();

    assert!(out.contains("리밸런싱 제안"));
    assert!(out.contains("IT 섹터 집중도가 65%로 과도합니다."));
    assert!(out.contains("[매도]"));
    assert!(out.contains("[매수]"));
}

#[tokio::test]
async fn test_json_output_is_the_record() {
    let ctx = context(UNREACHABLE, FallbackPolicy::Demo(DemoFixture::new())).with_json(true);

    let out = show_leaderboard(&ctx).await.unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(value["weekly"][0]["user_name"], "투자왕");
    assert_eq!(value["weekly"].as_array().unwrap().len(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_page_torn_down_before_response_is_disposed() {
    let mut page = PageLifecycle::mount("dashboard");
    let handle = page.teardown_handle();

    let fetch = async {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok(Fetched::live(DemoFixture::new().analysis()))
    };
    let closer = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        handle.teardown();
    });

    page.load(fetch).await;
    closer.await.unwrap();

    assert_eq!(page.state(), &PageState::Disposed);
    assert!(page.state().fetched().is_none());

    // 이미 닫힌 화면은 다시 요청하지 않음
    page.load(async { Ok(Fetched::live(DemoFixture::new().analysis())) }).await;
    assert!(page.state().is_disposed());
}
