//! CLI 명령어 구현 모듈.
//!
//! 각 명령은 화면 하나를 마운트하고, 한 번 조회한 뒤, 텍스트나 JSON으로
//! 출력할 문자열을 돌려줍니다.

pub mod analysis;
pub mod dashboard;
pub mod gamification;
pub mod portfolio;
pub mod routes;

use std::future::Future;

use anyhow::{bail, Context, Result};
use serde::Serialize;
use tracing::{debug, Instrument};

use coach_client::{AnalyticsApi, AnalyticsClient, ClientResult, Fetched};
use coach_core::{AppConfig, ChartSource};

use crate::components::NavigationBar;
use crate::lifecycle::{PageLifecycle, PageState};
use crate::render::{render_navigation, render_state};

/// 명령 실행에 필요한 공통 값.
pub struct CommandContext<C: AnalyticsApi> {
    pub client: AnalyticsClient<C>,
    pub user_id: String,
    pub chart_source: ChartSource,
    /// 텍스트 대신 조회한 레코드를 JSON으로 출력
    pub json: bool,
}

impl<C: AnalyticsApi> CommandContext<C> {
    pub fn new(client: AnalyticsClient<C>, config: &AppConfig) -> Self {
        Self {
            client,
            user_id: config.dashboard.user_id.clone(),
            chart_source: config.dashboard.chart_source,
            json: false,
        }
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// 명령별 `--user` 값이 있으면 그것을, 없으면 설정의 사용자를 씁니다.
    pub fn user<'a>(&'a self, override_user: Option<&'a str>) -> &'a str {
        override_user.unwrap_or(&self.user_id)
    }
}

/// 화면을 마운트하고 한 번 조회합니다.
///
/// Ctrl-C가 들어오면 화면을 닫고 진행 중인 응답은 버립니다.
pub async fn load_page<T, F>(page: &'static str, fetch: F) -> PageState<T>
where
    F: Future<Output = ClientResult<Fetched<T>>>,
{
    let mut lifecycle = PageLifecycle::mount(page);
    let handle = lifecycle.teardown_handle();

    let interrupt = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            handle.teardown();
        }
    });

    lifecycle
        .load(fetch)
        .instrument(coach_core::page_span!(page))
        .await;
    interrupt.abort();

    lifecycle.into_state()
}

/// 화면 상태를 출력 문자열로 바꿉니다.
///
/// strict 모드에서 실패한 화면은 에러로 반환합니다.
pub fn finish<T: Serialize>(
    page: &str,
    state: &PageState<T>,
    json: bool,
    render: impl FnOnce(&T) -> String,
) -> Result<String> {
    match state {
        PageState::Failed(message) => bail!("{} 화면을 불러오지 못했습니다: {}", page, message),
        PageState::Ready(fetched) if json => {
            serde_json::to_string_pretty(&fetched.data).context("Failed to serialize to JSON")
        }
        PageState::Disposed => {
            debug!(page, "page closed before data arrived");
            Ok(String::new())
        }
        _ => Ok(render_state(state, |fetched| render(&fetched.data))),
    }
}

/// 화면 상단 내비게이션 바.
pub fn header(path: &str) -> String {
    format!("{}\n", render_navigation(&NavigationBar::for_path(path)))
}
