//! 화면 로딩 생명주기.
//!
//! 화면 하나는 마운트될 때 한 번만 데이터를 요청합니다. 요청은 화면이 가진
//! `CancellationToken`과 경쟁하며, 화면이 닫힌 뒤 도착한 응답은 버립니다.
//!
//! ```text
//! Loading ──load()──▶ Ready(Fetched<T>)
//!    │          └───▶ Failed(message)
//!    └──teardown()──▶ Disposed
//! ```

use std::future::Future;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use coach_client::{ClientResult, Fetched};

/// 화면 상태.
#[derive(Debug, Clone, PartialEq)]
pub enum PageState<T> {
    /// 최초 상태, 응답 대기 중
    Loading,
    /// 데이터 수신 완료 (실제 응답 또는 데모 데이터)
    Ready(Fetched<T>),
    /// 요청 실패 (strict 모드에서만 도달)
    Failed(String),
    /// 화면이 닫힘
    Disposed,
}

impl<T> PageState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, PageState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, PageState::Ready(_))
    }

    pub fn is_disposed(&self) -> bool {
        matches!(self, PageState::Disposed)
    }

    /// 준비된 데이터.
    pub fn fetched(&self) -> Option<&Fetched<T>> {
        match self {
            PageState::Ready(fetched) => Some(fetched),
            _ => None,
        }
    }
}

/// 다른 태스크에서 화면을 닫을 때 쓰는 핸들.
#[derive(Debug, Clone)]
pub struct TeardownHandle {
    token: CancellationToken,
}

impl TeardownHandle {
    /// 진행 중인 요청을 취소합니다. 화면은 `Disposed`가 됩니다.
    pub fn teardown(&self) {
        self.token.cancel();
    }
}

/// 화면 하나의 생명주기.
#[derive(Debug)]
pub struct PageLifecycle<T> {
    page: &'static str,
    token: CancellationToken,
    state: PageState<T>,
}

impl<T> PageLifecycle<T> {
    /// 화면을 마운트합니다. 상태는 `Loading`에서 시작합니다.
    pub fn mount(page: &'static str) -> Self {
        debug!(page, "page mounted");
        Self {
            page,
            token: CancellationToken::new(),
            state: PageState::Loading,
        }
    }

    pub fn page(&self) -> &'static str {
        self.page
    }

    pub fn state(&self) -> &PageState<T> {
        &self.state
    }

    /// 최종 상태를 꺼냅니다. 생명주기는 여기서 끝납니다.
    pub fn into_state(mut self) -> PageState<T> {
        std::mem::replace(&mut self.state, PageState::Disposed)
    }

    pub fn teardown_handle(&self) -> TeardownHandle {
        TeardownHandle {
            token: self.token.clone(),
        }
    }

    /// 데이터를 한 번 요청합니다.
    ///
    /// `Loading`이 아닐 때는 요청하지 않고 현재 상태를 그대로 둡니다.
    pub async fn load<F>(&mut self, fetch: F) -> &PageState<T>
    where
        F: Future<Output = ClientResult<Fetched<T>>>,
    {
        if !self.state.is_loading() {
            debug!(page = self.page, "load skipped, page already settled");
            return &self.state;
        }

        let outcome = tokio::select! {
            biased;
            _ = self.token.cancelled() => None,
            result = fetch => Some(result),
        };

        self.state = match outcome {
            _ if self.token.is_cancelled() => {
                debug!(page = self.page, "response discarded after teardown");
                PageState::Disposed
            }
            Some(Ok(fetched)) => {
                debug!(page = self.page, origin = %fetched.origin, "page ready");
                PageState::Ready(fetched)
            }
            Some(Err(err)) => {
                debug!(page = self.page, error = %err, "page failed");
                PageState::Failed(err.to_string())
            }
            None => PageState::Disposed,
        };

        &self.state
    }

    /// 화면을 닫습니다. 진행 중인 요청은 취소되고 데이터는 버려집니다.
    pub fn teardown(&mut self) {
        self.token.cancel();
        self.state = PageState::Disposed;
        debug!(page = self.page, "page disposed");
    }
}

impl<T> Drop for PageLifecycle<T> {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coach_client::ClientError;
    use std::time::Duration;

    #[tokio::test]
    async fn test_load_success_becomes_ready() {
        let mut page = PageLifecycle::mount("dashboard");
        assert!(page.state().is_loading());

        page.load(async { Ok(Fetched::live(7)) }).await;
        assert_eq!(page.state().fetched().map(|f| f.data), Some(7));
    }

    #[tokio::test]
    async fn test_load_error_becomes_failed() {
        let mut page: PageLifecycle<u32> = PageLifecycle::mount("analysis");
        page.load(async { Err(ClientError::Timeout("10s".into())) })
            .await;
        assert_eq!(
            page.state(),
            &PageState::Failed("Request timeout: 10s".to_string())
        );
    }

    #[tokio::test]
    async fn test_second_load_is_ignored() {
        let mut page = PageLifecycle::mount("portfolio");
        page.load(async { Ok(Fetched::live(1)) }).await;
        page.load(async { Ok(Fetched::live(2)) }).await;
        assert_eq!(page.state().fetched().map(|f| f.data), Some(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_teardown_during_fetch_discards_response() {
        let mut page = PageLifecycle::mount("dashboard");
        let handle = page.teardown_handle();

        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            handle.teardown();
        });

        page.load(async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(Fetched::live("late"))
        })
        .await;

        assert!(page.state().is_disposed());
    }

    #[tokio::test]
    async fn test_teardown_before_load_never_fetches() {
        let mut page: PageLifecycle<u32> = PageLifecycle::mount("dashboard");
        page.teardown();

        page.load(async { Err(ClientError::Timeout("unreachable".into())) })
            .await;
        assert_eq!(page.state(), &PageState::Disposed);
    }
}
