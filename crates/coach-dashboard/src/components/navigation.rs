//! 상단 내비게이션 바.

use serde::Serialize;

/// 앱 이름.
pub const APP_TITLE: &str = "AI 투자주치의";

/// 화면 경로.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Route {
    pub path: &'static str,
    pub label: &'static str,
}

/// 내비게이션에 표시하는 경로 (표시 순서).
pub const ROUTES: [Route; 3] = [
    Route {
        path: "/",
        label: "대시보드",
    },
    Route {
        path: "/analysis",
        label: "상세분석",
    },
    Route {
        path: "/portfolio",
        label: "포트폴리오",
    },
];

/// 내비게이션 항목.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub route: Route,
    pub active: bool,
}

/// 내비게이션 바 표시 모델.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationBar {
    pub title: &'static str,
    pub items: Vec<NavItem>,
}

impl NavigationBar {
    /// 현재 경로와 정확히 일치하는 항목만 활성화합니다.
    pub fn for_path(current_path: &str) -> Self {
        Self {
            title: APP_TITLE,
            items: ROUTES
                .iter()
                .map(|route| NavItem {
                    route: *route,
                    active: route.path == current_path,
                })
                .collect(),
        }
    }

    pub fn active(&self) -> Option<&Route> {
        self.items.iter().find(|i| i.active).map(|i| &i.route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_only() {
        let nav = NavigationBar::for_path("/analysis");
        assert_eq!(nav.items.iter().filter(|i| i.active).count(), 1);
        assert_eq!(nav.active().map(|r| r.label), Some("상세분석"));

        assert!(NavigationBar::for_path("/analysis/").active().is_none());
        assert!(NavigationBar::for_path("/settings").active().is_none());
        assert_eq!(NavigationBar::for_path("/").active().map(|r| r.path), Some("/"));
    }
}
