//! 내비게이션 경로 명령.

use crate::components::{NavigationBar, ROUTES};
use crate::render::render_navigation;

/// 경로 목록과 현재 경로의 내비게이션 바를 출력합니다.
pub fn show_routes(path: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("{:<12} {:<12} {:<6}\n", "PATH", "LABEL", "ACTIVE"));
    output.push_str(&"-".repeat(32));
    output.push('\n');

    let nav = NavigationBar::for_path(path);
    for item in &nav.items {
        output.push_str(&format!(
            "{:<12} {:<12} {:<6}\n",
            item.route.path,
            item.route.label,
            if item.active { "✓" } else { "" }
        ));
    }

    output.push('\n');
    output.push_str(&render_navigation(&nav));
    output.push_str(&format!("Total: {} routes", ROUTES.len()));
    output
}
