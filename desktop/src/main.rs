#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::views::ReportView;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Report {},
}

// Embedded shared theme (ui/assets/theme/main.css); no separate desktop
// assets directory needed.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[cfg(feature = "desktop")]
fn main() {
    env_logger::init();
    log::info!("khởi động Tiến Độ v{}", env!("CARGO_PKG_VERSION"));

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Tiến Độ – v{}", env!("CARGO_PKG_VERSION")))
                    .with_maximized(true),
            ),
        )
        .launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Always inline the embedded CSS so the binary has no runtime asset
        // dependency.
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}

#[component]
fn Report() -> Element {
    rsx! {
        ReportView {}
    }
}
