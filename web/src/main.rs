use dioxus::prelude::*;

use ui::views::ReportView;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Report {},
}

// Shared theme lives in the ui crate; inlining it keeps web and desktop
// styling identical without a duplicated asset file.
const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Style { "{THEME_CSS}" }

        Router::<Route> {}
    }
}

#[component]
fn Report() -> Element {
    rsx! {
        ReportView {}
    }
}
