use dioxus::prelude::*;

/// Blocking-style error banner. There is only ever one notification at a
/// time; each new fetch failure replaces the previous message.
#[component]
pub fn AlertBanner(message: String, on_dismiss: EventHandler<()>) -> Element {
    rsx! {
        div { class: "alert", role: "alert",
            div { class: "alert__body",
                strong { class: "alert__title", "Không thể làm mới dữ liệu" }
                for line in message.lines().filter(|line| !line.trim().is_empty()) {
                    p { class: "alert__line", "{line}" }
                }
            }
            button {
                r#type: "button",
                class: "alert__dismiss",
                onclick: move |_| on_dismiss.call(()),
                "Đóng"
            }
        }
    }
}
