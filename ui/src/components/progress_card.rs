use dioxus::prelude::*;

use super::stat_card::CardTone;

/// Bar fill is capped to [0, 100]; non-finite inputs render no bar.
pub(crate) fn clamp_progress(progress: f64) -> f64 {
    if progress.is_finite() {
        progress.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// Stat block with a filled progress bar. The bar is omitted entirely when
/// the clamped progress is 0, matching the compact "Còn lại" card.
#[component]
pub fn ProgressCard(
    title: String,
    value: String,
    subtitle: String,
    progress: f64,
    tone: CardTone,
) -> Element {
    let tone_class = tone.css_suffix();
    let clamped = clamp_progress(progress);

    rsx! {
        div { class: "progress-card progress-card--{tone_class}",
            h3 { class: "progress-card__title", "{title}" }
            p { class: "progress-card__value", "{value}" }
            p { class: "progress-card__subtitle", "{subtitle}" }
            if clamped > 0.0 {
                div { class: "progress-card__track",
                    div { class: "progress-card__fill", style: "width: {clamped}%" }
                }
            }
        }
    }
}
