use dioxus::prelude::*;

/// Fixed palette for the card gradients; maps onto theme CSS modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardTone {
    Blue,
    Green,
    Indigo,
    Purple,
    Orange,
    Yellow,
}

impl CardTone {
    pub fn css_suffix(self) -> &'static str {
        match self {
            CardTone::Blue => "blue",
            CardTone::Green => "green",
            CardTone::Indigo => "indigo",
            CardTone::Purple => "purple",
            CardTone::Orange => "orange",
            CardTone::Yellow => "yellow",
        }
    }
}

/// Decorated display block for one headline count. Pure formatting.
#[component]
pub fn StatCard(title: String, value: u32, subtitle: Option<String>, tone: CardTone) -> Element {
    let tone_class = tone.css_suffix();

    rsx! {
        div { class: "stat-card stat-card--{tone_class}",
            h3 { class: "stat-card__title", "{title}" }
            p { class: "stat-card__value", "{value}" }
            if let Some(subtitle) = subtitle.as_ref() {
                p { class: "stat-card__subtitle", "{subtitle}" }
            }
        }
    }
}
