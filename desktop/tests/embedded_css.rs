#![cfg(test)]
//! Ensures the embedded shared theme (`ui/assets/theme/main.css`) remains
//! present and non-trivial. An accidental truncation or path break would
//! otherwise only show up as unstyled markup at runtime.
//!
//! If the theme is renamed or relocated, update both this test and the
//! `include_str!` constants in `desktop/src/main.rs` and `web/src/main.rs`.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[test]
fn embedded_css_file_exists_and_is_not_empty() {
    assert!(
        !EMBEDDED_CSS.trim().is_empty(),
        "Embedded CSS file appears to be empty. If this is intentional, remove the test."
    );
}

#[test]
fn embedded_css_contains_expected_tokens() {
    let required = [
        "--color-bg",
        "body {",
        ".report__refresh",
        ".stat-card--blue",
        ".progress-card__fill",
        ".chart-card__pie-svg",
        ".alert",
    ];
    for token in required {
        assert!(
            EMBEDDED_CSS.contains(token),
            "Expected token `{token}` missing from embedded CSS"
        );
    }
}
