//! Geometry and text rules behind the page's decorative behaviour.

pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;
pub const REVEAL_MARGIN_PX: f64 = 100.0;
pub const SECTION_MARGIN_PX: f64 = 100.0;
pub const FADE_IN_STARTUP_DELAY_MS: u32 = 100;
pub const PULSE_INTERVAL_MS: u32 = 5000;
pub const PULSE_DURATION_MS: u32 = 1000;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD_PX
}

/// Whether an element whose top edge sits at `element_top` (relative to the
/// viewport) should fade in.
pub fn should_reveal(element_top: f64, viewport_height: f64) -> bool {
    element_top < viewport_height - REVEAL_MARGIN_PX
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub offset_top: f64,
    pub height: f64,
}

impl SectionSpan {
    pub fn contains(&self, scroll_y: f64) -> bool {
        let top = self.offset_top - SECTION_MARGIN_PX;
        scroll_y > top && scroll_y <= top + self.height
    }
}

pub fn active_section(scroll_y: f64, sections: &[SectionSpan]) -> Option<&str> {
    sections
        .iter()
        .find(|section| section.contains(scroll_y))
        .map(|section| section.id.as_str())
}

/// The element id an in-page link points at. Bare `#` and `#!` are placeholders.
pub fn anchor_target(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some("") | Some("!") | None => None,
        Some(id) => Some(id),
    }
}

pub fn scroll_destination(target_top: f64, page_offset: f64, navbar_height: f64) -> f64 {
    target_top + page_offset - navbar_height
}

/// Drops anything that can't appear in a phone number while the user types.
pub fn sanitize_phone(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_digit() || c.is_whitespace() || *c == '+' || *c == '-')
        .collect()
}

pub fn menu_icon_class(open: bool) -> &'static str {
    if open {
        "fas fa-times"
    } else {
        "fas fa-bars"
    }
}
