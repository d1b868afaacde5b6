/// Default badge background color, carried over from the extension theme.
pub const BADGE_COLOR: &str = "#f4a02c";

/// Outstanding-work counter pushed after every successful save. Stands in
/// for the browser's badge API; implementations decide where it lands.
pub trait BadgeSink {
    fn set_badge(&mut self, text: &str, color: &str);
}

/// Badge text for a count of incomplete tasks: the number, or empty
/// string when there is nothing outstanding.
pub fn badge_text(incomplete: usize) -> String {
    if incomplete == 0 {
        String::new()
    } else {
        incomplete.to_string()
    }
}

/// Sink that drops updates, for frontends with no badge surface.
#[derive(Debug, Default)]
pub struct NullBadge;

impl BadgeSink for NullBadge {
    fn set_badge(&mut self, _text: &str, _color: &str) {}
}
