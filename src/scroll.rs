use crate::config::{BACK_TO_TOP_THRESHOLD, NAVBAR_SCROLL_THRESHOLD};

pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLL_THRESHOLD
}

pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_threshold_is_exclusive() {
        assert!(!navbar_scrolled(0.0));
        assert!(!navbar_scrolled(100.0));
        assert!(navbar_scrolled(100.5));
    }

    #[test]
    fn back_to_top_threshold_is_exclusive() {
        assert!(!back_to_top_visible(300.0));
        assert!(back_to_top_visible(301.0));
    }
}
