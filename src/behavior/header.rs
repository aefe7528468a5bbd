#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderStyle {
    Resting,
    Scrolled,
}

impl HeaderStyle {
    pub fn for_offset(scroll_y: f64, threshold: f64) -> Self {
        if scroll_y > threshold {
            HeaderStyle::Scrolled
        } else {
            HeaderStyle::Resting
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            HeaderStyle::Resting => "rgba(15, 15, 25, 0.8)",
            HeaderStyle::Scrolled => "rgba(15, 15, 25, 0.95)",
        }
    }

    pub fn box_shadow(self) -> &'static str {
        match self {
            HeaderStyle::Resting => "none",
            HeaderStyle::Scrolled => "0 4px 20px rgba(0, 0, 0, 0.3)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn threshold_itself_is_resting() {
        assert_eq!(HeaderStyle::for_offset(100.0, 100.0), HeaderStyle::Resting);
        assert_eq!(HeaderStyle::for_offset(100.5, 100.0), HeaderStyle::Scrolled);
    }

    #[test]
    fn resting_header_has_no_shadow() {
        assert_eq!(HeaderStyle::Resting.box_shadow(), "none");
        assert_ne!(HeaderStyle::Scrolled.box_shadow(), "none");
    }

    proptest! {
        #[test]
        fn style_depends_only_on_offset(scroll_y in -500.0f64..10_000.0) {
            let expected = if scroll_y > 100.0 { HeaderStyle::Scrolled } else { HeaderStyle::Resting };
            prop_assert_eq!(HeaderStyle::for_offset(scroll_y, 100.0), expected);
        }
    }
}
