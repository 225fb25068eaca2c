/// Scroll offset (px) past which the header gets its own surface.
pub const SCROLL_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Picks the class list matching the current theme.
    pub fn pick(self, dark: &'static str, light: &'static str) -> &'static str {
        match self {
            Self::Dark => dark,
            Self::Light => light,
        }
    }

    /// Remix icon shown on the toggle button: the sun switches back to light.
    pub fn toggle_icon(self) -> &'static str {
        self.pick("ri-sun-line", "ri-moon-line")
    }
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD
}

pub fn header_surface(theme: Theme, scrolled: bool) -> &'static str {
    if !scrolled {
        return "bg-transparent";
    }
    theme.pick(
        "bg-gray-900/90 backdrop-blur-md shadow-lg",
        "bg-white/90 backdrop-blur-md shadow-lg",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_flag_and_classes() {
        let theme = Theme::default();
        assert!(!theme.is_dark());
        assert_eq!(theme.pick("bg-gray-900", "bg-white"), "bg-white");
        assert_eq!(theme.toggle_icon(), "ri-moon-line");

        let theme = theme.toggled();
        assert!(theme.is_dark());
        assert_eq!(theme.pick("bg-gray-900", "bg-white"), "bg-gray-900");
        assert_eq!(theme.toggle_icon(), "ri-sun-line");

        assert_eq!(theme.toggled(), Theme::Light);
    }

    #[test]
    fn test_from_dark() {
        assert_eq!(Theme::from_dark(true), Theme::Dark);
        assert_eq!(Theme::from_dark(false), Theme::Light);
    }

    #[test]
    fn test_header_surface() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));

        assert_eq!(header_surface(Theme::Dark, false), "bg-transparent");
        assert_eq!(header_surface(Theme::Light, false), "bg-transparent");
        assert!(header_surface(Theme::Dark, true).starts_with("bg-gray-900/90"));
        assert!(header_surface(Theme::Light, true).starts_with("bg-white/90"));
    }
}
