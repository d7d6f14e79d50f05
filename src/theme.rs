/// Page-wide color scheme. Owned by the application and handed by value to
/// every view that needs to pick a style variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Dark
    }
}

impl Theme {
    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Label of the toggle control, naming the scheme it switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Dark => "Light mode",
            Theme::Light => "Dark mode",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
    }

    #[test]
    fn parity_of_toggles_decides_the_theme() {
        let mut theme = Theme::default();
        for n in 1..=9 {
            theme.toggle();
            let expected = if n % 2 == 0 { Theme::Dark } else { Theme::Light };
            assert_eq!(theme, expected, "after {} toggles", n);
        }
    }

    #[test]
    fn toggle_label_names_the_other_scheme() {
        assert_eq!(Theme::Dark.toggle_label(), "Light mode");
        assert_eq!(Theme::Light.toggle_label(), "Dark mode");
    }
}
