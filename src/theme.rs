use crate::utils;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

const LIGHT_CLASS: &str = "theme-light";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn flipped(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

/// Theming collaborator. The session core flips the preference through this
/// seam and reports the result; it never owns the presentation side.
pub trait ThemeHost {
    fn current(&self) -> Theme;
    fn set(&mut self, theme: Theme);
}

/// DOM-backed host: the preference lives as a class on `<body>` and resets
/// on reload. Nothing is persisted.
pub struct DomTheme {
    body: HtmlElement,
}

impl DomTheme {
    pub fn attach() -> Result<Self, JsValue> {
        let body = utils::document()?
            .body()
            .ok_or_else(|| JsValue::from_str("Missing document body"))?;
        Ok(Self { body })
    }
}

impl ThemeHost for DomTheme {
    fn current(&self) -> Theme {
        if self.body.class_list().contains(LIGHT_CLASS) {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    fn set(&mut self, theme: Theme) {
        let classes = self.body.class_list();
        let result = match theme {
            Theme::Light => classes.add_1(LIGHT_CLASS),
            Theme::Dark => classes.remove_1(LIGHT_CLASS),
        };
        if result.is_err() {
            utils::log("Failed to apply theme class to body");
        }
        let _ = self.body.set_attribute("data-theme", theme.name());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flipped_alternates_between_both_themes() {
        assert_eq!(Theme::Dark.flipped(), Theme::Light);
        assert_eq!(Theme::Light.flipped(), Theme::Dark);
        assert_eq!(Theme::Dark.flipped().flipped(), Theme::Dark);
    }

    #[test]
    fn names_match_reported_output() {
        assert_eq!(Theme::Dark.name(), "dark");
        assert_eq!(Theme::Light.name(), "light");
    }
}
