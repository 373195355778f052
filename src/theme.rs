//! Dark/light theme.
//!
//! `ThemeState` is plain data updated through [`Reducible`]; reading and
//! writing the persisted preference goes through [`ThemeStore`], and
//! [`apply_to_document`] toggles the `dark` class on `<html>`.

use std::rc::Rc;

use log::{debug, warn};
use yew::prelude::*;

use crate::config::THEME_STORAGE_KEY;

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Icon offered by the toggle: the sun switches back to light.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Dark => "fas fa-sun",
            Theme::Light => "fas fa-moon",
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Dark => "Light Mode",
            Theme::Light => "Dark Mode",
        }
    }
}

/// Stored preference wins; otherwise follow the system colour scheme.
pub fn resolve(stored: Option<&str>, prefers_dark: bool) -> Theme {
    match stored.filter(|value| !value.is_empty()) {
        Some(value) => Theme::parse(value).unwrap_or(Theme::Light),
        None if prefers_dark => Theme::Dark,
        None => Theme::Light,
    }
}

pub trait ThemeStore {
    fn load(&self) -> Option<String>;
    fn save(&self, theme: Theme);
}

/// `window.localStorage` under the `theme` key.
pub struct LocalThemeStore;

impl ThemeStore for LocalThemeStore {
    fn load(&self) -> Option<String> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok())
            .flatten()
    }

    fn save(&self, theme: Theme) {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if storage.set_item(THEME_STORAGE_KEY, theme.as_str()).is_err() {
                    warn!("Could not persist theme preference");
                }
            }
        }
    }
}

pub fn system_prefers_dark() -> bool {
    color_scheme_query().map_or(false, |mq| mq.matches())
}

pub fn color_scheme_query() -> Option<web_sys::MediaQueryList> {
    web_sys::window()
        .and_then(|w| w.match_media(DARK_QUERY).ok())
        .flatten()
}

pub fn apply_to_document(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        let classes = root.class_list();
        let result = if theme.is_dark() {
            classes.add_1("dark")
        } else {
            classes.remove_1("dark")
        };
        if result.is_err() {
            warn!("Could not update the document theme class");
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ThemeState {
    pub theme: Theme,
    /// Set once the user has a stored preference; system changes are ignored after that.
    pub explicit: bool,
}

pub enum ThemeAction {
    Toggle,
    SystemChanged(bool),
}

impl ThemeState {
    pub fn load(store: &impl ThemeStore, prefers_dark: bool) -> Self {
        let stored = store.load().filter(|value| !value.is_empty());
        Self {
            theme: resolve(stored.as_deref(), prefers_dark),
            explicit: stored.is_some(),
        }
    }

    pub fn next(&self, action: ThemeAction) -> Self {
        match action {
            ThemeAction::Toggle => Self {
                theme: self.theme.toggled(),
                explicit: true,
            },
            ThemeAction::SystemChanged(prefers_dark) if !self.explicit => Self {
                theme: if prefers_dark { Theme::Dark } else { Theme::Light },
                explicit: false,
            },
            ThemeAction::SystemChanged(_) => self.clone(),
        }
    }

    /// Writes the preference back when the user chose it.
    pub fn persist(&self, store: &impl ThemeStore) {
        if self.explicit {
            store.save(self.theme);
        }
    }
}

impl Reducible for ThemeState {
    type Action = ThemeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.next(action);
        if next == *self {
            return self;
        }
        debug!("Theme is now {}", next.theme.as_str());
        Rc::new(next)
    }
}
