//! Theme management module for the application.
//!
//! Provides a context-based theme system with light, dark and system themes.
//! Theme preference is persisted in localStorage and applied as the
//! `data-theme` attribute on `<body>`.

use leptos::prelude::*;
use web_sys::window;

use crate::shared::i18n::use_i18n;

/// Available themes in the application.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    Light,
    Dark,
    /// Follows `prefers-color-scheme`
    #[default]
    System,
}

impl Theme {
    /// Returns the theme name as a string (used for localStorage).
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    /// Label key for the UI.
    pub fn label_key(&self) -> &'static str {
        match self {
            Theme::Light => "theme.light",
            Theme::Dark => "theme.dark",
            Theme::System => "theme.system",
        }
    }

    /// Parse theme from string.
    pub fn from_code(s: &str) -> Self {
        match s {
            "light" => Theme::Light,
            "dark" => Theme::Dark,
            _ => Theme::System,
        }
    }

    /// Returns all available themes.
    pub fn all() -> [Theme; 3] {
        [Theme::Light, Theme::Dark, Theme::System]
    }

    /// Concrete theme written to `data-theme`.
    pub fn resolve(&self, prefers_dark: bool) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System if prefers_dark => "dark",
            Theme::System => "light",
        }
    }
}

const THEME_STORAGE_KEY: &str = "app-theme";

/// Load theme from localStorage.
fn load_theme_from_storage() -> Theme {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
        .map(|s| Theme::from_code(&s))
        .unwrap_or_default()
}

/// Save theme to localStorage.
fn save_theme_to_storage(theme: Theme) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
    }
}

fn prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Apply theme by setting the data-theme attribute on body.
fn apply_theme(theme: Theme) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.set_attribute("data-theme", theme.resolve(prefers_dark()));
    }
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme signal.
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    /// Set the theme and persist to storage.
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        save_theme_to_storage(theme);
        apply_theme(theme);
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let initial_theme = load_theme_from_storage();
    apply_theme(initial_theme);

    provide_context(ThemeContext {
        theme: RwSignal::new(initial_theme),
    });

    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

/// Theme dropdown for the top header.
#[component]
pub fn ThemeSelector() -> impl IntoView {
    let ctx = use_theme();
    let i18n = use_i18n();

    view! {
        <select
            class="top-header__select"
            title=move || i18n.t("theme.title")
            on:change=move |ev| ctx.set_theme(Theme::from_code(&event_target_value(&ev)))
        >
            {Theme::all().into_iter().map(|theme| view! {
                <option
                    value=theme.as_str()
                    selected=move || ctx.theme.get() == theme
                >
                    {move || i18n.t(theme.label_key())}
                </option>
            }).collect_view()}
        </select>
    }
}
