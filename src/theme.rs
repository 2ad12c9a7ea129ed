//! Light/dark theme toggle.
//!
//! Reads the user's preference from `localStorage` and applies the
//! `tema-escuro` class to `<body>`. Each click on the header button flips the
//! class, relabels the button, and writes the new value back. Loading a page
//! never writes: a visitor who never clicks has no stored entry.
//!
//! TRADE-OFFS
//! ==========
//! The stored value is compared as an exact string. Anything other than
//! `escuro` (typos, old formats, a missing entry) means light.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use leptos::prelude::*;

use crate::config::PageConfig;

pub const STORAGE_KEY: &str = "tema";
pub const BODY_CLASS: &str = "tema-escuro";

const BUTTON_STYLE: &str = "position:absolute; right:20px; top:12px; padding:6px 10px; border:0; border-radius:6px; \
     background:#0d3c91; color:#fff; cursor:pointer; font-weight:700;";

/// Page color scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Interpret a raw `localStorage` value.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("escuro") => Self::Dark,
            _ => Self::Light,
        }
    }

    pub fn storage_value(self) -> &'static str {
        match self {
            Self::Light => "claro",
            Self::Dark => "escuro",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Tema: Claro",
            Self::Dark => "Tema: Escuro",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Theme implied by whether `<body>` carries the dark class.
    pub fn from_body_class(dark_class_present: bool) -> Self {
        if dark_class_present { Self::Dark } else { Self::Light }
    }
}

/// Read the stored theme preference. Light when nothing usable is stored.
pub fn read_preference() -> Theme {
    #[cfg(feature = "csr")]
    {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());
        Theme::from_stored(stored.as_deref())
    }
    #[cfg(not(feature = "csr"))]
    {
        Theme::Light
    }
}

/// Theme currently applied to `<body>`, `None` outside the browser.
pub fn applied() -> Option<Theme> {
    #[cfg(feature = "csr")]
    {
        let body = crate::util::dom::document()?.body()?;
        Some(Theme::from_body_class(body.class_list().contains(BODY_CLASS)))
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Add or remove the dark class on `<body>`.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(body) = crate::util::dom::document().and_then(|d| d.body()) {
            let class_list = body.class_list();
            if theme.is_dark() {
                let _ = class_list.add_1(BODY_CLASS);
            } else {
                let _ = class_list.remove_1(BODY_CLASS);
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Write the preference to `localStorage`.
pub fn persist(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, theme.storage_value());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Flip the theme, apply it, and persist it.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    persist(next);
    log::info!("theme switched to {}", next.storage_value());
    next
}

/// Header button click. The page's `<body>` class decides the current theme;
/// `shown` is only used when there is no page to ask.
pub fn toggle_page(shown: Theme) -> Theme {
    toggle(applied().unwrap_or(shown))
}

/// Header button showing the active theme.
#[component]
pub fn ThemeToggle(initial: Theme) -> impl IntoView {
    let theme = RwSignal::new(initial);
    let on_click = move |_| theme.update(|t| *t = toggle_page(*t));

    view! {
        <button id="btn-tema" type="button" style=BUTTON_STYLE on:click=on_click>
            {move || theme.get().label()}
        </button>
    }
}

/// Restore the stored theme and mount the toggle into the page header.
///
/// Skipped when the header selector matches nothing.
pub fn attach(config: &PageConfig) {
    #[cfg(feature = "csr")]
    {
        let Some(header) = crate::util::dom::query::<web_sys::HtmlElement>(config.header_selector) else {
            log::debug!("no header matches {:?}; theme toggle skipped", config.header_selector);
            return;
        };
        let _ = header.style().set_property("position", "relative");

        let initial = read_preference();
        if initial.is_dark() {
            apply(initial);
        }
        leptos::mount::mount_to(header, move || view! { <ThemeToggle initial=initial/> }).forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
    }
}
