//! Responsive navigation toggle.
//!
//! Below the menu breakpoint the nav collapses behind an injected "Menu"
//! button. Every media-query change recomputes both displays from scratch,
//! discarding whatever the button last did.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::config::PageConfig;

pub const MENU_BUTTON_ID: &str = "btn-menu";

#[cfg(feature = "csr")]
const MENU_BUTTON_STYLE: &str = "display:none; margin:10px auto 0; padding:6px 12px; border-radius:6px; \
     border:1px solid #506E6A; background:#fff; cursor:pointer;";

/// Media query below which the nav collapses behind the menu button.
pub const MENU_QUERY: &str = "(max-width: 768px)";

/// Inline `display` values for the menu button and the nav.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLayout {
    pub button_display: &'static str,
    pub nav_display: &'static str,
}

impl NavLayout {
    /// Layout dictated by the viewport alone. Also what every media-query
    /// change resets to, whatever the menu button did before.
    pub fn for_viewport(small: bool) -> Self {
        if small {
            Self {
                button_display: "inline-block",
                nav_display: "none",
            }
        } else {
            Self {
                button_display: "none",
                nav_display: "block",
            }
        }
    }

    /// Menu button click: show a hidden nav, hide a visible one.
    pub fn toggle_nav(&mut self) {
        self.nav_display = toggled_display(self.nav_display);
    }
}

/// Nav display after a menu click, given its current inline `display`.
pub fn toggled_display(current: &str) -> &'static str {
    if current == "none" { "block" } else { "none" }
}

/// Inject the menu button above the nav and keep both in sync with the
/// viewport. Skipped when the nav selector matches nothing.
pub fn attach(config: &PageConfig) {
    #[cfg(feature = "csr")]
    {
        use std::cell::Cell;
        use std::rc::Rc;

        use crate::util::dom;
        use wasm_bindgen::JsCast;
        use web_sys::{Event, HtmlElement};

        let Some(nav) = dom::query::<HtmlElement>(config.nav_selector) else {
            log::debug!("no nav matches {:?}; menu toggle skipped", config.nav_selector);
            return;
        };
        let Some(button) = dom::document()
            .and_then(|d| d.create_element("button").ok())
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };
        button.set_id(MENU_BUTTON_ID);
        let _ = button.set_attribute("type", "button");
        let _ = button.set_attribute("style", MENU_BUTTON_STYLE);
        button.set_text_content(Some("Menu"));
        if let Some(parent) = nav.parent_node() {
            let _ = parent.insert_before(&button, Some(nav.as_ref()));
        }

        let query = web_sys::window().and_then(|w| w.match_media(MENU_QUERY).ok().flatten());
        let small = query.as_ref().is_some_and(web_sys::MediaQueryList::matches);
        let layout = Rc::new(Cell::new(NavLayout::for_viewport(small)));

        let render = {
            let button = button.clone();
            let nav = nav.clone();
            let layout = Rc::clone(&layout);
            move || {
                let current = layout.get();
                dom::set_display(&button, current.button_display);
                dom::set_display(&nav, current.nav_display);
            }
        };
        render();

        match query {
            Some(query) => {
                let watched = query.clone();
                let layout = Rc::clone(&layout);
                let render = render.clone();
                dom::listen(&query, "change", move |_: Event| {
                    layout.set(NavLayout::for_viewport(watched.matches()));
                    render();
                });
            }
            None => log::warn!("media query {MENU_QUERY:?} unavailable; using the wide layout"),
        }

        dom::listen(&button, "click", move |_: Event| {
            let mut current = layout.get();
            current.toggle_nav();
            layout.set(current);
            render();
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
    }
}
