//! Host-page contract: element ids and selectors.
//!
//! SYSTEM CONTEXT
//! ==============
//! The script binds to a static page it does not render. Every id and
//! selector it relies on is collected here instead of being scattered across
//! the behavior modules.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Ids of the contact form and its controls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormIds {
    pub form: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub message: &'static str,
    pub submit: &'static str,
}

impl Default for FormIds {
    fn default() -> Self {
        Self {
            form: "form-contato",
            name: "nome",
            email: "email",
            phone: "tel",
            message: "mensagem",
            submit: "enviar",
        }
    }
}

/// Where the page behaviors find their host elements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageConfig {
    pub form: FormIds,
    pub nav_selector: &'static str,
    pub header_selector: &'static str,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            form: FormIds::default(),
            nav_selector: "nav.menu",
            header_selector: "header.container",
        }
    }
}
