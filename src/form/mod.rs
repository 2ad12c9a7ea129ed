//! Contact form: validation and simulated submission.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form is plain HTML owned by the host page. This module intercepts its
//! `submit` event, validates a snapshot of the four fields, and on success
//! pretends to send it: the button is locked for a fixed delay, then a thank
//! you message is shown and the form is reset. Nothing leaves the browser.

pub mod submit;
pub mod validation;

pub use submit::{SUBMIT_DELAY, SubmitButton};
pub use validation::{Field, FormInput, Submission, ValidationError, validate};

use crate::config::PageConfig;

#[cfg(feature = "csr")]
use crate::config::FormIds;
#[cfg(feature = "csr")]
use crate::util::dom;
#[cfg(feature = "csr")]
use web_sys::{HtmlButtonElement, HtmlElement, HtmlFormElement};

#[cfg(feature = "csr")]
struct FormElements {
    form: HtmlFormElement,
    name: HtmlElement,
    email: HtmlElement,
    phone: HtmlElement,
    message: HtmlElement,
    submit: HtmlButtonElement,
}

#[cfg(feature = "csr")]
impl FormElements {
    fn lookup(ids: &FormIds) -> Option<Self> {
        Some(Self {
            form: dom::by_id(ids.form)?,
            name: dom::by_id(ids.name)?,
            email: dom::by_id(ids.email)?,
            phone: dom::by_id(ids.phone)?,
            message: dom::by_id(ids.message)?,
            submit: dom::by_id(ids.submit)?,
        })
    }

    fn field(&self, field: Field) -> &HtmlElement {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    fn snapshot(&self) -> FormInput {
        FormInput {
            name: dom::value_of(&self.name),
            email: dom::value_of(&self.email),
            phone: dom::value_of(&self.phone),
            message: dom::value_of(&self.message),
            phone_required: self.phone.has_attribute("required"),
        }
    }

    fn clear_errors(&self) {
        for field in Field::ALL {
            dom::set_invalid(self.field(field), false);
        }
    }

    fn show_errors(&self, err: &ValidationError) {
        for field in err.fields() {
            dom::set_invalid(self.field(field), true);
        }
        if let Some(field) = err.focus() {
            let _ = self.field(field).focus();
        }
    }

    fn render_button(&self, state: &SubmitButton) {
        self.submit.set_disabled(state.disabled);
        self.submit.set_text_content(Some(&state.label));
    }
}

/// Bind validation and the simulated send to the contact form.
///
/// Skipped when the form or any of its controls is missing.
pub fn attach(config: &PageConfig) {
    #[cfg(feature = "csr")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;
        use web_sys::Event;

        let Some(elements) = FormElements::lookup(&config.form) else {
            log::debug!("contact form {:?} incomplete; validation skipped", config.form.form);
            return;
        };
        let elements = Rc::new(elements);
        let button = Rc::new(RefCell::new(SubmitButton::new(
            elements.submit.text_content().unwrap_or_default(),
        )));

        // Editing a field clears its marker right away.
        for field in Field::ALL {
            let el = elements.field(field).clone();
            dom::listen(elements.field(field), "input", move |_: Event| dom::set_invalid(&el, false));
        }

        let form = elements.form.clone();
        dom::listen(&form, "submit", move |ev: Event| {
            ev.prevent_default();
            if button.borrow().is_busy() {
                return;
            }
            elements.clear_errors();

            if let Err(err) = validate(&elements.snapshot()) {
                log::debug!("contact form rejected: {err:?}");
                elements.show_errors(&err);
                crate::modal::show_message(err.to_string());
                return;
            }

            if !button.borrow_mut().begin() {
                return;
            }
            elements.render_button(&button.borrow());
            log::info!("sending contact form (simulated, {}ms)", SUBMIT_DELAY.as_millis());

            let elements = Rc::clone(&elements);
            let button = Rc::clone(&button);
            wasm_bindgen_futures::spawn_local(async move {
                gloo_timers::future::sleep(SUBMIT_DELAY).await;
                let submission = Submission::new(&dom::value_of(&elements.name));
                crate::modal::show_message(submission.success_message());
                elements.form.reset();
                button.borrow_mut().finish();
                elements.render_button(&button.borrow());
                log::info!("contact form sent");
            });
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
    }
}
