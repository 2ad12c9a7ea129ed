//! Reusable message dialog.
//!
//! The overlay is mounted into `<body>` the first time a message is shown
//! and stays there for the lifetime of the page. Later calls only swap the
//! text and flip `display`. There is no queue: showing a message while one
//! is already visible replaces it in place.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use std::cell::RefCell;

use leptos::prelude::*;

const OVERLAY_STYLE: &str =
    "position: fixed; inset: 0; z-index: 9999; background: rgba(0,0,0,.45); align-items: center; justify-content: center;";
const BOX_STYLE: &str = "background:#fff; color:#222; padding:16px 20px; border-radius:10px; \
     min-width:280px; max-width:90vw; text-align:center; box-shadow:0 10px 30px rgba(0,0,0,.2);";
const TEXT_STYLE: &str = "margin:0 0 10px 0;";
const BUTTON_STYLE: &str =
    "padding:8px 14px; border:0; border-radius:6px; background:#1aa7a7; color:#fff; font-weight:700; cursor:pointer;";

thread_local! {
    static MODAL: RefCell<Option<RwSignal<ModalState>>> = const { RefCell::new(None) };
}

/// Text and visibility of the dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    pub text: String,
    pub visible: bool,
}

impl ModalState {
    pub fn show(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    fn display(&self) -> &'static str {
        if self.visible { "flex" } else { "none" }
    }
}

/// Full-screen overlay with a centered message box and an OK button.
///
/// Clicking the backdrop or OK hides the dialog; clicks inside the box are
/// swallowed so they never reach the backdrop.
#[component]
pub fn MessageModal(state: RwSignal<ModalState>) -> impl IntoView {
    let close = move |_| state.update(ModalState::hide);

    view! {
        <div
            id="modal"
            style=move || format!("{OVERLAY_STYLE} display: {};", state.with(ModalState::display))
            on:click=close
        >
            <div id="modal-caixa" style=BOX_STYLE on:click=move |ev| ev.stop_propagation()>
                <p id="modal-texto" style=TEXT_STYLE>{move || state.with(|s| s.text.clone())}</p>
                <button id="modal-fechar" type="button" style=BUTTON_STYLE on:click=close>
                    "OK"
                </button>
            </div>
        </div>
    }
}

/// Show `text` in the page dialog, creating the dialog on first use.
pub fn show_message(text: impl Into<String>) {
    let text = text.into();
    log::debug!("modal: {text}");
    modal_signal().update(|s| s.show(text));
}

/// Hide the dialog if it exists. Never creates it.
pub fn hide_message() {
    if let Some(state) = MODAL.with(|slot| *slot.borrow()) {
        state.update(ModalState::hide);
    }
}

/// Snapshot of the dialog state, `None` until the first message.
pub fn current() -> Option<ModalState> {
    MODAL.with(|slot| *slot.borrow()).map(|state| state.get_untracked())
}

fn modal_signal() -> RwSignal<ModalState> {
    MODAL.with(|slot| *slot.borrow_mut().get_or_insert_with(mount))
}

fn mount() -> RwSignal<ModalState> {
    let state = RwSignal::new(ModalState::default());
    #[cfg(feature = "csr")]
    leptos::mount::mount_to_body(move || view! { <MessageModal state=state/> });
    state
}
