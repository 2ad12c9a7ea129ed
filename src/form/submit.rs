//! Submit button state during the simulated send.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use std::time::Duration;

pub const SENDING_LABEL: &str = "Enviando...";

/// Simulated network round trip before the send is reported as done.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1200);

/// Label and enabled state of the submit button.
///
/// The disabled flag is the only guard against a second submission while
/// the simulated request is still pending.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: String,
    pub disabled: bool,
    original_label: Option<String>,
}

impl SubmitButton {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: false,
            original_label: None,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.original_label.is_some()
    }

    /// Disable the button and show the in-progress caption.
    ///
    /// Returns `false` without changing anything if a send is already pending.
    pub fn begin(&mut self) -> bool {
        if self.is_busy() {
            return false;
        }
        self.original_label = Some(std::mem::replace(&mut self.label, SENDING_LABEL.to_owned()));
        self.disabled = true;
        true
    }

    /// Re-enable the button and restore the caption it had before `begin`.
    pub fn finish(&mut self) {
        if let Some(original) = self.original_label.take() {
            self.label = original;
        }
        self.disabled = false;
    }
}
