//! Document readiness.

#[cfg(test)]
#[path = "ready_test.rs"]
mod ready_test;

/// `true` once `document.readyState` has moved past `"loading"`, meaning
/// every element of the static page is available.
pub fn is_parsed(ready_state: &str) -> bool {
    ready_state != "loading"
}
