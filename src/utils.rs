//! Text, Event and Dialog Utilities

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// Appended to truncated text
pub const ELLIPSIS: &str = "...";

/// Cuts `text` to `max_len` characters and appends `...` when it is longer
pub fn format_text(text: &str, max_len: usize) -> String {
    match text.char_indices().nth(max_len) {
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
        None => text.to_string(),
    }
}

/// Wraps `f` so it only runs once calls have been quiet for `wait_ms`,
/// with the arguments of the last call. Each call cancels the pending one.
pub fn debounce<T: 'static>(wait_ms: u32, f: impl Fn(T) + 'static) -> impl Fn(T) + 'static {
    let f = Rc::new(f);
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

    move |arg: T| {
        let f = Rc::clone(&f);
        let timeout = Timeout::new(wait_ms, move || (*f)(arg));
        // Dropping the previous Timeout clears it
        pending.borrow_mut().replace(timeout);
    }
}

/// Blocking browser alert, used for form validation
pub fn show_alert(message: &str) {
    let shown = web_sys::window().map(|w| w.alert_with_message(message));
    if !matches!(shown, Some(Ok(()))) {
        tracing::warn!("Could not show alert: {}", message);
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_debounce_runs_last_call_only() {
        let calls: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        let search = debounce(50, move |term: String| sink.borrow_mut().push(term));

        search("a".to_string());
        search("ab".to_string());
        search("abc".to_string());
        assert!(calls.borrow().is_empty());

        TimeoutFuture::new(120).await;
        assert_eq!(*calls.borrow(), vec!["abc".to_string()]);
    }
}
