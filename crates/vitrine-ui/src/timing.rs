//! One-shot timer primitive for UI delays.
//!
//! `sleep` resolves after the given delay in the browser and immediately on
//! native targets, so logic built on it stays exercisable under `cargo test`.
//! Consumers that need cancellation guard with a generation counter (see
//! [`crate::toast`]) instead of aborting the spawned task.

/// Resolve after `delay_ms` milliseconds of wall-clock time.
#[cfg(target_arch = "wasm32")]
pub async fn sleep(delay_ms: u32) {
    use js_sys::{Function, Promise};
    use wasm_bindgen::{closure::Closure, JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    let mut executor = move |resolve: Function, _reject: Function| {
        let Some(window) = web_sys::window() else {
            let _ = resolve.call0(&JsValue::NULL);
            return;
        };

        let callback = Closure::once_into_js(move || {
            let _ = resolve.call0(&JsValue::NULL);
        });

        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay_ms as i32,
        );
    };

    let promise = Promise::new(&mut executor);
    let _ = JsFuture::from(promise).await;
}

/// Resolve after `delay_ms` milliseconds of wall-clock time.
///
/// Native builds resolve immediately; real timing only exists in the
/// browser event loop.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(_delay_ms: u32) {}
