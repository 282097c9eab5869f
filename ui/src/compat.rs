// Platform seams: the browser build talks to web APIs directly, native
// launchers get the closest equivalent (or an inert stub where the concept
// does not exist outside a browser).

// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use std::time::Duration;

    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::Window;

    pub async fn sleep(duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }

    pub async fn clipboard_set(text: String) -> bool {
        match web_sys::window().map(|win: Window| win.navigator().clipboard()) {
            Some(clipboard) => {
                let promise = clipboard.write_text(&text);
                JsFuture::from(promise).await.is_ok()
            }
            _ => false,
        }
    }

    /// The browser's identification string, exactly as the client supplies it.
    pub fn user_agent() -> Option<String> {
        web_sys::window()?.navigator().user_agent().ok()
    }

    /// Points the current page at `uri`. A custom scheme hands control to
    /// whatever app claims it.
    pub fn navigate_to(uri: &str) -> bool {
        match web_sys::window() {
            Some(window) => window.location().set_href(uri).is_ok(),
            None => false,
        }
    }

    /// Keeps a window-blur subscription registered; dropping it removes the
    /// listener.
    pub struct BlurListener {
        closure: Closure<dyn FnMut()>,
    }

    impl Drop for BlurListener {
        fn drop(&mut self) {
            if let Some(window) = web_sys::window() {
                let _ = window.remove_event_listener_with_callback(
                    "blur",
                    self.closure.as_ref().unchecked_ref(),
                );
            }
        }
    }

    /// Subscribes `f` to window blur for the life of the returned guard.
    pub fn on_window_blur(f: impl FnMut() + 'static) -> Option<BlurListener> {
        let window = web_sys::window()?;
        let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())
            .ok()?;
        Some(BlurListener { closure })
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use std::time::Duration;

    use dioxus_clipboard::prelude::*;

    pub async fn sleep(duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    pub async fn clipboard_set(text: String) -> bool {
        let mut clipboard = use_clipboard();
        clipboard.set(text).is_ok()
    }

    /// Native launchers run outside a browser; there is no identification
    /// string to report, so device detection falls back to "stationary".
    pub fn user_agent() -> Option<String> {
        None
    }

    /// There is no page to point anywhere; callers fall back to the
    /// scan-the-code path.
    pub fn navigate_to(_uri: &str) -> bool {
        false
    }

    pub struct BlurListener;

    /// Window blur is a browser signal; nothing to subscribe to here.
    pub fn on_window_blur(_f: impl FnMut() + 'static) -> Option<BlurListener> {
        None
    }
}
