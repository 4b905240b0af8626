//! Browser bindings: DOM event adaptation, page navigation, and logging
//! setup. Compiled only with the `web` feature.

/// DOM listener registration for an [`InteractionSession`](crate::session::InteractionSession).
pub mod listeners;

use wasm_bindgen::JsValue;

pub use listeners::{register_event_listeners, EventListeners};

use crate::error::CubeNavError;
use crate::input::Viewport;
use crate::navigation::{NavigationRequest, Navigator};

/// Render a JS exception for an error message.
pub(crate) fn js_error(context: &str, err: &JsValue) -> CubeNavError {
    CubeNavError::Web(format!("{context}: {err:?}"))
}

/// Route console output through `log` and install the panic hook.
///
/// Safe to call more than once; later calls leave the first logger in
/// place.
pub fn init_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(level).is_err() {
        log::debug!("logger already initialized");
    }
}

/// Current `window.innerWidth` × `window.innerHeight`. Unreadable sizes
/// become zero, which the controller treats as "no click target".
#[must_use]
pub fn window_viewport(window: &web_sys::Window) -> Viewport {
    let dim = |v: Result<JsValue, JsValue>| {
        v.ok().as_ref().and_then(JsValue::as_f64).unwrap_or(0.0) as f32
    };
    Viewport::new(dim(window.inner_width()), dim(window.inner_height()))
}

/// Navigates by assigning `window.location.href`.
pub struct LocationNavigator {
    window: web_sys::Window,
}

impl LocationNavigator {
    /// Navigator for the given window.
    #[must_use]
    pub fn new(window: web_sys::Window) -> Self {
        Self { window }
    }
}

impl Navigator for LocationNavigator {
    fn navigate(
        &mut self,
        request: &NavigationRequest,
    ) -> Result<(), CubeNavError> {
        self.window
            .location()
            .set_href(&request.destination)
            .map_err(|e| js_error("location.href", &e))
    }
}
