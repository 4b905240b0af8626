//! Adapts DOM mouse, touch, and wheel events into [`InputEvent`]s.
//!
//! Mouse drags use the browser's relative `movementX/Y`; touch drags use
//! absolute `clientX/Y` samples. A touch that ends as a tap on a face
//! navigates directly and cancels the synthetic `click` that would follow.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, EventTarget, MouseEvent, TouchEvent, WheelEvent, Window};

use super::{js_error, window_viewport};
use crate::error::CubeNavError;
use crate::input::{InputEvent, PointerDelta, Viewport};
use crate::navigation::Navigator;
use crate::picking::Pickable;
use crate::session::InteractionSession;

/// Browser wheel deltas are in pixels; one notch is roughly this many.
const WHEEL_NOTCH_PX: f64 = 100.0;

type Shared<P, N> = Rc<RefCell<InteractionSession<P, N>>>;
type Handler = Closure<dyn FnMut(Event)>;

/// Attached DOM listeners. Dropping this removes them and allows the
/// session to be registered again.
pub struct EventListeners {
    target: EventTarget,
    handlers: Vec<(&'static str, Handler)>,
    on_detach: Option<Box<dyn FnOnce()>>,
}

impl EventListeners {
    fn add(
        &mut self,
        name: &'static str,
        handler: Handler,
    ) -> Result<(), CubeNavError> {
        self.target
            .add_event_listener_with_callback(
                name,
                handler.as_ref().unchecked_ref(),
            )
            .map_err(|e| js_error(name, &e))?;
        self.handlers.push((name, handler));
        Ok(())
    }

    /// Number of attached listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether nothing is attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Drop for EventListeners {
    fn drop(&mut self) {
        for (name, handler) in &self.handlers {
            if let Err(e) = self.target.remove_event_listener_with_callback(
                name,
                handler.as_ref().unchecked_ref(),
            ) {
                log::warn!("failed to remove {name} listener: {e:?}");
            }
        }
        if let Some(detach) = self.on_detach.take() {
            detach();
        }
    }
}

/// Subscribe `session` to the window's pointer, touch, and wheel events.
///
/// Returns `Ok(None)` without attaching anything if the session already
/// has live listeners. Keep the returned guard alive for as long as the
/// cube should respond to input.
pub fn register_event_listeners<P, N>(
    window: &Window,
    session: &Shared<P, N>,
) -> Result<Option<EventListeners>, CubeNavError>
where
    P: Pickable + 'static,
    N: Navigator + 'static,
{
    let newly_attached = session
        .try_borrow_mut()
        .map_err(|e| CubeNavError::Web(e.to_string()))?
        .attach();
    if !newly_attached {
        log::warn!("event listeners already registered; ignoring");
        return Ok(None);
    }

    let weak = Rc::downgrade(session);
    let mut listeners = EventListeners {
        target: window.clone().into(),
        handlers: Vec::new(),
        on_detach: Some(Box::new(move || {
            let Some(session) = weak.upgrade() else {
                return;
            };
            if let Ok(mut session) = session.try_borrow_mut() {
                session.detach();
            };
        })),
    };

    // On failure the partially built guard drops and detaches
    listeners.add("mousedown", handler(window, session, on_mouse_down))?;
    listeners.add("mousemove", handler(window, session, on_mouse_move))?;
    listeners.add("mouseup", handler(window, session, on_release))?;
    listeners.add("click", handler(window, session, on_click))?;
    listeners.add("touchstart", handler(window, session, on_touch_start))?;
    listeners.add("touchmove", handler(window, session, on_touch_move))?;
    listeners.add("touchend", handler(window, session, on_touch_end))?;
    listeners.add("wheel", handler(window, session, on_wheel))?;

    log::info!("registered {} event listeners", listeners.len());
    Ok(Some(listeners))
}

/// Wrap an adapter in a closure that borrows the session, syncs the camera
/// aspect to the viewport, and cancels the event's default action when it navigated.
fn handler<P, N>(
    window: &Window,
    session: &Shared<P, N>,
    adapt: fn(
        &Event,
        &mut InteractionSession<P, N>,
        Viewport,
    ) -> Result<bool, CubeNavError>,
) -> Handler
where
    P: Pickable + 'static,
    N: Navigator + 'static,
{
    let window = window.clone();
    let session = Rc::clone(session);
    Closure::new(move |event: Event| {
        let Ok(mut session) = session.try_borrow_mut() else {
            log::warn!("re-entrant {} event dropped", event.type_());
            return;
        };
        let viewport = window_viewport(&window);
        session.camera_mut().resize(viewport.width, viewport.height);
        match adapt(&event, &mut session, viewport) {
            Ok(true) => event.prevent_default(),
            Ok(false) => {}
            Err(e) => log::error!("{} handler failed: {e}", event.type_()),
        }
    })
}

/// Read an optional numeric field; absent or non-numeric is `None`.
fn number_field(event: &Event, name: &str) -> Option<f32> {
    js_sys::Reflect::get(event, &JsValue::from_str(name))
        .ok()
        .as_ref()
        .and_then(JsValue::as_f64)
        .map(|v| v as f32)
}

fn first_touch(event: &Event) -> Option<Vec2> {
    let touch = event.dyn_ref::<TouchEvent>()?.touches().get(0)?;
    Some(Vec2::new(touch.client_x() as f32, touch.client_y() as f32))
}

fn on_mouse_down<P: Pickable, N: Navigator>(
    _event: &Event,
    session: &mut InteractionSession<P, N>,
    viewport: Viewport,
) -> Result<bool, CubeNavError> {
    session.dispatch(InputEvent::PressStart { position: None }, viewport)
}

fn on_mouse_move<P: Pickable, N: Navigator>(
    event: &Event,
    session: &mut InteractionSession<P, N>,
    viewport: Viewport,
) -> Result<bool, CubeNavError> {
    let delta = PointerDelta::relative_or_zero(
        number_field(event, "movementX"),
        number_field(event, "movementY"),
    );
    session.dispatch(InputEvent::Move { delta }, viewport)
}

fn on_release<P: Pickable, N: Navigator>(
    _event: &Event,
    session: &mut InteractionSession<P, N>,
    viewport: Viewport,
) -> Result<bool, CubeNavError> {
    session.dispatch(InputEvent::PressEnd, viewport)
}

fn on_click<P: Pickable, N: Navigator>(
    event: &Event,
    session: &mut InteractionSession<P, N>,
    viewport: Viewport,
) -> Result<bool, CubeNavError> {
    let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
        return Ok(false);
    };
    let position =
        Vec2::new(mouse.client_x() as f32, mouse.client_y() as f32);
    session.dispatch(InputEvent::Click { position }, viewport)
}

fn on_touch_start<P: Pickable, N: Navigator>(
    event: &Event,
    session: &mut InteractionSession<P, N>,
    viewport: Viewport,
) -> Result<bool, CubeNavError> {
    let Some(position) = first_touch(event) else {
        return Ok(false);
    };
    let start = InputEvent::PressStart {
        position: Some(position),
    };
    session.dispatch(start, viewport)
}

fn on_touch_move<P: Pickable, N: Navigator>(
    event: &Event,
    session: &mut InteractionSession<P, N>,
    viewport: Viewport,
) -> Result<bool, CubeNavError> {
    let Some(position) = first_touch(event) else {
        return Ok(false);
    };
    let delta = PointerDelta::Absolute(position);
    session.dispatch(InputEvent::Move { delta }, viewport)
}

fn on_touch_end<P: Pickable, N: Navigator>(
    _event: &Event,
    session: &mut InteractionSession<P, N>,
    viewport: Viewport,
) -> Result<bool, CubeNavError> {
    session.end_touch(viewport)
}

fn on_wheel<P: Pickable, N: Navigator>(
    event: &Event,
    session: &mut InteractionSession<P, N>,
    viewport: Viewport,
) -> Result<bool, CubeNavError> {
    let Some(wheel) = event.dyn_ref::<WheelEvent>() else {
        return Ok(false);
    };
    let delta = (wheel.delta_y() / WHEEL_NOTCH_PX) as f32;
    session.dispatch(InputEvent::Scroll { delta }, viewport)
}
