//! Controller, scene, and navigator bundled for event-loop glue.
//!
//! The browser bindings in `web` share one `InteractionSession` between
//! their listener closures. Nothing here touches the DOM, so the whole
//! event flow can be driven natively.

use crate::camera::Camera;
use crate::error::CubeNavError;
use crate::input::{InputEvent, InteractionController, SceneView, Viewport};
use crate::navigation::Navigator;
use crate::picking::Pickable;

/// Everything one cube menu needs to react to input.
pub struct InteractionSession<P, N> {
    controller: InteractionController,
    camera: Camera,
    object: P,
    navigator: N,
    attached: bool,
}

impl<P: Pickable, N: Navigator> InteractionSession<P, N> {
    /// Bundle a controller with the scene it drives and the navigator that
    /// fulfils its requests.
    #[must_use]
    pub fn new(
        controller: InteractionController,
        camera: Camera,
        object: P,
        navigator: N,
    ) -> Self {
        Self {
            controller,
            camera,
            object,
            navigator,
            attached: false,
        }
    }

    /// The controller.
    #[must_use]
    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    /// Camera used for picking and zoom.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable camera, e.g. to update the aspect on resize.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// The interactive object.
    #[must_use]
    pub fn object(&self) -> &P {
        &self.object
    }

    /// The navigator.
    #[must_use]
    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Whether a drag is in progress (render loops pause idle spin on it).
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.controller.is_dragging()
    }

    /// Feed one event through the controller and carry out any resulting
    /// navigation. Returns `true` if navigation happened.
    pub fn dispatch(
        &mut self,
        event: InputEvent,
        viewport: Viewport,
    ) -> Result<bool, CubeNavError> {
        let mut scene = SceneView {
            camera: &self.camera,
            object: &mut self.object,
            viewport,
        };
        let Some(request) = self.controller.handle_event(event, &mut scene)
        else {
            return Ok(false);
        };
        self.navigator.navigate(&request)?;
        Ok(true)
    }

    /// End a touch gesture and treat it as a tap at the last touch
    /// position. A tap that moved past the click threshold does nothing.
    /// Returns `true` if navigation happened.
    pub fn end_touch(
        &mut self,
        viewport: Viewport,
    ) -> Result<bool, CubeNavError> {
        let _ = self.dispatch(InputEvent::PressEnd, viewport)?;
        self.controller
            .last_pointer_position()
            .map_or(Ok(false), |position| {
                self.dispatch(InputEvent::Click { position }, viewport)
            })
    }

    /// Per-frame update. Returns `true` if the camera moved.
    pub fn advance_frame(&mut self) -> bool {
        self.controller.step_zoom(&mut self.camera)
    }

    /// Record that listeners are attached. Returns `false` if they already
    /// were.
    #[cfg_attr(not(feature = "web"), allow(dead_code))]
    pub(crate) fn attach(&mut self) -> bool {
        !std::mem::replace(&mut self.attached, true)
    }

    /// Record that listeners were removed.
    #[cfg_attr(not(feature = "web"), allow(dead_code))]
    pub(crate) fn detach(&mut self) {
        self.attached = false;
    }
}
