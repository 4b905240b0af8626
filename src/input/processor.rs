//! Turns raw pointer events into cube rotation and navigation decisions.
//!
//! The `InteractionController` owns all transient input state (drag flag,
//! accumulated movement, last touch sample) plus the wheel zoom target and
//! the navigation table. The scene itself stays with the caller and is
//! lent in per event through [`SceneView`].

use glam::Vec2;

use super::event::{InputEvent, PointerDelta, Viewport};
use super::gesture::GestureState;
use crate::camera::{Camera, ZoomState};
use crate::navigation::{face_for_triangle, NavigationRequest, NavigationTable};
use crate::options::{InteractionOptions, Options};
use crate::picking::Pickable;

/// Borrowed view of the externally owned scene.
pub struct SceneView<'a, P: ?Sized> {
    /// Camera used to build picking rays.
    pub camera: &'a Camera,
    /// Object rotated by drags and tested by clicks.
    pub object: &'a mut P,
    /// Current viewport size.
    pub viewport: Viewport,
}

// ─────────────────────────────────────────────────────────────────────────────
// InteractionController
// ─────────────────────────────────────────────────────────────────────────────

/// Classifies press→release sequences as drags or clicks.
///
/// Drags rotate the object; clicks cast a ray through the pointer and, if a
/// face with a destination is hit, yield a [`NavigationRequest`].
///
/// # Usage
///
/// ```ignore
/// let mut scene = SceneView { camera: &camera, object: &mut cube, viewport };
/// if let Some(request) = controller.handle_event(event, &mut scene) {
///     navigator.navigate(&request)?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct InteractionController {
    /// Drag tracking for the current gesture.
    gesture: GestureState,
    /// Rotation speed and click threshold.
    options: InteractionOptions,
    /// Face → destination.
    table: NavigationTable,
    /// Wheel zoom target.
    zoom: ZoomState,
}

impl InteractionController {
    /// Create a controller from options, taking the zoom start from
    /// `camera`.
    #[must_use]
    pub fn new(options: &Options, camera: &Camera) -> Self {
        Self {
            gesture: GestureState::new(),
            options: options.interaction.clone(),
            table: options.navigation.clone().into(),
            zoom: ZoomState::new(camera, options.zoom.clone()),
        }
    }

    /// Whether a drag gesture is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    /// Pointer travel since the last press started.
    #[must_use]
    pub fn accumulated_movement(&self) -> f32 {
        self.gesture.accumulated_movement()
    }

    /// Last absolute (touch) position of the current or previous gesture.
    #[must_use]
    pub fn last_pointer_position(&self) -> Option<Vec2> {
        self.gesture.last_position()
    }

    /// The navigation table.
    #[must_use]
    pub fn table(&self) -> &NavigationTable {
        &self.table
    }

    /// Begin a gesture.
    pub fn on_press_start(&mut self, position: Option<Vec2>) {
        self.gesture.begin(position);
        log::debug!("gesture started at {position:?}");
    }

    /// Rotate `object` by a movement sample. Ignored unless dragging.
    pub fn on_move<P: Pickable + ?Sized>(
        &mut self,
        delta: PointerDelta,
        object: &mut P,
    ) {
        if !self.gesture.is_dragging() {
            return;
        }
        let d = self.gesture.track(delta);
        let speed = self.options.rotate_speed;
        let orientation = object.orientation_mut();
        orientation.y += d.x * speed;
        orientation.x += d.y * speed;
    }

    /// End the gesture. Does not classify it; that happens on the click.
    pub fn on_press_end(&mut self) {
        self.gesture.end();
        log::debug!(
            "gesture ended after {:.1}px",
            self.gesture.accumulated_movement()
        );
    }

    /// Resolve a click at `position` into a navigation request, if any.
    ///
    /// Returns `None` when the preceding gesture moved farther than the
    /// click threshold, when the ray misses, or when the hit face has no
    /// destination.
    #[must_use]
    pub fn on_click<P: Pickable + ?Sized>(
        &self,
        position: Vec2,
        viewport: Viewport,
        camera: &Camera,
        object: &P,
    ) -> Option<NavigationRequest> {
        let movement = self.gesture.accumulated_movement();
        if movement > self.options.click_threshold {
            log::debug!("click suppressed after {movement:.1}px drag");
            return None;
        }

        let ndc = viewport.to_ndc(position)?;
        let hit = object.raycast(&camera.ray_from_ndc(ndc))?;
        let face = face_for_triangle(hit.triangle_index);
        let Some(destination) = self.table.lookup(face) else {
            log::debug!("face {face} has no destination");
            return None;
        };

        log::info!("face {face} clicked, navigating to {destination}");
        Some(NavigationRequest {
            face,
            destination: destination.to_owned(),
        })
    }

    /// Apply a wheel delta to the zoom target.
    pub fn on_scroll(&mut self, delta: f32) {
        self.zoom.scroll(delta);
    }

    /// Ease `camera` toward the zoom target. Call once per frame; returns
    /// `true` if the camera moved.
    pub fn step_zoom(&mut self, camera: &mut Camera) -> bool {
        self.zoom.step(camera)
    }

    /// Process a raw input event and return zero or one navigation
    /// requests.
    pub fn handle_event<P: Pickable + ?Sized>(
        &mut self,
        event: InputEvent,
        scene: &mut SceneView<'_, P>,
    ) -> Option<NavigationRequest> {
        match event {
            InputEvent::PressStart { position } => {
                self.on_press_start(position);
                None
            }
            InputEvent::Move { delta } => {
                self.on_move(delta, &mut *scene.object);
                None
            }
            InputEvent::PressEnd => {
                self.on_press_end();
                None
            }
            InputEvent::Click { position } => self.on_click(
                position,
                scene.viewport,
                scene.camera,
                &*scene.object,
            ),
            InputEvent::Scroll { delta } => {
                self.on_scroll(delta);
                None
            }
        }
    }
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new(&Options::default(), &Camera::default())
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::picking::{Orientation, Ray, RayHit};

    /// Pickable that reports a fixed triangle for every ray.
    struct FixedHit {
        orientation: Orientation,
        triangle: Option<usize>,
    }

    impl FixedHit {
        fn hitting(triangle: usize) -> Self {
            Self {
                orientation: Orientation::default(),
                triangle: Some(triangle),
            }
        }

        fn missing() -> Self {
            Self {
                orientation: Orientation::default(),
                triangle: None,
            }
        }
    }

    impl Pickable for FixedHit {
        fn orientation(&self) -> Orientation {
            self.orientation
        }

        fn orientation_mut(&mut self) -> &mut Orientation {
            &mut self.orientation
        }

        fn raycast(&self, ray: &Ray) -> Option<RayHit> {
            self.triangle.map(|triangle_index| RayHit {
                triangle_index,
                distance: 1.0,
                point: ray.at(1.0),
            })
        }
    }

    const VIEWPORT: Viewport = Viewport {
        width: 800.0,
        height: 600.0,
    };
    const CENTER: Vec2 = Vec2::new(400.0, 300.0);

    fn relative(dx: f32, dy: f32) -> PointerDelta {
        PointerDelta::Relative(Vec2::new(dx, dy))
    }

    fn click(
        controller: &InteractionController,
        object: &FixedHit,
    ) -> Option<NavigationRequest> {
        controller.on_click(CENTER, VIEWPORT, &Camera::default(), object)
    }

    #[test]
    fn movement_is_sum_of_delta_lengths() {
        let mut controller = InteractionController::default();
        let mut object = FixedHit::missing();
        controller.on_press_start(None);
        let deltas = [(3.0, 4.0), (-6.0, 8.0), (0.0, -1.0), (5.0, 12.0)];
        let mut expected = 0.0;
        for (dx, dy) in deltas {
            let before = controller.accumulated_movement();
            controller.on_move(relative(dx, dy), &mut object);
            assert!(controller.accumulated_movement() >= before);
            expected += Vec2::new(dx, dy).length();
        }
        assert_eq!(controller.accumulated_movement(), expected);
        assert_eq!(expected, 29.0);
    }

    #[test]
    fn press_start_resets_movement() {
        let mut controller = InteractionController::default();
        let mut object = FixedHit::missing();
        controller.on_press_start(None);
        controller.on_move(relative(100.0, 0.0), &mut object);
        controller.on_press_end();
        assert_eq!(controller.accumulated_movement(), 100.0);
        controller.on_press_start(None);
        assert_eq!(controller.accumulated_movement(), 0.0);
    }

    #[test]
    fn move_without_press_is_ignored() {
        let mut controller = InteractionController::default();
        let mut object = FixedHit::missing();
        controller.on_move(relative(50.0, 50.0), &mut object);
        assert_eq!(object.orientation, Orientation::default());
        assert_eq!(controller.accumulated_movement(), 0.0);

        controller.on_press_start(None);
        controller.on_press_end();
        controller.on_move(relative(50.0, 50.0), &mut object);
        assert_eq!(object.orientation, Orientation::default());
    }

    #[test]
    fn drag_rotates_and_suppresses_click() {
        let mut controller = InteractionController::default();
        let mut object = FixedHit::missing();
        controller.on_press_start(None);
        controller.on_move(relative(100.0, 0.0), &mut object);
        controller.on_press_end();

        assert!((object.orientation.y - 0.5).abs() < 1e-6);
        assert_eq!(object.orientation.x, 0.0);
        assert_eq!(click(&controller, &object), None);

        // Even a hit is suppressed after a drag
        let hit = FixedHit {
            orientation: object.orientation,
            triangle: Some(0),
        };
        assert_eq!(click(&controller, &hit), None);
    }

    #[test]
    fn stationary_press_then_click_navigates() {
        let mut controller = InteractionController::default();
        let object = FixedHit::hitting(7);
        controller.on_press_start(None);
        controller.on_press_end();
        let request = click(&controller, &object).unwrap();
        assert_eq!(request.face, 3);
        assert_eq!(request.destination, "./Pages/Legalisation.html");
    }

    #[test]
    fn movement_at_threshold_still_clicks() {
        let mut controller = InteractionController::default();
        let mut object = FixedHit::hitting(0);
        controller.on_press_start(None);
        controller.on_move(relative(3.0, 4.0), &mut object);
        controller.on_press_end();
        assert_eq!(controller.accumulated_movement(), 5.0);
        let request = click(&controller, &object).unwrap();
        assert_eq!(request.face, 0);
        assert_eq!(request.destination, "./Pages/Playground.html");
    }

    #[test]
    fn movement_past_threshold_suppresses() {
        let mut controller = InteractionController::default();
        let mut object = FixedHit::hitting(0);
        controller.on_press_start(None);
        controller.on_move(relative(3.0, 4.0), &mut object);
        controller.on_move(relative(0.0, 0.5), &mut object);
        controller.on_press_end();
        assert_eq!(click(&controller, &object), None);
    }

    #[test]
    fn each_face_pair_maps_to_its_destination() {
        let controller = InteractionController::default();
        let table = NavigationTable::default();
        for triangle in 0..8 {
            let request =
                click(&controller, &FixedHit::hitting(triangle)).unwrap();
            assert_eq!(request.face, triangle / 2);
            assert_eq!(Some(request.destination.as_str()), table.lookup(triangle / 2));
        }
    }

    #[test]
    fn faces_beyond_table_are_inert() {
        let controller = InteractionController::default();
        assert_eq!(click(&controller, &FixedHit::hitting(9)), None);
        assert_eq!(click(&controller, &FixedHit::hitting(11)), None);
    }

    #[test]
    fn short_table_is_a_no_op_not_a_crash() {
        let mut options = Options::default();
        options.navigation.targets = vec!["/only".into()];
        let controller = InteractionController::new(&options, &Camera::default());
        assert!(click(&controller, &FixedHit::hitting(1)).is_some());
        assert_eq!(click(&controller, &FixedHit::hitting(2)), None);
    }

    #[test]
    fn miss_is_inert() {
        let controller = InteractionController::default();
        assert_eq!(click(&controller, &FixedHit::missing()), None);
    }

    #[test]
    fn empty_viewport_is_inert() {
        let controller = InteractionController::default();
        let object = FixedHit::hitting(0);
        let request = controller.on_click(
            CENTER,
            Viewport::new(0.0, 0.0),
            &Camera::default(),
            &object,
        );
        assert_eq!(request, None);
    }

    #[test]
    fn split_moves_rotate_like_one_combined_move() {
        let mut split = InteractionController::default();
        let mut split_obj = FixedHit::missing();
        split.on_press_start(None);
        split.on_move(relative(12.0, -8.0), &mut split_obj);
        split.on_move(relative(20.0, 4.0), &mut split_obj);

        let mut combined = InteractionController::default();
        let mut combined_obj = FixedHit::missing();
        combined.on_press_start(None);
        combined.on_move(relative(32.0, -4.0), &mut combined_obj);

        assert!((split_obj.orientation.y - combined_obj.orientation.y).abs() < 1e-6);
        assert!((split_obj.orientation.x - combined_obj.orientation.x).abs() < 1e-6);
    }

    #[test]
    fn rotation_accumulates_without_wrapping() {
        let mut controller = InteractionController::default();
        let mut object = FixedHit::missing();
        controller.on_press_start(None);
        for _ in 0..10 {
            controller.on_move(relative(1000.0, 0.0), &mut object);
        }
        // 10 * 1000 * 0.005 = 50 rad, well past 2π
        assert!((object.orientation.y - 50.0).abs() < 1e-3);
    }

    #[test]
    fn touch_moves_use_previous_sample() {
        let mut controller = InteractionController::default();
        let mut object = FixedHit::missing();
        controller.on_press_start(Some(Vec2::new(100.0, 100.0)));
        controller.on_move(PointerDelta::Absolute(Vec2::new(140.0, 100.0)), &mut object);
        controller.on_move(PointerDelta::Absolute(Vec2::new(180.0, 130.0)), &mut object);

        // 40 + 40 horizontally, 30 vertically
        assert!((object.orientation.y - 80.0 * 0.005).abs() < 1e-6);
        assert!((object.orientation.x - 30.0 * 0.005).abs() < 1e-6);
        assert_eq!(controller.accumulated_movement(), 90.0);
        assert_eq!(
            controller.last_pointer_position(),
            Some(Vec2::new(180.0, 130.0))
        );
    }

    #[test]
    fn handle_event_runs_full_click_sequence() {
        let mut controller = InteractionController::default();
        let camera = Camera::default();
        let mut object = FixedHit::hitting(5);
        let mut scene = SceneView {
            camera: &camera,
            object: &mut object,
            viewport: VIEWPORT,
        };

        let events = [
            InputEvent::PressStart { position: None },
            InputEvent::Move { delta: relative(1.0, 1.0) },
            InputEvent::PressEnd,
        ];
        for event in events {
            assert_eq!(controller.handle_event(event, &mut scene), None);
        }
        let request = controller
            .handle_event(InputEvent::Click { position: CENTER }, &mut scene)
            .unwrap();
        assert_eq!(request.face, 2);
        assert!(!controller.is_dragging());
    }

    #[test]
    fn click_on_real_cube_after_yaw() {
        let mut controller = InteractionController::default();
        let camera = Camera::default();
        let mut cube = crate::picking::CubeMesh::new(Vec3::splat(2.0));

        // Drag a quarter turn (π/2 / 0.005 ≈ 314 px) to the left
        controller.on_press_start(None);
        controller.on_move(
            relative(-std::f32::consts::FRAC_PI_2 / 0.005, 0.0),
            &mut cube,
        );
        controller.on_press_end();
        assert_eq!(
            controller.on_click(CENTER, VIEWPORT, &camera, &cube),
            None
        );

        // A fresh stationary click now lands on the +X face
        controller.on_press_start(None);
        controller.on_press_end();
        let request = controller
            .on_click(CENTER + Vec2::new(10.0, 5.0), VIEWPORT, &camera, &cube)
            .unwrap();
        assert_eq!(request.face, 0);
    }

    #[test]
    fn scroll_feeds_zoom() {
        let mut controller = InteractionController::default();
        let mut camera = Camera::default();
        controller.on_scroll(10.0);
        assert!(controller.step_zoom(&mut camera));
        assert!(camera.eye.z > 5.0);
    }
}
