use winit::event::{DeviceEvent, ElementState, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use crate::camera::{Camera, InputIntent};
use crate::compositor::{Compositor, DrawTarget, Scene, ViewportSlot};
use crate::config::ViewerConfig;
use crate::error::Result;
use crate::input::{Action, HeldKeys, KeyBindings};
use crate::timing::{FrameClock, FrameStats};
use crate::{viewer_debug, viewer_info, viewer_trace};

const SOURCE: &str = "dualview::Viewer";

/// Slot driven by keyboard and mouse input
pub const FLY_SLOT: ViewportSlot = ViewportSlot::Left;

/// Viewer session: two cameras, the demo scene and the frame loop.
///
/// The left viewport shows the free-fly camera, driven by held keys and
/// mouse look. The right viewport shows the fixed overview camera. Each
/// frame runs movement for both cameras before anything is drawn.
///
/// ```no_run
/// use dual_view::dualview::{Viewer, config::ViewerConfig};
///
/// let viewer = Viewer::new(ViewerConfig::default(), 800, 600).unwrap();
/// assert!(!viewer.quit_requested());
/// ```
pub struct Viewer {
    config: ViewerConfig,
    cameras: [Camera; 2],
    scene: Scene,
    compositor: Compositor,
    bindings: KeyBindings,
    held: HeldKeys,
    mouse_look: bool,
    clock: FrameClock,
    stats: FrameStats,
    quit: bool,
}

impl Viewer {
    /// Start a session for a `width` x `height` surface.
    ///
    /// # Errors
    ///
    /// `Error::InvalidConfig` if `config` fails validation.
    pub fn new(config: ViewerConfig, width: u32, height: u32) -> Result<Self> {
        config.validate()?;

        let mut fly = Camera::new(config.fly_mode, config.projection, config.movement);
        fly.set_pose(
            config.fly_pose.position,
            config.fly_pose.orientation.rx,
            config.fly_pose.orientation.ry,
            config.fly_pose.orientation.rz,
        );
        let mut overview = Camera::new(config.overview_mode, config.projection, config.movement);
        overview.set_pose(
            config.overview_pose.position,
            config.overview_pose.orientation.rx,
            config.overview_pose.orientation.ry,
            config.overview_pose.orientation.rz,
        );

        let mut viewer = Self {
            compositor: Compositor::new(width, height, config.glyph_length),
            stats: FrameStats::new(config.frame_time_decay),
            config,
            cameras: [fly, overview],
            scene: Scene::demo(),
            bindings: KeyBindings::default(),
            held: HeldKeys::empty(),
            mouse_look: false,
            clock: FrameClock::new(),
            quit: false,
        };
        viewer.resize(width, height)?;

        viewer_info!(SOURCE, "session started: {}x{}, left {}, right {}",
            width, height, viewer.cameras[0].mode(), viewer.cameras[1].mode());
        Ok(viewer)
    }

    // ===== ACCESSORS =====

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn camera(&self, slot: ViewportSlot) -> &Camera {
        &self.cameras[slot.index()]
    }

    pub fn camera_mut(&mut self, slot: ViewportSlot) -> &mut Camera {
        &mut self.cameras[slot.index()]
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn compositor(&self) -> &Compositor {
        &self.compositor
    }

    pub fn bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.bindings
    }

    pub fn held_keys(&self) -> HeldKeys {
        self.held
    }

    pub fn is_mouse_looking(&self) -> bool {
        self.mouse_look
    }

    pub fn frame_stats(&self) -> &FrameStats {
        &self.stats
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    // ===== SURFACE =====

    /// Resize the surface and both camera viewports.
    ///
    /// A surface too small to split (minimized window) is ignored and the
    /// cameras keep their previous sizes.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.compositor.resize(width, height);
        let layout = *self.compositor.layout();
        if !layout.is_drawable() {
            viewer_debug!(SOURCE, "skipping resize to {}x{}", width, height);
            return Ok(());
        }
        for slot in ViewportSlot::ALL {
            let size = layout.viewport(slot).size();
            self.cameras[slot.index()].resize(size.x, size.y)?;
        }
        Ok(())
    }

    // ===== INPUT =====

    /// Apply a key transition. Unbound keys are ignored.
    pub fn handle_key(&mut self, key: KeyCode, state: ElementState) {
        let Some(action) = self.bindings.action(key) else {
            viewer_trace!(SOURCE, "unbound key {:?}", key);
            return;
        };
        match (action, state) {
            (Action::Hold(keys), ElementState::Pressed) => self.held.insert(keys),
            (Action::Hold(keys), ElementState::Released) => self.held.remove(keys),
            (Action::CycleMode(slot), ElementState::Released) => {
                self.cameras[slot.index()].cycle_mode();
            }
            (Action::Quit, ElementState::Pressed) => self.request_quit(),
            _ => {}
        }
    }

    /// Mouse look is active while the right button is held.
    pub fn handle_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Right {
            self.mouse_look = state.is_pressed();
        }
    }

    /// Raw mouse motion in pixels.
    pub fn handle_mouse_motion(&mut self, dx: f64, dy: f64) {
        if self.mouse_look {
            self.cameras[FLY_SLOT.index()].look_by_pixels(dx as f32, dy as f32);
        }
    }

    pub fn handle_window_event(&mut self, event: &WindowEvent) -> Result<()> {
        match event {
            WindowEvent::Resized(size) => self.resize(size.width, size.height)?,
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    if !event.repeat {
                        self.handle_key(code, event.state);
                    }
                }
            }
            WindowEvent::MouseInput { state, button, .. } => self.handle_mouse_button(*button, *state),
            WindowEvent::Focused(false) => {
                self.held = HeldKeys::empty();
                self.mouse_look = false;
            }
            WindowEvent::CloseRequested => self.request_quit(),
            _ => {}
        }
        Ok(())
    }

    pub fn handle_device_event(&mut self, event: &DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            self.handle_mouse_motion(*dx, *dy);
        }
    }

    fn request_quit(&mut self) {
        if !self.quit {
            viewer_info!(SOURCE, "quit requested");
            self.quit = true;
        }
    }

    // ===== FRAME =====

    /// Advance both cameras by `dt` seconds. Only the fly camera receives
    /// input.
    pub fn update(&mut self, dt: f32) {
        for slot in ViewportSlot::ALL {
            let camera = &mut self.cameras[slot.index()];
            let (intent, (pitch_axis, yaw_axis)) = if slot == FLY_SLOT {
                (self.held.intent(), self.held.turn_axes())
            } else {
                (InputIntent::NONE, (0.0, 0.0))
            };
            camera.turn(dt, pitch_axis, yaw_axis);
            camera.update(dt, intent);
        }
    }

    /// Draw the current state without advancing time.
    pub fn render(&self, target: &mut dyn DrawTarget) -> Result<()> {
        self.compositor.render(target, &self.scene, &self.cameras, &self.stats)
    }

    /// One iteration of the frame loop: measure `dt`, update, draw.
    pub fn frame(&mut self, target: &mut dyn DrawTarget) -> Result<()> {
        let dt = self.clock.tick();
        self.step(dt, target)
    }

    /// `frame` with an explicit `dt`.
    pub fn step(&mut self, dt: f32, target: &mut dyn DrawTarget) -> Result<()> {
        self.stats.record(dt);
        self.update(dt);
        if !self.compositor.layout().is_drawable() {
            return Ok(());
        }
        self.render(target)
    }
}

#[cfg(test)]
#[path = "viewer_tests.rs"]
mod tests;
