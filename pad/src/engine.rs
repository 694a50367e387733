use tracing::{debug, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::PadConfig;
use crate::direction::{Direction, direction_between};
use crate::error::PadError;
use crate::geometry::{Point, Size, clamp_to_disk};
use crate::input::{PointerEvent, PointerState};
use crate::layout::{MeasureSpec, center_for, default_outer_radius};
use crate::presenter::{AssetResolver, HandlePresenter, Surface};
use crate::render::{self, ImageAssets};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from event handlers for the host to process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// The handle settled in this direction after a move.
    Direction(Direction),
    /// Pad state changed; the host should redraw.
    RenderNeeded,
}

/// Core pad state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Pad` so it can be tested without WASM/browser dependencies.
/// Every field is mutated only through the layout and pointer entry points.
#[derive(Debug, Clone)]
pub struct PadCore {
    center: Point,
    outer_radius: f64,
    handle_radius: f64,
    pointer: PointerState,
    handle: HandlePresenter,
    background: HandlePresenter,
}

impl PadCore {
    /// Build a pad whose presenters are resolved through `resolver`.
    ///
    /// # Errors
    ///
    /// Returns a [`PadError`] when the config is invalid or an asset cannot be
    /// resolved to a measurable size.
    pub fn new(config: &PadConfig, resolver: &dyn AssetResolver) -> Result<Self, PadError> {
        config.validate()?;
        let background = HandlePresenter::from_spec(resolver, &config.background)?;
        let handle = HandlePresenter::from_spec(resolver, &config.handle)?;
        Ok(Self::with_presenters(config, background, handle))
    }

    /// Build a pad with blank presenters. Geometry and state behave normally;
    /// nothing is ever painted and the background contributes no size.
    #[must_use]
    pub fn headless(config: &PadConfig) -> Self {
        Self::with_presenters(config, HandlePresenter::blank(), HandlePresenter::blank())
    }

    fn with_presenters(config: &PadConfig, background: HandlePresenter, handle: HandlePresenter) -> Self {
        let handle_radius = handle.width() / 2.0;
        Self {
            center: Point::ORIGIN,
            outer_radius: config.initial_outer_radius(),
            handle_radius,
            pointer: PointerState::Inactive,
            handle,
            background,
        }
    }

    // --- Layout ---

    /// Desired pad size under the host's constraints; the background size is
    /// the natural size.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn measure(&self, width_spec: MeasureSpec, height_spec: MeasureSpec) -> (u32, u32) {
        let natural = self.background.size();
        let width = width_spec.resolve(natural.width.ceil() as u32);
        let height = height_spec.resolve(natural.height.ceil() as u32);
        (width, height)
    }

    /// Recompute the center for new content bounds.
    ///
    /// The first layout that moves the center off the origin derives the outer
    /// radius (when none was configured) and rests the handle at the center.
    pub fn layout(&mut self, width: u32, height: u32) {
        let content = Size::new(f64::from(width), f64::from(height));
        let new_center = center_for(content, self.background.size());
        if new_center == self.center {
            return;
        }

        if self.center == Point::ORIGIN {
            if self.outer_radius <= 0.0 {
                self.outer_radius = default_outer_radius(new_center);
                debug!(outer_radius = self.outer_radius, "derived outer radius from first layout");
            }
            self.handle.set_position(new_center);
        }

        self.center = new_center;
        self.background.set_position(new_center);
        debug!(x = new_center.x, y = new_center.y, width, height, "pad center updated");
    }

    // --- Pointer lifecycle ---

    /// Start a pointer session. The handle stays where it is until the first move.
    pub fn pointer_down(&mut self, _at: Point) {
        self.pointer = PointerState::Active;
        self.handle.set_appearance(self.pointer.into());
    }

    /// Move the handle through `history` (oldest first) and then `current`,
    /// clamping each sample to the outer radius.
    ///
    /// Returns the direction of the final handle position, or `None` when the
    /// handle ended exactly on the center.
    pub fn pointer_move(&mut self, history: &[Point], current: Point) -> Option<Direction> {
        self.pointer_move_each(history, current, |_| {})
    }

    /// Like [`PadCore::pointer_move`], calling `visit` with every clamped
    /// handle position in the order it was applied.
    pub fn pointer_move_each<F>(&mut self, history: &[Point], current: Point, mut visit: F) -> Option<Direction>
    where
        F: FnMut(Point),
    {
        for &sample in history.iter().chain(std::iter::once(&current)) {
            let clamped = self.clamp(sample);
            self.handle.set_position(clamped);
            visit(clamped);
        }
        self.direction()
    }

    /// End the pointer session: rest the handle at the center and release it.
    pub fn pointer_up(&mut self) {
        self.handle.set_position(self.center);
        self.pointer = PointerState::Inactive;
        self.handle.set_appearance(self.pointer.into());
    }

    /// Dispatch one tagged host event.
    pub fn handle_event(&mut self, event: &PointerEvent) -> Vec<Action> {
        let mut actions = Vec::new();
        match event {
            PointerEvent::Layout { width, height } => self.layout(*width, *height),
            PointerEvent::Down { x, y } => self.pointer_down(Point::new(*x, *y)),
            PointerEvent::Move { history, x, y } => {
                if let Some(direction) = self.pointer_move(history, Point::new(*x, *y)) {
                    actions.push(Action::Direction(direction));
                }
            }
            PointerEvent::Up => self.pointer_up(),
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Queries ---

    /// Where `target` would put the handle.
    #[must_use]
    pub fn clamp(&self, target: Point) -> Point {
        clamp_to_disk(target, self.center, self.outer_radius)
    }

    /// Direction of the current handle position, `None` at rest.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        direction_between(self.center, self.handle.position())
    }

    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Maximum handle travel; `0.0` until configured or derived by layout.
    #[must_use]
    pub fn outer_radius(&self) -> f64 {
        self.outer_radius
    }

    /// Half the handle's width.
    #[must_use]
    pub fn handle_radius(&self) -> f64 {
        self.handle_radius
    }

    #[must_use]
    pub fn handle_position(&self) -> Point {
        self.handle.position()
    }

    #[must_use]
    pub fn pointer_state(&self) -> PointerState {
        self.pointer
    }

    #[must_use]
    pub fn handle(&self) -> &HandlePresenter {
        &self.handle
    }

    #[must_use]
    pub fn background(&self) -> &HandlePresenter {
        &self.background
    }

    // --- Draw ---

    /// Draw the background, then the handle on top.
    ///
    /// # Errors
    ///
    /// Propagates the first failing surface call.
    pub fn draw<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        self.background.draw(surface)?;
        self.handle.draw(surface)
    }
}

/// The full browser pad. Wraps `PadCore` and owns the canvas element.
pub struct Pad {
    canvas: HtmlCanvasElement,
    images: ImageAssets,
    pub core: PadCore,
    viewport: Size,
    dpr: f64,
}

impl Pad {
    /// Create a pad bound to `canvas`, sized from the loaded `images`.
    ///
    /// # Errors
    ///
    /// Returns a [`PadError`] when an asset in `config` is not among the loaded images.
    pub fn new(canvas: HtmlCanvasElement, images: ImageAssets, config: &PadConfig) -> Result<Self, PadError> {
        let core = PadCore::new(config, &images)?;
        Ok(Self::with_core(canvas, images, core))
    }

    /// Like [`Pad::new`], but keeps working without graphics when assets fail.
    #[must_use]
    pub fn new_or_headless(canvas: HtmlCanvasElement, images: ImageAssets, config: &PadConfig) -> Self {
        let core = match PadCore::new(config, &images) {
            Ok(core) => core,
            Err(e) => {
                warn!(error = %e, "pad assets unavailable; running without graphics");
                PadCore::headless(config)
            }
        };
        Self::with_core(canvas, images, core)
    }

    fn with_core(canvas: HtmlCanvasElement, images: ImageAssets, core: PadCore) -> Self {
        Self { canvas, images, core, viewport: Size::default(), dpr: 1.0 }
    }

    // --- Viewport ---

    /// Update the CSS size and device pixel ratio, resize the backing store,
    /// and lay the pad out.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_viewport(&mut self, width_css: u32, height_css: u32, dpr: f64) -> Vec<Action> {
        self.viewport = Size::new(f64::from(width_css), f64::from(height_css));
        self.dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
        self.canvas.set_width((self.viewport.width * self.dpr).round() as u32);
        self.canvas.set_height((self.viewport.height * self.dpr).round() as u32);
        self.core.handle_event(&PointerEvent::Layout { width: width_css, height: height_css })
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, at: Point) -> Vec<Action> {
        self.core.handle_event(&PointerEvent::Down { x: at.x, y: at.y })
    }

    /// `history` holds coalesced samples older than `at`, oldest first.
    pub fn on_pointer_move(&mut self, history: &[Point], at: Point) -> Vec<Action> {
        self.core.handle_event(&PointerEvent::Move { history: history.to_vec(), x: at.x, y: at.y })
    }

    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.core.handle_event(&PointerEvent::Up)
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or any `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;
        render::draw(&ctx, &self.images, &self.core, self.viewport, self.dpr)
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn pointer_state(&self) -> PointerState {
        self.core.pointer_state()
    }

    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        self.core.direction()
    }
}
