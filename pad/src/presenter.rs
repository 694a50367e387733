//! Visual state for the handle and background.
//!
//! A [`HandlePresenter`] is a positioned, scalable, translucent sprite with two
//! named appearances. It never loads or decodes anything itself: assets are
//! looked up once, at construction, through an [`AssetResolver`] the host
//! injects, and drawing goes through a host-supplied [`Surface`].
//!
//! The presenter's bounds are the union of all of its assets, so switching
//! between appearances never changes its laid-out size.

#[cfg(test)]
#[path = "presenter_test.rs"]
mod presenter_test;

use std::collections::BTreeMap;

use crate::config::AssetSpec;
use crate::consts::OPAQUE;
use crate::error::PadError;
use crate::geometry::{Point, Size};
use crate::input::PointerState;

/// Which of the two appearances a presenter shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Appearance {
    #[default]
    Inactive,
    Active,
}

impl From<PointerState> for Appearance {
    fn from(state: PointerState) -> Self {
        match state {
            PointerState::Inactive => Self::Inactive,
            PointerState::Active => Self::Active,
        }
    }
}

/// A resolved visual asset: its id and intrinsic size.
#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    pub id: String,
    pub size: Size,
}

/// Read-only lookup of intrinsic asset sizes, provided by the host.
pub trait AssetResolver {
    /// Intrinsic size of the asset with this id, if the host knows it.
    fn resolve(&self, id: &str) -> Option<Size>;
}

/// Resolver backed by a fixed id → size table.
#[derive(Debug, Clone, Default)]
pub struct StaticAssets {
    sizes: BTreeMap<String, Size>,
}

impl StaticAssets {
    #[must_use]
    pub fn new(sizes: BTreeMap<String, Size>) -> Self {
        Self { sizes }
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, id: &str, width: f64, height: f64) -> Self {
        self.sizes.insert(id.to_owned(), Size::new(width, height));
        self
    }
}

impl AssetResolver for StaticAssets {
    fn resolve(&self, id: &str) -> Option<Size> {
        self.sizes.get(id).copied()
    }
}

/// Drawing operations a presenter needs from the host's surface.
///
/// Transforms are cumulative between `save` and `restore`, as on a 2D canvas.
pub trait Surface {
    type Error;

    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f64, y: f64) -> Result<(), Self::Error>;
    fn scale(&mut self, x: f64, y: f64) -> Result<(), Self::Error>;
    fn set_alpha(&mut self, alpha: f64);
    /// Paint `asset` with its top-left corner at the current origin, stretched to `size`.
    fn paint(&mut self, asset: &Asset, size: Size) -> Result<(), Self::Error>;
}

#[derive(Debug, Clone, PartialEq)]
enum Visuals {
    Blank,
    Single(Asset),
    TwoState { inactive: Asset, active: Asset },
}

/// Positioned two-state sprite.
#[derive(Debug, Clone, PartialEq)]
pub struct HandlePresenter {
    position: Point,
    scale_x: f64,
    scale_y: f64,
    alpha: f64,
    appearance: Appearance,
    visuals: Visuals,
    bounds: Size,
}

fn resolve_asset(resolver: &dyn AssetResolver, id: &str) -> Result<Asset, PadError> {
    let size = resolver
        .resolve(id)
        .ok_or_else(|| PadError::UnresolvedAsset(id.to_owned()))?;
    let measurable = size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0;
    if !measurable {
        return Err(PadError::UnmeasurableAsset {
            id: id.to_owned(),
            width: size.width,
            height: size.height,
        });
    }
    Ok(Asset { id: id.to_owned(), size })
}

impl HandlePresenter {
    fn with_visuals(visuals: Visuals) -> Self {
        let bounds = match &visuals {
            Visuals::Blank => Size::default(),
            Visuals::Single(asset) => asset.size,
            Visuals::TwoState { inactive, active } => inactive.size.union(active.size),
        };
        Self {
            position: Point::ORIGIN,
            scale_x: 1.0,
            scale_y: 1.0,
            alpha: OPAQUE,
            appearance: Appearance::Inactive,
            visuals,
            bounds,
        }
    }

    /// A presenter with no assets: zero-sized and never paints.
    #[must_use]
    pub fn blank() -> Self {
        Self::with_visuals(Visuals::Blank)
    }

    /// A presenter showing the same asset in both appearances.
    ///
    /// # Errors
    ///
    /// Returns [`PadError::UnresolvedAsset`] or [`PadError::UnmeasurableAsset`].
    pub fn single(resolver: &dyn AssetResolver, id: &str) -> Result<Self, PadError> {
        Ok(Self::with_visuals(Visuals::Single(resolve_asset(resolver, id)?)))
    }

    /// A presenter with distinct released and pressed assets.
    ///
    /// # Errors
    ///
    /// Returns [`PadError::UnresolvedAsset`] or [`PadError::UnmeasurableAsset`]
    /// for the first asset that fails.
    pub fn two_state(resolver: &dyn AssetResolver, inactive: &str, active: &str) -> Result<Self, PadError> {
        let inactive = resolve_asset(resolver, inactive)?;
        let active = resolve_asset(resolver, active)?;
        Ok(Self::with_visuals(Visuals::TwoState { inactive, active }))
    }

    /// Build from a config entry.
    ///
    /// # Errors
    ///
    /// See [`HandlePresenter::single`] and [`HandlePresenter::two_state`].
    pub fn from_spec(resolver: &dyn AssetResolver, spec: &AssetSpec) -> Result<Self, PadError> {
        match spec {
            AssetSpec::Single(id) => Self::single(resolver, id),
            AssetSpec::TwoState { inactive, active } => Self::two_state(resolver, inactive, active),
        }
    }

    // --- Position / transform ---

    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    #[must_use]
    pub fn scale(&self) -> (f64, f64) {
        (self.scale_x, self.scale_y)
    }

    pub fn set_scale(&mut self, scale_x: f64, scale_y: f64) {
        self.scale_x = scale_x;
        self.scale_y = scale_y;
    }

    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Set opacity; values outside `0.0..=1.0` are clamped.
    pub fn set_alpha(&mut self, alpha: f64) {
        self.alpha = alpha.clamp(0.0, OPAQUE);
    }

    // --- Appearance ---

    #[must_use]
    pub fn appearance(&self) -> Appearance {
        self.appearance
    }

    pub fn set_appearance(&mut self, appearance: Appearance) {
        self.appearance = appearance;
    }

    /// The asset painted for the current appearance, if any.
    #[must_use]
    pub fn current_asset(&self) -> Option<&Asset> {
        match (&self.visuals, self.appearance) {
            (Visuals::Blank, _) => None,
            (Visuals::Single(asset), _) => Some(asset),
            (Visuals::TwoState { inactive, .. }, Appearance::Inactive) => Some(inactive),
            (Visuals::TwoState { active, .. }, Appearance::Active) => Some(active),
        }
    }

    // --- Size ---

    /// Union of all asset sizes; zero for a blank presenter.
    #[must_use]
    pub fn size(&self) -> Size {
        self.bounds
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.bounds.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bounds.height
    }

    // --- Draw ---

    /// Paint the current appearance centered on `position`.
    ///
    /// The surface state is restored even when a transform call fails.
    ///
    /// # Errors
    ///
    /// Propagates the first failing surface call.
    pub fn draw<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        let Some(asset) = self.current_asset() else {
            return Ok(());
        };
        surface.save();
        let result = self.paint_transformed(surface, asset);
        surface.restore();
        result
    }

    fn paint_transformed<S: Surface>(&self, surface: &mut S, asset: &Asset) -> Result<(), S::Error> {
        surface.translate(self.position.x, self.position.y)?;
        surface.scale(self.scale_x, self.scale_y)?;
        surface.translate(-0.5 * self.bounds.width, -0.5 * self.bounds.height)?;
        surface.set_alpha(self.alpha);
        surface.paint(asset, self.bounds)
    }
}
