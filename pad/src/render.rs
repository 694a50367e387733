//! Rendering: draws the pad to a 2D canvas context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`]
//! and [`web_sys::HtmlImageElement`]. It reads pad state and produces pixels;
//! it does not mutate any pad state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Pad::render`]) handles the result.

use std::collections::HashMap;

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::engine::PadCore;
use crate::geometry::Size;
use crate::presenter::{Asset, AssetResolver, Surface};

/// Decoded images keyed by asset id.
///
/// Doubles as the [`AssetResolver`] for browser pads: an image resolves once
/// it has finished loading and reports a natural size.
#[derive(Debug, Clone, Default)]
pub struct ImageAssets {
    images: HashMap<String, HtmlImageElement>,
}

impl ImageAssets {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, image: HtmlImageElement) {
        self.images.insert(id.into(), image);
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&HtmlImageElement> {
        self.images.get(id)
    }
}

impl AssetResolver for ImageAssets {
    fn resolve(&self, id: &str) -> Option<Size> {
        let image = self.images.get(id)?;
        if !image.complete() {
            return None;
        }
        Some(Size::new(f64::from(image.natural_width()), f64::from(image.natural_height())))
    }
}

/// [`Surface`] over a `Canvas2D` context.
pub struct CanvasSurface<'a> {
    ctx: &'a CanvasRenderingContext2d,
    images: &'a ImageAssets,
}

impl<'a> CanvasSurface<'a> {
    #[must_use]
    pub fn new(ctx: &'a CanvasRenderingContext2d, images: &'a ImageAssets) -> Self {
        Self { ctx, images }
    }
}

impl Surface for CanvasSurface<'_> {
    type Error = JsValue;

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, x: f64, y: f64) -> Result<(), JsValue> {
        self.ctx.translate(x, y)
    }

    fn scale(&mut self, x: f64, y: f64) -> Result<(), JsValue> {
        self.ctx.scale(x, y)
    }

    fn set_alpha(&mut self, alpha: f64) {
        self.ctx.set_global_alpha(alpha);
    }

    fn paint(&mut self, asset: &Asset, size: Size) -> Result<(), JsValue> {
        let image = self
            .images
            .get(&asset.id)
            .ok_or_else(|| JsValue::from_str(&format!("image `{}` is not loaded", asset.id)))?;
        self.ctx
            .draw_image_with_html_image_element_and_dw_and_dh(image, 0.0, 0.0, size.width, size.height)
    }
}

/// Clear the viewport and draw the pad.
///
/// `viewport` is in CSS pixels. `dpr` is the device pixel ratio.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    images: &ImageAssets,
    core: &PadCore,
    viewport: Size,
    dpr: f64,
) -> Result<(), JsValue> {
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);
    core.draw(&mut CanvasSurface::new(ctx, images))
}
