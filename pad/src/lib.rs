//! Virtual joystick ("rocker") pad for touch-driven hosts.
//!
//! This crate is compiled both natively and to WebAssembly. It owns the
//! geometry and state of the pad: clamping raw pointer positions to the
//! circular travel region, classifying the handle offset into a coarse
//! [`direction::Direction`], and switching the handle between its inactive and
//! active appearances. The host is responsible only for delivering layout and
//! pointer events and for invalidating its surface when the engine returns
//! [`engine::Action::RenderNeeded`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level browser [`engine::Pad`] and testable [`engine::PadCore`] |
//! | [`geometry`] | Points, sizes and the clamp-to-disk operation |
//! | [`direction`] | Angle computation and four-way classification |
//! | [`input`] | Pointer events and the pressed/released state |
//! | [`layout`] | Center computation and measure-spec resolution |
//! | [`presenter`] | Handle/background visual state and the drawing [`presenter::Surface`] seam |
//! | [`render`] | `Canvas2D` surface and image-backed asset resolver |
//! | [`config`] | Serde-backed construction config |
//! | [`error`] | Configuration errors |
//! | [`consts`] | Shared numeric constants |

pub mod config;
pub mod consts;
pub mod direction;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod input;
pub mod layout;
pub mod presenter;
pub mod render;
