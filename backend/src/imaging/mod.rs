//! # QR Card Rendering
//!
//! Everything needed to turn a URL into the PNG that is attached back to the board.
//!
//! ## Sub-modules:
//! - `background`: the 1000x1000 backdrop, loaded from disk or drawn as a gradient.
//! - `qr`: URL to black-on-white QR raster.
//! - `compose`: tint overlay plus the centered QR code on top of the backdrop.
//! - `encode`: in-memory PNG serialization of the final card.
//!
//! All functions here are synchronous and CPU bound; callers on the async runtime are
//! expected to run them on the blocking pool.

pub mod background;
pub mod compose;
pub mod encode;
pub mod qr;

pub use background::{background_is_usable, render_background};
pub use compose::compose;
pub use encode::encode_png;
pub use qr::encode_qr;

/// Width and height of the final card.
pub const CANVAS_SIZE: u32 = 1000;

/// Edge of the QR code once scaled onto the card (75% of the canvas).
pub const QR_SIZE: u32 = CANVAS_SIZE * 3 / 4;

/// Top-left corner of the QR code on the card, on both axes.
pub const QR_OFFSET: u32 = (CANVAS_SIZE - QR_SIZE) / 2;
