//! Foundational primitives for the COLD descriptor workspace.
//!
//! ## Images and Views
//! Images are owned, contiguous and row-major. Filters read through a
//! borrowed `ImageView` and write rows of a fresh image through
//! `ImageViewMut`.
//!
//! ## Border Modes
//! Neighborhood filters resolve taps that fall outside the image by
//! replicating the nearest edge pixel, by mirroring around the edge pixel
//! without repeating it (reflect-101), or by skipping the tap.
//!
//! ## Coordinates
//! Integer points use `x` for the column and `y` for the row, with `y`
//! growing downwards. Angles computed from point differences therefore turn
//! clockwise on screen as they increase.

mod border;
mod error;
mod geom;
mod image;

pub use border::{BorderMode, map_index, tap};
pub use error::Error;
pub use geom::{Point2i, Vec2i};
pub use image::{Image, ImageView, ImageViewMut};
