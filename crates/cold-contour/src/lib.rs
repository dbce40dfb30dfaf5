//! Contour extraction from binary images.
//!
//! This crate traces every boundary of every foreground region and keeps the
//! containment tree between them:
//! - Border following is Suzuki-Abe with 8-connected foreground and
//!   4-connected background. Pixels `!= 0` are foreground; the area outside
//!   the image is background.
//! - Each [`Contour`] is either an outer border of a foreground component or
//!   the border of a hole inside one. `parent` refers to the enclosing
//!   border's `id`.
//! - Points are emitted without chain compression, in tracing order; the
//!   sequence is cyclic (the last point connects back to the first).
//!
//! Polygon helpers ([`contour_area`], [`arc_length`], [`approx_polygon`])
//! operate on plain point slices so they apply to any closed polyline.
//! [`extract_shape_contours`] sorts by area and drops the all-enclosing frame
//! produced by padding a scan with a foreground border.

mod polygon;
mod select;
mod trace;

pub use polygon::{approx_polygon, arc_length, contour_area};
pub use select::extract_shape_contours;
pub use trace::{BorderKind, Contour, ContourId, find_contours};
