//! Turns outreach actions, merchants and the current filters into the
//! marker/polygon/polyline layers a map widget draws.
//!
//! The widget itself (tiles, pan/zoom) is a third-party black box; this
//! crate owns everything up to its input: filter evaluation, marker
//! styling, popup HTML, coverage polygons, and the clear-and-rebuild
//! overlay lifecycle.

pub mod filters;
pub mod labels;
pub mod markers;
pub mod overlay;
pub mod popup;
pub mod viewport;

pub use filters::{FilterPanel, FilterState};
pub use overlay::MapOverlay;
pub use viewport::MapViewport;
