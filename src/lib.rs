//! mapchart: geometry and transition engine for small charts on maps.
//!
//! Bar, pie and polar charts anchored at geographic points. Every update is
//! a pure computation from a `ChartSpec` to positioned shapes and labels,
//! plus a keyed interpolation from the previous render. Projection, drawing
//! and text measurement stay behind the `Projector`, `Renderer` and
//! `TextMeasurer` seams.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;
pub mod transition;

pub use api::{ChartSpec, ChartSpecUpdate, MapChart, Projector};
pub use error::{ChartError, ChartResult};
