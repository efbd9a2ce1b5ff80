//! Human-readable output for a solved instance.
//!
//! - [`SolutionReport`] — per-vehicle stops, loads and distances as text
//! - [`route_traces`] / [`render_svg`] — route polylines on a 2D chart

mod plot;
mod summary;

pub use plot::{render_svg, route_traces, RouteTrace};
pub use summary::{RouteReport, SolutionReport, Stop};
