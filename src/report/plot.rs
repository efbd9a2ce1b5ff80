//! Route chart.
//!
//! Each vehicle's route becomes one polyline from the depot through its
//! customers and back, drawn with point markers and a legend entry on a
//! shared canvas. The depot is highlighted on top.

use std::path::Path;

use plotters::prelude::*;
use tracing::debug;

use crate::error::CvrpError;
use crate::models::{Node, ProblemInstance, Solution};

const CANVAS: (u32, u32) = (1024, 768);

/// Ordered coordinates of one vehicle's route.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteTrace {
    vehicle_id: usize,
    label: String,
    points: Vec<(f64, f64)>,
}

impl RouteTrace {
    pub fn vehicle_id(&self) -> usize {
        self.vehicle_id
    }

    /// Legend label, `route for vehicle {id}`.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Depot → customers → depot.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }
}

/// Builds one trace per route of `solution`, in route order.
///
/// # Errors
///
/// [`CvrpError::Plot`] if a route passes through a node the instance does
/// not have.
///
/// # Examples
///
/// ```
/// use u_cvrp::models::{ProblemData, ProblemInstance, Route, Solution};
/// use u_cvrp::report::route_traces;
///
/// let data = ProblemData::with_uniform_capacity(
///     vec![0.0, 0.0, 4.0],
///     vec![0.0, 3.0, 0.0],
///     vec![0, 5, 5],
///     1,
///     10,
///     0,
/// );
/// let instance = ProblemInstance::from_data(&data).unwrap();
/// let solution = Solution::new(vec![Route::new(0, 0, vec![2, 1])], 12);
///
/// let traces = route_traces(&instance, &solution).unwrap();
/// assert_eq!(traces[0].label(), "route for vehicle 0");
/// assert_eq!(traces[0].points(), &[(0.0, 0.0), (4.0, 0.0), (0.0, 3.0), (0.0, 0.0)]);
/// ```
pub fn route_traces(instance: &ProblemInstance, solution: &Solution) -> Result<Vec<RouteTrace>, CvrpError> {
    solution
        .routes()
        .iter()
        .map(|route| {
            let points = route
                .path()
                .map(|node| {
                    instance.nodes().get(node).map(Node::position).ok_or_else(|| {
                        CvrpError::Plot(format!(
                            "route for vehicle {} visits unknown node {node}",
                            route.vehicle_id()
                        ))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(RouteTrace {
                vehicle_id: route.vehicle_id(),
                label: format!("route for vehicle {}", route.vehicle_id()),
                points,
            })
        })
        .collect()
}

/// Draws `traces` into an SVG file at `path`.
pub fn render_svg(traces: &[RouteTrace], path: &Path) -> Result<(), CvrpError> {
    draw(traces, path).map_err(|e| CvrpError::Plot(format!("{}: {e}", path.display())))?;
    debug!("Wrote {} route traces to {}", traces.len(), path.display());
    Ok(())
}

fn draw(traces: &[RouteTrace], path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let (x_range, y_range) = bounds(traces);

    let root = SVGBackend::new(path, CANVAS).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption("Vehicle routes", ("sans-serif", 28))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(40)
        .build_cartesian_2d(x_range, y_range)?;
    chart.configure_mesh().draw()?;

    for (i, trace) in traces.iter().enumerate() {
        let color = Palette99::pick(i).to_rgba();
        chart
            .draw_series(LineSeries::new(trace.points.iter().copied(), color.stroke_width(2)))?
            .label(trace.label.clone())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
        chart.draw_series(
            trace
                .points
                .iter()
                .map(|&point| Circle::new(point, 3, color.filled())),
        )?;
    }

    if let Some(&depot) = traces.first().and_then(|t| t.points.first()) {
        chart.draw_series(std::iter::once(Circle::new(depot, 6, BLACK.filled())))?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Axis ranges covering every point with a 5% margin.
fn bounds(traces: &[RouteTrace]) -> (std::ops::Range<f64>, std::ops::Range<f64>) {
    let mut points = traces.iter().flat_map(|t| t.points.iter().copied()).peekable();
    if points.peek().is_none() {
        return (0.0..1.0, 0.0..1.0);
    }

    let (mut min_x, mut max_x) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut min_y, mut max_y) = (f64::INFINITY, f64::NEG_INFINITY);
    for (x, y) in points {
        min_x = min_x.min(x);
        max_x = max_x.max(x);
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }

    let pad = |lo: f64, hi: f64| {
        let margin = ((hi - lo) * 0.05).max(1.0);
        (lo - margin)..(hi + margin)
    };
    (pad(min_x, max_x), pad(min_y, max_y))
}
