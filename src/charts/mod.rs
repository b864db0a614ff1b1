//! Charts module - Chart data mapping and rendering

mod mapper;
mod plotter;

pub use mapper::{format_dollars, SalesChartData, Series};
pub use plotter::ChartPlotter;
