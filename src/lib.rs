//! Sales Chart - Monthly Sales & Expenses Viewer
//!
//! Reads a small CSV file of monthly figures, totals them, and maps them onto a
//! grouped bar chart drawn with egui_plot.

pub mod args;
pub mod charts;
pub mod data;
pub mod gui;
