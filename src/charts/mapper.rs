//! Chart Data Mapper
//! Converts sales records into bar groups, rods and axis ticks for the plotter.
//!
//! Each month becomes one group positioned at its index on the x-axis, holding a
//! sales rod and an expenses rod side by side. The y-axis runs from zero to the
//! largest value rounded up to a whole thousand, with a tick every thousand.

use crate::data::Record;
use egui::Color32;

/// Spacing between y-axis ticks, and the unit the axis bound is rounded to.
pub const AXIS_STEP: i64 = 1000;
/// Above this many steps the tick spacing widens to a multiple of [`AXIS_STEP`].
pub const MAX_TICKS: i64 = 50;

/// Width of a single bar in plot units (one group occupies one unit).
pub const BAR_WIDTH: f64 = 0.35;
/// Gap between the two bars of a group, in plot units.
pub const ROD_GAP: f64 = 0.04;

pub const CHART_WIDTH: f32 = 900.0;
pub const CHART_HEIGHT: f32 = 450.0;

pub const X_AXIS_TITLE: &str = "Month";
pub const Y_AXIS_TITLE: &str = "Amount ($)";

/// Blue 400
pub const SALES_COLOR: Color32 = Color32::from_rgb(66, 165, 245);
/// Red 400
pub const EXPENSES_COLOR: Color32 = Color32::from_rgb(239, 83, 80);

/// Which figure a rod shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Series {
    Sales,
    Expenses,
}

impl Series {
    pub const ALL: [Series; 2] = [Series::Sales, Series::Expenses];

    pub fn name(self) -> &'static str {
        match self {
            Series::Sales => "Sales",
            Series::Expenses => "Expenses",
        }
    }

    pub fn color(self) -> Color32 {
        match self {
            Series::Sales => SALES_COLOR,
            Series::Expenses => EXPENSES_COLOR,
        }
    }

    /// Horizontal offset of this series' bar from the group center.
    fn offset(self) -> f64 {
        let half = (BAR_WIDTH + ROD_GAP) / 2.0;
        match self {
            Series::Sales => -half,
            Series::Expenses => half,
        }
    }
}

/// A single bar.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRod {
    pub series: Series,
    pub x: f64,
    pub value: i64,
    pub tooltip: String,
}

/// The bars of one month.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartGroup {
    pub x: f64,
    pub label: String,
    pub rods: Vec<ChartRod>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisTick {
    pub value: i64,
    pub label: String,
}

/// Everything the plotter needs to draw the bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesChartData {
    pub groups: Vec<ChartGroup>,
    pub axis_max: i64,
    pub tick_step: i64,
    pub ticks: Vec<AxisTick>,
}

impl SalesChartData {
    pub fn from_records(records: &[Record]) -> Self {
        let groups: Vec<ChartGroup> = records
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let x = i as f64;
                let rods = Series::ALL
                    .iter()
                    .map(|&series| {
                        let value = match series {
                            Series::Sales => record.sales,
                            Series::Expenses => record.expenses,
                        };
                        ChartRod {
                            series,
                            x: x + series.offset(),
                            value,
                            tooltip: format!("{}: {}", series.name(), format_dollars(value)),
                        }
                    })
                    .collect();

                ChartGroup {
                    x,
                    label: short_month(&record.month),
                    rods,
                }
            })
            .collect();

        let max_value = groups
            .iter()
            .flat_map(|g| g.rods.iter().map(|r| r.value))
            .max()
            .unwrap_or(0);
        let axis_max = axis_max_for(max_value);

        Self {
            groups,
            axis_max,
            tick_step: tick_step_for(axis_max),
            ticks: axis_ticks(axis_max),
        }
    }

    /// Axis label for an x position, if it lands on a group.
    pub fn label_at(&self, x: f64) -> Option<&str> {
        let rounded = x.round();
        if (x - rounded).abs() > 1e-6 || rounded < 0.0 {
            return None;
        }
        self.groups.get(rounded as usize).map(|g| g.label.as_str())
    }
}

/// First three characters of a month name.
pub fn short_month(month: &str) -> String {
    month.chars().take(3).collect()
}

/// Round the largest value up to a whole step; never below one step.
///
/// Values too close to `i64::MAX` to round up get `i64::MAX` itself.
pub fn axis_max_for(max_value: i64) -> i64 {
    let max_value = max_value.max(0);
    let rem = max_value % AXIS_STEP;
    let rounded = if rem == 0 {
        max_value
    } else {
        max_value.checked_add(AXIS_STEP - rem).unwrap_or(i64::MAX)
    };
    rounded.max(AXIS_STEP)
}

/// Tick spacing: one [`AXIS_STEP`] normally, wider when that would exceed [`MAX_TICKS`].
pub fn tick_step_for(axis_max: i64) -> i64 {
    let steps = axis_max / AXIS_STEP;
    if steps <= MAX_TICKS {
        AXIS_STEP
    } else {
        (steps + MAX_TICKS - 1) / MAX_TICKS * AXIS_STEP
    }
}

/// Ticks from zero to `axis_max` inclusive.
pub fn axis_ticks(axis_max: i64) -> Vec<AxisTick> {
    let step = tick_step_for(axis_max);
    let mut values: Vec<i64> = (0..=axis_max).step_by(step as usize).collect();
    if values.last() != Some(&axis_max) {
        values.push(axis_max);
    }

    values
        .into_iter()
        .map(|value| AxisTick {
            value,
            label: tick_label(value),
        })
        .collect()
}

pub fn tick_label(value: i64) -> String {
    if value == 0 {
        "0".to_string()
    } else {
        format!("{}K", value / AXIS_STEP)
    }
}

/// `$` plus the amount with thousands separators, e.g. `$3,000` or `$-1,000`.
pub fn format_dollars(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if amount < 0 { "-" } else { "" };
    format!("${}{}", sign, grouped)
}
