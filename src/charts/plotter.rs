//! Chart Plotter Module
//! Draws the sales/expenses bar chart using egui_plot.

use crate::charts::mapper::{
    tick_label, SalesChartData, Series, BAR_WIDTH, CHART_HEIGHT, CHART_WIDTH, X_AXIS_TITLE,
    Y_AXIS_TITLE,
};
use egui_plot::{Bar, BarChart, GridMark, Plot};

/// Draws mapped chart data with egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Build one egui_plot bar chart per series so each gets its own color and legend entry.
    pub fn bar_charts(data: &SalesChartData) -> Vec<BarChart> {
        Series::ALL
            .iter()
            .map(|&series| {
                let bars: Vec<Bar> = data
                    .groups
                    .iter()
                    .flat_map(|g| g.rods.iter())
                    .filter(|rod| rod.series == series)
                    .map(|rod| {
                        Bar::new(rod.x, rod.value as f64)
                            .width(BAR_WIDTH)
                            .fill(series.color())
                            .name(&rod.tooltip)
                    })
                    .collect();

                BarChart::new(bars)
                    .color(series.color())
                    .name(series.name())
                    .element_formatter(Box::new(|bar: &Bar, _chart: &BarChart| {
                        bar.name.clone()
                    }))
            })
            .collect()
    }

    /// Draw the bar chart
    /// X-axis: month labels at group indices, Y-axis: amounts with K ticks
    pub fn draw_bar_chart(ui: &mut egui::Ui, data: &SalesChartData) {
        let x_data = data.clone();
        let tick_marks: Vec<GridMark> = data
            .ticks
            .iter()
            .map(|t| GridMark {
                value: t.value as f64,
                step_size: data.tick_step as f64,
            })
            .collect();
        let last_x = data.groups.len().max(1) as f64 - 0.5;

        Plot::new("sales_chart")
            .width(CHART_WIDTH)
            .height(CHART_HEIGHT)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .x_axis_label(X_AXIS_TITLE)
            .y_axis_label(Y_AXIS_TITLE)
            .include_x(-0.5)
            .include_x(last_x)
            .include_y(0.0)
            .include_y(data.axis_max as f64)
            .x_grid_spacer(|input| {
                let (min, max) = input.bounds;
                let first = min.ceil().max(0.0) as i64;
                let last = max.floor() as i64;
                (first..=last)
                    .map(|i| GridMark {
                        value: i as f64,
                        step_size: 1.0,
                    })
                    .collect()
            })
            .x_axis_formatter(move |mark, _range| {
                x_data.label_at(mark.value).unwrap_or_default().to_string()
            })
            .y_grid_spacer(move |_input| tick_marks.clone())
            .y_axis_formatter(|mark, _range| {
                if mark.value < 0.0 {
                    String::new()
                } else {
                    tick_label(mark.value.round() as i64)
                }
            })
            .show(ui, |plot_ui| {
                for chart in Self::bar_charts(data) {
                    plot_ui.bar_chart(chart);
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Record;

    #[test]
    fn test_one_bar_chart_per_series() {
        let records = vec![
            Record::new("January", 1000, 500),
            Record::new("February", 2000, 800),
        ];
        let data = SalesChartData::from_records(&records);
        let charts = ChartPlotter::bar_charts(&data);
        assert_eq!(charts.len(), Series::ALL.len());
    }
}
