//! Chart Viewer Widget
//! Bordered chart card with the legend underneath.

use crate::charts::{ChartPlotter, SalesChartData, Series};
use egui::{Color32, RichText};

const GREY_300: Color32 = Color32::from_rgb(224, 224, 224);
const CARD_PADDING: f32 = 20.0;
const CARD_ROUNDING: f32 = 10.0;
const SWATCH_SIZE: f32 = 20.0;
const LEGEND_GAP: f32 = 30.0;

/// Static error shown in place of the chart.
pub const LOAD_ERROR_MESSAGE: &str = "Error: Could not load data from CSV file.";
const ERROR_RED: Color32 = Color32::from_rgb(244, 67, 54);

/// Displays the sales chart, or the load error when there is nothing to draw.
#[derive(Default)]
pub struct ChartViewer {
    pub chart_data: Option<SalesChartData>,
}

impl ChartViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.chart_data = None;
    }

    pub fn set_chart_data(&mut self, chart_data: SalesChartData) {
        self.chart_data = Some(chart_data);
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        let Some(data) = &self.chart_data else {
            ui.label(RichText::new(LOAD_ERROR_MESSAGE).size(18.0).color(ERROR_RED));
            return;
        };

        egui::Frame::none()
            .rounding(CARD_ROUNDING)
            .stroke(egui::Stroke::new(1.0, GREY_300))
            .inner_margin(CARD_PADDING)
            .show(ui, |ui| {
                ChartPlotter::draw_bar_chart(ui, data);
            });

        ui.add_space(20.0);
        Self::draw_legend(ui);
    }

    fn draw_legend(ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.horizontal(|ui| {
                for (i, series) in Series::ALL.iter().enumerate() {
                    if i > 0 {
                        ui.add_space(LEGEND_GAP);
                    }
                    let (rect, _) = ui.allocate_exact_size(
                        egui::vec2(SWATCH_SIZE, SWATCH_SIZE),
                        egui::Sense::hover(),
                    );
                    ui.painter().rect_filled(rect, 4.0, series.color());
                    ui.label(RichText::new(series.name()).size(14.0));
                }
            });
        });
    }
}
