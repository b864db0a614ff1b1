//! Sales Chart Main Application
//! Single page: title, totals, bar chart and legend.

use crate::charts::SalesChartData;
use crate::data::{calculate_totals, read_records, Record, Totals};
use crate::gui::{ChartViewer, SummaryPanel, SummaryPanelAction};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Main application window.
pub struct SalesChartApp {
    summary_panel: SummaryPanel,
    chart_viewer: ChartViewer,
    totals: Option<Totals>,
}

impl SalesChartApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, data_path: PathBuf) -> Self {
        let mut app = Self {
            summary_panel: SummaryPanel::new(data_path.clone()),
            chart_viewer: ChartViewer::new(),
            totals: None,
        };
        app.load(&data_path);
        app
    }

    /// Load a CSV file and rebuild totals and chart data from it.
    fn load(&mut self, path: &Path) {
        let records = read_records(path);
        self.summary_panel.csv_path = Some(path.to_path_buf());
        self.apply_records(&records);
    }

    fn apply_records(&mut self, records: &[Record]) {
        if records.is_empty() {
            self.totals = None;
            self.chart_viewer.clear();
            return;
        }

        let totals = calculate_totals(records);
        debug!(
            "Totals: sales={} expenses={} profit={}",
            totals.sales, totals.expenses, totals.profit
        );
        self.totals = Some(totals);
        self.chart_viewer
            .set_chart_data(SalesChartData::from_records(records));
    }

    /// Handle CSV file selection
    fn handle_open_csv(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_file()
        {
            self.load(&path);
        }
    }
}

impl eframe::App for SalesChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::central_panel(&ctx.style()).inner_margin(30.0))
            .show(ctx, |ui| {
                egui::ScrollArea::both().show(ui, |ui| {
                    // Without data the page holds only the error and the reload button.
                    let action = match self.totals {
                        Some(totals) => {
                            let action = self.summary_panel.show(ui, &totals);
                            self.chart_viewer.show(ui);
                            action
                        }
                        None => {
                            self.chart_viewer.show(ui);
                            ui.add_space(10.0);
                            SummaryPanel::show_reload(ui)
                        }
                    };

                    match action {
                        SummaryPanelAction::OpenCsv => self.handle_open_csv(),
                        SummaryPanelAction::None => {}
                    }
                });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_app() -> SalesChartApp {
        SalesChartApp {
            summary_panel: SummaryPanel::default(),
            chart_viewer: ChartViewer::new(),
            totals: None,
        }
    }

    #[test]
    fn test_records_fill_totals_and_chart() {
        let mut app = empty_app();
        app.apply_records(&[
            Record::new("January", 1000, 500),
            Record::new("February", 2000, 800),
        ]);

        assert_eq!(app.totals.map(|t| t.profit), Some(1700));
        let chart = app.chart_viewer.chart_data.as_ref().unwrap();
        assert_eq!(chart.groups.len(), 2);
    }

    #[test]
    fn test_failed_load_leaves_only_error_state() {
        let mut app = empty_app();
        app.apply_records(&[Record::new("January", 1000, 500)]);
        assert!(app.totals.is_some());

        let dir = tempfile::TempDir::new().unwrap();
        app.load(&dir.path().join("missing.csv"));

        assert!(app.totals.is_none());
        assert!(app.chart_viewer.chart_data.is_none());
    }
}
