//! Summary Panel Widget
//! Page title, data source, and the totals row above the chart.

use crate::charts::format_dollars;
use crate::data::Totals;
use egui::{Color32, RichText};
use std::path::PathBuf;

pub const BLUE_700: Color32 = Color32::from_rgb(25, 118, 210);
pub const RED_700: Color32 = Color32::from_rgb(211, 47, 47);
pub const GREEN_700: Color32 = Color32::from_rgb(56, 142, 60);

const TOTALS_SPACING: f32 = 30.0;

/// Title, file picker and totals.
#[derive(Default)]
pub struct SummaryPanel {
    pub csv_path: Option<PathBuf>,
}

impl SummaryPanel {
    pub fn new(csv_path: PathBuf) -> Self {
        Self {
            csv_path: Some(csv_path),
        }
    }

    /// Draw the title, data source and totals row.
    pub fn show(&mut self, ui: &mut egui::Ui, totals: &Totals) -> SummaryPanelAction {
        let mut action = SummaryPanelAction::None;

        ui.horizontal(|ui| {
            ui.label(
                RichText::new("Monthly Sales and Expenses")
                    .size(28.0)
                    .strong()
                    .color(BLUE_700),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if Self::open_button(ui) {
                    action = SummaryPanelAction::OpenCsv;
                }

                let path_text = self
                    .csv_path
                    .as_ref()
                    .and_then(|p| p.file_name())
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| "No file selected".to_string());
                ui.label(RichText::new(path_text).size(12.0).color(Color32::GRAY));
            });
        });

        ui.add_space(10.0);

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = TOTALS_SPACING;
            for (text, color) in totals_row(totals) {
                ui.label(RichText::new(text).size(16.0).strong().color(color));
            }
        });
        ui.add_space(20.0);

        action
    }

    /// Only the button for picking another file, shown under the load error.
    pub fn show_reload(ui: &mut egui::Ui) -> SummaryPanelAction {
        if Self::open_button(ui) {
            SummaryPanelAction::OpenCsv
        } else {
            SummaryPanelAction::None
        }
    }

    fn open_button(ui: &mut egui::Ui) -> bool {
        ui.button("📂 Open CSV…").clicked()
    }
}

/// The three summary labels with their colors. A loss shows the profit in red.
pub fn totals_row(totals: &Totals) -> [(String, Color32); 3] {
    let profit_color = if totals.is_loss() { RED_700 } else { GREEN_700 };
    [
        (
            format!("Total Sales: {}", format_dollars(totals.sales)),
            BLUE_700,
        ),
        (
            format!("Total Expenses: {}", format_dollars(totals.expenses)),
            RED_700,
        ),
        (
            format!("Total Profit: {}", format_dollars(totals.profit)),
            profit_color,
        ),
    ]
}

/// Actions triggered by the summary panel
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryPanelAction {
    None,
    OpenCsv,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_row_text() {
        let totals = Totals {
            sales: 3000,
            expenses: 1300,
            profit: 1700,
        };
        let row = totals_row(&totals);
        assert_eq!(row[0].0, "Total Sales: $3,000");
        assert_eq!(row[1].0, "Total Expenses: $1,300");
        assert_eq!(row[2].0, "Total Profit: $1,700");
        assert_eq!(row[2].1, GREEN_700);
    }

    #[test]
    fn test_loss_profit_is_red() {
        let totals = Totals {
            sales: 1000,
            expenses: 2000,
            profit: -1000,
        };
        let row = totals_row(&totals);
        assert_eq!(row[2].0, "Total Profit: $-1,000");
        assert_eq!(row[2].1, RED_700);
    }
}
