use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::ForecastRow;
use eframe::egui;

pub fn render_forecast_table(ui: &mut egui::Ui, rows: &[ForecastRow]) {
    egui::ScrollArea::vertical()
        .id_salt("forecast_table_scroll")
        .max_height(320.0)
        .auto_shrink([false, true])
        .show(ui, |ui| {
            egui::Grid::new("forecast_table_grid")
                .striped(true)
                .spacing([40.0, 6.0])
                .min_col_width(120.0)
                .show(ui, |ui| {
                    ui.strong("Date");
                    ui.strong("Forecasted Price");
                    ui.end_row();

                    for row in rows {
                        ui.label(
                            egui::RichText::new(&row.date).color(DesignSystem::TEXT_SECONDARY),
                        );
                        ui.label(egui::RichText::new(&row.price).monospace());
                        ui.end_row();
                    }
                });
        });
}
