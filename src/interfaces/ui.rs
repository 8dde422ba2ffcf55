use crate::interfaces::components::card::Card;
use crate::interfaces::components::forecast_chart::render_forecast_chart;
use crate::interfaces::components::forecast_table::render_forecast_table;
use crate::interfaces::components::selectors::render_select_box;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::forecast_app::{ForecastApp, ForecastOutcome};
use eframe::egui;

impl eframe::App for ForecastApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.theme_applied {
            ctx.set_visuals(DesignSystem::theme());
            self.theme_applied = true;
        }

        // --- Header ---
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("HDB Resale Price Forecast");
                ui.separator();
                ui.label(
                    egui::RichText::new(format!(
                        "{} transactions, {} towns",
                        self.data.dataset.len(),
                        self.data.index.town_count()
                    ))
                    .color(DesignSystem::TEXT_SECONDARY),
                );
            });
        });

        egui::CentralPanel::default()
            .frame(DesignSystem::main_frame())
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("main_scroll")
                    .auto_shrink([false, false])
                    .show(ui, |ui| self.render_body(ui));
            });
    }
}

impl ForecastApp {
    fn render_body(&mut self, ui: &mut egui::Ui) {
        if self.selection.is_none() {
            DesignSystem::banner_frame(DesignSystem::WARNING).show(ui, |ui| {
                ui.label("No resale transactions were loaded. Check the logs for fetch errors.");
            });
            return;
        }

        // --- Selectors ---
        Card::new()
            .title("SEGMENT")
            .subtitle("Choose a town, then a flat type sold there")
            .show(ui, |ui| {
                let towns = self.towns();
                let flat_types = self.flat_type_options();
                let current_town = self.selection().map(|s| s.town().to_string());
                let current_flat_type = self
                    .selection()
                    .and_then(|s| s.flat_type())
                    .map(str::to_string);

                let (picked_town, picked_flat_type) = ui
                    .horizontal(|ui| {
                        let town = render_select_box(
                            ui,
                            "town_select",
                            "Select Town",
                            current_town.as_deref(),
                            &towns,
                        );
                        ui.add_space(DesignSystem::SPACING_MEDIUM);
                        let flat_type = render_select_box(
                            ui,
                            "flat_type_select",
                            "Select Flat Type",
                            current_flat_type.as_deref(),
                            &flat_types,
                        );
                        (town, flat_type)
                    })
                    .inner;

                // A town change makes this frame's flat type list stale
                if let Some(town) = picked_town {
                    self.select_town(&town);
                } else if let Some(flat_type) = picked_flat_type {
                    self.select_flat_type(&flat_types, &flat_type);
                }

                ui.add_space(DesignSystem::SPACING_SMALL);
                let can_forecast = self.selection().is_some_and(|s| s.can_forecast());
                let button = egui::Button::new(egui::RichText::new("Forecast").strong())
                    .fill(DesignSystem::ACCENT_PRIMARY);
                if ui.add_enabled(can_forecast, button).clicked() {
                    self.run_forecast();
                }
            });

        ui.add_space(DesignSystem::SPACING_MEDIUM);

        let mut export_clicked = false;
        match &self.outcome {
            None => {}
            Some(ForecastOutcome::InsufficientData { message }) => {
                DesignSystem::banner_frame(DesignSystem::WARNING).show(ui, |ui| {
                    ui.colored_label(DesignSystem::WARNING, message);
                });
            }
            Some(ForecastOutcome::Failed { message }) => {
                DesignSystem::banner_frame(DesignSystem::DANGER).show(ui, |ui| {
                    ui.colored_label(DesignSystem::DANGER, format!("Forecast failed: {}", message));
                });
            }
            Some(ForecastOutcome::Ready { view, .. }) => {
                Card::new().title(view.title.clone()).subtitle(view.summary.clone()).show(
                    ui,
                    |ui| render_forecast_table(ui, &view.rows),
                );

                ui.add_space(DesignSystem::SPACING_MEDIUM);
                Card::new().min_height(360.0).show(ui, |ui| {
                    render_forecast_chart(ui, view);
                });

                ui.add_space(DesignSystem::SPACING_MEDIUM);
                ui.horizontal(|ui| {
                    export_clicked = ui.button("Download Forecast as CSV").clicked();
                    match &self.export_status {
                        Some(Ok(path)) => {
                            ui.colored_label(
                                DesignSystem::SUCCESS,
                                format!("Saved to {}", path.display()),
                            );
                        }
                        Some(Err(reason)) => {
                            ui.colored_label(DesignSystem::DANGER, reason);
                        }
                        None => {}
                    }
                });
            }
        }

        if export_clicked {
            self.export_csv();
        }
    }
}
