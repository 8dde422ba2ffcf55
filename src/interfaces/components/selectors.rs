use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

const SELECTOR_WIDTH: f32 = 220.0;

/// Labelled select box; returns the option the user clicked this frame, if any
pub fn render_select_box(
    ui: &mut egui::Ui,
    id: &str,
    label: &str,
    current: Option<&str>,
    options: &[String],
) -> Option<String> {
    let mut picked = None;

    ui.vertical(|ui| {
        ui.label(
            egui::RichText::new(label)
                .size(12.0)
                .color(DesignSystem::TEXT_SECONDARY),
        );

        let selected_text = current.unwrap_or("Select...");
        egui::ComboBox::from_id_salt(id)
            .width(SELECTOR_WIDTH)
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                for option in options {
                    let is_current = current == Some(option.as_str());
                    if ui.selectable_label(is_current, option).clicked() && !is_current {
                        picked = Some(option.clone());
                    }
                }
            });
    });

    picked
}
