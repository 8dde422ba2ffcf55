use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// Titled container with the dashboard's card styling
pub struct Card {
    title: Option<String>,
    subtitle: Option<String>,
    min_height: f32,
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}

impl Card {
    pub fn new() -> Self {
        Self {
            title: None,
            subtitle: None,
            min_height: 0.0,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn min_height(mut self, height: f32) -> Self {
        self.min_height = height;
        self
    }

    pub fn show<R>(
        self,
        ui: &mut egui::Ui,
        add_contents: impl FnOnce(&mut egui::Ui) -> R,
    ) -> egui::InnerResponse<R> {
        DesignSystem::card_frame().show(ui, |ui| {
            // min_width misbehaves inside ScrollArea, only height is enforced
            if self.min_height > 0.0 {
                ui.set_min_height(self.min_height);
            }

            if let Some(title) = self.title {
                ui.label(
                    egui::RichText::new(title)
                        .size(12.0)
                        .color(DesignSystem::TEXT_SECONDARY)
                        .strong(),
                );
            }
            if let Some(subtitle) = self.subtitle {
                ui.label(
                    egui::RichText::new(subtitle)
                        .size(11.0)
                        .color(DesignSystem::TEXT_MUTED),
                );
            }
            ui.add_space(DesignSystem::SPACING_SMALL);

            add_contents(ui)
        })
    }
}
