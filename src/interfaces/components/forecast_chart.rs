use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::ForecastViewModel;
use crate::interfaces::view_models::forecast_view_model::{format_month_index, format_price};
use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

/// Line of forecasted prices over the horizon, one marker per month
pub fn render_forecast_chart(ui: &mut egui::Ui, view: &ForecastViewModel) {
    ui.label(
        egui::RichText::new(&view.chart_title)
            .size(16.0)
            .strong(),
    );
    ui.add_space(DesignSystem::SPACING_SMALL);

    if view.points.is_empty() {
        ui.label(
            egui::RichText::new("Nothing to plot.")
                .italics()
                .color(DesignSystem::TEXT_MUTED),
        );
        return;
    }

    let line = Line::new("Forecasted Price", PlotPoints::from(view.points.clone()))
        .color(DesignSystem::ACCENT_PRIMARY)
        .width(2.0);
    let markers = Points::new("Monthly forecast", view.points.clone())
        .color(DesignSystem::ACCENT_SECONDARY)
        .radius(3.0);

    Plot::new("forecast_plot")
        .height(320.0)
        .legend(Legend::default())
        .show_axes([true, true])
        .show_grid([true, true])
        .allow_scroll(false)
        .x_axis_label("Date")
        .y_axis_label("Forecasted Price")
        .x_axis_formatter(|mark, _range| format_month_index(mark.value))
        .y_axis_formatter(|mark, _range| format_price(mark.value))
        .label_formatter(|_name, point| {
            format!("{}\n{}", format_month_index(point.x), format_price(point.y))
        })
        .show(ui, |plot_ui| {
            plot_ui.line(line);
            plot_ui.points(markers);
        });
}
