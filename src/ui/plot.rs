use eframe::egui::Ui;
use egui_plot::{Line, Plot, PlotPoints, Points};

use crate::app::PlotView;
use crate::color::series_color32;
use crate::sink::PlotStyle;

// ---------------------------------------------------------------------------
// Series plot (central panel)
// ---------------------------------------------------------------------------

/// Render the cropped series in the central panel.
pub fn series_plot(ui: &mut Ui, view: &PlotView) {
    if view.series.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No rows in the selected range");
        });
        return;
    }

    let color = series_color32();
    let points: PlotPoints = view.series.points().collect();

    Plot::new("series_plot")
        .x_axis_label(view.x_label.as_str())
        .y_axis_label(view.y_label.as_str())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| match view.style {
            PlotStyle::Line => plot_ui.line(Line::new(points).color(color).width(1.5)),
            PlotStyle::Scatter => plot_ui.points(Points::new(points).color(color).radius(2.5)),
        });
}
