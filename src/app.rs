use eframe::egui;

use crate::data::projection::PlotSeries;
use crate::error::{Result, SnipError};
use crate::sink::PlotStyle;
use crate::ui::plot;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

/// Everything the plot window shows. Built once, never mutated.
pub struct PlotView {
    pub title: String,
    pub series: PlotSeries,
    pub style: PlotStyle,
    pub x_label: String,
    pub y_label: String,
}

pub struct SnipPlotApp {
    pub view: PlotView,
}

impl eframe::App for SnipPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(format!("{} points", self.view.series.len()));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            plot::series_plot(ui, &self.view);
        });
    }
}

/// Open a window showing `view` and block until it is closed.
pub fn show(view: PlotView) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    let title = view.title.clone();
    log::info!("showing {} points in a plot window", view.series.len());
    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Ok(Box::new(SnipPlotApp { view }))),
    )
    .map_err(|e| SnipError::Display(e.to_string()))
}
