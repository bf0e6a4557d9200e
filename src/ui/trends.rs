// src/ui/trends.rs
use eframe::egui;

use crate::projection;
use crate::state::AppState;

pub fn show_trends_view(ui: &mut egui::Ui, state: &AppState) {
    let series = projection::trend_series(state.record.as_ref());
    ui.group(|ui| {
        ui.vertical(|ui| {
            ui.heading("Rating Trends");
            ui.label(
                egui::RichText::new("Average rating and review volume per period")
                    .small()
                    .weak(),
            );
            ui.add_space(8.0);

            if series.is_empty() {
                ui.label("No analytics loaded yet.");
                return;
            }

            let rating_plot = egui_plot::Plot::new("trend_rating")
                .height(240.0)
                .allow_zoom(false)
                .allow_drag(false)
                .show_background(false)
                .include_y(0.0)
                .include_y(5.0)
                .legend(egui_plot::Legend::default());

            rating_plot.show(ui, |plot_ui| {
                let points: Vec<[f64; 2]> = series
                    .iter()
                    .enumerate()
                    .map(|(i, point)| [(i + 1) as f64, point.rating])
                    .collect();
                plot_ui.line(
                    egui_plot::Line::new(points)
                        .color(egui::Color32::from_rgb(59, 130, 246))
                        .width(2.0)
                        .name("Average rating"),
                );
            });

            ui.add_space(8.0);
            let volume_plot = egui_plot::Plot::new("trend_volume")
                .height(160.0)
                .allow_zoom(false)
                .allow_drag(false)
                .show_background(false)
                .show_axes([false, true])
                .include_y(0.0)
                .legend(egui_plot::Legend::default());

            volume_plot.show(ui, |plot_ui| {
                let bars: Vec<egui_plot::Bar> = series
                    .iter()
                    .enumerate()
                    .map(|(i, point)| {
                        egui_plot::Bar::new((i + 1) as f64, point.review_count as f64)
                            .width(0.5)
                            .fill(egui::Color32::from_rgb(148, 163, 184))
                    })
                    .collect();
                plot_ui.bar_chart(egui_plot::BarChart::new(bars).name("Review volume"));
            });

            ui.horizontal(|ui| {
                for point in &series {
                    ui.label(egui::RichText::new(&point.period_label).small().weak());
                }
            });
        });
    });
}
