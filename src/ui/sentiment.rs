// src/ui/sentiment.rs
use eframe::egui;

use crate::projection;
use crate::state::AppState;
use crate::ui::widgets::color_for;

pub fn show_sentiment_view(ui: &mut egui::Ui, state: &AppState) {
    let slices = projection::sentiment_slices(state.record.as_ref());
    ui.group(|ui| {
        ui.vertical(|ui| {
            ui.heading("Detailed Sentiment Analysis");
            ui.label(
                egui::RichText::new("Breakdown of user reviews by sentiment class")
                    .small()
                    .weak(),
            );
            ui.add_space(8.0);

            if slices.is_empty() {
                ui.label("No analytics loaded yet.");
                return;
            }

            ui.columns(3, |cols| {
                for (col, slice) in cols.iter_mut().zip(&slices) {
                    col.vertical_centered(|ui| {
                        ui.label(
                            egui::RichText::new(format!("{:.0}%", slice.value))
                                .size(28.0)
                                .strong()
                                .color(color_for(slice.color)),
                        );
                        ui.label(slice.label);
                        ui.add(
                            egui::ProgressBar::new((slice.value / 100.0) as f32)
                                .fill(color_for(slice.color)),
                        );
                    });
                }
            });
        });
    });
}
