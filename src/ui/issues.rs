// src/ui/issues.rs
use eframe::egui;

use crate::state::AppState;
use crate::ui::widgets::severity_badge;

pub fn show_issues_view(ui: &mut egui::Ui, state: &AppState) {
    ui.group(|ui| {
        ui.vertical(|ui| {
            ui.heading("Issue Backlog");
            ui.label(
                egui::RichText::new("Backlog generated from negative review feedback")
                    .small()
                    .weak(),
            );
            ui.add_space(8.0);

            let record = match &state.record {
                Some(record) => record,
                None => {
                    ui.label("No analytics loaded yet.");
                    return;
                }
            };
            if record.recent_issues.is_empty() {
                ui.label("No issues identified for this application.");
                return;
            }

            for issue in &record.recent_issues {
                ui.group(|ui| {
                    ui.vertical(|ui| {
                        ui.horizontal(|ui| {
                            severity_badge(ui, issue.severity);
                        });
                        ui.label(egui::RichText::new(&issue.title).strong());
                        ui.label(format!("User: {}", issue.user));
                        ui.label(format!("Feedback: \"{}\"", issue.review_text));
                    });
                });
                ui.add_space(4.0);
            }
        });
    });
}
