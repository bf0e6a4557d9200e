// src/app.rs
use std::sync::Arc;
use std::time::Duration;

use eframe::egui;

use crate::fetch::{AnalyticsSource, FetchController};
use crate::settings::Settings;
use crate::state::{AppState, PanelArrangement, View};

pub struct ReviewLensApp {
    state: AppState,
    controller: FetchController,
    source: Arc<dyn AnalyticsSource>,
}

impl ReviewLensApp {
    pub fn new(settings: &Settings, source: Arc<dyn AnalyticsSource>) -> Self {
        let mut app = Self {
            state: AppState::new(&settings.default_app_id),
            controller: FetchController::new(),
            source,
        };
        // Initial load with the default identifier.
        let app_id = app.state.app_id_input.clone();
        app.controller
            .request_analytics(&app.source, &app_id, &mut app.state);
        app
    }

    fn show_menu(&mut self, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("View", |ui| {
                for arrangement in [PanelArrangement::Stacked, PanelArrangement::SideBySide] {
                    if ui
                        .selectable_label(self.state.arrangement == arrangement, arrangement.label())
                        .clicked()
                    {
                        self.state.arrangement = arrangement;
                        ui.close_menu();
                    }
                }
            });

            ui.separator();

            for view in View::ALL {
                if ui
                    .selectable_label(self.state.current_view == view, view.title())
                    .clicked()
                {
                    self.state.select_view(view);
                }
            }
        });
    }

    fn show_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.heading(self.state.current_view.title());
                ui.label(egui::RichText::new(self.state.current_view.subtitle()).weak());
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let analyze =
                    ui.add_enabled(!self.state.is_loading, egui::Button::new("Analyze"));
                ui.add(
                    egui::TextEdit::singleline(&mut self.state.app_id_input)
                        .hint_text("App id (e.g. com.itau.investimentos)")
                        .desired_width(260.0),
                );
                if analyze.clicked() {
                    let app_id = self.state.app_id_input.trim().to_string();
                    self.state.set_app_identifier(app_id.clone());
                    self.controller
                        .request_analytics(&self.source, &app_id, &mut self.state);
                }
            });
        });

        if let Some(error) = &self.state.last_error {
            ui.colored_label(egui::Color32::from_rgb(200, 80, 80), error);
        }
        if let Some(updated) = self.state.last_updated {
            ui.label(
                egui::RichText::new(format!("Last updated {}", updated.format("%H:%M:%S")))
                    .small()
                    .weak(),
            );
        }
        ui.separator();
    }
}

impl eframe::App for ReviewLensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.controller.poll(&mut self.state);
        if self.controller.is_in_flight() {
            // Keep polling while a fetch runs, even without input events.
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.show_menu(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_header(ui);

            if self.state.is_loading {
                ui.vertical_centered(|ui| {
                    ui.add_space(80.0);
                    ui.spinner();
                    ui.label("Loading analytics...");
                });
                return;
            }

            egui::ScrollArea::vertical().show(ui, |ui| {
                match self.state.current_view {
                    View::Overview => crate::ui::overview::show_overview_view(ui, &self.state),
                    View::Sentiment => crate::ui::sentiment::show_sentiment_view(ui, &self.state),
                    View::Issues => crate::ui::issues::show_issues_view(ui, &self.state),
                    View::Trends => crate::ui::trends::show_trends_view(ui, &self.state),
                }
            });
        });
    }
}
