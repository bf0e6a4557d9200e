// src/ui/overview.rs
use eframe::egui;

use crate::model::AnalyticsRecord;
use crate::projection;
use crate::state::{AppState, PanelArrangement};
use crate::ui::widgets::{color_for, metric_card, severity_badge};

pub fn show_overview_view(ui: &mut egui::Ui, state: &AppState) {
    let record = match &state.record {
        Some(record) => record,
        None => {
            ui.label("No analytics loaded yet. Enter an application identifier and press Analyze.");
            return;
        }
    };

    ui.horizontal(|ui| {
        ui.heading(&record.app_info.title);
        ui.label(egui::RichText::new(&record.app_info.category).small().weak());
    });
    ui.add_space(8.0);

    // KPI cards
    ui.columns(4, |cols| {
        metric_card(
            &mut cols[0],
            "Average Rating",
            &format!("{:.2}", record.app_info.score),
            &format!("{} reviews", record.metrics.total_reviews),
        );
        metric_card(
            &mut cols[1],
            "Positive Sentiment",
            &format!("{}%", record.metrics.sentiment_distribution.positive),
            "Share of positive reviews",
        );
        metric_card(
            &mut cols[2],
            "Critical Issues",
            &record.metrics.severity_distribution.high.to_string(),
            "High priority problems",
        );
        metric_card(
            &mut cols[3],
            "Current Version",
            &record.app_info.version,
            &format!("{} installs", record.app_info.installs),
        );
    });
    ui.add_space(12.0);

    match state.arrangement {
        PanelArrangement::SideBySide => {
            ui.columns(2, |cols| {
                sentiment_chart(&mut cols[0], state);
                severity_chart(&mut cols[1], state);
            });
        }
        PanelArrangement::Stacked => {
            sentiment_chart(ui, state);
            ui.add_space(8.0);
            severity_chart(ui, state);
        }
    }
    ui.add_space(12.0);

    recent_issues(ui, record);
}

fn sentiment_chart(ui: &mut egui::Ui, state: &AppState) {
    let slices = projection::sentiment_slices(state.record.as_ref());
    ui.group(|ui| {
        ui.vertical(|ui| {
            ui.heading("Sentiment Distribution");
            let plot = egui_plot::Plot::new("overview_sentiment")
                .height(220.0)
                .allow_zoom(false)
                .allow_drag(false)
                .show_background(false)
                .show_axes([false, true])
                .include_y(0.0)
                .legend(egui_plot::Legend::default());

            plot.show(ui, |plot_ui| {
                for (i, slice) in slices.iter().enumerate() {
                    let bar = egui_plot::Bar::new(i as f64, slice.value)
                        .width(0.6)
                        .fill(color_for(slice.color));
                    plot_ui.bar_chart(egui_plot::BarChart::new(vec![bar]).name(slice.label));
                }
            });
        });
    });
}

fn severity_chart(ui: &mut egui::Ui, state: &AppState) {
    let slices = projection::severity_slices(state.record.as_ref());
    ui.group(|ui| {
        ui.vertical(|ui| {
            ui.heading("Problem Severity");
            let plot = egui_plot::Plot::new("overview_severity")
                .height(220.0)
                .allow_zoom(false)
                .allow_drag(false)
                .show_background(false)
                .show_axes([false, true])
                .include_y(0.0)
                .legend(egui_plot::Legend::default());

            plot.show(ui, |plot_ui| {
                for (i, slice) in slices.iter().enumerate() {
                    let bar = egui_plot::Bar::new(i as f64, slice.value)
                        .width(0.6)
                        .fill(color_for(slice.color));
                    plot_ui.bar_chart(egui_plot::BarChart::new(vec![bar]).name(slice.label));
                }
            });
        });
    });
}

fn recent_issues(ui: &mut egui::Ui, record: &AnalyticsRecord) {
    ui.group(|ui| {
        ui.vertical(|ui| {
            ui.heading("Recent Issues");
            ui.label(
                egui::RichText::new("Problems identified from review feedback")
                    .small()
                    .weak(),
            );
            if record.recent_issues.is_empty() {
                ui.label("No issues identified.");
                return;
            }
            for issue in &record.recent_issues {
                ui.separator();
                ui.horizontal(|ui| {
                    severity_badge(ui, issue.severity);
                    ui.label(egui::RichText::new(format!("by {}", issue.user)).small().weak());
                });
                ui.label(&issue.review_text);
                ui.label(egui::RichText::new(&issue.title).small().weak());
            }
        });
    });
}
