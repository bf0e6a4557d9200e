// src/ui/widgets.rs
use eframe::egui;

use crate::model::Severity;
use crate::projection::ColorKey;

// Chart palette carried over from the original dashboard.
pub fn color_for(key: ColorKey) -> egui::Color32 {
    match key {
        ColorKey::Green => egui::Color32::from_rgb(0, 196, 159),
        ColorKey::Amber => egui::Color32::from_rgb(255, 187, 40),
        ColorKey::Red => egui::Color32::from_rgb(255, 128, 66),
    }
}

pub fn severity_color(severity: Severity) -> egui::Color32 {
    match severity {
        Severity::High => color_for(ColorKey::Red),
        Severity::Medium => color_for(ColorKey::Amber),
        Severity::Low => color_for(ColorKey::Green),
    }
}

/// A KPI card: small title, large value, small caption.
pub fn metric_card(ui: &mut egui::Ui, title: &str, value: &str, caption: &str) {
    ui.group(|ui| {
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(title).small().weak());
            ui.label(egui::RichText::new(value).size(24.0).strong());
            ui.label(egui::RichText::new(caption).small().weak());
        });
    });
}

pub fn severity_badge(ui: &mut egui::Ui, severity: Severity) {
    egui::Frame::none()
        .fill(severity_color(severity))
        .rounding(4.0)
        .inner_margin(egui::Margin::symmetric(6.0, 2.0))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(severity.label())
                    .small()
                    .color(egui::Color32::WHITE),
            );
        });
}
