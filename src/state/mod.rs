// src/state/mod.rs
use chrono::{DateTime, Local};

use crate::model::AnalyticsRecord;

// Screen/tab tracking
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View {
    Overview,
    Sentiment,
    Issues,
    Trends,
}

impl View {
    pub const ALL: [View; 4] = [View::Overview, View::Sentiment, View::Issues, View::Trends];

    pub fn title(&self) -> &'static str {
        match self {
            View::Overview => "Overview",
            View::Sentiment => "Sentiment",
            View::Issues => "Issues",
            View::Trends => "Trends",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            View::Overview => "Key metrics for the selected application.",
            View::Sentiment => "Detailed breakdown of user sentiment.",
            View::Issues => "Problem backlog distilled from review feedback.",
            View::Trends => "How ratings and review volume evolve over time.",
        }
    }
}

/// How the overview charts are arranged. Both arrangements render the same
/// projections; only the layout differs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelArrangement {
    Stacked,
    SideBySide,
}

impl PanelArrangement {
    pub fn label(&self) -> &'static str {
        match self {
            PanelArrangement::Stacked => "Stacked charts",
            PanelArrangement::SideBySide => "Side-by-side charts",
        }
    }
}

// Core application state
#[derive(Debug)]
pub struct AppState {
    /// The current snapshot, replaced atomically on each successful fetch.
    pub record: Option<AnalyticsRecord>,

    // View state
    pub current_view: View,
    pub app_id_input: String,
    pub is_loading: bool,
    pub arrangement: PanelArrangement,

    pub last_updated: Option<DateTime<Local>>,
    pub last_error: Option<String>,
}

impl AppState {
    pub fn new(default_app_id: &str) -> Self {
        Self {
            record: None,
            current_view: View::Overview,
            app_id_input: default_app_id.to_string(),
            is_loading: false,
            arrangement: PanelArrangement::Stacked,
            last_updated: None,
            last_error: None,
        }
    }

    /// Every view is always selectable; the projections handle absent data.
    pub fn select_view(&mut self, view: View) {
        self.current_view = view;
    }

    /// Updates the pending identifier. Fetching only happens on an explicit
    /// refresh, never while typing.
    pub fn set_app_identifier(&mut self, app_id: impl Into<String>) {
        self.app_id_input = app_id.into();
    }
}
