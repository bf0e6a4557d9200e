// src/ui/mod.rs
pub mod issues;
pub mod overview;
pub mod sentiment;
pub mod trends;
pub mod widgets;
