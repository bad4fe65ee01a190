//! # NeuroLens & KindKart Core
//!
//! Backend core for the NeuroLens thought-analysis and KindKart donation
//! flows. The rule-based classifier lives in [`classifier`]; everything
//! around it is an explicit state object, a typed event dispatcher and
//! thin adapters over external services.

pub mod app;
pub mod chatbot;
pub mod classifier;
pub mod config;
pub mod error;
pub mod kindkart;
pub mod services;

pub use app::{AppState, DispatcherHandle, EmotionTally};
pub use chatbot::ChatBot;
pub use classifier::{EmotionLabel, ThoughtAnalyzer, ThoughtReport};
pub use config::AppConfig;
pub use error::AppError;
pub use kindkart::{DonationBoard, DonationItem, NewDonation};

#[cfg(test)]
mod tests;
