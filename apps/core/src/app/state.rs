//! Application state owned by the dispatcher.
//!
//! Created on startup, discarded on shutdown; the non-browser equivalent
//! of page-lifetime state. Never touched outside the dispatcher task.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::classifier::EmotionLabel;
use crate::kindkart::DonationBoard;

/// Labeled numeric series for the empathy pie chart.
///
/// This is the whole chart contract: the actual rendering is an external
/// library's job.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<&'static str>,
    pub values: Vec<u64>,
}

/// Running count of analyses per emotion label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionTally {
    pub hopeful: u64,
    pub heavy: u64,
    pub mixed: u64,
}

impl EmotionTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from explicit counts. The original page seeded its chart with
    /// Hopeful 42 / Heavy 31 / Mixed 27; that is a caller decision here.
    pub fn seeded(hopeful: u64, heavy: u64, mixed: u64) -> Self {
        Self {
            hopeful,
            heavy,
            mixed,
        }
    }

    pub fn record(&mut self, label: EmotionLabel) {
        match label {
            EmotionLabel::Hopeful => self.hopeful += 1,
            EmotionLabel::Heavy => self.heavy += 1,
            EmotionLabel::Mixed => self.mixed += 1,
        }
    }

    pub fn count(&self, label: EmotionLabel) -> u64 {
        match label {
            EmotionLabel::Hopeful => self.hopeful,
            EmotionLabel::Heavy => self.heavy,
            EmotionLabel::Mixed => self.mixed,
        }
    }

    pub fn total(&self) -> u64 {
        self.hopeful + self.heavy + self.mixed
    }

    /// The chart input, labels in fixed order.
    pub fn as_series(&self) -> ChartSeries {
        ChartSeries {
            labels: vec!["Hopeful", "Heavy", "Mixed"],
            values: vec![self.hopeful, self.heavy, self.mixed],
        }
    }
}

/// All mutable state for one application session.
#[derive(Debug, Default)]
pub struct AppState {
    pub board: DonationBoard,
    pub tally: EmotionTally,
    /// URLs of generated art, in completion order.
    pub gallery: Vec<Url>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_records_per_label() {
        let mut tally = EmotionTally::new();

        tally.record(EmotionLabel::Hopeful);
        tally.record(EmotionLabel::Hopeful);
        tally.record(EmotionLabel::Heavy);

        assert_eq!(tally.count(EmotionLabel::Hopeful), 2);
        assert_eq!(tally.count(EmotionLabel::Heavy), 1);
        assert_eq!(tally.count(EmotionLabel::Mixed), 0);
        assert_eq!(tally.total(), 3);
    }

    #[test]
    fn test_series_order_is_fixed() {
        let tally = EmotionTally::seeded(42, 31, 27);
        let series = tally.as_series();

        assert_eq!(series.labels, vec!["Hopeful", "Heavy", "Mixed"]);
        assert_eq!(series.values, vec![42, 31, 27]);
    }

    #[test]
    fn test_fresh_state_is_empty() {
        let state = AppState::new();

        assert!(state.board.is_empty());
        assert_eq!(state.tally.total(), 0);
        assert!(state.gallery.is_empty());
    }
}
