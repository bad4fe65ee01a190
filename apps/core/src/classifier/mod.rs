//! # Classifier Module
//!
//! Rule-based "emotional intelligence" core shared by the NeuroLens and
//! KindKart flows. Pure functions only: no I/O, no failure modes.
//!
//! ## Components
//! - `emotion`: three-way emotion bucketing over an external sentiment score
//! - `bias`: cognitive-bias keyword detection by substring matching
//! - `verse`: canned poetic response per emotion label
//! - `report`: output data structure
//! - `analyzer`: main orchestrator

pub mod analyzer;
pub mod bias;
pub mod emotion;
pub mod report;
pub mod verse;

pub use analyzer::ThoughtAnalyzer;
pub use bias::BiasDetector;
pub use emotion::{EmotionClassifier, EmotionLabel};
pub use report::ThoughtReport;
pub use verse::poetic_line;
