//! # KindKart Module
//!
//! In-memory donation board plus certificate rendering for the KindKart
//! page. Session-scoped only: nothing here persists.

pub mod board;
pub mod certificate;

pub use board::{DonationBoard, DonationItem, NewDonation};
pub use certificate::Certificate;
