//! In-memory donation listing board.
//!
//! Items live for the page session only; the board is owned by the
//! dispatcher task, so all mutation happens on a single task.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::error::AppError;

/// A donation submission as it arrives from the form.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewDonation {
    /// What is being donated.
    #[validate(length(min = 1))]
    pub name: String,
    /// Free-text description.
    #[validate(length(min = 1))]
    pub description: String,
    /// Free-text location, later fed to the geocoder for the map pin.
    #[validate(length(min = 1))]
    pub location: String,
}

/// A listed donation item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonationItem {
    /// Unique identifier for the item (UUID).
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub location: String,
    /// When the item was submitted.
    pub submitted_at: DateTime<Utc>,
}

/// Ordered sequence of donation items plus a running submission counter.
#[derive(Debug, Default)]
pub struct DonationBoard {
    items: Vec<DonationItem>,
    submissions: u64,
}

impl DonationBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append a submission, returning the listed item.
    ///
    /// # Errors
    /// Returns [`AppError::Validation`] when any field is empty.
    pub fn submit(&mut self, donation: NewDonation) -> Result<DonationItem, AppError> {
        donation.validate()?;

        let item = DonationItem {
            id: Uuid::new_v4(),
            name: donation.name,
            description: donation.description,
            location: donation.location,
            submitted_at: Utc::now(),
        };
        self.items.push(item.clone());
        self.submissions += 1;
        Ok(item)
    }

    /// Items in submission order.
    pub fn items(&self) -> &[DonationItem] {
        &self.items
    }

    /// Look up an item by id.
    pub fn find(&self, id: Uuid) -> Option<&DonationItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Total accepted submissions this session.
    pub fn submissions(&self) -> u64 {
        self.submissions
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
