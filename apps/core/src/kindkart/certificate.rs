//! Certificate of Empathy rendering.
//!
//! Produces a printable HTML document from a recipient name and the
//! session's contribution count. Export is best-effort file output; there
//! is no PDF pipeline here, the host's print dialog handles that.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::AppError;

/// A certificate awarded at export/print time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certificate {
    pub recipient: String,
    /// Donations submitted during this session.
    pub contributions: u64,
    pub issued_at: DateTime<Utc>,
}

impl Certificate {
    pub fn new(recipient: &str, contributions: u64) -> Self {
        Self {
            recipient: recipient.to_string(),
            contributions,
            issued_at: Utc::now(),
        }
    }

    /// The award sentence shown on the certificate.
    pub fn award_line(&self) -> String {
        format!(
            "Certificate of Empathy awarded to {} for contributing to the Global Thought Archive",
            self.recipient
        )
    }

    /// Render the certificate as a standalone HTML page.
    pub fn to_html(&self) -> String {
        format!(
            "<!DOCTYPE html>\n\
             <html>\n\
             <head><meta charset=\"utf-8\"><title>Certificate of Empathy</title></head>\n\
             <body>\n\
             <h1>Certificate of Empathy</h1>\n\
             <p>{}</p>\n\
             <p>Contributions this session: {}</p>\n\
             <p>Issued {}</p>\n\
             </body>\n\
             </html>\n",
            self.award_line(),
            self.contributions,
            self.issued_at.format("%Y-%m-%d %H:%M UTC"),
        )
    }

    /// Write the rendered HTML to `path`.
    pub fn export(&self, path: &Path) -> Result<(), AppError> {
        fs::write(path, self.to_html())?;
        Ok(())
    }
}
