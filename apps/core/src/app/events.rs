//! Typed UI events handled by the dispatcher.
//!
//! Each user action maps to one event; request events carry a `oneshot`
//! responder for the reply. `ArtReady` is the one internal event: the
//! fire-and-forget art call re-enters the loop through it so the gallery
//! is only ever mutated on the dispatcher task.

use serde::Serialize;
use tokio::sync::oneshot;
use url::Url;
use uuid::Uuid;

use crate::app::state::ChartSeries;
use crate::classifier::ThoughtReport;
use crate::error::AppError;
use crate::kindkart::{Certificate, DonationItem, NewDonation};
use crate::services::Coordinates;

/// Defines errors that can occur within the dispatch layer.
#[derive(Debug, thiserror::Error, Serialize, Clone)]
pub enum DispatchError {
    /// The dispatcher task is gone and its channel closed.
    #[error("Dispatcher unavailable: {0}")]
    Closed(String),
    /// The dispatcher dropped a responder without replying.
    #[error("No response from dispatcher: {0}")]
    NoResponse(String),
}

/// Messages that can be sent to the dispatcher.
#[derive(Debug)]
pub enum UiEvent {
    /// Analyze a free-text thought: score, classify, and kick off art
    /// generation as a side effect.
    AnalyzeThought {
        text: String,
        responder: oneshot::Sender<Result<ThoughtReport, AppError>>,
    },
    /// Submit a donation item to the board.
    SubmitDonation {
        donation: NewDonation,
        responder: oneshot::Sender<Result<DonationItem, AppError>>,
    },
    /// List the board in submission order.
    ListDonations {
        responder: oneshot::Sender<Vec<DonationItem>>,
    },
    /// Resolve a listed item's location to a map pin. Best-effort: a
    /// geocoder failure is reported as no pin.
    PinDonation {
        item_id: Uuid,
        responder: oneshot::Sender<Result<Option<Coordinates>, AppError>>,
    },
    /// Exchange one chatbot message.
    ChatMessage {
        text: String,
        responder: oneshot::Sender<String>,
    },
    /// Render a Certificate of Empathy for `recipient`.
    RenderCertificate {
        recipient: String,
        responder: oneshot::Sender<Result<Certificate, AppError>>,
    },
    /// Snapshot the empathy chart series.
    EmotionChart {
        responder: oneshot::Sender<ChartSeries>,
    },
    /// Snapshot of generated art URLs, in completion order.
    GallerySnapshot {
        responder: oneshot::Sender<Vec<Url>>,
    },
    /// Internal: a fire-and-forget art call resolved.
    ArtReady { url: Url },
    /// Stop the dispatcher.
    Shutdown,
}
