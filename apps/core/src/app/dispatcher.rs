//! Event dispatcher.
//!
//! A single task owns [`AppState`] and receives every [`UiEvent`] over an
//! mpsc channel, which removes any concurrent-write hazard on the board,
//! tally and gallery. Cosmetic external calls (art generation) are spawned
//! fire-and-forget and their results re-enter the loop as `ArtReady`; an
//! in-flight call is never cancelled when superseded.

use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::time::{timeout, Duration};
use tracing::{error, info, instrument, warn};
use url::Url;
use uuid::Uuid;

use crate::app::events::{DispatchError, UiEvent};
use crate::app::state::{AppState, ChartSeries};
use crate::chatbot::ChatBot;
use crate::classifier::{ThoughtAnalyzer, ThoughtReport};
use crate::config::AppConfig;
use crate::error::AppError;
use crate::kindkart::{Certificate, DonationItem, NewDonation};
use crate::services::{
    ArtClient, ArtGenerator, Coordinates, GeoClient, Geocoder, HttpSentimentScorer, LexiconScorer,
    SentimentScorer,
};

const REPLY_TIMEOUT: Duration = Duration::from_secs(10);
const CHANNEL_CAPACITY: usize = 32;

/// A handle to the dispatcher task.
///
/// This is the entry point for all user-facing flows. Cloneable; every
/// method sends one event and awaits its reply with a timeout.
#[derive(Clone)]
pub struct DispatcherHandle {
    sender: mpsc::Sender<UiEvent>,
}

impl DispatcherHandle {
    /// Spawn a dispatcher wired to the given service implementations.
    pub fn spawn(
        config: &AppConfig,
        scorer: Arc<dyn SentimentScorer>,
        geocoder: Arc<dyn Geocoder>,
        art: Option<Arc<dyn ArtGenerator>>,
    ) -> Self {
        let (sender, receiver) = mpsc::channel(CHANNEL_CAPACITY);
        let dispatcher = Dispatcher {
            receiver,
            loopback: sender.clone(),
            state: AppState::new(),
            analyzer: ThoughtAnalyzer::from_config(&config.classifier),
            chatbot: ChatBot::new(),
            scorer,
            geocoder,
            art,
        };
        tokio::spawn(dispatcher.run());
        Self { sender }
    }

    /// Spawn a dispatcher with the production HTTP adapters from `config`.
    ///
    /// Falls back to the lexicon scorer when no sentiment endpoint is
    /// configured, and disables art generation when no API key is set.
    pub fn from_config(config: &AppConfig) -> Self {
        let scorer: Arc<dyn SentimentScorer> = match &config.sentiment.endpoint {
            Some(endpoint) => Arc::new(HttpSentimentScorer::new(endpoint.clone())),
            None => {
                info!("no sentiment endpoint configured, using lexicon scorer");
                Arc::new(LexiconScorer::new())
            }
        };
        let geocoder: Arc<dyn Geocoder> = Arc::new(GeoClient::from_config(&config.geocode));
        let art: Option<Arc<dyn ArtGenerator>> = match ArtClient::from_config(&config.art) {
            Some(client) => Some(Arc::new(client)),
            None => {
                info!("no art API key configured, art generation disabled");
                None
            }
        };
        Self::spawn(config, scorer, geocoder, art)
    }

    async fn request<T>(
        &self,
        event: UiEvent,
        receiver: oneshot::Receiver<T>,
    ) -> Result<T, AppError> {
        self.sender
            .send(event)
            .await
            .map_err(|e| DispatchError::Closed(e.to_string()))?;
        let reply = timeout(REPLY_TIMEOUT, receiver)
            .await?
            .map_err(|e| DispatchError::NoResponse(e.to_string()))?;
        Ok(reply)
    }

    /// Analyze a thought end to end.
    #[instrument(skip(self))]
    pub async fn analyze(&self, text: String) -> Result<ThoughtReport, AppError> {
        let (send, recv) = oneshot::channel();
        self.request(UiEvent::AnalyzeThought { text, responder: send }, recv)
            .await?
    }

    /// Submit a donation to the board.
    #[instrument(skip(self, donation))]
    pub async fn submit_donation(&self, donation: NewDonation) -> Result<DonationItem, AppError> {
        let (send, recv) = oneshot::channel();
        self.request(
            UiEvent::SubmitDonation {
                donation,
                responder: send,
            },
            recv,
        )
        .await?
    }

    /// List donations in submission order.
    pub async fn donations(&self) -> Result<Vec<DonationItem>, AppError> {
        let (send, recv) = oneshot::channel();
        self.request(UiEvent::ListDonations { responder: send }, recv)
            .await
    }

    /// Resolve a listed item's location to a map pin.
    #[instrument(skip(self))]
    pub async fn pin_donation(&self, item_id: Uuid) -> Result<Option<Coordinates>, AppError> {
        let (send, recv) = oneshot::channel();
        self.request(
            UiEvent::PinDonation {
                item_id,
                responder: send,
            },
            recv,
        )
        .await?
    }

    /// Exchange one chatbot message.
    pub async fn chat(&self, text: String) -> Result<String, AppError> {
        let (send, recv) = oneshot::channel();
        self.request(UiEvent::ChatMessage { text, responder: send }, recv)
            .await
    }

    /// Render a Certificate of Empathy.
    pub async fn certificate(&self, recipient: String) -> Result<Certificate, AppError> {
        let (send, recv) = oneshot::channel();
        self.request(
            UiEvent::RenderCertificate {
                recipient,
                responder: send,
            },
            recv,
        )
        .await?
    }

    /// Snapshot the empathy chart series.
    pub async fn emotion_chart(&self) -> Result<ChartSeries, AppError> {
        let (send, recv) = oneshot::channel();
        self.request(UiEvent::EmotionChart { responder: send }, recv)
            .await
    }

    /// Snapshot the art gallery.
    pub async fn gallery(&self) -> Result<Vec<Url>, AppError> {
        let (send, recv) = oneshot::channel();
        self.request(UiEvent::GallerySnapshot { responder: send }, recv)
            .await
    }

    /// Stop the dispatcher. Pending fire-and-forget art results are dropped.
    pub async fn shutdown(&self) {
        let _ = self.sender.send(UiEvent::Shutdown).await;
    }
}

struct Dispatcher {
    receiver: mpsc::Receiver<UiEvent>,
    /// Sender back into our own queue, used by spawned side effects.
    loopback: mpsc::Sender<UiEvent>,
    state: AppState,
    analyzer: ThoughtAnalyzer,
    chatbot: ChatBot,
    scorer: Arc<dyn SentimentScorer>,
    geocoder: Arc<dyn Geocoder>,
    art: Option<Arc<dyn ArtGenerator>>,
}

impl Dispatcher {
    async fn run(mut self) {
        info!("dispatcher started");
        while let Some(event) = self.receiver.recv().await {
            if !self.handle_event(event).await {
                break;
            }
        }
        info!("dispatcher stopped");
    }

    /// Handle one event; returns `false` on shutdown.
    async fn handle_event(&mut self, event: UiEvent) -> bool {
        match event {
            UiEvent::AnalyzeThought { text, responder } => {
                let result = self.analyze_thought(text).await;
                if let Err(e) = &result {
                    error!("thought analysis failed: {e}");
                }
                let _ = responder.send(result);
            }
            UiEvent::SubmitDonation { donation, responder } => {
                let result = self.state.board.submit(donation);
                if let Ok(item) = &result {
                    info!(item_id = %item.id, "donation listed");
                }
                let _ = responder.send(result);
            }
            UiEvent::ListDonations { responder } => {
                let _ = responder.send(self.state.board.items().to_vec());
            }
            UiEvent::PinDonation { item_id, responder } => {
                let _ = responder.send(self.pin_donation(item_id).await);
            }
            UiEvent::ChatMessage { text, responder } => {
                let _ = responder.send(self.chatbot.reply(&text).to_string());
            }
            UiEvent::RenderCertificate { recipient, responder } => {
                let result = self.render_certificate(&recipient);
                let _ = responder.send(result);
            }
            UiEvent::EmotionChart { responder } => {
                let _ = responder.send(self.state.tally.as_series());
            }
            UiEvent::GallerySnapshot { responder } => {
                let _ = responder.send(self.state.gallery.clone());
            }
            UiEvent::ArtReady { url } => {
                info!(%url, "art ready");
                self.state.gallery.push(url);
            }
            UiEvent::Shutdown => return false,
        }
        true
    }

    /// Score, classify, record the tally and kick off art generation.
    ///
    /// The art call never blocks or fails the analysis: its result comes
    /// back later as `ArtReady`, and its errors are only logged.
    async fn analyze_thought(&mut self, text: String) -> Result<ThoughtReport, AppError> {
        let score = self.scorer.score(&text).await?;
        let report = self.analyzer.analyze(&text, score);
        self.state.tally.record(report.emotion);

        if let Some(art) = &self.art {
            let art = Arc::clone(art);
            let loopback = self.loopback.clone();
            tokio::spawn(async move {
                match art.generate(&text).await {
                    Ok(url) => {
                        let _ = loopback.send(UiEvent::ArtReady { url }).await;
                    }
                    Err(e) => warn!("art generation failed: {e}"),
                }
            });
        }

        Ok(report)
    }

    async fn pin_donation(&self, item_id: Uuid) -> Result<Option<Coordinates>, AppError> {
        let item = self
            .state
            .board
            .find(item_id)
            .ok_or_else(|| AppError::Validation(format!("unknown donation item: {item_id}")))?;

        // Geocoding is best-effort: a service failure pins nothing and
        // leaves everything else intact.
        match self.geocoder.lookup(&item.location).await {
            Ok(coords) => Ok(coords),
            Err(e) => {
                warn!("geocoding failed for {:?}: {e}", item.location);
                Ok(None)
            }
        }
    }

    fn render_certificate(&self, recipient: &str) -> Result<Certificate, AppError> {
        let recipient = recipient.trim();
        if recipient.is_empty() {
            return Err(AppError::Validation(
                "certificate recipient must not be empty".to_string(),
            ));
        }
        Ok(Certificate::new(recipient, self.state.board.submissions()))
    }
}
