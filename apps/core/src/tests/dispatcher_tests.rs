//! Full event flows through the dispatcher, using service test doubles.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::time::{sleep, Duration, Instant};
use url::Url;
use uuid::Uuid;

use crate::app::DispatcherHandle;
use crate::classifier::EmotionLabel;
use crate::config::AppConfig;
use crate::error::AppError;
use crate::kindkart::NewDonation;
use crate::services::{ArtGenerator, Coordinates, Geocoder, SentimentScorer};

struct StaticScorer(f32);

#[async_trait]
impl SentimentScorer for StaticScorer {
    async fn score(&self, _text: &str) -> Result<f32, AppError> {
        Ok(self.0)
    }
}

struct StaticGeocoder(Option<Coordinates>);

#[async_trait]
impl Geocoder for StaticGeocoder {
    async fn lookup(&self, _location: &str) -> Result<Option<Coordinates>, AppError> {
        Ok(self.0)
    }
}

struct FailingGeocoder;

#[async_trait]
impl Geocoder for FailingGeocoder {
    async fn lookup(&self, _location: &str) -> Result<Option<Coordinates>, AppError> {
        Err(AppError::Service("geocoder down".to_string()))
    }
}

struct StaticArt(Url);

#[async_trait]
impl ArtGenerator for StaticArt {
    async fn generate(&self, _text: &str) -> Result<Url, AppError> {
        Ok(self.0.clone())
    }
}

fn handle_with(
    score: f32,
    geocoder: Arc<dyn Geocoder>,
    art: Option<Arc<dyn ArtGenerator>>,
) -> DispatcherHandle {
    DispatcherHandle::spawn(
        &AppConfig::default(),
        Arc::new(StaticScorer(score)),
        geocoder,
        art,
    )
}

fn donation(name: &str, location: &str) -> NewDonation {
    NewDonation {
        name: name.to_string(),
        description: "still works".to_string(),
        location: location.to_string(),
    }
}

#[tokio::test]
async fn analysis_classifies_and_counts() {
    let handle = handle_with(0.82, Arc::new(StaticGeocoder(None)), None);

    let report = handle.analyze("what a day".to_string()).await.unwrap();
    assert_eq!(report.emotion, EmotionLabel::Hopeful);
    assert_eq!(report.headline(), "Emotion: Hopeful (82.0%)");

    handle.analyze("another one".to_string()).await.unwrap();

    let chart = handle.emotion_chart().await.unwrap();
    assert_eq!(chart.labels, vec!["Hopeful", "Heavy", "Mixed"]);
    assert_eq!(chart.values, vec![2, 0, 0]);
}

#[tokio::test]
async fn heavy_and_mixed_scores_tallied_separately() {
    let heavy = handle_with(0.30, Arc::new(StaticGeocoder(None)), None);
    let report = heavy.analyze("rough week".to_string()).await.unwrap();
    assert_eq!(report.emotion, EmotionLabel::Heavy);

    let mixed = handle_with(0.55, Arc::new(StaticGeocoder(None)), None);
    let report = mixed.analyze("so-so".to_string()).await.unwrap();
    assert_eq!(report.emotion, EmotionLabel::Mixed);
    assert_eq!(mixed.emotion_chart().await.unwrap().values, vec![0, 0, 1]);
}

#[tokio::test]
async fn donations_keep_submission_order() {
    let handle = handle_with(0.5, Arc::new(StaticGeocoder(None)), None);

    handle.submit_donation(donation("chair", "Pune")).await.unwrap();
    handle.submit_donation(donation("lamp", "Mumbai")).await.unwrap();

    let items = handle.donations().await.unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].name, "chair");
    assert_eq!(items[1].name, "lamp");
}

#[tokio::test]
async fn invalid_donation_is_rejected() {
    let handle = handle_with(0.5, Arc::new(StaticGeocoder(None)), None);

    let result = handle
        .submit_donation(NewDonation {
            name: String::new(),
            description: "d".to_string(),
            location: "l".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert!(handle.donations().await.unwrap().is_empty());
}

#[tokio::test]
async fn pin_resolves_known_item() {
    let coords = Coordinates { lat: 18.52, lon: 73.85 };
    let handle = handle_with(0.5, Arc::new(StaticGeocoder(Some(coords))), None);

    let item = handle.submit_donation(donation("books", "Pune")).await.unwrap();
    let pin = handle.pin_donation(item.id).await.unwrap();

    assert_eq!(pin, Some(coords));
}

#[tokio::test]
async fn pin_of_unknown_item_is_validation_error() {
    let handle = handle_with(0.5, Arc::new(StaticGeocoder(None)), None);

    let result = handle.pin_donation(Uuid::new_v4()).await;
    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn geocoder_failure_pins_nothing() {
    let handle = handle_with(0.5, Arc::new(FailingGeocoder), None);

    let item = handle.submit_donation(donation("sofa", "nowhere")).await.unwrap();
    let pin = handle.pin_donation(item.id).await.unwrap();

    // Best-effort: the failure is logged, the flow carries on.
    assert_eq!(pin, None);
    assert_eq!(handle.donations().await.unwrap().len(), 1);
}

#[tokio::test]
async fn chat_first_match_and_default() {
    let handle = handle_with(0.5, Arc::new(StaticGeocoder(None)), None);

    let reply = handle.chat("hello there".to_string()).await.unwrap();
    assert_eq!(reply, "Hi there! Welcome to KindKart.");

    let reply = handle.chat("zzz".to_string()).await.unwrap();
    assert_eq!(reply, "I'm a simple helper bot. Try asking about donating an item.");
}

#[tokio::test]
async fn certificate_counts_session_contributions() {
    let handle = handle_with(0.5, Arc::new(StaticGeocoder(None)), None);

    handle.submit_donation(donation("a", "x")).await.unwrap();
    handle.submit_donation(donation("b", "y")).await.unwrap();

    let cert = handle.certificate("Asha".to_string()).await.unwrap();
    assert_eq!(cert.recipient, "Asha");
    assert_eq!(cert.contributions, 2);
    assert!(cert.award_line().contains("Asha"));
}

#[tokio::test]
async fn blank_certificate_recipient_rejected() {
    let handle = handle_with(0.5, Arc::new(StaticGeocoder(None)), None);

    let result = handle.certificate("   ".to_string()).await;
    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn art_result_lands_in_gallery_eventually() {
    let url = Url::parse("https://art.example/output/1.png").unwrap();
    let handle = handle_with(
        0.82,
        Arc::new(StaticGeocoder(None)),
        Some(Arc::new(StaticArt(url.clone()))),
    );

    // Analysis returns before the art side effect is applied.
    handle.analyze("paint me".to_string()).await.unwrap();

    let deadline = Instant::now() + Duration::from_secs(2);
    loop {
        let gallery = handle.gallery().await.unwrap();
        if !gallery.is_empty() {
            assert_eq!(gallery, vec![url]);
            break;
        }
        assert!(Instant::now() < deadline, "art never reached the gallery");
        sleep(Duration::from_millis(10)).await;
    }
}

#[tokio::test]
async fn analysis_works_without_art_service() {
    let handle = handle_with(0.82, Arc::new(StaticGeocoder(None)), None);

    handle.analyze("no art configured".to_string()).await.unwrap();
    assert!(handle.gallery().await.unwrap().is_empty());
}
