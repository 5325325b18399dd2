use super::emitter::Emitter;
use super::record_source::{Reading, ReadingLoadError, RecordSource, parse_scalar};
use super::transport::Transport;
use crate::http_handler::http_response::response_common::ResponseError;
use async_trait::async_trait;
use itertools::Itertools;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Transport double that keeps every submitted payload.
#[derive(Default)]
struct RecordingTransport {
    sent: Mutex<Vec<Reading>>,
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn submit(&self, reading: Reading) -> Result<(), ResponseError> {
        self.sent.lock().unwrap().push(reading);
        Ok(())
    }
}

fn reading(row: i64) -> Reading {
    let mut fields = Reading::new();
    fields.insert("row".to_string(), serde_json::Value::from(row));
    fields.insert("NO2 (ppm)".to_string(), serde_json::Value::from(0.011));
    fields
}

fn three_row_source() -> RecordSource {
    RecordSource::from_readings(vec![reading(0), reading(1), reading(2)]).unwrap()
}

fn emitted_rows(payloads: &[Reading]) -> Vec<i64> {
    payloads.iter().map(|p| p["row"].as_i64().unwrap()).collect_vec()
}

#[test]
fn payload_indices_wrap_around() {
    let transport: Arc<dyn Transport> = Arc::new(RecordingTransport::default());
    let mut emitter = Emitter::new(three_row_source(), "testsite", Duration::from_secs(1), transport);
    let payloads = (0..5).map(|_| emitter.next_payload()).collect_vec();
    assert_eq!(emitted_rows(&payloads), vec![0, 1, 2, 0, 1]);
}

#[test]
fn payload_is_tagged_clone() {
    let transport: Arc<dyn Transport> = Arc::new(RecordingTransport::default());
    let source = three_row_source();
    let mut emitter = Emitter::new(source, "testsite", Duration::from_secs(1), transport);

    let mut payload = emitter.next_payload();
    assert_eq!(payload["Location"], serde_json::Value::from("testsite"));

    // Mutating the outgoing payload must not reach the stored row.
    payload.insert("row".to_string(), serde_json::Value::from(99));
    let replay = (0..3).map(|_| emitter.next_payload()).collect_vec();
    assert_eq!(emitted_rows(&replay), vec![1, 2, 0]);
    assert_eq!(replay[2]["row"], serde_json::Value::from(0));
}

#[tokio::test(start_paused = true)]
async fn relay_loop_emits_in_order_until_cancelled() {
    let transport = Arc::new(RecordingTransport::default());
    let emitter = Emitter::new(
        three_row_source(),
        "testsite",
        Duration::from_secs(1),
        Arc::clone(&transport) as Arc<dyn Transport>,
    );
    let token = CancellationToken::new();
    let relay = tokio::spawn(emitter.run(token.clone()));

    // Five full periods pass, then the host shuts the loop down.
    tokio::time::sleep(Duration::from_millis(5500)).await;
    token.cancel();
    relay.await.unwrap();
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }

    let sent = transport.sent.lock().unwrap();
    assert_eq!(emitted_rows(&sent), vec![0, 1, 2, 0, 1]);
    assert!(sent.iter().all(|p| p["Location"] == "testsite"));
}

#[test]
fn empty_source_is_rejected() {
    match RecordSource::from_readings(Vec::new()) {
        Err(ReadingLoadError::Empty) => (),
        other => panic!("expected Empty, got {other:?}"),
    }
}

#[test]
fn csv_cells_keep_dynamic_types() {
    assert_eq!(parse_scalar("42"), serde_json::Value::from(42));
    assert_eq!(parse_scalar("0.25"), serde_json::Value::from(0.25));
    assert_eq!(parse_scalar("10:00"), serde_json::Value::from("10:00"));
    assert_eq!(parse_scalar(""), serde_json::Value::from(""));
}

#[test]
fn bundled_readings_file_loads() {
    let source = RecordSource::load("data/brisbane-aq.csv").unwrap();
    assert!(source.len() >= 5);
    let first = source.get(0);
    assert!(first["PM10 (ug/m^3)"].is_number());
    assert!(first["Time"].is_string());
}
