use super::record_source::{Reading, RecordSource};
use super::transport::Transport;
use crate::{error, info, log};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{Instant, interval_at};
use tokio_util::sync::CancellationToken;

/// Periodic sender walking the loaded readings in file order. Submissions
/// are fire-and-forget: the tick never waits for delivery, failures are
/// logged and the next tick proceeds regardless.
pub struct Emitter {
    source: RecordSource,
    /// Label stamped on every outgoing reading so the server can tell the
    /// contributing stations apart.
    location: String,
    period: Duration,
    transport: Arc<dyn Transport>,
    cur_index: usize,
}

impl Emitter {
    pub fn new(
        source: RecordSource,
        location: &str,
        period: Duration,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            source,
            location: String::from(location),
            period,
            transport,
            cur_index: 0,
        }
    }

    /// Builds the next outgoing payload: a clone of the current row with
    /// the location tag added, never the stored row itself. The cursor
    /// wraps, so a finite file is replayed from the start once exhausted.
    pub(super) fn next_payload(&mut self) -> Reading {
        let i = self.cur_index % self.source.len();
        let mut outgoing = self.source.get(i).clone();
        outgoing.insert(
            "Location".to_string(),
            serde_json::Value::from(self.location.as_str()),
        );
        self.cur_index += 1;
        outgoing
    }

    /// Runs the relay until the token is cancelled. The first submission
    /// happens one full period after start.
    pub async fn run(mut self, token: CancellationToken) {
        info!(
            "Relaying {} readings every {}ms as '{}'",
            self.source.len(),
            self.period.as_millis(),
            self.location
        );
        let mut tick = interval_at(Instant::now() + self.period, self.period);
        loop {
            tokio::select! {
                () = token.cancelled() => break,
                _ = tick.tick() => {
                    let payload = self.next_payload();
                    let transport = Arc::clone(&self.transport);
                    tokio::spawn(async move {
                        log!("Sending reading to the collection server");
                        if let Err(e) = transport.submit(payload).await {
                            error!("Reading submission failed: {e}");
                        }
                    });
                }
            }
        }
        info!("Reading relay stopped");
    }
}
