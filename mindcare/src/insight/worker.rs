//! Background task that owns the insight service for its lifetime.
//!
//! All communication is via channels: `InsightRequest` in,
//! `AppEvent::InsightResult` out. Requests are handled one at a time; the
//! submitter's in-flight guard means there is never more than one queued.

use std::sync::Arc;

use mindcare_core::client::{send_guarded, InsightService};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

use crate::event::AppEvent;
use crate::insight::types::{InsightRequest, InsightResultPayload};

/// Loops over incoming requests until the request channel closes.
///
/// Each result is sent back as `AppEvent::InsightResult`. A closed event
/// channel (UI loop gone) ends the loop as well.
pub async fn insight_worker_loop(
    service: Arc<dyn InsightService>,
    mut rx: UnboundedReceiver<InsightRequest>,
    event_tx: UnboundedSender<AppEvent>,
) {
    while let Some(request) = rx.recv().await {
        let payload = handle_request(Arc::clone(&service), request).await;
        if event_tx.send(AppEvent::InsightResult(Box::new(payload))).is_err() {
            break;
        }
    }
    tracing::debug!("insight worker stopped");
}

async fn handle_request(
    service: Arc<dyn InsightService>,
    request: InsightRequest,
) -> InsightResultPayload {
    let InsightRequest { id, mood, text } = request;
    tracing::debug!(%id, "insight request picked up");
    let result = send_guarded(service, mood, text).await;
    InsightResultPayload { id, result }
}
