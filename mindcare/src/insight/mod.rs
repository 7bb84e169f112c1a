//! Insight backend integration for mindcare.
//!
//! The UI loop never awaits the network. It sends an `InsightRequest` to the
//! worker task spawned from `main` and later receives the result as an
//! `AppEvent::InsightResult` on the shared event bus.
pub mod types;
pub mod worker;
