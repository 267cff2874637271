//! Ticker events: types and broadcast bus.
//!
//! This module groups the event **data model** and the **bus** used to
//! publish/subscribe to lifecycle events emitted by the ticker loop.
//!
//! ## Contents
//! - [`EventKind`], [`Event`] event classification and payload metadata
//! - [`Bus`] thin wrapper over `tokio::sync::broadcast`
//!
//! ## Quick reference
//! - **Publisher**: `core::actor::TickActor::run` (one per active ticker).
//! - **Consumers**: `SubscriberSet::listen`, spawned by `Ticker` when
//!   subscribers are configured, and raw receivers from `Ticker::subscribe()`.

mod bus;
mod event;

pub use bus::Bus;
pub use event::{Event, EventKind};
