//! Driver-side engine plumbing
//!
//! [`Controller`] owns the single authoritative [`GameState`](blockfall_core::GameState),
//! serializes intents into it, and hands a fresh snapshot to every subscriber
//! after each transition. [`GravityClock`] tells the driver when the next
//! automatic `Move(Down)` is due; it never touches the game itself.

pub mod controller;
pub mod gravity;

pub use controller::{Controller, SubscriptionId};
pub use gravity::GravityClock;
