//! Mock backend services.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no real API behind the dashboard. Each module here owns an
//! in-memory data set and exposes async calls that pause for a simulated
//! network round trip before answering, so pages exercise the same
//! loading/error paths a real backend would produce.
//!
//! Stateful services (`sugar`, `users`) are cheap clonable handles over a
//! shared store and are provided to components through Leptos context.

pub mod auth;
mod error;
pub mod latency;
pub mod overview;
pub mod statistics;
pub mod sugar;
pub mod users;

pub use error::ServiceError;

use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Random source for mock data, seeded from the wall clock.
pub(crate) fn clock_rng() -> StdRng {
    let seed = u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default();
    StdRng::seed_from_u64(seed)
}
