//! Simulated network latency.
//!
//! In the browser the delay is a real timer; during SSR and in tests it
//! resolves immediately.

#![allow(clippy::unused_async)]

pub const LOGIN_MS: u64 = 800;
pub const LOGOUT_MS: u64 = 300;
pub const FETCH_MS: u64 = 800;
pub const MUTATE_MS: u64 = 600;
pub const REPORT_MS: u64 = 1000;

/// Wait `ms` milliseconds before continuing.
pub async fn simulate(ms: u64) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::sleep(std::time::Duration::from_millis(ms)).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ms;
    }
}
