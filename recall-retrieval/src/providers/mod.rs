//! Content-provider adapters.
//!
//! The engine treats providers as opaque; these are the two shipped
//! implementations. Neither retries — a failed call surfaces as
//! `ProviderUnavailable`, which the engine recovers into an empty result.

mod fixture;
mod web;

pub use fixture::FixtureProvider;
pub use web::WebSearchProvider;
