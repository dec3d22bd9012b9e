//! Blocking client core for the BoardGameGeek XML API (`/xmlapi2`).
//!
//! # Overview
//! Three layers, composed top-down:
//! - `QueryBuilder` turns typed parameters into a percent-encoded URI.
//! - `Fetcher` performs the GET, retrying 429/5xx with a growing backoff and
//!   failing fast on authorization errors and transport faults.
//! - `BggClient` glues the two together and maps XML bodies onto the shapes
//!   in `types`, tolerating fields it does not know about.
//!
//! # Design
//! - The network sits behind the `Transport` trait. `UreqTransport` is the
//!   production implementation, and tests swap in scripted ones.
//! - Backoff waits go through `Sleeper`, so retry timing is observable
//!   without wall-clock sleeps.
//! - All fatal conditions surface as `BggError`.

pub mod client;
pub mod config;
pub mod error;
pub mod fetch;
pub mod http;
pub mod options;
pub mod query;
pub mod types;

#[cfg(test)]
mod test_support;

pub use client::{parse_xml, BggClient};
pub use config::ClientConfig;
pub use error::{BggError, Result};
pub use fetch::{Fetcher, RetryPolicy, Sleeper, ThreadSleeper};
pub use http::{HttpRequest, HttpResponse, Transport, UreqTransport};
pub use options::{Command, FamilyType, Flag, HotItemType, ThingType, UnknownToken};
pub use query::QueryBuilder;
pub use types::{CollectionItem, Envelope, Family, HotItem, SearchResult, Thing, User};
