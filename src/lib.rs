//! Validation-and-routing stage for an event-driven store-inventory pipeline
//!
//! Each incoming item-transaction event is classified by mandatory-field
//! presence and forwarded, unmodified, to exactly one of two destinations:
//! the valid channel or the dead-letter channel. The stage is stateless per
//! event and keeps the routing decision a pure function of the value.
//!
//! - [`domain`] — the `ItemTransaction` value types and the classifier
//! - [`routing`] — the ordered decision table, sink seam, and router
//! - [`tap`] — injectable non-destructive diagnostics
//! - [`streaming`] — stream session driver and sharded topology
//! - [`io`] — JSON Lines ingestion and output glue
//! - [`app`] — CLI runner for the `storeroute` binary

pub mod app;
pub mod domain;
pub mod io;
pub mod prelude;
pub mod routing;
pub mod streaming;
pub mod tap;
