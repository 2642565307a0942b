//! headsync - route-driven `<title>` and `<meta>` reconciliation.
//!
//! The [`meta::MetaService`] composes the page title, writes per-route tags,
//! backfills configured defaults, keeps `og:locale` alternates in sync and
//! sets a canonical `og:url`. Values may pass through an optional transform
//! (typically translation) that answers immediately or asynchronously.
//!
//! [`config::MetaConfig`] loads the same settings from a `meta.toml`.

pub mod config;
pub mod head;
pub mod logger;
pub mod meta;
pub(crate) mod utils;
