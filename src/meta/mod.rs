//! Route-driven metadata reconciliation.
//!
//! # Module Structure
//!
//! ```text
//! meta/
//! ├── service    # MetaService: update / set_title / set_tag / settle
//! ├── settings   # Settings, PageTitlePositioning, Callback
//! ├── route      # RouteMeta (per-navigation declaration)
//! ├── resolve    # Transformed -> Resolution normalization
//! ├── title      # title composition
//! ├── cascade    # key-triggered side effects of a tag write
//! ├── locale     # og:locale wire/stored forms
//! ├── canonical  # canonical og:url
//! └── error      # MetaError
//! ```
//!
//! # Flow
//!
//! `update` → `set_title` → `set_tag` per route key → `set_tag` per unseen
//! default → `set_tag("og:url")`. Each `set_*` resolves its value through the
//! optional transform callback; immediate values are applied on the spot,
//! deferred ones are applied by `MetaService::settle`.

mod canonical;
mod cascade;
mod error;
mod locale;
mod resolve;
mod route;
mod service;
mod settings;
mod title;

pub use canonical::canonical_url;
pub use error::MetaError;
pub use resolve::{Resolution, TransformResult, Transformed};
pub use route::RouteMeta;
pub use service::MetaService;
pub use settings::{Callback, Defaults, PageTitlePositioning, Settings};

/// Reserved key: the document title is only set through `set_title`.
pub const TITLE: &str = "title";
/// Route flag: use the route title verbatim.
pub const OVERRIDE: &str = "override";
pub const OG_TITLE: &str = "og:title";
pub const OG_URL: &str = "og:url";
pub const OG_LOCALE: &str = "og:locale";
pub const OG_LOCALE_ALTERNATE: &str = "og:locale:alternate";
