//! Configuration section definitions.
//!
//! Each module corresponds to a section in `meta.toml`:
//!
//! | Module         | TOML Section     | Purpose                              |
//! |----------------|------------------|--------------------------------------|
//! | `app`          | `[app]`          | Name, URL, title composition         |
//! | `routes`       | `[routes."/.."]` | Route metadata keyed by path         |
//! | `translations` | `[translations]` | Lookup table used as value transform |
//!
//! `[defaults]` is a plain string table and has no module of its own.

mod app;
mod routes;
mod translations;

pub use app::AppConfig;
pub use routes::{RoutesConfig, route_path};
pub use translations::TranslationsConfig;
