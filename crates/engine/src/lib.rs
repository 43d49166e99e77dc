//! Game design database engine library.
//!
//! Serves the design data JSON files and the balance calculators over HTTP.
//!
//! ## Structure
//!
//! - `use_cases/` - Operations the editor pages call
//! - `infrastructure/` - Configuration, ports and the filesystem adapter
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
