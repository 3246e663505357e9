//! **Which cloud provider do well-known companies depend on?**
//!
//! `cloud-deps` is a dashboard over a curated dataset of companies and the
//! cloud provider that hosts them, plus a catalog of AWS regions. It ships as
//! an interactive terminal UI and a set of scripting commands built on the
//! same library.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: providers, companies, logo fallback chains and regions.
//! - **[`data`]**: the built-in company and region datasets.
//! - **[`explorer`]**: [`DependencyExplorer`] and [`RegionsExplorer`], the
//!   state machines behind both views. Every derived view (filtered list,
//!   counts, pie data, title) is computed from their state on demand.
//! - **[`detect`]**: the [`CloudDetector`] trait and its HTTP
//!   implementation, plus the logo reachability probe.
//! - **[`config`]**: YAML config file discovery, validation and CLI layering.
//! - **[`tui`]**: the ratatui dashboard.
//! - **[`cli`]**: testable command handlers invoked by the binary.
//!
//! ## Getting Started
//!
//! ```
//! use cloud_deps::data::builtin_companies;
//! use cloud_deps::explorer::DependencyExplorer;
//! use cloud_deps::model::ProviderId;
//!
//! let mut explorer = DependencyExplorer::new(builtin_companies());
//! explorer.toggle_selected(ProviderId::Gcp);
//!
//! for company in explorer.filtered_companies() {
//!     println!("{} runs on {}", company.name, company.provider.display_name());
//! }
//! println!("{}% on the big three", explorer.big_three_share());
//! ```
//!
//! ### Adding a company by URL
//!
//! ```no_run
//! use cloud_deps::data::builtin_companies;
//! use cloud_deps::detect::{DetectClient, DetectClientConfig};
//! use cloud_deps::explorer::{AddOutcome, DependencyExplorer};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DetectClient::new(DetectClientConfig::default())?;
//!     let mut explorer = DependencyExplorer::new(builtin_companies());
//!     explorer.set_pending_url("https://www.stripe.com");
//!
//!     match explorer.submit_with(&client) {
//!         AddOutcome::Added(company) => println!("added {}", company.name),
//!         _ => eprintln!("{}", explorer.error().unwrap_or_default()),
//!     }
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // Cast safety: usize↔f64/f32/u16/i32 casts are pervasive in TUI layout math
    // and statistical calculations; all values are bounded in practice
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    // Doc completeness: # Errors / # Panics sections are aspirational for handler fns
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // TUI render functions are inherently long; splitting hurts readability
    clippy::too_many_lines,
    // State structs legitimately use many bools for toggle flags
    clippy::struct_excessive_bools,
    clippy::fn_params_excessive_bools,
    // self is kept for API consistency / future use across trait-like impls
    clippy::unused_self,
    // Variable names like `min`/`mid` or `old`/`new` are clear in context
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod data;
pub mod detect;
pub mod error;
pub mod explorer;
pub mod model;
pub mod tui;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError, TuiConfig, Validatable};
pub use detect::{CloudDetector, DetectClient, DetectClientConfig, LogoProbe};
pub use error::{CloudDepsError, DetectionErrorKind, ErrorContext, Result};
pub use explorer::{AddOutcome, DependencyExplorer, PieSlice, RegionsExplorer};
pub use model::{Company, Geography, LogoChain, LogoTier, ProviderId, Region};

// TUI shared ViewModel exports for building custom TUI components
pub use tui::{CycleFilter, FilterState, ListNavigation, ListState, OverlayState, StatusMessage};
