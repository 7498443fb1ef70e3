//! # CLI Module
//!
//! Command implementations behind the `scsearch` binary. Each command takes a
//! fully loaded [`crate::config::Config`], reports progress with the crate's
//! logging macros and exits through [`crate::error!`] on fatal failures.
//!
//! ## Commands
//!
//! - [`serve`] - Runs the HTTP search proxy
//! - [`token`] - Performs one client-credentials exchange and prints metadata
//! - [`search`] - Runs a single search from the terminal and prints a table
//!
//! ## Usage Patterns
//!
//! ```bash
//! scsearch serve --addr 0.0.0.0:8787
//! scsearch token
//! scsearch search "lofi beats" --limit 10 --page 2
//! ```

mod search;
mod serve;
mod token;

pub use search::search;
pub use serve::serve;
pub use token::token;
