//! SoundCloud Search Proxy Library
//!
//! This library provides a small HTTP proxy in front of the SoundCloud API. It
//! exchanges client credentials for an access token, keeps that token cached for
//! its validity window, forwards paginated track searches and reshapes the
//! upstream tracks into a stable internal schema.
//!
//! # Modules
//!
//! - `api` - HTTP handlers served by the proxy
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration loading and the [`config::Config`] struct
//! - `error` - Crate error type
//! - `management` - Token cache management
//! - `server` - Router assembly and the listening loop
//! - `soundcloud` - Outbound SoundCloud API calls
//! - `types` - Data structures and type definitions
//! - `utils` - Pure helpers (normalization, pagination, time formatting)
//!
//! # Example
//!
//! ```
//! use scsearch::{config, server};
//!
//! #[tokio::main]
//! async fn main() -> scsearch::Result<()> {
//!     config::load_env().await?;
//!     let config = config::Config::from_env()?;
//!     server::start_api_server(config).await
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod server;
pub mod soundcloud;
pub mod types;
pub mod utils;

pub use error::Error;

/// A convenient Result type alias for operations that may fail.
///
/// All fallible operations in the crate return [`Error`], which the HTTP layer
/// maps onto a status code and a structured JSON body.
pub type Result<T> = std::result::Result<T, Error>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Listening on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only meant for fatal errors raised from the command line entry points. The
/// server never calls this from a request handler.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues such as a failed upstream call that is turned
/// into an error response.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
