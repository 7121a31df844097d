//! Fyyur: a directory of music venues and artists, and the shows that connect
//! them.
//!
//! The library is split so the binary and the integration tests share one
//! router and one set of repositories.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod services;
pub mod state;
pub mod templates;
pub mod test_utils;
