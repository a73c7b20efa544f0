//! Shared test support for the Scopa workspace: logging setup and fixtures.

pub mod fixtures;
pub mod logging;
