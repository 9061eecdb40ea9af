//! Toolvana: recently used tools tracking and search-as-you-type over the
//! tool grid of the Toolvana multi-tool portal.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod database;
pub mod managers;
pub mod platform;
pub mod services;
pub mod storage;
pub mod types;
pub mod ui;
