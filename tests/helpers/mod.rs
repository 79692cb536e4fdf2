//! Test helpers module
//!
//! This module provides utilities and helpers for testing the GeoBuddy application.
//! It includes mock servers, test context setup and Telegram message fixtures.

#![allow(dead_code)]

pub mod countries_mock;
pub mod telegram_mock;
pub mod test_context;
pub mod test_data;

pub use countries_mock::*;
pub use telegram_mock::*;
pub use test_context::*;
pub use test_data::*;
