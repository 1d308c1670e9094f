//! Test utilities for integration testing.
//!
//! This module provides:
//! - Test data factories for creating valid test fixtures
//! - An in-memory repository implementation for mocking persistence
//! - A builder for constructing `AppState` with test dependencies

mod app_state_builder;
mod factories;

pub use app_state_builder::*;
pub use factories::*;
pub use waitlist_mocks::*;
