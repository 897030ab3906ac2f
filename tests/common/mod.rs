//! Shared test utilities for grecent
//!
//! Real temporary repositories for command and gateway tests, and a scripted
//! in-memory gateway for ranking and session tests.

pub mod fake_gateway;
pub mod repository;
