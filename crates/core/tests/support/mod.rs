//! Shared test helpers for `apptcal-core` integration tests.
//!
//! Recording mocks for the storage ports plus appointment fixtures, so the
//! service tests can focus on behaviour instead of boilerplate.
#![allow(dead_code)]

pub mod fixtures;
pub mod repositories;
