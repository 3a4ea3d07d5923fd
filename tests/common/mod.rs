//! Shared helpers for libris integration tests.
//!
//! - `env`: isolated project/home directories and a runner for the binary
//! - `assertions`: output assertion macros
//! - `fixtures`: sample data files

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod assertions;
pub mod env;
pub mod fixtures;

pub use env::{TestEnv, TestEnvBuilder, TestResult};
pub use fixtures::*;
