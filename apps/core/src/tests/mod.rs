//! Test Module
//!
//! Cross-module test suite for the NeuroLens/KindKart core.
//!
//! ## Test Categories
//! - `classifier_tests`: threshold sweeps and classifier contract checks
//! - `config_tests`: environment-driven configuration loading
//! - `dispatcher_tests`: full event flows against service test doubles
//! - `service_tests`: HTTP adapters against a mock server

pub mod config_tests;
pub mod dispatcher_tests;
