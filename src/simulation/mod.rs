//! Simulation module - headless app construction for tests

mod app_builder;

#[cfg(test)]
mod flow_test;

pub use app_builder::*;
