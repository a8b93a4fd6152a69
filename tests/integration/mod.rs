//! Integration tests module
//!
//! This module contains integration tests for Hubref CLI commands that do
//! not need a network.

pub mod cli;
pub mod common;
pub mod offline;
