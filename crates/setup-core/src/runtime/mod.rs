//! Runtime detection and dependency installation
//!
//! This module provides:
//! - Node.js and package manager detection
//! - The package manager `install` invocation

pub mod check;
pub mod installer;

pub use check::{check_node, check_program, RuntimeInfo};
pub use installer::Installer;
