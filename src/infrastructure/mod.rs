//! Filesystem helpers for the Zellij plugin sandbox.

pub mod paths;

pub use paths::{data_dir, expand_tilde};
