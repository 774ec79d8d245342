//! Utility modules for the file viewer.

pub mod path;
