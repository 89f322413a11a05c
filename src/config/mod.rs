//! JSON configuration for the command-line tools.

pub mod hold_demo;
