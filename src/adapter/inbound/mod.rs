//! Driving adapters: entry points that call into the application.

pub mod cli;
