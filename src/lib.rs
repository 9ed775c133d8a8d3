#![forbid(unsafe_code)]

pub mod clipboard;
pub mod config;
pub mod core;
pub mod crypto;
pub mod error;
pub mod field;
pub mod ui;
