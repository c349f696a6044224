//! Flash Chat - a terminal chat shell
//!
//! Sidebar navigation between seven sections, a chat list and a message
//! thread with a composer and emoji picker, all over fixed in-memory data.
//! This library exposes the modules for the binary and integration tests.

pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod models;
pub mod state;
pub mod terminal;
pub mod ui;
pub mod view_state;
