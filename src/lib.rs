//! nusarasa - a terminal client for exploring Indonesian regional cuisine.
//!
//! The heart of the crate is [`map`]: the region/province model behind the
//! interactive culinary map. Around it sit a typed client for the recipe
//! backend, an API test harness, and the ratatui surface.

pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod events;
pub mod harness;
pub mod map;
pub mod models;
pub mod ui;
