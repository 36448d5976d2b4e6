#![forbid(unsafe_code)]

//! `crewdeck` — team collaboration backend.
//!
//! CRUD over users, teams, projects, tasks, and chat messages with
//! role-based authorization, real-time push of task and message events,
//! and a natural-language assistant that maps free-text commands onto
//! authorized task mutations.

pub mod assistant;
pub mod config;
pub mod errors;
pub mod http;
pub mod models;
pub mod notify;
pub mod persistence;

pub use config::GlobalConfig;
pub use errors::{AppError, Result};
