//! RentDesk Equipment Rental Management Core
//!
//! In-memory, insertion-ordered record stores for equipment, rentals,
//! maintenance and notifications, mirrored synchronously to a pluggable
//! key-value persistence backend, with pure derived-view computations
//! for the dashboard. Everything is single-threaded and synchronous:
//! each mutation runs to completion, persisting before it returns.

pub mod config;
pub mod dates;
pub mod error;
pub mod models;
pub mod repository;
pub mod seed;
pub mod services;
pub mod storage;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
