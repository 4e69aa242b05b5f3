//! Headless controllers for the laundry admin dashboard.
//!
//! Each page of the dashboard is a [`controller`]: a small state machine
//! that loads data through the [`laundry_service_client`], filters it
//! locally, and reloads after mutations. Mutating dialogs are [`form`]
//! controllers that hold a draft, validate it, and perform exactly one
//! create-or-update call. All user-visible failure text flows through the
//! [`notify`] channel; session expiry is announced once by the
//! [`session_watch`] task.

pub mod config;
pub mod confirm;
pub mod controller;
pub mod form;
pub mod notify;
pub mod session_watch;
pub mod telemetry;

pub use config::{Config, Environment};
pub use confirm::ConfirmPrompt;
pub use notify::{Notifier, Severity, Toast};
