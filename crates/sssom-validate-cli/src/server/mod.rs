//! Web server: routes, shared state and error mapping.

pub mod app;
pub mod error;
pub mod handlers;
pub mod page;
pub mod state;
