//! Web layer for the browser-based calculator.
//!
//! Renders the calculator page with Askama; the page itself talks to the
//! JSON API from `static/calculator.js`.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Web route configuration

pub mod handlers;
pub mod routes;
