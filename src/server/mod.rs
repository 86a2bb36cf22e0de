//! Server application core modules.
//!
//! This module contains all server-side functionality for the event catalog, including HTTP
//! routing, configuration, database access and the catalog query service. Every request is
//! served independently; the server keeps no shared mutable state between requests.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
