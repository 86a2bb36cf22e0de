//! Server application models and type definitions.
//!
//! This module contains data models for the server application, including application state,
//! database model type aliases, and the catalog query types (filters, ordering, pagination)
//! shared by controllers, services and repositories.

pub mod app;
pub mod catalog;
pub mod db;
