//! Business logic services.
//!
//! Services sit between the HTTP controllers and the repositories. They validate requests,
//! bound store round-trips by the configured deadline and convert database models into the
//! DTOs returned to API consumers.

pub mod catalog;
