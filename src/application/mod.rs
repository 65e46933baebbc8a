//! Application layer: services and queries built on the domain.

pub mod queries;
pub mod services;
