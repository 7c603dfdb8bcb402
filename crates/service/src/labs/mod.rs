//! Lab management: input rules, record store, and the service on top of it.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use service::LabService;
