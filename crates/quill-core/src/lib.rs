//! # Quill Core
//!
//! The domain layer of the Quill blog backend.
//! This crate contains the post model, the ownership rules and the CRUD
//! service, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::DomainError;
pub use service::BlogService;
