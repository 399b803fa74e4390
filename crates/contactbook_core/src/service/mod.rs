//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository and query calls into use-case level APIs.
//! - Keep front ends decoupled from storage details.

pub mod contact_service;
