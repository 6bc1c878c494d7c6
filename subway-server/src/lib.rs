//! Subway line management server.
//!
//! Keeps stations and lines, where each line is a chain of sections
//! that always forms one unbroken path from its first station to its last.

pub mod config;
pub mod domain;
pub mod service;
pub mod store;
pub mod web;
