//! Utility modules for Artistly

pub mod auth;
