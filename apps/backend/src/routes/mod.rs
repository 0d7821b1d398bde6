//! HTTP route handlers

pub mod collections;
