//! HTTP route handlers

pub mod apply;
pub mod board;
pub mod status;
