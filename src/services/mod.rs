// Service module exports

pub mod api;
pub mod booking;
pub mod config;
