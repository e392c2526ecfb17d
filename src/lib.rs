// src/lib.rs

//! LaserDisc catalog lookup library

pub mod error;
pub mod extract;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod utils;
