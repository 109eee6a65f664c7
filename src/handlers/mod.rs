// src/handlers/mod.rs

pub mod bank;
pub mod quiz;
