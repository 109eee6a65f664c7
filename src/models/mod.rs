// src/models/mod.rs

pub mod bank;
pub mod distribution;
pub mod exam;
pub mod question;
