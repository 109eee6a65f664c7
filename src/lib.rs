// src/lib.rs

pub mod bank;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod sampling;
pub mod state;

pub use bank::{BankCatalog, QuestionBank};
pub use routes::create_router;
