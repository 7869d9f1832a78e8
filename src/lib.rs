pub mod analyzer;
pub mod api;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod query;
pub mod service;
pub mod state;
pub mod store;
