pub mod config;
pub mod dataset;
pub mod error;
pub mod frequency;
pub mod models;
pub mod ranker;
pub mod state;
