pub mod catalog;
pub mod config;
pub mod data;
pub mod listing;
pub mod render;
pub mod seed;
pub mod stats;
pub mod suggestion;
