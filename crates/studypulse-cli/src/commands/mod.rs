pub mod analyze;
pub mod config;
pub mod features;
pub mod input;
pub mod model;
pub mod score;
