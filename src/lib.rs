pub mod config;
pub mod engine;
pub mod parser;
pub mod product;
