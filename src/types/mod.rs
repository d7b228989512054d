pub mod config;
pub mod report;
pub mod rules;
pub mod scoring;
