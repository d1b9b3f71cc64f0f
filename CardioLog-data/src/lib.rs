// CardioLog Data
// This crate handles persistence of the reading journal

// Storage configuration loaded from the environment
pub mod config;

// Repository implementations for data access
pub mod repository;

// Data storage models
pub mod models;
