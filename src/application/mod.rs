/// Application layer - Use cases, view state, read models and DTOs
///
/// This layer orchestrates the domain services and coordinates with
/// infrastructure through ports.
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod state;
pub mod use_cases;
