//! Client library and CLI plumbing for browsing TheMealDB recipes

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod mealdb;
pub mod output;
