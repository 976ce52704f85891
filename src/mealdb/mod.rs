mod client;
mod completion;
mod images;
pub mod types;

pub use client::MealDbClient;
pub use types::*;
