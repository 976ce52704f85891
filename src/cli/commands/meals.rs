use crate::cli::args::{MealsArgs, OutputFormat};
use crate::error::Result;
use crate::mealdb::MealDbClient;
use crate::output;

/// Handle the meals command
pub async fn meals(client: &MealDbClient, args: &MealsArgs, format: OutputFormat) -> Result<String> {
    let response = client.get_meals(&args.category).await?;

    let meals: Vec<_> = match args.limit {
        Some(limit) => response.meals.into_iter().take(limit).collect(),
        None => response.meals,
    };

    output::format_meals(&args.category, &meals, format)
}
