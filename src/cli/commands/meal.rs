use crate::cli::args::{MealArgs, OutputFormat};
use crate::error::{CookbookError, Result};
use crate::mealdb::MealDbClient;
use crate::output;

/// Handle the meal command (show details)
pub async fn meal(client: &MealDbClient, args: &MealArgs, format: OutputFormat) -> Result<String> {
    let response = client.get_meal_details(&args.id).await?;

    let meal = response
        .meals
        .first()
        .ok_or_else(|| CookbookError::MealNotFound(args.id.clone()))?;

    output::format_meal(meal, format)
}
