use crate::cli::args::{CategoriesArgs, OutputFormat};
use crate::error::Result;
use crate::mealdb::{Category, MealDbClient};
use crate::output;

/// Handle the categories command
pub async fn categories(
    client: &MealDbClient,
    args: &CategoriesArgs,
    format: OutputFormat,
) -> Result<String> {
    let response = client.get_categories().await?;
    let categories = filter_by_name(response.categories, args.filter.as_deref());

    output::format_categories(&categories, format)
}

/// Keep categories whose name contains `filter` (case-insensitive)
fn filter_by_name(categories: Vec<Category>, filter: Option<&str>) -> Vec<Category> {
    match filter {
        Some(filter) => {
            let filter_lower = filter.to_lowercase();
            categories
                .into_iter()
                .filter(|c| c.name.to_lowercase().contains(&filter_lower))
                .collect()
        }
        None => categories,
    }
}
