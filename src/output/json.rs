use serde::Serialize;

use crate::error::Result;
use crate::mealdb::MealDetail;

/// Format a meal as JSON, adding the derived ingredient list
pub fn format_meal(meal: &MealDetail) -> Result<String> {
    let mut value = serde_json::to_value(meal)?;
    if let Some(object) = value.as_object_mut() {
        object.insert(
            "ingredients".to_string(),
            serde_json::to_value(meal.ingredients())?,
        );
    }
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Format any serializable value as JSON
pub fn format_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
