use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// TheMealDB numbers ingredient/measure pairs from 1 to 20
const MAX_INGREDIENTS: usize = 20;

/// Response wrapper for `categories.php`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryApiResponse {
    pub categories: Vec<Category>,
}

/// Meal category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "idCategory")]
    pub id: String,
    #[serde(rename = "strCategory")]
    pub name: String,
    #[serde(rename = "strCategoryThumb")]
    pub thumbnail: String,
    #[serde(rename = "strCategoryDescription")]
    pub description: String,
}

/// Response wrapper for `filter.php?c=<category>`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealApiResponse {
    pub meals: Vec<Meal>,
}

/// Meal summary as listed under a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb")]
    pub thumbnail: String,
}

/// Response wrapper for `lookup.php?i=<mealID>`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealDetailsApiResponse {
    pub meals: Vec<MealDetail>,
}

/// Full meal record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealDetail {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strCategory", default)]
    pub category: Option<String>,
    #[serde(rename = "strArea", default)]
    pub area: Option<String>,
    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "strTags", default)]
    pub tags: Option<String>,
    #[serde(rename = "strYoutube", default)]
    pub youtube: Option<String>,
    #[serde(rename = "strSource", default)]
    pub source: Option<String>,
    /// Numbered ingredient/measure fields and anything else the API adds
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// One line of a recipe's ingredient list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ingredient {
    pub name: String,
    pub measure: String,
}

impl MealDetail {
    /// Ingredients in recipe order, skipping empty slots
    pub fn ingredients(&self) -> Vec<Ingredient> {
        (1..=MAX_INGREDIENTS)
            .filter_map(|n| {
                let name = self.extra_str(&format!("strIngredient{n}"))?;
                let measure = self
                    .extra_str(&format!("strMeasure{n}"))
                    .unwrap_or_default();
                Some(Ingredient {
                    name: name.to_string(),
                    measure: measure.to_string(),
                })
            })
            .collect()
    }

    /// Tags split out of the comma-separated `strTags` field
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .as_deref()
            .map(|tags| {
                tags.split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Trimmed, non-empty string value of an extra field
    fn extra_str(&self, key: &str) -> Option<&str> {
        self.extra
            .get(key)
            .and_then(|v| v.as_str())
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}
