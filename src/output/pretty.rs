use colored::Colorize;
use terminal_size::{terminal_size, Width};

use crate::mealdb::{Category, Meal, MealDetail};
use crate::output::ImageReport;

/// Longest category description shown in list output
const DESCRIPTION_PREVIEW_CHARS: usize = 240;

/// Safely truncate a string to n characters, appending "..." if truncated.
/// Works correctly with multi-byte UTF-8 characters.
fn truncate_str(s: &str, max_chars: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() > max_chars {
        let truncated: String = chars.iter().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", truncated.trim_end())
    } else {
        s.to_string()
    }
}

/// Usable line width, clamped so output stays readable on odd terminals
fn line_width() -> usize {
    terminal_size()
        .map(|(Width(w), _)| w as usize)
        .unwrap_or(80)
        .clamp(40, 120)
}

/// Greedy word wrap; each output line is prefixed with `indent`
fn wrap(text: &str, width: usize, indent: &str) -> String {
    let budget = width.saturating_sub(indent.chars().count()).max(10);
    let mut output = String::new();

    for paragraph in text.lines().map(str::trim).filter(|p| !p.is_empty()) {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            let needed = line.chars().count() + word.chars().count() + usize::from(!line.is_empty());
            if needed > budget && !line.is_empty() {
                output.push_str(indent);
                output.push_str(&line);
                output.push('\n');
                line.clear();
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
        }
        if !line.is_empty() {
            output.push_str(indent);
            output.push_str(&line);
            output.push('\n');
        }
    }

    output
}

/// Format a list of categories for pretty output
pub fn format_categories(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.".to_string();
    }

    let width = line_width();
    let mut output = String::new();
    output.push_str(&format!("{}\n", "Categories".bold()));
    output.push_str(&"─".repeat(70));
    output.push('\n');

    for category in categories {
        output.push_str(&format!("{} {}\n", category.name.bold(), format!("#{}", category.id).dimmed()));
        output.push_str(&wrap(
            &truncate_str(&category.description, DESCRIPTION_PREVIEW_CHARS),
            width,
            "  ",
        ));
        output.push_str(&format!(
            "  {} {}\n",
            "Thumbnail:".cyan(),
            category.thumbnail.dimmed()
        ));
        output.push('\n');
    }

    output
}

/// Format the meals of one category for pretty output
pub fn format_meals(category: &str, meals: &[Meal]) -> String {
    if meals.is_empty() {
        return format!("No meals found in category '{}'.", category);
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{} ({} meal{})\n",
        format!("Meals in {}", category).bold(),
        meals.len(),
        if meals.len() == 1 { "" } else { "s" }
    ));
    output.push_str(&"─".repeat(70));
    output.push('\n');

    for meal in meals {
        // Id first for easy copy-paste into `cookbook meal <id>`
        output.push_str(&format!(
            "{:<8} {}\n",
            meal.id.cyan(),
            truncate_str(&meal.name, 60)
        ));
        output.push_str(&format!("         {}\n", meal.thumbnail.dimmed()));
    }

    output
}

/// Format a single meal with ingredients and instructions
pub fn format_meal(meal: &MealDetail) -> String {
    let width = line_width();
    let mut output = String::new();

    output.push_str(&format!("{} {}\n", meal.name.bold(), format!("#{}", meal.id).dimmed()));
    output.push_str(&"─".repeat(60));
    output.push('\n');

    if let Some(ref category) = meal.category {
        output.push_str(&format!("{} {}\n", "Category:".cyan(), category));
    }
    if let Some(ref area) = meal.area {
        output.push_str(&format!("{} {}\n", "Cuisine:".cyan(), area));
    }
    let tags = meal.tag_list();
    if !tags.is_empty() {
        output.push_str(&format!("{} {}\n", "Tags:".cyan(), tags.join(", ")));
    }

    let ingredients = meal.ingredients();
    if !ingredients.is_empty() {
        output.push_str(&format!("\n{}\n", "Ingredients".bold()));
        for ingredient in &ingredients {
            if ingredient.measure.is_empty() {
                output.push_str(&format!("  • {}\n", ingredient.name));
            } else {
                output.push_str(&format!(
                    "  • {} {}\n",
                    ingredient.measure.yellow(),
                    ingredient.name
                ));
            }
        }
    }

    if let Some(ref instructions) = meal.instructions {
        output.push_str(&format!("\n{}\n", "Instructions".bold()));
        output.push_str(&wrap(instructions, width, "  "));
    }

    let links: Vec<(&str, &String)> = [
        ("Image:", meal.thumbnail.as_ref()),
        ("Video:", meal.youtube.as_ref()),
        ("Source:", meal.source.as_ref()),
    ]
    .into_iter()
    .filter_map(|(label, link)| link.filter(|l| !l.is_empty()).map(|l| (label, l)))
    .collect();

    if !links.is_empty() {
        output.push('\n');
        for (label, link) in links {
            output.push_str(&format!("{} {}\n", label.cyan(), link));
        }
    }

    output
}

/// Format the outcome of an image download
pub fn format_image_report(report: &ImageReport) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{} {}x{} ({})\n",
        "Image".bold(),
        report.width,
        report.height,
        report.color
    ));
    output.push_str(&"─".repeat(50));
    output.push('\n');
    output.push_str(&format!("{} {}\n", "URL:".cyan(), report.url));

    for (i, source) in report.fetches.iter().enumerate() {
        let source_colored = if source == "cache" {
            source.green()
        } else {
            source.yellow()
        };
        output.push_str(&format!("  fetch {} {}\n", i + 1, source_colored));
    }

    if let Some(ref path) = report.saved_to {
        output.push_str(&format!("{} {}\n", "Saved:".cyan(), path));
    }

    output.push_str(&format!(
        "\n{} {} entr{}, {} / {} bytes\n",
        "Cache:".dimmed(),
        report.cache.entries,
        if report.cache.entries == 1 { "y" } else { "ies" },
        report.cache.weighted_bytes,
        report.cache.capacity_bytes
    ));

    output
}
