use crate::model::{Nutrition, PreparationTime, Recipe};

/// Read-only presentation of a decoded recipe.
///
/// Built once from a [`Recipe`]; the list lines carry the display-time
/// cleanup below, while the underlying recipe stays untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeView {
    pub title: String,
    pub description: String,
    pub preparation_time: PreparationTime,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub nutrition: Nutrition,
}

/// Map a recipe into its presentation structure.
///
/// The model sometimes bullets or numbers the list items itself even though
/// the lists are already rendered as bullets and ordinals. Each ingredient
/// loses one leading `"* "` marker and each instruction one leading
/// `"1. "`-style marker. Cosmetic only; no other decisions are made here.
pub fn present(recipe: &Recipe) -> RecipeView {
    RecipeView {
        title: recipe.title.clone(),
        description: recipe.description.clone(),
        preparation_time: recipe.preparation_time.clone(),
        ingredients: recipe
            .ingredients
            .iter()
            .map(|line| strip_bullet(line).to_string())
            .collect(),
        instructions: recipe
            .instructions
            .iter()
            .map(|line| strip_ordinal(line).to_string())
            .collect(),
        nutrition: recipe.nutrition.clone(),
    }
}

fn strip_bullet(line: &str) -> &str {
    line.strip_prefix("* ").unwrap_or(line)
}

/// Strips exactly one digit, a period and one whitespace char.
fn strip_ordinal(line: &str) -> &str {
    match line.as_bytes() {
        [digit, b'.', space, ..] if digit.is_ascii_digit() && space.is_ascii_whitespace() => {
            &line[3..]
        }
        _ => line,
    }
}
