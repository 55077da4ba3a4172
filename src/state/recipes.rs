//! Static recipe catalog shown on the recipes screen.

#[cfg(test)]
#[path = "recipes_test.rs"]
mod recipes_test;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipeSource {
    Youtube,
    Spoonacular,
    Allrecipes,
    Foodnetwork,
    Veggieai,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub image_url: String,
    /// Minutes.
    pub cooking_time: u32,
    pub difficulty: Difficulty,
    pub available_ingredients: u32,
    pub total_ingredients: u32,
    pub expiry_priority: bool,
    pub total_calories: u32,
    pub calories_per_serving: u32,
    pub servings: u32,
    pub source: RecipeSource,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub original_url: Option<String>,
    pub rating: f32,
    pub review_count: u32,
    /// Featured as the assistant's own suggestion.
    pub is_suggestion: bool,
}

impl Recipe {
    /// Share of ingredients already in the pantry, as a rounded percentage.
    #[must_use]
    pub fn match_percent(&self) -> u32 {
        if self.total_ingredients == 0 {
            return 0;
        }
        let available = self.available_ingredients.min(self.total_ingredients);
        (available * 100 + self.total_ingredients / 2) / self.total_ingredients
    }

    /// Emoji shown in place of the photo.
    #[must_use]
    pub fn emoji(&self) -> &'static str {
        match self.id.as_str() {
            "garden-salad" => "🥗",
            "veggie-stir-fry" => "🍜",
            "fresh-soup" => "🍲",
            "roasted-medley" => "🥘",
            _ => "🍽️",
        }
    }
}

/// The demo catalog, featured suggestion first.
pub fn catalog() -> Vec<Recipe> {
    vec![
        recipe(RecipeSeed {
            id: "garden-salad",
            name: "Fresh Garden Salad",
            minutes: 15,
            difficulty: Difficulty::Easy,
            ingredients: (5, 5),
            calories_per_serving: 180,
            servings: 2,
            source: RecipeSource::Veggieai,
            rating: 4.8,
            review_count: 212,
            is_suggestion: true,
        }),
        recipe(RecipeSeed {
            id: "veggie-stir-fry",
            name: "Veggie Stir Fry",
            minutes: 20,
            difficulty: Difficulty::Easy,
            ingredients: (11, 13),
            calories_per_serving: 320,
            servings: 2,
            source: RecipeSource::Allrecipes,
            rating: 4.6,
            review_count: 1_843,
            is_suggestion: false,
        }),
        recipe(RecipeSeed {
            id: "fresh-soup",
            name: "Fresh Soup",
            minutes: 30,
            difficulty: Difficulty::Medium,
            ingredients: (6, 8),
            calories_per_serving: 210,
            servings: 4,
            source: RecipeSource::Foodnetwork,
            rating: 4.4,
            review_count: 967,
            is_suggestion: false,
        }),
        recipe(RecipeSeed {
            id: "roasted-medley",
            name: "Roasted Medley",
            minutes: 45,
            difficulty: Difficulty::Easy,
            ingredients: (9, 10),
            calories_per_serving: 260,
            servings: 3,
            source: RecipeSource::Youtube,
            rating: 4.7,
            review_count: 530,
            is_suggestion: false,
        }),
    ]
}

struct RecipeSeed {
    id: &'static str,
    name: &'static str,
    minutes: u32,
    difficulty: Difficulty,
    ingredients: (u32, u32),
    calories_per_serving: u32,
    servings: u32,
    source: RecipeSource,
    rating: f32,
    review_count: u32,
    is_suggestion: bool,
}

fn recipe(seed: RecipeSeed) -> Recipe {
    let (available_ingredients, total_ingredients) = seed.ingredients;
    Recipe {
        id: seed.id.to_owned(),
        name: seed.name.to_owned(),
        image_url: format!("/images/recipes/{}.jpg", seed.id),
        cooking_time: seed.minutes,
        difficulty: seed.difficulty,
        available_ingredients,
        total_ingredients,
        expiry_priority: seed.is_suggestion,
        total_calories: seed.calories_per_serving * seed.servings,
        calories_per_serving: seed.calories_per_serving,
        servings: seed.servings,
        source: seed.source,
        video_url: None,
        original_url: None,
        rating: seed.rating,
        review_count: seed.review_count,
        is_suggestion: seed.is_suggestion,
    }
}
