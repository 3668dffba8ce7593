use std::collections::{HashMap, HashSet};
use std::fmt;

use tracing::warn;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::{Recipe, RecipeBundle, RecipeRequest},
        prompt::{MAX_RECIPE_INGREDIENTS, MIN_RECIPE_INGREDIENTS, RECIPES_PER_BUNDLE},
    },
};

/// Why a generated recipe was discarded.
#[derive(Debug, Clone, PartialEq)]
pub enum RecipeViolation {
    UnknownIngredient(String),
    UnknownUtensil(String),
    CarbonScoreOutOfRange(f64),
    IngredientCount(usize),
}

impl fmt::Display for RecipeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipeViolation::UnknownIngredient(name) => {
                write!(f, "uses ingredient '{}' that was not supplied", name)
            }
            RecipeViolation::UnknownUtensil(name) => {
                write!(f, "uses utensil '{}' that was not supplied", name)
            }
            RecipeViolation::CarbonScoreOutOfRange(score) => {
                write!(f, "carbon_score {} is outside [0.0, 1.0]", score)
            }
            RecipeViolation::IngredientCount(count) => {
                write!(f, "uses {} ingredients", count)
            }
        }
    }
}

fn key(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Matching key to the caller's own spelling. The first spelling wins.
fn vocabulary(values: &[String]) -> HashMap<String, String> {
    let mut vocabulary = HashMap::new();
    for value in values {
        vocabulary.entry(key(value)).or_insert_with(|| value.clone());
    }
    vocabulary
}

/// Rewrites names to the caller's spelling, dropping repeats.
fn respell(values: Vec<String>, vocabulary: &HashMap<String, String>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter_map(|value| vocabulary.get(&key(&value)).cloned())
        .filter(|value| seen.insert(value.clone()))
        .collect()
}

/// Checks one recipe against the request it was generated for.
pub fn check_recipe(
    recipe: &Recipe,
    ingredients: &HashMap<String, String>,
    utensils: &HashMap<String, String>,
) -> Result<(), RecipeViolation> {
    if let Some(unknown) = recipe
        .ingredients
        .iter()
        .find(|ingredient| !ingredients.contains_key(&key(ingredient)))
    {
        return Err(RecipeViolation::UnknownIngredient(unknown.clone()));
    }

    if let Some(unknown) = recipe
        .utensils_used
        .iter()
        .find(|utensil| !utensils.contains_key(&key(utensil)))
    {
        return Err(RecipeViolation::UnknownUtensil(unknown.clone()));
    }

    if !recipe.carbon_score.is_finite() || !(0.0..=1.0).contains(&recipe.carbon_score) {
        return Err(RecipeViolation::CarbonScoreOutOfRange(recipe.carbon_score));
    }

    // A caller with a single ingredient can still get single-ingredient recipes.
    let used = vocabulary(&recipe.ingredients).len();
    let min = MIN_RECIPE_INGREDIENTS.min(ingredients.len());
    if used < min || used > MAX_RECIPE_INGREDIENTS {
        return Err(RecipeViolation::IngredientCount(used));
    }

    Ok(())
}

/// Drops every recipe that breaks the request's hard constraints and keeps
/// at most three of the rest, in the model's ranking order. Kept recipes name
/// ingredients and utensils exactly as the request spelled them.
pub fn enforce_recipe_constraints(
    request: &RecipeRequest,
    bundle: RecipeBundle,
) -> Result<RecipeBundle, CoreError> {
    let ingredients = vocabulary(&request.available_ingredients);
    let utensils = vocabulary(&request.available_utensils);

    let recipes: Vec<Recipe> = bundle
        .recipes
        .into_iter()
        .filter(|recipe| match check_recipe(recipe, &ingredients, &utensils) {
            Ok(()) => true,
            Err(violation) => {
                warn!(recipe = %recipe.name, %violation, "Dropping generated recipe");
                false
            }
        })
        .take(RECIPES_PER_BUNDLE)
        .map(|recipe| Recipe {
            ingredients: respell(recipe.ingredients, &ingredients),
            utensils_used: respell(recipe.utensils_used, &utensils),
            ..recipe
        })
        .collect();

    if recipes.is_empty() {
        return Err(CoreError::NoValidRecipes);
    }

    Ok(RecipeBundle {
        title: bundle.title,
        recipes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    fn request() -> RecipeRequest {
        RecipeRequest {
            available_ingredients: strings(&["lentils", "onion", "hot sauce"]),
            available_utensils: strings(&["pot", "bowl"]),
            preference: "spicy".to_string(),
            budget: 5.0,
        }
    }

    fn recipe(name: &str, ingredients: &[&str], utensils: &[&str], carbon_score: f64) -> Recipe {
        Recipe {
            name: name.to_string(),
            ingredients: strings(ingredients),
            cooking_time: "20 minutes".to_string(),
            utensils_used: strings(utensils),
            steps: strings(&["Cook."]),
            carbon_score,
        }
    }

    fn bundle(recipes: Vec<Recipe>) -> RecipeBundle {
        RecipeBundle {
            title: "Here are your recipes".to_string(),
            recipes,
        }
    }

    #[test]
    fn test_valid_recipes_are_kept_in_order() {
        let result = enforce_recipe_constraints(
            &request(),
            bundle(vec![
                recipe("Soup", &["lentils", "onion"], &["pot"], 0.1),
                recipe("Salsa", &["Onion", " hot sauce"], &["BOWL"], 0.2),
            ]),
        )
        .unwrap();

        let names: Vec<_> = result.recipes.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Soup", "Salsa"]);
        assert_eq!(result.title, "Here are your recipes");
    }

    #[test]
    fn test_kept_recipes_use_the_request_spelling() {
        let request = RecipeRequest {
            available_ingredients: strings(&["lentils", "onion"]),
            ..request()
        };

        let result = enforce_recipe_constraints(
            &request,
            bundle(vec![recipe("Soup", &["LENTILS", " Onion ", "lentils"], &["POT"], 0.1)]),
        )
        .unwrap();

        let kept = &result.recipes[0];
        assert_eq!(kept.ingredients, strings(&["lentils", "onion"]));
        assert_eq!(kept.utensils_used, strings(&["pot"]));
        assert!(
            kept.ingredients
                .iter()
                .all(|i| request.available_ingredients.contains(i))
        );
        assert!(
            kept.utensils_used
                .iter()
                .all(|u| request.available_utensils.contains(u))
        );
    }

    #[test]
    fn test_recipe_with_foreign_ingredient_is_dropped() {
        let result = enforce_recipe_constraints(
            &request(),
            bundle(vec![
                recipe("Omelette", &["eggs", "onion"], &["pot"], 0.3),
                recipe("Soup", &["lentils", "onion"], &["pot"], 0.1),
            ]),
        )
        .unwrap();

        assert_eq!(result.recipes.len(), 1);
        assert_eq!(result.recipes[0].name, "Soup");
    }

    #[test]
    fn test_check_recipe_reports_violations() {
        let ingredients = vocabulary(&request().available_ingredients);
        let utensils = vocabulary(&request().available_utensils);

        assert_eq!(
            check_recipe(&recipe("A", &["lentils", "onion"], &["pan"], 0.1), &ingredients, &utensils),
            Err(RecipeViolation::UnknownUtensil("pan".to_string()))
        );
        assert_eq!(
            check_recipe(&recipe("B", &["lentils", "onion"], &["pot"], 1.4), &ingredients, &utensils),
            Err(RecipeViolation::CarbonScoreOutOfRange(1.4))
        );
        assert_eq!(
            check_recipe(&recipe("C", &["lentils"], &["pot"], 0.1), &ingredients, &utensils),
            Err(RecipeViolation::IngredientCount(1))
        );
        assert!(matches!(
            check_recipe(&recipe("D", &["lentils", "onion"], &["pot"], f64::NAN), &ingredients, &utensils),
            Err(RecipeViolation::CarbonScoreOutOfRange(_))
        ));
    }

    #[test]
    fn test_single_ingredient_pantry_allows_single_ingredient_recipes() {
        let request = RecipeRequest {
            available_ingredients: strings(&["potato"]),
            ..request()
        };

        let result = enforce_recipe_constraints(
            &request,
            bundle(vec![recipe("Baked Potato", &["potato"], &["pot"], 0.2)]),
        );

        assert!(result.is_ok());
    }

    #[test]
    fn test_bundle_is_truncated_to_three() {
        let recipes = (0..5)
            .map(|i| recipe(&format!("Soup {i}"), &["lentils", "onion"], &["pot"], 0.1))
            .collect();

        let result = enforce_recipe_constraints(&request(), bundle(recipes)).unwrap();

        assert_eq!(result.recipes.len(), 3);
        assert_eq!(result.recipes[2].name, "Soup 2");
    }

    #[test]
    fn test_nothing_valid_is_an_error() {
        let result = enforce_recipe_constraints(
            &request(),
            bundle(vec![recipe("Steak", &["beef", "butter"], &["grill"], 0.9)]),
        );

        assert_eq!(result, Err(CoreError::NoValidRecipes));
    }
}
