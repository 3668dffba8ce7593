pub mod detect_ingredients;
