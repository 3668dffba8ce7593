use serde_json::json;

/// Returns the JSON schema for recipe bundle LLM responses
pub fn get_recipe_bundle_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "Title": { "type": "string" },
            "recipes": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "ingredients": {
                            "type": "array",
                            "items": { "type": "string" }
                        },
                        "cooking_time": { "type": "string" },
                        "utensils_used": {
                            "type": "array",
                            "items": { "type": "string" }
                        },
                        "steps": {
                            "type": "array",
                            "items": { "type": "string" }
                        },
                        "carbon_score": { "type": "number" }
                    },
                    "required": [
                        "name", "ingredients", "cooking_time",
                        "utensils_used", "steps", "carbon_score"
                    ]
                }
            }
        },
        "required": ["Title", "recipes"]
    })
}
