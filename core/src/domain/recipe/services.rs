use tracing::{debug, error, info};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    ingredient::ports::IngredientDetector,
    recipe::{
        entities::{RecipeBundle, RecipeCompletion, RecipeRequest},
        policies::enforce_recipe_constraints,
        ports::{LLMClient, RecipeService},
        prompt::build_recipe_prompt,
        schema::get_recipe_bundle_schema,
    },
};

/// Parses the model's text as a bundle, or as the older bare recipe list.
pub fn parse_recipe_completion(raw_response: &str) -> Result<RecipeBundle, CoreError> {
    serde_json::from_str::<RecipeCompletion>(raw_response)
        .map(RecipeBundle::from)
        .map_err(|e| {
            error!(raw_response = %raw_response, "LLM returned invalid JSON: {}", e);
            CoreError::InvalidLLMResponse(e.to_string())
        })
}

impl<D, LLM> RecipeService for Service<D, LLM>
where
    D: IngredientDetector,
    LLM: LLMClient,
{
    fn is_llm_configured(&self) -> bool {
        self.llm_client.is_some()
    }

    async fn generate_recipes(&self, request: RecipeRequest) -> Result<RecipeBundle, CoreError> {
        let llm_client = self.llm_client.as_ref().ok_or(CoreError::LLMUnavailable)?;

        if request.available_ingredients.is_empty() {
            return Err(CoreError::InvalidInput(
                "No ingredients provided".to_string(),
            ));
        }

        if request.available_utensils.is_empty() {
            return Err(CoreError::InvalidInput("No utensils provided".to_string()));
        }

        let prompt = build_recipe_prompt(&request);
        debug!(prompt = %prompt.render(), "Recipe prompt built");

        info!(
            model = %self.llm_model,
            ingredients = request.available_ingredients.len(),
            utensils = request.available_utensils.len(),
            "Sending recipe request to LLM"
        );

        let content = prompt.constraints_text();
        let raw_response = llm_client
            .generate_with_text(prompt.instructions, content, get_recipe_bundle_schema())
            .await?;

        info!("Received recipe response from LLM");

        let bundle = parse_recipe_completion(&raw_response)?;

        enforce_recipe_constraints(&request, bundle)
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::{always, eq, function};
    use serde_json::json;

    use super::*;
    use crate::domain::{ingredient::ports::MockIngredientDetector, recipe::ports::MockLLMClient};

    fn request() -> RecipeRequest {
        RecipeRequest {
            available_ingredients: vec![
                "lentils".to_string(),
                "onion".to_string(),
                "hot sauce".to_string(),
            ],
            available_utensils: vec!["pot".to_string(), "bowl".to_string()],
            preference: "spicy".to_string(),
            budget: 5.0,
        }
    }

    fn service(llm: Option<MockLLMClient>) -> Service<MockIngredientDetector, MockLLMClient> {
        Service::new(
            MockIngredientDetector::new(),
            llm,
            "gemini-2.5-flash".to_string(),
            0.1,
        )
    }

    fn llm_answering(raw: &'static str) -> MockLLMClient {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text()
            .times(1)
            .returning(move |_, _, _| Box::pin(async move { Ok(raw.to_string()) }));
        llm
    }

    const VALID_BUNDLE: &str = r#"{
        "Title": "Here are 3 recipes! A bean burrito costs under $5.",
        "recipes": [
            {
                "name": "Spicy Lentil Soup",
                "ingredients": ["lentils", "onion", "hot sauce"],
                "cooking_time": "25 minutes",
                "utensils_used": ["pot", "bowl"],
                "steps": ["Chop onion.", "Boil lentils.", "Add hot sauce."],
                "carbon_score": 0.1
            },
            {
                "name": "Lentil Salad",
                "ingredients": ["lentils", "onion"],
                "cooking_time": "15 minutes",
                "utensils_used": ["bowl"],
                "steps": ["Boil lentils.", "Mix with onion."],
                "carbon_score": 0.15
            },
            {
                "name": "Beef Chili",
                "ingredients": ["beef", "onion", "hot sauce"],
                "cooking_time": "45 minutes",
                "utensils_used": ["pot"],
                "steps": ["Brown beef.", "Add onion.", "Simmer."],
                "carbon_score": 0.8
            }
        ]
    }"#;

    #[tokio::test]
    async fn test_without_llm_is_unavailable_even_for_invalid_body() {
        let service = service(None);
        assert!(!service.is_llm_configured());

        let result = service
            .generate_recipes(RecipeRequest {
                available_ingredients: vec![],
                available_utensils: vec![],
                preference: String::new(),
                budget: 5.0,
            })
            .await;

        assert_eq!(result, Err(CoreError::LLMUnavailable));
    }

    #[tokio::test]
    async fn test_empty_ingredients_rejected_before_llm_call() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text().never();

        let result = service(Some(llm))
            .generate_recipes(RecipeRequest {
                available_ingredients: vec![],
                ..request()
            })
            .await;

        assert_eq!(
            result,
            Err(CoreError::InvalidInput("No ingredients provided".to_string()))
        );
    }

    #[tokio::test]
    async fn test_empty_utensils_rejected_with_ingredients_present() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text().never();

        let result = service(Some(llm))
            .generate_recipes(RecipeRequest {
                available_utensils: vec![],
                ..request()
            })
            .await;

        assert_eq!(
            result,
            Err(CoreError::InvalidInput("No utensils provided".to_string()))
        );
    }

    #[tokio::test]
    async fn test_caller_data_is_sent_apart_from_instructions() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text()
            .with(
                function(|instructions: &String| !instructions.contains("spicy")),
                function(|content: &String| {
                    serde_json::from_str::<serde_json::Value>(content)
                        .map(|value| value["preference"] == json!("spicy"))
                        .unwrap_or(false)
                }),
                eq(get_recipe_bundle_schema()),
            )
            .times(1)
            .returning(|_, _, _| Box::pin(async { Ok(VALID_BUNDLE.to_string()) }));

        let result = service(Some(llm)).generate_recipes(request()).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_end_to_end_bundle_honors_constraints() {
        let request = request();
        let bundle = service(Some(llm_answering(VALID_BUNDLE)))
            .generate_recipes(request.clone())
            .await
            .unwrap();

        assert_eq!(bundle.title, "Here are 3 recipes! A bean burrito costs under $5.");
        // "Beef Chili" uses an ingredient that was never supplied
        assert_eq!(bundle.recipes.len(), 2);
        for recipe in &bundle.recipes {
            assert!(
                recipe
                    .ingredients
                    .iter()
                    .all(|i| request.available_ingredients.contains(i))
            );
            assert!((0.0..=1.0).contains(&recipe.carbon_score));
        }
    }

    #[tokio::test]
    async fn test_legacy_list_response_is_wrapped() {
        let llm = llm_answering(
            r#"[{
                "name": "Onion Lentils",
                "ingredients": ["lentils", "onion"],
                "cooking_time": "20 minutes",
                "utensils_used": ["pot"],
                "steps": ["Boil.", "Serve."],
                "preference_score": 0.9,
                "carbon_score": 0.2
            }]"#,
        );

        let bundle = service(Some(llm)).generate_recipes(request()).await.unwrap();

        assert_eq!(bundle.title, crate::domain::recipe::entities::DEFAULT_BUNDLE_TITLE);
        assert_eq!(bundle.recipes[0].name, "Onion Lentils");
    }

    #[tokio::test]
    async fn test_non_json_response_is_invalid_llm_response() {
        let result = service(Some(llm_answering("```json\nnot json at all")))
            .generate_recipes(request())
            .await;

        assert!(matches!(result, Err(CoreError::InvalidLLMResponse(_))));
    }

    #[tokio::test]
    async fn test_upstream_failure_is_propagated() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text()
            .with(always(), always(), always())
            .returning(|_, _, _| {
                Box::pin(async {
                    Err(CoreError::ExternalServiceError("quota exceeded".to_string()))
                })
            });

        let result = service(Some(llm)).generate_recipes(request()).await;

        assert_eq!(
            result,
            Err(CoreError::ExternalServiceError("quota exceeded".to_string()))
        );
    }
}
