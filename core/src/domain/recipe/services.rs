use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    completion::ports::CompletionClient,
    prompt::services::compose_prompt,
    recipe::{
        entities::IngredientRecipeResponse, ports::RecipeService,
        value_objects::IngredientRecipeInput,
    },
};

impl<LLM> RecipeService for Service<LLM>
where
    LLM: CompletionClient,
{
    async fn recipes_by_ingredient(
        &self,
        input: IngredientRecipeInput,
    ) -> Result<IngredientRecipeResponse, CoreError> {
        let credential = self.credential()?;
        let prompt = compose_prompt(&input);

        self.complete_as(credential, prompt).await
    }
}

#[cfg(test)]
mod tests {
    use std::future::ready;

    use serde_json::json;

    use super::*;
    use crate::domain::{
        completion::{entities::ReplyEnvelope, ports::MockCompletionClient},
        prompt::{entities::PromptMode, services::UNKNOWN_MARKER},
        recipe::value_objects::DEFAULT_SERVINGS,
    };

    fn recipe(name: &str, calories: i64) -> serde_json::Value {
        json!({
            "name": name,
            "ingredients": ["chickpeas", "olive oil"],
            "steps": ["rinse", "roast"],
            "calories": calories,
            "nutrients": { "protein_g": 12, "carbs_g": 30, "fiber_g": 9 }
        })
    }

    fn input() -> IngredientRecipeInput {
        IngredientRecipeInput {
            ingredient: "chickpeas".to_string(),
            goal: None,
            diet_type: None,
            allergy: None,
            servings: DEFAULT_SERVINGS,
        }
    }

    fn service_replying(reply: serde_json::Value) -> Service<MockCompletionClient> {
        let payload = reply.to_string();
        let mut client = MockCompletionClient::new();
        client
            .expect_complete()
            .withf(|_, prompt| {
                prompt.mode == PromptMode::IngredientRecipes
                    && prompt.user.contains("- ingredient: chickpeas")
                    && prompt.user.contains("- servings: 1")
                    && prompt.user.contains(&format!("- allergy: {UNKNOWN_MARKER}"))
            })
            .times(1)
            .returning(move |_, _| Box::pin(ready(Ok(ReplyEnvelope::Aggregate(payload.clone())))));
        Service::new(client, Some("sk-test".to_string()))
    }

    #[tokio::test]
    async fn test_recipe_count_is_not_enforced() {
        let reply = json!({
            "ingredient": "chickpeas",
            "recipes": [recipe("Hummus", 420), recipe("Roasted chickpeas", 300)]
        });
        let service = service_replying(reply);

        let response = service.recipes_by_ingredient(input()).await.unwrap();

        assert_eq!(response.ingredient, "chickpeas");
        assert_eq!(response.recipes.len(), 2);
        assert_eq!(response.recipes[0].name, "Hummus");
        assert_eq!(response.recipes[1].steps, vec!["rinse", "roast"]);
    }

    #[tokio::test]
    async fn test_recipe_calories_above_bound_is_schema_violation() {
        let reply = json!({
            "ingredient": "chickpeas",
            "recipes": [recipe("Hummus", 420), recipe("Feast", 3001)]
        });
        let service = service_replying(reply);

        let err = service.recipes_by_ingredient(input()).await.unwrap_err();
        assert!(matches!(err, CoreError::SchemaViolation(_)));
    }

    #[tokio::test]
    async fn test_non_string_step_is_schema_violation() {
        let mut bad = recipe("Hummus", 420);
        bad["steps"] = json!([1, 2]);
        let service = service_replying(json!({ "ingredient": "chickpeas", "recipes": [bad] }));

        let err = service.recipes_by_ingredient(input()).await.unwrap_err();
        assert!(matches!(err, CoreError::SchemaViolation(_)));
    }

    #[tokio::test]
    async fn test_missing_credential_makes_no_call() {
        let mut client = MockCompletionClient::new();
        client.expect_complete().never();

        let service = Service::new(client, None);
        let err = service.recipes_by_ingredient(input()).await.unwrap_err();
        assert!(matches!(err, CoreError::Configuration(_)));
    }
}
