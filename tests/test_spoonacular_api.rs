use mockito::Matcher;
use recipe_aggregator::sources::SpoonacularClient;
use recipe_aggregator::{RecipeSource, SUMMARY_INSTRUCTIONS_FALLBACK};

#[tokio::test]
async fn test_search_results_are_summaries_with_sentinel_instructions() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/recipes/complexSearch")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("query".into(), "pasta".into()),
            Matcher::UrlEncoded("apiKey".into(), "test-key".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "results": [
                    { "id": 716429, "title": "Pasta with Garlic", "image": "https://img.spoonacular.com/recipes/716429-312x231.jpg" },
                    { "id": 715538, "title": "Bruschetta Style Pork", "image": "https://img.spoonacular.com/recipes/715538-312x231.jpg" }
                ],
                "offset": 0,
                "number": 10,
                "totalResults": 2
            }"#,
        )
        .create();

    let client = SpoonacularClient::with_base_url(server.url(), "test-key", None);
    let results = client.search("pasta").await.unwrap();

    assert_eq!(results.len(), 2);
    for recipe in &results {
        assert_eq!(recipe.source, RecipeSource::Spoonacular);
        assert_eq!(recipe.instructions, SUMMARY_INSTRUCTIONS_FALLBACK);
    }
    assert_eq!(results[0].id, "716429");
    assert_eq!(results[0].area, "Various");
    assert_eq!(results[0].category, "General");
}

#[tokio::test]
async fn test_information_returns_full_detail() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/recipes/716429/information")
        .match_query(Matcher::UrlEncoded("apiKey".into(), "test-key".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "id": 716429,
                "title": "Pasta with Garlic",
                "image": "https://img.spoonacular.com/recipes/716429-556x370.jpg",
                "cuisines": ["Mediterranean", "Italian"],
                "dishTypes": ["lunch", "main course"],
                "instructions": "Boil the pasta. Saute the garlic. Toss together.",
                "extendedIngredients": [
                    { "id": 11215, "original": "4 cloves garlic, minced" },
                    { "id": 20420, "original": "1 lb pasta" }
                ]
            }"#,
        )
        .create();

    let client = SpoonacularClient::with_base_url(server.url(), "test-key", None);
    let recipe = client.information("716429").await.unwrap();

    assert_eq!(recipe.title, "Pasta with Garlic");
    assert_eq!(recipe.area, "Mediterranean, Italian");
    assert_eq!(recipe.category, "lunch, main course");
    assert_eq!(
        recipe.ingredients_list,
        vec!["4 cloves garlic, minced", "1 lb pasta"]
    );
    assert_eq!(
        recipe.instructions,
        "Boil the pasta. Saute the garlic. Toss together."
    );
}

#[tokio::test]
async fn test_quota_exhaustion_surfaces_as_an_error() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/recipes/complexSearch")
        .match_query(Matcher::Any)
        .with_status(402)
        .create();

    let client = SpoonacularClient::with_base_url(server.url(), "test-key", None);
    assert!(client.search("pasta").await.is_err());
}
