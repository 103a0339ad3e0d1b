use std::env;

use recipe_aggregator::{parse_instructions, search_all, SourcesConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let query = args
        .get(1)
        .ok_or("Please provide a search term as an argument")?;

    let config = SourcesConfig::load()?;
    let results = search_all(query, &config).await;

    if results.is_empty() {
        println!("No recipes found for \"{query}\".");
        return Ok(());
    }

    println!("Found {} recipes:", results.len());
    for recipe in &results {
        println!(
            "  [{}] {} {} ({} | {})",
            recipe.source, recipe.id, recipe.title, recipe.area, recipe.category
        );
    }

    let first = &results[0];
    println!();
    println!("{}", first.title);
    println!();
    println!("Ingredients:");
    for line in &first.ingredients_list {
        println!("  - {line}");
    }
    println!();
    println!("Instructions:");
    for (i, step) in parse_instructions(&first.instructions).iter().enumerate() {
        println!("  {}. {step}", i + 1);
    }

    Ok(())
}
