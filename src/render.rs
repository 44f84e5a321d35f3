use crate::model::Recipe;

/// Render one recipe card as plain text.
pub fn render_recipe(recipe: &Recipe) -> String {
    let mut card = String::new();

    card.push_str(&format!("{}\n", recipe.title));
    card.push_str(&format!("Country: {}\n", recipe.country));
    card.push_str(&format!("Image: {}\n", recipe.image));
    card.push_str(&format!("Ingredients: {}\n", recipe.ingredients.join(", ")));
    card.push_str(&format!("Instructions: {}\n", recipe.instructions));

    match (&recipe.youtube_embed, &recipe.youtube) {
        (Some(embed), _) => card.push_str(&format!("Watch: {embed}\n")),
        (None, Some(link)) => card.push_str(&format!("Watch on YouTube: {link}\n")),
        (None, None) => card.push_str("No video available for this recipe.\n"),
    }

    card
}

/// Render the results region: all cards, or the empty-state message. The
/// same message covers "no matches" and a swallowed lookup failure.
pub fn render_results(recipes: &[Recipe]) -> String {
    if recipes.is_empty() {
        return "No recipes yet. Try searching for a dish!\n".to_string();
    }

    recipes
        .iter()
        .map(render_recipe)
        .collect::<Vec<String>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe() -> Recipe {
        Recipe {
            id: "52771".to_string(),
            title: "Spaghetti Arrabiata".to_string(),
            country: "Italian".to_string(),
            image: "https://example.com/arrabiata.jpg".to_string(),
            ingredients: vec!["penne rigate - 1 pound".to_string()],
            instructions: "Boil the pasta.".to_string(),
            youtube: None,
            youtube_embed: None,
        }
    }

    #[test]
    fn test_card_with_embed() {
        let mut recipe = recipe();
        recipe.youtube = Some("https://www.youtube.com/watch?v=abc".to_string());
        recipe.youtube_embed = Some("https://www.youtube.com/embed/abc".to_string());

        let card = render_recipe(&recipe);
        assert!(card.contains("Watch: https://www.youtube.com/embed/abc"));
        assert!(!card.contains("Watch on YouTube:"));
    }

    #[test]
    fn test_card_falls_back_to_watch_link() {
        let mut recipe = recipe();
        recipe.youtube = Some("https://youtu.be/abc".to_string());

        let card = render_recipe(&recipe);
        assert!(card.contains("Watch on YouTube: https://youtu.be/abc"));
    }

    #[test]
    fn test_card_without_any_video() {
        let card = render_recipe(&recipe());
        assert!(card.contains("No video available for this recipe."));
    }

    #[test]
    fn test_empty_results_message() {
        let output = render_results(&[]);
        assert_eq!(output, "No recipes yet. Try searching for a dish!\n");
    }

    #[test]
    fn test_results_join_cards() {
        let output = render_results(&[recipe(), recipe()]);
        assert_eq!(output.matches("Spaghetti Arrabiata").count(), 2);
    }
}
