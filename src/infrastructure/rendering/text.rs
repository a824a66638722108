//! Plain-text shopping list rendering.

use super::capitalize;
use crate::domain::entities::ShoppingList;

/// Renders the list as a UTF-8 text document.
///
/// Layout: a dated header, the numbered recipe names, then the numbered
/// aggregated ingredient lines ("Name: total unit"). An empty cart still
/// produces the header and section labels.
pub fn render(list: &ShoppingList) -> String {
    let mut lines = Vec::with_capacity(list.recipes.len() + list.items.len() + 3);

    lines.push(format!(
        "Shopping list from {}\n",
        list.generated_at.format("%Y-%m-%d %H:%M")
    ));

    lines.push("Recipes:".to_string());
    for (index, recipe) in list.recipes.iter().enumerate() {
        lines.push(format!("{}. {}", index + 1, recipe));
    }

    lines.push("\nIngredients:".to_string());
    for (index, item) in list.items.iter().enumerate() {
        lines.push(format!(
            "{}. {}: {} {}",
            index + 1,
            capitalize(&item.name),
            item.total_amount,
            item.measurement_unit
        ));
    }

    lines.join("\n")
}
