//! Aggregated shopping list produced from a user's cart.

use chrono::{DateTime, Utc};

/// One aggregated line: an ingredient with its summed amount.
///
/// `total_amount` is an exact integer sum over every cart recipe that
/// references the ingredient. Lines are keyed by ingredient record, so
/// "pepper (g)" and "pepper (pcs)" stay separate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingListItem {
    pub name: String,
    pub measurement_unit: String,
    pub total_amount: i64,
}

/// The document model handed to the TXT/PDF renderers.
///
/// `recipes` holds the distinct names of cart recipes, alphabetically;
/// `items` is ordered by name, unit, then ingredient id, so repeated
/// generation over an unchanged cart yields identical documents.
#[derive(Debug, Clone)]
pub struct ShoppingList {
    pub generated_at: DateTime<Utc>,
    pub recipes: Vec<String>,
    pub items: Vec<ShoppingListItem>,
}

impl ShoppingList {
    /// True when the cart had no recipes. An empty list still renders as
    /// a valid document.
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty() && self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list() {
        let list = ShoppingList {
            generated_at: Utc::now(),
            recipes: vec![],
            items: vec![],
        };
        assert!(list.is_empty());
    }

    #[test]
    fn test_non_empty_list() {
        let list = ShoppingList {
            generated_at: Utc::now(),
            recipes: vec!["Borscht".to_string()],
            items: vec![ShoppingListItem {
                name: "beet".to_string(),
                measurement_unit: "g".to_string(),
                total_amount: 400,
            }],
        };
        assert!(!list.is_empty());
        assert_eq!(list.items[0].total_amount, 400);
    }
}
