mod common;

use sqlx::PgPool;
use std::sync::Arc;

use foodgram_backend::domain::entities::{IngredientAmount, NewRecipe, RecipeDraft};
use foodgram_backend::domain::repositories::{RecipeFilter, RecipeRepository};
use foodgram_backend::error::AppError;
use foodgram_backend::infrastructure::persistence::PgRecipeRepository;

fn new_recipe(author_id: i64, name: &str, code: &str) -> NewRecipe {
    NewRecipe {
        author_id,
        name: name.to_string(),
        instructions: "Cook it well.".to_string(),
        image: "/media/recipes/test.png".to_string(),
        cooking_time: 15,
        short_code: code.to_string(),
        ingredients: Vec::new(),
        tag_ids: Vec::new(),
    }
}

#[sqlx::test]
async fn test_create_with_joins(pool: PgPool) {
    let author = common::create_test_user(&pool, "chef").await;
    let tag = common::create_test_tag(&pool, "Dinner", "dinner").await;
    let beef = common::create_test_ingredient(&pool, "beef", "g").await;
    let repo = PgRecipeRepository::new(Arc::new(pool));

    let mut draft = new_recipe(author, "Goulash", "repcode1");
    draft.ingredients = vec![IngredientAmount {
        ingredient_id: beef,
        amount: 30,
    }];
    draft.tag_ids = vec![tag];

    let recipe = repo.create(draft).await.unwrap();

    assert_eq!(recipe.name, "Goulash");
    assert_eq!(recipe.author_id, Some(author));
    assert_eq!(recipe.short_code, "repcode1");

    let ingredients = repo.ingredients_for(&[recipe.id]).await.unwrap();
    assert_eq!(ingredients.len(), 1);
    assert_eq!(ingredients[0].0, recipe.id);
    assert_eq!(ingredients[0].1.name, "beef");
    assert_eq!(ingredients[0].1.amount, 30);

    let tags = repo.tags_for(&[recipe.id]).await.unwrap();
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].1.slug, "dinner");
}

#[sqlx::test]
async fn test_create_duplicate_name_for_author(pool: PgPool) {
    let author = common::create_test_user(&pool, "chef").await;
    let repo = PgRecipeRepository::new(Arc::new(pool));

    repo.create(new_recipe(author, "Goulash", "repcode2"))
        .await
        .unwrap();
    let result = repo.create(new_recipe(author, "Goulash", "repcode3")).await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
}

#[sqlx::test]
async fn test_same_name_different_authors(pool: PgPool) {
    let chef = common::create_test_user(&pool, "chef").await;
    let baker = common::create_test_user(&pool, "baker").await;
    let repo = PgRecipeRepository::new(Arc::new(pool));

    repo.create(new_recipe(chef, "Goulash", "repcode4"))
        .await
        .unwrap();
    let result = repo.create(new_recipe(baker, "Goulash", "repcode5")).await;

    assert!(result.is_ok());
}

#[sqlx::test]
async fn test_update_replaces_join_rows(pool: PgPool) {
    let author = common::create_test_user(&pool, "chef").await;
    let tag = common::create_test_tag(&pool, "Dinner", "dinner").await;
    let beef = common::create_test_ingredient(&pool, "beef", "g").await;
    let onion = common::create_test_ingredient(&pool, "onion", "pcs").await;
    let repo = PgRecipeRepository::new(Arc::new(pool));

    let mut draft = new_recipe(author, "Goulash", "repcode6");
    draft.ingredients = vec![IngredientAmount {
        ingredient_id: beef,
        amount: 30,
    }];
    draft.tag_ids = vec![tag];
    let recipe = repo.create(draft).await.unwrap();

    let updated = repo
        .update(
            recipe.id,
            RecipeDraft {
                name: "Rich Goulash".to_string(),
                instructions: "Simmer longer.".to_string(),
                image: "/media/recipes/test.png".to_string(),
                cooking_time: 90,
                ingredients: vec![IngredientAmount {
                    ingredient_id: onion,
                    amount: 2,
                }],
                tag_ids: vec![tag],
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Rich Goulash");
    assert_eq!(updated.cooking_time, 90);

    let ingredients = repo.ingredients_for(&[recipe.id]).await.unwrap();
    assert_eq!(ingredients.len(), 1);
    assert_eq!(ingredients[0].1.name, "onion");
}

#[sqlx::test]
async fn test_update_unknown_recipe(pool: PgPool) {
    let repo = PgRecipeRepository::new(Arc::new(pool));

    let result = repo
        .update(
            999999,
            RecipeDraft {
                name: "Ghost".to_string(),
                instructions: "None.".to_string(),
                image: "/media/recipes/test.png".to_string(),
                cooking_time: 5,
                ingredients: Vec::new(),
                tag_ids: Vec::new(),
            },
        )
        .await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
}

#[sqlx::test]
async fn test_delete(pool: PgPool) {
    let author = common::create_test_user(&pool, "chef").await;
    let repo = PgRecipeRepository::new(Arc::new(pool));

    let recipe = repo
        .create(new_recipe(author, "Goulash", "repcode7"))
        .await
        .unwrap();

    assert!(repo.delete(recipe.id).await.unwrap());
    assert!(!repo.delete(recipe.id).await.unwrap());
    assert!(repo.find_by_id(recipe.id).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_find_by_short_code(pool: PgPool) {
    let author = common::create_test_user(&pool, "chef").await;
    let repo = PgRecipeRepository::new(Arc::new(pool));

    let created = repo
        .create(new_recipe(author, "Goulash", "findcode"))
        .await
        .unwrap();

    let found = repo.find_by_short_code("findcode").await.unwrap();
    assert_eq!(found.unwrap().id, created.id);

    assert!(repo.find_by_short_code("missing1").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_list_filters_by_tag_slugs(pool: PgPool) {
    let author = common::create_test_user(&pool, "chef").await;
    let breakfast = common::create_test_tag(&pool, "Breakfast", "breakfast").await;
    let dinner = common::create_test_tag(&pool, "Dinner", "dinner").await;
    let repo = PgRecipeRepository::new(Arc::new(pool.clone()));

    let both = repo
        .create(new_recipe(author, "Omelette", "lstcode1"))
        .await
        .unwrap();
    common::tag_recipe(&pool, both.id, breakfast).await;
    common::tag_recipe(&pool, both.id, dinner).await;

    let steak = repo
        .create(new_recipe(author, "Steak", "lstcode2"))
        .await
        .unwrap();
    common::tag_recipe(&pool, steak.id, dinner).await;

    repo.create(new_recipe(author, "Water", "lstcode3"))
        .await
        .unwrap();

    let filter = RecipeFilter {
        tag_slugs: vec!["breakfast".to_string(), "dinner".to_string()],
        ..Default::default()
    };

    let recipes = repo.list(&filter, 0, 10).await.unwrap();
    assert_eq!(recipes.len(), 2);
    assert_eq!(repo.count(&filter).await.unwrap(), 2);
}

#[sqlx::test]
async fn test_list_filters_by_favorites_and_cart(pool: PgPool) {
    let author = common::create_test_user(&pool, "chef").await;
    let viewer = common::create_test_user(&pool, "viewer").await;
    let repo = PgRecipeRepository::new(Arc::new(pool.clone()));

    let liked = repo
        .create(new_recipe(author, "Soup", "lstcode4"))
        .await
        .unwrap();
    let in_cart = repo
        .create(new_recipe(author, "Bread", "lstcode5"))
        .await
        .unwrap();
    common::add_favorite(&pool, viewer, liked.id).await;
    common::add_cart_item(&pool, viewer, in_cart.id).await;

    let favorited = repo
        .list(
            &RecipeFilter {
                favorited_by: Some(viewer),
                ..Default::default()
            },
            0,
            10,
        )
        .await
        .unwrap();
    assert_eq!(favorited.len(), 1);
    assert_eq!(favorited[0].id, liked.id);

    let carted = repo
        .list(
            &RecipeFilter {
                in_cart_of: Some(viewer),
                ..Default::default()
            },
            0,
            10,
        )
        .await
        .unwrap();
    assert_eq!(carted.len(), 1);
    assert_eq!(carted[0].id, in_cart.id);
}

#[sqlx::test]
async fn test_list_is_newest_first(pool: PgPool) {
    let author = common::create_test_user(&pool, "chef").await;
    let repo = PgRecipeRepository::new(Arc::new(pool));

    for i in 1..=3 {
        repo.create(new_recipe(author, &format!("Dish {i}"), &format!("ordcode{i}")))
            .await
            .unwrap();
    }

    let recipes = repo
        .list(&RecipeFilter::default(), 0, 10)
        .await
        .unwrap();

    let names: Vec<&str> = recipes.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Dish 3", "Dish 2", "Dish 1"]);
}

#[sqlx::test]
async fn test_summaries_by_author_capped(pool: PgPool) {
    let author = common::create_test_user(&pool, "chef").await;
    let repo = PgRecipeRepository::new(Arc::new(pool));

    for i in 1..=4 {
        repo.create(new_recipe(author, &format!("Dish {i}"), &format!("sumcode{i}")))
            .await
            .unwrap();
    }

    let summaries = repo.summaries_by_author(author, 2).await.unwrap();
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].name, "Dish 4");

    assert_eq!(repo.count_by_author(author).await.unwrap(), 4);
}
