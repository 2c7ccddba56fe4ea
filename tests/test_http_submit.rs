use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use mockito::Matcher;
use recipe_form::{
    FormShell, HistoryNavigator, IngredientField, Modal, RecipeClient, RecipeField, RecipeForm,
    SelectedFile, SourceRecipe, SubmitError,
};
use serde_json::json;

#[derive(Clone, Default)]
struct FlagModal(Arc<AtomicBool>);

impl Modal for FlagModal {
    fn close(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

fn filled_form() -> RecipeForm {
    let mut form = RecipeForm::new();
    form.set_field(RecipeField::Title, "Sernik");
    form.set_field(RecipeField::Description, "Polish cheesecake");
    form.set_field(RecipeField::Instructions, "Mix, bake, chill");
    form.set_ingredient_field(0, IngredientField::Ingredient, "twarog").unwrap();
    form.set_ingredient_field(0, IngredientField::Amount, "1").unwrap();
    form.set_ingredient_field(0, IngredientField::UnitOfMeasure, "kg").unwrap();
    form
}

#[tokio::test]
async fn test_page_submit_with_photo_navigates_to_recipe() {
    let _ = env_logger::try_init();

    let mut server = mockito::Server::new_async().await;
    let upload = server
        .mock("POST", "/api/images")
        .with_status(201)
        .with_body(r#"{"url": "https://images.example.com/sernik.jpg"}"#)
        .create_async()
        .await;
    let create = server
        .mock("POST", "/api/users/user-9/recipes")
        .match_body(Matcher::PartialJson(json!({
            "title": "Sernik",
            "photo": "https://images.example.com/sernik.jpg"
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"_id": "6401ab"}"#)
        .create_async()
        .await;

    let api = RecipeClient::builder()
        .base_url(server.url())
        .build()
        .unwrap();
    let mut form = filled_form();
    form.select_file(SelectedFile::new("sernik.jpg", b"jpeg".to_vec()));

    let mut shell = FormShell::page(HistoryNavigator::default());
    let outcome = shell.submit(&mut form, &api, "user-9").await.unwrap();

    assert_eq!(outcome.recipe.id, "6401ab");
    assert_eq!(shell.navigator().current(), Some("/recipe/6401ab"));
    upload.assert_async().await;
    create.assert_async().await;
}

#[tokio::test]
async fn test_modal_fork_closes_modal() {
    let mut server = mockito::Server::new_async().await;
    let fork = server
        .mock("POST", "/api/users/user-9/recipes/orig-1/fork")
        .match_body(Matcher::PartialJson(json!({"title": "Sernik"})))
        .with_status(201)
        .with_body(r#"{"_id": "fork-22", "source": "orig-1"}"#)
        .create_async()
        .await;
    let create = server
        .mock("POST", "/api/users/user-9/recipes")
        .expect(0)
        .create_async()
        .await;

    let api = RecipeClient::builder()
        .base_url(server.url())
        .build()
        .unwrap();
    let source = SourceRecipe {
        id: "orig-1".to_string(),
        ..Default::default()
    };
    let mut form = RecipeForm::fork_of(&source);
    let filled = filled_form();
    for field in RecipeField::ALL {
        form.set_field(field, filled.field(field));
    }
    form.set_ingredient_field(0, IngredientField::Ingredient, "twarog").unwrap();
    form.set_ingredient_field(0, IngredientField::Amount, "1").unwrap();

    let modal = FlagModal::default();
    let mut shell = FormShell::modal(HistoryNavigator::default(), modal.clone());
    shell.submit(&mut form, &api, "user-9").await.unwrap();

    assert!(modal.0.load(Ordering::SeqCst));
    assert_eq!(shell.navigator().current(), Some("/recipe/fork-22"));
    fork.assert_async().await;
    create.assert_async().await;
}

#[tokio::test]
async fn test_server_error_leaves_modal_open() {
    let mut server = mockito::Server::new_async().await;
    let _create = server
        .mock("POST", "/api/users/user-9/recipes")
        .with_status(500)
        .with_body("database unavailable")
        .create_async()
        .await;

    let api = RecipeClient::builder()
        .base_url(server.url())
        .build()
        .unwrap();
    let mut form = filled_form();
    let modal = FlagModal::default();
    let mut shell = FormShell::modal(HistoryNavigator::default(), modal.clone());

    let err = shell.submit(&mut form, &api, "user-9").await.unwrap_err();
    assert!(matches!(err, SubmitError::Api(_)));
    assert!(!modal.0.load(Ordering::SeqCst));
    assert!(shell.navigator().history.is_empty());
    assert!(form
        .errors()
        .form()
        .unwrap()
        .contains("database unavailable"));
}

#[tokio::test]
async fn test_invalid_form_never_reaches_server() {
    let mut server = mockito::Server::new_async().await;
    let any = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let api = RecipeClient::builder()
        .base_url(server.url())
        .build()
        .unwrap();
    let mut form = RecipeForm::new();
    form.select_file(SelectedFile::new("empty.png", vec![]));
    let mut shell = FormShell::page(HistoryNavigator::default());

    let err = shell.submit(&mut form, &api, "user-9").await.unwrap_err();
    assert!(matches!(err, SubmitError::Invalid(_)));
    assert!(shell.into_navigator().history.is_empty());
    any.assert_async().await;
}
