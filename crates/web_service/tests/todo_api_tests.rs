//! HTTP tests for the todo routes

use actix_web::{
    cookie::Cookie,
    dev::{Service, ServiceResponse},
    http::header,
    test, web, App,
};
use web_service::server::{app_config, AppState};

async fn create_test_app() -> impl Service<
    actix_http::Request,
    Response = ServiceResponse,
    Error = actix_web::Error,
> {
    let state = web::Data::new(AppState::new());
    test::init_service(App::new().app_data(state).configure(app_config)).await
}

fn session_cookie() -> Cookie<'static> {
    Cookie::new("todo_session", "test-session")
}

async fn post_form(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
    uri: &str,
    form: &[(&str, &str)],
) -> ServiceResponse {
    let req = test::TestRequest::post()
        .uri(uri)
        .cookie(session_cookie())
        .set_form(form)
        .to_request();
    test::call_service(app, req).await
}

async fn read_page(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
    uri: &str,
) -> String {
    let req = test::TestRequest::get()
        .uri(uri)
        .cookie(session_cookie())
        .to_request();
    let body = test::call_and_read_body(app, req).await;
    String::from_utf8(body.to_vec()).unwrap()
}

fn location(resp: &ServiceResponse) -> &str {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
}

#[actix_web::test]
async fn test_add_todo() {
    let app = create_test_app().await;

    post_form(&app, "/lists", &[("list_name", "Groceries")]).await;
    let resp = post_form(&app, "/lists/1/todos", &[("todo", "Milk")]).await;
    assert!(resp.status().is_redirection());
    assert_eq!(location(&resp), "/lists/1");

    let page = read_page(&app, "/lists/1").await;
    assert!(page.contains("Milk"));
    assert!(page.contains("New todo added"));
}

#[actix_web::test]
async fn test_add_todo_rejects_invalid_length() {
    let app = create_test_app().await;

    post_form(&app, "/lists", &[("list_name", "Groceries")]).await;

    let long_name = "x".repeat(101);
    let resp = post_form(&app, "/lists/1/todos", &[("todo", &long_name)]).await;
    // Validation errors re-render the list view inline
    assert!(resp.status().is_success());
    let body = test::read_body(resp).await;
    let page = String::from_utf8(body.to_vec()).unwrap();
    assert!(page.contains("Todo must be between 1 and 100 characters long"));
}

#[actix_web::test]
async fn test_add_todo_to_unknown_list_redirects() {
    let app = create_test_app().await;

    let resp = post_form(&app, "/lists/9/todos", &[("todo", "Milk")]).await;
    assert!(resp.status().is_redirection());
    assert_eq!(location(&resp), "/lists");
}

#[actix_web::test]
async fn test_toggle_todo_completion() {
    let app = create_test_app().await;

    post_form(&app, "/lists", &[("list_name", "Groceries")]).await;
    post_form(&app, "/lists/1/todos", &[("todo", "Milk")]).await;

    let resp = post_form(&app, "/lists/1/todos/1", &[("completed", "true")]).await;
    assert_eq!(location(&resp), "/lists/1");

    let page = read_page(&app, "/lists/1").await;
    assert!(page.contains("class=\"complete\""));
    assert!(page.contains("Reopen"));

    // Anything other than "true" reopens the todo
    post_form(&app, "/lists/1/todos/1", &[("completed", "false")]).await;
    let page = read_page(&app, "/lists/1").await;
    assert!(!page.contains("class=\"complete\""));
}

#[actix_web::test]
async fn test_list_completion_tracks_todos() {
    let app = create_test_app().await;

    // Empty session: create "Groceries", add "Milk" and "Eggs"
    post_form(&app, "/lists", &[("list_name", "Groceries")]).await;
    post_form(&app, "/lists/1/todos", &[("todo", "Milk")]).await;
    post_form(&app, "/lists/1/todos", &[("todo", "Eggs")]).await;

    // Milk done: one of two remains, list still open
    post_form(&app, "/lists/1/todos/1", &[("completed", "true")]).await;
    let page = read_page(&app, "/lists").await;
    assert!(page.contains("1 / 2"));
    assert!(!page.contains("class=\"complete\""));

    // Eggs done: list is complete
    post_form(&app, "/lists/1/todos/2", &[("completed", "true")]).await;
    let page = read_page(&app, "/lists").await;
    assert!(page.contains("0 / 2"));
    assert!(page.contains("class=\"complete\""));
}

#[actix_web::test]
async fn test_complete_all_todos() {
    let app = create_test_app().await;

    post_form(&app, "/lists", &[("list_name", "Groceries")]).await;
    post_form(&app, "/lists/1/todos", &[("todo", "Milk")]).await;
    post_form(&app, "/lists/1/todos", &[("todo", "Eggs")]).await;

    let resp = post_form(&app, "/lists/1/complete_todos", &[]).await;
    assert_eq!(location(&resp), "/lists/1");

    let page = read_page(&app, "/lists/1").await;
    assert!(page.contains("All todos complete"));
    assert!(!page.contains(">Complete</button>"));
}

#[actix_web::test]
async fn test_delete_todo() {
    let app = create_test_app().await;

    post_form(&app, "/lists", &[("list_name", "Groceries")]).await;
    post_form(&app, "/lists/1/todos", &[("todo", "Milk")]).await;

    let resp = post_form(&app, "/lists/1/todos/1/delete", &[]).await;
    assert!(resp.status().is_redirection());
    assert_eq!(location(&resp), "/lists/1");

    let page = read_page(&app, "/lists/1").await;
    assert!(page.contains("&#39;Milk&#39; was deleted"));
    assert!(!page.contains("<h3>Milk</h3>"));
}

#[actix_web::test]
async fn test_delete_todo_ajax_returns_no_content() {
    let app = create_test_app().await;

    post_form(&app, "/lists", &[("list_name", "Groceries")]).await;
    post_form(&app, "/lists/1/todos", &[("todo", "Milk")]).await;

    let req = test::TestRequest::post()
        .uri("/lists/1/todos/1/delete")
        .cookie(session_cookie())
        .insert_header(("X-Requested-With", "XMLHttpRequest"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 204);
}

#[actix_web::test]
async fn test_unknown_todo_redirects_to_parent_list() {
    let app = create_test_app().await;

    post_form(&app, "/lists", &[("list_name", "Groceries")]).await;

    let resp = post_form(&app, "/lists/1/todos/42", &[("completed", "true")]).await;
    assert!(resp.status().is_redirection());
    assert_eq!(location(&resp), "/lists/1");

    let page = read_page(&app, "/lists/1").await;
    assert!(page.contains("The specified todo was not found"));
}

#[actix_web::test]
async fn test_deleted_todo_id_is_never_reused() {
    let app = create_test_app().await;

    post_form(&app, "/lists", &[("list_name", "Groceries")]).await;
    post_form(&app, "/lists/1/todos", &[("todo", "Milk")]).await;
    post_form(&app, "/lists/1/todos/1/delete", &[]).await;
    post_form(&app, "/lists/1/todos", &[("todo", "Eggs")]).await;

    let page = read_page(&app, "/lists/1").await;
    assert!(page.contains("/lists/1/todos/2"));
    assert!(!page.contains("/lists/1/todos/1\""));
}
