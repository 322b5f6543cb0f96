//! List CRUD routes
//!
//! Domain failures become flash messages plus a redirect (or an inline
//! re-render of the originating form); only session-layer failures turn
//! into HTTP error responses.

use actix_web::{get, post, web, HttpRequest, HttpResponse};
use log::info;
use serde::Deserialize;
use session_store::Flash;
use todo_core::{next_list_id, parse_id, resolve_list, validate_list_name, TodoError, TodoList};

use crate::error::AppError;
use crate::server::AppState;
use crate::session::{is_xhr, SessionHandle};
use crate::views;

/// Configure list routes. `/lists/new` must be registered ahead of the
/// `/lists/{list_id}` routes so the literal segment wins.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(list_lists)
        .service(new_list_form)
        .service(create_list)
        .service(edit_list_form)
        .service(show_list)
        .service(update_list)
        .service(delete_list);
}

#[derive(Deserialize)]
pub struct ListNameForm {
    pub list_name: String,
}

/// GET /
#[get("/")]
pub async fn index(session: SessionHandle) -> HttpResponse {
    session.redirect("/lists")
}

/// GET /lists - render all lists, incomplete before complete
#[get("/lists")]
pub async fn list_lists(
    state: web::Data<AppState>,
    session: SessionHandle,
) -> Result<HttpResponse, AppError> {
    let mut data = state.sessions.get_session(&session.id).await?;
    let flash = data.flash.take();
    let page = views::lists_page(&data.lists, &flash);
    state.sessions.update_session(&session.id, data).await?;
    Ok(session.html(page))
}

/// GET /lists/new - render the list-creation form
#[get("/lists/new")]
pub async fn new_list_form(
    state: web::Data<AppState>,
    session: SessionHandle,
) -> Result<HttpResponse, AppError> {
    let mut data = state.sessions.get_session(&session.id).await?;
    let flash = data.flash.take();
    let page = views::new_list_page(&flash);
    state.sessions.update_session(&session.id, data).await?;
    Ok(session.html(page))
}

/// POST /lists - create a list
#[post("/lists")]
pub async fn create_list(
    state: web::Data<AppState>,
    session: SessionHandle,
    form: web::Form<ListNameForm>,
) -> Result<HttpResponse, AppError> {
    let name = form.list_name.trim().to_string();
    let mut data = state.sessions.get_session(&session.id).await?;

    match validate_list_name(&name, &data.lists, None) {
        Ok(()) => {
            let id = next_list_id(&data.lists);
            data.lists.push(TodoList::new(id, name));
            info!("created list {id}");
            data.flash.set_success("The list has been created.");
            state.sessions.update_session(&session.id, data).await?;
            Ok(session.redirect("/lists"))
        }
        Err(err) => {
            data.flash.set_error(err.to_string());
            state.sessions.update_session(&session.id, data).await?;
            Ok(session.redirect("/lists/new"))
        }
    }
}

/// GET /lists/{list_id} - render one list
#[get("/lists/{list_id}")]
pub async fn show_list(
    state: web::Data<AppState>,
    session: SessionHandle,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let raw_id = path.into_inner();
    let mut data = state.sessions.get_session(&session.id).await?;
    let flash = data.flash.take();

    let page = match resolve_list(&mut data.lists, &raw_id) {
        Ok(list) => views::list_page(list, &flash),
        Err(err) => {
            data.flash.set_error(err.to_string());
            state.sessions.update_session(&session.id, data).await?;
            return Ok(session.redirect("/lists"));
        }
    };

    state.sessions.update_session(&session.id, data).await?;
    Ok(session.html(page))
}

/// GET /lists/{list_id}/edit - render the rename form
#[get("/lists/{list_id}/edit")]
pub async fn edit_list_form(
    state: web::Data<AppState>,
    session: SessionHandle,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let raw_id = path.into_inner();
    let mut data = state.sessions.get_session(&session.id).await?;
    let flash = data.flash.take();

    let page = match resolve_list(&mut data.lists, &raw_id) {
        Ok(list) => views::edit_list_page(list, &flash),
        Err(err) => {
            data.flash.set_error(err.to_string());
            state.sessions.update_session(&session.id, data).await?;
            return Ok(session.redirect("/lists"));
        }
    };

    state.sessions.update_session(&session.id, data).await?;
    Ok(session.html(page))
}

/// POST /lists/{list_id} - rename a list
#[post("/lists/{list_id}")]
pub async fn update_list(
    state: web::Data<AppState>,
    session: SessionHandle,
    path: web::Path<String>,
    form: web::Form<ListNameForm>,
) -> Result<HttpResponse, AppError> {
    let raw_id = path.into_inner();
    let name = form.list_name.trim().to_string();
    let mut data = state.sessions.get_session(&session.id).await?;

    // Existence first, then validation, so the duplicate check can see
    // the whole collection without aliasing the record being renamed.
    let pos = parse_id(&raw_id)
        .and_then(|id| data.lists.iter().position(|list| list.id == id));
    let Some(pos) = pos else {
        data.flash.set_error(TodoError::ListNotFound.to_string());
        state.sessions.update_session(&session.id, data).await?;
        return Ok(session.redirect("/lists"));
    };
    let id = data.lists[pos].id;

    match validate_list_name(&name, &data.lists, Some(id)) {
        Ok(()) => {
            data.lists[pos].name = name;
            info!("renamed list {id}");
            data.flash.set_success("The list has been updated.");
            state.sessions.update_session(&session.id, data).await?;
            Ok(session.redirect(&format!("/lists/{id}")))
        }
        Err(err) => {
            // Re-render the edit form; the stored flash stays untouched.
            let mut flash = Flash::default();
            flash.set_error(err.to_string());
            let page = views::edit_list_page(&data.lists[pos], &flash);
            Ok(session.html(page))
        }
    }
}

/// POST /lists/{list_id}/delete - delete a list
#[post("/lists/{list_id}/delete")]
pub async fn delete_list(
    state: web::Data<AppState>,
    session: SessionHandle,
    path: web::Path<String>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let raw_id = path.into_inner();
    let mut data = state.sessions.get_session(&session.id).await?;

    let pos = parse_id(&raw_id)
        .and_then(|id| data.lists.iter().position(|list| list.id == id));
    let Some(pos) = pos else {
        data.flash.set_error(TodoError::ListNotFound.to_string());
        state.sessions.update_session(&session.id, data).await?;
        return Ok(session.redirect("/lists"));
    };

    let removed = data.lists.remove(pos);
    info!("deleted list {} ({})", removed.id, removed.name);

    if is_xhr(&req) {
        state.sessions.update_session(&session.id, data).await?;
        Ok(session.text("/lists"))
    } else {
        data.flash.set_success(format!("'{}' was deleted", removed.name));
        state.sessions.update_session(&session.id, data).await?;
        Ok(session.redirect("/lists"))
    }
}
