//! Todo routes, scoped under a parent list

use actix_web::{post, web, HttpRequest, HttpResponse};
use log::info;
use serde::Deserialize;
use session_store::Flash;
use todo_core::{parse_id, resolve_list, resolve_todo, validate_todo_name, Todo, TodoError};

use crate::error::AppError;
use crate::server::AppState;
use crate::session::{is_xhr, SessionHandle};
use crate::views;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(create_todo)
        .service(complete_all_todos)
        .service(set_todo_completed)
        .service(delete_todo);
}

#[derive(Deserialize)]
pub struct TodoForm {
    pub todo: String,
}

#[derive(Deserialize)]
pub struct CompletedForm {
    pub completed: String,
}

/// POST /lists/{list_id}/todos - add a todo to a list
#[post("/lists/{list_id}/todos")]
pub async fn create_todo(
    state: web::Data<AppState>,
    session: SessionHandle,
    path: web::Path<String>,
    form: web::Form<TodoForm>,
) -> Result<HttpResponse, AppError> {
    let raw_id = path.into_inner();
    let name = form.todo.trim().to_string();
    let mut data = state.sessions.get_session(&session.id).await?;

    match resolve_list(&mut data.lists, &raw_id) {
        Ok(list) => match validate_todo_name(&name) {
            Ok(()) => {
                let todo_id = list.next_todo_id();
                let list_id = list.id;
                list.todos.push(Todo::new(todo_id, name));
                info!("added todo {todo_id} to list {list_id}");
                data.flash.set_success("New todo added");
                state.sessions.update_session(&session.id, data).await?;
                Ok(session.redirect(&format!("/lists/{list_id}")))
            }
            Err(err) => {
                // Re-render the list view; the stored flash stays untouched.
                let mut flash = Flash::default();
                flash.set_error(err.to_string());
                let page = views::list_page(list, &flash);
                Ok(session.html(page))
            }
        },
        Err(err) => {
            data.flash.set_error(err.to_string());
            state.sessions.update_session(&session.id, data).await?;
            Ok(session.redirect("/lists"))
        }
    }
}

/// POST /lists/{list_id}/todos/{todo_id} - set a todo's completion state
#[post("/lists/{list_id}/todos/{todo_id}")]
pub async fn set_todo_completed(
    state: web::Data<AppState>,
    session: SessionHandle,
    path: web::Path<(String, String)>,
    form: web::Form<CompletedForm>,
) -> Result<HttpResponse, AppError> {
    let (raw_list_id, raw_todo_id) = path.into_inner();
    let completed = form.completed == "true";
    let mut data = state.sessions.get_session(&session.id).await?;

    match resolve_list(&mut data.lists, &raw_list_id) {
        Ok(list) => {
            let list_id = list.id;
            match resolve_todo(list, &raw_todo_id) {
                Ok(todo) => {
                    todo.completed = completed;
                    data.flash.set_success("The todo has been updated");
                }
                Err(err) => {
                    data.flash.set_error(err.to_string());
                }
            }
            state.sessions.update_session(&session.id, data).await?;
            Ok(session.redirect(&format!("/lists/{list_id}")))
        }
        Err(err) => {
            data.flash.set_error(err.to_string());
            state.sessions.update_session(&session.id, data).await?;
            Ok(session.redirect("/lists"))
        }
    }
}

/// POST /lists/{list_id}/todos/{todo_id}/delete - delete a todo
#[post("/lists/{list_id}/todos/{todo_id}/delete")]
pub async fn delete_todo(
    state: web::Data<AppState>,
    session: SessionHandle,
    path: web::Path<(String, String)>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let (raw_list_id, raw_todo_id) = path.into_inner();
    let mut data = state.sessions.get_session(&session.id).await?;

    match resolve_list(&mut data.lists, &raw_list_id) {
        Ok(list) => {
            let list_id = list.id;
            let pos = parse_id(&raw_todo_id)
                .and_then(|id| list.todos.iter().position(|todo| todo.id == id));
            let Some(pos) = pos else {
                data.flash.set_error(TodoError::TodoNotFound.to_string());
                state.sessions.update_session(&session.id, data).await?;
                return Ok(session.redirect(&format!("/lists/{list_id}")));
            };

            let removed = list.todos.remove(pos);
            info!("deleted todo {} from list {list_id}", removed.id);

            if is_xhr(&req) {
                state.sessions.update_session(&session.id, data).await?;
                Ok(session.no_content())
            } else {
                data.flash.set_success(format!("'{}' was deleted", removed.name));
                state.sessions.update_session(&session.id, data).await?;
                Ok(session.redirect(&format!("/lists/{list_id}")))
            }
        }
        Err(err) => {
            data.flash.set_error(err.to_string());
            state.sessions.update_session(&session.id, data).await?;
            Ok(session.redirect("/lists"))
        }
    }
}

/// POST /lists/{list_id}/complete_todos - mark every todo complete
#[post("/lists/{list_id}/complete_todos")]
pub async fn complete_all_todos(
    state: web::Data<AppState>,
    session: SessionHandle,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let raw_id = path.into_inner();
    let mut data = state.sessions.get_session(&session.id).await?;

    match resolve_list(&mut data.lists, &raw_id) {
        Ok(list) => {
            let list_id = list.id;
            for todo in &mut list.todos {
                todo.completed = true;
            }
            data.flash.set_success("All todos complete");
            state.sessions.update_session(&session.id, data).await?;
            Ok(session.redirect(&format!("/lists/{list_id}")))
        }
        Err(err) => {
            data.flash.set_error(err.to_string());
            state.sessions.update_session(&session.id, data).await?;
            Ok(session.redirect("/lists"))
        }
    }
}
