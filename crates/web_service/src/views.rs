//! Server-rendered HTML views
//!
//! Pages are assembled as strings inside a shared layout. User-supplied
//! names are always escaped. Lists and todos are presented incomplete
//! first via the stable partition helper; storage order is untouched.

use session_store::Flash;
use todo_core::{partition_by_completion, TodoList};

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn flash_block(flash: &Flash) -> String {
    let mut block = String::new();
    if let Some(message) = &flash.error {
        block.push_str(&format!(
            "<div class=\"flash error\"><p>{}</p></div>\n",
            escape(message)
        ));
    }
    if let Some(message) = &flash.success {
        block.push_str(&format!(
            "<div class=\"flash success\"><p>{}</p></div>\n",
            escape(message)
        ));
    }
    block
}

fn layout(title: &str, flash: &Flash, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n</head>\n<body>\n<header><h1>Todo Tracker</h1></header>\n\
         {flash}<main>\n{body}\n</main>\n</body>\n</html>\n",
        title = escape(title),
        flash = flash_block(flash),
        body = body,
    )
}

/// GET /lists
pub fn lists_page(lists: &[TodoList], flash: &Flash) -> String {
    let mut body = String::from("<h2>Lists</h2>\n<ul id=\"lists\">\n");
    for list in partition_by_completion(lists, TodoList::is_completed) {
        let class = if list.is_completed() { " class=\"complete\"" } else { "" };
        body.push_str(&format!(
            "<li{class}><a href=\"/lists/{id}\">{name}</a>\
             <p>{open} / {total}</p></li>\n",
            id = list.id,
            name = escape(&list.name),
            open = list.incomplete_count(),
            total = list.todo_count(),
        ));
    }
    body.push_str("</ul>\n<a href=\"/lists/new\" id=\"new_list\">New List</a>\n");
    layout("All Lists", flash, &body)
}

/// GET /lists/new
pub fn new_list_page(flash: &Flash) -> String {
    let body = "<h2>Start a new list</h2>\n\
                <form action=\"/lists\" method=\"post\">\n\
                <label for=\"list_name\">Enter the name for your new list:</label>\n\
                <input type=\"text\" id=\"list_name\" name=\"list_name\">\n\
                <button type=\"submit\">Save</button>\n\
                </form>\n\
                <a href=\"/lists\">Cancel</a>\n";
    layout("New List", flash, body)
}

/// GET /lists/{list_id}/edit (also re-rendered on rename errors)
pub fn edit_list_page(list: &TodoList, flash: &Flash) -> String {
    let body = format!(
        "<h2>Editing '{name}'</h2>\n\
         <form action=\"/lists/{id}\" method=\"post\">\n\
         <label for=\"list_name\">Enter the new name:</label>\n\
         <input type=\"text\" id=\"list_name\" name=\"list_name\" value=\"{name}\">\n\
         <button type=\"submit\">Save</button>\n\
         </form>\n\
         <form action=\"/lists/{id}/delete\" method=\"post\" class=\"delete\">\n\
         <button type=\"submit\">Delete List</button>\n\
         </form>\n\
         <a href=\"/lists/{id}\">Cancel</a>\n",
        id = list.id,
        name = escape(&list.name),
    );
    layout("Edit List", flash, &body)
}

/// GET /lists/{list_id} (also re-rendered on new-todo errors)
pub fn list_page(list: &TodoList, flash: &Flash) -> String {
    let mut body = format!(
        "<h2>{name}</h2>\n\
         <a href=\"/lists/{id}/edit\">Edit List</a>\n\
         <form action=\"/lists/{id}/complete_todos\" method=\"post\" class=\"complete_all\">\n\
         <button type=\"submit\">Complete All</button>\n\
         </form>\n\
         <ul id=\"todos\">\n",
        id = list.id,
        name = escape(&list.name),
    );

    for todo in partition_by_completion(&list.todos, |todo| todo.completed) {
        let class = if todo.completed { " class=\"complete\"" } else { "" };
        body.push_str(&format!(
            "<li{class}>\n\
             <form action=\"/lists/{list_id}/todos/{id}\" method=\"post\" class=\"check\">\n\
             <input type=\"hidden\" name=\"completed\" value=\"{next_state}\">\n\
             <button type=\"submit\">{label}</button>\n\
             </form>\n\
             <h3>{name}</h3>\n\
             <form action=\"/lists/{list_id}/todos/{id}/delete\" method=\"post\" class=\"delete\">\n\
             <button type=\"submit\">Delete</button>\n\
             </form>\n\
             </li>\n",
            list_id = list.id,
            id = todo.id,
            name = escape(&todo.name),
            next_state = !todo.completed,
            label = if todo.completed { "Reopen" } else { "Complete" },
        ));
    }

    body.push_str(&format!(
        "</ul>\n\
         <form action=\"/lists/{id}/todos\" method=\"post\">\n\
         <label for=\"todo\">Enter a new todo item:</label>\n\
         <input type=\"text\" id=\"todo\" name=\"todo\">\n\
         <button type=\"submit\">Add</button>\n\
         </form>\n",
        id = list.id,
    ));

    layout(&list.name, flash, &body)
}
