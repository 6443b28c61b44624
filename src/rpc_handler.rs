//! RPC method handler for the Linkshelf JSON-RPC protocol.
//!
//! Kept apart from `rpc_server.rs` so it can be unit-tested without stdio.
//! `handle_method` dispatches one call to the `App` and renders the answer as JSON.

use std::sync::Mutex;

use serde_json::{json, Value};

use crate::app::App;
use crate::managers::link_store::LinkStoreTrait;
use crate::services::notification::NotificationQueue;
use crate::types::draft::DraftField;
use crate::types::errors::{FieldError, LinkError};
use crate::types::link::{Category, LinkId};

fn str_param<'a>(params: &'a Value, name: &str) -> Result<&'a str, String> {
    params
        .get(name)
        .and_then(|v| v.as_str())
        .ok_or_else(|| format!("missing {}", name))
}

fn id_param(params: &Value) -> Result<LinkId, String> {
    str_param(params, "id").map(LinkId::from)
}

fn form_state(app: &App) -> Value {
    json!({
        "open": app.is_dialog_open(),
        "editing": app.is_editing(),
        "title": app.dialog_title(),
        "submit_label": app.submit_label(),
        "draft": app.draft(),
    })
}

/// Dispatch a JSON-RPC method call.
///
/// `notifications` is the queue the app's sink writes into; it is drained by
/// `notifications.drain`. Returns `Ok(Value)` on success or `Err(String)`
/// with an error message.
pub fn handle_method(
    app: &Mutex<App>,
    notifications: &NotificationQueue,
    method: &str,
    params: &Value,
) -> Result<Value, String> {
    match method {
        "ping" => Ok(json!({"pong": true})),

        "category.list" => {
            let arr: Vec<Value> = Category::ALL
                .iter()
                .map(|c| json!({"key": c.as_str(), "label": c.label()}))
                .collect();
            Ok(json!(arr))
        }

        // ─── Links ───
        "link.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            Ok(json!({"items": a.links(), "total": a.links().len()}))
        }
        "link.get" => {
            let id = id_param(params)?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let link = a
                .store()
                .get(&id)
                .ok_or_else(|| LinkError::NotFound(id.to_string()).to_string())?;
            Ok(json!(link))
        }
        "link.by_category" => {
            let category: Category = str_param(params, "category")?
                .parse()
                .map_err(|e: FieldError| e.to_string())?;
            let a = app.lock().map_err(|e| e.to_string())?;
            Ok(json!(a.store().filter_by_category(category)))
        }
        "link.delete" => {
            let id = id_param(params)?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let removed = a.delete(&id);
            Ok(json!({"ok": true, "removed": removed.is_some()}))
        }
        "link.open" => {
            let id = id_param(params)?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let url = a.open_link(&id).map_err(|e| e.to_string())?;
            Ok(json!({"url": url}))
        }

        // ─── Form ───
        "form.create" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.begin_create();
            Ok(form_state(&a))
        }
        "form.edit" => {
            let id = id_param(params)?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.begin_edit(&id).map_err(|e| e.to_string())?;
            Ok(form_state(&a))
        }
        "form.update" => {
            let field = str_param(params, "field")?;
            let value = str_param(params, "value")?;
            let update = DraftField::parse(field, value).map_err(|e| e.to_string())?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.update_field(update);
            Ok(form_state(&a))
        }
        "form.submit" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let link = a.submit().map_err(|e| e.to_string())?;
            Ok(json!(link))
        }
        "form.cancel" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.cancel();
            Ok(form_state(&a))
        }
        "form.state" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            Ok(form_state(&a))
        }

        // ─── View ───
        "view.groups" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            Ok(json!(a.groups()))
        }
        "view.stats" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            Ok(json!(a.stats()))
        }

        "notifications.drain" => Ok(json!(notifications.drain())),

        _ => Err(format!("unknown method: {}", method)),
    }
}
