//! Request spawning and user feedback for the product manager.
//!
//! - **Requests**: every remote call runs in a `spawn_local` future and comes
//!   back to the component as a `Msg`, carrying its `LoadTicket` when it is a
//!   collection load.
//! - **Diagnostics**: failures go to the browser console with the fixed
//!   per-operation prefix (`Error fetching products:` and friends).
//! - **Feedback**: short-lived toast notifications for the user.
//! - **Formatting**: price and quantity as shown in the list.

use common::api::dispatch;
use common::error::OperationError;
use common::manager::LoadTicket;
use common::model::Id;
use common::form::Submission;
use num_format::{Locale, ToFormattedString};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::html::Scope;
use yew::platform::spawn_local;

use crate::api::HttpProductApi;

use super::messages::Msg;
use super::state::ProductManagerComponent;

pub fn fetch_products(
    api: &HttpProductApi,
    link: &Scope<ProductManagerComponent>,
    ticket: LoadTicket,
) {
    let api = api.clone();
    let link = link.clone();
    spawn_local(async move {
        let result = dispatch::load_products(&api).await;
        link.send_message(Msg::ProductsLoaded(ticket, result));
    });
}

pub fn fetch_suppliers(
    api: &HttpProductApi,
    link: &Scope<ProductManagerComponent>,
    ticket: LoadTicket,
) {
    let api = api.clone();
    let link = link.clone();
    spawn_local(async move {
        let result = dispatch::load_suppliers(&api).await;
        link.send_message(Msg::SuppliersLoaded(ticket, result));
    });
}

pub fn send_submission(
    api: &HttpProductApi,
    link: &Scope<ProductManagerComponent>,
    submission: Submission,
) {
    let api = api.clone();
    let link = link.clone();
    spawn_local(async move {
        let result = dispatch::submit(&api, &submission).await;
        link.send_message(Msg::SubmitFinished(result));
    });
}

pub fn send_delete(api: &HttpProductApi, link: &Scope<ProductManagerComponent>, id: Id) {
    let api = api.clone();
    let link = link.clone();
    spawn_local(async move {
        let result = dispatch::delete(&api, &id).await;
        link.send_message(Msg::DeleteFinished(result));
    });
}

/// Logs a failed operation to the console and tells the user.
///
/// Cancelled requests belong to a torn-down component and are dropped silently.
pub fn report_failure(err: &OperationError, user_message: &str) {
    if err.is_cancelled() {
        return;
    }
    gloo_console::error!(err.operation.to_string(), err.source.to_string());
    show_toast(user_message);
}

/// Displays a temporary notification at the bottom of the screen; it removes
/// itself after three seconds.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                html_toast.set_class_name("toast");

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

/// Price as listed, `$` prefix and the shortest decimal form (`$10`, `$9.99`).
pub fn format_price(price: f64) -> String {
    format!("${}", price)
}

pub fn format_quantity(quantity: i64) -> String {
    quantity.to_formatted_string(&Locale::en)
}
