//! Elm-style update function for the product manager.
//!
//! Receives the component, its `Context` and a `Msg`, applies the message to
//! the `ManagerState` and returns whether the view needs to re-render.
//!
//! Remote calls are started here and finish as `*Loaded` / `*Finished`
//! messages. Whether a result may touch state is decided by `ManagerState`:
//! superseded loads are dropped and failures leave everything as it was.

use common::manager::LoadOutcome;
use yew::prelude::*;

use super::helpers::{
    fetch_products, report_failure, send_delete, send_submission, show_toast,
};
use super::messages::Msg;
use super::state::ProductManagerComponent;

pub fn update(
    component: &mut ProductManagerComponent,
    ctx: &Context<ProductManagerComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::ProductsLoaded(ticket, result) => {
            let outcome = component.state.finish_products_load(ticket, result);
            apply_load(outcome, "products", "Não foi possível carregar os produtos.")
        }
        Msg::SuppliersLoaded(ticket, result) => {
            let outcome = component.state.finish_suppliers_load(ticket, result);
            apply_load(outcome, "suppliers", "Não foi possível carregar os fornecedores.")
        }
        Msg::FieldChanged(change) => {
            component.state.update_field(change);
            component.form_error = None;
            true
        }
        Msg::SupplierSelected(option_value) => {
            component.state.select_supplier(&option_value);
            component.form_error = None;
            true
        }
        Msg::Edit(product) => {
            component.state.begin_edit(&product);
            component.form_error = None;
            true
        }
        Msg::Submit => match component.state.prepare_submit() {
            Ok(submission) => {
                component.form_error = None;
                send_submission(&component.api, ctx.link(), submission);
                true
            }
            Err(err) => {
                component.form_error = Some(err);
                true
            }
        },
        Msg::SubmitFinished(result) => match component.state.finish_submit(result) {
            Ok(ticket) => {
                fetch_products(&component.api, ctx.link(), ticket);
                show_toast("Produto salvo.");
                true
            }
            Err(err) => {
                report_failure(&err, "Não foi possível salvar o produto.");
                false
            }
        },
        Msg::Delete(id) => {
            send_delete(&component.api, ctx.link(), id);
            false
        }
        Msg::DeleteFinished(result) => match component.state.finish_delete(result) {
            Ok(ticket) => {
                fetch_products(&component.api, ctx.link(), ticket);
                show_toast("Produto excluído.");
                false
            }
            Err(err) => {
                report_failure(&err, "Não foi possível excluir o produto.");
                false
            }
        },
    }
}

fn apply_load(outcome: LoadOutcome, collection: &str, user_message: &str) -> bool {
    match outcome {
        LoadOutcome::Loaded(count) => {
            gloo_console::info!(format!("Loaded {} {}", count, collection));
            true
        }
        LoadOutcome::Stale => false,
        LoadOutcome::Failed(err) => {
            report_failure(&err, user_message);
            false
        }
    }
}
