//! View rendering for the product manager: the create/edit form on top and
//! the product list below.
//!
//! Each input sends a `DraftChange`, so a change event overwrites one draft
//! field. User-facing labels are in Portuguese.

use common::form::{DraftChange, DraftField};
use common::model::Product;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::{format_price, format_quantity};
use super::messages::Msg;
use super::state::ProductManagerComponent;

pub fn view(component: &ProductManagerComponent, ctx: &Context<ProductManagerComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="product-manager">
            <h1>{"Gerenciador de produtos"}</h1>
            { build_form(component, link) }
            <h2>{"Lista de produtos"}</h2>
            { build_list(component, link) }
        </div>
    }
}

fn build_form(component: &ProductManagerComponent, link: &Scope<ProductManagerComponent>) -> Html {
    let draft = &component.state.form.draft;
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });
    let submit_label = if component.state.form.mode.is_editing() {
        "Update Product"
    } else {
        "Criar produto"
    };

    html! {
        <form class="product-form" {onsubmit}>
            { text_input(link, DraftField::Name, DraftChange::Name, "text", "Nome do produto", &draft.name) }
            { text_input(link, DraftField::Price, DraftChange::Price, "number", "Preço", &draft.price) }
            { text_input(link, DraftField::Quantity, DraftChange::Quantity, "number", "Quantidade", &draft.quantity) }
            { build_supplier_select(component, link) }
            <button type="submit">{ submit_label }</button>
            {
                if let Some(err) = &component.form_error {
                    html! { <div class="form-error">{ err.to_string() }</div> }
                } else {
                    html! {}
                }
            }
        </form>
    }
}

fn text_input(
    link: &Scope<ProductManagerComponent>,
    field: DraftField,
    change: fn(String) -> DraftChange,
    kind: &'static str,
    placeholder: &'static str,
    value: &str,
) -> Html {
    let oninput = link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::FieldChanged(change(input.value()))
    });

    html! {
        <input
            type={kind}
            name={field.input_name()}
            step={if kind == "number" { Some("any") } else { None }}
            {placeholder}
            value={value.to_string()}
            {oninput}
            required={true}
        />
    }
}

/// Supplier dropdown over the loaded suppliers. The option value is only used
/// to find the supplier again; the placeholder clears the selection.
fn build_supplier_select(
    component: &ProductManagerComponent,
    link: &Scope<ProductManagerComponent>,
) -> Html {
    let selected = component.state.form.draft.supplier_id.as_ref();
    let onchange = link.callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::SupplierSelected(select.value())
    });

    html! {
        <select name={DraftField::SupplierId.input_name()} {onchange} required={true}>
            <option value="" selected={selected.is_none()}>{"Selecionar fornecedor"}</option>
            {
                for component.state.suppliers.iter().map(|supplier| {
                    let id = supplier.id.to_string();
                    html! {
                        <option key={id.clone()} value={id} selected={selected == Some(&supplier.id)}>
                            { supplier.name.clone() }
                        </option>
                    }
                })
            }
        </select>
    }
}

fn build_list(component: &ProductManagerComponent, link: &Scope<ProductManagerComponent>) -> Html {
    html! {
        <ul class="product-list">
            { for component.state.products.iter().map(|product| build_item(component, link, product)) }
        </ul>
    }
}

fn build_item(
    component: &ProductManagerComponent,
    link: &Scope<ProductManagerComponent>,
    product: &Product,
) -> Html {
    let on_edit = {
        let product = product.clone();
        link.callback(move |_: MouseEvent| Msg::Edit(product.clone()))
    };
    let on_delete = {
        let id = product.id.clone();
        link.callback(move |_: MouseEvent| Msg::Delete(id.clone()))
    };
    let supplier = component
        .state
        .supplier_name(&product.supplier.id)
        .map(|name| format!(" - Fornecedor: {}", name))
        .unwrap_or_default();

    html! {
        <li key={product.id.to_string()}>
            { format!(
                "{} - {} - Quantidade: {}{}",
                product.name,
                format_price(product.price),
                format_quantity(product.quantity),
                supplier
            ) }
            <button onclick={on_edit}>{"Edit"}</button>
            <button onclick={on_delete}>{"Delete"}</button>
        </li>
    }
}
