use web_sys::{Document, Element};

use crate::domain::{
    errors::{AppResult, PageError},
    forms::{ElementPlan, ErrorListLayout, FieldErrorSet},
    logging::{LogComponent, get_logger},
};

fn dom_error(what: &str) -> impl Fn(wasm_bindgen::JsValue) -> PageError + '_ {
    move |e| PageError::Dom(format!("{}: {:?}", what, e))
}

/// Build the elements described by `plan`. Text goes in as a text node,
/// never as markup.
pub fn materialize(document: &Document, plan: &ElementPlan) -> AppResult<Element> {
    let element = document.create_element(plan.tag).map_err(dom_error("create_element"))?;
    if let Some(class) = &plan.class {
        element.set_class_name(class);
    }
    if let Some(text) = &plan.text {
        element
            .append_child(&document.create_text_node(text))
            .map_err(dom_error("append text"))?;
    }
    for child in &plan.children {
        let child = materialize(document, child)?;
        element.append_child(&child).map_err(dom_error("append child"))?;
    }
    Ok(element)
}

/// Replace the contents of `region` with the rendered error list.
///
/// The new list is fully built before the region is touched, then attached
/// in one append. An empty set just clears the region.
pub fn render_into(
    document: &Document,
    region: &Element,
    errors: &FieldErrorSet,
    layout: &ErrorListLayout,
) -> AppResult<()> {
    let rendered = layout
        .plan(errors)
        .map(|plan| materialize(document, &plan))
        .transpose()?;

    region.set_inner_html("");
    if let Some(list) = rendered {
        region.append_child(&list).map_err(dom_error("attach error list"))?;
    }

    get_logger().debug(
        LogComponent::Infrastructure("ErrorRenderer"),
        &format!("rendered {} fields, {} messages", errors.len(), errors.message_count()),
    );
    Ok(())
}

/// The error region for a form: `#region_id` inside the form, else anywhere
/// in the document.
pub fn find_error_region(document: &Document, form: Option<&Element>, region_id: &str) -> AppResult<Element> {
    let scoped = form.and_then(|form| form.query_selector(&format!("#{}", region_id)).ok().flatten());
    scoped
        .or_else(|| document.get_element_by_id(region_id))
        .ok_or_else(|| PageError::MissingElement(region_id.to_string()).into())
}
