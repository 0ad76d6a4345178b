// ============================================================================
// EVENT HANDLING - Sistema de eventos
// ============================================================================
// Los nodos renderizados no llevan closures propias: llevan su acción
// serializada en `data-action` / `data-dialog-field`, y dos listeners en el
// document (click e input) la leen y la despachan. Así re-renderizar no deja
// closures huérfanas.
// on_click / on_event solo se usan para enlaces hechos UNA VEZ en
// App::start() (landmarks y document), por eso closure.forget() es aceptable.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget, MouseEvent};
use crate::dom::element::{document, field_value};
use crate::state::action::{Action, DialogField};

pub const ACTION_ATTR: &str = "data-action";
pub const DIALOG_FIELD_ATTR: &str = "data-dialog-field";

/// Helper para crear click handler simple
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Listener genérico (input, submit...) sobre cualquier EventTarget
pub fn on_event<F>(target: &EventTarget, event_type: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Elemento que disparó el evento
pub fn event_target_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

/// Delegación de las acciones de los nodos renderizados
pub fn bind_action_delegation() -> Result<(), JsValue> {
    let doc = document().ok_or_else(|| JsValue::from_str("No document"))?;

    on_event(&doc, "click", |event: Event| {
        let selector = format!("[{}]", ACTION_ATTR);
        let action = event_target_element(&event)
            .and_then(|el| el.closest(&selector).ok().flatten())
            .and_then(|el| el.get_attribute(ACTION_ATTR))
            .and_then(|raw| Action::decode(&raw));
        if let Some(action) = action {
            crate::dispatch(action);
        }
    })?;

    on_event(&doc, "input", |event: Event| {
        let el = match event_target_element(&event) {
            Some(el) => el,
            None => return,
        };
        let field = el
            .get_attribute(DIALOG_FIELD_ATTR)
            .and_then(|raw| DialogField::decode(&raw));
        if let (Some(field), Some(value)) = (field, field_value(&el)) {
            crate::dispatch(Action::DialogInput { field, value });
        }
    })?;

    log::info!("🖱️ [EVENTS] Delegación de acciones enlazada");
    Ok(())
}
