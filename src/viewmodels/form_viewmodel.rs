// ============================================================================
// FORM VIEWMODEL - Validación de campos required sobre formularios reales
// ============================================================================
// La regla vive en utils::validation (sin DOM); aquí solo se leen valores y
// se ponen/quitan las clases `is-invalid`.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Element, Event};
use crate::dom::element::{
    add_class, document, field_value, get_element_by_id, query_document_all, query_selector_all,
    remove_class,
};
use crate::dom::events::{event_target_element, on_event};
use crate::utils::constants::INVALID_CLASS;
use crate::utils::validation::{validate_fields, RequiredField};

const REQUIRED_FIELDS: &str = "input[required], select[required]";

/// Valida el formulario con ese id. Un id inexistente cuenta como inválido.
pub fn validate_form(form_id: &str) -> bool {
    match get_element_by_id(form_id) {
        Some(form) => validate_form_element(&form),
        None => {
            log::warn!("⚠️ [FORMS] Formulario #{} no encontrado", form_id);
            false
        }
    }
}

/// Campo required tal como lo ve la validación: valor y marca `is-invalid`
pub trait RequiredInput {
    fn value(&self) -> String;
    fn set_invalid(&self, invalid: bool);
}

impl RequiredInput for Element {
    fn value(&self) -> String {
        field_value(self).unwrap_or_default()
    }

    fn set_invalid(&self, invalid: bool) {
        let result = if invalid {
            add_class(self, INVALID_CLASS)
        } else {
            remove_class(self, INVALID_CLASS)
        };
        if let Err(e) = result {
            log::warn!("⚠️ [FORMS] No se pudo actualizar la clase: {:?}", e);
        }
    }
}

/// Marca los vacíos, limpia los rellenos. true si ninguno está vacío.
pub fn validate_inputs<I: RequiredInput>(inputs: &[I]) -> bool {
    let mut fields: Vec<RequiredField> = inputs.iter().map(|i| RequiredField::new(&i.value())).collect();
    let valid = validate_fields(&mut fields);
    for (input, field) in inputs.iter().zip(&fields) {
        input.set_invalid(field.invalid);
    }
    valid
}

/// Quita la marca en cuanto el campo tiene valor; un campo vacío se deja igual
pub fn clear_if_filled<I: RequiredInput>(input: &I) {
    if !input.value().is_empty() {
        input.set_invalid(false);
    }
}

pub fn validate_form_element(form: &Element) -> bool {
    match query_selector_all(form, REQUIRED_FIELDS) {
        Ok(inputs) => validate_inputs(&inputs),
        Err(e) => {
            log::error!("❌ [FORMS] Error buscando campos: {:?}", e);
            false
        }
    }
}

/// Filtro de submit en todos los formularios presentes al arrancar
pub fn bind_forms() -> Result<(), JsValue> {
    let forms = query_document_all("form")?;
    log::info!("📝 [FORMS] Validación enlazada en {} formularios", forms.len());
    for form in forms {
        let target = form.clone();
        on_event(&form, "submit", move |event: Event| {
            if !validate_form_element(&target) {
                event.prevent_default();
            }
        })?;
    }
    Ok(())
}

/// Quita `is-invalid` en cuanto un campo required deja de estar vacío.
/// Un único listener en el documento (también cubre campos re-renderizados).
pub fn bind_required_inputs() -> Result<(), JsValue> {
    let doc = document().ok_or_else(|| JsValue::from_str("No document"))?;
    for event_type in ["input", "change"] {
        on_event(&doc, event_type, |event: Event| {
            let el = match event_target_element(&event) {
                Some(el) => el,
                None => return,
            };
            if el.matches(REQUIRED_FIELDS).unwrap_or(false) {
                clear_if_filled(&el);
            }
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    struct FakeInput {
        value: RefCell<String>,
        invalid: Cell<bool>,
    }

    fn input(value: &str) -> FakeInput {
        FakeInput { value: RefCell::new(value.to_string()), invalid: Cell::new(false) }
    }

    impl RequiredInput for FakeInput {
        fn value(&self) -> String {
            self.value.borrow().clone()
        }

        fn set_invalid(&self, invalid: bool) {
            self.invalid.set(invalid);
        }
    }

    #[test]
    fn empty_fields_are_marked_and_block_submit() {
        let inputs = vec![input("Alice"), input(""), input("Garden")];
        inputs[0].invalid.set(true);
        assert!(!validate_inputs(&inputs));
        assert_eq!(
            inputs.iter().map(|i| i.invalid.get()).collect::<Vec<_>>(),
            vec![false, true, false]
        );
    }

    #[test]
    fn filled_form_passes_and_clears_marks() {
        let inputs = vec![input("2026-10-20"), input("10:00")];
        inputs[1].invalid.set(true);
        assert!(validate_inputs(&inputs));
        assert!(inputs.iter().all(|i| !i.invalid.get()));
    }

    #[test]
    fn typing_clears_the_mark_only_once_filled() {
        let field = input("");
        assert!(!validate_inputs(std::slice::from_ref(&field)));
        clear_if_filled(&field);
        assert!(field.invalid.get());

        *field.value.borrow_mut() = "x".to_string();
        clear_if_filled(&field);
        assert!(!field.invalid.get());
    }
}
