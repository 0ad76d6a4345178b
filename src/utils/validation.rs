// ============================================================================
// VALIDATION - Reglas locales antes de llamar a la API
// ============================================================================

use chrono::{NaiveDateTime, NaiveTime};
use crate::state::app_state::AppState;
use crate::state::notifications::NotificationKind;
use crate::utils::constants::MSG_PAST_DATE;
use crate::utils::format::{parse_date, parse_time};

/// Campo `required` de un formulario, desacoplado del DOM
#[derive(Debug, Clone, PartialEq)]
pub struct RequiredField {
    pub value: String,
    pub invalid: bool,
}

impl RequiredField {
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
            invalid: false,
        }
    }
}

/// Marca como inválido cada campo vacío y limpia los rellenos.
/// true si todos pasan.
pub fn validate_fields(fields: &mut [RequiredField]) -> bool {
    let mut all_valid = true;
    for field in fields.iter_mut() {
        field.invalid = field.value.is_empty();
        if field.invalid {
            all_valid = false;
        }
    }
    all_valid
}

pub fn parse_date_time(date: &str, time: &str) -> Option<NaiveDateTime> {
    let date = parse_date(date)?;
    let time: NaiveTime = parse_time(time)?;
    Some(date.and_time(time))
}

/// Rechaza fecha/hora anteriores a "ahora" (o ilegibles) con un aviso
/// "warning". Exactamente "ahora" se acepta.
pub fn validate_date_time(state: &AppState, date: &str, time: &str) -> bool {
    let valid = match parse_date_time(date, time) {
        Some(selected) => selected >= state.clock.now_local(),
        None => {
            log::warn!("⚠️ [VALIDATION] Fecha/hora ilegible: {:?} {:?}", date, time);
            false
        }
    };
    if !valid {
        state.notify(MSG_PAST_DATE, NotificationKind::Warning);
    }
    valid
}
