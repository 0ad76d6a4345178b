// ============================================================================
// SHARED VIEW HELPERS - Fallbacks y filas vacías
// ============================================================================

use crate::dom::{ElementBuilder, VNode};

/// Valor o literal de reemplazo ("N/A", "Unknown"...)
pub fn or<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    value.filter(|v| !v.is_empty()).unwrap_or(fallback)
}

pub fn id_or_na(id: Option<i64>) -> String {
    id.map(|i| i.to_string()).unwrap_or_else(|| "N/A".to_string())
}

pub fn td(text: &str) -> VNode {
    ElementBuilder::new("td").text(text).build()
}

/// Fila única de tabla vacía
pub fn empty_row(colspan: usize, message: &str) -> VNode {
    ElementBuilder::new("tr")
        .child(
            ElementBuilder::new("td")
                .attr("colspan", &colspan.to_string())
                .class("text-center")
                .text(message)
                .build(),
        )
        .build()
}

pub fn badge(kind: &str, text: &str) -> VNode {
    ElementBuilder::new("span")
        .class(&format!("badge badge-{}", kind))
        .text(text)
        .build()
}

pub fn info_alert(message: &str) -> VNode {
    ElementBuilder::new("div")
        .class("alert alert-info")
        .text(message)
        .build()
}
