// ============================================================================
// EARNINGS VIEW - Tarjetas de importes del dashboard del proveedor
// ============================================================================

use crate::dom::VNode;
use crate::utils::format::format_currency;

/// Texto de `#total-earnings`, `#month-earnings` y `#pending-payments`
pub fn render_amount(amount: Option<f64>) -> Vec<VNode> {
    vec![VNode::text(format_currency(amount))]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_are_currency_text() {
        assert_eq!(render_amount(Some(1200.0)), vec![VNode::text("$1200.00")]);
        assert_eq!(render_amount(None), vec![VNode::text("$0.00")]);
    }
}
