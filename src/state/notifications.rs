// ============================================================================
// NOTIFICATION CENTER - Banners en pantalla con expiración
// ============================================================================
// Tope de banners visibles y deduplicación por (mensaje, tipo): un mensaje
// repetido refresca el banner existente en vez de apilar otro.
// ============================================================================

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    /// Tipo desde el string de la API JS; desconocido → Info
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "success" => NotificationKind::Success,
            "warning" => NotificationKind::Warning,
            "error" | "danger" => NotificationKind::Error,
            _ => NotificationKind::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
            NotificationKind::Warning => "warning",
            NotificationKind::Error => "error",
        }
    }

    /// Sufijo de la clase `alert-*` de Bootstrap
    pub fn alert_class(&self) -> &'static str {
        match self {
            NotificationKind::Error => "danger",
            other => other.as_str(),
        }
    }
}

impl Default for NotificationKind {
    fn default() -> Self {
        NotificationKind::Info
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
    pub created_at_ms: f64,
}

#[derive(Debug, Clone)]
pub struct NotificationCenter {
    /// Más reciente primero
    items: Vec<Notification>,
    next_id: u64,
    timeout_ms: f64,
    max_visible: usize,
}

impl NotificationCenter {
    pub fn new(timeout_ms: u32, max_visible: usize) -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
            timeout_ms: timeout_ms as f64,
            max_visible: max_visible.max(1),
        }
    }

    /// Inserta (o refresca) un banner y devuelve su id
    pub fn push(&mut self, message: &str, kind: NotificationKind, now_ms: f64) -> u64 {
        if let Some(pos) = self
            .items
            .iter()
            .position(|n| n.kind == kind && n.message == message)
        {
            let mut existing = self.items.remove(pos);
            existing.created_at_ms = now_ms;
            let id = existing.id;
            self.items.insert(0, existing);
            return id;
        }

        let id = self.next_id;
        self.next_id += 1;
        self.items.insert(
            0,
            Notification {
                id,
                message: message.to_string(),
                kind,
                created_at_ms: now_ms,
            },
        );
        self.items.truncate(self.max_visible);
        id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        before != self.items.len()
    }

    /// Vence una aparición concreta: el banner `id` solo se quita si no se
    /// refrescó después de `shown_at_ms`
    pub fn expire_one(&mut self, id: u64, shown_at_ms: f64) -> bool {
        let before = self.items.len();
        self.items
            .retain(|n| !(n.id == id && n.created_at_ms <= shown_at_ms));
        before != self.items.len()
    }

    /// Elimina los banners con `timeout_ms` o más de antigüedad
    pub fn expire(&mut self, now_ms: f64) -> bool {
        let before = self.items.len();
        let timeout = self.timeout_ms;
        self.items.retain(|n| now_ms - n.created_at_ms < timeout);
        before != self.items.len()
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.items.first()
    }

    pub fn timeout_ms(&self) -> f64 {
        self.timeout_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_lives_exactly_timeout() {
        let mut center = NotificationCenter::new(5000, 5);
        center.push("x", NotificationKind::Success, 0.0);
        assert_eq!(center.len(), 1);

        assert!(!center.expire(4999.0));
        assert_eq!(center.latest().unwrap().message, "x");

        assert!(center.expire(5000.0));
        assert!(center.is_empty());
    }

    #[test]
    fn newest_first_and_capped() {
        let mut center = NotificationCenter::new(5000, 3);
        for i in 0..5 {
            center.push(&format!("m{}", i), NotificationKind::Info, i as f64);
        }
        let messages: Vec<_> = center.items().iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["m4", "m3", "m2"]);
    }

    #[test]
    fn duplicate_refreshes_instead_of_stacking() {
        let mut center = NotificationCenter::new(5000, 5);
        let first = center.push("Saved", NotificationKind::Success, 0.0);
        center.push("Other", NotificationKind::Info, 100.0);
        let again = center.push("Saved", NotificationKind::Success, 4000.0);

        assert_eq!(first, again);
        assert_eq!(center.len(), 2);
        assert_eq!(center.latest().unwrap().id, first);
        // El refresco reinicia el reloj del banner
        center.expire(5000.0);
        assert_eq!(center.len(), 1);
        assert_eq!(center.latest().unwrap().message, "Saved");
    }

    #[test]
    fn same_message_different_kind_is_not_a_duplicate() {
        let mut center = NotificationCenter::new(5000, 5);
        center.push("Done", NotificationKind::Success, 0.0);
        center.push("Done", NotificationKind::Info, 0.0);
        assert_eq!(center.len(), 2);
    }

    #[test]
    fn dismiss_removes_by_id() {
        let mut center = NotificationCenter::new(5000, 5);
        let id = center.push("x", NotificationKind::Warning, 0.0);
        assert!(center.dismiss(id));
        assert!(!center.dismiss(id));
        assert!(center.is_empty());
    }

    #[test]
    fn kind_parsing() {
        assert_eq!(NotificationKind::parse("success"), NotificationKind::Success);
        assert_eq!(NotificationKind::parse("ERROR"), NotificationKind::Error);
        assert_eq!(NotificationKind::parse("whatever"), NotificationKind::Info);
        assert_eq!(NotificationKind::Error.alert_class(), "danger");
    }
}
