// ============================================================================
// ELEMENT BUILDER - Builder pattern para crear nodos virtuales fácilmente
// ============================================================================

use crate::dom::vnode::{VElement, VNode};
use crate::state::action::{Action, DialogField};

pub struct ElementBuilder {
    element: VElement,
}

impl ElementBuilder {
    /// Crear nuevo builder para un elemento
    pub fn new(tag: &str) -> Self {
        Self {
            element: VElement::new(tag),
        }
    }

    /// Establecer class name (reemplaza todas las clases)
    pub fn class(mut self, class: &str) -> Self {
        self.element.attrs.insert("class".to_string(), class.to_string());
        self
    }

    /// Agregar clases adicionales (sin reemplazar)
    pub fn add_class(mut self, class: &str) -> Self {
        let merged = match self.element.attrs.get("class") {
            Some(existing) if !existing.is_empty() => format!("{} {}", existing, class),
            _ => class.to_string(),
        };
        self.element.attrs.insert("class".to_string(), merged);
        self
    }

    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.element.attrs.insert(name.to_string(), value.to_string());
        self
    }

    /// Atributo booleano (`selected`, `required`...) solo si `on`
    pub fn flag(self, name: &str, on: bool) -> Self {
        if on {
            self.attr(name, "")
        } else {
            self
        }
    }

    /// Agregar un nodo de texto como hijo
    pub fn text(mut self, text: &str) -> Self {
        self.element.children.push(VNode::text(text));
        self
    }

    pub fn child(mut self, child: VNode) -> Self {
        self.element.children.push(child);
        self
    }

    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = VNode>,
    {
        self.element.children.extend(children);
        self
    }

    pub fn on_click(mut self, action: Action) -> Self {
        self.element.on_click = Some(action);
        self
    }

    /// Clave de identidad para el diff
    pub fn key(mut self, key: &str) -> Self {
        self.element.key = Some(key.to_string());
        self
    }

    /// El valor del campo viaja como Action::DialogInput en cada evento input
    pub fn on_input(mut self, field: DialogField) -> Self {
        self.element.on_input = Some(field);
        self
    }

    /// Construir y retornar el nodo
    pub fn build(self) -> VNode {
        VNode::Element(self.element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_nested_tree() {
        let node = ElementBuilder::new("div")
            .id("card")
            .class("card")
            .add_class("mb-3")
            .child(ElementBuilder::new("h5").text("Plumbing").build())
            .child(
                ElementBuilder::new("button")
                    .attr("type", "button")
                    .text("Cancel")
                    .on_click(Action::CancelBooking(3))
                    .build(),
            )
            .build();

        let el = node.as_element().unwrap();
        assert_eq!(el.attr("class"), Some("card mb-3"));
        assert!(el.has_class("mb-3"));
        assert_eq!(node.text_content(), "PlumbingCancel");
        assert_eq!(node.actions(), vec![Action::CancelBooking(3)]);
        assert!(node.find_by_id("card").is_some());
    }

    #[test]
    fn flag_only_when_on() {
        let on = ElementBuilder::new("option").flag("selected", true).build();
        let off = ElementBuilder::new("option").flag("selected", false).build();
        assert_eq!(on.as_element().unwrap().attr("selected"), Some(""));
        assert_eq!(off.as_element().unwrap().attr("selected"), None);
    }
}
