// ============================================================================
// VNODE - Árbol virtual que producen las vistas
// ============================================================================
// Las vistas son funciones puras datos → Vec<VNode>. El DOM real solo se toca
// en dom::patch, aplicando el diff entre el snapshot anterior y el nuevo.
// ============================================================================

use std::collections::BTreeMap;
use crate::state::action::{Action, DialogField};

#[derive(Debug, Clone, PartialEq)]
pub enum VNode {
    Element(VElement),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct VElement {
    pub tag: String,
    pub attrs: BTreeMap<String, String>,
    pub on_click: Option<Action>,
    pub on_input: Option<DialogField>,
    /// Identidad entre renders (B_ID, tipo de diálogo...). Solo vive en el
    /// árbol virtual, no se escribe en el DOM.
    pub key: Option<String>,
    pub children: Vec<VNode>,
}

impl VElement {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attrs: BTreeMap::new(),
            on_click: None,
            on_input: None,
            key: None,
            children: Vec::new(),
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(|s| s.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .map(|c| c.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    /// Mismo tipo de nodo, misma clave y mismos handlers: se puede parchear
    /// en sitio. Si no, se reemplaza entero y el estado vivo del nodo (texto
    /// tecleado, opción elegida) no pasa a otro elemento.
    pub fn same_shape(&self, other: &VElement) -> bool {
        self.tag == other.tag
            && self.key == other.key
            && self.on_click == other.on_click
            && self.on_input == other.on_input
    }
}

impl VNode {
    pub fn text(text: impl Into<String>) -> Self {
        VNode::Text(text.into())
    }

    pub fn as_element(&self) -> Option<&VElement> {
        match self {
            VNode::Element(el) => Some(el),
            VNode::Text(_) => None,
        }
    }

    pub fn children(&self) -> &[VNode] {
        match self {
            VNode::Element(el) => &el.children,
            VNode::Text(_) => &[],
        }
    }

    /// Texto concatenado del subárbol (equivalente a textContent)
    pub fn text_content(&self) -> String {
        match self {
            VNode::Text(t) => t.clone(),
            VNode::Element(el) => el.children.iter().map(VNode::text_content).collect(),
        }
    }

    /// Búsqueda en profundidad del primer nodo que cumple el predicado
    pub fn find(&self, pred: &dyn Fn(&VElement) -> bool) -> Option<&VElement> {
        let el = self.as_element()?;
        if pred(el) {
            return Some(el);
        }
        el.children.iter().find_map(|c| c.find(pred))
    }

    pub fn find_by_id(&self, id: &str) -> Option<&VElement> {
        self.find(&|el| el.attr("id") == Some(id))
    }

    /// Todas las acciones click del subárbol, en orden de documento
    pub fn actions(&self) -> Vec<Action> {
        let mut out = Vec::new();
        collect_actions(self, &mut out);
        out
    }
}

fn collect_actions(node: &VNode, out: &mut Vec<Action>) {
    if let VNode::Element(el) = node {
        if let Some(action) = &el.on_click {
            out.push(action.clone());
        }
        for child in &el.children {
            collect_actions(child, out);
        }
    }
}
