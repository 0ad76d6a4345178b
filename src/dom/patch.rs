// ============================================================================
// PATCH - Materializa VNode y aplica parches sobre el DOM real
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Node};
use crate::dom::diff::Patch;
use crate::dom::element::{create_element, document};
use crate::dom::events::{ACTION_ATTR, DIALOG_FIELD_ATTR};
use crate::dom::vnode::VNode;

/// Vacía `root` y monta los nodos desde cero
pub fn mount(root: &Element, nodes: &[VNode]) -> Result<(), JsValue> {
    root.set_inner_html("");
    for node in nodes {
        root.append_child(&create_node(node)?)?;
    }
    Ok(())
}

pub fn apply(root: &Element, patches: &[Patch]) -> Result<(), JsValue> {
    let root: &Node = root.as_ref();
    for patch in patches {
        match patch {
            Patch::Replace { path, node } => {
                let old = node_at(root, path)?;
                let parent = old
                    .parent_node()
                    .ok_or_else(|| JsValue::from_str("Detached node"))?;
                parent.replace_child(&create_node(node)?, &old)?;
            }
            Patch::SetText { path, text } => {
                node_at(root, path)?.set_text_content(Some(text));
            }
            Patch::SetAttr { path, name, value } => {
                element_at(root, path)?.set_attribute(name, value)?;
            }
            Patch::RemoveAttr { path, name } => {
                element_at(root, path)?.remove_attribute(name)?;
            }
            Patch::Append { path, node } => {
                node_at(root, path)?.append_child(&create_node(node)?)?;
            }
            Patch::Truncate { path, len } => {
                let parent = node_at(root, path)?;
                let children = parent.child_nodes();
                let total = children.length() as usize;
                for idx in (*len..total).rev() {
                    if let Some(child) = children.item(idx as u32) {
                        parent.remove_child(&child)?;
                    }
                }
            }
        }
    }
    Ok(())
}

fn node_at(root: &Node, path: &[usize]) -> Result<Node, JsValue> {
    let mut node = root.clone();
    for idx in path {
        node = node
            .child_nodes()
            .item(*idx as u32)
            .ok_or_else(|| JsValue::from_str(&format!("No node at {:?}", path)))?;
    }
    Ok(node)
}

fn element_at(root: &Node, path: &[usize]) -> Result<Element, JsValue> {
    node_at(root, path)?
        .dyn_into::<Element>()
        .map_err(|_| JsValue::from_str(&format!("Expected element at {:?}", path)))
}

/// Crea el nodo real a partir de un VNode
pub fn create_node(vnode: &VNode) -> Result<Node, JsValue> {
    match vnode {
        VNode::Text(text) => {
            let doc = document().ok_or_else(|| JsValue::from_str("No document"))?;
            Ok(doc.create_text_node(text).into())
        }
        VNode::Element(velement) => {
            let element = create_element(&velement.tag)?;
            for (name, value) in &velement.attrs {
                element.set_attribute(name, value)?;
            }
            for child in &velement.children {
                element.append_child(&create_node(child)?)?;
            }

            // Los listeners están delegados en el document (dom::events)
            if let Some(action) = &velement.on_click {
                let raw = action.encode().map_err(|e| JsValue::from_str(&e.to_string()))?;
                element.set_attribute(ACTION_ATTR, &raw)?;
            }
            if let Some(field) = &velement.on_input {
                let raw = field.encode().map_err(|e| JsValue::from_str(&e.to_string()))?;
                element.set_attribute(DIALOG_FIELD_ATTR, &raw)?;
            }

            Ok(element.into())
        }
    }
}
