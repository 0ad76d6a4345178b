// ============================================================================
// DIFF - Cálculo de parches entre dos listas de VNode
// ============================================================================
// Las rutas son índices de hijos desde la raíz de la región ([] = la región).
// El orden de los parches es el orden de aplicación: dentro de cada lista de
// hijos primero los cambios en sitio, después Append o Truncate al final.
// ============================================================================

use crate::dom::vnode::{VElement, VNode};

#[derive(Debug, Clone, PartialEq)]
pub enum Patch {
    Replace { path: Vec<usize>, node: VNode },
    SetText { path: Vec<usize>, text: String },
    SetAttr { path: Vec<usize>, name: String, value: String },
    RemoveAttr { path: Vec<usize>, name: String },
    /// Agregar al final de los hijos del nodo en `path`
    Append { path: Vec<usize>, node: VNode },
    /// Dejar solo los primeros `len` hijos del nodo en `path`
    Truncate { path: Vec<usize>, len: usize },
}

/// Diff de los hijos de una región
pub fn diff_children(old: &[VNode], new: &[VNode]) -> Vec<Patch> {
    let mut patches = Vec::new();
    diff_list(old, new, &mut Vec::new(), &mut patches);
    patches
}

fn diff_list(old: &[VNode], new: &[VNode], path: &mut Vec<usize>, patches: &mut Vec<Patch>) {
    for (i, (o, n)) in old.iter().zip(new.iter()).enumerate() {
        path.push(i);
        diff_node(o, n, path, patches);
        path.pop();
    }

    if new.len() > old.len() {
        for node in &new[old.len()..] {
            patches.push(Patch::Append { path: path.clone(), node: node.clone() });
        }
    } else if old.len() > new.len() {
        patches.push(Patch::Truncate { path: path.clone(), len: new.len() });
    }
}

fn diff_node(old: &VNode, new: &VNode, path: &mut Vec<usize>, patches: &mut Vec<Patch>) {
    match (old, new) {
        (VNode::Text(a), VNode::Text(b)) => {
            if a != b {
                patches.push(Patch::SetText { path: path.clone(), text: b.clone() });
            }
        }
        (VNode::Element(a), VNode::Element(b)) if a.same_shape(b) => {
            diff_attrs(a, b, path, patches);
            diff_list(&a.children, &b.children, path, patches);
        }
        _ => patches.push(Patch::Replace { path: path.clone(), node: new.clone() }),
    }
}

fn diff_attrs(old: &VElement, new: &VElement, path: &[usize], patches: &mut Vec<Patch>) {
    for (name, value) in &new.attrs {
        if old.attrs.get(name) != Some(value) {
            patches.push(Patch::SetAttr {
                path: path.to_vec(),
                name: name.clone(),
                value: value.clone(),
            });
        }
    }
    for name in old.attrs.keys() {
        if !new.attrs.contains_key(name) {
            patches.push(Patch::RemoveAttr { path: path.to_vec(), name: name.clone() });
        }
    }
}

/// Aplica parches sobre un árbol virtual. Es el mismo recorrido que hace
/// dom::patch sobre el DOM real; sirve para verificar que diff + apply
/// reproduce el árbol nuevo.
pub fn apply_virtual(root: &mut Vec<VNode>, patches: &[Patch]) -> Result<(), String> {
    for patch in patches {
        match patch {
            Patch::Replace { path, node } => {
                *node_at_mut(root, path)? = node.clone();
            }
            Patch::SetText { path, text } => match node_at_mut(root, path)? {
                VNode::Text(t) => *t = text.clone(),
                VNode::Element(_) => return Err(format!("SetText on element at {:?}", path)),
            },
            Patch::SetAttr { path, name, value } => {
                element_at_mut(root, path)?.attrs.insert(name.clone(), value.clone());
            }
            Patch::RemoveAttr { path, name } => {
                element_at_mut(root, path)?.attrs.remove(name);
            }
            Patch::Append { path, node } => children_at_mut(root, path)?.push(node.clone()),
            Patch::Truncate { path, len } => children_at_mut(root, path)?.truncate(*len),
        }
    }
    Ok(())
}

fn children_at_mut<'a>(root: &'a mut Vec<VNode>, path: &[usize]) -> Result<&'a mut Vec<VNode>, String> {
    if path.is_empty() {
        return Ok(root);
    }
    Ok(&mut element_at_mut(root, path)?.children)
}

fn element_at_mut<'a>(root: &'a mut Vec<VNode>, path: &[usize]) -> Result<&'a mut VElement, String> {
    match node_at_mut(root, path)? {
        VNode::Element(el) => Ok(el),
        VNode::Text(_) => Err(format!("Expected element at {:?}", path)),
    }
}

fn node_at_mut<'a>(root: &'a mut Vec<VNode>, path: &[usize]) -> Result<&'a mut VNode, String> {
    let (first, rest) = path.split_first().ok_or("Empty path")?;
    let mut node = root.get_mut(*first).ok_or_else(|| format!("No node at {:?}", path))?;
    for idx in rest {
        node = match node {
            VNode::Element(el) => el
                .children
                .get_mut(*idx)
                .ok_or_else(|| format!("No node at {:?}", path))?,
            VNode::Text(_) => return Err(format!("Text node has no children at {:?}", path)),
        };
    }
    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::builder::ElementBuilder;
    use crate::state::action::Action;

    fn row(id: i64, label: &str) -> VNode {
        ElementBuilder::new("tr")
            .attr("data-id", &id.to_string())
            .child(ElementBuilder::new("td").text(label).build())
            .child(
                ElementBuilder::new("td")
                    .child(
                        ElementBuilder::new("button")
                            .text("Cancel")
                            .on_click(Action::CancelBooking(id))
                            .build(),
                    )
                    .build(),
            )
            .build()
    }

    #[test]
    fn identical_trees_produce_no_patches() {
        let rows = vec![row(1, "a"), row(2, "b")];
        assert!(diff_children(&rows, &rows.clone()).is_empty());
    }

    #[test]
    fn text_change_is_patched_in_place() {
        let old = vec![row(1, "a")];
        let new = vec![row(1, "z")];
        let patches = diff_children(&old, &new);
        assert_eq!(patches, vec![Patch::SetText { path: vec![0, 0, 0], text: "z".into() }]);
    }

    #[test]
    fn changed_handler_replaces_node() {
        let old = vec![row(1, "a")];
        let new = vec![row(2, "a")];
        let patches = diff_children(&old, &new);
        assert!(patches.iter().any(|p| matches!(p, Patch::Replace { path, .. } if path == &vec![0, 1, 0])));
        assert!(patches.iter().any(|p| matches!(p, Patch::SetAttr { name, .. } if name == "data-id")));
    }

    #[test]
    fn different_key_replaces_whole_node() {
        let card = |id: i64| {
            ElementBuilder::new("div")
                .key(&id.to_string())
                .child(ElementBuilder::new("textarea").id("comment").build())
                .build()
        };
        let patches = diff_children(&[card(1), card(2)], &[card(2), card(1)]);
        assert_eq!(patches.len(), 2);
        assert!(patches.iter().all(|p| matches!(p, Patch::Replace { path, .. } if path.len() == 1)));
        assert!(diff_children(&[card(1)], &[card(1)]).is_empty());
    }

    #[test]
    fn shrinking_and_growing_lists() {
        let three = vec![row(1, "a"), row(2, "b"), row(3, "c")];
        let one = vec![row(1, "a")];
        assert_eq!(diff_children(&three, &one), vec![Patch::Truncate { path: vec![], len: 1 }]);
        let grow = diff_children(&one, &three);
        assert_eq!(grow.len(), 2);
        assert!(grow.iter().all(|p| matches!(p, Patch::Append { path, .. } if path.is_empty())));
    }

    #[test]
    fn apply_virtual_reproduces_new_tree() {
        let old = vec![row(1, "a"), row(2, "b"), VNode::text("footer")];
        let new = vec![
            row(1, "a2"),
            ElementBuilder::new("tr").class("empty").build(),
            VNode::text("footer!"),
            row(4, "d"),
        ];
        let mut tree = old.clone();
        apply_virtual(&mut tree, &diff_children(&old, &new)).unwrap();
        assert_eq!(tree, new);

        let mut back = new.clone();
        apply_virtual(&mut back, &diff_children(&new, &old)).unwrap();
        assert_eq!(back, old);
    }

    #[test]
    fn removed_attribute_is_reported() {
        let old = vec![ElementBuilder::new("input").attr("value", "x").flag("required", true).build()];
        let new = vec![ElementBuilder::new("input").attr("value", "x").build()];
        assert_eq!(
            diff_children(&old, &new),
            vec![Patch::RemoveAttr { path: vec![0], name: "required".into() }]
        );
    }
}
