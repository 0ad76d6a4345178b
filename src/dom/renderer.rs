// ============================================================================
// RENDERER - Frontera entre el estado (VNode) y el documento
// ============================================================================

use crate::dom::diff::Patch;
use crate::dom::vnode::VNode;

/// Destino de las regiones. Una región se identifica por selector CSS
/// (`#user-bookings`, `#payment-history-table tbody`).
pub trait Renderer {
    /// La región existe en la página actual
    fn has_region(&self, selector: &str) -> bool;

    /// Reemplazar todo el contenido de la región
    fn mount(&self, selector: &str, nodes: &[VNode]) -> Result<(), String>;

    /// Aplicar parches sobre el contenido montado previamente
    fn patch(&self, selector: &str, patches: &[Patch]) -> Result<(), String>;
}

/// Renderer real sobre web_sys
pub struct DomRenderer;

impl DomRenderer {
    fn region(selector: &str) -> Result<web_sys::Element, String> {
        crate::dom::element::query_selector(selector)
            .map_err(|e| format!("{:?}", e))?
            .ok_or_else(|| format!("Region {} not found", selector))
    }
}

impl Renderer for DomRenderer {
    fn has_region(&self, selector: &str) -> bool {
        matches!(crate::dom::element::query_selector(selector), Ok(Some(_)))
    }

    fn mount(&self, selector: &str, nodes: &[VNode]) -> Result<(), String> {
        let root = Self::region(selector)?;
        crate::dom::patch::mount(&root, nodes).map_err(|e| format!("{:?}", e))
    }

    fn patch(&self, selector: &str, patches: &[Patch]) -> Result<(), String> {
        let root = Self::region(selector)?;
        crate::dom::patch::apply(&root, patches).map_err(|e| format!("{:?}", e))
    }
}

#[cfg(test)]
pub mod testing {
    use std::cell::RefCell;
    use std::collections::{HashMap, HashSet};
    use super::*;
    use crate::dom::diff::apply_virtual;

    /// Renderer en memoria: guarda el contenido de cada región aplicando los
    /// mismos parches que recibiría el DOM.
    #[derive(Default)]
    pub struct MemoryRenderer {
        regions: RefCell<HashSet<String>>,
        contents: RefCell<HashMap<String, Vec<VNode>>>,
        pub mounts: RefCell<Vec<String>>,
        pub patches: RefCell<Vec<(String, Vec<Patch>)>>,
    }

    impl MemoryRenderer {
        pub fn with_regions(selectors: &[&str]) -> Self {
            let renderer = Self::default();
            for s in selectors {
                renderer.regions.borrow_mut().insert(s.to_string());
            }
            renderer
        }

        pub fn add_region(&self, selector: &str) {
            self.regions.borrow_mut().insert(selector.to_string());
        }

        pub fn content(&self, selector: &str) -> Vec<VNode> {
            self.contents.borrow().get(selector).cloned().unwrap_or_default()
        }
    }

    impl Renderer for MemoryRenderer {
        fn has_region(&self, selector: &str) -> bool {
            self.regions.borrow().contains(selector)
        }

        fn mount(&self, selector: &str, nodes: &[VNode]) -> Result<(), String> {
            if !self.has_region(selector) {
                return Err(format!("Region {} not found", selector));
            }
            self.mounts.borrow_mut().push(selector.to_string());
            self.contents.borrow_mut().insert(selector.to_string(), nodes.to_vec());
            Ok(())
        }

        fn patch(&self, selector: &str, patches: &[Patch]) -> Result<(), String> {
            let mut contents = self.contents.borrow_mut();
            let tree = contents
                .get_mut(selector)
                .ok_or_else(|| format!("Region {} not mounted", selector))?;
            apply_virtual(tree, patches)?;
            self.patches.borrow_mut().push((selector.to_string(), patches.to_vec()));
            Ok(())
        }
    }
}
