// ============================================================================
// PAGE - Snapshots de las regiones y commit vía diff
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use crate::dom::diff::diff_children;
use crate::dom::renderer::Renderer;
use crate::dom::vnode::VNode;

#[derive(Clone)]
pub struct Page {
    renderer: Rc<dyn Renderer>,
    snapshots: Rc<RefCell<HashMap<String, Vec<VNode>>>>,
}

impl Page {
    pub fn new(renderer: Rc<dyn Renderer>) -> Self {
        Self {
            renderer,
            snapshots: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    /// El landmark/región existe en la página actual
    pub fn has_region(&self, selector: &str) -> bool {
        self.renderer.has_region(selector)
    }

    /// Renderiza `nodes` en la región. La primera vez monta desde cero (borra
    /// el marcado del servidor); después solo aplica el diff. Devuelve false
    /// si la región no existe en esta página.
    pub fn commit(&self, selector: &str, nodes: Vec<VNode>) -> bool {
        if !self.renderer.has_region(selector) {
            log::debug!("⏭️ [PAGE] Región {} no presente, se omite", selector);
            self.snapshots.borrow_mut().remove(selector);
            return false;
        }

        let patched = {
            let snapshots = self.snapshots.borrow();
            match snapshots.get(selector) {
                Some(previous) => {
                    let patches = diff_children(previous, &nodes);
                    if patches.is_empty() {
                        Ok(())
                    } else {
                        self.renderer.patch(selector, &patches)
                    }
                }
                None => Err("not mounted".to_string()),
            }
        };

        if let Err(reason) = patched {
            if reason != "not mounted" {
                log::warn!("⚠️ [PAGE] Patch de {} falló ({}), remontando", selector, reason);
            }
            if let Err(e) = self.renderer.mount(selector, &nodes) {
                log::error!("❌ [PAGE] No se pudo montar {}: {}", selector, e);
                self.snapshots.borrow_mut().remove(selector);
                return false;
            }
        }

        self.snapshots.borrow_mut().insert(selector.to_string(), nodes);
        true
    }

    /// Monta `nodes` desde cero aunque la región ya tenga contenido. Para
    /// contenido nuevo que no debe heredar nada del DOM anterior (otro diálogo).
    pub fn remount(&self, selector: &str, nodes: Vec<VNode>) -> bool {
        self.snapshots.borrow_mut().remove(selector);
        self.commit(selector, nodes)
    }
}
