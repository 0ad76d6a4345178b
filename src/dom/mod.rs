// ============================================================================
// DOM MODULE - Nodos virtuales, diff y helpers para manipulación DOM
// ============================================================================

pub mod vnode;
pub mod builder;
pub mod diff;
pub mod renderer;
pub mod element;
pub mod events;
pub mod patch;

pub use vnode::{VNode, VElement};
pub use builder::ElementBuilder;
pub use diff::{diff_children, Patch};
pub use renderer::{Renderer, DomRenderer};
pub use element::*;
