//! Immutable markup tree and its HTML serializer.
//!
//! Views build plain [`Element`] values and hand them to [`Document`] for rendering, so every
//! conditional branch can be inspected as data before any string is produced.

pub mod node;
pub mod render;

pub use node::{Attr, Element, Node};
pub use render::{escape_html, render_node, Document};
