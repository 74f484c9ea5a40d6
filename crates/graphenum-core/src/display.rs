//! Plain-text rendering of routes and cycles.
use crate::cycles::Cycle;
use crate::newtypes::Vertex;

/// Separator placed between consecutive vertices.
pub const ARROW: &str = " --> ";

/// Renders a vertex sequence as `"A --> B --> C"`.
pub fn render_path(vertices: &[Vertex]) -> String {
    vertices
        .iter()
        .map(Vertex::as_str)
        .collect::<Vec<_>>()
        .join(ARROW)
}

/// Renders a cycle as a closed walk, repeating the first vertex at the end:
/// `"A --> B --> C --> A"`.
pub fn render_cycle(cycle: &Cycle) -> String {
    let mut walk: Vec<Vertex> = cycle.vertices().to_vec();
    if let Some(first) = cycle.vertices().first() {
        walk.push(first.clone());
    }
    render_path(&walk)
}
