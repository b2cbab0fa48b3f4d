//! Shape table construction
//!
//! Builds the name → shape mapping consulted for every tensor label. Shapes
//! come from four independent and possibly inconsistent sources; the table is
//! built once per model and never mutated during a walk.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::debug;

use crate::proto::GraphProto;

/// One dimension of a tensor shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dim {
    /// Static size known at export time
    Fixed(i64),
    /// Symbolic axis name, resolved only at execution time
    Sym(String),
}

/// Ordered dimension list for one tensor. Empty means the shape is unknown
/// or scalar; both render as `?`.
pub type ShapeSpec = SmallVec<[Dim; 4]>;

/// Type alias for the shape table: tensor name → shape
pub type ShapeMap = FxHashMap<String, ShapeSpec>;

/// Build the shape table from a graph.
///
/// Sources are visited in fixed precedence order: initializers, declared
/// inputs, declared outputs, then intermediate `value_info` records. The
/// first insertion for a name wins; later duplicates are ignored. A source
/// that declares no shape for a tensor is skipped for that tensor only —
/// absence from the table is the unknown-shape signal, and nothing here
/// fails the caller.
pub fn build_shape_map(graph: &GraphProto) -> ShapeMap {
    let mut map = ShapeMap::default();

    for init in &graph.initializer {
        if !init.name.is_empty() && !map.contains_key(&init.name) {
            let dims = init.dims.iter().map(|&d| Dim::Fixed(d)).collect();
            map.insert(init.name.clone(), dims);
        }
    }

    for vi in graph
        .input
        .iter()
        .chain(graph.output.iter())
        .chain(graph.value_info.iter())
    {
        if vi.name.is_empty() || map.contains_key(&vi.name) {
            continue;
        }
        match vi.get_dims() {
            Some(dims) => {
                let spec = dims
                    .into_iter()
                    .map(|d| match d {
                        Ok(v) => Dim::Fixed(v),
                        Err(param) => Dim::Sym(param),
                    })
                    .collect();
                map.insert(vi.name.clone(), spec);
            }
            None => {
                debug!(tensor = %vi.name, "no shape declared, falling back to unknown");
            }
        }
    }

    map
}
