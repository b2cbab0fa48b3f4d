//! Attribute-value shortening for operator labels
//!
//! Operator labels show at most two attributes, in declaration order, so a
//! parameter-heavy node cannot blow up its box. Only scalar attribute kinds
//! render; graphs are traversed instead of printed, and everything else is
//! omitted.

use crate::proto::attribute_proto::AttributeType;
use crate::proto::{AttributeProto, NodeProto};

use super::name::truncate_label;

/// Maximum number of attributes shown in one operator label
pub const MAX_LABEL_ATTRS: usize = 2;

/// Maximum characters of a string attribute value before truncation
const MAX_STRING_VALUE_LEN: usize = 20;

/// Render one attribute as `name=value`, or `None` when the kind has no
/// compact scalar rendering.
pub fn format_attribute(attr: &AttributeProto) -> Option<String> {
    let value = match attr.kind() {
        AttributeType::Int => format_int(attr.i),
        AttributeType::Float => format_float(attr.f),
        AttributeType::String => {
            truncate_label(&String::from_utf8_lossy(&attr.s), MAX_STRING_VALUE_LEN)
        }
        _ => return None,
    };
    Some(format!("{}={}", attr.name, value))
}

/// Collect up to [`MAX_LABEL_ATTRS`] renderable attributes of a node, in
/// declaration order.
pub fn attr_summary(node: &NodeProto) -> Vec<String> {
    node.attribute
        .iter()
        .filter_map(format_attribute)
        .take(MAX_LABEL_ATTRS)
        .collect()
}

/// Integers above 1000 render with a k suffix
fn format_int(i: i64) -> String {
    if i.abs() > 1000 {
        format!("{}k", i / 1000)
    } else {
        i.to_string()
    }
}

/// Tiny floats render in scientific notation
fn format_float(f: f32) -> String {
    if f != 0.0 && f.abs() < 1e-3 {
        format!("{f:e}")
    } else {
        f.to_string()
    }
}
