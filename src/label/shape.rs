//! Shape rendering
//!
//! Turns a resolved [`ShapeSpec`] into a compact bracketed string. Symbolic
//! axes go through a fixed abbreviation table; large static sizes are
//! rounded to kilo units; a few positional heuristics append an advisory
//! single-letter suffix. The heuristics are best-effort hints only — they
//! never alter the underlying numeric value and degrade to no suffix when
//! they do not match.

use crate::graph::shapes::{Dim, ShapeSpec};

/// Symbolic axis abbreviations, checked by substring strictly in order.
/// Longer names precede their own substrings so `total_sequence_length`
/// renders as `T`, not `S`.
const AXIS_ABBREVIATIONS: &[(&str, &str)] = &[
    ("total_sequence_length", "T"),
    ("sequence_length", "S"),
    ("batch_size", "B"),
    ("hidden_size", "H"),
    ("num_heads", "N"),
    ("head_size", "HS"),
    ("vocab_size", "V"),
    ("num_layers", "L"),
];

/// Render a shape for a tensor label, treating a missing table entry as
/// unknown.
pub fn format_shape_opt(shape: Option<&ShapeSpec>) -> String {
    match shape {
        Some(dims) => format_shape(dims),
        None => "?".to_string(),
    }
}

/// Render a shape as `[...]` with comma-space separators.
///
/// An empty dimension list renders as `?`.
pub fn format_shape(dims: &[Dim]) -> String {
    if dims.is_empty() {
        return "?".to_string();
    }

    let len = dims.len() as i64;
    let rendered: Vec<String> = dims
        .iter()
        .enumerate()
        .map(|(i, d)| {
            // Leading two dims are addressed from the front, the rest from
            // the back, so the heuristics see trailing positions as negative
            let i = i as i64;
            let pos = if i >= 2 { i - len } else { i };
            format_dim(d, pos)
        })
        .collect();

    format!("[{}]", rendered.join(", "))
}

fn format_dim(dim: &Dim, pos: i64) -> String {
    match dim {
        Dim::Sym(name) => {
            for &(axis, short) in AXIS_ABBREVIATIONS {
                if name.contains(axis) {
                    return short.to_string();
                }
            }
            name.clone()
        }
        Dim::Fixed(n) => {
            let val = abbreviate(*n);
            match (*n, pos) {
                // Often the attention head count
                (8, 1 | -3) => format!("{val}N"),
                // Often the per-head dimension
                (64, -1 | -2) => format!("{val}D"),
                // Often the hidden size
                (2048 | 4096, -1) => format!("{val}H"),
                _ => val,
            }
        }
    }
}

/// Kilo-round a static dimension: binary kilo when evenly divisible by
/// 1024, decimal kilo otherwise, verbatim below the threshold.
fn abbreviate(n: i64) -> String {
    if n >= 1024 {
        if n % 1024 == 0 {
            format!("{}K", n / 1024)
        } else {
            format!("{}k", n / 1000)
        }
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(dims: &[Dim]) -> ShapeSpec {
        dims.iter().cloned().collect()
    }

    fn sym(name: &str) -> Dim {
        Dim::Sym(name.to_string())
    }

    #[test]
    fn test_empty_and_unknown_render_as_question_mark() {
        assert_eq!(format_shape(&[]), "?");
        assert_eq!(format_shape_opt(None), "?");
    }

    #[test]
    fn test_mixed_shape() {
        let s = spec(&[Dim::Fixed(2), sym("sequence_length"), Dim::Fixed(8), Dim::Fixed(64)]);
        // Symbolic axis abbreviates, small integers stay plain digits, the
        // trailing 64 picks up the head-dimension hint
        assert_eq!(format_shape(&s), "[2, S, 8, 64D]");
    }

    #[test]
    fn test_axis_abbreviations() {
        assert_eq!(format_shape(&spec(&[sym("batch_size")])), "[B]");
        assert_eq!(format_shape(&spec(&[sym("vocab_size")])), "[V]");
        // longest-first ordering: the more specific axis wins
        assert_eq!(format_shape(&spec(&[sym("total_sequence_length")])), "[T]");
        // unknown axis names pass through untouched
        assert_eq!(format_shape(&spec(&[sym("beam_width")])), "[beam_width]");
    }

    #[test]
    fn test_kilo_rounding() {
        assert_eq!(format_shape(&spec(&[Dim::Fixed(1024)])), "[1K]");
        assert_eq!(format_shape(&spec(&[Dim::Fixed(32000)])), "[32k]");
        assert_eq!(format_shape(&spec(&[Dim::Fixed(1000)])), "[1000]");
    }

    #[test]
    fn test_head_count_heuristic_positions() {
        // 8 in second position looks like a head count
        let s = spec(&[sym("batch_size"), Dim::Fixed(8), sym("sequence_length"), Dim::Fixed(64)]);
        assert_eq!(format_shape(&s), "[B, 8N, S, 64D]");

        // 8 in the trailing position does not
        let s = spec(&[Dim::Fixed(2), Dim::Fixed(3), Dim::Fixed(8)]);
        assert_eq!(format_shape(&s), "[2, 3, 8]");
    }

    #[test]
    fn test_hidden_size_heuristic() {
        let s = spec(&[sym("batch_size"), sym("sequence_length"), Dim::Fixed(2048)]);
        assert_eq!(format_shape(&s), "[B, S, 2KH]");
    }

    #[test]
    fn test_heuristics_degrade_gracefully() {
        // 64 leading a long shape gets no suffix
        let s = spec(&[Dim::Fixed(64), Dim::Fixed(3), Dim::Fixed(7), Dim::Fixed(7)]);
        assert_eq!(format_shape(&s), "[64, 3, 7, 7]");
    }

    #[test]
    fn test_deterministic() {
        let s = spec(&[Dim::Fixed(1), sym("sequence_length"), Dim::Fixed(4096)]);
        assert_eq!(format_shape(&s), format_shape(&s));
    }
}
