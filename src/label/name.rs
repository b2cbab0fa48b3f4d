//! Name shortening and identifier escaping
//!
//! Exported transformer graphs carry long hierarchical tensor names like
//! `/model/layers.11/self_attn/q_proj/MatMul_output_0`. `clean_name`
//! compresses these for display; `escape_name` produces the canonical node
//! identifier used for edge endpoints, so graph correctness never depends on
//! label uniqueness.

/// Default maximum label length before ellipsis truncation
pub const DEFAULT_MAX_LEN: usize = 30;

/// Known path prefixes, stripped once at the string start and again wherever
/// they appear immediately after a path separator.
const STRIP_PREFIXES: &[&str] = &[
    "/model/",
    "model.",
    "/output_0",
    "/input_0",
    "attn_mask_reformat/attn_mask_subgraph/",
];

/// Substring replacements, applied strictly in order. Longer patterns come
/// before rules that would also match a fragment of them (`layers.` before
/// anything matching `layer`), so an earlier rule cannot corrupt a later
/// match.
const REPLACEMENTS: &[(&str, &str)] = &[
    ("layers.", "L"),
    ("attention", "attn"),
    ("layernorm", "LN"),
    ("input_", "in_"),
    ("output_", "out_"),
    ("weight", "w"),
    ("MatMul", "MM"),
    ("ReduceSum", "RSum"),
    ("Constant", "Const"),
    ("Gather", "Gath"),
    ("constant_nodes", "const"),
    ("TensorProto", "TP"),
    ("subgraph", "sg"),
    ("reformat", "fmt"),
];

/// Truncate to `max_length` characters, ellipsis included, when too long.
pub fn truncate_label(name: &str, max_length: usize) -> String {
    if name.chars().count() > max_length {
        let head: String = name.chars().take(max_length.saturating_sub(3)).collect();
        format!("{head}...")
    } else {
        name.to_string()
    }
}

/// Shorten a raw tensor or operator name for display using the default
/// length limit.
pub fn clean_name(raw: &str) -> String {
    clean_name_limited(raw, DEFAULT_MAX_LEN)
}

/// Shorten a raw name for display: strip known prefixes, apply the ordered
/// replacement table, collapse long paths to `first/../last` (dropping
/// purely numeric index segments), and truncate with an ellipsis.
///
/// Collisions between cleaned names are possible and accepted.
pub fn clean_name_limited(raw: &str, max_length: usize) -> String {
    let mut name = raw.replace("\\n", "\n");

    for &prefix in STRIP_PREFIXES {
        if let Some(rest) = name.strip_prefix(prefix) {
            name = rest.to_string();
        }
        // Also strip occurrences right after a path separator
        name = name.replace(&format!("/{prefix}"), "/");
    }

    for &(pattern, replacement) in REPLACEMENTS {
        name = name.replace(pattern, replacement);
    }

    if name.contains('/') {
        let parts: Vec<&str> = name.split('/').collect();
        if parts.len() > 2 {
            // Numeric segments are index placeholders; keep the first and
            // last meaningful parts
            let filtered: Vec<&str> = parts
                .into_iter()
                .filter(|p| !p.is_empty() && !p.chars().all(|c| c.is_ascii_digit()))
                .collect();
            name = if filtered.len() > 2 {
                format!("{}/../{}", filtered[0], filtered[filtered.len() - 1])
            } else {
                filtered.join("/")
            };
        }
    }

    truncate_label(&name, max_length)
}

/// Escape a raw name into the canonical node identifier.
///
/// Colons, backslashes, double quotes, and newlines are escaped so the
/// identifier embeds safely in the graph container and the rendering
/// template. Two occurrences of the same raw name always escape to the same
/// identifier, and distinct raw names never collide over the practical
/// input alphabet.
pub fn escape_name(raw: &str) -> String {
    raw.replace(':', "<colon>")
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_leading_prefix() {
        assert_eq!(
            clean_name("/model/embed_tokens/Gather"),
            "embed_tokens/Gath"
        );
        assert_eq!(clean_name("model.norm.weight"), "norm.w");
    }

    #[test]
    fn test_strip_prefix_after_separator() {
        // `model.` also disappears mid-path, right after a slash
        assert_eq!(clean_name("a/model.b"), "a/b");
    }

    #[test]
    fn test_replacement_table_order() {
        // `layers.` must fire as a unit before anything else touches it
        assert_eq!(clean_name("layers.5.attention"), "L5.attn");
        // exact order of the table is observable: input_ → in_
        assert_eq!(clean_name("input_ids"), "in_ids");
        assert_eq!(clean_name("Constant_output_0"), "Const_out_0");
    }

    #[test]
    fn test_path_collapse_drops_numeric_segments() {
        assert_eq!(
            clean_name_limited("/model/layers.11/self_attn/q_proj/MatMul", 60),
            "L11/../MM"
        );
        // two meaningful segments stay joined, no `..` inserted
        assert_eq!(clean_name("a/12/b"), "a/b");
    }

    #[test]
    fn test_truncation() {
        let long = "x".repeat(40);
        let cleaned = clean_name(&long);
        assert_eq!(cleaned.chars().count(), DEFAULT_MAX_LEN);
        assert!(cleaned.ends_with("..."));
    }

    #[test]
    fn test_clean_name_idempotent() {
        for raw in [
            "/model/layers.11/self_attn/q_proj/MatMul",
            "input_ids",
            "a/12/b/34/c",
            "plain_tensor",
        ] {
            let once = clean_name(raw);
            assert_eq!(clean_name(&once), once, "not idempotent for {raw}");
        }
    }

    #[test]
    fn test_escape_name_stable() {
        let raw = "tensor:with\"specials\\and\nnewline";
        assert_eq!(escape_name(raw), escape_name(raw));
    }

    #[test]
    fn test_escape_name_injective() {
        // Names differing only by placement of escaped characters must not
        // collide after escaping
        let names = [
            "a:b", "a\\b", "a\"b", "a\nb", "ab", "a\\nb", "a\\\nb", ":ab", "ab:",
        ];
        let escaped: Vec<String> = names.iter().map(|n| escape_name(n)).collect();
        for i in 0..escaped.len() {
            for j in (i + 1)..escaped.len() {
                assert_ne!(escaped[i], escaped[j], "{:?} vs {:?}", names[i], names[j]);
            }
        }
    }

    #[test]
    fn test_escape_name_no_raw_specials() {
        let escaped = escape_name("a:b\"c\\d\ne");
        assert!(!escaped.contains(':'));
        assert!(!escaped.contains('\n'));
        assert!(!escaped.contains('"'));
    }
}
