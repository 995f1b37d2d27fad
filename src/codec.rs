//! Conversion of string parameters into typed layout values.
//!
//! Nothing in here fails: malformed input falls back to a fixed value so that one bad hint never
//! aborts a tree build.

use crate::toolkit::Alignment;
use crate::tree::VisualTreeNode;
use std::num::ParseFloatError;

/// Reads an integer parameter.
///
/// An absent parameter yields `fallback`; a present but malformed one yields **0**.
pub fn read_int(name: &str, node: &VisualTreeNode, fallback: i32) -> i32 {
    let default = fallback.to_string();
    node.get_additional_parameter(name, &default)
        .parse()
        .unwrap_or(0)
}

/// Parses a comma separated list of expand ratios.
///
/// Malformed entries become `0.0` and are logged.
pub fn parse_expand_ratios(raw: &str) -> Vec<f32> {
    parse_expand_ratios_with(raw, |token, err| {
        tracing::warn!("could not parse expand ratio {:?}: {}", token, err);
    })
}

/// Like [`parse_expand_ratios`], but reports malformed entries to `on_error` instead of the log.
pub fn parse_expand_ratios_with<F>(raw: &str, mut on_error: F) -> Vec<f32>
where
    F: FnMut(&str, ParseFloatError),
{
    if raw.is_empty() {
        return Vec::new();
    }

    raw.split(',')
        .map(|token| match token.trim().parse::<f32>() {
            Ok(ratio) => ratio,
            Err(err) => {
                on_error(token, err);
                0.
            }
        })
        .collect()
}

/// Parses a single expand ratio; malformed input becomes `0.0` and is logged.
pub fn parse_expand_ratio(raw: &str) -> f32 {
    match raw.trim().parse() {
        Ok(ratio) => ratio,
        Err(err) => {
            tracing::warn!("could not parse expand ratio {:?}: {}", raw, err);
            0.
        }
    }
}

/// Parses an alignment token such as `top_left`, `Middle-Center` or `BOTTOM RIGHT`.
///
/// Unknown or empty input yields [`Alignment::TopLeft`].
pub fn parse_alignment(raw: &str) -> Alignment {
    let token: String = raw
        .trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            c => c.to_ascii_lowercase(),
        })
        .collect();

    match token.as_str() {
        "top_left" | "left_top" => Alignment::TopLeft,
        "top_center" | "center_top" | "top" => Alignment::TopCenter,
        "top_right" | "right_top" => Alignment::TopRight,
        "middle_left" | "left_middle" | "left" => Alignment::MiddleLeft,
        "middle_center" | "center_middle" | "center" | "middle" => Alignment::MiddleCenter,
        "middle_right" | "right_middle" | "right" => Alignment::MiddleRight,
        "bottom_left" | "left_bottom" => Alignment::BottomLeft,
        "bottom_center" | "center_bottom" | "bottom" => Alignment::BottomCenter,
        "bottom_right" | "right_bottom" => Alignment::BottomRight,
        _ => Alignment::default(),
    }
}

#[cfg(test)]
use crate::toolkit::Label;
#[cfg(test)]
use crate::tree::VisualTree;

#[cfg(test)]
fn node_with(name: &str, value: &str) -> VisualTreeNode {
    let mut tree = VisualTree::new();
    let id = tree.set_root(Label::default());
    tree.set_parameter(id, name, value).unwrap();
    tree.get(id).unwrap().clone()
}

#[test]
fn test_read_int_distinguishes_absent_from_malformed() {
    let node = node_with("GridLayout.row", "7");
    assert_eq!(read_int("GridLayout.row", &node, -1), 7);
    assert_eq!(read_int("GridLayout.column", &node, -1), -1);
    assert_eq!(read_int("GridLayout.column", &node, 3), 3);

    let node = node_with("GridLayout.row", "seven");
    assert_eq!(read_int("GridLayout.row", &node, -1), 0);
    assert_eq!(read_int("GridLayout.row", &node, 5), 0);

    // no trimming
    let node = node_with("GridLayout.row", " 2");
    assert_eq!(read_int("GridLayout.row", &node, -1), 0);

    let node = node_with("GridLayout.row", "-4");
    assert_eq!(read_int("GridLayout.row", &node, -1), -4);
}

#[test]
fn test_expand_ratios_fall_back_per_token() {
    let mut warnings = Vec::new();
    let ratios = parse_expand_ratios_with("1.0,,abc,2.5", |token, _| {
        warnings.push(token.to_string())
    });
    assert_eq!(ratios, vec![1.0, 0.0, 0.0, 2.5]);
    assert_eq!(warnings, vec!["".to_string(), "abc".to_string()]);
}

#[test]
fn test_valid_expand_ratios_do_not_warn() {
    let mut warnings = 0;
    let ratios = parse_expand_ratios_with("0.5, 1,2e0", |_, _| warnings += 1);
    assert_eq!(ratios, vec![0.5, 1.0, 2.0]);
    assert_eq!(warnings, 0);

    assert!(parse_expand_ratios("").is_empty());
    assert_eq!(parse_expand_ratios("x"), vec![0.0]);
}

#[test]
fn test_single_expand_ratio() {
    assert_eq!(parse_expand_ratio(" 1.5 "), 1.5);
    assert_eq!(parse_expand_ratio("wide"), 0.0);
}

#[test]
fn test_alignment_tokens() {
    assert_eq!(parse_alignment("top_left"), Alignment::TopLeft);
    assert_eq!(parse_alignment("MIDDLE_CENTER"), Alignment::MiddleCenter);
    assert_eq!(parse_alignment("bottom-right"), Alignment::BottomRight);
    assert_eq!(parse_alignment("Top Right"), Alignment::TopRight);
    assert_eq!(parse_alignment("center"), Alignment::MiddleCenter);
    assert_eq!(parse_alignment("bottom"), Alignment::BottomCenter);
    assert_eq!(parse_alignment(""), Alignment::TopLeft);
    assert_eq!(parse_alignment("diagonal"), Alignment::TopLeft);
}
