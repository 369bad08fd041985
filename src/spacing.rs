use crate::length::LengthUsage;
use crate::model::{Indentation, LineHeight, LineSpacing};
use crate::xml::{Element, int_attr, length_attr, string_attr, toggle_attr};

/// Parse `w:spacing`. `w:line` is in 240ths of a line when the rule is `auto`
/// (or missing) and in twips otherwise.
pub fn parse_line_spacing<N: Element>(node: N) -> LineSpacing {
    let line = match string_attr(&node, "lineRule").as_deref() {
        Some("exact") => length_attr(&node, "line", LengthUsage::Dxa).map(LineHeight::Exact),
        Some("atLeast") => length_attr(&node, "line", LengthUsage::Dxa).map(LineHeight::AtLeast),
        _ => int_attr(&node, "line").map(|l| LineHeight::Auto(l as f32 / 240.0)),
    };

    LineSpacing {
        before: length_attr(&node, "before", LengthUsage::Dxa),
        after: length_attr(&node, "after", LengthUsage::Dxa),
        before_autospacing: toggle_attr(&node, "beforeAutospacing"),
        after_autospacing: toggle_attr(&node, "afterAutospacing"),
        line,
    }
}

/// Parse `w:ind`. The transitional `left`/`right` names are read when the
/// strict `start`/`end` ones are absent.
pub fn parse_indentation<N: Element>(node: N) -> Indentation {
    let dxa = |name: &str| length_attr(&node, name, LengthUsage::Dxa);
    Indentation {
        start: dxa("start").or_else(|| dxa("left")),
        end: dxa("end").or_else(|| dxa("right")),
        first_line: dxa("firstLine"),
        hanging: dxa("hanging"),
    }
}
