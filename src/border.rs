use crate::length::{Length, LengthUsage};
use crate::model::{Border, Borders};
use crate::xml::{Element, bool_attr, color_attr, length_attr, string_attr};

/// Parse `w:pBdr`. Sides set to `none`/`nil` stay empty; a repeated side
/// keeps the last one.
pub fn parse_borders<N: Element>(node: N) -> Borders {
    let mut borders = Borders::default();

    for side in node.elements() {
        if !side.is_wml() {
            continue;
        }
        let slot = match side.local_name() {
            "top" => &mut borders.top,
            "bottom" => &mut borders.bottom,
            "left" | "start" => &mut borders.left,
            "right" | "end" => &mut borders.right,
            "between" => &mut borders.between,
            "bar" => &mut borders.bar,
            other => {
                log::trace!("skipping border side w:{other}");
                continue;
            }
        };
        *slot = parse_border(side);
    }

    borders
}

pub fn parse_border<N: Element>(node: N) -> Option<Border> {
    let style = string_attr(&node, "val").unwrap_or_else(|| "none".into());
    if style == "none" || style == "nil" {
        return None;
    }
    Some(Border {
        style,
        // sz is in eighths of a point
        width: length_attr(&node, "sz", LengthUsage::EighthPoint)
            .unwrap_or(Length::from_points(0.5)),
        space: length_attr(&node, "space", LengthUsage::Point).unwrap_or(Length::ZERO),
        color: color_attr(&node, "color"),
        shadow: bool_attr(&node, "shadow", false),
        frame: bool_attr(&node, "frame", false),
    })
}
