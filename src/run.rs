use crate::length::LengthUsage;
use crate::model::{RunFonts, RunProperties, VerticalAlign};
use crate::xml::{Element, bool_attr, color_attr, length_attr, string_attr};

/// Parse a `w:rPr` into run defaults. Only explicitly present elements are
/// recorded; everything else is left to the style cascade.
pub fn parse_run_properties<N: Element>(node: N) -> RunProperties {
    let mut props = RunProperties::default();

    for el in node.elements() {
        if !el.is_wml() {
            continue;
        }
        let toggle = || Some(bool_attr(&el, "val", true));
        match el.local_name() {
            "rStyle" => props.style_id = string_attr(&el, "val"),
            "rFonts" => props.fonts = Some(parse_fonts(el)),
            "b" => props.bold = toggle(),
            "i" => props.italic = toggle(),
            "caps" => props.caps = toggle(),
            "smallCaps" => props.small_caps = toggle(),
            "strike" => props.strike = toggle(),
            "dstrike" => props.double_strike = toggle(),
            "vanish" => props.vanish = toggle(),
            "sz" => props.size = length_attr(&el, "val", LengthUsage::HalfPoint),
            "color" => props.color = color_attr(&el, "val"),
            "highlight" => props.highlight = string_attr(&el, "val"),
            "u" => props.underline = string_attr(&el, "val"),
            "vertAlign" => {
                props.vertical_align = match string_attr(&el, "val").as_deref() {
                    Some("superscript") => Some(VerticalAlign::Superscript),
                    Some("subscript") => Some(VerticalAlign::Subscript),
                    Some("baseline") => Some(VerticalAlign::Baseline),
                    _ => None,
                }
            }
            other => log::trace!("skipping run property w:{other}"),
        }
    }

    props
}

fn parse_fonts<N: Element>(node: N) -> RunFonts {
    RunFonts {
        ascii: string_attr(&node, "ascii"),
        h_ansi: string_attr(&node, "hAnsi"),
        east_asia: string_attr(&node, "eastAsia"),
        cs: string_attr(&node, "cs"),
        ascii_theme: string_attr(&node, "asciiTheme"),
    }
}
