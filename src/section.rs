use crate::length::LengthUsage;
use crate::model::{
    Columns, HeaderFooterKind, HeaderFooterRef, PageMargins, PageSize, SectionBreakType,
    SectionProperties,
};
use crate::xml::{Element, REL_NS, bool_attr, int_attr, length_attr, string_attr, toggle_attr};

pub fn parse_section_properties<N: Element>(node: N) -> SectionProperties {
    let mut props = SectionProperties::default();

    for el in node.elements() {
        if !el.is_wml() {
            continue;
        }
        let dxa = |name: &str| length_attr(&el, name, LengthUsage::Dxa);
        match el.local_name() {
            "type" => props.break_type = parse_break_type(el),
            "pgSz" => {
                props.page_size = Some(PageSize {
                    width: dxa("w"),
                    height: dxa("h"),
                    landscape: string_attr(&el, "orient").as_deref() == Some("landscape"),
                })
            }
            "pgMar" => {
                props.page_margins = Some(PageMargins {
                    top: dxa("top"),
                    right: dxa("right"),
                    bottom: dxa("bottom"),
                    left: dxa("left"),
                    header: dxa("header"),
                    footer: dxa("footer"),
                    gutter: dxa("gutter"),
                })
            }
            "cols" => {
                props.columns = Some(Columns {
                    count: int_attr(&el, "num"),
                    space: dxa("space"),
                    equal_width: toggle_attr(&el, "equalWidth"),
                })
            }
            "titlePg" => props.title_page = bool_attr(&el, "val", true),
            "headerReference" => props.headers.extend(parse_reference(el)),
            "footerReference" => props.footers.extend(parse_reference(el)),
            other => log::trace!("skipping section property w:{other}"),
        }
    }

    props
}

fn parse_break_type<N: Element>(node: N) -> Option<SectionBreakType> {
    // w:type without a value means the schema default, nextPage
    match string_attr(&node, "val").as_deref() {
        None | Some("nextPage") => Some(SectionBreakType::NextPage),
        Some("continuous") => Some(SectionBreakType::Continuous),
        Some("evenPage") => Some(SectionBreakType::EvenPage),
        Some("oddPage") => Some(SectionBreakType::OddPage),
        Some("nextColumn") => Some(SectionBreakType::NextColumn),
        Some(other) => {
            log::warn!("unknown section break type {other:?}");
            None
        }
    }
}

fn parse_reference<N: Element>(node: N) -> Option<HeaderFooterRef> {
    let relationship_id = node.attribute_ns(REL_NS, "id")?.to_string();
    let kind = match string_attr(&node, "type").as_deref() {
        Some("first") => HeaderFooterKind::First,
        Some("even") => HeaderFooterKind::Even,
        _ => HeaderFooterKind::Default,
    };
    Some(HeaderFooterRef {
        kind,
        relationship_id,
    })
}
