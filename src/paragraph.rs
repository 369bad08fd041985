use crate::border::parse_borders;
use crate::length::{Length, LengthUsage};
use crate::model::{
    Borders, Indentation, Justification, LineSpacing, ParagraphNumbering, ParagraphProperties,
    ParagraphTab, RunProperties, SectionProperties, TabLeader, TabStyle, TextAlignment,
};
use crate::run::parse_run_properties;
use crate::section::parse_section_properties;
use crate::spacing::{parse_indentation, parse_line_spacing};
use crate::xml::{Element, bool_attr, int_attr, length_attr, string_attr, wml_children};

/// The `w:pPr` children this crate understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropertyTag {
    Tabs,
    SectPr,
    NumPr,
    Spacing,
    Ind,
    TextAlignment,
    KeepLines,
    KeepNext,
    PageBreakBefore,
    OutlineLvl,
    PStyle,
    RPr,
    PBdr,
    Jc,
    ContextualSpacing,
    WidowControl,
}

impl PropertyTag {
    pub fn from_local_name(name: &str) -> Option<Self> {
        Some(match name {
            "tabs" => PropertyTag::Tabs,
            "sectPr" => PropertyTag::SectPr,
            "numPr" => PropertyTag::NumPr,
            "spacing" => PropertyTag::Spacing,
            "ind" => PropertyTag::Ind,
            "textAlignment" => PropertyTag::TextAlignment,
            "keepLines" => PropertyTag::KeepLines,
            "keepNext" => PropertyTag::KeepNext,
            "pageBreakBefore" => PropertyTag::PageBreakBefore,
            "outlineLvl" => PropertyTag::OutlineLvl,
            "pStyle" => PropertyTag::PStyle,
            "rPr" => PropertyTag::RPr,
            "pBdr" => PropertyTag::PBdr,
            "jc" => PropertyTag::Jc,
            "contextualSpacing" => PropertyTag::ContextualSpacing,
            "widowControl" => PropertyTag::WidowControl,
            _ => return None,
        })
    }
}

/// Parsers for the nested property elements. Swap individual entries to
/// change how one subtree is read without touching the dispatch.
pub struct SubParsers<N> {
    pub tabs: fn(N) -> Vec<ParagraphTab>,
    pub section: fn(N) -> SectionProperties,
    pub numbering: fn(N) -> ParagraphNumbering,
    pub line_spacing: fn(N) -> LineSpacing,
    pub indentation: fn(N) -> Indentation,
    pub run: fn(N) -> RunProperties,
    pub borders: fn(N) -> Borders,
}

impl<N: Element> Default for SubParsers<N> {
    fn default() -> Self {
        SubParsers {
            tabs: parse_tabs,
            section: parse_section_properties,
            numbering: parse_numbering,
            line_spacing: parse_line_spacing,
            indentation: parse_indentation,
            run: parse_run_properties,
            borders: parse_borders,
        }
    }
}

/// Resolve a `w:pPr` element into a [`ParagraphProperties`].
///
/// Children are applied in document order, so a repeated element overrides
/// the earlier one. Elements outside the WordprocessingML namespace and
/// unknown elements are skipped. Never fails: malformed values leave their
/// field at its default.
pub fn parse_paragraph_properties<N: Element>(ppr: N) -> ParagraphProperties {
    parse_paragraph_properties_with(ppr, &SubParsers::default())
}

pub fn parse_paragraph_properties_with<N: Element>(
    ppr: N,
    parsers: &SubParsers<N>,
) -> ParagraphProperties {
    let mut props = ParagraphProperties::default();
    for el in ppr.elements() {
        parse_paragraph_property(el, &mut props, parsers);
    }
    props
}

/// Apply one `w:pPr` child to `props`. Returns `false` when the element was
/// not recognized, so callers parsing a superset of `w:pPr` (style
/// definitions, for instance) can handle it themselves.
pub fn parse_paragraph_property<N: Element>(
    el: N,
    props: &mut ParagraphProperties,
    parsers: &SubParsers<N>,
) -> bool {
    if !el.is_wml() {
        log::trace!("skipping foreign element {:?}:{}", el.namespace(), el.local_name());
        return false;
    }
    let Some(tag) = PropertyTag::from_local_name(el.local_name()) else {
        log::trace!("skipping unknown paragraph property w:{}", el.local_name());
        return false;
    };

    match tag {
        PropertyTag::Tabs => props.tabs = (parsers.tabs)(el),
        PropertyTag::SectPr => props.section_props = Some((parsers.section)(el)),
        PropertyTag::NumPr => props.numbering = Some((parsers.numbering)(el)),
        PropertyTag::Spacing => props.line_spacing = Some((parsers.line_spacing)(el)),
        PropertyTag::Ind => props.indentation = Some((parsers.indentation)(el)),
        PropertyTag::RPr => props.run_props = Some((parsers.run)(el)),
        PropertyTag::PBdr => props.border = (parsers.borders)(el),
        PropertyTag::TextAlignment => {
            props.text_alignment = string_attr(&el, "val").map(|v| TextAlignment::from(v.as_str()))
        }
        PropertyTag::Jc => {
            props.justification = string_attr(&el, "val").map(|v| Justification::from(v.as_str()))
        }
        PropertyTag::KeepLines => props.keep_lines = bool_attr(&el, "val", true),
        PropertyTag::KeepNext => props.keep_next = bool_attr(&el, "val", true),
        PropertyTag::PageBreakBefore => props.page_break_before = bool_attr(&el, "val", true),
        PropertyTag::ContextualSpacing => props.contextual_spacing = bool_attr(&el, "val", true),
        PropertyTag::WidowControl => props.widow_control = Some(bool_attr(&el, "val", true)),
        PropertyTag::OutlineLvl => props.outline_level = int_attr(&el, "val"),
        PropertyTag::PStyle => props.style_id = string_attr(&el, "val"),
    }
    true
}

/// Tab stops of a `w:tabs` element, in document order. Duplicates and
/// `clear` stops are kept as written.
pub fn parse_tabs<N: Element>(node: N) -> Vec<ParagraphTab> {
    wml_children(node, "tab")
        .map(|tab| ParagraphTab {
            position: length_attr(&tab, "pos", LengthUsage::Dxa).unwrap_or(Length::ZERO),
            leader: string_attr(&tab, "leader")
                .and_then(|v| TabLeader::from_val(&v))
                .unwrap_or_default(),
            style: string_attr(&tab, "val")
                .and_then(|v| TabStyle::from_val(&v))
                .unwrap_or_default(),
        })
        .collect()
}

pub fn parse_numbering<N: Element>(node: N) -> ParagraphNumbering {
    let mut numbering = ParagraphNumbering::default();

    for el in node.elements() {
        if !el.is_wml() {
            continue;
        }
        match el.local_name() {
            "numId" => numbering.id = string_attr(&el, "val"),
            "ilvl" => numbering.level = int_attr(&el, "val"),
            _ => {}
        }
    }

    numbering
}
