use docxside_props::{
    Border, Borders, HeaderFooterKind, Indentation, Justification, Length, LineHeight,
    ParagraphNumbering, ParagraphProperties, ParagraphTab, SectionBreakType, SubParsers,
    TabLeader, TabStyle, TextAlignment, VerticalAlign, parse_paragraph_properties,
    parse_paragraph_properties_with, parse_paragraph_property,
};

const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const R_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

fn wrap(inner: &str) -> String {
    format!(
        r#"<w:pPr xmlns:w="{W_NS}" xmlns:r="{R_NS}" xmlns:w14="urn:example:vendor">{inner}</w:pPr>"#
    )
}

fn ppr(inner: &str) -> ParagraphProperties {
    let xml = wrap(inner);
    let doc = roxmltree::Document::parse(&xml).unwrap();
    parse_paragraph_properties(doc.root_element())
}

fn pts(points: f32) -> Option<Length> {
    Some(Length::from_points(points))
}

#[test]
fn empty_properties_are_default() {
    assert_eq!(ppr(""), ParagraphProperties::default());
    assert_eq!(ppr("   "), ParagraphProperties::default());
}

#[test]
fn default_record_is_inert() {
    let props = ParagraphProperties::default();
    assert!(props.tabs.is_empty());
    assert!(props.border.is_empty());
    assert!(!props.keep_lines && !props.keep_next && !props.page_break_before);
    assert_eq!(props.numbering, None);
    assert_eq!(props.outline_level, None);
    assert_eq!(props.style_id, None);
}

#[test]
fn tabs_keep_document_order() {
    let props = ppr(
        r#"<w:tabs>
            <w:tab w:val="right" w:leader="dot" w:pos="9000"/>
            <w:tab w:val="left" w:pos="720"/>
            <w:tab w:val="decimal" w:leader="middleDot" w:pos="4320"/>
        </w:tabs>"#,
    );
    assert_eq!(
        props.tabs,
        vec![
            ParagraphTab {
                style: TabStyle::Right,
                leader: TabLeader::Dot,
                position: Length::from_points(450.0),
            },
            ParagraphTab {
                style: TabStyle::Left,
                leader: TabLeader::None,
                position: Length::from_points(36.0),
            },
            ParagraphTab {
                style: TabStyle::Decimal,
                leader: TabLeader::MiddleDot,
                position: Length::from_points(216.0),
            },
        ]
    );
}

#[test]
fn duplicate_and_clear_tabs_pass_through() {
    let props = ppr(
        r#"<w:tabs>
            <w:tab w:val="center" w:pos="720"/>
            <w:tab w:val="center" w:pos="720"/>
            <w:tab w:val="clear" w:pos="1440"/>
        </w:tabs>"#,
    );
    assert_eq!(props.tabs.len(), 3);
    assert_eq!(props.tabs[0], props.tabs[1]);
    assert_eq!(props.tabs[2].style, TabStyle::Clear);
}

#[test]
fn unknown_tab_values_fall_back_to_defaults() {
    let props = ppr(r#"<w:tabs><w:tab w:val="sideways" w:leader="wavy"/></w:tabs>"#);
    assert_eq!(
        props.tabs,
        vec![ParagraphTab {
            style: TabStyle::Left,
            leader: TabLeader::None,
            position: Length::ZERO,
        }]
    );
}

#[test]
fn repeated_tabs_replace_earlier_list() {
    let props = ppr(
        r#"<w:tabs><w:tab w:val="left" w:pos="720"/><w:tab w:val="left" w:pos="1440"/></w:tabs>
           <w:tabs><w:tab w:val="right" w:pos="2880"/></w:tabs>"#,
    );
    assert_eq!(props.tabs.len(), 1);
    assert_eq!(props.tabs[0].style, TabStyle::Right);
    assert_eq!(props.tabs[0].position, Length::from_points(144.0));
}

#[test]
fn last_style_wins() {
    let props = ppr(r#"<w:pStyle w:val="Heading1"/><w:pStyle w:val="Body"/>"#);
    assert_eq!(props.style_id.as_deref(), Some("Body"));
}

#[test]
fn page_break_before_toggle() {
    assert!(ppr("<w:pageBreakBefore/>").page_break_before);
    assert!(!ppr(r#"<w:pageBreakBefore w:val="0"/>"#).page_break_before);
    assert!(!ppr(r#"<w:pageBreakBefore w:val="false"/>"#).page_break_before);
    assert!(ppr(r#"<w:pageBreakBefore w:val="1"/>"#).page_break_before);
    assert!(!ppr("").page_break_before);
}

#[test]
fn keep_lines_and_keep_next_are_read_from_their_own_elements() {
    let next = ppr("<w:keepNext/>");
    assert!(next.keep_next);
    assert!(!next.keep_lines);

    let lines = ppr("<w:keepLines/>");
    assert!(lines.keep_lines);
    assert!(!lines.keep_next);

    let both = ppr(r#"<w:keepNext/><w:keepLines/><w:keepNext w:val="0"/>"#);
    assert!(both.keep_lines);
    assert!(!both.keep_next);
}

#[test]
fn foreign_namespace_is_ignored() {
    let props = ppr(r#"<w14:tabs><w14:tab w14:val="left" w14:pos="720"/></w14:tabs>"#);
    assert!(props.tabs.is_empty());
    assert_eq!(props, ParagraphProperties::default());
}

#[test]
fn vendor_attributes_do_not_stand_in_for_val() {
    let props = ppr(r#"<w:pageBreakBefore w14:val="0"/><w:outlineLvl w14:val="4"/>"#);
    assert!(props.page_break_before);
    assert_eq!(props.outline_level, None);
}

#[test]
fn unprefixed_element_outside_namespace_is_ignored() {
    let xml = format!(r#"<w:pPr xmlns:w="{W_NS}"><pStyle val="Title"/></w:pPr>"#);
    let doc = roxmltree::Document::parse(&xml).unwrap();
    assert_eq!(
        parse_paragraph_properties(doc.root_element()),
        ParagraphProperties::default()
    );
}

#[test]
fn numbering_level_stays_unset_without_ilvl() {
    let props = ppr(r#"<w:numPr><w:numId w:val="7"/></w:numPr>"#);
    assert_eq!(
        props.numbering,
        Some(ParagraphNumbering {
            id: Some("7".into()),
            level: None,
        })
    );
}

#[test]
fn numbering_reads_both_fields_and_ignores_others() {
    let props = ppr(
        r#"<w:numPr>
            <w:ilvl w:val="2"/>
            <w:ins w:id="1"/>
            <w:numId w:val="3"/>
            <w:ilvl w:val="1"/>
        </w:numPr>"#,
    );
    assert_eq!(
        props.numbering,
        Some(ParagraphNumbering {
            id: Some("3".into()),
            level: Some(1),
        })
    );
}

#[test]
fn unknown_tags_are_tolerated() {
    let props = ppr(
        r#"<w:snapToGrid w:val="0"/><w:outlineLvl w:val="2"/><w:suppressAutoHyphens/><w:bidi/>"#,
    );
    assert_eq!(
        props,
        ParagraphProperties {
            outline_level: Some(2),
            ..ParagraphProperties::default()
        }
    );
}

#[test]
fn malformed_values_fail_soft_per_field() {
    let props = ppr(
        r#"<w:outlineLvl w:val="second"/>
           <w:pStyle w:val="Quote"/>
           <w:spacing w:before="lots" w:after="120"/>"#,
    );
    assert_eq!(props.outline_level, None);
    assert_eq!(props.style_id.as_deref(), Some("Quote"));
    let spacing = props.line_spacing.unwrap();
    assert_eq!(spacing.before, None);
    assert_eq!(spacing.after, pts(6.0));
}

#[test]
fn missing_value_resets_field() {
    let props = ppr(r#"<w:pStyle w:val="Heading1"/><w:pStyle/>"#);
    assert_eq!(props.style_id, None);
}

#[test]
fn text_alignment_known_and_passthrough() {
    assert_eq!(
        ppr(r#"<w:textAlignment w:val="center"/>"#).text_alignment,
        Some(TextAlignment::Center)
    );
    assert_eq!(
        ppr(r#"<w:textAlignment w:val="baseline"/>"#).text_alignment,
        Some(TextAlignment::Baseline)
    );
    assert_eq!(
        ppr(r#"<w:textAlignment w:val="middle"/>"#).text_alignment,
        Some(TextAlignment::Other("middle".into()))
    );
    assert_eq!(ppr("<w:textAlignment/>").text_alignment, None);
}

#[test]
fn justification_and_contextual_spacing() {
    let props = ppr(r#"<w:jc w:val="both"/><w:contextualSpacing/><w:widowControl w:val="0"/>"#);
    assert_eq!(props.justification, Some(Justification::Both));
    assert!(props.contextual_spacing);
    assert_eq!(props.widow_control, Some(false));
    assert_eq!(ppr(r#"<w:jc w:val="right"/>"#).justification, Some(Justification::End));
}

#[test]
fn line_spacing_rules() {
    let auto = ppr(r#"<w:spacing w:before="240" w:after="160" w:line="276" w:lineRule="auto"/>"#)
        .line_spacing
        .unwrap();
    assert_eq!(auto.before, pts(12.0));
    assert_eq!(auto.after, pts(8.0));
    assert_eq!(auto.line, Some(LineHeight::Auto(276.0 / 240.0)));

    let exact = ppr(r#"<w:spacing w:line="360" w:lineRule="exact"/>"#).line_spacing.unwrap();
    assert_eq!(exact.line, Some(LineHeight::Exact(Length::from_points(18.0))));

    let at_least = ppr(r#"<w:spacing w:line="300" w:lineRule="atLeast" w:beforeAutospacing="1"/>"#)
        .line_spacing
        .unwrap();
    assert_eq!(at_least.line, Some(LineHeight::AtLeast(Length::from_points(15.0))));
    assert_eq!(at_least.before_autospacing, Some(true));
    assert_eq!(at_least.after_autospacing, None);

    let unruled = ppr(r#"<w:spacing w:line="480"/>"#).line_spacing.unwrap();
    assert_eq!(unruled.line, Some(LineHeight::Auto(2.0)));
}

#[test]
fn indentation_accepts_both_naming_schemes() {
    assert_eq!(
        ppr(r#"<w:ind w:left="720" w:hanging="360"/>"#).indentation,
        Some(Indentation {
            start: pts(36.0),
            end: None,
            first_line: None,
            hanging: pts(18.0),
        })
    );
    assert_eq!(
        ppr(r#"<w:ind w:start="1440" w:end="720" w:firstLine="0.5in"/>"#).indentation,
        Some(Indentation {
            start: pts(72.0),
            end: pts(36.0),
            first_line: pts(36.0),
            hanging: None,
        })
    );
}

#[test]
fn borders_per_side() {
    let props = ppr(
        r#"<w:pBdr>
            <w:top w:val="single" w:sz="4" w:space="1" w:color="FF0000"/>
            <w:bottom w:val="nil"/>
            <w:between w:val="double" w:sz="12" w:color="auto" w:shadow="1"/>
        </w:pBdr>"#,
    );
    assert_eq!(
        props.border,
        Borders {
            top: Some(Border {
                style: "single".into(),
                width: Length::from_points(0.5),
                space: Length::from_points(1.0),
                color: Some([255, 0, 0]),
                shadow: false,
                frame: false,
            }),
            between: Some(Border {
                style: "double".into(),
                width: Length::from_points(1.5),
                space: Length::ZERO,
                color: None,
                shadow: true,
                frame: false,
            }),
            ..Borders::default()
        }
    );
}

#[test]
fn run_defaults() {
    let run = ppr(
        r#"<w:rPr>
            <w:rStyle w:val="Strong"/>
            <w:rFonts w:ascii="Calibri" w:hAnsi="Calibri" w:asciiTheme="minorHAnsi"/>
            <w:b/>
            <w:i w:val="0"/>
            <w:sz w:val="28"/>
            <w:color w:val="1F3864"/>
            <w:vertAlign w:val="superscript"/>
            <w:u w:val="double"/>
            <w:lang w:val="en-US"/>
        </w:rPr>"#,
    )
    .run_props
    .unwrap();
    assert_eq!(run.style_id.as_deref(), Some("Strong"));
    let fonts = run.fonts.unwrap();
    assert_eq!(fonts.ascii.as_deref(), Some("Calibri"));
    assert_eq!(fonts.ascii_theme.as_deref(), Some("minorHAnsi"));
    assert_eq!(fonts.east_asia, None);
    assert_eq!(run.bold, Some(true));
    assert_eq!(run.italic, Some(false));
    assert_eq!(run.caps, None);
    assert_eq!(run.size, pts(14.0));
    assert_eq!(run.color, Some([0x1F, 0x38, 0x64]));
    assert_eq!(run.vertical_align, Some(VerticalAlign::Superscript));
    assert_eq!(run.underline.as_deref(), Some("double"));
}

#[test]
fn section_properties() {
    let sect = ppr(
        r#"<w:sectPr>
            <w:headerReference w:type="default" r:id="rId8"/>
            <w:footerReference w:type="first" r:id="rId9"/>
            <w:footerReference w:type="even"/>
            <w:type w:val="continuous"/>
            <w:pgSz w:w="15840" w:h="12240" w:orient="landscape"/>
            <w:pgMar w:top="1440" w:right="1080" w:bottom="1440" w:left="1080"
                     w:header="720" w:footer="720" w:gutter="0"/>
            <w:cols w:num="2" w:space="720"/>
            <w:titlePg/>
            <w:docGrid w:linePitch="360"/>
        </w:sectPr>"#,
    )
    .section_props
    .unwrap();

    assert_eq!(sect.break_type, Some(SectionBreakType::Continuous));
    let size = sect.page_size.unwrap();
    assert_eq!(size.width, pts(792.0));
    assert_eq!(size.height, pts(612.0));
    assert!(size.landscape);
    let margins = sect.page_margins.unwrap();
    assert_eq!(margins.top, pts(72.0));
    assert_eq!(margins.left, pts(54.0));
    assert_eq!(margins.gutter, pts(0.0));
    let cols = sect.columns.unwrap();
    assert_eq!(cols.count, Some(2));
    assert_eq!(cols.space, pts(36.0));
    assert_eq!(cols.equal_width, None);
    assert!(sect.title_page);
    assert_eq!(sect.headers.len(), 1);
    assert_eq!(sect.headers[0].relationship_id, "rId8");
    assert_eq!(sect.headers[0].kind, HeaderFooterKind::Default);
    // the reference without r:id is dropped
    assert_eq!(sect.footers.len(), 1);
    assert_eq!(sect.footers[0].kind, HeaderFooterKind::First);
}

#[test]
fn section_type_without_value_is_next_page() {
    let sect = ppr("<w:sectPr><w:type/></w:sectPr>").section_props.unwrap();
    assert_eq!(sect.break_type, Some(SectionBreakType::NextPage));
}

fn stub_tabs(_: roxmltree::Node) -> Vec<ParagraphTab> {
    vec![ParagraphTab {
        style: TabStyle::Bar,
        leader: TabLeader::Heavy,
        position: Length::from_points(1.0),
    }]
}

fn stub_indentation(_: roxmltree::Node) -> Indentation {
    Indentation {
        first_line: Some(Length::from_points(99.0)),
        ..Indentation::default()
    }
}

fn stub_numbering(_: roxmltree::Node) -> ParagraphNumbering {
    ParagraphNumbering {
        id: Some("stub".into()),
        level: Some(9),
    }
}

#[test]
fn dispatch_routes_to_injected_sub_parsers() {
    let xml = wrap(
        r#"<w:tabs/><w:ind/><w:numPr><w:numId w:val="1"/></w:numPr>
           <w:foo/><w:ind/><w:pStyle w:val="Body"/>"#,
    );
    let doc = roxmltree::Document::parse(&xml).unwrap();
    let parsers: SubParsers<roxmltree::Node> = SubParsers {
        tabs: stub_tabs,
        indentation: stub_indentation,
        numbering: stub_numbering,
        ..SubParsers::default()
    };
    let props = parse_paragraph_properties_with(doc.root_element(), &parsers);

    assert_eq!(props.tabs, stub_tabs(doc.root_element()));
    assert_eq!(props.indentation, Some(stub_indentation(doc.root_element())));
    assert_eq!(props.numbering, Some(stub_numbering(doc.root_element())));
    assert_eq!(props.style_id.as_deref(), Some("Body"));
    assert_eq!(props.section_props, None);
}

#[test]
fn single_property_reports_recognition() {
    let xml = wrap(r#"<w:keepNext/><w:bidi/><w14:keepNext/><w:ind w:left="720"/>"#);
    let doc = roxmltree::Document::parse(&xml).unwrap();
    let parsers = SubParsers::default();
    let mut props = ParagraphProperties::default();

    let results: Vec<bool> = doc
        .root_element()
        .children()
        .filter(|n| n.is_element())
        .map(|el| parse_paragraph_property(el, &mut props, &parsers))
        .collect();

    assert_eq!(results, vec![true, false, false, true]);
    assert!(props.keep_next);
    assert_eq!(props.indentation.unwrap().start, pts(36.0));
}
