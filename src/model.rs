use crate::length::Length;

/// Resolved `w:pPr` of one paragraph. `Default` is the inert record: no tabs,
/// no borders, no numbering, every toggle off.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParagraphProperties {
    pub section_props: Option<SectionProperties>,
    pub tabs: Vec<ParagraphTab>,
    pub numbering: Option<ParagraphNumbering>,
    pub border: Borders,
    pub text_alignment: Option<TextAlignment>,
    pub line_spacing: Option<LineSpacing>,
    pub indentation: Option<Indentation>,
    pub keep_lines: bool,
    pub keep_next: bool,
    pub page_break_before: bool,
    pub outline_level: Option<i32>,
    pub style_id: Option<String>,
    pub run_props: Option<RunProperties>,
    pub justification: Option<Justification>,
    pub contextual_spacing: bool,
    pub widow_control: Option<bool>, // None = not specified (Word treats as on)
}

/// Vertical alignment of characters on a line (`w:textAlignment`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TextAlignment {
    Auto,
    Baseline,
    Bottom,
    Center,
    Top,
    Other(String),
}

impl From<&str> for TextAlignment {
    fn from(val: &str) -> Self {
        match val {
            "auto" => TextAlignment::Auto,
            "baseline" => TextAlignment::Baseline,
            "bottom" => TextAlignment::Bottom,
            "center" => TextAlignment::Center,
            "top" => TextAlignment::Top,
            other => TextAlignment::Other(other.to_string()),
        }
    }
}

/// Horizontal paragraph alignment (`w:jc`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Justification {
    Start,
    Center,
    End,
    Both,
    Distribute,
    Other(String),
}

impl From<&str> for Justification {
    fn from(val: &str) -> Self {
        match val {
            "start" | "left" => Justification::Start,
            "center" => Justification::Center,
            "end" | "right" => Justification::End,
            "both" | "justify" => Justification::Both,
            "distribute" => Justification::Distribute,
            other => Justification::Other(other.to_string()),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParagraphTab {
    pub style: TabStyle,
    pub leader: TabLeader,
    pub position: Length, // from the paragraph's leading edge
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TabStyle {
    Bar,
    Center,
    Clear,
    Decimal,
    End,
    Num,
    Start,
    #[default]
    Left,
    Right,
}

impl TabStyle {
    pub fn from_val(val: &str) -> Option<Self> {
        Some(match val {
            "bar" => TabStyle::Bar,
            "center" => TabStyle::Center,
            "clear" => TabStyle::Clear,
            "decimal" => TabStyle::Decimal,
            "end" => TabStyle::End,
            "num" => TabStyle::Num,
            "start" => TabStyle::Start,
            "left" => TabStyle::Left,
            "right" => TabStyle::Right,
            _ => return None,
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TabLeader {
    #[default]
    None,
    Dot,
    Heavy,
    Hyphen,
    MiddleDot,
    Underscore,
}

impl TabLeader {
    pub fn from_val(val: &str) -> Option<Self> {
        Some(match val {
            "none" => TabLeader::None,
            "dot" => TabLeader::Dot,
            "heavy" => TabLeader::Heavy,
            "hyphen" => TabLeader::Hyphen,
            "middleDot" => TabLeader::MiddleDot,
            "underscore" => TabLeader::Underscore,
            _ => return None,
        })
    }
}

/// Reference into `numbering.xml`. `level` is not assumed to be 0 when
/// `w:ilvl` is missing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParagraphNumbering {
    pub id: Option<String>,
    pub level: Option<i32>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Indentation {
    pub start: Option<Length>,
    pub end: Option<Length>,
    pub first_line: Option<Length>,
    pub hanging: Option<Length>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineSpacing {
    pub before: Option<Length>,
    pub after: Option<Length>,
    pub before_autospacing: Option<bool>,
    pub after_autospacing: Option<bool>,
    pub line: Option<LineHeight>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LineHeight {
    Auto(f32), // multiplier, w:line / 240
    Exact(Length),
    AtLeast(Length),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Borders {
    pub top: Option<Border>,
    pub bottom: Option<Border>,
    pub left: Option<Border>,
    pub right: Option<Border>,
    pub between: Option<Border>,
    pub bar: Option<Border>,
}

impl Borders {
    pub fn is_empty(&self) -> bool {
        *self == Borders::default()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Border {
    pub style: String, // ST_Border value, e.g. "single", "double"
    pub width: Length,
    pub space: Length,
    pub color: Option<[u8; 3]>, // None = automatic
    pub shadow: bool,
    pub frame: bool,
}

/// Run formatting. Toggles are tri-state: `None` leaves the value to the
/// style cascade.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunProperties {
    pub style_id: Option<String>,
    pub fonts: Option<RunFonts>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub caps: Option<bool>,
    pub small_caps: Option<bool>,
    pub strike: Option<bool>,
    pub double_strike: Option<bool>,
    pub vanish: Option<bool>,
    pub size: Option<Length>,
    pub color: Option<[u8; 3]>,
    pub highlight: Option<String>,
    pub underline: Option<String>,
    pub vertical_align: Option<VerticalAlign>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunFonts {
    pub ascii: Option<String>,
    pub h_ansi: Option<String>,
    pub east_asia: Option<String>,
    pub cs: Option<String>,
    pub ascii_theme: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerticalAlign {
    Baseline,
    Superscript,
    Subscript,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SectionProperties {
    pub break_type: Option<SectionBreakType>,
    pub page_size: Option<PageSize>,
    pub page_margins: Option<PageMargins>,
    pub columns: Option<Columns>,
    pub title_page: bool,
    pub headers: Vec<HeaderFooterRef>,
    pub footers: Vec<HeaderFooterRef>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionBreakType {
    NextPage,
    Continuous,
    EvenPage,
    OddPage,
    NextColumn,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageSize {
    pub width: Option<Length>,
    pub height: Option<Length>,
    pub landscape: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageMargins {
    pub top: Option<Length>,
    pub right: Option<Length>,
    pub bottom: Option<Length>,
    pub left: Option<Length>,
    pub header: Option<Length>,
    pub footer: Option<Length>,
    pub gutter: Option<Length>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Columns {
    pub count: Option<i32>,
    pub space: Option<Length>,
    pub equal_width: Option<bool>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderFooterKind {
    Default,
    First,
    Even,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderFooterRef {
    pub kind: HeaderFooterKind,
    pub relationship_id: String,
}
