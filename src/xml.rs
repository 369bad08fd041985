//! Markup accessors and typed attribute readers.
//!
//! Everything above this module sees the markup tree only through [`Element`],
//! so the parsers work over any tree that can enumerate children, report a
//! qualified name and look up attributes.

use crate::length::{Length, LengthUsage};

pub const WML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
pub const REL_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// Minimal read-only view of one markup element.
pub trait Element: Copy {
    fn namespace(&self) -> Option<&str>;

    fn local_name(&self) -> &str;

    /// Attribute in an explicit namespace.
    fn attribute_ns(&self, ns: &str, name: &str) -> Option<&str>;

    /// Attribute without a namespace prefix.
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Direct element children in document order.
    fn elements(self) -> impl Iterator<Item = Self>;

    fn is_wml(&self) -> bool {
        self.namespace() == Some(WML_NS)
    }
}

impl<'a, 'input: 'a> Element for roxmltree::Node<'a, 'input> {
    fn namespace(&self) -> Option<&str> {
        self.tag_name().namespace()
    }

    fn local_name(&self) -> &str {
        self.tag_name().name()
    }

    fn attribute_ns(&self, ns: &str, name: &str) -> Option<&str> {
        roxmltree::Node::attribute(self, (ns, name))
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        // roxmltree matches a bare name in any namespace; only unprefixed
        // attributes count here
        self.attributes()
            .find(|a| a.namespace().is_none() && a.name() == name)
            .map(|a| a.value())
    }

    fn elements(self) -> impl Iterator<Item = Self> {
        self.children().filter(|n| n.is_element())
    }
}

/// First WML child element with the given local name.
pub fn wml<N: Element>(node: N, name: &str) -> Option<N> {
    node.elements().find(|n| n.is_wml() && n.local_name() == name)
}

/// All WML child elements with the given local name, in document order.
pub fn wml_children<N: Element>(node: N, name: &str) -> impl Iterator<Item = N> {
    node.elements().filter(move |n| n.is_wml() && n.local_name() == name)
}

/// Raw attribute value. `w:`-qualified attributes are preferred; unqualified
/// ones are accepted for documents written by lenient producers.
pub fn string_attr<N: Element>(node: &N, name: &str) -> Option<String> {
    node.attribute_ns(WML_NS, name)
        .or_else(|| node.attribute(name))
        .map(str::to_string)
}

/// OOXML toggle semantics: the element being present without the attribute
/// means `default_when_present`.
pub fn bool_attr<N: Element>(node: &N, name: &str, default_when_present: bool) -> bool {
    let Some(value) = string_attr(node, name) else {
        return default_when_present;
    };
    match value.as_str() {
        "1" | "true" | "on" => true,
        "0" | "false" | "off" => false,
        other => {
            log::warn!(
                "unrecognized boolean {other:?} on w:{}/@{name}, using {default_when_present}",
                node.local_name()
            );
            default_when_present
        }
    }
}

/// Like [`bool_attr`] but `None` when the attribute is missing, for
/// attributes whose absence must not be read as either value.
pub fn toggle_attr<N: Element>(node: &N, name: &str) -> Option<bool> {
    string_attr(node, name)?;
    Some(bool_attr(node, name, true))
}

pub fn int_attr<N: Element>(node: &N, name: &str) -> Option<i32> {
    let value = string_attr(node, name)?;
    value
        .trim()
        .parse::<i32>()
        .inspect_err(|_| {
            log::warn!("ignoring non-integer {value:?} on w:{}/@{name}", node.local_name())
        })
        .ok()
}

pub fn length_attr<N: Element>(node: &N, name: &str, usage: LengthUsage) -> Option<Length> {
    let value = string_attr(node, name)?;
    Length::parse(&value, usage)
        .inspect_err(|e| log::warn!("ignoring w:{}/@{name}: {e}", node.local_name()))
        .ok()
}

/// `RRGGBB` colour; `auto` and malformed values are `None`.
pub fn color_attr<N: Element>(node: &N, name: &str) -> Option<[u8; 3]> {
    parse_hex_color(&string_attr(node, name)?)
}

fn parse_hex_color(val: &str) -> Option<[u8; 3]> {
    if val == "auto" || val.len() != 6 || !val.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&val[0..2], 16).ok()?;
    let g = u8::from_str_radix(&val[2..4], 16).ok()?;
    let b = u8::from_str_radix(&val[4..6], 16).ok()?;
    Some([r, g, b])
}
