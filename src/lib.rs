mod border;
pub mod docx;
mod error;
mod length;
mod model;
mod paragraph;
mod run;
mod section;
mod spacing;
pub mod xml;

pub use border::{parse_border, parse_borders};
pub use error::Error;
pub use length::{Length, LengthUsage};
pub use model::*;
pub use paragraph::{
    PropertyTag, SubParsers, parse_numbering, parse_paragraph_properties,
    parse_paragraph_properties_with, parse_paragraph_property, parse_tabs,
};
pub use run::parse_run_properties;
pub use section::parse_section_properties;
pub use spacing::{parse_indentation, parse_line_spacing};
pub use xml::Element;
