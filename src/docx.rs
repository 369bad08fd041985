//! Loading paragraphs out of a `.docx` package.

use std::io::{Read, Seek};
use std::path::Path;

use crate::error::Error;
use crate::model::ParagraphProperties;
use crate::paragraph::parse_paragraph_properties;
use crate::xml::{WML_NS, wml};

/// Resolve the properties of every paragraph in the main document part.
pub fn parse(path: &Path) -> Result<Vec<ParagraphProperties>, Error> {
    let file = std::fs::File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound | std::io::ErrorKind::PermissionDenied => Error::Io(
            std::io::Error::new(e.kind(), format!("{}: {}", e, path.display())),
        ),
        _ => Error::Io(e),
    })?;
    parse_reader(file)
}

pub fn parse_reader<R: Read + Seek>(reader: R) -> Result<Vec<ParagraphProperties>, Error> {
    let mut zip = zip::ZipArchive::new(reader)
        .map_err(|_| Error::InvalidDocx("file is not a ZIP archive".into()))?;

    let mut xml_content = String::new();
    zip.by_name("word/document.xml")
        .map_err(|_| Error::InvalidDocx("missing word/document.xml (is this a DOCX file?)".into()))?
        .read_to_string(&mut xml_content)?;

    parse_document_xml(&xml_content)
}

/// Resolve paragraph properties from the text of `word/document.xml`.
/// Paragraphs come back in document order, including those nested in tables
/// and content controls; a paragraph without `w:pPr` gets the default record.
pub fn parse_document_xml(xml_content: &str) -> Result<Vec<ParagraphProperties>, Error> {
    let xml = roxmltree::Document::parse(xml_content.trim_start_matches('\u{feff}'))?;
    let root = xml.root_element();

    let body = wml(root, "body").ok_or_else(|| Error::InvalidDocx("missing w:body".into()))?;

    let paragraphs: Vec<ParagraphProperties> = body
        .descendants()
        .filter(|n| n.tag_name().name() == "p" && n.tag_name().namespace() == Some(WML_NS))
        .map(|p| wml(p, "pPr").map(parse_paragraph_properties).unwrap_or_default())
        .collect();

    log::info!("resolved properties for {} paragraphs", paragraphs.len());
    Ok(paragraphs)
}
