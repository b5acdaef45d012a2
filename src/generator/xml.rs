//! Small helpers over the quick-xml writer.

use anyhow::Result;
use quick_xml::{
    Writer,
    events::{BytesDecl, BytesText, Event},
};
use std::io::{self, Write};

/// Write a complete UTF-8 XML document: declaration, a root element with
/// the given attributes, and inner content produced by the closure.
pub fn document<F>(root: &str, attrs: &[(&str, &str)], content: F) -> Result<String>
where
    F: FnOnce(&mut Writer<Vec<u8>>) -> io::Result<()>,
{
    let mut writer = Writer::new(Vec::with_capacity(1024));

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer
        .create_element(root)
        .with_attributes(attrs.iter().copied())
        .write_inner_content(content)?;

    Ok(String::from_utf8(writer.into_inner())?)
}

/// Write a simple `<tag>text</tag>` element.
pub fn write_text_element<W: Write>(writer: &mut Writer<W>, tag: &str, text: &str) -> io::Result<()> {
    writer
        .create_element(tag)
        .write_text_content(BytesText::new(text))?;
    Ok(())
}
