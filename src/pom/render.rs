//! XML rendering for generated POMs.
//!
//! Output is pretty-printed with 2-space indentation and no blank lines,
//! the way Maven's own archetypes format their POMs.

use anyhow::Result;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::{Pom, XmlNode};

pub const POM_NAMESPACE: &str = "http://maven.apache.org/POM/4.0.0";
pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";
pub const SCHEMA_LOCATION: &str =
    "http://maven.apache.org/POM/4.0.0 http://maven.apache.org/xsd/maven-4.0.0.xsd";

/// Render a POM to a pretty-printed XML document.
pub fn render_pom(pom: &Pom) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    write_node(&mut writer, &pom.to_xml())?;

    let mut output = String::from_utf8(writer.into_inner())?;
    output.push('\n');
    Ok(output)
}

fn write_node(writer: &mut Writer<Vec<u8>>, node: &XmlNode) -> Result<()> {
    let mut start = BytesStart::new(node.name.as_str());
    for (name, value) in &node.attrs {
        start.push_attribute((name.as_str(), value.as_str()));
    }
    writer.write_event(Event::Start(start))?;

    if let Some(text) = &node.text {
        writer.write_event(Event::Text(BytesText::new(text)))?;
    }
    for child in &node.children {
        write_node(writer, child)?;
    }

    writer.write_event(Event::End(BytesEnd::new(node.name.as_str())))?;
    Ok(())
}
