//! Parsing of existing POM files for merging.
//!
//! Only the parts the merge cares about are extracted: project
//! coordinates, name, description, properties, and dependency subtrees.
//! Namespace prefixes are tolerated by matching on local element names.

use anyhow::{bail, Context, Result};
use quick_xml::events::Event;
use quick_xml::Reader;

use super::XmlNode;

/// Fields read out of an existing `pom.xml`. Everything is optional; a
/// minimal POM simply contributes nothing to the merge.
#[derive(Debug, Default)]
pub struct ExistingPom {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub properties: Vec<(String, String)>,
    pub dependencies: Vec<XmlNode>,
}

/// Parse an existing POM document.
pub fn parse_pom(content: &str) -> Result<ExistingPom> {
    let root = parse_document(content)?;
    if root.name != "project" {
        bail!("not a Maven POM: root element is <{}>", root.name);
    }

    let mut existing = ExistingPom {
        group_id: root.child_text("groupId").map(str::to_string),
        artifact_id: root.child_text("artifactId").map(str::to_string),
        version: root.child_text("version").map(str::to_string),
        name: root.child_text("name").map(str::to_string),
        description: root.child_text("description").map(str::to_string),
        ..Default::default()
    };

    if let Some(properties) = root.child("properties") {
        existing.properties = properties
            .children
            .iter()
            .map(|p| (p.name.clone(), p.text.clone().unwrap_or_default()))
            .collect();
    }

    if let Some(dependencies) = root.child("dependencies") {
        existing.dependencies = dependencies
            .children
            .iter()
            .filter(|d| d.name == "dependency")
            .cloned()
            .collect();
    }

    Ok(existing)
}

/// Parse an XML document into an element tree.
pub fn parse_document(content: &str) -> Result<XmlNode> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<XmlNode> = Vec::new();
    let mut root: Option<XmlNode> = None;

    loop {
        match reader
            .read_event()
            .with_context(|| format!("invalid XML at byte {}", reader.buffer_position()))?
        {
            Event::Start(start) => {
                stack.push(node_from_start(&start)?);
            }
            Event::Empty(start) => {
                let node = node_from_start(&start)?;
                attach(&mut stack, &mut root, node)?;
            }
            Event::Text(text) => {
                let text = text.unescape().context("invalid character data")?;
                if text.is_empty() {
                    continue;
                }
                if let Some(top) = stack.last_mut() {
                    match top.text.take() {
                        Some(existing) => top.text = Some(existing + &text),
                        None => top.text = Some(text.into_owned()),
                    }
                }
            }
            Event::End(_) => {
                let node = stack.pop().context("unbalanced closing tag")?;
                attach(&mut stack, &mut root, node)?;
            }
            Event::Eof => break,
            // Declarations, comments, CDATA, and PIs carry nothing we keep
            _ => {}
        }
    }

    if !stack.is_empty() {
        bail!("unclosed element <{}>", stack.last().map(|n| n.name.as_str()).unwrap_or(""));
    }

    root.context("empty XML document")
}

fn node_from_start(start: &quick_xml::events::BytesStart<'_>) -> Result<XmlNode> {
    let mut node = XmlNode::new(String::from_utf8_lossy(start.local_name().as_ref()).into_owned());
    for attr in start.attributes() {
        let attr = attr.context("invalid attribute")?;
        node.attrs.push((
            String::from_utf8_lossy(attr.key.as_ref()).into_owned(),
            attr.unescape_value().context("invalid attribute value")?.into_owned(),
        ));
    }
    Ok(node)
}

fn attach(stack: &mut [XmlNode], root: &mut Option<XmlNode>, node: XmlNode) -> Result<()> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
    } else if root.is_none() {
        *root = Some(node);
    } else {
        bail!("multiple root elements");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_POM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0"
         xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
         xsi:schemaLocation="http://maven.apache.org/POM/4.0.0 http://maven.apache.org/xsd/maven-4.0.0.xsd">
    <modelVersion>4.0.0</modelVersion>
    <groupId>com.test</groupId>
    <artifactId>test-app</artifactId>
    <version>3.0.0</version>
    <name>Test App</name>
    <properties>
        <mainClass>com.test.Main</mainClass>
    </properties>
    <dependencies>
        <dependency>
            <groupId>org.junit.jupiter</groupId>
            <artifactId>junit-jupiter</artifactId>
            <version>5.10.0</version>
            <scope>test</scope>
        </dependency>
    </dependencies>
</project>"#;

    #[test]
    fn test_parse_pom_extracts_coordinates() {
        let existing = parse_pom(SAMPLE_POM).unwrap();
        assert_eq!(existing.group_id.as_deref(), Some("com.test"));
        assert_eq!(existing.artifact_id.as_deref(), Some("test-app"));
        assert_eq!(existing.version.as_deref(), Some("3.0.0"));
        assert_eq!(existing.name.as_deref(), Some("Test App"));
        assert!(existing.description.is_none());
    }

    #[test]
    fn test_parse_pom_extracts_properties_in_order() {
        let existing = parse_pom(SAMPLE_POM).unwrap();
        assert_eq!(
            existing.properties,
            vec![("mainClass".to_string(), "com.test.Main".to_string())]
        );
    }

    #[test]
    fn test_parse_pom_keeps_dependency_subtree() {
        let existing = parse_pom(SAMPLE_POM).unwrap();
        assert_eq!(existing.dependencies.len(), 1);
        let dep = &existing.dependencies[0];
        assert_eq!(dep.child_text("groupId"), Some("org.junit.jupiter"));
        assert_eq!(dep.child_text("scope"), Some("test"));
    }

    #[test]
    fn test_parse_pom_minimal_project() {
        let existing = parse_pom("<project/>").unwrap();
        assert!(existing.group_id.is_none());
        assert!(existing.properties.is_empty());
        assert!(existing.dependencies.is_empty());
    }

    #[test]
    fn test_parse_pom_rejects_non_pom_document() {
        let err = parse_pom("<settings></settings>").unwrap_err();
        assert!(err.to_string().contains("not a Maven POM"));
    }

    #[test]
    fn test_parse_document_rejects_malformed_xml() {
        assert!(parse_document("<project><unclosed></project>").is_err());
        assert!(parse_document("definitely not xml").is_err());
        assert!(parse_document("").is_err());
    }

    #[test]
    fn test_parse_document_unescapes_entities() {
        let root = parse_document("<a><b>x &amp; y</b></a>").unwrap();
        assert_eq!(root.child_text("b"), Some("x & y"));
    }

    #[test]
    fn test_parse_document_tolerates_namespace_prefix() {
        let root = parse_document(
            "<mvn:project xmlns:mvn=\"http://maven.apache.org/POM/4.0.0\"><mvn:groupId>g</mvn:groupId></mvn:project>",
        )
        .unwrap();
        assert_eq!(root.name, "project");
        assert_eq!(root.child_text("groupId"), Some("g"));
    }
}
