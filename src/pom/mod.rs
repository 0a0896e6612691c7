//! Maven POM model, generation, parsing, and merge logic.
//!
//! The model is deliberately small: a [`Pom`] carries project coordinates,
//! ordered properties, dependency subtrees, and build plugins. Plugin
//! configuration and carried-over dependencies are arbitrary XML, so both
//! are represented as [`XmlNode`] trees rather than fixed field sets.

pub mod merge;
pub mod parse;
pub mod render;

pub use merge::apply_existing;
pub use parse::{parse_pom, ExistingPom};
pub use render::render_pom;

use crate::config::{Config, DefaultsConfig, PackagingConfig};
use crate::platform::OsType;

/// Maven POM model version (the only one Maven accepts).
pub const MODEL_VERSION: &str = "4.0.0";

/// A minimal XML element tree.
///
/// Invariant: an element holds text, children, or neither; Maven POMs never
/// mix text and child elements in one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlNode {
    pub name: String,
    pub attrs: Vec<(String, String)>,
    pub text: Option<String>,
    pub children: Vec<XmlNode>,
}

impl XmlNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// An element containing only text: `<name>text</name>`
    pub fn leaf(name: impl Into<String>, text: impl Into<String>) -> Self {
        let mut node = Self::new(name);
        node.text = Some(text.into());
        node
    }

    /// An element containing only child elements
    pub fn with_children(name: impl Into<String>, children: Vec<XmlNode>) -> Self {
        let mut node = Self::new(name);
        node.children = children;
        node
    }

    /// Builder-style attribute setter
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Find the first direct child with the given element name
    pub fn child(&self, name: &str) -> Option<&XmlNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Text content of the first direct child with the given element name
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).and_then(|c| c.text.as_deref())
    }
}

/// A Maven POM under construction.
#[derive(Debug, Clone)]
pub struct Pom {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub name: Option<String>,
    pub description: Option<String>,
    /// Ordered property name/value pairs
    pub properties: Vec<(String, String)>,
    /// `<dependency>` subtrees, carried verbatim through merges
    pub dependencies: Vec<XmlNode>,
    pub plugins: Vec<Plugin>,
}

/// A build plugin entry.
#[derive(Debug, Clone)]
pub struct Plugin {
    pub group_id: String,
    pub artifact_id: String,
    pub version: Option<String>,
    pub extensions: bool,
    /// Contents of the `<configuration>` element
    pub configuration: Vec<XmlNode>,
}

impl Pom {
    /// A POM with the given coordinates and no properties or plugins.
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            name: None,
            description: None,
            properties: Vec::new(),
            dependencies: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// The base POM for the configured project: coordinates plus compiler
    /// and native-image properties.
    pub fn base(config: &Config) -> Self {
        Self::with_coordinates(
            &config.project.group_id,
            &config.project.artifact_id,
            &config.project.version,
            &config.defaults,
        )
    }

    /// A base POM for explicit coordinates (used by scaffolding).
    pub fn with_coordinates(
        group_id: &str,
        artifact_id: &str,
        version: &str,
        defaults: &DefaultsConfig,
    ) -> Self {
        let mut pom = Self::new(group_id, artifact_id, version);
        pom.properties = vec![
            ("maven.compiler.source".to_string(), defaults.java_release.clone()),
            ("maven.compiler.target".to_string(), defaults.java_release.clone()),
            ("project.build.sourceEncoding".to_string(), "UTF-8".to_string()),
            (
                "native.maven.plugin.version".to_string(),
                defaults.native_plugin_version.clone(),
            ),
        ];
        pom
    }

    /// Build the full element tree for this POM.
    pub fn to_xml(&self) -> XmlNode {
        let mut project = XmlNode::new("project")
            .attr("xmlns", render::POM_NAMESPACE)
            .attr("xmlns:xsi", render::XSI_NAMESPACE)
            .attr("xsi:schemaLocation", render::SCHEMA_LOCATION);

        project.children.push(XmlNode::leaf("modelVersion", MODEL_VERSION));
        project.children.push(XmlNode::leaf("groupId", &self.group_id));
        project.children.push(XmlNode::leaf("artifactId", &self.artifact_id));
        project.children.push(XmlNode::leaf("version", &self.version));

        if let Some(name) = &self.name {
            project.children.push(XmlNode::leaf("name", name));
        }
        if let Some(description) = &self.description {
            project.children.push(XmlNode::leaf("description", description));
        }

        if !self.properties.is_empty() {
            let properties = self
                .properties
                .iter()
                .map(|(name, value)| XmlNode::leaf(name.as_str(), value.as_str()))
                .collect();
            project
                .children
                .push(XmlNode::with_children("properties", properties));
        }

        if !self.dependencies.is_empty() {
            project.children.push(XmlNode::with_children(
                "dependencies",
                self.dependencies.clone(),
            ));
        }

        if !self.plugins.is_empty() {
            let plugins = self.plugins.iter().map(Plugin::to_xml).collect();
            project.children.push(XmlNode::with_children(
                "build",
                vec![XmlNode::with_children("plugins", plugins)],
            ));
        }

        project
    }
}

impl Plugin {
    pub fn to_xml(&self) -> XmlNode {
        let mut plugin = XmlNode::new("plugin");
        plugin.children.push(XmlNode::leaf("groupId", &self.group_id));
        plugin
            .children
            .push(XmlNode::leaf("artifactId", &self.artifact_id));
        if let Some(version) = &self.version {
            plugin.children.push(XmlNode::leaf("version", version));
        }
        if self.extensions {
            plugin.children.push(XmlNode::leaf("extensions", "true"));
        }
        if !self.configuration.is_empty() {
            plugin.children.push(XmlNode::with_children(
                "configuration",
                self.configuration.clone(),
            ));
        }
        plugin
    }
}

/// Generate the POM for a project: base coordinates, native-image plugin,
/// and the Linux packaging plugins when the target OS calls for them.
pub fn generate(config: &Config, os: OsType) -> Pom {
    let mut pom = Pom::base(config);
    pom.plugins
        .push(native_image_plugin(config.defaults.main_class.as_deref()));
    if os.supports_native_packaging() {
        pom.plugins.push(rpm_plugin(&config.packaging));
        pom.plugins.push(deb_plugin(&config.packaging));
    }
    pom
}

/// GraalVM native-maven-plugin, pinned via the `native.maven.plugin.version`
/// property. With no main class configured the `${mainClass}` placeholder is
/// emitted for the user to fill in.
pub fn native_image_plugin(main_class: Option<&str>) -> Plugin {
    Plugin {
        group_id: "org.graalvm.buildtools".to_string(),
        artifact_id: "native-maven-plugin".to_string(),
        version: Some("${native.maven.plugin.version}".to_string()),
        extensions: true,
        configuration: vec![
            XmlNode::leaf("imageName", "${project.artifactId}"),
            XmlNode::leaf("mainClass", main_class.unwrap_or("${mainClass}")),
            XmlNode::with_children(
                "buildArgs",
                vec![
                    XmlNode::leaf("buildArg", "--no-fallback"),
                    XmlNode::leaf("buildArg", "--enable-url-protocols=http,https"),
                ],
            ),
        ],
    }
}

/// Maven RPM plugin for Linux packaging.
pub fn rpm_plugin(packaging: &PackagingConfig) -> Plugin {
    Plugin {
        group_id: "org.codehaus.mojo".to_string(),
        artifact_id: "rpm-maven-plugin".to_string(),
        version: Some("2.2.0".to_string()),
        extensions: false,
        configuration: vec![
            XmlNode::leaf("name", "${project.artifactId}"),
            XmlNode::leaf("version", "${project.version}"),
            XmlNode::leaf("group", packaging.rpm_group.as_str()),
            XmlNode::leaf("packager", packaging.packager.as_str()),
        ],
    }
}

/// jdeb plugin for Linux DEB packaging.
pub fn deb_plugin(packaging: &PackagingConfig) -> Plugin {
    Plugin {
        group_id: "org.vafer".to_string(),
        artifact_id: "jdeb".to_string(),
        version: Some("1.10".to_string()),
        extensions: false,
        configuration: vec![XmlNode::with_children(
            "dataSet",
            vec![XmlNode::with_children(
                "data",
                vec![
                    XmlNode::leaf(
                        "src",
                        "${project.build.directory}/${project.build.finalName}.jar",
                    ),
                    XmlNode::leaf("type", "file"),
                    XmlNode::with_children(
                        "mapper",
                        vec![
                            XmlNode::leaf("type", "perm"),
                            XmlNode::leaf(
                                "prefix",
                                format!("{}/${{project.artifactId}}", packaging.install_prefix),
                            ),
                        ],
                    ),
                ],
            )],
        )],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xml_node_helpers() {
        let node = XmlNode::with_children(
            "parent",
            vec![XmlNode::leaf("a", "1"), XmlNode::leaf("b", "2")],
        );
        assert_eq!(node.child_text("a"), Some("1"));
        assert_eq!(node.child_text("b"), Some("2"));
        assert!(node.child("c").is_none());
    }

    #[test]
    fn test_base_pom_properties() {
        let pom = Pom::base(&Config::default());
        assert_eq!(pom.group_id, "com.example");
        assert_eq!(pom.artifact_id, "my-app");
        assert_eq!(pom.version, "1.0-SNAPSHOT");
        assert_eq!(
            pom.properties,
            vec![
                ("maven.compiler.source".to_string(), "11".to_string()),
                ("maven.compiler.target".to_string(), "11".to_string()),
                ("project.build.sourceEncoding".to_string(), "UTF-8".to_string()),
                ("native.maven.plugin.version".to_string(), "0.9.28".to_string()),
            ]
        );
    }

    #[test]
    fn test_generate_always_includes_native_image_plugin() {
        for os in [OsType::Linux, OsType::Mac, OsType::Windows, OsType::Unknown] {
            let pom = generate(&Config::default(), os);
            assert!(pom
                .plugins
                .iter()
                .any(|p| p.artifact_id == "native-maven-plugin"));
        }
    }

    #[test]
    fn test_generate_adds_packaging_plugins_on_linux_only() {
        let linux = generate(&Config::default(), OsType::Linux);
        assert_eq!(linux.plugins.len(), 3);
        assert!(linux.plugins.iter().any(|p| p.artifact_id == "rpm-maven-plugin"));
        assert!(linux.plugins.iter().any(|p| p.artifact_id == "jdeb"));

        let mac = generate(&Config::default(), OsType::Mac);
        assert_eq!(mac.plugins.len(), 1);
    }

    #[test]
    fn test_native_image_plugin_defaults_to_placeholder_main_class() {
        let plugin = native_image_plugin(None);
        let config = XmlNode::with_children("configuration", plugin.configuration.clone());
        assert_eq!(config.child_text("mainClass"), Some("${mainClass}"));
        assert!(plugin.extensions);
        assert_eq!(plugin.version.as_deref(), Some("${native.maven.plugin.version}"));
    }

    #[test]
    fn test_native_image_plugin_uses_configured_main_class() {
        let plugin = native_image_plugin(Some("com.example.App"));
        let config = XmlNode::with_children("configuration", plugin.configuration.clone());
        assert_eq!(config.child_text("mainClass"), Some("com.example.App"));
    }

    #[test]
    fn test_deb_plugin_prefix_uses_install_prefix() {
        let plugin = deb_plugin(&Config::default().packaging);
        let data_set = &plugin.configuration[0];
        let mapper = data_set.child("data").unwrap().child("mapper").unwrap();
        assert_eq!(
            mapper.child_text("prefix"),
            Some("/usr/share/${project.artifactId}")
        );
    }

    #[test]
    fn test_to_xml_skips_empty_sections() {
        let pom = Pom::new("g", "a", "1");
        let tree = pom.to_xml();
        assert!(tree.child("properties").is_none());
        assert!(tree.child("dependencies").is_none());
        assert!(tree.child("build").is_none());
        assert_eq!(tree.child_text("modelVersion"), Some(MODEL_VERSION));
    }
}
