//! Common test helpers for integration tests

use std::fs;
use std::path::Path;

/// An existing POM the way one looks in the wild: its own coordinates, a
/// name, a mainClass property, and one dependency.
pub const EXISTING_POM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
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
            <groupId>org.apache.commons</groupId>
            <artifactId>commons-lang3</artifactId>
            <version>3.14.0</version>
        </dependency>
    </dependencies>
</project>
"#;

/// Write the sample existing POM to the given path.
#[allow(dead_code)]
pub fn write_existing_pom(path: &Path) {
    fs::write(path, EXISTING_POM).expect("failed to write existing POM fixture");
}
