//! Built-in Gradle/Kotlin project templates.
//!
//! This module holds the fixed set of file templates that make up one
//! generated project, and implements the [`TemplateRenderer`] port by
//! rendering all of them against a [`ProjectSpec`].
//!
//! # Template kinds
//!
//! | Kind               | File(s)                                      |
//! |--------------------|----------------------------------------------|
//! | Build descriptor   | `build.gradle.kts`                           |
//! | Settings           | `settings.gradle.kts`                        |
//! | Properties         | `gradle.properties`                          |
//! | Wrapper set        | `gradle/wrapper/gradle-wrapper.properties`, `gradlew` (executable), `gradlew.bat` |
//! | Entry point        | `src/main/kotlin/<pkg>/Main.kt`              |
//! | Test source        | `src/test/kotlin/<pkg>/CalculatorTest.kt`    |
//! | Editor config      | `.vscode/settings.json`, `.vscode/launch.json` |
//!
//! Rendering is literal `{{PLACEHOLDER}}` substitution — no conditionals, no
//! escaping. Inputs arrive pre-validated, and identical specs always produce
//! byte-identical content: nothing here reads the clock, the environment, or
//! any other ambient state.

use tracing::instrument;

use kotlinit_core::{
    application::ports::TemplateRenderer,
    domain::{FileArtifact, ProjectLayout, ProjectPaths, ProjectSpec},
    error::KotlinitResult,
};

/// Kotlin JVM Gradle plugin version pinned into the build descriptor.
pub const KOTLIN_PLUGIN_VERSION: &str = "1.9.0";

/// JVM bytecode target pinned into the build descriptor.
pub const JVM_TARGET: &str = "17";

/// Gradle distribution URL written into the wrapper metadata. The `\:` is
/// Java-properties escaping and must survive into the file verbatim.
pub const GRADLE_DISTRIBUTION_URL: &str =
    r"https\://services.gradle.org/distributions/gradle-8.2.1-bin.zip";

// ── Template sources ──────────────────────────────────────────────────────────

const BUILD_GRADLE_KTS: &str = r#"plugins {
    id("org.jetbrains.kotlin.jvm") version "{{KOTLIN_VERSION}}"
    application
}

repositories {
    mavenCentral()
}

dependencies {
    implementation(platform("org.jetbrains.kotlin:kotlin-bom"))
    implementation("org.jetbrains.kotlin:kotlin-stdlib-jdk8")

    testImplementation("org.jetbrains.kotlin:kotlin-test")
    testImplementation("org.jetbrains.kotlin:kotlin-test-junit")
}

application {
    mainClass.set("{{MAIN_CLASS}}")
}

tasks.test {
    useJUnit()
}

tasks.withType<org.jetbrains.kotlin.gradle.tasks.KotlinCompile> {
    kotlinOptions {
        jvmTarget = "{{JVM_TARGET}}"
    }
}
"#;

const SETTINGS_GRADLE_KTS: &str = r#"rootProject.name = "{{PROJECT_NAME}}"
"#;

const GRADLE_PROPERTIES: &str = "org.gradle.jvmargs=-Xmx2g
kotlin.code.style=official
";

const GRADLE_WRAPPER_PROPERTIES: &str = "distributionBase=GRADLE_USER_HOME
distributionPath=wrapper/dists
distributionUrl={{DISTRIBUTION_URL}}
networkTimeout=10000
zipStoreBase=GRADLE_USER_HOME
zipStorePath=wrapper/dists
";

const GRADLEW: &str = "#!/bin/bash
./gradlew \"$@\"
";

const GRADLEW_BAT: &str = "@echo off
gradlew.bat %*
";

const MAIN_KT: &str = r#"package {{PACKAGE_NAME}}

fun main() {
    println("Hello from {{PROJECT_NAME}}!")

    val calculator = Calculator()
    println("2 + 3 = ${calculator.add(2, 3)}")
    println("5 - 2 = ${calculator.subtract(5, 2)}")
}

class Calculator {
    fun add(a: Int, b: Int): Int = a + b
    fun subtract(a: Int, b: Int): Int = a - b
}
"#;

const CALCULATOR_TEST_KT: &str = r#"package {{PACKAGE_NAME}}

import kotlin.test.Test
import kotlin.test.assertEquals

class CalculatorTest {

    private val calculator = Calculator()

    @Test
    fun testAdd() {
        assertEquals(5, calculator.add(2, 3))
    }

    @Test
    fun testSubtract() {
        assertEquals(3, calculator.subtract(5, 2))
    }
}
"#;

// ── Renderer ──────────────────────────────────────────────────────────────────

/// The built-in template set for Kotlin Gradle projects.
#[derive(Debug, Clone, Copy, Default)]
pub struct GradleKotlinTemplates;

impl GradleKotlinTemplates {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for GradleKotlinTemplates {
    #[instrument(skip_all)]
    fn render(&self, spec: &ProjectSpec, paths: &ProjectPaths) -> KotlinitResult<ProjectLayout> {
        let mut layout = ProjectLayout::new(paths.project_root());

        layout.add_file(build_descriptor(spec));
        layout.add_file(settings_descriptor(spec));
        layout.add_file(properties_file());
        for artifact in wrapper_set(paths)? {
            layout.add_file(artifact);
        }
        layout.add_file(entry_point(spec, paths)?);
        layout.add_file(test_source(spec, paths)?);
        layout.add_file(editor_settings(paths)?);
        layout.add_file(launch_configuration(spec, paths)?);

        Ok(layout)
    }
}

// ── Individual template kinds ─────────────────────────────────────────────────

fn build_descriptor(spec: &ProjectSpec) -> FileArtifact {
    let content = substitute(
        BUILD_GRADLE_KTS,
        &[
            ("KOTLIN_VERSION", KOTLIN_PLUGIN_VERSION),
            ("MAIN_CLASS", &spec.package_name().main_class()),
            ("JVM_TARGET", JVM_TARGET),
        ],
    );
    FileArtifact::new("build.gradle.kts".into(), content)
}

fn settings_descriptor(spec: &ProjectSpec) -> FileArtifact {
    let content = substitute(
        SETTINGS_GRADLE_KTS,
        &[("PROJECT_NAME", spec.project_name().as_str())],
    );
    FileArtifact::new("settings.gradle.kts".into(), content)
}

/// Fixed key/value pairs; independent of the spec.
fn properties_file() -> FileArtifact {
    FileArtifact::new("gradle.properties".into(), GRADLE_PROPERTIES)
}

/// Wrapper metadata plus the two launcher scripts. `gradlew` is the one
/// artifact that needs its execute bits set after writing.
fn wrapper_set(paths: &ProjectPaths) -> KotlinitResult<[FileArtifact; 3]> {
    let properties = substitute(
        GRADLE_WRAPPER_PROPERTIES,
        &[("DISTRIBUTION_URL", GRADLE_DISTRIBUTION_URL)],
    );

    Ok([
        FileArtifact::new(
            paths.wrapper_dir().join("gradle-wrapper.properties")?,
            properties,
        ),
        FileArtifact::executable("gradlew".into(), GRADLEW),
        FileArtifact::new("gradlew.bat".into(), GRADLEW_BAT),
    ])
}

fn entry_point(spec: &ProjectSpec, paths: &ProjectPaths) -> KotlinitResult<FileArtifact> {
    let content = substitute(
        MAIN_KT,
        &[
            ("PACKAGE_NAME", spec.package_name().as_str()),
            ("PROJECT_NAME", spec.project_name().as_str()),
        ],
    );
    Ok(FileArtifact::new(
        paths.source_package_dir().join("Main.kt")?,
        content,
    ))
}

fn test_source(spec: &ProjectSpec, paths: &ProjectPaths) -> KotlinitResult<FileArtifact> {
    let content = substitute(
        CALCULATOR_TEST_KT,
        &[("PACKAGE_NAME", spec.package_name().as_str())],
    );
    Ok(FileArtifact::new(
        paths.test_package_dir().join("CalculatorTest.kt")?,
        content,
    ))
}

/// `.vscode/settings.json` — hides build and VCS artifacts from listings.
///
/// Serialized through `serde_json` so the document is guaranteed valid JSON;
/// `serde_json::Value` keeps keys sorted, so output is byte-stable.
fn editor_settings(paths: &ProjectPaths) -> KotlinitResult<FileArtifact> {
    let settings = serde_json::json!({
        "files.exclude": {
            "**/.gradle": true,
            "**/build": true,
            "**/.git": true,
        },
        "java.configuration.updateBuildConfiguration": "automatic",
    });

    Ok(FileArtifact::new(
        paths.editor_config_dir().join("settings.json")?,
        to_pretty_json(&settings)?,
    ))
}

/// `.vscode/launch.json` — one debug launch configuration pointed at the
/// generated entry-point class.
fn launch_configuration(spec: &ProjectSpec, paths: &ProjectPaths) -> KotlinitResult<FileArtifact> {
    let launch = serde_json::json!({
        "version": "0.2.0",
        "configurations": [
            {
                "type": "kotlin",
                "request": "launch",
                "name": "Run Kotlin Application",
                "projectRoot": "${workspaceFolder}",
                "mainClass": spec.package_name().main_class(),
            }
        ],
    });

    Ok(FileArtifact::new(
        paths.editor_config_dir().join("launch.json")?,
        to_pretty_json(&launch)?,
    ))
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Literal placeholder substitution: replaces each `{{KEY}}` with its value.
/// No escaping — inputs are pre-validated identifiers.
fn substitute(template: &str, vars: &[(&str, &str)]) -> String {
    let mut rendered = template.to_string();
    for (key, value) in vars {
        rendered = rendered.replace(&format!("{{{{{key}}}}}"), value);
    }
    rendered
}

fn to_pretty_json(value: &serde_json::Value) -> KotlinitResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| {
        kotlinit_core::application::ApplicationError::Rendering {
            reason: e.to_string(),
        }
        .into()
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
