//! Project specification value objects: ProjectName, PackageName, ProjectSpec.
//!
//! # Design
//!
//! These are pure value types — equality-by-value, no identity. Each enforces
//! its syntactic shape once, at construction; everything downstream (path
//! planning, template rendering, generation) trusts the shape and performs no
//! re-validation. This is the generator's input contract: callers hand over
//! three pre-validated strings and the core never second-guesses them.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

// ── ProjectName ───────────────────────────────────────────────────────────────

/// A validated project name.
///
/// Shape: one or more of `[A-Za-z0-9_-]`. Doubles as the leaf directory name
/// of the generated project, so path separators and dots are rejected by
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProjectName(String);

impl ProjectName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProjectName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(DomainError::InvalidProjectName {
                name: s.into(),
                reason: "name cannot be empty".into(),
            });
        }
        if let Some(bad) = s
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '-'))
        {
            return Err(DomainError::InvalidProjectName {
                name: s.into(),
                reason: format!(
                    "only letters, numbers, underscores, and hyphens are allowed (found '{bad}')"
                ),
            });
        }
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for ProjectName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ProjectName> for String {
    fn from(name: ProjectName) -> Self {
        name.0
    }
}

// ── PackageName ───────────────────────────────────────────────────────────────

/// A validated dotted package identifier, e.g. `com.example.app`.
///
/// Shape: dot-separated segments, each `[A-Za-z][A-Za-z0-9_]*`. Segments map
/// one-to-one onto nested source directories; the full identifier is also
/// embedded verbatim in `package` declarations and the entry-point reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PackageName(String);

impl PackageName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The ordered directory segments, derived by splitting on `.`.
    ///
    /// Recomputed on demand — a pure function of the identifier, never cached.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// Fully-qualified entry-point class reference, `<package>.MainKt`.
    ///
    /// String concatenation, deliberately not a path join: this lands in the
    /// build descriptor and launch configuration as a JVM class name.
    pub fn main_class(&self) -> String {
        format!("{}.MainKt", self.0)
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PackageName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(DomainError::InvalidPackageName {
                name: s.into(),
                reason: "package name cannot be empty".into(),
            });
        }
        for segment in s.split('.') {
            if !is_valid_segment(segment) {
                return Err(DomainError::InvalidPackageName {
                    name: s.into(),
                    reason: format!(
                        "segment '{segment}' must start with a letter and contain only \
                         letters, numbers, and underscores"
                    ),
                });
            }
        }
        Ok(Self(s.to_string()))
    }
}

fn is_valid_segment(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl TryFrom<String> for PackageName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<PackageName> for String {
    fn from(name: PackageName) -> Self {
        name.0
    }
}

// ── ProjectSpec ───────────────────────────────────────────────────────────────

/// The fully-validated input to one generation run.
///
/// Immutable after construction; owned by the generator for the duration of a
/// single `generate()` call. The target directory must be absolute — relative
/// paths would make the produced tree depend on the process working directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSpec {
    target_dir: PathBuf,
    project_name: ProjectName,
    package_name: PackageName,
}

impl ProjectSpec {
    pub fn new(
        target_dir: impl Into<PathBuf>,
        project_name: ProjectName,
        package_name: PackageName,
    ) -> Result<Self, DomainError> {
        let target_dir = target_dir.into();
        if !target_dir.is_absolute() {
            return Err(DomainError::RelativeTargetDir {
                path: target_dir.display().to_string(),
            });
        }
        Ok(Self {
            target_dir,
            project_name,
            package_name,
        })
    }

    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    pub fn project_name(&self) -> &ProjectName {
        &self.project_name
    }

    pub fn package_name(&self) -> &PackageName {
        &self.package_name
    }

    /// Root of the generated tree: `target_dir / project_name`.
    pub fn project_root(&self) -> PathBuf {
        self.target_dir.join(self.project_name.as_str())
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── ProjectName ───────────────────────────────────────────────────────

    #[test]
    fn valid_project_names_parse() {
        for name in &["demo-app", "my_app", "project123", "MyApp", "a"] {
            assert!(name.parse::<ProjectName>().is_ok(), "failed for: {name}");
        }
    }

    #[test]
    fn empty_project_name_is_rejected() {
        assert!(matches!(
            "".parse::<ProjectName>(),
            Err(DomainError::InvalidProjectName { .. })
        ));
    }

    #[test]
    fn project_name_rejects_separators_and_dots() {
        assert!("a/b".parse::<ProjectName>().is_err());
        assert!("a\\b".parse::<ProjectName>().is_err());
        assert!("a.b".parse::<ProjectName>().is_err());
        assert!("my app".parse::<ProjectName>().is_err());
    }

    // ── PackageName ───────────────────────────────────────────────────────

    #[test]
    fn valid_package_names_parse() {
        for name in &["com.example", "org.demo.app", "single", "a.b_c.d2"] {
            assert!(name.parse::<PackageName>().is_ok(), "failed for: {name}");
        }
    }

    #[test]
    fn package_segments_split_on_dots() {
        let pkg: PackageName = "com.example".parse().unwrap();
        let segments: Vec<_> = pkg.segments().collect();
        assert_eq!(segments, vec!["com", "example"]);
    }

    #[test]
    fn package_name_rejects_malformed_shapes() {
        for name in &["", ".", "com.", ".com", "1com", "com.2x", "com..example", "com-example"] {
            assert!(
                name.parse::<PackageName>().is_err(),
                "should reject: {name}"
            );
        }
    }

    #[test]
    fn main_class_is_concatenated_not_joined() {
        let pkg: PackageName = "com.example".parse().unwrap();
        assert_eq!(pkg.main_class(), "com.example.MainKt");
    }

    // ── ProjectSpec ───────────────────────────────────────────────────────

    fn spec(target: &str) -> Result<ProjectSpec, DomainError> {
        ProjectSpec::new(
            target,
            "demo-app".parse().unwrap(),
            "com.example".parse().unwrap(),
        )
    }

    #[test]
    fn project_root_joins_target_and_name() {
        let spec = spec("/tmp/ws").unwrap();
        assert_eq!(spec.project_root(), PathBuf::from("/tmp/ws/demo-app"));
    }

    #[test]
    fn relative_target_dir_is_rejected() {
        assert!(matches!(
            spec("workspace"),
            Err(DomainError::RelativeTargetDir { .. })
        ));
    }
}
