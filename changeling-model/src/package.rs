//! Packages and declared types.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// In-memory tree of packages and their declared types.
///
/// Packages are kept in declaration order so that a generation walk over
/// the model is deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Model {
    packages: IndexMap<String, Package>,
}

impl Model {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a package to the model, replacing any package with the same name.
    pub fn add_package(&mut self, package: Package) {
        self.packages.insert(package.name.clone(), package);
    }

    /// Look up a package by its dotted identifier.
    pub fn package(&self, name: &str) -> Option<&Package> {
        self.packages.get(name)
    }

    /// Iterate over packages in declaration order.
    pub fn packages(&self) -> impl Iterator<Item = &Package> {
        self.packages.values()
    }

    /// Total number of declared types across all packages.
    pub fn type_count(&self) -> usize {
        self.packages.values().map(|p| p.types.len()).sum()
    }
}

/// One package in the model, identified by a dotted name (e.g. `com.example`).
///
/// The empty name identifies the default package, whose files live directly
/// under the output root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Package {
    name: String,
    types: Vec<TypeDecl>,
}

impl Package {
    /// Create an empty package with the given dotted identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            types: Vec::new(),
        }
    }

    /// Add a declared type, builder-style.
    pub fn with_type(mut self, ty: TypeDecl) -> Self {
        self.types.push(ty);
        self
    }

    /// Declare a type in this package.
    pub fn declare(&mut self, ty: TypeDecl) {
        self.types.push(ty);
    }

    /// The dotted package identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true for the unnamed default package.
    pub fn is_default(&self) -> bool {
        self.name.is_empty()
    }

    /// Directory for this package relative to the output root.
    ///
    /// Dots become path separators: `com.example` → `com/example`. The
    /// default package resolves to an empty path.
    pub fn relative_dir(&self) -> PathBuf {
        if self.is_default() {
            return PathBuf::new();
        }
        self.name.split('.').collect()
    }

    /// The declared types, in declaration order.
    pub fn types(&self) -> &[TypeDecl] {
        &self.types
    }
}

/// A single declared type inside a package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDecl {
    name: String,
    kind: TypeKind,
}

impl TypeDecl {
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// The declared type name (e.g. `PrimitiveProperties`).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// The logical file name an engine requests for this type, given a
    /// source file extension without the dot.
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{}", self.name, extension)
    }
}

/// The shape of a declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Class,
    Enum,
    Interface,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_dir_maps_dots_to_separators() {
        let pkg = Package::new("com.example.generated");
        assert_eq!(
            pkg.relative_dir(),
            PathBuf::from("com").join("example").join("generated")
        );
    }

    #[test]
    fn test_default_package_has_empty_dir() {
        let pkg = Package::new("");
        assert!(pkg.is_default());
        assert_eq!(pkg.relative_dir(), PathBuf::new());
    }

    #[test]
    fn test_type_file_name() {
        let ty = TypeDecl::new("PrimitiveProperties", TypeKind::Class);
        assert_eq!(ty.kind(), TypeKind::Class);
        assert_eq!(ty.file_name("java"), "PrimitiveProperties.java");
        assert_eq!(ty.file_name("kt"), "PrimitiveProperties.kt");
    }

    #[test]
    fn test_declare_appends_in_order() {
        let mut pkg = Package::new("com.example");
        pkg.declare(TypeDecl::new("First", TypeKind::Class));
        pkg.declare(TypeDecl::new("Second", TypeKind::Interface));

        let names: Vec<&str> = pkg.types().iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["First", "Second"]);
    }

    #[test]
    fn test_model_preserves_declaration_order() {
        let mut model = Model::new();
        model.add_package(Package::new("org.zeta"));
        model.add_package(Package::new("org.alpha"));

        let names: Vec<&str> = model.packages().map(|p| p.name()).collect();
        assert_eq!(names, vec!["org.zeta", "org.alpha"]);
    }

    #[test]
    fn test_model_lookup_and_type_count() {
        let mut model = Model::new();
        model.add_package(
            Package::new("com.example")
                .with_type(TypeDecl::new("Foo", TypeKind::Class))
                .with_type(TypeDecl::new("Bar", TypeKind::Enum)),
        );
        model.add_package(Package::new("com.other"));

        assert_eq!(model.type_count(), 2);
        assert_eq!(
            model.package("com.example").unwrap().types().len(),
            2
        );
        assert!(model.package("com.missing").is_none());
    }
}
