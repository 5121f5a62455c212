//! Java type references.
//!
//! Types are stored fully qualified. How a type is spelled in the output
//! (simple name or qualified name) is decided by the [`CodeWriter`] at emit
//! time, which is what makes automatic import computation possible.
//!
//! [`CodeWriter`]: crate::CodeWriter

use std::{fmt, path::PathBuf};

use javadsl_core::{Error, Result};

/// Java primitive types, plus `void`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Primitive {
    Void,
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
}

impl Primitive {
    /// The Java keyword for this primitive.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Void => "void",
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Char => "char",
            Self::Float => "float",
            Self::Double => "double",
        }
    }

    /// Simple name of the `java.lang` wrapper class.
    pub fn boxed_name(&self) -> &'static str {
        match self {
            Self::Void => "Void",
            Self::Boolean => "Boolean",
            Self::Byte => "Byte",
            Self::Short => "Short",
            Self::Int => "Integer",
            Self::Long => "Long",
            Self::Char => "Character",
            Self::Float => "Float",
            Self::Double => "Double",
        }
    }

    const ALL: [Primitive; 9] = [
        Self::Void,
        Self::Boolean,
        Self::Byte,
        Self::Short,
        Self::Int,
        Self::Long,
        Self::Char,
        Self::Float,
        Self::Double,
    ];
}

/// A fully qualified class or interface name.
///
/// Nested classes keep the chain of enclosing simple names, so
/// `a.b.Outer.Inner` is stored as package `a.b` and names `[Outer, Inner]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassName {
    package: String,
    simple_names: Vec<String>,
}

impl ClassName {
    /// Create a top-level class name. Use an empty package for the default package.
    pub fn new(package: impl Into<String>, simple_name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            simple_names: vec![simple_name.into()],
        }
    }

    /// Create a class name with a chain of nested simple names.
    ///
    /// ```
    /// use javadsl_poet::ClassName;
    ///
    /// let inner = ClassName::get("a.b.c", "Class", &["Inner"]);
    /// assert_eq!(inner.canonical_name(), "a.b.c.Class.Inner");
    /// assert!(inner.is_nested());
    /// ```
    pub fn get(package: &str, simple_name: &str, nested: &[&str]) -> Self {
        let mut name = Self::new(package, simple_name);
        name.simple_names
            .extend(nested.iter().map(|n| (*n).to_string()));
        name
    }

    /// Guess a class name from a dotted string, treating the first segment
    /// that starts with an uppercase letter as the top-level class.
    pub fn best_guess(name: &str) -> Result<Self> {
        let segments: Vec<&str> = name.split('.').collect();
        let first_class = segments
            .iter()
            .position(|s| s.chars().next().is_some_and(char::is_uppercase))
            .ok_or_else(|| {
                Error::invalid_argument(format!("couldn't make a guess for '{name}'"))
            })?;
        if segments.iter().any(|s| s.is_empty()) {
            return Err(Error::invalid_argument(format!(
                "couldn't make a guess for '{name}'"
            )));
        }

        Ok(Self {
            package: segments[..first_class].join("."),
            simple_names: segments[first_class..]
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        })
    }

    /// Package name, empty for the default package.
    pub fn package_name(&self) -> &str {
        &self.package
    }

    /// Innermost simple name.
    pub fn simple_name(&self) -> &str {
        self.simple_names.last().map(String::as_str).unwrap_or_default()
    }

    /// All simple names from the top-level class inward.
    pub fn simple_names(&self) -> &[String] {
        &self.simple_names
    }

    /// True if this names a nested class.
    pub fn is_nested(&self) -> bool {
        self.simple_names.len() > 1
    }

    /// The directly enclosing class, if this class is nested.
    pub fn enclosing_class_name(&self) -> Option<ClassName> {
        if !self.is_nested() {
            return None;
        }
        Some(Self {
            package: self.package.clone(),
            simple_names: self.simple_names[..self.simple_names.len() - 1].to_vec(),
        })
    }

    /// The outermost class enclosing this one, or this class itself.
    pub fn top_level_class_name(&self) -> ClassName {
        Self {
            package: self.package.clone(),
            simple_names: self.simple_names[..1].to_vec(),
        }
    }

    /// Name of a class nested directly inside this one.
    pub fn nested_class(&self, name: impl Into<String>) -> ClassName {
        let mut nested = self.clone();
        nested.simple_names.push(name.into());
        nested
    }

    /// Name of a sibling class in the same package or enclosing class.
    pub fn peer_class(&self, name: impl Into<String>) -> ClassName {
        let mut peer = self.clone();
        if let Some(last) = peer.simple_names.last_mut() {
            *last = name.into();
        }
        peer
    }

    /// Dotted name including the package, e.g. `java.util.Map.Entry`.
    pub fn canonical_name(&self) -> String {
        let names = self.simple_names.join(".");
        if self.package.is_empty() {
            names
        } else {
            format!("{}.{}", self.package, names)
        }
    }

    /// Relative source path for this class: `a/b/c/Foo.java`.
    ///
    /// Nested classes have no file of their own and fail with an
    /// invalid-structure error.
    pub fn to_file_path(&self) -> Result<PathBuf> {
        if self.is_nested() {
            return Err(Error::invalid_structure(format!(
                "can not generate a path for an inner class: {self}"
            )));
        }

        let mut path = PathBuf::new();
        for segment in self.package.split('.').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        path.push(format!("{}.{}", self.simple_name(), crate::JAVA_EXTENSION));
        Ok(path)
    }

    fn boxed_primitive(&self) -> Option<Primitive> {
        if self.package != "java.lang" || self.is_nested() {
            return None;
        }
        Primitive::ALL
            .into_iter()
            .find(|p| p.boxed_name() == self.simple_name())
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_name())
    }
}

/// Any Java type reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeName {
    /// A primitive type or `void`.
    Primitive(Primitive),
    /// A class or interface.
    Class(ClassName),
    /// An array of the component type.
    Array(Box<TypeName>),
    /// A generic class instantiated with type arguments.
    Parameterized {
        /// The generic class.
        raw: ClassName,
        /// Type arguments, in declaration order.
        args: Vec<TypeName>,
    },
    /// A type variable such as `T`.
    Variable(String),
}

impl TypeName {
    pub const VOID: TypeName = TypeName::Primitive(Primitive::Void);
    pub const BOOLEAN: TypeName = TypeName::Primitive(Primitive::Boolean);
    pub const BYTE: TypeName = TypeName::Primitive(Primitive::Byte);
    pub const SHORT: TypeName = TypeName::Primitive(Primitive::Short);
    pub const INT: TypeName = TypeName::Primitive(Primitive::Int);
    pub const LONG: TypeName = TypeName::Primitive(Primitive::Long);
    pub const CHAR: TypeName = TypeName::Primitive(Primitive::Char);
    pub const FLOAT: TypeName = TypeName::Primitive(Primitive::Float);
    pub const DOUBLE: TypeName = TypeName::Primitive(Primitive::Double);

    /// `java.lang.Object`.
    pub fn object() -> Self {
        Self::Class(ClassName::new("java.lang", "Object"))
    }

    /// Create an array type.
    pub fn array(component: impl Into<TypeName>) -> Self {
        Self::Array(Box::new(component.into()))
    }

    /// Create a parameterized type. Arguments are used as given.
    pub fn parameterized(raw: ClassName, args: impl IntoIterator<Item = TypeName>) -> Self {
        Self::Parameterized {
            raw,
            args: args.into_iter().collect(),
        }
    }

    /// Create a type variable.
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// True for primitives other than `void`.
    pub fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(p) if *p != Primitive::Void)
    }

    /// True for the `java.lang` wrapper classes of primitives.
    pub fn is_boxed_primitive(&self) -> bool {
        match self {
            Self::Class(name) => name
                .boxed_primitive()
                .is_some_and(|p| p != Primitive::Void),
            _ => false,
        }
    }

    /// The wrapper class for a primitive; other types are returned unchanged.
    pub fn box_(&self) -> TypeName {
        match self {
            Self::Primitive(p) => Self::Class(ClassName::new("java.lang", p.boxed_name())),
            other => other.clone(),
        }
    }

    /// The primitive for a wrapper class, or `None` if this is not one.
    pub fn unbox(&self) -> Option<TypeName> {
        match self {
            Self::Primitive(_) => Some(self.clone()),
            Self::Class(name) => name.boxed_primitive().map(Self::Primitive),
            _ => None,
        }
    }

    /// Alias for [`TypeName::box_`], named to pair with [`TypeName::ensure_unboxed`].
    pub fn ensure_boxed(&self) -> TypeName {
        self.box_()
    }

    /// The primitive for a wrapper class, otherwise the type itself.
    pub fn ensure_unboxed(&self) -> TypeName {
        self.unbox().unwrap_or_else(|| self.clone())
    }

    /// The class name, for plain class types.
    pub fn as_class_name(&self) -> Option<&ClassName> {
        match self {
            Self::Class(name) => Some(name),
            _ => None,
        }
    }
}

impl From<Primitive> for TypeName {
    fn from(p: Primitive) -> Self {
        Self::Primitive(p)
    }
}

impl From<ClassName> for TypeName {
    fn from(name: ClassName) -> Self {
        Self::Class(name)
    }
}

impl From<&ClassName> for TypeName {
    fn from(name: &ClassName) -> Self {
        Self::Class(name.clone())
    }
}

impl From<&TypeName> for TypeName {
    fn from(ty: &TypeName) -> Self {
        ty.clone()
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut writer = crate::CodeWriter::new(javadsl_core::Indent::JAVA);
        writer.emit_type(self);
        f.write_str(&writer.build())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn test_class_name_parts() {
        let name = ClassName::get("a.b.c", "Outer", &["Inner"]);
        assert_eq!(name.package_name(), "a.b.c");
        assert_eq!(name.simple_name(), "Inner");
        assert_eq!(name.canonical_name(), "a.b.c.Outer.Inner");
        assert_eq!(
            name.enclosing_class_name(),
            Some(ClassName::new("a.b.c", "Outer"))
        );
        assert_eq!(name.top_level_class_name(), ClassName::new("a.b.c", "Outer"));
        assert_eq!(name.peer_class("Other").canonical_name(), "a.b.c.Outer.Other");
    }

    #[test]
    fn test_default_package() {
        let name = ClassName::new("", "Baz");
        assert_eq!(name.canonical_name(), "Baz");
        assert!(!name.is_nested());
        assert_eq!(name.enclosing_class_name(), None);
    }

    #[test]
    fn test_best_guess() {
        let name = ClassName::best_guess("java.util.Map.Entry").unwrap();
        assert_eq!(name, ClassName::get("java.util", "Map", &["Entry"]));
        assert_eq!(ClassName::best_guess("Foo").unwrap(), ClassName::new("", "Foo"));
        assert!(ClassName::best_guess("java.util").is_err());
        assert!(ClassName::best_guess("java..Foo").is_err());
    }

    #[test]
    fn test_to_file_path() {
        assert_eq!(
            ClassName::new("", "Baz").to_file_path().unwrap(),
            Path::new("Baz.java")
        );
        assert_eq!(
            ClassName::new("com", "Baz").to_file_path().unwrap(),
            Path::new("com/Baz.java")
        );
        assert_eq!(
            ClassName::new("com.foo.bar", "Baz").to_file_path().unwrap(),
            Path::new("com/foo/bar/Baz.java")
        );

        let err = ClassName::get("a.b.c", "Class", &["Inner"])
            .to_file_path()
            .unwrap_err();
        assert!(matches!(*err, Error::InvalidStructure { .. }));
    }

    #[test]
    fn test_boxing() {
        let integer = TypeName::Class(ClassName::new("java.lang", "Integer"));
        let character = TypeName::Class(ClassName::new("java.lang", "Character"));
        let string = TypeName::Class(ClassName::new("java.lang", "String"));

        assert_eq!(TypeName::INT.ensure_boxed(), integer);
        assert_eq!(TypeName::CHAR.ensure_boxed(), character);
        assert_eq!(string.ensure_boxed(), string);

        assert_eq!(integer.ensure_unboxed(), TypeName::INT);
        assert_eq!(character.ensure_unboxed(), TypeName::CHAR);
        assert_eq!(string.ensure_unboxed(), string);
        assert_eq!(string.unbox(), None);

        assert!(integer.is_boxed_primitive());
        assert!(!string.is_boxed_primitive());
        assert!(TypeName::INT.is_primitive());
        assert!(!TypeName::VOID.is_primitive());
    }

    #[test]
    fn test_display() {
        let map = TypeName::parameterized(
            ClassName::new("java.util", "Map"),
            [
                TypeName::Class(ClassName::new("java.lang", "String")),
                TypeName::array(TypeName::INT),
            ],
        );
        assert_eq!(map.to_string(), "java.util.Map<java.lang.String, int[]>");
        assert_eq!(TypeName::variable("T").to_string(), "T");
        assert_eq!(TypeName::LONG.to_string(), "long");
    }
}
