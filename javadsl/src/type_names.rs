//! Frequently referenced JDK types.

use std::sync::LazyLock;

use javadsl_poet::{ClassName, TypeName};

macro_rules! class_names {
    ($($(#[$doc:meta])* $name:ident = $package:literal, $simple:literal;)*) => {
        $(
            $(#[$doc])*
            pub static $name: LazyLock<ClassName> =
                LazyLock::new(|| ClassName::new($package, $simple));
        )*
    };
}

class_names! {
    OBJECT = "java.lang", "Object";
    STRING = "java.lang", "String";
    SYSTEM = "java.lang", "System";
    ITERABLE = "java.lang", "Iterable";
    DEPRECATED = "java.lang", "Deprecated";
    OVERRIDE = "java.lang", "Override";
    SUPPRESS_WARNINGS = "java.lang", "SuppressWarnings";
    FUNCTIONAL_INTERFACE = "java.lang", "FunctionalInterface";
    SAFE_VARARGS = "java.lang", "SafeVarargs";

    BOOLEAN = "java.lang", "Boolean";
    BYTE = "java.lang", "Byte";
    SHORT = "java.lang", "Short";
    INTEGER = "java.lang", "Integer";
    LONG = "java.lang", "Long";
    CHARACTER = "java.lang", "Character";
    FLOAT = "java.lang", "Float";
    DOUBLE = "java.lang", "Double";

    OPTIONAL = "java.util", "Optional";
    LIST = "java.util", "List";
    SET = "java.util", "Set";
    MAP = "java.util", "Map";
    ITERATOR = "java.util", "Iterator";
    STREAM = "java.util.stream", "Stream";

    /// `@Generated` before Java 9.
    GENERATED_JDK8 = "javax.annotation", "Generated";
    /// `@Generated` from Java 9 on.
    GENERATED_JDK9 = "javax.annotation.processing", "Generated";
}

/// Shorthand for [`ClassName::get`].
pub fn class_name(package: &str, simple_name: &str, nested: &[&str]) -> ClassName {
    ClassName::get(package, simple_name, nested)
}

/// A generic type such as `List<String>`. Primitive arguments are boxed.
///
/// ```
/// use javadsl::{type_names, TypeName};
///
/// let map = type_names::parameterized_type(&type_names::MAP, [TypeName::INT, type_names::STRING.clone().into()]);
/// assert_eq!(map.to_string(), "java.util.Map<java.lang.Integer, java.lang.String>");
/// ```
pub fn parameterized_type(raw: &ClassName, args: impl IntoIterator<Item = TypeName>) -> TypeName {
    TypeName::parameterized(raw.clone(), args.into_iter().map(|arg| arg.ensure_boxed()))
}

/// An array of `component`.
pub fn array_type(component: impl Into<TypeName>) -> TypeName {
    TypeName::array(component)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(STREAM.canonical_name(), "java.util.stream.Stream");
        assert_eq!(ITERABLE.package_name(), "java.lang");
        assert_eq!(GENERATED_JDK9.canonical_name(), "javax.annotation.processing.Generated");
        assert!(TypeName::from(&*INTEGER).is_boxed_primitive());
    }

    #[test]
    fn test_parameterized_type_boxes_primitives() {
        let list = parameterized_type(&LIST, [TypeName::LONG]);
        assert_eq!(list.to_string(), "java.util.List<java.lang.Long>");

        let optional = parameterized_type(&OPTIONAL, [STRING.clone().into()]);
        assert_eq!(optional.to_string(), "java.util.Optional<java.lang.String>");
    }

    #[test]
    fn test_array_type() {
        assert_eq!(array_type(TypeName::BYTE).to_string(), "byte[]");
        assert_eq!(
            array_type(array_type(&*STRING)).to_string(),
            "java.lang.String[][]"
        );
    }

    #[test]
    fn test_class_name() {
        let entry = class_name("java.util", "Map", &["Entry"]);
        assert_eq!(entry.canonical_name(), "java.util.Map.Entry");
        assert_eq!(entry.enclosing_class_name().as_ref(), Some(&*MAP));
    }
}
