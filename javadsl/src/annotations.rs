//! Common annotations.

use javadsl_core::{Result, require_not_blank};
use javadsl_poet::{AnnotationSpec, ClassName, CodeBlock, string_literal};

use crate::type_names;

/// An annotation without members.
pub fn of(type_name: ClassName) -> AnnotationSpec {
    AnnotationSpec::new(type_name)
}

/// `@Override`
pub fn override_() -> AnnotationSpec {
    of(type_names::OVERRIDE.clone())
}

/// `@Deprecated`
pub fn deprecated() -> AnnotationSpec {
    of(type_names::DEPRECATED.clone())
}

/// `@FunctionalInterface`
pub fn functional_interface() -> AnnotationSpec {
    of(type_names::FUNCTIONAL_INTERFACE.clone())
}

/// `@SafeVarargs`
pub fn safe_varargs() -> AnnotationSpec {
    of(type_names::SAFE_VARARGS.clone())
}

/// `@SuppressWarnings` for the given warnings.
///
/// ```
/// use javadsl::annotations;
///
/// assert_eq!(
///     annotations::suppress_warnings(["unchecked"]).to_string(),
///     "@java.lang.SuppressWarnings(\"unchecked\")"
/// );
/// assert_eq!(
///     annotations::suppress_warnings(["unchecked", "rawtypes"]).to_string(),
///     "@java.lang.SuppressWarnings({\"unchecked\", \"rawtypes\"})"
/// );
/// ```
pub fn suppress_warnings<S: AsRef<str>>(warnings: impl IntoIterator<Item = S>) -> AnnotationSpec {
    let warnings: Vec<String> = warnings
        .into_iter()
        .map(|w| string_literal(w.as_ref()))
        .collect();

    let value = match warnings.as_slice() {
        [single] => single.clone(),
        all => format!("{{{}}}", all.join(", ")),
    };
    of(type_names::SUPPRESS_WARNINGS.clone()).member("value", CodeBlock::text(value))
}

/// `@SuppressWarnings("all")`
pub fn suppress_all_warnings() -> AnnotationSpec {
    suppress_warnings(["all"])
}

/// Options for [`generated`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedOptions {
    /// Name of the code generator, usually its fully qualified class name.
    pub generator_name: String,
    /// Generation timestamp, already formatted as ISO 8601.
    pub date: Option<String>,
    /// Free-form comments. Omitted when empty.
    pub comments: String,
    /// Java release the code targets. Releases up to 8 use
    /// `javax.annotation.Generated`.
    pub java_version: u32,
}

impl GeneratedOptions {
    pub fn new(generator_name: impl Into<String>) -> Self {
        Self {
            generator_name: generator_name.into(),
            date: None,
            comments: String::new(),
            java_version: 9,
        }
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn comments(mut self, comments: impl Into<String>) -> Self {
        self.comments = comments.into();
        self
    }

    pub fn java_version(mut self, java_version: u32) -> Self {
        self.java_version = java_version;
        self
    }
}

/// `@Generated` for the targeted Java release.
pub fn generated(options: GeneratedOptions) -> Result<AnnotationSpec> {
    require_not_blank(&options.generator_name, "generator name")?;

    let type_name = if options.java_version <= 8 {
        type_names::GENERATED_JDK8.clone()
    } else {
        type_names::GENERATED_JDK9.clone()
    };

    let mut annotation =
        of(type_name).member("value", CodeBlock::text(string_literal(&options.generator_name)));
    if let Some(date) = &options.date {
        annotation = annotation.member("date", CodeBlock::text(string_literal(date)));
    }
    if !options.comments.is_empty() {
        annotation = annotation.member("comments", CodeBlock::text(string_literal(&options.comments)));
    }
    Ok(annotation)
}

#[cfg(test)]
mod tests {
    use javadsl_core::Error;

    use super::*;

    const DATE: &str = "2019-01-02T03:04:05.789Z";

    #[test]
    fn test_marker_annotations() {
        assert_eq!(override_().to_string(), "@java.lang.Override");
        assert_eq!(deprecated().to_string(), "@java.lang.Deprecated");
        assert_eq!(functional_interface().to_string(), "@java.lang.FunctionalInterface");
        assert_eq!(safe_varargs().to_string(), "@java.lang.SafeVarargs");
    }

    #[test]
    fn test_suppress_warnings() {
        assert_eq!(
            suppress_warnings(Vec::<&str>::new()).to_string(),
            "@java.lang.SuppressWarnings({})"
        );
        assert_eq!(
            suppress_warnings(["unchecked"]).to_string(),
            "@java.lang.SuppressWarnings(\"unchecked\")"
        );
        assert_eq!(
            suppress_warnings(["unchecked", "some", "foo"]).to_string(),
            "@java.lang.SuppressWarnings({\"unchecked\", \"some\", \"foo\"})"
        );
        assert_eq!(
            suppress_all_warnings().to_string(),
            "@java.lang.SuppressWarnings(\"all\")"
        );
    }

    #[test]
    fn test_generated_for_java_8() {
        let annotation = generated(GeneratedOptions::new("generator.name").java_version(8)).unwrap();
        assert_eq!(
            annotation.to_string(),
            "@javax.annotation.Generated(\"generator.name\")"
        );

        let annotation = generated(
            GeneratedOptions::new("generator.name")
                .date(DATE)
                .comments("some \"comments\"")
                .java_version(8),
        )
        .unwrap();
        assert_eq!(
            annotation.to_string(),
            "@javax.annotation.Generated(value = \"generator.name\", date = \"2019-01-02T03:04:05.789Z\", comments = \"some \\\"comments\\\"\")"
        );
    }

    #[test]
    fn test_generated_for_java_9() {
        let annotation = generated(GeneratedOptions::new("generator.name")).unwrap();
        assert_eq!(
            annotation.to_string(),
            "@javax.annotation.processing.Generated(\"generator.name\")"
        );

        let annotation = generated(
            GeneratedOptions::new("generator.name")
                .date(DATE)
                .comments("some \"comments\""),
        )
        .unwrap();
        assert_eq!(
            annotation.to_string(),
            "@javax.annotation.processing.Generated(value = \"generator.name\", date = \"2019-01-02T03:04:05.789Z\", comments = \"some \\\"comments\\\"\")"
        );
    }

    #[test]
    fn test_generated_requires_name() {
        let err = generated(GeneratedOptions::new(" ")).unwrap_err();
        assert!(matches!(*err, Error::InvalidArgument { .. }));
    }
}
