use javadsl_core::{Result, require_not_blank};
use javadsl_poet::{AnnotationSpec, Modifier, ParameterSpec, TypeName};

/// Options for [`parameter_spec`].
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterOptions {
    /// Declare the parameter `final`. On by default.
    pub is_final: bool,
    pub annotations: Vec<AnnotationSpec>,
}

impl Default for ParameterOptions {
    fn default() -> Self {
        Self {
            is_final: true,
            annotations: Vec::new(),
        }
    }
}

impl ParameterOptions {
    pub fn is_final(mut self, is_final: bool) -> Self {
        self.is_final = is_final;
        self
    }

    pub fn annotations(mut self, annotations: impl IntoIterator<Item = AnnotationSpec>) -> Self {
        self.annotations.extend(annotations);
        self
    }
}

/// Declare a method or constructor parameter.
pub fn parameter_spec(
    type_name: impl Into<TypeName>,
    name: &str,
    options: ParameterOptions,
) -> Result<ParameterSpec> {
    require_not_blank(name, "parameter name")?;

    let modifiers = options.is_final.then_some(Modifier::Final);
    Ok(ParameterSpec::new(type_name, name)
        .modifiers(modifiers)
        .annotations(options.annotations))
}

#[cfg(test)]
mod tests {
    use javadsl_core::Error;
    use javadsl_poet::ClassName;

    use super::*;
    use crate::jsr305;

    #[test]
    fn test_final_by_default() {
        let parameter = parameter_spec(TypeName::INT, "value", ParameterOptions::default()).unwrap();
        assert_eq!(parameter.to_string(), "final int value");
    }

    #[test]
    fn test_options() {
        let parameter = parameter_spec(
            ClassName::new("java.lang", "String"),
            "name",
            ParameterOptions::default()
                .is_final(false)
                .annotations([jsr305::nullable()]),
        )
        .unwrap();
        assert_eq!(
            parameter.to_string(),
            "@javax.annotation.Nullable java.lang.String name"
        );
    }

    #[test]
    fn test_blank_name() {
        let err = parameter_spec(TypeName::INT, "", ParameterOptions::default()).unwrap_err();
        assert!(matches!(*err, Error::InvalidArgument { .. }));
    }
}
