use javadsl_core::{Result, require_not_blank};
use javadsl_poet::{AnnotationSpec, CodeBlockBuilder, MethodSpec, Modifier, ParameterSpec, TypeName};

use crate::CodeBuilder;

/// Options for [`method_spec`].
#[derive(Debug, Clone, PartialEq)]
pub struct MethodOptions {
    /// Return type, `void` by default.
    pub returns: TypeName,
    pub parameters: Vec<ParameterSpec>,
    pub modifiers: Vec<Modifier>,
    pub annotations: Vec<AnnotationSpec>,
    pub throws: Vec<TypeName>,
    /// Render the last parameter, which must be an array, as `T...`.
    pub varargs: bool,
}

impl Default for MethodOptions {
    fn default() -> Self {
        Self {
            returns: TypeName::VOID,
            parameters: Vec::new(),
            modifiers: Vec::new(),
            annotations: Vec::new(),
            throws: Vec::new(),
            varargs: false,
        }
    }
}

impl MethodOptions {
    pub fn returns(mut self, returns: impl Into<TypeName>) -> Self {
        self.returns = returns.into();
        self
    }

    pub fn parameters(mut self, parameters: impl IntoIterator<Item = ParameterSpec>) -> Self {
        self.parameters.extend(parameters);
        self
    }

    pub fn modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.modifiers.extend(modifiers);
        self
    }

    pub fn annotations(mut self, annotations: impl IntoIterator<Item = AnnotationSpec>) -> Self {
        self.annotations.extend(annotations);
        self
    }

    pub fn throws(mut self, throws: impl IntoIterator<Item = TypeName>) -> Self {
        self.throws.extend(throws);
        self
    }

    pub fn varargs(mut self, varargs: bool) -> Self {
        self.varargs = varargs;
        self
    }
}

/// The declaration a method body is being generated for.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodMeta {
    pub name: String,
    pub returns: TypeName,
    pub parameters: Vec<ParameterSpec>,
    pub modifiers: Vec<Modifier>,
    pub annotations: Vec<AnnotationSpec>,
    pub throws: Vec<TypeName>,
    pub varargs: bool,
}

/// Declare a method whose body is generated by `body`.
///
/// Abstract methods pass a body that writes nothing.
///
/// ```
/// use javadsl::{method_spec, parameter_spec, MethodOptions, Modifier, ParameterOptions, TypeName};
///
/// let add = method_spec(
///     "add",
///     MethodOptions::default()
///         .modifiers([Modifier::Public])
///         .parameters([parameter_spec(TypeName::INT, "value", ParameterOptions::default())?]),
///     |c, _| {
///         c.s("this.foo += value")?;
///         Ok(())
///     },
/// )?;
/// assert_eq!(
///     add.to_string(),
///     "public void add(final int value) {\n  this.foo += value;\n}\n"
/// );
/// # Ok::<(), Box<javadsl::Error>>(())
/// ```
pub fn method_spec<F>(name: &str, options: MethodOptions, body: F) -> Result<MethodSpec>
where
    F: FnOnce(&mut CodeBuilder<'_>, &MethodMeta) -> Result<()>,
{
    require_not_blank(name, "method name")?;

    let meta = MethodMeta {
        name: name.to_string(),
        returns: options.returns,
        parameters: options.parameters,
        modifiers: options.modifiers,
        annotations: options.annotations,
        throws: options.throws,
        varargs: options.varargs,
    };

    let mut code = CodeBlockBuilder::new();
    crate::code_builder::build_body(&mut code, |c| body(c, &meta))?;

    let method = MethodSpec::method(meta.name)
        .returns(meta.returns)
        .parameters(meta.parameters)
        .modifiers(meta.modifiers)
        .annotations(meta.annotations)
        .exceptions(meta.throws)
        .varargs(meta.varargs)
        .code(code.build());
    method.validate()?;

    tracing::trace!(method = %method.name, "built method");
    Ok(method)
}

#[cfg(test)]
mod tests {
    use javadsl_core::Error;
    use javadsl_poet::ClassName;

    use super::*;
    use crate::{ParameterOptions, annotations, parameter_spec};

    #[test]
    fn test_void_by_default() {
        let method = method_spec("run", MethodOptions::default(), |_, meta| {
            assert_eq!(meta.returns, TypeName::VOID);
            assert_eq!(meta.name, "run");
            Ok(())
        })
        .unwrap();
        assert_eq!(method.to_string(), "void run() {\n}\n");
    }

    #[test]
    fn test_full_declaration() {
        let method = method_spec(
            "read",
            MethodOptions::default()
                .returns(ClassName::new("java.lang", "String"))
                .modifiers([Modifier::Public])
                .annotations([annotations::override_()])
                .parameters([parameter_spec(
                    TypeName::array(TypeName::INT),
                    "values",
                    ParameterOptions::default(),
                )
                .unwrap()])
                .throws([ClassName::new("java.io", "IOException").into()])
                .varargs(true),
            |c, meta| {
                assert!(meta.varargs);
                c.s("return null")?;
                Ok(())
            },
        )
        .unwrap();

        assert_eq!(
            method.to_string(),
            "@java.lang.Override\n\
             public java.lang.String read(final int... values) throws java.io.IOException {\n  \
             return null;\n}\n"
        );
    }

    #[test]
    fn test_abstract_method() {
        let method = method_spec(
            "size",
            MethodOptions::default()
                .returns(TypeName::INT)
                .modifiers([Modifier::Public, Modifier::Abstract]),
            |_, _| Ok(()),
        )
        .unwrap();
        assert_eq!(method.to_string(), "public abstract int size();\n");
    }

    #[test]
    fn test_abstract_method_with_code_is_rejected() {
        let err = method_spec(
            "size",
            MethodOptions::default().modifiers([Modifier::Abstract]),
            |c, _| {
                c.s("return 1")?;
                Ok(())
            },
        )
        .unwrap_err();
        assert!(matches!(*err, Error::InvalidArgument { .. }));
    }

    #[test]
    fn test_varargs_without_array_is_rejected() {
        let err = method_spec(
            "log",
            MethodOptions::default()
                .parameters([parameter_spec(TypeName::INT, "x", ParameterOptions::default()).unwrap()])
                .varargs(true),
            |_, _| Ok(()),
        )
        .unwrap_err();
        assert!(matches!(*err, Error::InvalidArgument { .. }));
    }

    #[test]
    fn test_body_errors_propagate() {
        let err = method_spec("broken", MethodOptions::default(), |_, _| {
            Err(Error::invalid_state("body failed"))
        })
        .unwrap_err();
        assert!(matches!(*err, Error::InvalidState { .. }));
    }

    #[test]
    fn test_blank_name() {
        let err = method_spec("", MethodOptions::default(), |_, _| Ok(())).unwrap_err();
        assert!(matches!(*err, Error::InvalidArgument { .. }));
    }
}
