use javadsl_core::Result;
use javadsl_poet::{AnnotationSpec, CodeBlockBuilder, MethodSpec, Modifier, ParameterSpec, TypeName};

use crate::{CodeBuilder, code_builder::build_body};

/// Options for [`constructor_spec`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstructorOptions {
    pub parameters: Vec<ParameterSpec>,
    pub modifiers: Vec<Modifier>,
    pub annotations: Vec<AnnotationSpec>,
    pub throws: Vec<TypeName>,
    pub varargs: bool,
}

impl ConstructorOptions {
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

/// The declaration a constructor body is being generated for.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstructorMeta {
    pub parameters: Vec<ParameterSpec>,
    pub modifiers: Vec<Modifier>,
    pub annotations: Vec<AnnotationSpec>,
    pub throws: Vec<TypeName>,
    pub varargs: bool,
}

/// Declare a constructor. It takes the name of the class it is added to.
pub fn constructor_spec<F>(options: ConstructorOptions, body: F) -> Result<MethodSpec>
where
    F: FnOnce(&mut CodeBuilder<'_>, &ConstructorMeta) -> Result<()>,
{
    let meta = ConstructorMeta {
        parameters: options.parameters,
        modifiers: options.modifiers,
        annotations: options.annotations,
        throws: options.throws,
        varargs: options.varargs,
    };

    let mut code = CodeBlockBuilder::new();
    build_body(&mut code, |c| body(c, &meta))?;

    let constructor = MethodSpec::constructor()
        .parameters(meta.parameters)
        .modifiers(meta.modifiers)
        .annotations(meta.annotations)
        .exceptions(meta.throws)
        .varargs(meta.varargs)
        .code(code.build());
    constructor.validate()?;
    Ok(constructor)
}
