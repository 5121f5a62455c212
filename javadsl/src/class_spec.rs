//! Class declarations assembled through nested builders.

use std::{fmt, path::PathBuf};

use javadsl_core::{Error, Result, require_not_blank};
use javadsl_poet::{
    AnnotationSpec, ClassName, CodeBlockBuilder, FieldSpec, JavaFile, JavaFileBuilder, MethodSpec,
    Modifier, TypeName, TypeSpec,
};

use crate::{
    CodeBuilder, ConstructorMeta, ConstructorOptions, FieldOptions, MethodMeta, MethodOptions,
    code_builder::build_body, constructor_spec, field_spec, method_spec,
};

/// A generated class together with its fully qualified name.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassSpec {
    pub class_name: ClassName,
    pub type_spec: TypeSpec,
}

impl ClassSpec {
    /// Relative source path, e.g. `com/example/Foo.java`.
    ///
    /// Fails with an invalid-structure error for nested classes.
    pub fn file_path(&self) -> Result<PathBuf> {
        self.class_name.to_file_path()
    }

    /// Start a [`JavaFile`] for this class.
    ///
    /// Nested classes are written as part of their top-level class and fail
    /// with an invalid-structure error.
    pub fn java_file_builder(&self) -> Result<JavaFileBuilder> {
        if self.class_name.is_nested() {
            return Err(Error::invalid_structure(format!(
                "can not generate a java file for an inner class: {}",
                self.class_name
            )));
        }
        Ok(JavaFile::builder(
            self.class_name.package_name(),
            self.type_spec.clone(),
        ))
    }

    /// Wrap this class in a [`JavaFile`] with computed imports.
    pub fn to_java_file(&self, skip_java_lang_imports: bool) -> Result<JavaFile> {
        Ok(self
            .java_file_builder()?
            .skip_java_lang_imports(skip_java_lang_imports)
            .build())
    }
}

impl fmt::Display for ClassSpec {
    /// Renders with fully qualified type names, preceded by the package
    /// statement unless the class is in the default package.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let package = self.class_name.package_name();
        if !package.is_empty() {
            write!(f, "package {package};\n\n")?;
        }
        fmt::Display::fmt(&self.type_spec, f)
    }
}

/// Options for [`class_spec`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassOptions {
    pub modifiers: Vec<Modifier>,
    pub annotations: Vec<AnnotationSpec>,
    pub superinterfaces: Vec<TypeName>,
    pub superclass: Option<TypeName>,
}

impl ClassOptions {
    pub fn modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.modifiers.extend(modifiers);
        self
    }

    pub fn annotations(mut self, annotations: impl IntoIterator<Item = AnnotationSpec>) -> Self {
        self.annotations.extend(annotations);
        self
    }

    pub fn superinterfaces(mut self, interfaces: impl IntoIterator<Item = TypeName>) -> Self {
        self.superinterfaces.extend(interfaces);
        self
    }

    pub fn superclass(mut self, superclass: impl Into<TypeName>) -> Self {
        self.superclass = Some(superclass.into());
        self
    }
}

/// The class a [`ClassSpecBuilder`] is building.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassMeta {
    pub name: ClassName,
    pub annotations: Vec<AnnotationSpec>,
    pub modifiers: Vec<Modifier>,
}

/// Declare a class whose members are added by `body`.
///
/// ```
/// use javadsl::{class_spec, ClassName, ClassOptions, FieldOptions, Modifier, TypeName};
///
/// let point = class_spec(
///     ClassName::new("geo", "Point"),
///     ClassOptions::default().modifiers([Modifier::Public]),
///     |b| {
///         b.field_decl(TypeName::INT, "x", FieldOptions::default())?;
///         Ok(())
///     },
/// )?;
/// assert_eq!(point.to_string(), "package geo;\n\npublic class Point {\n  int x;\n}\n");
/// # Ok::<(), Box<javadsl::Error>>(())
/// ```
pub fn class_spec<F>(name: ClassName, options: ClassOptions, body: F) -> Result<ClassSpec>
where
    F: FnOnce(&mut ClassSpecBuilder) -> Result<()>,
{
    require_not_blank(name.simple_name(), "class name")?;

    let mut spec = TypeSpec::class(name.simple_name())
        .modifiers(options.modifiers.iter().copied())
        .annotations(options.annotations.iter().cloned())
        .superinterfaces(options.superinterfaces);
    if let Some(superclass) = options.superclass {
        spec = spec.superclass(superclass);
    }

    let mut builder = ClassSpecBuilder {
        meta: ClassMeta {
            name: name.clone(),
            annotations: options.annotations,
            modifiers: options.modifiers,
        },
        spec,
    };
    body(&mut builder)?;

    tracing::trace!(class = %name, "built class");
    Ok(ClassSpec {
        class_name: name,
        type_spec: builder.spec,
    })
}

/// Adds members to a class under construction.
#[derive(Debug)]
pub struct ClassSpecBuilder {
    meta: ClassMeta,
    spec: TypeSpec,
}

impl ClassSpecBuilder {
    /// The class being built.
    pub fn meta(&self) -> &ClassMeta {
        &self.meta
    }

    /// Add a field.
    pub fn field_decl(
        &mut self,
        type_name: impl Into<TypeName>,
        name: &str,
        options: FieldOptions,
    ) -> Result<FieldSpec> {
        let field = field_spec(type_name, name, options)?;
        self.spec.fields.push(field.clone());
        Ok(field)
    }

    /// Add a nested class named `name` inside this class.
    pub fn class_decl<F>(&mut self, name: &str, options: ClassOptions, body: F) -> Result<ClassSpec>
    where
        F: FnOnce(&mut ClassSpecBuilder) -> Result<()>,
    {
        require_not_blank(name, "class name")?;
        self.class_decl_named(self.meta.name.nested_class(name), options, body)
    }

    /// Add a nested class. `name` must be directly enclosed by this class.
    pub fn class_decl_named<F>(
        &mut self,
        name: ClassName,
        options: ClassOptions,
        body: F,
    ) -> Result<ClassSpec>
    where
        F: FnOnce(&mut ClassSpecBuilder) -> Result<()>,
    {
        if name.enclosing_class_name().as_ref() != Some(&self.meta.name) {
            return Err(Error::invalid_argument(format!(
                "'{name}' is not nested directly inside '{}'",
                self.meta.name
            )));
        }

        let nested = class_spec(name, options, body)?;
        self.spec.types.push(nested.type_spec.clone());
        Ok(nested)
    }

    /// Add a method.
    pub fn method_decl<F>(&mut self, name: &str, options: MethodOptions, body: F) -> Result<MethodSpec>
    where
        F: FnOnce(&mut CodeBuilder<'_>, &MethodMeta) -> Result<()>,
    {
        let method = method_spec(name, options, body)?;
        self.spec.methods.push(method.clone());
        Ok(method)
    }

    /// Add a constructor.
    pub fn constructor_decl<F>(&mut self, options: ConstructorOptions, body: F) -> Result<MethodSpec>
    where
        F: FnOnce(&mut CodeBuilder<'_>, &ConstructorMeta) -> Result<()>,
    {
        let constructor = constructor_spec(options, body)?;
        self.spec.methods.push(constructor.clone());
        Ok(constructor)
    }

    /// Add an instance initializer block.
    pub fn initializer_block_decl<F>(&mut self, body: F) -> Result<()>
    where
        F: FnOnce(&mut CodeBuilder<'_>) -> Result<()>,
    {
        let mut code = CodeBlockBuilder::new();
        build_body(&mut code, body)?;
        self.spec.initializer_blocks.push(code.build());
        Ok(())
    }

    /// Add a `static` initializer block.
    pub fn static_initializer_block_decl<F>(&mut self, body: F) -> Result<()>
    where
        F: FnOnce(&mut CodeBuilder<'_>) -> Result<()>,
    {
        let mut code = CodeBlockBuilder::new();
        build_body(&mut code, body)?;
        self.spec.static_blocks.push(code.build());
        Ok(())
    }
}
