//! Import computation for Java files.

use std::collections::{BTreeSet, HashSet};

use indexmap::{IndexMap, IndexSet};

use crate::ClassName;

/// Decides which referenced classes are imported and how every class name is
/// spelled in the output.
///
/// Built from the classes collected during a first emission pass. Each simple
/// name maps to at most one top-level class; later classes with a clashing
/// simple name stay fully qualified.
///
/// # Example
///
/// ```
/// use javadsl_poet::{ClassName, ImportPlan};
///
/// let list = ClassName::new("java.util", "List");
/// let awt_list = ClassName::new("java.awt", "List");
/// let plan = ImportPlan::builder("com.example", [list.clone(), awt_list.clone()]).build();
///
/// assert_eq!(plan.resolve(&list), "List");
/// assert_eq!(plan.resolve(&awt_list), "java.awt.List");
/// assert_eq!(plan.imports().collect::<Vec<_>>(), ["java.util.List"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportPlan {
    /// Simple name -> top-level class referenced by that simple name
    by_simple_name: IndexMap<String, ClassName>,
    /// Canonical names to emit as import statements (sorted for deterministic output)
    imports: BTreeSet<String>,
}

impl ImportPlan {
    /// Start planning imports for a file in `package`.
    pub fn builder(
        package: impl Into<String>,
        referenced: impl IntoIterator<Item = ClassName>,
    ) -> ImportPlanBuilder {
        ImportPlanBuilder {
            package: package.into(),
            referenced: referenced.into_iter().collect(),
            declared: None,
            reserved: HashSet::new(),
            skip_java_lang: false,
        }
    }

    /// How `name` is written in the file.
    pub fn resolve(&self, name: &ClassName) -> String {
        let top = name.top_level_class_name();
        match self.by_simple_name.get(top.simple_name()) {
            Some(imported) if *imported == top => name.simple_names().join("."),
            _ => name.canonical_name(),
        }
    }

    /// Import statements, in sorted order.
    pub fn imports(&self) -> impl Iterator<Item = &str> {
        self.imports.iter().map(String::as_str)
    }

    /// Check if a class is listed as an import.
    pub fn is_imported(&self, name: &ClassName) -> bool {
        self.imports.contains(&name.top_level_class_name().canonical_name())
    }

    /// Check if there are no import statements.
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    /// Get the number of import statements.
    pub fn len(&self) -> usize {
        self.imports.len()
    }
}

/// Builder for [`ImportPlan`].
#[derive(Debug, Clone)]
pub struct ImportPlanBuilder {
    package: String,
    referenced: IndexSet<ClassName>,
    declared: Option<ClassName>,
    reserved: HashSet<String>,
    skip_java_lang: bool,
}

impl ImportPlanBuilder {
    /// The top-level type declared by the file; it is always referenced by
    /// simple name and never imported.
    pub fn declared_type(mut self, name: ClassName, nested: impl IntoIterator<Item = String>) -> Self {
        self.reserved.extend(nested);
        self.declared = Some(name);
        self
    }

    /// Reference `java.lang` classes by simple name without import statements.
    pub fn skip_java_lang_imports(mut self, skip: bool) -> Self {
        self.skip_java_lang = skip;
        self
    }

    /// Compute the plan.
    pub fn build(self) -> ImportPlan {
        let mut plan = ImportPlan::default();

        if let Some(declared) = &self.declared {
            plan.by_simple_name
                .insert(declared.simple_name().to_string(), declared.clone());
        }

        // Classes of the file's own package shadow java.lang by simple name.
        let package_names: HashSet<&str> = self
            .referenced
            .iter()
            .filter(|name| name.package_name() == self.package)
            .filter_map(|name| name.simple_names().first().map(String::as_str))
            .collect();

        for name in &self.referenced {
            let top = name.top_level_class_name();
            let simple = top.simple_name().to_string();

            if self.reserved.contains(&simple) || plan.by_simple_name.contains_key(&simple) {
                continue;
            }

            let implicit = top.package_name() == self.package
                || top.package_name().is_empty()
                || (self.skip_java_lang
                    && top.package_name() == "java.lang"
                    && !package_names.contains(simple.as_str()));
            if !implicit {
                plan.imports.insert(top.canonical_name());
            }
            plan.by_simple_name.insert(simple, top);
        }

        plan
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn string() -> ClassName {
        ClassName::new("java.lang", "String")
    }

    #[test]
    fn test_imports_are_sorted() {
        let plan = ImportPlan::builder(
            "a.b",
            [
                ClassName::new("java.net", "URL"),
                ClassName::new("java.io", "File"),
            ],
        )
        .build();
        assert_eq!(
            plan.imports().collect::<Vec<_>>(),
            ["java.io.File", "java.net.URL"]
        );
        assert_eq!(plan.len(), 2);
    }

    #[test]
    fn test_same_package_is_not_imported() {
        let sibling = ClassName::new("a.b", "Sibling");
        let plan = ImportPlan::builder("a.b", [sibling.clone()]).build();
        assert!(plan.is_empty());
        assert_eq!(plan.resolve(&sibling), "Sibling");
    }

    #[test]
    fn test_java_lang_imports() {
        let kept = ImportPlan::builder("a.b", [string()]).build();
        assert!(kept.is_imported(&string()));
        assert_eq!(kept.resolve(&string()), "String");

        let skipped = ImportPlan::builder("a.b", [string()])
            .skip_java_lang_imports(true)
            .build();
        assert!(skipped.is_empty());
        assert_eq!(skipped.resolve(&string()), "String");
    }

    #[test]
    fn test_same_package_name_forces_java_lang_import() {
        let java_override = ClassName::new("java.lang", "Override");
        let local_override = ClassName::new("a.b", "Override");

        let plan = ImportPlan::builder("a.b", [java_override.clone(), local_override.clone()])
            .skip_java_lang_imports(true)
            .build();
        assert_eq!(plan.imports().collect::<Vec<_>>(), ["java.lang.Override"]);
        assert_eq!(plan.resolve(&java_override), "Override");
        assert_eq!(plan.resolve(&local_override), "a.b.Override");

        let plan = ImportPlan::builder("a.b", [local_override.clone(), java_override.clone()])
            .skip_java_lang_imports(true)
            .build();
        assert!(plan.is_empty());
        assert_eq!(plan.resolve(&local_override), "Override");
        assert_eq!(plan.resolve(&java_override), "java.lang.Override");
    }

    #[test]
    fn test_nested_class_imports_top_level() {
        let entry = ClassName::get("java.util", "Map", &["Entry"]);
        let plan = ImportPlan::builder("a.b", [entry.clone()]).build();
        assert_eq!(plan.imports().collect::<Vec<_>>(), ["java.util.Map"]);
        assert_eq!(plan.resolve(&entry), "Map.Entry");
    }

    #[test]
    fn test_declared_type_wins_simple_name() {
        let declared = ClassName::new("a.b", "String");
        let plan = ImportPlan::builder("a.b", [string(), declared.clone()])
            .declared_type(declared.clone(), Vec::new())
            .build();
        assert!(plan.is_empty());
        assert_eq!(plan.resolve(&declared), "String");
        assert_eq!(plan.resolve(&string()), "java.lang.String");
    }

    #[test]
    fn test_nested_type_names_are_reserved() {
        let declared = ClassName::new("a.b", "Outer");
        let entry = ClassName::new("x.y", "Entry");
        let plan = ImportPlan::builder("a.b", [entry.clone()])
            .declared_type(declared, ["Entry".to_string()])
            .build();
        assert!(plan.is_empty());
        assert_eq!(plan.resolve(&entry), "x.y.Entry");
    }
}
