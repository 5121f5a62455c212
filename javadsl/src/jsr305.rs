//! JSR 305 nullness and concurrency annotations.

use std::sync::LazyLock;

use javadsl_poet::{AnnotationSpec, ClassName};

use crate::annotations;

pub static NULLABLE: LazyLock<ClassName> =
    LazyLock::new(|| ClassName::new("javax.annotation", "Nullable"));
pub static NONNULL: LazyLock<ClassName> =
    LazyLock::new(|| ClassName::new("javax.annotation", "Nonnull"));
pub static CHECK_RETURN_VALUE: LazyLock<ClassName> =
    LazyLock::new(|| ClassName::new("javax.annotation", "CheckReturnValue"));
pub static PARAMETERS_ARE_NONNULL_BY_DEFAULT: LazyLock<ClassName> =
    LazyLock::new(|| ClassName::new("javax.annotation", "ParametersAreNonnullByDefault"));
pub static IMMUTABLE: LazyLock<ClassName> =
    LazyLock::new(|| ClassName::new("javax.annotation.concurrent", "Immutable"));

/// `@Nullable`
pub fn nullable() -> AnnotationSpec {
    annotations::of(NULLABLE.clone())
}

/// `@Nonnull`
pub fn nonnull() -> AnnotationSpec {
    annotations::of(NONNULL.clone())
}

/// `@CheckReturnValue`
pub fn check_return_value() -> AnnotationSpec {
    annotations::of(CHECK_RETURN_VALUE.clone())
}

/// `@ParametersAreNonnullByDefault`
pub fn parameters_are_nonnull_by_default() -> AnnotationSpec {
    annotations::of(PARAMETERS_ARE_NONNULL_BY_DEFAULT.clone())
}

/// `@Immutable`
pub fn immutable() -> AnnotationSpec {
    annotations::of(IMMUTABLE.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotations() {
        assert_eq!(nullable().to_string(), "@javax.annotation.Nullable");
        assert_eq!(nonnull().to_string(), "@javax.annotation.Nonnull");
        assert_eq!(check_return_value().to_string(), "@javax.annotation.CheckReturnValue");
        assert_eq!(
            parameters_are_nonnull_by_default().to_string(),
            "@javax.annotation.ParametersAreNonnullByDefault"
        );
        assert_eq!(immutable().to_string(), "@javax.annotation.concurrent.Immutable");
    }
}
