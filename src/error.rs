use thiserror::Error;

/// Errors surfaced by the demos at runtime.
///
/// Build-time failures (a type with no matching overload, a visitor missing an
/// arm) never reach this type: they are compile errors.
#[derive(Error, Debug)]
pub enum DemoError {
    #[error("bad variant access: requested {expected}, but the active alternative is {actual}")]
    BadVariantAccess {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("invalid value '{value}' for {name}: {reason}")]
    InvalidArgument {
        name: String,
        value: String,
        reason: String,
    },

    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("{left} and {right} hold different contents after identical inserts")]
    ContentMismatch { left: String, right: String },
}

impl DemoError {
    pub fn bad_variant_access(expected: &'static str, actual: &'static str) -> Self {
        Self::BadVariantAccess { expected, actual }
    }

    pub fn invalid_argument(
        name: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn content_mismatch(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self::ContentMismatch {
            left: left.into(),
            right: right.into(),
        }
    }
}
