//! Additional assertions for [`spectral`]

use aro_capz_tests::{ValidationError, ValidationErrorKind};
use spectral::{AssertionFailure, Spec};
use std::fmt::Debug;

/// Additional assertions for the outcome of a YAML validation
pub trait ValidationAssertions {
    fn fails_with(&mut self, expected_kind: ValidationErrorKind);
}

impl<'s> ValidationAssertions for Spec<'s, Result<(), ValidationError>> {
    /// Asserts that the validation failed with an error of the given kind.
    ///
    /// ```rust
    /// assert_that(&validate_yaml_file("missing.yaml"))
    ///     .fails_with(ValidationErrorKind::FileNotAccessible);
    /// ```
    fn fails_with(&mut self, expected_kind: ValidationErrorKind) {
        let subject = self.subject;
        let actual = match subject {
            Err(error) if error.kind() == expected_kind => return,
            Err(error) => format!("{:?} ({})", error.kind(), error),
            Ok(()) => String::from("a successful validation"),
        };

        AssertionFailure::from_spec(self)
            .with_expected(format!("an error of kind {:?}", expected_kind))
            .with_actual(actual)
            .fail();
    }
}

/// Additional assertions for results of the orchestration helpers
pub trait ErrorMessageAssertions {
    fn fails_containing(&mut self, expected_message: &str);
}

impl<'s, T: Debug> ErrorMessageAssertions for Spec<'s, anyhow::Result<T>> {
    /// Asserts that the result is an error whose message chain contains the
    /// given text.
    ///
    /// ```rust
    /// assert_that(&check_prerequisites(&["missing-tool"]))
    ///     .fails_containing("missing-tool");
    /// ```
    fn fails_containing(&mut self, expected_message: &str) {
        let subject = self.subject;
        let actual = match subject {
            Err(error) if format!("{:#}", error).contains(expected_message) => return,
            Err(error) => format!("the error [{:#}]", error),
            Ok(value) => format!("the value [{:?}]", value),
        };

        AssertionFailure::from_spec(self)
            .with_expected(format!("an error containing [{}]", expected_message))
            .with_actual(actual)
            .fail();
    }
}
