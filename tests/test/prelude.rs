pub use super::assertions::*;
pub use super::fixtures::ManifestDir;

pub use aro_capz_tests::{
    is_apply_success, validate_yaml_file, TestConfig, ValidationError, ValidationErrorKind,
};
pub use indoc::indoc;
pub use rstest::rstest;
pub use spectral::prelude::*;
