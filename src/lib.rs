//! Support library for the ARO-CAPZ end-to-end integration tests
//!
//! The test suite provisions an OpenShift cluster on Azure via Cluster API
//! by driving external tools (`kind`, `clusterctl`, `kubectl` and the
//! generation scripts). This crate contains the pieces the test cases share:
//! the environment driven [`TestConfig`], the classification of
//! `kubectl apply` output, and the validation of YAML manifests before they
//! are handed to the cluster.

pub mod command;
pub mod config;
pub mod generated;
pub mod kubectl;
pub mod result;
pub mod validation;

pub use config::{repo_dir, resolve, TestConfig};
pub use kubectl::is_apply_success;
pub use result::TestResult;
pub use validation::{validate_yaml_file, ValidationError, ValidationErrorKind};
