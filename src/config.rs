//! Configuration of the test suite
//!
//! Every setting is read from an environment variable and falls back to a
//! default, so the suite runs without any variable being set.

use serde::Serialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::OnceLock;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Prefix of the generated repository directory
pub const REPO_DIR_PREFIX: &str = "cluster-api-installer-aro";

pub const DEFAULT_REPO_URL: &str = "https://github.com/RadekCap/cluster-api-installer.git";
pub const DEFAULT_REPO_BRANCH: &str = "ARO-ASO";
pub const DEFAULT_KIND_CLUSTER_NAME: &str = "capz-stage";
pub const DEFAULT_CLUSTER_NAME: &str = "test-cluster";
pub const DEFAULT_RESOURCE_GROUP: &str = "test-rg";
pub const DEFAULT_OPENSHIFT_VERSION: &str = "4.18";
pub const DEFAULT_REGION: &str = "uksouth";
pub const DEFAULT_ENVIRONMENT: &str = "stage";
pub const DEFAULT_CLUSTERCTL_BIN: &str = "./bin/clusterctl";
pub const DEFAULT_SCRIPTS_PATH: &str = "./scripts";
pub const DEFAULT_GEN_SCRIPT_PATH: &str = "./doc/aro-hcp-scripts/aro-hcp-gen.sh";

static REPO_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Returns the directory into which the installer repository is cloned.
///
/// The directory is resolved on the first call and the same path is
/// returned for the rest of the process, also to concurrent first callers.
/// `ARO_REPO_DIR` takes precedence, otherwise a fresh path in the temporary
/// directory is generated with [`allocate_repo_dir`].
pub fn repo_dir() -> &'static Path {
    REPO_DIR.get_or_init(|| {
        let dir = match non_empty(env_lookup("ARO_REPO_DIR")) {
            Some(dir) => PathBuf::from(dir),
            None => allocate_repo_dir(&env::temp_dir()),
        };
        info!(path = %dir.display(), "Repository directory resolved");
        dir
    })
}

/// Allocates a unique, not yet existing directory path below `temp_root`.
///
/// The directory is created to reserve the name and removed again right
/// away because `git clone` refuses to clone into an existing directory.
/// If the directory cannot be created then a path derived from the process
/// ID is returned instead.
pub fn allocate_repo_dir(temp_root: &Path) -> PathBuf {
    let dir = temp_root.join(format!("{}-{}", REPO_DIR_PREFIX, Uuid::new_v4()));

    if let Err(error) = fs::create_dir(&dir) {
        let fallback = temp_root.join(format!("{}-{}", REPO_DIR_PREFIX, process::id()));
        warn!(
            %error,
            fallback = %fallback.display(),
            "Temporary repository directory could not be created"
        );
        return fallback;
    }

    if let Err(error) = fs::remove_dir(&dir) {
        warn!(%error, path = %dir.display(), "Temporary repository directory could not be removed");
    }

    dir
}

/// Returns the value of the environment variable `key` or `default` if the
/// variable is unset or empty.
pub fn resolve(key: &str, default: &str) -> String {
    resolve_with(&env_lookup, key, default)
}

/// Same as [`resolve`] but reads the variables through `lookup`.
pub fn resolve_with<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let value = non_empty(lookup(key)).unwrap_or_else(|| String::from(default));
    debug!(key, value = value.as_str(), "Setting resolved");
    value
}

fn env_lookup(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

/// Settings of an ARO-CAPZ test run
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestConfig {
    pub repo_url: String,
    pub repo_branch: String,
    pub repo_dir: PathBuf,

    pub kind_cluster_name: String,
    pub cluster_name: String,
    pub resource_group: String,
    pub openshift_version: String,
    pub region: String,
    pub azure_subscription: String,
    pub environment: String,
    pub user: String,

    pub clusterctl_bin_path: String,
    pub scripts_path: String,
    pub gen_script_path: String,
}

impl TestConfig {
    /// Creates a configuration from the process environment.
    pub fn from_env() -> TestConfig {
        TestConfig::build(&env_lookup, repo_dir().to_path_buf())
    }

    /// Creates a configuration from the variables provided by `lookup`.
    ///
    /// `ARO_REPO_DIR` is taken from `lookup` as well; if it is not provided
    /// then the process-wide [`repo_dir`] is used.
    pub fn from_lookup<F>(lookup: F) -> TestConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        let repo_dir = match non_empty(lookup("ARO_REPO_DIR")) {
            Some(dir) => PathBuf::from(dir),
            None => repo_dir().to_path_buf(),
        };
        TestConfig::build(&lookup, repo_dir)
    }

    fn build<F>(lookup: &F, repo_dir: PathBuf) -> TestConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        let resolve = |key: &str, default: &str| resolve_with(lookup, key, default);

        TestConfig {
            repo_url: resolve("ARO_REPO_URL", DEFAULT_REPO_URL),
            repo_branch: resolve("ARO_REPO_BRANCH", DEFAULT_REPO_BRANCH),
            repo_dir,

            kind_cluster_name: resolve("KIND_CLUSTER_NAME", DEFAULT_KIND_CLUSTER_NAME),
            cluster_name: resolve("CLUSTER_NAME", DEFAULT_CLUSTER_NAME),
            resource_group: resolve("RESOURCE_GROUP", DEFAULT_RESOURCE_GROUP),
            openshift_version: resolve("OPENSHIFT_VERSION", DEFAULT_OPENSHIFT_VERSION),
            region: resolve("REGION", DEFAULT_REGION),
            azure_subscription: lookup("AZURE_SUBSCRIPTION_NAME").unwrap_or_default(),
            environment: resolve("ENV", DEFAULT_ENVIRONMENT),
            user: resolve("USER", ""),

            clusterctl_bin_path: resolve("CLUSTERCTL_BIN", DEFAULT_CLUSTERCTL_BIN),
            scripts_path: resolve("SCRIPTS_PATH", DEFAULT_SCRIPTS_PATH),
            gen_script_path: resolve("GEN_SCRIPT_PATH", DEFAULT_GEN_SCRIPT_PATH),
        }
    }

    /// Returns the name of the directory containing the generated
    /// infrastructure files, e.g. `test-cluster-stage`.
    pub fn output_dir_name(&self) -> String {
        format!("{}-{}", self.cluster_name, self.environment)
    }

    /// Returns the path of the generated infrastructure files within the
    /// cloned repository.
    pub fn output_dir(&self) -> PathBuf {
        self.repo_dir.join(self.output_dir_name())
    }

    /// Returns the kubectl context of the kind management cluster.
    pub fn kind_context(&self) -> String {
        format!("kind-{}", self.kind_cluster_name)
    }

    /// Renders the configuration as YAML, e.g. for the test log.
    pub fn to_yaml(&self) -> anyhow::Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
