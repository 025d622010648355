//! Runtime-tunable builder policy.
//!
//! `MAX_DEPTH` (see [`crate::node::MAX_DEPTH`]) stays a true compile-time
//! constant. Whether a second self-parented descriptor is fatal is made a
//! runtime knob instead of being hard-coded (see DESIGN.md).
use serde::{Deserialize, Serialize};

/// Builder policy, loaded from defaults and optionally overridden from the
/// process environment (feature `config`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// If `true` (the default), a second self-parented
    /// descriptor makes `build` fail with `ErrorKind::AlreadySet`. If
    /// `false`, it is logged at `warn` and dropped instead.
    pub duplicate_root_folder_is_fatal: bool,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        BuilderConfig {
            duplicate_root_folder_is_fatal: true,
        }
    }
}

#[cfg(feature = "config")]
impl BuilderConfig {
    /// Loads configuration from the compiled-in default, overridden by
    /// `PFF_`-prefixed environment variables (e.g. `PFF_DUPLICATE_ROOT_FOLDER_IS_FATAL`).
    pub fn from_env() -> std::result::Result<Self, figment::Error> {
        use figment::{providers::Env, providers::Serialized, Figment};

        Figment::from(Serialized::defaults(BuilderConfig::default()))
            .merge(Env::prefixed("PFF_"))
            .extract()
    }
}
