// Application state module
// Everything a request handler reads, built once before serving starts

use crate::fixture::Fixture;
use crate::resolver::AssetRoot;

use super::types::Config;

/// SPA build directory with its bundle sub-root
#[derive(Debug, Clone)]
pub struct BuildRoot {
    pub root: AssetRoot,
    /// `<build>/static`, absent when the build has no bundle directory
    pub bundle: Option<AssetRoot>,
}

impl BuildRoot {
    pub fn new(root: AssetRoot, bundle_dir: &str) -> Self {
        let bundle = root.child(bundle_dir);
        Self { root, bundle }
    }
}

/// Application state, shared read-only across connections
#[derive(Debug)]
pub struct AppState {
    pub config: Config,
    pub fixture: Fixture,
    /// Active SPA build, `None` when no candidate directory exists
    pub build: Option<BuildRoot>,
    /// Images and other files under `/api/static/`
    pub api_static: Option<AssetRoot>,
}

impl AppState {
    /// Assemble state from explicitly chosen parts
    pub fn new(
        config: Config,
        fixture: Fixture,
        build: Option<BuildRoot>,
        api_static: Option<AssetRoot>,
    ) -> Self {
        Self {
            config,
            fixture,
            build,
            api_static,
        }
    }

    /// Probe the configured directories once and assemble state
    pub fn from_config(config: Config, fixture: Fixture) -> Self {
        let build = crate::resolver::select_root(&config.assets.build_dirs)
            .map(|root| BuildRoot::new(root, &config.assets.spa_static_prefix));
        let api_static = AssetRoot::open(&config.assets.static_dir).ok();
        Self::new(config, fixture, build, api_static)
    }
}
