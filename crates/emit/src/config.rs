use std::{env, path::PathBuf};

/// Generator configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    /// Compiled client build, containing `assets/*.css` (default: "build/client")
    pub build_dir: PathBuf,
    /// Where page artifacts are written (default: the build directory)
    pub out_dir: PathBuf,
    /// Public base URL of the build assets, always ending in `/` (default: "/")
    pub asset_base: String,
}

impl GenerateConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ERRPAGES_BUILD_DIR` - Compiled client build (default: "build/client")
    /// - `ERRPAGES_OUT_DIR` - Output directory (default: build directory)
    /// - `ERRPAGES_ASSET_BASE` - Asset base URL, falls back to `VITE_CDN_URL` (default: "/")
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable source.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let build_dir = non_empty(var("ERRPAGES_BUILD_DIR"))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("build/client"));
        let out_dir = non_empty(var("ERRPAGES_OUT_DIR"))
            .map(PathBuf::from)
            .unwrap_or_else(|| build_dir.clone());
        let asset_base = non_empty(var("ERRPAGES_ASSET_BASE"))
            .or_else(|| non_empty(var("VITE_CDN_URL")))
            .unwrap_or_else(|| "/".to_string());

        Self {
            build_dir,
            out_dir,
            asset_base: normalize_base(asset_base),
        }
    }
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn normalize_base(mut base: String) -> String {
    if !base.ends_with('/') {
        base.push('/');
    }
    base
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> GenerateConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        GenerateConfig::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_default_values() {
        let config = load(&[]);
        assert_eq!(config.build_dir, PathBuf::from("build/client"));
        assert_eq!(config.out_dir, PathBuf::from("build/client"));
        assert_eq!(config.asset_base, "/");
    }

    #[test]
    fn test_out_dir_override() {
        let config = load(&[("ERRPAGES_BUILD_DIR", "dist"), ("ERRPAGES_OUT_DIR", "public")]);
        assert_eq!(config.build_dir, PathBuf::from("dist"));
        assert_eq!(config.out_dir, PathBuf::from("public"));
    }

    #[test]
    fn test_asset_base_falls_back_to_cdn_url() {
        let config = load(&[("VITE_CDN_URL", "https://cdn.example.com/errors")]);
        assert_eq!(config.asset_base, "https://cdn.example.com/errors/");

        let config = load(&[
            ("ERRPAGES_ASSET_BASE", "/static/"),
            ("VITE_CDN_URL", "https://cdn.example.com"),
        ]);
        assert_eq!(config.asset_base, "/static/");
    }

    #[test]
    fn test_empty_values_use_defaults() {
        let config = load(&[("ERRPAGES_BUILD_DIR", ""), ("ERRPAGES_ASSET_BASE", "")]);
        assert_eq!(config.build_dir, PathBuf::from("build/client"));
        assert_eq!(config.asset_base, "/");
    }

    #[test]
    fn test_empty_asset_base_defers_to_cdn_url() {
        let config = load(&[
            ("ERRPAGES_ASSET_BASE", ""),
            ("VITE_CDN_URL", "https://cdn.example.com/"),
        ]);
        assert_eq!(config.asset_base, "https://cdn.example.com/");
    }
}
