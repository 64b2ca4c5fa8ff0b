use derive_builder::Builder;
use std::path::PathBuf;

pub const DEFAULT_SOURCE_SUFFIX: &str = ".go";
pub const DEFAULT_MANIFEST_NAME: &str = "owners.txt";

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct WalkOptions {
    pub root: PathBuf,
    #[builder(default)]
    pub follow_links: bool,
    /// Directory base names whose subtree is not descended into.
    #[builder(default)]
    pub exclude_dirs: Vec<String>,
}

impl WalkOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            follow_links: false,
            exclude_dirs: vec![],
        }
    }
}

/// How visited file names are classified.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct MatchRules {
    #[builder(default = "DEFAULT_SOURCE_SUFFIX.to_string()")]
    pub source_suffix: String,
    #[builder(default = "DEFAULT_MANIFEST_NAME.to_string()")]
    pub manifest_name: String,
}

impl Default for MatchRules {
    fn default() -> Self {
        Self {
            source_suffix: DEFAULT_SOURCE_SUFFIX.to_string(),
            manifest_name: DEFAULT_MANIFEST_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    pub walk: WalkOptions,
    #[builder(default)]
    pub rules: MatchRules,
    #[builder(default)]
    pub output_path: Option<PathBuf>,
}

impl Config {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            walk: WalkOptions::new(root),
            rules: MatchRules::default(),
            output_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_match_go_layout() {
        let rules = MatchRulesBuilder::default().build().unwrap();
        assert_eq!(rules.source_suffix, ".go");
        assert_eq!(rules.manifest_name, "owners.txt");

        let walk = WalkOptionsBuilder::default().root("repo").build().unwrap();
        let config = ConfigBuilder::default().walk(walk).build().unwrap();
        assert_eq!(config.walk.root, PathBuf::from("repo"));
        assert!(config.walk.exclude_dirs.is_empty());
        assert!(!config.walk.follow_links);
        assert_eq!(config.rules, MatchRules::default());
        assert!(config.output_path.is_none());
    }

    #[test]
    fn walk_options_require_root() {
        assert!(WalkOptionsBuilder::default().build().is_err());
    }
}
