//! Site layout configuration.

use std::path::PathBuf;

use clap::Args;

/// Directory layout flags shared by site commands.
#[derive(Args, Debug, Clone)]
pub(crate) struct SiteArgs {
    /// Directory of static files copied as-is
    #[arg(long, env = "MDSITE_STATIC", default_value = "./static")]
    static_dir: PathBuf,

    /// Output directory; its contents are replaced on every build
    #[arg(long, env = "MDSITE_PUBLIC", default_value = "./public")]
    public_dir: PathBuf,

    /// Directory of Markdown pages
    #[arg(long, env = "MDSITE_CONTENT", default_value = "./content")]
    content_dir: PathBuf,

    /// HTML template with `{{ Title }}` and `{{ Content }}` placeholders
    #[arg(long, env = "MDSITE_TEMPLATE", default_value = "./template.html")]
    template: PathBuf,
}

/// Resolved site layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SiteConfig {
    pub static_dir: PathBuf,
    pub public_dir: PathBuf,
    pub content_dir: PathBuf,
    pub template: PathBuf,
}

impl From<SiteArgs> for SiteConfig {
    fn from(args: SiteArgs) -> Self {
        Self {
            static_dir: args.static_dir,
            public_dir: args.public_dir,
            content_dir: args.content_dir,
            template: args.template,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            static_dir: PathBuf::from("./static"),
            public_dir: PathBuf::from("./public"),
            content_dir: PathBuf::from("./content"),
            template: PathBuf::from("./template.html"),
        }
    }
}

impl SiteConfig {
    /// Place every directory under `root`, keeping the default names
    #[cfg(test)]
    pub(crate) fn rooted_at(root: &std::path::Path) -> Self {
        let defaults = Self::default();
        Self {
            static_dir: root.join(defaults.static_dir),
            public_dir: root.join(defaults.public_dir),
            content_dir: root.join(defaults.content_dir),
            template: root.join(defaults.template),
        }
    }
}
