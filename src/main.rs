//! Scholar Folio - an academic profile page in the terminal
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use folio_app::config;
use folio_core::prelude::*;
use folio_tui::RunOptions;

/// Scholar Folio - an academic profile page in the terminal
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Browse an academic profile, its research and publications", long_about = None)]
struct Args {
    /// Directory for config.toml and the stored theme (default: platform config dir)
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Do not read or write the stored theme
    #[arg(long)]
    ephemeral: bool,

    /// Forget the stored theme before starting
    #[arg(long)]
    reset_theme: bool,

    /// Open a section on startup (research, experience, news, publications, lab, about, funder, donate)
    #[arg(long, value_name = "KEY")]
    section: Option<String>,

    /// Pretend the OS color scheme is dark or light
    #[arg(long, value_enum)]
    ambient: Option<AmbientArg>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AmbientArg {
    Dark,
    Light,
}

impl Args {
    fn into_options(self, default_dir: impl FnOnce() -> Result<PathBuf>) -> Result<RunOptions> {
        let config_dir = match self.config_dir {
            Some(dir) => dir,
            None => default_dir()?,
        };
        Ok(RunOptions {
            config_dir,
            ephemeral: self.ephemeral,
            reset_theme: self.reset_theme,
            initial_section: self.section,
            ambient: self.ambient.map(|a| a == AmbientArg::Dark),
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Log to file, since the TUI owns stdout
    folio_core::logging::init()?;

    let options = args.into_options(config::default_config_dir)?;
    info!("Config directory: {}", options.config_dir.display());

    let result = folio_tui::run(options).await;
    if let Err(ref e) = result {
        if e.is_fatal() {
            error!("Terminal failure: {:?}", e);
        } else if e.is_recoverable() {
            warn!("Exited after a recoverable error: {}", e);
        } else {
            error!("Application error: {:?}", e);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(argv: &[&str]) -> RunOptions {
        Args::try_parse_from(argv)
            .unwrap()
            .into_options(|| Ok(PathBuf::from("/default")))
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let opts = options(&["folio"]);
        assert_eq!(opts.config_dir, PathBuf::from("/default"));
        assert!(!opts.ephemeral);
        assert!(!opts.reset_theme);
        assert_eq!(opts.initial_section, None);
        assert_eq!(opts.ambient, None);
    }

    #[test]
    fn test_all_flags() {
        let opts = options(&[
            "folio",
            "--config-dir",
            "/tmp/folio",
            "--ephemeral",
            "--reset-theme",
            "--section",
            "publications",
            "--ambient",
            "dark",
        ]);
        assert_eq!(opts.config_dir, PathBuf::from("/tmp/folio"));
        assert!(opts.ephemeral);
        assert!(opts.reset_theme);
        assert_eq!(opts.initial_section.as_deref(), Some("publications"));
        assert_eq!(opts.ambient, Some(true));
    }

    #[test]
    fn test_light_ambient() {
        assert_eq!(options(&["folio", "--ambient", "light"]).ambient, Some(false));
    }

    #[test]
    fn test_invalid_ambient_rejected() {
        assert!(Args::try_parse_from(["folio", "--ambient", "sepia"]).is_err());
    }

    #[test]
    fn test_missing_default_dir_is_an_error() {
        let args = Args::try_parse_from(["folio"]).unwrap();
        assert!(args.into_options(|| Err(Error::NoConfigDir)).is_err());
    }

    #[test]
    fn test_explicit_dir_skips_default_lookup() {
        let args = Args::try_parse_from(["folio", "--config-dir", "/x"]).unwrap();
        let opts = args.into_options(|| Err(Error::NoConfigDir)).unwrap();
        assert_eq!(opts.config_dir, PathBuf::from("/x"));
    }
}
