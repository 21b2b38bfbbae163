use clap::Parser;
use std::path::PathBuf;

/// Rasa - a keyboard-driven music library browser for your terminal 🎵
#[derive(Parser, Debug)]
#[command(name = "rasa", version, about)]
pub struct Args {
    /// Library root (overrides music_directory from config.toml)
    #[arg(long, short = 'd')]
    pub music_dir: Option<PathBuf>,

    /// Generate default config.toml to stdout
    #[arg(long)]
    pub generate_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let args = Args::parse_from(["rasa", "--music-dir", "/srv/music"]);
        assert_eq!(args.music_dir, Some(PathBuf::from("/srv/music")));
        assert!(!args.generate_config);

        let args = Args::parse_from(["rasa", "--generate-config"]);
        assert!(args.generate_config);
        assert!(args.music_dir.is_none());
    }
}
