use anyhow::Result;
use clap::{ArgAction, Parser};
use log::LevelFilter;
use photo_datestamp_core::{load_config, read_tags, try_rename, RenameOptions};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "photo-datestamp")]
#[command(about = "EXIFの撮影日時でファイル名を一括リネームします")]
struct Cli {
    /// リネーム対象のファイル
    files: Vec<PathBuf>,
    /// 実際にはリネームせず、予定だけ表示します
    #[arg(short = 'n', long = "not-really")]
    not_really: bool,
    /// 繰り返すほどログが詳しくなります (-vvv まで)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

const LOG_LEVELS: &[LevelFilter] = &[
    LevelFilter::Error,
    LevelFilter::Warn,
    LevelFilter::Info,
    LevelFilter::Debug,
];

fn log_level(verbose: u8) -> LevelFilter {
    LOG_LEVELS[usize::from(verbose).min(LOG_LEVELS.len() - 1)]
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(log_level(cli.verbose))
        .init();

    let config = load_config()?;
    let options = RenameOptions {
        dry_run: cli.not_really,
        file_name_format: config.file_name_format,
        separator: config.separator,
    };

    for path in &cli.files {
        let tags = read_tags(path)?;
        try_rename(path, &tags, &options)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{log_level, Cli};
    use clap::Parser;
    use log::LevelFilter;
    use std::path::PathBuf;

    #[test]
    fn verbosity_maps_onto_the_four_levels() {
        assert_eq!(log_level(0), LevelFilter::Error);
        assert_eq!(log_level(1), LevelFilter::Warn);
        assert_eq!(log_level(2), LevelFilter::Info);
        assert_eq!(log_level(3), LevelFilter::Debug);
    }

    #[test]
    fn verbosity_saturates_at_debug() {
        assert_eq!(log_level(6), log_level(3));
    }

    #[test]
    fn flags_and_files_parse() {
        let cli = Cli::try_parse_from(["photo-datestamp", "a.jpg", "b.jpg", "-n", "-vv"])
            .expect("args should parse");
        assert_eq!(cli.files, vec![PathBuf::from("a.jpg"), PathBuf::from("b.jpg")]);
        assert!(cli.not_really);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn zero_files_is_accepted() {
        let cli = Cli::try_parse_from(["photo-datestamp"]).expect("empty args should parse");
        assert!(cli.files.is_empty());
        assert!(!cli.not_really);
        assert_eq!(cli.verbose, 0);
    }
}
