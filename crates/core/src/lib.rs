mod config;
mod exif_reader;
mod planner;
mod rename;
mod uniquify;

pub use config::{app_paths, load_config, AppConfig, AppPaths};
pub use exif_reader::{read_tags, ExifTags, TagSource};
pub use planner::{
    try_rename, RenameOptions, TimestampFormatError, EXIF_TIME_FORMAT, FILE_NAME_FORMAT,
};
pub use rename::rename;
pub use uniquify::uniquify;
