//! Defaults for text layout and command-line processing

// Text layout defaults used by `Display` and `TextLayout::default`
/// Separator placed between elements of a row
pub const DEFAULT_SEPARATOR: &str = ", ";
/// Whether elements are right-aligned to the widest element
pub const DEFAULT_BALANCE_WIDTHS: bool = true;
/// Number of spaces prefixed to every row
pub const DEFAULT_INDENT: usize = 0;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_cell";
/// Only PNG inputs are considered when scanning a directory
pub const INPUT_EXTENSION: &str = "png";

// Progress bar display settings
/// File count above which a progress bar is shown
pub const MIN_FILES_FOR_PROGRESS: usize = 2;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Log filter applied when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "warn";
