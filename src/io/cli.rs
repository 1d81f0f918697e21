//! Command-line interface applying grid operations to PNG files

use crate::io::configuration::{
    DEFAULT_INDENT, DEFAULT_SEPARATOR, INPUT_EXTENSION, OUTPUT_SUFFIX,
};
use crate::io::error::{GridError, Result, invalid_argument};
use crate::io::image::{Rgba, export_rgba_grid, load_rgba_grid};
use crate::io::progress::ProgressManager;
use crate::io::text::TextLayout;
use crate::spatial::{CellIndex, Grid};
use clap::{Parser, Subcommand};
use log::{debug, info};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "cellgrid")]
#[command(
    author,
    version,
    about = "Crop, slice and paste PNG images as grids of pixels"
)]
/// Command-line arguments for the grid tool
pub struct Cli {
    /// Input PNG file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Operation to apply to every input
    #[command(subcommand)]
    pub command: Command,

    /// Interpret coordinates and row/column numbers as 1-based
    #[arg(long, global = true)]
    pub one_based: bool,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long, global = true)]
    pub no_skip: bool,
}

/// Grid operations available from the command line
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Keep the closed rectangle between two corners
    Crop {
        /// Top left corner as `x,y`
        #[arg(long, value_parser = parse_coordinate)]
        from: CellIndex,
        /// Bottom right corner as `x,y`; defaults to the image's last pixel
        #[arg(long, value_parser = parse_coordinate)]
        to: Option<CellIndex>,
    },
    /// Keep a single row of pixels
    Row {
        /// Row number
        index: usize,
    },
    /// Keep a single column of pixels
    Column {
        /// Column number
        index: usize,
    },
    /// Copy another image on top, clipped to the target's bounds
    Paste {
        /// Image to copy in
        overlay: PathBuf,
        /// Position of the overlay's top left pixel as `x,y`
        #[arg(long, value_parser = parse_coordinate)]
        at: CellIndex,
    },
    /// Print pixels as hexadecimal RGBA values
    Show {
        /// Separator between pixels of a row
        #[arg(long, default_value = DEFAULT_SEPARATOR)]
        separator: String,
        /// Spaces prefixed to every row
        #[arg(long, default_value_t = DEFAULT_INDENT)]
        indent: usize,
    },
}

impl Command {
    /// Whether the command writes an output image
    pub const fn writes_output(&self) -> bool {
        !matches!(self, Self::Show { .. })
    }
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Convert a coordinate from the command line into a zero-based one
    pub const fn resolve_coordinate(&self, cell: CellIndex) -> CellIndex {
        if self.one_based {
            CellIndex::from_one_based(cell.x, cell.y)
        } else {
            cell
        }
    }

    /// Convert a row or column number from the command line into a zero-based one
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidArgument`] for `0` when numbers are 1-based
    pub fn resolve_line(&self, index: usize) -> Result<usize> {
        if self.one_based {
            index
                .checked_sub(1)
                .ok_or_else(|| invalid_argument("index", &index, &"1-based numbers start at 1"))
        } else {
            Ok(index)
        }
    }
}

/// Parse an `x,y` coordinate pair
///
/// # Errors
///
/// Returns [`GridError::InvalidArgument`] unless the text is two integers
/// separated by a comma
pub fn parse_coordinate(text: &str) -> Result<CellIndex> {
    let invalid = || invalid_argument("coordinate", &text, &"expected two integers as x,y");
    let (x, y) = text.split_once(',').ok_or_else(invalid)?;
    let x = x.trim().parse::<isize>().map_err(|_parse_error| invalid())?;
    let y = y.trim().parse::<isize>().map_err(|_parse_error| invalid())?;
    Ok(CellIndex::new(x, y))
}

/// Orchestrates batch processing of PNG files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
    overlay: Option<Grid<Rgba>>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
            overlay: None,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, image loading, the grid
    /// operation or image export fails
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            info!("Nothing to process in {}", self.cli.target.display());
            return Ok(());
        }

        if let Command::Paste { ref overlay, .. } = self.cli.command {
            self.overlay = Some(load_rgba_grid(overlay)?);
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            self.process_file(file)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    /// Apply the configured command to one grid
    ///
    /// Returns `None` for commands that do not produce an image.
    ///
    /// # Errors
    ///
    /// Returns the grid operation's error, for example when a crop corner or
    /// row number lies outside the image
    pub fn apply(&self, grid: &Grid<Rgba>) -> Result<Option<Grid<Rgba>>> {
        match self.cli.command {
            Command::Crop { from, to } => {
                let from = self.cli.resolve_coordinate(from);
                let result = match to {
                    Some(to) => grid.sub_grid(from, self.cli.resolve_coordinate(to))?,
                    None => grid.sub_grid_from(from)?,
                };
                Ok(Some(result))
            }
            Command::Row { index } => Ok(Some(grid.row(self.cli.resolve_line(index)?)?)),
            Command::Column { index } => Ok(Some(grid.column(self.cli.resolve_line(index)?)?)),
            Command::Paste { ref overlay, at } => {
                let loaded;
                let source = match self.overlay {
                    Some(ref source) => source,
                    None => {
                        loaded = load_rgba_grid(overlay)?;
                        &loaded
                    }
                };
                let mut result = grid.clone();
                let written = result.copy_from(source, self.cli.resolve_coordinate(at));
                debug!("Pasted {written} of {} pixels", source.len());
                Ok(Some(result))
            }
            Command::Show { .. } => Ok(None),
        }
    }

    /// Text layout requested by the `show` command
    pub fn text_layout(&self) -> TextLayout {
        match self.cli.command {
            Command::Show {
                ref separator,
                indent,
            } => TextLayout {
                separator: separator.clone(),
                indent,
                ..TextLayout::default()
            },
            _ => TextLayout::default(),
        }
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if has_input_extension(target) {
                Ok(if self.should_process_file(target) {
                    vec![target.clone()]
                } else {
                    vec![]
                })
            } else {
                Err(invalid_argument(
                    "target",
                    &target.display(),
                    &"target file must be a PNG image",
                ))
            }
        } else if target.is_dir() {
            let entries = std::fs::read_dir(target).map_err(|e| GridError::FileSystem {
                path: target.clone(),
                operation: "read directory",
                source: e,
            })?;

            let mut files = Vec::new();
            for entry in entries {
                let path = entry?.path();
                if has_input_extension(&path)
                    && !is_output_file(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_argument(
                "target",
                &target.display(),
                &"target must be a PNG file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.command.writes_output() || !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            info!("Skipping: {} (output exists)", input_path.display());
            false
        } else {
            true
        }
    }

    // Allow print for the `show` command's output
    #[allow(clippy::print_stdout)]
    fn process_file(&mut self, input_path: &Path) -> Result<()> {
        if let Some(ref pm) = self.progress_manager {
            pm.start_file(input_path);
        }

        let grid = load_rgba_grid(input_path)?;
        match self.apply(&grid)? {
            Some(result) => {
                let output_path = Self::get_output_path(input_path);
                export_rgba_grid(&result, &output_path)?;
                info!(
                    "Wrote {} ({}x{})",
                    output_path.display(),
                    result.width(),
                    result.height()
                );
            }
            None => {
                let hex = grid.transform(|_, &[red, green, blue, alpha]| {
                    format!("{red:02x}{green:02x}{blue:02x}{alpha:02x}")
                });
                println!("{}:", input_path.display());
                println!("{}", hex.describe(&self.text_layout()));
            }
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file();
        }

        Ok(())
    }

    /// Output path for an input file, `<stem>_cell.<ext>` beside it
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let extension = input_path.extension().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            extension.to_string_lossy()
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

fn has_input_extension(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some(INPUT_EXTENSION)
}

fn is_output_file(path: &Path) -> bool {
    path.file_stem()
        .is_some_and(|stem| stem.to_string_lossy().ends_with(OUTPUT_SUFFIX))
}
