//! PNG import and export for grids of RGBA pixels

use std::path::Path;

use image::RgbaImage;
use log::debug;

use crate::io::error::{GridError, Result};
use crate::spatial::grid::Grid;

/// One RGBA pixel
pub type Rgba = [u8; 4];

/// Load an image file as a grid of RGBA pixels
///
/// Any format the `image` crate was built with is accepted; pixels are
/// converted to 8-bit RGBA.
///
/// # Errors
///
/// Returns [`GridError::ImageLoad`] if the file cannot be opened or decoded,
/// and [`GridError::InvalidDimension`] if the image has no pixels
pub fn load_rgba_grid(path: &Path) -> Result<Grid<Rgba>> {
    let image = image::open(path)
        .map_err(|e| GridError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?
        .to_rgba8();

    let (width, height) = image.dimensions();
    debug!("Loaded {}: {width}x{height}", path.display());

    let pixels: Vec<Rgba> = image.pixels().map(|pixel| pixel.0).collect();
    if pixels.is_empty() {
        return Err(GridError::InvalidDimension {
            width: width as usize,
            height: height as usize,
        });
    }
    Grid::from_cells(width as usize, pixels)
}

/// Save a grid of RGBA pixels, creating parent directories as needed
///
/// The format is chosen from the path's extension.
///
/// # Errors
///
/// Returns an error if:
/// - The grid is too large for the image format's `u32` dimensions
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_rgba_grid(grid: &Grid<Rgba>, path: &Path) -> Result<()> {
    let (width, height) = grid.dimensions();
    let too_large = || GridError::InvalidDimension { width, height };
    let image_width = u32::try_from(width).map_err(|_overflow| too_large())?;
    let image_height = u32::try_from(height).map_err(|_overflow| too_large())?;

    let raw: Vec<u8> = grid.iter().flatten().copied().collect();
    let image = RgbaImage::from_raw(image_width, image_height, raw).ok_or_else(too_large)?;

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| GridError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image.save(path).map_err(|e| GridError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })?;

    debug!("Exported {}: {width}x{height}", path.display());
    Ok(())
}
