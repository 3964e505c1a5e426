//! Balance-at-birth computation.

use jataka_math::normalize_360;

use crate::systems::DashaSystemConfig;

/// Where the birth longitude fell and how much of the first period
/// remains.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthBalance {
    /// Index of the zodiac slice (nakshatra or sign) holding the longitude.
    pub slice_index: u8,
    /// Index into the ruler cycle of the first mahadasha's ruler.
    pub ruler_index: u8,
    /// Fraction of the slice already traversed, [0, 1).
    pub elapsed_fraction: f64,
    /// Remaining years of the first mahadasha.
    pub balance_years: f64,
}

/// Locate a birth longitude in the system's slices and compute the
/// remaining balance of the starting ruler's period.
pub fn birth_balance(longitude_deg: f64, config: &DashaSystemConfig) -> BirthBalance {
    let lon = normalize_360(longitude_deg);
    let width = config.slice_width_deg();
    let slice_index = ((lon / width).floor() as u8).min(config.slice_count - 1);

    let position_in_slice = lon - slice_index as f64 * width;
    let elapsed_fraction = position_in_slice / width;

    let ruler_index = config.slice_to_ruler[slice_index as usize];
    let ruler_years = config.years[ruler_index as usize];

    BirthBalance {
        slice_index,
        ruler_index,
        elapsed_fraction,
        balance_years: ruler_years * (1.0 - elapsed_fraction),
    }
}
