//! Geometry for the scroll-progress path: a wavy run of dots spanning the
//! scrollable page, eaten one by one as the reader scrolls.

use glam::Vec2;

use std::f32::consts::PI;

/// Path shape constants. The path starts below the hero fold and ends just
/// above the footer.
#[derive(Debug, Clone, Copy)]
pub struct PathConfig {
    /// Vertical distance between consecutive dots.
    pub dot_spacing: f32,
    /// Horizontal half-width of the sine wave.
    pub wave_amplitude: f32,
    /// Center line of the wave, from the left viewport edge.
    pub base_x: f32,
    /// Full sine periods over the whole path.
    pub wave_periods: f32,
    /// Fraction of the viewport height at which the path starts.
    pub hero_fraction: f32,
    /// Gap kept above the page bottom.
    pub end_margin: f32,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            dot_spacing: 35.0,
            wave_amplitude: 120.0,
            base_x: 50.0,
            wave_periods: 6.0,
            hero_fraction: 0.6,
            end_margin: 100.0,
        }
    }
}

/// One point of the precomputed marker trail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathDot {
    pub index: usize,
    pub pos: Vec2,
}

/// Generate the full dot sequence for the current page geometry.
///
/// Pure function of (viewport height, page height, config); regeneration
/// replaces the previous sequence wholesale rather than patching it. A page
/// shorter than the hero fold produces no dots at all.
pub fn generate(config: &PathConfig, viewport_height: f32, page_height: f32) -> Vec<PathDot> {
    let start_y = viewport_height * config.hero_fraction;
    let end_y = page_height - config.end_margin;
    let span = end_y - start_y;
    if span <= 0.0 {
        return Vec::new();
    }

    let count = (span / config.dot_spacing) as usize;
    (0..count)
        .map(|i| {
            let progress = i as f32 / count as f32;
            let wave = (progress * PI * config.wave_periods).sin() * config.wave_amplitude;
            PathDot {
                index: i,
                pos: Vec2::new(config.base_x + wave, start_y + i as f32 * config.dot_spacing),
            }
        })
        .collect()
}

/// Number of dots hidden at the given scroll fraction; dots with an index
/// strictly below this count are consumed.
pub fn consumed_count(fraction: f32, dot_count: usize) -> usize {
    let fraction = fraction.clamp(0.0, 1.0);
    ((fraction * dot_count as f32) as usize).min(dot_count)
}

/// Dot the marker currently sits on, `None` while no path exists.
pub fn marker_index(consumed: usize, dot_count: usize) -> Option<usize> {
    if dot_count == 0 {
        None
    } else {
        Some(consumed.min(dot_count - 1))
    }
}

/// Marker heading in degrees: the angle of the segment toward the next dot,
/// offset by 90 so the glyph's mouth leads.
pub fn marker_rotation(current: Vec2, next: Vec2) -> f32 {
    let d = next - current;
    d.y.atan2(d.x).to_degrees() + 90.0
}
