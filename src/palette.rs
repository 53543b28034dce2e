//! Cohort colors
//!
//! Hues are spread evenly around the color wheel at full saturation, so any
//! color count from 1 to 12 stays distinguishable.

/// Hue (degrees) of cohort `index` out of `count`
pub fn cohort_hue(index: usize, count: usize) -> u32 {
    if count == 0 {
        return 0;
    }
    (360.0 * index as f64 / count as f64).round() as u32
}

/// CSS color strings, one per cohort, in color-index order
pub fn cohort_colors(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("hsl({} 100% 60%)", cohort_hue(i, count)))
        .collect()
}
