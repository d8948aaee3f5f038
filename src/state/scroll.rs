//! Scroll progress indicator and back-to-top visibility.
//!
//! All inputs are read from the window once per frame and reduced to a
//! `ScrollView` the controller writes back to the DOM.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Raw geometry sampled from the window.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub viewport_height: f64,
}

/// What the controller renders for one set of metrics.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollView {
    /// Progress bar width in percent, within `[0, 100]`.
    pub percent: f64,
    pub show_back_to_top: bool,
}

/// Scrolled fraction of the document as a percentage.
///
/// Returns 0 when the document fits in a single viewport. Overscroll (negative
/// offsets or rubber-banding past the end) is clamped into `[0, 100]`.
#[must_use]
pub fn progress_percent(metrics: ScrollMetrics) -> f64 {
    let scrollable = metrics.scroll_height - metrics.viewport_height;
    if scrollable.is_nan() || scrollable <= 0.0 || !metrics.scroll_top.is_finite() {
        return 0.0;
    }
    (metrics.scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Back-to-top is shown strictly past the threshold.
#[must_use]
pub fn back_to_top_visible(scroll_top: f64, threshold_px: f64) -> bool {
    scroll_top > threshold_px
}

#[must_use]
pub fn view(metrics: ScrollMetrics, threshold_px: f64) -> ScrollView {
    ScrollView {
        percent: progress_percent(metrics),
        show_back_to_top: back_to_top_visible(metrics.scroll_top, threshold_px),
    }
}

/// CSS `width` value for the progress bar.
#[must_use]
pub fn width_style(percent: f64) -> String {
    format!("{percent}%")
}
