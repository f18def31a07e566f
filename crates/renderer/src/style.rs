//! Variable-name to color-mapping policy resolution.
//!
//! The display conventions for WRF-Hydro domain variables are a fixed
//! lookup: continuous ramps for physical quantities, discrete boundary
//! classes for coded grids (D8 flow direction, land-use categories,
//! stream order). Anything unrecognized falls back to Blues.

use crate::colormap::{self, Color, ColorRamp};

/// How a variable's values map to colors.
pub enum StylePolicy {
    /// Continuous ramp over the rendered value range.
    Gradient(&'static ColorRamp),
    /// Discrete colors over explicit value boundaries.
    Classified(Classified),
}

impl StylePolicy {
    /// Color for one sample given the render range `[vmin, vmax]`.
    ///
    /// Gradient policies normalize into the range; classified policies
    /// ignore it and bin on their own boundaries, as a boundary norm does.
    pub fn color_for(&self, value: f32, vmin: f32, vmax: f32) -> Color {
        match self {
            StylePolicy::Gradient(ramp) => {
                let range = vmax - vmin;
                // Degenerate range renders as a flat field of the low color
                let range = if !range.is_finite() || range.abs() < 1e-3 {
                    1.0
                } else {
                    range
                };
                ramp.sample((value - vmin) / range)
            }
            StylePolicy::Classified(classes) => classes.classify(f64::from(value)),
        }
    }

    pub fn is_classified(&self) -> bool {
        matches!(self, StylePolicy::Classified(_))
    }
}

/// Discrete color classification over ordered boundaries.
///
/// `boundaries` partitions the value range into `boundaries.len() - 1`
/// bins. When there are more colors than bins the bin indices are
/// stretched across the color list, skipping intermediate colors, the
/// way matplotlib's `BoundaryNorm` distributes a larger colormap.
pub struct Classified {
    colors: Vec<Color>,
    boundaries: Vec<f64>,
}

impl Classified {
    pub fn new(colors: Vec<Color>, boundaries: Vec<f64>) -> Self {
        debug_assert!(boundaries.windows(2).all(|w| w[0] < w[1]));
        debug_assert!(colors.len() + 1 >= boundaries.len());
        Self { colors, boundaries }
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn boundaries(&self) -> &[f64] {
        &self.boundaries
    }

    /// Color for one value. Values below the first boundary take the
    /// first color; values at or above the last boundary take the last.
    pub fn classify(&self, value: f64) -> Color {
        let first = self.boundaries[0];
        let last = *self.boundaries.last().unwrap();
        if value < first {
            return self.colors[0];
        }
        if value >= last {
            return *self.colors.last().unwrap();
        }

        let n_bins = self.boundaries.len() - 1;
        let mut bin = n_bins - 1;
        for i in 0..n_bins {
            if value >= self.boundaries[i] && value < self.boundaries[i + 1] {
                bin = i;
                break;
            }
        }

        let index = if self.colors.len() > n_bins && n_bins > 1 {
            bin * (self.colors.len() - 1) / (n_bins - 1)
        } else {
            bin
        };
        self.colors[index.min(self.colors.len() - 1)]
    }
}

/// Resolve the display policy for a variable name (case-insensitive).
///
/// Pure lookup over the fixed convention table; never fails. Unmatched
/// names resolve to the default continuous Blues gradient.
pub fn resolve_style(variable_name: &str) -> StylePolicy {
    match variable_name.to_lowercase().as_str() {
        "latitude" | "longitude" | "channelgrid" | "frxst_pts" | "xlat_m" | "xlong_m"
        | "clat" | "clong" | "cosalpha" | "e" | "f" | "landmask" | "sinalpha" | "xlat"
        | "xlong" | "albedo12m" => StylePolicy::Gradient(&colormap::BINARY),

        "topography" | "hgt_m" | "hgt" => StylePolicy::Gradient(&colormap::BRBG),

        "lai12m" | "lai" | "greenfrac" => StylePolicy::Gradient(&colormap::GREENS),

        "flowdirection" => StylePolicy::Classified(flow_direction_classes()),

        "landuse" | "lu_index" | "ivgtyp" => StylePolicy::Classified(land_use_classes()),

        "streamorder" => StylePolicy::Classified(stream_order_classes()),

        "impervfrac" | "imperv" => StylePolicy::Gradient(&colormap::REDS),

        _ => StylePolicy::Gradient(&colormap::BLUES),
    }
}

/// D8 flow-direction codes: powers of two for the eight directions plus
/// 255 as the sink code, one color per code bin.
fn flow_direction_classes() -> Classified {
    let colors = [
        "#ff0000", "#5959a6", "#806c93", "#a65959", "#a68659", "#a6a659", "#93a659",
        "#669966", "#999999",
    ]
    .iter()
    .map(|h| Color::from_hex(h))
    .collect();
    let boundaries = vec![0.0, 1.0, 2.0, 4.0, 8.0, 16.0, 32.0, 64.0, 128.0, 255.0];
    Classified::new(colors, boundaries)
}

/// USGS/MODIS land-use categories. The boundary list jumps 5 to 7 and
/// 20 to 22 because those class codes are absent in the classification.
fn land_use_classes() -> Classified {
    let colors = [
        "#ed0000", "#dbd83d", "#aa7028", "#fbf65d", "#e2e2c1", "#ccba7c", "#dcca8f",
        "#fde9aa", "#68aa63", "#85c724", "#38814e", "#1c6330", "#b5c98e", "#476ba0",
        "#70a3ba", "#bad8ea", "#b2ada3", "#c9c977", "#a58c30", "#d1ddf9",
    ]
    .iter()
    .map(|h| Color::from_hex(h))
    .collect();
    let boundaries = vec![
        1.0, 2.0, 3.0, 4.0, 5.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0,
        16.0, 17.0, 18.0, 19.0, 20.0, 22.0, 23.0,
    ];
    Classified::new(colors, boundaries)
}

/// Strahler stream order. Boundaries are center-biased so integer orders
/// fall mid-bin; five colors over four bins stretches past yellow.
fn stream_order_classes() -> Classified {
    let colors = vec![
        Color::named("blue"),
        Color::named("green"),
        Color::named("red"),
        Color::named("yellow"),
        Color::from_hex("#000000"),
    ];
    let boundaries = vec![0.9, 1.9, 2.9, 3.9, 4.0];
    Classified::new(colors, boundaries)
}
