//! Continuous color ramps for gridded variables.
//!
//! Ramps are compiled-in lookup tables of evenly-spaced sRGB control
//! points taken from the ColorBrewer/matplotlib originals and sampled
//! with linear interpolation.

/// Color value in RGBA format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn transparent() -> Self {
        Self { r: 0, g: 0, b: 0, a: 0 }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA`. Malformed components read as 0,
    /// matching lenient CSS-style parsing.
    pub fn from_hex(s: &str) -> Self {
        let s = s.trim_start_matches('#');
        let byte = |range: &str| u8::from_str_radix(range, 16).unwrap_or(0);
        match s.len() {
            6 => Self::new(byte(&s[0..2]), byte(&s[2..4]), byte(&s[4..6]), 255),
            8 => Self::new(
                byte(&s[0..2]),
                byte(&s[2..4]),
                byte(&s[4..6]),
                byte(&s[6..8]),
            ),
            _ => Self::new(0, 0, 0, 255),
        }
    }

    /// A small set of named colors used by the discrete style tables.
    pub fn named(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "transparent" => Self::transparent(),
            "black" => Self::new(0, 0, 0, 255),
            "white" => Self::new(255, 255, 255, 255),
            "red" => Self::new(255, 0, 0, 255),
            "green" => Self::new(0, 255, 0, 255),
            "blue" => Self::new(0, 0, 255, 255),
            "yellow" => Self::new(255, 255, 0, 255),
            "cyan" => Self::new(0, 255, 255, 255),
            "magenta" => Self::new(255, 0, 255, 255),
            "orange" => Self::new(255, 165, 0, 255),
            "gray" | "grey" => Self::new(128, 128, 128, 255),
            "lightgray" | "lightgrey" => Self::new(211, 211, 211, 255),
            _ => Self::new(0, 0, 0, 255),
        }
    }

    pub fn to_rgba(self) -> image::Rgba<u8> {
        image::Rgba([self.r, self.g, self.b, self.a])
    }
}

/// A continuous color ramp defined by evenly-spaced sRGB control points.
pub struct ColorRamp {
    name: &'static str,
    /// Control points as `[r, g, b]` fractions, evenly spaced over t=0..1.
    points: &'static [[f32; 3]],
}

impl ColorRamp {
    /// Sample the ramp at parameter `t` (clamped to `[0, 1]`).
    pub fn sample(&self, t: f32) -> Color {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        let n = self.points.len();
        if n == 1 {
            let p = self.points[0];
            return fraction_color(p);
        }
        let scaled = t * (n - 1) as f32;
        let lo = (scaled as usize).min(n - 2);
        let frac = scaled - lo as f32;
        let a = self.points[lo];
        let b = self.points[lo + 1];
        fraction_color([
            a[0] + (b[0] - a[0]) * frac,
            a[1] + (b[1] - a[1]) * frac,
            a[2] + (b[2] - a[2]) * frac,
        ])
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

fn fraction_color(p: [f32; 3]) -> Color {
    Color::new(
        (p[0] * 255.0).round() as u8,
        (p[1] * 255.0).round() as u8,
        (p[2] * 255.0).round() as u8,
        255,
    )
}

/// Grayscale white-to-black, matplotlib `binary`. Used for masks, angles,
/// and coordinate grids where structure matters more than magnitude.
pub static BINARY: ColorRamp = ColorRamp {
    name: "binary",
    points: &[[1.0, 1.0, 1.0], [0.0, 0.0, 0.0]],
};

/// ColorBrewer BrBG diverging brown-to-teal, for topography.
pub static BRBG: ColorRamp = ColorRamp {
    name: "BrBG",
    points: &[
        [0.329, 0.188, 0.020],
        [0.549, 0.318, 0.039],
        [0.749, 0.506, 0.176],
        [0.875, 0.761, 0.490],
        [0.965, 0.910, 0.765],
        [0.961, 0.961, 0.961],
        [0.780, 0.918, 0.898],
        [0.502, 0.804, 0.757],
        [0.208, 0.592, 0.561],
        [0.004, 0.400, 0.369],
        [0.000, 0.235, 0.188],
    ],
};

/// ColorBrewer sequential Greens, for vegetation fraction and LAI.
pub static GREENS: ColorRamp = ColorRamp {
    name: "Greens",
    points: &[
        [0.969, 0.988, 0.961],
        [0.898, 0.961, 0.878],
        [0.780, 0.914, 0.753],
        [0.631, 0.851, 0.608],
        [0.455, 0.769, 0.463],
        [0.255, 0.671, 0.365],
        [0.137, 0.545, 0.271],
        [0.000, 0.427, 0.173],
        [0.000, 0.267, 0.106],
    ],
};

/// ColorBrewer sequential Blues, the default for unrecognized variables.
pub static BLUES: ColorRamp = ColorRamp {
    name: "Blues",
    points: &[
        [0.969, 0.984, 1.000],
        [0.871, 0.922, 0.969],
        [0.776, 0.859, 0.937],
        [0.620, 0.792, 0.882],
        [0.420, 0.682, 0.839],
        [0.259, 0.573, 0.776],
        [0.129, 0.443, 0.710],
        [0.031, 0.318, 0.612],
        [0.031, 0.188, 0.420],
    ],
};

/// ColorBrewer sequential Reds, for imperviousness and weight grids.
pub static REDS: ColorRamp = ColorRamp {
    name: "Reds",
    points: &[
        [1.000, 0.961, 0.941],
        [0.996, 0.878, 0.824],
        [0.988, 0.733, 0.631],
        [0.988, 0.573, 0.447],
        [0.984, 0.416, 0.290],
        [0.937, 0.231, 0.173],
        [0.796, 0.094, 0.114],
        [0.647, 0.059, 0.082],
        [0.404, 0.000, 0.051],
    ],
};

/// Perceptually uniform viridis (matplotlib), for routing-table scatter.
pub static VIRIDIS: ColorRamp = ColorRamp {
    name: "viridis",
    points: &[
        [0.267, 0.004, 0.329],
        [0.282, 0.040, 0.363],
        [0.293, 0.075, 0.393],
        [0.298, 0.110, 0.420],
        [0.297, 0.147, 0.443],
        [0.290, 0.184, 0.460],
        [0.278, 0.220, 0.473],
        [0.263, 0.256, 0.482],
        [0.246, 0.290, 0.487],
        [0.228, 0.322, 0.489],
        [0.210, 0.354, 0.488],
        [0.192, 0.384, 0.484],
        [0.174, 0.413, 0.478],
        [0.156, 0.441, 0.470],
        [0.140, 0.468, 0.460],
        [0.127, 0.494, 0.448],
        [0.120, 0.519, 0.433],
        [0.122, 0.543, 0.415],
        [0.137, 0.566, 0.393],
        [0.163, 0.588, 0.368],
        [0.200, 0.609, 0.340],
        [0.246, 0.629, 0.308],
        [0.301, 0.647, 0.274],
        [0.363, 0.664, 0.237],
        [0.432, 0.679, 0.199],
        [0.505, 0.691, 0.162],
        [0.580, 0.700, 0.128],
        [0.655, 0.707, 0.101],
        [0.731, 0.710, 0.092],
        [0.804, 0.710, 0.105],
        [0.872, 0.706, 0.150],
        [0.993, 0.906, 0.144],
    ],
};

/// Matplotlib `terrain` resampled to even spacing, for channel elevation.
pub static TERRAIN: ColorRamp = ColorRamp {
    name: "terrain",
    points: &[
        [0.200, 0.200, 0.600],
        [0.133, 0.333, 0.733],
        [0.067, 0.467, 0.867],
        [0.000, 0.600, 1.000],
        [0.000, 0.700, 0.700],
        [0.000, 0.800, 0.400],
        [0.200, 0.840, 0.440],
        [0.400, 0.880, 0.480],
        [0.600, 0.920, 0.520],
        [0.800, 0.960, 0.560],
        [1.000, 1.000, 0.600],
        [0.900, 0.872, 0.546],
        [0.800, 0.744, 0.492],
        [0.700, 0.616, 0.438],
        [0.600, 0.488, 0.384],
        [0.500, 0.360, 0.330],
        [0.600, 0.488, 0.464],
        [0.700, 0.616, 0.598],
        [0.800, 0.744, 0.732],
        [0.900, 0.872, 0.866],
        [1.000, 1.000, 1.000],
    ],
};
