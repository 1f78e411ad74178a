//! Interpolation kernels.
//!
//! Each kernel maps a distance to a weight. Distances are taken as absolute
//! values and every kernel returns 0 at or beyond its support radius.
//!
//! | Kernel | Support | Shape |
//! |--------|---------|-------|
//! | Linear | 1 | `t` |
//! | Cubic | 1 | `t^2 (3 - 2t)` (smoothstep) |
//! | Mitchell-Netravali | 2 | two-piece cubic, default |
//! | BiCubic | 2 | Catmull-Rom family cubic |
//! | Lanczos | 3 | windowed sinc |

use std::f64::consts::PI;

/// The closed set of interpolation kernels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Kernel {
    Linear,
    Cubic,
    /// Balances sharpness and ringing.
    #[default]
    MitchellNetravali,
    BiCubic,
    Lanczos,
}

impl Kernel {
    pub const ALL: [Kernel; 5] = [
        Kernel::Linear,
        Kernel::Cubic,
        Kernel::MitchellNetravali,
        Kernel::BiCubic,
        Kernel::Lanczos,
    ];

    /// Distance at which the weight becomes zero.
    pub fn support(&self) -> f64 {
        match self {
            Kernel::Linear | Kernel::Cubic => 1.0,
            Kernel::MitchellNetravali | Kernel::BiCubic => 2.0,
            Kernel::Lanczos => 3.0,
        }
    }

    /// Evaluate the kernel at distance `t`.
    #[inline]
    pub fn weight(&self, t: f64) -> f64 {
        let t = t.abs();
        if t >= self.support() {
            return 0.0;
        }

        match self {
            Kernel::Linear => t,
            Kernel::Cubic => t * t * (3.0 - 2.0 * t),
            Kernel::MitchellNetravali => mitchell_netravali(t),
            Kernel::BiCubic => bicubic(t),
            Kernel::Lanczos => lanczos3(t),
        }
    }

    /// Parse a kernel name (case-insensitive).
    ///
    /// ```
    /// use timview_core::Kernel;
    ///
    /// assert_eq!(Kernel::from_str("Lanczos"), Some(Kernel::Lanczos));
    /// assert_eq!(Kernel::from_str("mitchell-netravali"), Some(Kernel::MitchellNetravali));
    /// assert_eq!(Kernel::from_str("box"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "linear" => Some(Kernel::Linear),
            "cubic" | "smoothstep" => Some(Kernel::Cubic),
            "mitchell" | "mitchell-netravali" | "mitchellnetravali" => {
                Some(Kernel::MitchellNetravali)
            }
            "bicubic" => Some(Kernel::BiCubic),
            "lanczos" | "lanczos3" => Some(Kernel::Lanczos),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Kernel::Linear => "linear",
            Kernel::Cubic => "cubic",
            Kernel::MitchellNetravali => "mitchell",
            Kernel::BiCubic => "bicubic",
            Kernel::Lanczos => "lanczos",
        }
    }
}

impl std::fmt::Display for Kernel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// t is non-negative and below 2.
fn mitchell_netravali(t: f64) -> f64 {
    if t <= 1.0 {
        (7.0 * t * t * t - 12.0 * t * t + 16.0 / 3.0) / 6.0
    } else {
        (-7.0 / 3.0 * t * t * t + 12.0 * t * t - 20.0 * t + 32.0 / 3.0) / 6.0
    }
}

fn bicubic(t: f64) -> f64 {
    if t < 1.0 {
        (1.5 * t - 2.5) * t * t + 1.0
    } else {
        ((-0.5 * t + 2.5) * t - 4.0) * t + 2.0
    }
}

fn lanczos3(t: f64) -> f64 {
    if t == 0.0 {
        return 1.0;
    }
    (PI * t).sin() * (PI * t / 3.0).sin() / (PI * PI * t * t / 3.0)
}
