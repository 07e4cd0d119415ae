use plotters::style::RGBColor;
use serde::{Deserialize, Serialize};

/// Image color maps
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Colormap {
    #[default]
    Viridis,
    Plasma,
    Inferno,
    Magma,
    Cividis,
    Turbo,
    Greys,
    Blues,
    RedBlue,
    Spectral,
}
impl Colormap {
    pub fn gradient(&self) -> colorous::Gradient {
        use Colormap::*;
        match self {
            Viridis => colorous::VIRIDIS,
            Plasma => colorous::PLASMA,
            Inferno => colorous::INFERNO,
            Magma => colorous::MAGMA,
            Cividis => colorous::CIVIDIS,
            Turbo => colorous::TURBO,
            Greys => colorous::GREYS,
            Blues => colorous::BLUES,
            RedBlue => colorous::RED_BLUE,
            Spectral => colorous::SPECTRAL,
        }
    }
    /// Color at `u`, clamped to [0,1]
    pub fn rgb(&self, u: f64) -> RGBColor {
        let c = self.gradient().eval_continuous(u.clamp(0f64, 1f64));
        RGBColor(c.r, c.g, c.b)
    }
}
