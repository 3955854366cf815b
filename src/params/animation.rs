//! Epicycle animation and plot rendering configuration.

use glam::DVec2;

/// RGB colour
pub type Rgb = [u8; 3];

/// Epicycle animation canvas and frame output
#[derive(Debug, Clone)]
pub struct AnimationConfig {
    /// Canvas width (pixels)
    pub width: u32,

    /// Canvas height (pixels)
    pub height: u32,

    /// Constant angle added to every epicycle (radians)
    pub rotation: f64,

    /// Output directory for PNG frames
    pub output_dir: String,

    /// Background colour
    pub background: Rgb,

    /// Circle outline colour (dim)
    pub circle_color: Rgb,

    /// Radius link colour (bright)
    pub link_color: Rgb,

    /// Traced path colour
    pub path_color: Rgb,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            rotation: 0.0,
            output_dir: "frames".to_string(),
            background: [0, 0, 0],
            circle_color: [100, 100, 100],
            link_color: [200, 200, 200],
            path_color: [0, 255, 255],
        }
    }
}

impl AnimationConfig {
    /// Validate configuration (canvas must be non-empty)
    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!(
                "Canvas must be non-empty, got {}x{}",
                self.width, self.height
            ));
        }
        if !self.rotation.is_finite() {
            return Err("Rotation must be finite".to_string());
        }
        Ok(())
    }

    /// Canvas centre in pixel coordinates, where the first epicycle is anchored
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width as f64 / 2.0, self.height as f64 / 2.0)
    }

    /// Path of the PNG for frame `index`
    pub fn frame_path(&self, index: usize) -> String {
        format!("{}/frame_{:05}.png", self.output_dir, index)
    }
}

/// Reconstruction plot layout
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Image width (pixels)
    pub width: u32,

    /// Image height (pixels)
    pub height: u32,

    /// Blank border around the plot area (pixels)
    pub margin: u32,

    /// Draw the dashed per-frequency sinusoids
    pub show_components: bool,

    pub background: Rgb,
    pub axis_color: Rgb,
    pub sample_color: Rgb,
    pub curve_color: Rgb,
    pub component_color: Rgb,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
            margin: 40,
            show_components: true,
            background: [255, 255, 255],
            axis_color: [160, 160, 160],
            sample_color: [214, 39, 40],
            curve_color: [31, 119, 180],
            component_color: [180, 180, 220],
        }
    }
}

impl PlotConfig {
    /// Validate configuration (plot area must remain after margins)
    pub fn validate(&self) -> Result<(), String> {
        if self.width <= 2 * self.margin || self.height <= 2 * self.margin {
            return Err(format!(
                "Margin {} leaves no plot area in {}x{}",
                self.margin, self.width, self.height
            ));
        }
        Ok(())
    }
}
