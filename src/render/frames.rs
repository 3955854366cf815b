//! Rasterize epicycle animation frames to PNG.

use std::fs;

use super::animation::{EpicycleAnimation, Frame};
use super::canvas::Canvas;
use crate::epicycle::EpicycleComponent;
use crate::error::RenderError;
use crate::params::AnimationConfig;

/// Draw one frame: dim circles, bright radius links and the traced path
pub fn render_frame(frame: &Frame, path: &[glam::DVec2], config: &AnimationConfig) -> Canvas {
    let mut canvas = Canvas::new(config.width, config.height, config.background);

    for link in &frame.links {
        canvas.circle(link.center, link.radius, config.circle_color);
        canvas.line(link.center, link.tip, config.link_color);
    }
    canvas.polyline(path, config.path_color);

    canvas
}

/// Play one full cycle and write every frame as `frame_NNNNN.png` under
/// `config.output_dir`. Returns the number of frames written.
pub fn write_frames(
    components: Vec<EpicycleComponent>,
    config: &AnimationConfig,
) -> Result<usize, RenderError> {
    config.validate().map_err(RenderError::Config)?;
    fs::create_dir_all(&config.output_dir)?;

    // Points are relative to the canvas centre, like the drawing surface they came from
    let mut animation = EpicycleAnimation::new(components, config.center(), config.rotation);

    let mut written = 0;
    while let Some(frame) = animation.step() {
        let canvas = render_frame(&frame, animation.path(), config);
        let path = config.frame_path(frame.index);
        canvas.save(&path)?;
        log::debug!("wrote {}", path);
        written += 1;
    }

    log::info!("Wrote {} frames to {}", written, config.output_dir);
    Ok(written)
}
