//! Window chrome metrics

/// Metrics for window chrome, shared by hit testing and the renderer
#[derive(Clone, Copy, Debug)]
pub struct FrameStyle {
    pub title_bar_height: f32,
    pub button_size: f32,
    pub button_spacing: f32,
    pub button_margin: f32,
}

/// Default frame style matching the desktop CSS
pub const FRAME_STYLE: FrameStyle = FrameStyle {
    title_bar_height: 28.0,
    button_size: 20.0,
    button_spacing: 6.0,
    button_margin: 8.0,
};
