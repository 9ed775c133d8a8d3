//! The starfield simulation: a fixed population of particles advancing
//! under one of two motion fields.
//!
//! Ambient mode drifts particles slowly upward with slight horizontal
//! jitter, recycling anything that leaves the top edge back to the
//! bottom. Focus mode pulls particles toward a horizontal band at half
//! height and settles them onto 12-pixel columns. The focused flag is an
//! explicit parameter to [`Starfield::step`], sampled once per frame by
//! the caller; the simulator holds no shared mutable state with the
//! event layer.

use std::time::Duration;

use rand::Rng;

use crate::field::particle::Particle;

/// Field area per particle, in square pixels.
pub const AREA_PER_PARTICLE: f64 = 5000.0;
/// Nominal frame period at 60 fps, in milliseconds.
pub const FRAME_MS: f64 = 16.67;
/// Upper clamp on the per-step time ratio, in nominal frames.
pub const MAX_DT: f64 = 2.0;

/// Margin past the top/bottom edges at which particles recycle.
const RECYCLE_MARGIN: f64 = 5.0;
/// Exponential pull toward the center band per nominal frame.
const BAND_PULL: f64 = 0.08;
/// Constant downward bias per nominal frame while focused.
const BAND_BIAS: f64 = 0.6;
/// Column grid spacing, in pixels.
const COLUMN_SPACING: f64 = 12.0;
/// Exponential pull toward the nearest column per nominal frame.
const COLUMN_PULL: f64 = 0.04;

const AMBIENT_ALPHA: f64 = 0.6;
const FOCUS_ALPHA: f64 = 0.8;
const BAND_ALPHA: f64 = 0.15;
/// Half-height of the glow band drawn while focused.
const BAND_HALF_HEIGHT: f64 = 20.0;

/// Drawing operations the simulator needs from a rendering surface.
///
/// Coordinates are in field pixel space with the origin at the top-left
/// and y growing downward. `alpha` is an opacity in [0, 1]; surfaces
/// without true transparency map it to brightness.
pub trait Surface {
    fn clear(&mut self);
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, alpha: f64);
    /// Soft horizontal band centered on `center_y`.
    fn fill_band(&mut self, center_y: f64, half_height: f64, alpha: f64);
}

pub struct Starfield {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
}

impl Starfield {
    /// Create a field with `floor(width * height / 5000)` particles
    /// placed uniformly at random. The population count is invariant for
    /// the lifetime of the field.
    pub fn new(width: f64, height: f64) -> Self {
        let count = (width * height / AREA_PER_PARTICLE).floor() as usize;
        let mut rng = rand::thread_rng();
        let particles = (0..count)
            .map(|_| Particle::spawn(&mut rng, width, height))
            .collect();

        Self {
            particles,
            width,
            height,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Convert elapsed wall time into nominal 60 fps frame units,
    /// clamped to [`MAX_DT`] so a stalled frame cannot teleport the
    /// field.
    pub fn dt_from_elapsed(elapsed: Duration) -> f64 {
        (elapsed.as_secs_f64() * 1000.0 / FRAME_MS).min(MAX_DT)
    }

    /// Update the field bounds after a surface resize. The particle set
    /// is kept as-is; positions now outside the new bounds are corrected
    /// by ambient recycling within one drift cycle.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Advance one frame. `dt` is in nominal frame units (see
    /// [`Starfield::dt_from_elapsed`]).
    pub fn step(&mut self, dt: f64, focused: bool) {
        if focused {
            self.step_focus(dt);
        } else {
            self.step_ambient(dt);
        }
    }

    fn step_ambient(&mut self, dt: f64) {
        let mut rng = rand::thread_rng();
        for p in &mut self.particles {
            p.y -= p.speed * dt;
            p.x += p.jitter * dt;
            if p.y < -RECYCLE_MARGIN {
                p.y = self.height + RECYCLE_MARGIN;
                p.x = rng.gen::<f64>() * self.width;
            }
        }
    }

    fn step_focus(&mut self, dt: f64) {
        let band_y = self.height * 0.5;
        for p in &mut self.particles {
            p.y += (band_y - p.y) * BAND_PULL * dt + BAND_BIAS * dt;
            let column = (p.x / COLUMN_SPACING).round() * COLUMN_SPACING;
            p.x += (column - p.x) * COLUMN_PULL * dt;
        }
    }

    /// Draw the current frame: every particle as a filled circle, plus
    /// the glow band while focused.
    pub fn render(&self, surface: &mut dyn Surface, focused: bool) {
        surface.clear();

        let alpha = if focused { FOCUS_ALPHA } else { AMBIENT_ALPHA };
        for p in &self.particles {
            surface.fill_circle(p.x, p.y, p.radius, alpha);
        }

        if focused {
            surface.fill_band(self.height * 0.5, BAND_HALF_HEIGHT, BAND_ALPHA);
        }
    }
}
