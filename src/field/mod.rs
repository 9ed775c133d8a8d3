pub mod particle;
pub mod starfield;

pub use particle::Particle;
pub use starfield::{Starfield, Surface};
