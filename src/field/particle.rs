use rand::Rng;

/// One point in the starfield. Position is in field pixel space;
/// `radius`, `speed`, and `jitter` are fixed at spawn.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    /// Draw radius, in [0.3, 1.8).
    pub radius: f64,
    /// Ambient upward drift rate, in [0.1, 0.3).
    pub speed: f64,
    /// Signed horizontal wander under ambient drift, magnitude < 0.1.
    pub jitter: f64,
}

impl Particle {
    /// Spawn at a uniform random position within the field bounds.
    pub fn spawn(rng: &mut impl Rng, width: f64, height: f64) -> Self {
        Self {
            x: rng.gen::<f64>() * width,
            y: rng.gen::<f64>() * height,
            radius: rng.gen::<f64>() * 1.5 + 0.3,
            speed: rng.gen::<f64>() * 0.2 + 0.1,
            jitter: (rng.gen::<f64>() - 0.5) * 0.2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_ranges() {
        let mut rng = rand::thread_rng();
        for _ in 0..500 {
            let p = Particle::spawn(&mut rng, 320.0, 200.0);
            assert!((0.0..320.0).contains(&p.x));
            assert!((0.0..200.0).contains(&p.y));
            assert!((0.3..1.8).contains(&p.radius));
            assert!((0.1..0.3).contains(&p.speed));
            assert!(p.jitter.abs() < 0.1);
        }
    }
}
