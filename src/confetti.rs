use rand::Rng;
use raylib::prelude::*;

use crate::constants::*;

const PARTICLE_COUNT: usize = 90;
const COLORS: [Color; 5] = [
    Color::new(255, 176, 59, 255),
    Color::new(255, 94, 120, 255),
    Color::new(120, 220, 180, 255),
    Color::new(140, 160, 255, 255),
    Color::new(255, 240, 140, 255),
];

struct Particle {
    position: Vector2,
    velocity: Vector2,
    size: f32,
    rotation: f32,
    spin: f32,
    color: Color,
}

/// Slowly falling paper bits drawn behind the Festival theme.
pub struct Confetti {
    particles: Vec<Particle>,
}

fn spawn(rng: &mut impl Rng, y: f32) -> Particle {
    Particle {
        position: Vector2::new(rng.random_range(0.0..RENDER_WIDTH as f32), y),
        velocity: Vector2::new(rng.random_range(-30.0..30.0), rng.random_range(40.0..110.0)),
        size: rng.random_range(6.0..14.0),
        rotation: rng.random_range(0.0..360.0),
        spin: rng.random_range(-120.0..120.0),
        color: COLORS[rng.random_range(0..COLORS.len())],
    }
}

impl Confetti {
    pub fn new() -> Self {
        let mut rng = rand::rng();
        let particles = (0..PARTICLE_COUNT)
            .map(|_| {
                let y = rng.random_range(0.0..RENDER_HEIGHT as f32);
                spawn(&mut rng, y)
            })
            .collect();
        Self { particles }
    }

    pub fn update(&mut self, dt: f32) {
        let mut rng = rand::rng();
        for p in self.particles.iter_mut() {
            p.position.x += p.velocity.x * dt;
            p.position.y += p.velocity.y * dt;
            p.rotation += p.spin * dt;
            if p.position.y > RENDER_HEIGHT as f32 + p.size {
                *p = spawn(&mut rng, -p.size);
            }
        }
    }

    pub fn draw<D: RaylibDraw>(&self, d: &mut D, alpha: f32) {
        for p in &self.particles {
            let color = crate::theme::faded(p.color, alpha * 0.7);
            d.draw_rectangle_pro(
                Rectangle::new(p.position.x, p.position.y, p.size, p.size * 0.5),
                Vector2::new(p.size / 2.0, p.size / 4.0),
                p.rotation,
                color,
            );
        }
    }

    #[cfg(test)]
    fn lowest(&self) -> f32 {
        self.particles.iter().map(|p| p.position.y).fold(f32::MIN, f32::max)
    }
}
