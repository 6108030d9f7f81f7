use rand::seq::SliceRandom;
use rand::Rng;
use std::time::SystemTime;

const SYMBOLS: [char; 6] = ['*', '+', '✦', '★', '•', '✓'];

/// Particle for the completion animation
#[derive(Debug, Clone)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vel_x: f64,
    pub vel_y: f64,
    pub symbol: char,
    pub color_index: usize,
    pub age: f64,
    pub max_age: f64,
}

impl Particle {
    fn new(x: f64, y: f64, rng: &mut impl Rng) -> Self {
        Self {
            x,
            y,
            vel_x: rng.gen_range(-3.0..3.0),
            vel_y: rng.gen_range(-4.0..-1.0),
            symbol: *SYMBOLS.choose(&mut *rng).unwrap_or(&'*'),
            color_index: rng.gen_range(0..6),
            age: 0.0,
            max_age: rng.gen_range(2.0..4.0),
        }
    }

    fn update(&mut self, dt: f64) -> bool {
        self.x += self.vel_x * dt;
        self.y += self.vel_y * dt;
        self.vel_y += 15.0 * dt; // gravity
        self.age += dt;
        self.age < self.max_age
    }
}

/// Short confetti burst shown behind the "well done" dialog
#[derive(Debug)]
pub struct Confetti {
    pub particles: Vec<Particle>,
    pub start_time: SystemTime,
    pub duration: f64, // seconds
    pub is_active: bool,
    pub width: f64,
    pub height: f64,
}

impl Confetti {
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
            start_time: SystemTime::now(),
            duration: 3.0,
            is_active: false,
            width: 80.0,
            height: 24.0,
        }
    }

    pub fn start(&mut self, width: u16, height: u16) {
        let mut rng = rand::thread_rng();

        self.particles.clear();
        self.start_time = SystemTime::now();
        self.is_active = true;
        self.width = f64::from(width);
        self.height = f64::from(height);

        let center_x = self.width / 2.0;
        let center_y = self.height / 2.0;
        for _ in 0..40 {
            let x = center_x + rng.gen_range(-20.0..20.0);
            let y = center_y + rng.gen_range(-6.0..6.0);
            self.particles.push(Particle::new(x, y, &mut rng));
        }
    }

    pub fn stop(&mut self) {
        self.is_active = false;
        self.particles.clear();
    }

    pub fn update(&mut self) {
        if !self.is_active {
            return;
        }

        let elapsed = self.start_time.elapsed().unwrap_or_default().as_secs_f64();
        if elapsed >= self.duration {
            self.stop();
            return;
        }

        let dt = 0.1; // matches the frame tick
        let (width, height) = (self.width, self.height);
        self.particles.retain_mut(|p| {
            let alive = p.update(dt);
            let buffer = 5.0;
            let off_screen = p.y > height + buffer || p.x < -buffer || p.x > width + buffer;
            alive && !off_screen
        });
    }

    /// Particles that land inside a `width` x `height` area, as cell coordinates
    pub fn visible(&self) -> impl Iterator<Item = (u16, u16, &Particle)> {
        let (width, height) = (self.width, self.height);
        self.particles.iter().filter_map(move |p| {
            (p.x >= 0.0 && p.y >= 0.0 && p.x < width && p.y < height)
                .then(|| (p.x as u16, p.y as u16, p))
        })
    }
}

impl Default for Confetti {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_particle_falls_under_gravity() {
        let mut rng = rand::thread_rng();
        let mut particle = Particle::new(10.0, 10.0, &mut rng);
        let initial_vel_y = particle.vel_y;

        assert!(particle.update(0.1));
        assert!(particle.vel_y > initial_vel_y);
    }

    #[test]
    fn test_confetti_starts_inactive() {
        let confetti = Confetti::new();
        assert!(!confetti.is_active);
        assert!(confetti.particles.is_empty());
    }

    #[test]
    fn test_confetti_burst() {
        let mut confetti = Confetti::new();
        confetti.start(80, 24);
        assert!(confetti.is_active);
        assert_eq!(confetti.particles.len(), 40);

        for _ in 0..5 {
            confetti.update();
        }
        assert!(confetti.is_active);
    }

    #[test]
    fn test_off_screen_particles_removed() {
        let mut confetti = Confetti::new();
        confetti.start(20, 10);
        let mut rng = rand::thread_rng();
        confetti
            .particles
            .push(Particle::new(100.0, 100.0, &mut rng));
        let with_stray = confetti.particles.len();

        confetti.update();
        assert!(confetti.particles.len() < with_stray);
        assert!(confetti
            .particles
            .iter()
            .all(|p| p.y <= 15.0 && p.x >= -5.0 && p.x <= 25.0));
    }

    #[test]
    fn test_stop_clears_particles() {
        let mut confetti = Confetti::new();
        confetti.start(80, 24);
        confetti.stop();
        assert!(!confetti.is_active);
        assert!(confetti.particles.is_empty());
        assert_eq!(confetti.visible().count(), 0);
    }
}
