// Background particle field for the hero section.

pub const MAX_PARTICLES: usize = 50;
const AREA_PER_PARTICLE: f64 = 8000.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
  pub x: f64,
  pub y: f64,
  pub size: f64,
  pub speed_x: f64,
  pub speed_y: f64,
  pub opacity: f64,
  pub layer: f64,
}

/// Where to draw one particle this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dot {
  pub x: f64,
  pub y: f64,
  pub radius: f64,
  pub alpha: f64,
}

#[derive(Clone, Debug, Default)]
pub struct ParticleField {
  pub width: f64,
  pub height: f64,
  pub particles: Vec<Particle>,
  /// Pointer offset from the centre, normalised to roughly [-0.5, 0.5].
  pub mouse: (f64, f64),
}

pub fn particle_count(width: f64, height: f64) -> usize {
  let n = (width * height / AREA_PER_PARTICLE).floor();
  if n <= 0.0 { 0 } else { (n as usize).min(MAX_PARTICLES) }
}

impl ParticleField {
  /// Seed a field for the given canvas size. `rand` must yield values in [0, 1).
  pub fn new(width: f64, height: f64, mut rand: impl FnMut() -> f64) -> Self {
    let particles = (0..particle_count(width, height)).map(|_| Particle {
      x: rand() * width,
      y: rand() * height,
      size: rand() * 6.0 + 4.0,
      speed_x: (rand() - 0.5) * 0.5,
      speed_y: (rand() - 0.5) * 0.5,
      opacity: rand() * 0.5 + 0.3,
      layer: rand() * 3.0,
    }).collect();
    ParticleField { width, height, particles, mouse: (0.0, 0.0) }
  }

  pub fn set_mouse(&mut self, offset_x: f64, offset_y: f64, width: f64, height: f64) {
    if width > 0.0 && height > 0.0 {
      self.mouse = ((offset_x - width / 2.0) / width, (offset_y - height / 2.0) / height);
    }
  }

  /// Advance every particle one frame, wrapping at the edges.
  pub fn step(&mut self) {
    let (w, h) = (self.width, self.height);
    for p in &mut self.particles {
      p.x += p.speed_x;
      p.y += p.speed_y;
      if p.x < 0.0 { p.x = w; }
      if p.x > w { p.x = 0.0; }
      if p.y < 0.0 { p.y = h; }
      if p.y > h { p.y = 0.0; }
    }
  }

  /// Draw positions with the pointer parallax applied; deeper layers move further.
  pub fn dots(&self) -> impl Iterator<Item = Dot> + '_ {
    let (mx, my) = self.mouse;
    self.particles.iter().map(move |p| {
      let strength = (p.layer + 1.0) * 10.0;
      Dot { x: p.x + mx * strength, y: p.y + my * strength, radius: p.size, alpha: p.opacity }
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn fixed(v: f64) -> impl FnMut() -> f64 {
    move || v
  }

  #[test]
  fn count_scales_with_area_and_is_capped() {
    assert_eq!(particle_count(0.0, 0.0), 0);
    assert_eq!(particle_count(100.0, 100.0), 1);
    assert_eq!(particle_count(400.0, 200.0), 10);
    assert_eq!(particle_count(1920.0, 1080.0), MAX_PARTICLES);
  }

  #[test]
  fn seeded_ranges() {
    let low = ParticleField::new(400.0, 200.0, fixed(0.0));
    let p = &low.particles[0];
    assert_eq!((p.size, p.speed_x, p.opacity, p.layer), (4.0, -0.25, 0.3, 0.0));

    let high = ParticleField::new(400.0, 200.0, fixed(0.999_999));
    let p = &high.particles[0];
    assert!(p.size < 10.0 && p.speed_x < 0.25 && p.opacity < 0.8 && p.layer < 3.0);
  }

  #[test]
  fn particles_wrap_around_edges() {
    let mut field = ParticleField::new(400.0, 200.0, fixed(0.0));
    field.particles.truncate(1);
    field.step();
    // started at the origin moving up-left, so both axes wrap to the far edge
    assert_eq!((field.particles[0].x, field.particles[0].y), (400.0, 200.0));

    field.particles[0].speed_x = 1.0;
    field.particles[0].speed_y = 1.0;
    field.step();
    assert_eq!((field.particles[0].x, field.particles[0].y), (0.0, 0.0));
  }

  #[test]
  fn parallax_grows_with_layer() {
    let mut field = ParticleField::new(400.0, 200.0, fixed(0.5));
    field.particles.truncate(1);
    field.set_mouse(400.0, 200.0, 400.0, 200.0);
    assert_eq!(field.mouse, (0.5, 0.5));
    let dot = field.dots().next().unwrap();
    // layer 1.5 -> strength 25
    assert_eq!((dot.x, dot.y), (200.0 + 12.5, 100.0 + 12.5));
  }
}
