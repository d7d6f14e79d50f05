use iced::canvas::{Frame, Path};
use iced::{Color, Point};
use log::{debug, warn};
use rand::prelude::*;
use serde::Deserialize;

use crate::theme::Theme;

pub const PALETTE_SIZE: usize = 4;

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Parameters {
    pub particle_count: usize,
    pub min_radius: f32,
    pub max_radius: f32,
    pub max_speed: f32,
    pub opacity: f32,
    pub frame_interval_ms: u64,
    pub seed: Option<u64>,
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            particle_count: 15,
            min_radius: 10.0,
            max_radius: 30.0,
            max_speed: 2.0,
            opacity: 0.6,
            frame_interval_ms: 16,
            seed: None,
        }
    }
}

impl Parameters {
    /// Replaces radius, speed or opacity settings the field cannot sample
    /// from with their defaults.
    pub fn sanitized(mut self) -> Self {
        let defaults = Parameters::default();

        let radius_ok = self.min_radius.is_finite()
            && self.max_radius.is_finite()
            && 0.0 <= self.min_radius
            && self.min_radius <= self.max_radius;
        if !radius_ok {
            warn!(
                "ignoring radius range {}..{}, using {}..{}",
                self.min_radius, self.max_radius, defaults.min_radius, defaults.max_radius
            );
            self.min_radius = defaults.min_radius;
            self.max_radius = defaults.max_radius;
        }

        // the velocity range spans twice the speed
        if !(self.max_speed >= 0.0 && (2.0 * self.max_speed).is_finite()) {
            warn!(
                "ignoring max_speed {}, using {}",
                self.max_speed, defaults.max_speed
            );
            self.max_speed = defaults.max_speed;
        }

        if !(0.0..=1.0).contains(&self.opacity) {
            warn!("ignoring opacity {}, using {}", self.opacity, defaults.opacity);
            self.opacity = defaults.opacity;
        }

        self
    }
}

pub fn palette(theme: Theme) -> [Color; PALETTE_SIZE] {
    match theme {
        Theme::Dark => [
            Color::from_rgb8(0xe9, 0x45, 0x60),
            Color::from_rgb8(0x0f, 0x34, 0x60),
            Color::from_rgb8(0x53, 0x34, 0x83),
            Color::from_rgb8(0xff, 0x6b, 0x81),
        ],
        Theme::Light => [
            Color::from_rgb8(0xe9, 0x45, 0x60),
            Color::from_rgb8(0x63, 0x66, 0xf1),
            Color::from_rgb8(0xa8, 0x55, 0xf7),
            Color::from_rgb8(0x3b, 0x82, 0xf6),
        ],
    }
}

/// Drawing area in pixels. Never zero-sized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Surface {
    pub width: u32,
    pub height: u32,
}

impl Surface {
    pub fn new(width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            None
        } else {
            Some(Surface { width, height })
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
    pub radius: f32,
    /// Palette slot the color was drawn from.
    pub shade: usize,
    pub color: Color,
}

impl Particle {
    // the bounds test runs on the position before the move, so a fast
    // particle may overshoot a wall by up to one step.
    fn step(&mut self, surface: Surface) {
        let width = surface.width as f32;
        let height = surface.height as f32;
        if self.x + self.radius >= width || self.x - self.radius <= 0.0 {
            self.dx = -self.dx;
        }
        if self.y + self.radius >= height || self.y - self.radius <= 0.0 {
            self.dy = -self.dy;
        }
        self.x += self.dx;
        self.y += self.dy;
    }
}

pub type Particles = Vec<Particle>;

/// Decorative field of bouncing circles sized to the viewport.
///
/// The field is stopped until `start`; a stopped field ignores `step` and
/// `resize`. A zero-area viewport leaves it without a surface, in which
/// case it stays running but draws and steps nothing.
pub struct ParticleField {
    parameters: Parameters,
    surface: Option<Surface>,
    particles: Particles,
    theme: Theme,
    rng: StdRng,
    running: bool,
}

impl Default for ParticleField {
    fn default() -> Self {
        Self::new(Parameters::default())
    }
}

impl ParticleField {
    pub fn new(parameters: Parameters) -> Self {
        let parameters = parameters.sanitized();
        let rng = match parameters.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            parameters,
            surface: None,
            particles: Particles::new(),
            theme: Theme::default(),
            rng,
            running: false,
        }
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Replaces the parameters; they apply from the next `initialize`.
    pub fn set_parameters(&mut self, parameters: Parameters) {
        let parameters = parameters.sanitized();
        if let Some(seed) = parameters.seed {
            self.rng = StdRng::seed_from_u64(seed);
        }
        self.parameters = parameters;
    }

    pub fn start(&mut self, width: u32, height: u32, theme: Theme) {
        self.running = true;
        self.initialize(width, height, theme);
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.surface = None;
        self.particles.clear();
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn surface(&self) -> Option<Surface> {
        self.surface
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn initialize(&mut self, width: u32, height: u32, theme: Theme) {
        self.theme = theme;
        self.surface = Surface::new(width, height);

        let surface = match self.surface {
            Some(surface) => surface,
            None => {
                debug!("particle field dormant on {}x{} surface", width, height);
                self.particles.clear();
                return;
            }
        };

        let colors = palette(theme);
        let (min_radius, max_radius) = (self.parameters.min_radius, self.parameters.max_radius);
        let max_speed = self.parameters.max_speed;
        let count = self.parameters.particle_count;
        let rng = &mut self.rng;

        self.particles = (0..count)
            .map(|_| {
                let radius = rng.gen_range(min_radius..=max_radius);
                let x = rng.gen_range(0.0..surface.width as f32);
                let y = rng.gen_range(0.0..surface.height as f32);
                let dx = rng.gen_range(-max_speed..=max_speed);
                let dy = rng.gen_range(-max_speed..=max_speed);
                let shade = rng.gen_range(0..PALETTE_SIZE);
                Particle {
                    x,
                    y,
                    dx,
                    dy,
                    radius,
                    shade,
                    color: colors[shade],
                }
            })
            .collect();

        debug!(
            "particle field seeded with {} particles on {}x{}",
            self.particles.len(),
            surface.width,
            surface.height
        );
    }

    pub fn step(&mut self) {
        if !self.running {
            return;
        }
        if let Some(surface) = self.surface {
            for particle in self.particles.iter_mut() {
                particle.step(surface);
            }
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if self.running {
            let theme = self.theme;
            self.initialize(width, height, theme);
        }
    }

    /// Moves every particle to the same palette slot of `theme`'s palette.
    pub fn recolor(&mut self, theme: Theme) {
        self.theme = theme;
        let colors = palette(theme);
        for particle in self.particles.iter_mut() {
            particle.color = colors[particle.shade % PALETTE_SIZE];
        }
    }

    /// Paints the particles into a fresh frame, so nothing from the
    /// previous frame survives.
    pub fn draw(&self, frame: &mut Frame) {
        if self.surface.is_none() {
            return;
        }
        let opacity = self.parameters.opacity;
        for particle in self.particles.iter() {
            let circle = Path::circle(Point::new(particle.x, particle.y), particle.radius);
            frame.fill(
                &circle,
                Color {
                    a: opacity,
                    ..particle.color
                },
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> ParticleField {
        ParticleField::new(Parameters {
            seed: Some(seed),
            ..Parameters::default()
        })
    }

    fn particle(x: f32, y: f32, dx: f32, dy: f32, radius: f32) -> Particle {
        Particle {
            x,
            y,
            dx,
            dy,
            radius,
            shade: 0,
            color: Color::BLACK,
        }
    }

    fn assert_seeded_within(field: &ParticleField, width: u32, height: u32, theme: Theme) {
        let colors = palette(theme);
        assert_eq!(field.particles().len(), 15);
        for p in field.particles() {
            assert!(p.radius >= 10.0 && p.radius <= 30.0, "radius {}", p.radius);
            assert!(p.x >= 0.0 && p.x < width as f32, "x {}", p.x);
            assert!(p.y >= 0.0 && p.y < height as f32, "y {}", p.y);
            assert!(p.dx >= -2.0 && p.dx <= 2.0, "dx {}", p.dx);
            assert!(p.dy >= -2.0 && p.dy <= 2.0, "dy {}", p.dy);
            assert!(colors.contains(&p.color));
            assert_eq!(p.color, colors[p.shade]);
        }
    }

    #[test]
    fn initialize_seeds_fifteen_particles_in_range() {
        for seed in 0..20 {
            for &theme in &[Theme::Dark, Theme::Light] {
                let mut field = seeded(seed);
                field.start(800, 600, theme);
                assert_eq!(field.surface(), Surface::new(800, 600));
                assert_seeded_within(&field, 800, 600, theme);
            }
        }
    }

    #[test]
    fn palettes_differ_between_themes() {
        assert_ne!(palette(Theme::Dark), palette(Theme::Light));
    }

    #[test]
    fn same_seed_same_particles() {
        let mut a = seeded(7);
        let mut b = seeded(7);
        a.start(640, 480, Theme::Dark);
        b.start(640, 480, Theme::Dark);
        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn reflects_off_vertical_walls() {
        let surface = Surface::new(100, 100).unwrap();

        let mut right = particle(95.0, 50.0, 1.5, 0.5, 10.0);
        right.step(surface);
        assert_eq!(right.dx, -1.5);
        assert_eq!(right.dy, 0.5);
        assert_eq!(right.x, 93.5);

        let mut left = particle(10.0, 50.0, -1.0, 0.0, 10.0);
        left.step(surface);
        assert_eq!(left.dx, 1.0);
        assert_eq!(left.x, 11.0);
    }

    #[test]
    fn reflects_off_horizontal_walls_independently() {
        let surface = Surface::new(200, 100).unwrap();

        let mut bottom = particle(100.0, 90.0, 1.0, 2.0, 12.0);
        bottom.step(surface);
        assert_eq!(bottom.dx, 1.0);
        assert_eq!(bottom.dy, -2.0);

        let mut corner = particle(5.0, 5.0, -1.0, -1.0, 10.0);
        corner.step(surface);
        assert_eq!((corner.dx, corner.dy), (1.0, 1.0));
    }

    #[test]
    fn interior_particles_keep_their_velocity() {
        let surface = Surface::new(300, 300).unwrap();
        let mut p = particle(150.0, 150.0, -2.0, 1.0, 20.0);
        p.step(surface);
        assert_eq!((p.dx, p.dy), (-2.0, 1.0));
        assert_eq!((p.x, p.y), (148.0, 151.0));
    }

    #[test]
    fn velocity_sign_flips_exactly_when_touching_a_wall() {
        let mut field = seeded(42);
        field.start(320, 240, Theme::Dark);
        let surface = field.surface().unwrap();
        let (width, height) = (surface.width as f32, surface.height as f32);

        for _ in 0..2000 {
            let before = field.particles().to_vec();
            field.step();
            for (old, new) in before.iter().zip(field.particles()) {
                let hits_x = old.x + old.radius >= width || old.x - old.radius <= 0.0;
                let hits_y = old.y + old.radius >= height || old.y - old.radius <= 0.0;
                let expected_dx = if hits_x { -old.dx } else { old.dx };
                let expected_dy = if hits_y { -old.dy } else { old.dy };
                assert_eq!(new.dx, expected_dx);
                assert_eq!(new.dy, expected_dy);
            }
        }
    }

    #[test]
    fn resize_replaces_the_whole_set() {
        let mut field = seeded(3);
        field.start(800, 600, Theme::Dark);
        let before = field.particles().to_vec();

        field.resize(1200, 800);
        assert_eq!(field.surface(), Surface::new(1200, 800));
        assert_seeded_within(&field, 1200, 800, Theme::Dark);
        assert_ne!(field.particles(), &before[..]);
    }

    #[test]
    fn stopped_field_ignores_step_and_resize() {
        let mut field = seeded(1);
        field.resize(500, 500);
        assert!(field.surface().is_none());
        assert!(field.particles().is_empty());

        field.start(500, 500, Theme::Dark);
        field.stop();
        field.step();
        field.resize(600, 600);
        assert!(!field.is_running());
        assert!(field.particles().is_empty());
    }

    #[test]
    fn zero_area_surface_leaves_the_field_dormant() {
        let mut field = seeded(9);
        field.start(0, 600, Theme::Dark);
        assert!(field.is_running());
        assert!(field.surface().is_none());
        field.step();
        assert!(field.particles().is_empty());

        field.resize(400, 300);
        assert_eq!(field.particles().len(), 15);
    }

    #[test]
    fn recolor_keeps_motion_and_moves_to_the_new_palette() {
        let mut field = seeded(11);
        field.start(800, 600, Theme::Dark);
        let before = field.particles().to_vec();

        field.recolor(Theme::Light);
        let light = palette(Theme::Light);
        for (old, new) in before.iter().zip(field.particles()) {
            assert_eq!((old.x, old.y, old.dx, old.dy), (new.x, new.y, new.dx, new.dy));
            assert_eq!(new.color, light[old.shade]);
        }
        assert_eq!(field.theme(), Theme::Light);
    }

    #[test]
    fn parameters_apply_on_next_initialize() {
        let mut field = seeded(5);
        field.start(800, 600, Theme::Dark);
        field.set_parameters(Parameters {
            particle_count: 4,
            ..Parameters::default()
        });
        assert_eq!(field.particles().len(), 15);
        field.resize(800, 600);
        assert_eq!(field.particles().len(), 4);
    }

    #[test]
    fn unusable_parameters_fall_back_to_defaults() {
        let parameters: Parameters = serde_json::from_str(
            r#"{ "max_radius": 1e39, "max_speed": 3e38, "opacity": 1.5, "seed": 1 }"#,
        )
        .unwrap();
        assert!(parameters.max_radius.is_infinite());

        let mut field = ParticleField::new(parameters);
        assert_eq!(field.parameters().max_radius, 30.0);
        assert_eq!(field.parameters().max_speed, 2.0);
        assert_eq!(field.parameters().opacity, 0.6);
        field.start(800, 600, Theme::Dark);
        assert_seeded_within(&field, 800, 600, Theme::Dark);
    }

    #[test]
    fn reversed_or_negative_ranges_are_replaced_on_reload() {
        let mut field = seeded(4);
        field.start(800, 600, Theme::Dark);
        field.set_parameters(Parameters {
            min_radius: 40.0,
            max_radius: 5.0,
            max_speed: -1.0,
            opacity: f32::NAN,
            particle_count: 6,
            ..Parameters::default()
        });

        let parameters = field.parameters();
        assert_eq!((parameters.min_radius, parameters.max_radius), (10.0, 30.0));
        assert_eq!(parameters.max_speed, 2.0);
        assert_eq!(parameters.opacity, 0.6);
        assert_eq!(parameters.particle_count, 6);

        field.resize(640, 480);
        assert_eq!(field.particles().len(), 6);
    }

    #[test]
    fn usable_parameters_pass_through_unchanged() {
        let parameters = Parameters {
            min_radius: 4.0,
            max_radius: 4.0,
            max_speed: 0.0,
            opacity: 1.0,
            ..Parameters::default()
        }
        .sanitized();
        assert_eq!((parameters.min_radius, parameters.max_radius), (4.0, 4.0));
        assert_eq!(parameters.max_speed, 0.0);
        assert_eq!(parameters.opacity, 1.0);
    }

    #[test]
    fn reflection_can_carry_a_wall_hugger_past_the_wall() {
        let surface = Surface::new(800, 600).unwrap();
        let mut p = particle(0.5, 300.0, 1.5, 0.0, 20.0);
        p.step(surface);
        assert_eq!(p.dx, -1.5);
        assert_eq!(p.x, -1.0);

        p.step(surface);
        assert_eq!(p.dx, 1.5);
        assert_eq!(p.x, 0.5);
    }

    #[test]
    fn centers_never_leave_the_surface_by_more_than_one_step() {
        for seed in 0..10 {
            let mut field = seeded(seed);
            field.start(320, 240, Theme::Dark);
            let max_speed = field.parameters().max_speed;
            let (low, high_x, high_y) = (
                -max_speed - 1e-3,
                320.0 + max_speed + 1e-3,
                240.0 + max_speed + 1e-3,
            );

            for _ in 0..2000 {
                field.step();
                for p in field.particles() {
                    assert!(p.x >= low && p.x <= high_x, "seed {} x {}", seed, p.x);
                    assert!(p.y >= low && p.y <= high_y, "seed {} y {}", seed, p.y);
                }
            }
        }
    }

    #[test]
    fn parameters_deserialize_with_defaults() {
        let parameters: Parameters =
            serde_json::from_str(r#"{ "particle_count": 30, "seed": 12 }"#).unwrap();
        assert_eq!(parameters.particle_count, 30);
        assert_eq!(parameters.seed, Some(12));
        assert_eq!(parameters.max_radius, 30.0);
        assert_eq!(parameters.frame_interval_ms, 16);
    }
}
