//! Initial body placement
//!
//! A scenario is either an explicit list of bodies or `count` random bodies
//! drawn from a seeded `Pcg32`. The physics itself never touches the RNG.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::Ball;
use super::world::World;
use crate::consts::*;
use crate::error::{SimError, SimResult};

/// Initial state of one explicitly placed body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyConfig {
    pub pos: [f64; 2],
    #[serde(default)]
    pub vel: [f64; 2],
    pub radius: f64,
    /// Overrides the density-derived mass
    #[serde(default)]
    pub mass: Option<f64>,
}

/// Scenario description, loadable from JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub width: f64,
    pub height: f64,
    /// Number of random bodies (ignored when `bodies` is non-empty)
    #[serde(default)]
    pub count: usize,
    /// Fixed radius for every random body
    #[serde(default)]
    pub radius: Option<f64>,
    #[serde(default)]
    pub restitution: Option<f64>,
    /// RNG seed; wall-clock time when absent
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_density")]
    pub density: f64,
    #[serde(default)]
    pub bodies: Vec<BodyConfig>,
}

fn default_density() -> f64 {
    DEFAULT_DENSITY
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            count: 10,
            radius: None,
            restitution: None,
            seed: None,
            density: DEFAULT_DENSITY,
            bodies: Vec::new(),
        }
    }
}

/// A ready-to-run arena with its bodies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub world: World,
    pub balls: Vec<Ball>,
    /// Seed the random bodies were drawn with
    pub seed: u64,
}

impl Scenario {
    pub fn generate(config: &ScenarioConfig) -> SimResult<Self> {
        let restitution = config.restitution.unwrap_or(DEFAULT_RESTITUTION);
        let world = World::new(config.width, config.height, restitution)?;
        let seed = config.seed.unwrap_or_else(clock_seed);

        let balls = if config.bodies.is_empty() {
            random_balls(&world, config, seed)?
        } else {
            explicit_balls(&world, config)?
        };

        log::info!(
            "Scenario: {}x{} arena, {} balls, restitution {}, seed {}",
            world.width(),
            world.height(),
            balls.len(),
            restitution,
            seed
        );

        Ok(Self { world, balls, seed })
    }
}

fn check_fits(world: &World, radius: f64) -> SimResult<()> {
    if world.fits(radius) {
        Ok(())
    } else {
        Err(SimError::invalid_arena(format!(
            "radius {radius} does not fit in {}x{}",
            world.width(),
            world.height()
        )))
    }
}

fn explicit_balls(world: &World, config: &ScenarioConfig) -> SimResult<Vec<Ball>> {
    config
        .bodies
        .iter()
        .map(|body| {
            check_fits(world, body.radius)?;
            let pos = DVec2::from_array(body.pos);
            let vel = DVec2::from_array(body.vel);
            match body.mass {
                Some(mass) => Ball::with_mass(pos, vel, body.radius, mass),
                None => Ball::new(pos, vel, body.radius, config.density),
            }
        })
        .collect()
}

fn random_balls(world: &World, config: &ScenarioConfig, seed: u64) -> SimResult<Vec<Ball>> {
    if let Some(radius) = config.radius {
        check_fits(world, radius)?;
    } else if config.count > 0 {
        check_fits(world, MAX_RADIUS)?;
    }

    let mut rng = Pcg32::seed_from_u64(seed);
    let mut balls = Vec::with_capacity(config.count);
    for _ in 0..config.count {
        let radius = match config.radius {
            Some(r) => r,
            None => rng.random_range(MIN_RADIUS..=MAX_RADIUS),
        };
        let pos = DVec2::new(
            rng.random_range(radius..=world.width() - radius),
            rng.random_range(radius..=world.height() - radius),
        );
        let vel = DVec2::new(
            rng.random_range(-MAX_START_SPEED..=MAX_START_SPEED),
            rng.random_range(-MAX_START_SPEED..=MAX_START_SPEED),
        );
        balls.push(Ball::new(pos, vel, radius, config.density)?);
    }
    Ok(balls)
}

/// Seed from the system clock
fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(count: usize, seed: u64) -> ScenarioConfig {
        ScenarioConfig {
            count,
            seed: Some(seed),
            ..Default::default()
        }
    }

    #[test]
    fn test_random_bodies_inside_arena() {
        let scenario = Scenario::generate(&seeded(50, 7)).unwrap();
        assert_eq!(scenario.balls.len(), 50);
        assert_eq!(scenario.seed, 7);
        for b in &scenario.balls {
            let r = b.radius();
            assert!((MIN_RADIUS..=MAX_RADIUS).contains(&r));
            assert!(b.pos.x >= r && b.pos.x <= DEFAULT_WIDTH - r);
            assert!(b.pos.y >= r && b.pos.y <= DEFAULT_HEIGHT - r);
            assert!(b.vel.x.abs() <= MAX_START_SPEED && b.vel.y.abs() <= MAX_START_SPEED);
        }
    }

    #[test]
    fn test_same_seed_same_bodies() {
        let a = Scenario::generate(&seeded(20, 12345)).unwrap();
        let b = Scenario::generate(&seeded(20, 12345)).unwrap();
        let c = Scenario::generate(&seeded(20, 54321)).unwrap();
        assert_eq!(a.balls, b.balls);
        assert_ne!(a.balls, c.balls);
    }

    #[test]
    fn test_fixed_radius_and_restitution() {
        let config = ScenarioConfig {
            radius: Some(12.5),
            restitution: Some(0.3),
            ..seeded(5, 1)
        };
        let scenario = Scenario::generate(&config).unwrap();
        assert!(scenario.balls.iter().all(|b| b.radius() == 12.5));
        assert_eq!(scenario.world.restitution(), 0.3);
    }

    #[test]
    fn test_default_restitution_is_elastic() {
        let scenario = Scenario::generate(&seeded(1, 1)).unwrap();
        assert_eq!(scenario.world.restitution(), DEFAULT_RESTITUTION);
    }

    #[test]
    fn test_radius_too_large_for_arena() {
        let config = ScenarioConfig {
            width: 100.0,
            height: 100.0,
            radius: Some(60.0),
            ..seeded(1, 1)
        };
        assert!(matches!(Scenario::generate(&config), Err(SimError::InvalidArena(_))));
    }

    #[test]
    fn test_explicit_bodies_from_json() {
        let json = r#"{
            "width": 640, "height": 480, "restitution": 1.0,
            "bodies": [
                { "pos": [300, 150], "radius": 40, "mass": 1e9 },
                { "pos": [340, 150], "vel": [-0.1, 0], "radius": 5 }
            ]
        }"#;
        let config: ScenarioConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.density, DEFAULT_DENSITY);
        let scenario = Scenario::generate(&config).unwrap();
        assert_eq!(scenario.balls.len(), 2);
        assert_eq!(scenario.balls[0].mass(), 1e9);
        assert_eq!(scenario.balls[1].vel, DVec2::new(-0.1, 0.0));
        assert!((scenario.balls[1].mass() - std::f64::consts::PI * 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_explicit_body_validation() {
        let config = ScenarioConfig {
            bodies: vec![BodyConfig {
                pos: [10.0, 10.0],
                vel: [0.0, 0.0],
                radius: -1.0,
                mass: None,
            }],
            ..seeded(0, 1)
        };
        assert!(matches!(Scenario::generate(&config), Err(SimError::InvalidBody(_))));
    }
}
