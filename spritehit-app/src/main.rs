use glam::Vec2;
use spritehit::{
    Circle, Collision, CollisionConfig, CollisionEngine, Frame, HitOptions, Rectangle, Target,
};

/// Fixed-step loop settings for the headless demo.
struct LoopConfig {
    /// Simulated seconds per tick. Default: 1/60.
    fixed_timestep: f32,
    /// Number of ticks to run. Default: 600.
    ticks: u32,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            fixed_timestep: 1.0 / 60.0,
            ticks: 600,
        }
    }
}

/// Marbles bouncing around a walled arena.
struct MarblesApp {
    engine: CollisionEngine,
    marbles: Vec<Circle>,
    walls: Vec<Rectangle>,
}

const ARENA: Vec2 = Vec2::new(640.0, 480.0);
const WALL_THICKNESS: f32 = 32.0;

impl MarblesApp {
    fn new(count: usize) -> Self {
        let cols = (count as f32).sqrt().ceil() as usize;
        let marbles = (0..count)
            .map(|i| {
                let cell = Vec2::new((i % cols) as f32, (i / cols) as f32);
                let center = Vec2::splat(80.0) + cell * 40.0;
                let angle = i as f32 * 2.399;
                // Speeds in pixels per second.
                let velocity = Vec2::from_angle(angle) * 180.0;
                Circle::from_center(center, 12.0 + (i % 3) as f32 * 4.0)
                    .with_velocity(velocity)
                    .with_mass(1.0 + (i % 3) as f32 * 0.5)
            })
            .collect();

        // Top, bottom, left and right walls.
        let t = WALL_THICKNESS;
        let walls = vec![
            Rectangle::new(Vec2::new(ARENA.x, t)),
            Rectangle::new(Vec2::new(ARENA.x, t)).at(Vec2::new(0.0, ARENA.y - t)),
            Rectangle::new(Vec2::new(t, ARENA.y)),
            Rectangle::new(Vec2::new(t, ARENA.y)).at(Vec2::new(ARENA.x - t, 0.0)),
        ];

        Self {
            engine: CollisionEngine::new(CollisionConfig::default()),
            marbles,
            walls,
        }
    }

    fn update(&mut self, dt: f32) -> anyhow::Result<TickStats> {
        for marble in &mut self.marbles {
            marble.position += marble.velocity * dt;
        }

        let marble_hits = self
            .engine
            .multiple_circle_collision(&mut self.marbles, Frame::Local);

        let options = HitOptions::default().react(true).bounce(true);
        let mut wall_hits = 0;
        for marble in &mut self.marbles {
            self.engine.hit_with(
                &mut *marble,
                Target::many(self.walls.iter_mut()),
                options,
                |collision, _| {
                    if let Collision::Region(region) = collision {
                        log::trace!("marble touched a wall at {region}");
                    }
                    wall_hits += 1;
                },
            )?;
        }

        Ok(TickStats {
            marble_hits,
            wall_hits,
        })
    }

    fn kinetic_energy(&self) -> f32 {
        self.marbles
            .iter()
            .map(|m| 0.5 * m.mass * m.velocity.length_squared())
            .sum()
    }
}

#[derive(Default)]
struct TickStats {
    marble_hits: usize,
    wall_hits: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = LoopConfig::default();
    let mut app = MarblesApp::new(24);

    log::info!(
        "running {} ticks with {} marbles, energy {:.1}",
        config.ticks,
        app.marbles.len(),
        app.kinetic_energy()
    );

    let mut total = TickStats::default();
    for tick in 0..config.ticks {
        let stats = app.update(config.fixed_timestep)?;
        if stats.marble_hits + stats.wall_hits > 0 {
            log::debug!(
                "tick {tick}: {} marble pairs, {} wall contacts",
                stats.marble_hits,
                stats.wall_hits
            );
        }
        total.marble_hits += stats.marble_hits;
        total.wall_hits += stats.wall_hits;
    }

    log::info!(
        "done: {} marble pairs, {} wall contacts, energy {:.1}",
        total.marble_hits,
        total.wall_hits,
        app.kinetic_energy()
    );
    Ok(())
}
