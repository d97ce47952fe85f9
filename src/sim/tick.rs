//! Per-frame simulation tick
//!
//! Advances a wave by exactly one frame. Steps always run in this order:
//! turn, thrust, asteroid motion, bullet spawn, bullet motion/expiry,
//! ship collision, bullet/asteroid collision.

use glam::Vec2;

use super::collision::{bodies_overlap, place_fragments};
use super::state::{Asteroid, AsteroidSize, Body, Bullet};
use super::wave::Wave;

/// Controls held during a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub turn_left: bool,
    pub turn_right: bool,
    pub thrust: bool,
    pub fire: bool,
}

/// Things that happened during a tick, for logging/audio/score hooks
#[derive(Debug, Clone, PartialEq)]
pub enum WaveEvent {
    BulletFired { position: Vec2 },
    BulletExpired { position: Vec2 },
    AsteroidDestroyed { size: AsteroidSize, position: Vec2 },
    AsteroidSplit { from: AsteroidSize, into: AsteroidSize },
    ShipDestroyed { position: Vec2 },
}

impl Wave {
    /// Advance one frame. See [`tick`].
    pub fn update(&mut self, dt: f32, input: &TickInput) -> Vec<WaveEvent> {
        tick(self, input, dt)
    }
}

/// Advance the wave by one frame.
///
/// Movement is per-frame; `dt` is only accumulated into `Wave::elapsed`.
/// If the ship is destroyed this tick, bullet/asteroid collisions are skipped.
pub fn tick(wave: &mut Wave, input: &TickInput, dt: f32) -> Vec<WaveEvent> {
    let mut events = Vec::new();
    wave.time_ticks += 1;
    wave.elapsed += dt;

    turn_ship(wave, input);
    thrust_ship(wave, input);

    let field = wave.playfield;
    for asteroid in &mut wave.asteroids {
        asteroid.advance(&field);
    }

    spawn_bullet(wave, input, &mut events);
    move_bullets(wave, &mut events);

    if check_ship_collision(wave, &mut events) {
        return events;
    }

    resolve_bullet_hits(wave, &mut events);
    events
}

fn turn_ship(wave: &mut Wave, input: &TickInput) {
    let rate = wave.config.ship_turn_rate;
    let mut delta = 0.0;
    if input.turn_left {
        delta += rate;
    }
    if input.turn_right {
        delta -= rate;
    }
    if delta == 0.0 {
        return;
    }
    if let Some(ship) = &mut wave.ship {
        ship.turn(delta);
    }
}

/// Thrust-only propulsion: the ship translates only on frames it accelerates
fn thrust_ship(wave: &mut Wave, input: &TickInput) {
    if !input.thrust {
        return;
    }
    let field = wave.playfield;
    if let Some(ship) = &mut wave.ship {
        ship.apply_impulse(wave.config.ship_impulse, wave.config.ship_max_speed);
        ship.advance(&field);
    }
}

fn spawn_bullet(wave: &mut Wave, input: &TickInput, events: &mut Vec<WaveEvent>) {
    // Counts up every frame, firing or not, until a shot resets it
    wave.fire_cooldown = wave.fire_cooldown.saturating_add(1);
    if !input.fire || wave.fire_cooldown < wave.config.bullet_rate {
        return;
    }
    let Some(ship) = &wave.ship else {
        return;
    };

    let position = ship.bullet_spawn_position();
    let bullet = Bullet::new(
        position,
        ship.bullet_velocity(wave.config.bullet_speed),
        wave.config.bullet_radius,
    );
    wave.bullets.push(bullet);
    wave.fire_cooldown = 0;
    log::debug!("Bullet fired at ({:.1}, {:.1})", position.x, position.y);
    events.push(WaveEvent::BulletFired { position });
}

fn move_bullets(wave: &mut Wave, events: &mut Vec<WaveEvent>) {
    let field = wave.playfield;
    wave.bullets.retain_mut(|bullet| {
        bullet.advance();
        let alive = field.contains(bullet.position());
        if !alive {
            events.push(WaveEvent::BulletExpired {
                position: bullet.position(),
            });
        }
        alive
    });
}

/// Returns true if the ship was destroyed this tick
fn check_ship_collision(wave: &mut Wave, events: &mut Vec<WaveEvent>) -> bool {
    let Some(ship) = &wave.ship else {
        return false;
    };
    if !wave.asteroids.iter().any(|a| bodies_overlap(ship, a)) {
        return false;
    }

    let position = ship.position();
    wave.ship = None;
    log::info!("Ship destroyed at ({:.1}, {:.1})", position.x, position.y);
    events.push(WaveEvent::ShipDestroyed { position });
    true
}

/// Each bullet and each asteroid takes part in at most one hit per tick.
/// Removals are applied after the scan; fragments join the list afterwards
/// and are not tested until the next tick.
fn resolve_bullet_hits(wave: &mut Wave, events: &mut Vec<WaveEvent>) {
    if wave.bullets.is_empty() {
        return;
    }

    let mut bullet_spent = vec![false; wave.bullets.len()];
    let mut asteroid_destroyed = vec![false; wave.asteroids.len()];
    let mut fragments: Vec<Asteroid> = Vec::new();

    for (ai, asteroid) in wave.asteroids.iter().enumerate() {
        let hit = wave
            .bullets
            .iter()
            .enumerate()
            .find(|&(bi, bullet)| !bullet_spent[bi] && bodies_overlap(bullet, asteroid));
        let Some((bi, bullet)) = hit else {
            continue;
        };

        bullet_spent[bi] = true;
        asteroid_destroyed[ai] = true;
        events.push(WaveEvent::AsteroidDestroyed {
            size: asteroid.size(),
            position: asteroid.position(),
        });

        if let Some(smaller) = asteroid.size().split() {
            let class = wave.config.asteroid_class(smaller);
            for placement in place_fragments(asteroid.position(), bullet.velocity(), class.radius) {
                fragments.push(Asteroid::new(
                    placement.center,
                    placement.direction,
                    smaller,
                    class,
                ));
            }
            log::debug!(
                "{} asteroid split into 3 {}",
                asteroid.size().as_str(),
                smaller.as_str()
            );
            events.push(WaveEvent::AsteroidSplit {
                from: asteroid.size(),
                into: smaller,
            });
        }
    }

    let mut i = 0;
    wave.bullets.retain(|_| {
        let keep = !bullet_spent[i];
        i += 1;
        keep
    });
    let mut i = 0;
    wave.asteroids.retain(|_| {
        let keep = !asteroid_destroyed[i];
        i += 1;
        keep
    });
    wave.asteroids.extend(fragments);
}
