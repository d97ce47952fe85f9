//! Wave simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One `tick` per frame, fixed step order
//! - No rendering, input polling, or file access
//! - Entity collections owned by the `Wave`, mutated only inside `tick`

pub mod collision;
pub mod playfield;
pub mod state;
pub mod tick;
pub mod wave;

pub use collision::{FRAGMENT_SPREAD, bodies_overlap, circles_overlap, fragment_directions};
pub use playfield::Playfield;
pub use state::{Asteroid, AsteroidSize, Body, Bullet, Ship};
pub use tick::{TickInput, WaveEvent, tick};
pub use wave::{Wave, WaveStatus};
