// Engine modules: simulation clock, timers, assets, sprites, input, physics

pub mod assets;
pub mod game_loop;
pub mod input;
pub mod physics;
pub mod sprite;
pub mod timer;
