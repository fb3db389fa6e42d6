// Gameplay layer built on top of the engine

pub mod characters;
pub mod controller;
pub mod damage;
pub mod items;
