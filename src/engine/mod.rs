// Engine modules: assets, geometry, input, timing

pub mod assets;
pub mod game_loop;
pub mod geometry;
pub mod input;
