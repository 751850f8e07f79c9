mod datagen;
mod fixtures;

pub use datagen::*;
pub use fixtures::*;
