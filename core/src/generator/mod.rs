use crate::*;
pub use random::*;
pub use scripted::*;

mod random;
mod scripted;

/// Uniform random samples used to seed mines.
///
/// Samples are expected in `[0, 1)`. A cell becomes a mine when its sample is
/// below [`BoardConfig::mine_chance`].
pub trait MineSource {
    fn next_sample(&mut self) -> f64;
}

impl<S: MineSource + ?Sized> MineSource for &mut S {
    fn next_sample(&mut self) -> f64 {
        (**self).next_sample()
    }
}
