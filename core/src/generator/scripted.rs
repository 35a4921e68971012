use alloc::vec::Vec;

use super::*;

/// Replays a fixed list of samples, wrapping around when exhausted.
///
/// Handy for laying out exact boards: `0.0` always places a mine and `0.99`
/// never does for any chance in between.
#[derive(Clone, Debug, PartialEq)]
pub struct ScriptedSource {
    samples: Vec<f64>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(samples: impl Into<Vec<f64>>) -> Self {
        Self {
            samples: samples.into(),
            cursor: 0,
        }
    }

    /// Samples that reproduce `mask` (row-major, `true` = mine) for any chance
    /// in `(0, 0.99]`.
    pub fn from_mine_mask(mask: &[bool]) -> Self {
        Self::new(
            mask.iter()
                .map(|&is_mine| if is_mine { 0.0 } else { 0.99 })
                .collect::<Vec<_>>(),
        )
    }
}

impl MineSource for ScriptedSource {
    fn next_sample(&mut self) -> f64 {
        let Some(&sample) = self.samples.get(self.cursor) else {
            // empty script never places a mine
            return 1.0;
        };
        self.cursor = (self.cursor + 1) % self.samples.len();
        sample
    }
}
