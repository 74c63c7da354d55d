//! Random integer stream consumed by the walk.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Source of uniformly distributed integers.
///
/// The generator consumes a single stream in a fixed order, so any two
/// sources yielding the same sequence produce the same terrain.
pub trait DrawSource {
    /// Returns an integer drawn uniformly from `[low, high)`.
    fn draw(&mut self, low: i32, high: i32) -> i32;

    /// Returns an index drawn uniformly from `[0, bound)`.
    ///
    /// The default goes through [`DrawSource::draw`] and so only reaches
    /// indices below `i32::MAX`; larger bounds are clamped.
    ///
    /// # Panics
    /// Panics if `bound` is zero.
    fn draw_index(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "draw_index bound must be > 0");
        let high = i32::try_from(bound).unwrap_or(i32::MAX);
        self.draw(0, high) as usize
    }
}

impl DrawSource for ChaCha8Rng {
    fn draw(&mut self, low: i32, high: i32) -> i32 {
        self.random_range(low..high)
    }

    fn draw_index(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }
}

impl<D: DrawSource + ?Sized> DrawSource for &mut D {
    fn draw(&mut self, low: i32, high: i32) -> i32 {
        (**self).draw(low, high)
    }

    fn draw_index(&mut self, bound: usize) -> usize {
        (**self).draw_index(bound)
    }
}

#[cfg(test)]
pub(crate) mod scripted {
    use super::DrawSource;
    use std::collections::VecDeque;

    /// Replays a fixed list of draws, asserting each lies in the requested range.
    #[derive(Debug, Default)]
    pub struct ScriptedDraws {
        values: VecDeque<i32>,
        pub requests: Vec<(i32, i32)>,
    }

    impl ScriptedDraws {
        pub fn new(values: impl IntoIterator<Item = i32>) -> Self {
            Self {
                values: values.into_iter().collect(),
                requests: Vec::new(),
            }
        }

        pub fn remaining(&self) -> usize {
            self.values.len()
        }
    }

    impl DrawSource for ScriptedDraws {
        fn draw(&mut self, low: i32, high: i32) -> i32 {
            self.requests.push((low, high));
            let value = self.values.pop_front().expect("draw script exhausted");
            assert!(
                (low..high).contains(&value),
                "scripted draw {} outside [{}, {})",
                value,
                low,
                high
            );
            value
        }
    }
}
