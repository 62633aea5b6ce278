// Copyright (c) The lopt Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use color_eyre::{eyre::eyre, Result};
use proptest::{
    strategy::{Strategy, ValueTree},
    test_runner::{Config, RngAlgorithm, TestRng, TestRunner},
};
use std::hash::{Hash, Hasher};
use twox_hash::XxHash64;

/// Generates values deterministically from a seed.
pub struct ValueGenerator {
    runner: TestRunner,
}

impl ValueGenerator {
    /// Creates a generator whose output depends only on `seed`.
    pub fn from_seed(seed: impl Hash) -> Self {
        let mut hasher = XxHash64::default();
        seed.hash(&mut hasher);
        let hash = hasher.finish();

        // ChaCha wants 32 bytes of seed.
        let mut seed_bytes = [0u8; 32];
        for (ix, chunk) in seed_bytes.chunks_exact_mut(8).enumerate() {
            chunk.copy_from_slice(&hash.rotate_left(16 * ix as u32).to_le_bytes());
        }

        let rng = TestRng::from_seed(RngAlgorithm::ChaCha, &seed_bytes);
        Self {
            runner: TestRunner::new_with_rng(Config::default(), rng),
        }
    }

    /// Forks off a generator that doesn't advance this one further than a single draw.
    pub fn partial_clone(&mut self) -> Self {
        Self {
            runner: TestRunner::new_with_rng(self.runner.config().clone(), self.runner.new_rng()),
        }
    }

    pub fn generate<S: Strategy>(&mut self, strategy: S) -> Result<S::Value> {
        let tree = strategy
            .new_tree(&mut self.runner)
            .map_err(|reason| eyre!("failed to generate value: {}", reason))?;
        Ok(tree.current())
    }
}
