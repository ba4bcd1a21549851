//! Mass generation: many independent items from one [`MassGenConfig`].
//!
//! Items are independent, so the batch can be split across worker threads.
//! Each worker owns a contiguous run of item ordinals, a random stream
//! seeded from the batch seed plus its worker index, and a disjoint slice
//! of the display token space. Names therefore stay unique without any
//! shared state between workers.

use crate::error::GeneratorError;
use crate::ids::{partition_token_space, uuid_from_rng, TokenAllocator};
use crate::pipeline;
use crate::synthesizer::ItemSynthesizer;
use demgen_core::{GeneratedItem, MassGenConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;
use std::time::Instant;
use tracing::{debug, info};

/// Generates a batch of items from a mass configuration.
pub struct BatchGenerator {
    config: MassGenConfig,
    seed: u64,
}

impl BatchGenerator {
    /// Without a seed, one is drawn from OS entropy and reported by [`Self::seed`].
    pub fn new(config: MassGenConfig, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| StdRng::from_entropy().gen());
        Self { config, seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &MassGenConfig {
        &self.config
    }

    /// Generate every item on the calling thread.
    pub fn generate(&self) -> Result<Vec<GeneratedItem>, GeneratorError> {
        self.generate_parallel(1)
    }

    /// Generate every item across up to `workers` threads.
    ///
    /// Output order follows item ordinals regardless of worker count. A
    /// single worker produces exactly the sequential result.
    pub fn generate_parallel(&self, workers: usize) -> Result<Vec<GeneratedItem>, GeneratorError> {
        let synthesizer = ItemSynthesizer::new(&self.config)?;
        let item_count = self.config.item_count as usize;
        let chunks = partition_items(item_count, workers);
        let token_ranges = partition_token_space(chunks.len());
        let start = Instant::now();

        info!(
            "Generating {} items with {} worker(s) (seed={})",
            item_count,
            chunks.len(),
            self.seed
        );

        let results: Vec<Result<Vec<GeneratedItem>, GeneratorError>> = std::thread::scope(|scope| {
            let handles: Vec<_> = chunks
                .into_iter()
                .zip(token_ranges)
                .enumerate()
                .map(|(worker, (items, tokens))| {
                    let seed = self.seed.wrapping_add(worker as u64);
                    let synthesizer = &synthesizer;
                    scope.spawn(move || run_worker(synthesizer, items, tokens, seed))
                })
                .collect();

            handles
                .into_iter()
                .enumerate()
                .map(|(worker, handle)| {
                    handle
                        .join()
                        .unwrap_or(Err(GeneratorError::WorkerPanicked(worker)))
                })
                .collect()
        });

        let mut items = Vec::with_capacity(item_count);
        for result in results {
            items.extend(result?);
        }

        let elapsed = start.elapsed();
        info!(
            "Generated {} items in {:.2}s",
            items.len(),
            elapsed.as_secs_f64()
        );

        Ok(items)
    }
}

fn run_worker(
    synthesizer: &ItemSynthesizer<'_>,
    items: Range<usize>,
    tokens: Range<u32>,
    seed: u64,
) -> Result<Vec<GeneratedItem>, GeneratorError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut allocator = TokenAllocator::new(tokens);
    let mut generated = Vec::with_capacity(items.len());

    debug!("Worker generating items {}..{} (seed={})", items.start, items.end, seed);

    for ordinal in items {
        let config = synthesizer.synthesize(&mut rng)?;
        let data = pipeline::generate(&config, &mut rng)?;
        let name = allocator.allocate(ordinal, &mut rng);
        let id = uuid_from_rng(&mut rng);

        generated.push(GeneratedItem {
            id,
            name,
            config,
            data,
        });
    }

    Ok(generated)
}

/// Split `0..count` into at most `workers` contiguous non-empty ranges.
///
/// Always returns at least one range, possibly empty when `count` is zero.
pub fn partition_items(count: usize, workers: usize) -> Vec<Range<usize>> {
    let workers = workers.clamp(1, count.max(1));
    let base = count / workers;
    let extra = count % workers;

    let mut ranges = Vec::with_capacity(workers);
    let mut start = 0;
    for i in 0..workers {
        let len = base + usize::from(i < extra);
        ranges.push(start..start + len);
        start += len;
    }
    ranges
}
