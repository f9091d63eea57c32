use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::tier::Tier;

/// What to generate and where.
///
/// The default writes all seven tiers into the current working directory
/// from an entropy-seeded generator. `seed` exists for tests that need
/// reproducible output; the binaries never set it.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub out_dir: PathBuf,
    pub tiers: Vec<Tier>,
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            out_dir: PathBuf::from("."),
            tiers: Tier::all().collect(),
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
