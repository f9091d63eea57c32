use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use tracing::info;

use crate::config::GeneratorConfig;
use crate::error::{Error, Result};
use crate::tier::Tier;

const WRITE_BUFFER: usize = 1 << 20;

/// Writes `count` values drawn uniformly from `[0, count]` as decimal text
/// separated by single spaces. Nothing follows the last value.
pub fn write_sequence<W: Write, R: Rng + ?Sized>(
    writer: &mut W,
    rng: &mut R,
    count: u64,
) -> io::Result<()> {
    // Both ends are reachable: count + 1 outcomes.
    let uniform = Uniform::new_inclusive(0, count);

    for i in 0..count {
        if i > 0 {
            writer.write_all(b" ")?;
        }
        write!(writer, "{}", uniform.sample(rng))?;
    }

    Ok(())
}

/// Creates (or truncates) `dir/numbers_<count>.txt` and fills it.
pub fn generate_tier<R: Rng + ?Sized>(dir: &Path, tier: Tier, rng: &mut R) -> Result<PathBuf> {
    let path = dir.join(tier.file_name());
    create_and_fill(|path: &Path| File::create(path), &path, tier, rng)?;
    Ok(path)
}

/// Runs every configured tier in order. The first failure stops the run;
/// files from earlier tiers are left in place.
pub fn generate(config: &GeneratorConfig) -> Result<Vec<PathBuf>> {
    generate_with(config, |path: &Path| File::create(path))
}

/// [`generate`] with the sink for each tier opened by `create` instead of
/// [`File::create`].
pub fn generate_with<W, F>(config: &GeneratorConfig, mut create: F) -> Result<Vec<PathBuf>>
where
    W: Write,
    F: FnMut(&Path) -> io::Result<W>,
{
    let mut rng = config.rng();
    let mut written = Vec::with_capacity(config.tiers.len());

    for &tier in &config.tiers {
        let now = Instant::now();
        let path = config.out_dir.join(tier.file_name());
        create_and_fill(&mut create, &path, tier, &mut rng)?;
        info!(
            count = tier.count(),
            path = %path.display(),
            "generated in {:.2?}",
            now.elapsed()
        );
        written.push(path);
    }

    Ok(written)
}

fn create_and_fill<W, F, R>(mut create: F, path: &Path, tier: Tier, rng: &mut R) -> Result<()>
where
    W: Write,
    F: FnMut(&Path) -> io::Result<W>,
    R: Rng + ?Sized,
{
    let sink = create(path).map_err(|source| Error::Create {
        path: path.to_path_buf(),
        source,
    })?;
    fill(sink, path, tier, rng)
}

/// Buffers `sink`, writes the tier's values into it and flushes.
fn fill<W: Write, R: Rng + ?Sized>(sink: W, path: &Path, tier: Tier, rng: &mut R) -> Result<()> {
    let mut writer = BufWriter::with_capacity(WRITE_BUFFER, sink);

    // Flush here rather than on drop so a failed final write is reported.
    write_sequence(&mut writer, rng, tier.count())
        .and_then(|()| writer.flush())
        .map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })
}
