use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg64;

/// Deterministic RNG factory for an event stream.
///
/// Implementation detail:
/// - Uses PCG 64-bit generator (rand_pcg::Pcg64) for reproducible sequences.
/// - Returned RNG is deterministic and reproducible across runs when seeds are equal.
/// - The value is owned by exactly one stream instance; replaying a stream means
///   calling this again with the same seed, never rewinding a shared generator.
#[inline]
pub fn rng_for_stream(seed: u64) -> impl Rng {
    Pcg64::seed_from_u64(seed)
}
