use lanekit::lane::Lane;
use lanekit::vector::mask::Mask;
use lanekit::vector::{SupportedWidth, Vector, Width};
use rand::distributions::{Distribution, Standard};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Creates a new [`Vector`] from random lanes with a pre-set seed.
pub fn create_vector_with_seed<T, const N: usize>(seed: u64) -> Vector<T, N>
where
    T: Lane,
    Standard: Distribution<T>,
    Width<N>: SupportedWidth,
{
    let mut rng = StdRng::seed_from_u64(seed);
    Vector::from_array(std::array::from_fn(|_| rng.sample(Standard)))
}

/// Creates a batch of random (but fixed-seeded) vectors
pub fn create_vectors_with_seed<T, const N: usize>(count: usize, seed: u64) -> Vec<Vector<T, N>>
where
    T: Lane,
    Standard: Distribution<T>,
    Width<N>: SupportedWidth,
{
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Vector::from_array(std::array::from_fn(|_| rng.sample(Standard))))
        .collect()
}

/// Creates a random (but fixed-seeded) mask of a given true density
pub fn create_mask_with_seed<const N: usize>(true_density: f32, seed: u64) -> Mask<N>
where
    Width<N>: SupportedWidth,
{
    let mut rng = StdRng::seed_from_u64(seed);
    Mask::from_array(std::array::from_fn(|_| {
        rng.sample::<f32, _>(Standard) < true_density
    }))
}
