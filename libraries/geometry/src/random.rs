use rand::{
    distributions::{Distribution, Standard},
    thread_rng, Rng,
};

use crate::Vector3;

/// Every component is drawn uniformly from `[0, 1)`.
impl Distribution<Vector3> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vector3 {
        Vector3::new(rng.gen(), rng.gen(), rng.gen())
    }
}

/// A vector with components in `[0, 1)` taken from the thread-local generator.
#[must_use]
pub fn random_vector3() -> Vector3 {
    thread_rng().gen()
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn in_unit_range(vector: Vector3) -> bool {
        vector
            .to_array()
            .iter()
            .all(|component| (0.0..1.0).contains(component))
    }

    #[test]
    fn components_stay_in_unit_range() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!((0..1000).all(|_| in_unit_range(Vector3::random(&mut rng))));
        assert!((0..100).all(|_| in_unit_range(random_vector3())));
    }

    #[test]
    fn seeded_generators_repeat() {
        let first = Vector3::random(&mut StdRng::seed_from_u64(42));
        let second = Vector3::random(&mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }
}
