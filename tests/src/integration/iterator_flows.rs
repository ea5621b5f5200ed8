//! # Iterator Flows
//!
//! Filtered iteration over decoded particle banks.
//!
//! ## Flows Tested:
//!
//! 1. **Decode → Filter**: predicates over handles agree with a manual count
//! 2. **Composition**: `and`, `or` and `and_not` behave as set operations
//! 3. **Stepping**: explicit `advance`/`get` matches `Iterator::next`

#[cfg(test)]
mod tests {
    use crate::fixtures::{particle_family, random_bank, Particle};
    use bricks_iterator::{AbstractIterator, Predicate, PredicateComposition};
    use bricks_registry::AbstractHandle;
    use bricks_serializer::{IndirectSerializer, ObjectSerializer};
    use bricks_telemetry::{init_telemetry, TelemetryConfig};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    type Handle = AbstractHandle<dyn Particle>;

    fn decoded_bank(seed: u64, len: usize) -> Vec<Handle> {
        // Only the first caller in the process installs the subscriber
        let _ = init_telemetry(TelemetryConfig::default().with_log_level("warn"));

        let serializer = IndirectSerializer::new(particle_family());
        let bank = random_bank(len, &mut StdRng::seed_from_u64(seed));
        let bytes = serializer.encode_to_vec(&bank).unwrap();
        serializer.decode_to_vec(&bytes).unwrap()
    }

    fn bound() -> Predicate<Handle> {
        Predicate::new(|h: &Handle| h.has_implementation())
    }

    fn of_kind(key: &'static str) -> Predicate<Handle> {
        Predicate::new(move |h: &Handle| h.get().is_some_and(|p| p.object_type() == key))
    }

    fn hot(threshold: f64) -> Predicate<Handle> {
        Predicate::new(move |h: &Handle| h.get().is_some_and(|p| p.energy() > threshold))
    }

    // =============================================================================
    // DECODE → FILTER
    // =============================================================================

    #[test]
    fn test_bound_particles_match_manual_count() {
        let bank = decoded_bank(5, 120);
        let it = AbstractIterator::with_predicate(&bank, bound());

        let expected = bank.iter().filter(|h| h.has_implementation()).count();
        assert_eq!(it.size(), expected);
        assert!(it.clone().all(|h| h.has_implementation()));
    }

    #[test]
    fn test_unfiltered_iterator_visits_gaps_too() {
        let bank = decoded_bank(6, 40);
        let it = AbstractIterator::new(&bank);

        assert_eq!(it.size(), bank.len());
    }

    // =============================================================================
    // COMPOSITION
    // =============================================================================

    #[test]
    fn test_hot_charged_particles() {
        let bank = decoded_bank(8, 150);
        let charged = of_kind("electron");
        let filter = PredicateComposition::and(&hot(10.0), &charged);

        let expected = bank
            .iter()
            .filter_map(|h| h.get())
            .filter(|p| p.object_type() == "electron" && p.energy() > 10.0)
            .count();
        assert_eq!(AbstractIterator::with_predicate(&bank, filter).size(), expected);
    }

    #[test]
    fn test_union_of_kinds_covers_every_bound_handle() {
        let bank = decoded_bank(9, 100);
        let any_kind = of_kind("photon")
            .or(&of_kind("neutron"))
            .or(&of_kind("electron"));

        let by_kind = AbstractIterator::with_predicate(&bank, any_kind);
        let by_binding = AbstractIterator::with_predicate(&bank, bound());
        assert_eq!(by_kind.size(), by_binding.size());
        assert!(by_kind.zip(by_binding).all(|(a, b)| std::ptr::eq(a, b)));
    }

    #[test]
    fn test_bound_but_not_photon() {
        let bank = decoded_bank(10, 100);
        let filter = bound().and_not(&of_kind("photon"));

        let photons = AbstractIterator::with_predicate(&bank, of_kind("photon")).size();
        let bound_count = AbstractIterator::with_predicate(&bank, bound()).size();
        let it = AbstractIterator::with_predicate(&bank, filter);

        assert_eq!(it.size(), bound_count - photons);
        assert!(it
            .filter_map(|h| h.get())
            .all(|p| p.object_type() != "photon"));
    }

    // =============================================================================
    // STEPPING
    // =============================================================================

    #[test]
    fn test_explicit_stepping_matches_next() {
        let bank = decoded_bank(12, 60);
        let mut it = AbstractIterator::with_predicate(&bank, hot(5.0));
        let collected: Vec<*const Handle> = it.clone().map(|h| h as *const Handle).collect();

        let mut stepped = Vec::new();
        while it != it.end() {
            stepped.push(it.get().unwrap() as *const Handle);
            it.advance().unwrap();
        }

        assert_eq!(stepped, collected);
        assert!(it.is_end());
        assert_eq!(it.position(), bank.len());
    }

    #[test]
    fn test_begin_restarts_filtered_walk() {
        let bank = decoded_bank(13, 30);
        let mut it = AbstractIterator::with_predicate(&bank, bound());
        let first = it.clone();

        let _ = it.next();
        assert_eq!(it.begin(), first);
    }
}
