//! # Broadcast Flows
//!
//! Encoded particle banks moving between the ranks of an in-process group.
//!
//! ## Flows Tested:
//!
//! 1. **Root → all ranks**: every rank ends with the root's particles
//! 2. **Rotating roots**: successive collectives stay in step
//! 3. **Serial fallback**: a single-rank group behaves like a no-op

#[cfg(test)]
mod tests {
    use crate::fixtures::{particle_family, random_bank, summary, Particle, Photon};
    use bricks_comm::{broadcast_objects, comm_equal, Communicator, LocalCommGroup, SerialComm};
    use bricks_core::BricksError;
    use bricks_registry::AbstractHandle;
    use bricks_serializer::IndirectSerializer;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Duration;
    use tokio::time::timeout;

    type Summary = Vec<Option<(String, f64, f64)>>;

    /// Run one bank broadcast from `root` on a group of `size` ranks.
    async fn broadcast_bank(size: usize, root: usize, len: usize) -> Vec<Summary> {
        let comms = LocalCommGroup::new(size).unwrap().into_communicators();

        let tasks: Vec<_> = comms
            .into_iter()
            .map(|comm| {
                tokio::spawn(async move {
                    // Each rank builds its own family in the same order
                    let serializer = IndirectSerializer::new(particle_family());
                    let mut bank: Vec<AbstractHandle<dyn Particle>> = if comm.rank() == root {
                        random_bank(len, &mut StdRng::seed_from_u64(42))
                    } else {
                        (0..len).map(|_| AbstractHandle::empty()).collect()
                    };

                    broadcast_objects(&comm, root, &serializer, &mut bank).await?;
                    Ok::<_, BricksError>(bank.iter().map(summary).collect::<Summary>())
                })
            })
            .collect();

        let mut results = Vec::new();
        for task in tasks {
            let summary = timeout(Duration::from_secs(10), task)
                .await
                .expect("broadcast timed out")
                .expect("rank task panicked")
                .expect("broadcast failed");
            results.push(summary);
        }
        results
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_every_rank_receives_root_bank() {
        let results = broadcast_bank(4, 0, 50).await;
        let expected: Summary = random_bank(50, &mut StdRng::seed_from_u64(42))
            .iter()
            .map(summary)
            .collect();

        for (rank, bank) in results.iter().enumerate() {
            assert_eq!(bank, &expected, "Rank {rank} diverged from root");
        }
    }

    #[tokio::test]
    async fn test_non_zero_root() {
        let results = broadcast_bank(3, 2, 8).await;
        assert!(results.windows(2).all(|w| w[0] == w[1]));
    }

    #[tokio::test]
    async fn test_rotating_roots_stay_in_step() {
        let comms = LocalCommGroup::new(3).unwrap().into_communicators();

        let tasks: Vec<_> = comms
            .into_iter()
            .map(|comm| {
                tokio::spawn(async move {
                    let serializer = IndirectSerializer::new(particle_family());
                    let mut energies = Vec::new();

                    for root in 0..comm.size() {
                        let mut bank: Vec<AbstractHandle<dyn Particle>> = if comm.rank() == root {
                            vec![AbstractHandle::bound(Box::new(Photon {
                                energy: root as f64,
                            }))]
                        } else {
                            vec![AbstractHandle::empty()]
                        };
                        broadcast_objects(&comm, root, &serializer, &mut bank).await?;
                        energies.push(bank[0].get().map(|p| p.energy()));
                    }
                    Ok::<_, BricksError>(energies)
                })
            })
            .collect();

        for task in tasks {
            let energies = timeout(Duration::from_secs(10), task)
                .await
                .unwrap()
                .unwrap()
                .unwrap();
            assert_eq!(energies, vec![Some(0.0), Some(1.0), Some(2.0)]);
        }
    }

    #[tokio::test]
    async fn test_serial_group_of_one() {
        let serializer = IndirectSerializer::new(particle_family());
        let mut bank = random_bank(5, &mut StdRng::seed_from_u64(3));
        let before: Summary = bank.iter().map(summary).collect();

        broadcast_objects(&SerialComm, 0, &serializer, &mut bank)
            .await
            .unwrap();

        let after: Summary = bank.iter().map(summary).collect();
        assert_eq!(before, after);

        let single = LocalCommGroup::new(1).unwrap().into_communicators();
        assert!(comm_equal(&SerialComm, &single[0]));
    }

    #[tokio::test]
    async fn test_mismatched_bank_length_fails_on_receiver() {
        let comms = LocalCommGroup::new(2).unwrap().into_communicators();

        let tasks: Vec<_> = comms
            .into_iter()
            .map(|comm| {
                tokio::spawn(async move {
                    let serializer = IndirectSerializer::new(particle_family());
                    // Receiver expects one particle fewer than the root sends
                    let len = if comm.rank() == 0 { 3 } else { 2 };
                    let mut bank: Vec<AbstractHandle<dyn Particle>> =
                        (0..len).map(|_| AbstractHandle::empty()).collect();
                    broadcast_objects(&comm, 0, &serializer, &mut bank).await
                })
            })
            .collect();

        let mut outcomes = Vec::new();
        for task in tasks {
            outcomes.push(timeout(Duration::from_secs(10), task).await.unwrap().unwrap());
        }

        assert!(outcomes[0].is_ok(), "Root only encodes");
        if bricks_core::DBC_ENABLED {
            assert!(outcomes[1].as_ref().is_err_and(|e| e.is_contract()));
        }
    }
}
