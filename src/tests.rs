use crate::prelude::*;
use crate::symmetry::{apply, CUBIC_SYMMETRIES, SQUARE_SYMMETRIES};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rod_then_pivot_2d() {
        init_logger();
        let mut rng = StdRng::seed_from_u64(2024);
        let walk = rod(200, 2).unwrap();
        let out = pivot(walk.clone(), 2_000, 2, &mut rng).unwrap();

        assert_eq!(out.len(), walk.len());
        assert!(out.is_self_avoiding());
        assert!(out.is_lattice_path());
        // the first point is never moved by any pivot
        assert_eq!(out.point(0), Some(&[0, 0][..]));
        assert_ne!(out, walk, "2000 trials on a 200-rod should accept at least one move");
    }

    #[test]
    fn test_rod_then_pivot_3d() {
        init_logger();
        let mut rng = StdRng::seed_from_u64(77);
        let walk = rod(120, 3).unwrap();
        let out = pivot(walk, 1_500, 3, &mut rng).unwrap();

        assert_eq!(out.len(), 120);
        assert_eq!(out.dimension(), Dimension::Three);
        assert!(out.is_self_avoiding());
        assert!(out.is_lattice_path());
    }

    #[test]
    fn test_same_seed_same_walk() {
        let walk = rod(64, 2).unwrap();
        let a = pivot(walk.clone(), 400, 2, &mut StdRng::seed_from_u64(5)).unwrap();
        let b = pivot(walk, 400, 2, &mut StdRng::seed_from_u64(5)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_chained_calls_match_single_run() {
        // iterations count proposals, so 100 + 100 trials == 200 trials
        let walk = rod(32, 3).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let once = pivot(walk.clone(), 200, 3, &mut rng).unwrap();

        let mut rng = StdRng::seed_from_u64(11);
        let half = pivot(walk, 100, 3, &mut rng).unwrap();
        let twice = pivot(half, 100, 3, &mut rng).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_independent_chains_on_threads() {
        init_logger();
        let handles: Vec<_> = (0..4u64)
            .map(|seed| {
                std::thread::spawn(move || {
                    let mut rng = StdRng::seed_from_u64(seed);
                    let walk = rod(50, 2).unwrap();
                    pivot(walk, 500, 2, &mut rng).unwrap()
                })
            })
            .collect();

        for handle in handles {
            let walk = handle.join().unwrap();
            assert_eq!(walk.len(), 50);
            assert!(walk.is_self_avoiding());
        }
    }

    #[test]
    fn test_every_2d_move_on_u_shape() {
        // Exhaustive over (index, element): outcome must match a direct
        // pairwise-distinct check on the candidate, and rejections leave the walk intact.
        let base = Walk::from_points(&[[0, 0], [1, 0], [1, 1], [0, 1], [-1, 1], [-1, 0]]).unwrap();
        let mut sampler = PivotSampler::new(StdRng::seed_from_u64(0));

        for index in 0..base.len() - 1 {
            for (element, m) in SQUARE_SYMMETRIES.iter().enumerate() {
                let pivot_point = [base.as_slice()[index * 2], base.as_slice()[index * 2 + 1]];
                let candidate: Vec<[i64; 2]> = base
                    .points()
                    .enumerate()
                    .map(|(j, p)| {
                        let p = [p[0], p[1]];
                        if j <= index {
                            p
                        } else {
                            let rel = [p[0] - pivot_point[0], p[1] - pivot_point[1]];
                            let r = apply(m, rel);
                            [r[0] + pivot_point[0], r[1] + pivot_point[1]]
                        }
                    })
                    .collect();
                let expected_ok = Walk::from_points(&candidate).is_ok();

                let mut walk = base.clone();
                let outcome = sampler.apply_move(&mut walk, PivotMove { index, element }).unwrap();
                if expected_ok {
                    assert_eq!(outcome, TrialOutcome::Accepted, "index {} element {}", index, element);
                    assert_eq!(walk, Walk::from_points(&candidate).unwrap());
                } else {
                    assert_eq!(outcome, TrialOutcome::Rejected, "index {} element {}", index, element);
                    assert_eq!(walk, base);
                }
            }
        }
    }

    #[test]
    fn test_3d_reflection_move() {
        // reflect through the xy-plane about (1,0,0): (1,0,1) -> (1,0,-1)
        let mut walk = Walk::from_points(&[[0, 0, 0], [1, 0, 0], [1, 0, 1]]).unwrap();
        let mut sampler = PivotSampler::new(StdRng::seed_from_u64(0));
        let outcome = sampler
            .apply_move(&mut walk, PivotMove { index: 1, element: 10 })
            .unwrap();
        assert_eq!(outcome, TrialOutcome::Accepted);
        assert_eq!(walk.as_slice(), &[0, 0, 0, 1, 0, 0, 1, 0, -1]);
        assert_eq!(apply(&CUBIC_SYMMETRIES[10], [0, 0, 1]), [0, 0, -1]);
    }

    #[test]
    fn test_full_table_sampler() {
        let mut walk = rod(40, 3).unwrap();
        let mut sampler = PivotSampler::with_table(StdRng::seed_from_u64(3), SymmetryTable::Full);
        assert_eq!(sampler.table(), SymmetryTable::Full);
        let run = sampler.run(&mut walk, 1_000);
        assert_eq!(run.proposed, 1_000);
        assert!(walk.is_self_avoiding());
        assert!(walk.is_lattice_path());

        // element 47 exists only in the full cubic table
        let mut walk = rod(5, 3).unwrap();
        assert!(sampler.apply_move(&mut walk, PivotMove { index: 0, element: 47 }).is_ok());
        let mut standard = PivotSampler::new(StdRng::seed_from_u64(3));
        assert!(matches!(
            standard.apply_move(&mut walk, PivotMove { index: 0, element: 47 }),
            Err(PivotError::InvalidMove { group_size: 13, .. })
        ));
    }

    #[test]
    fn test_flat_buffer_view() {
        let walk = rod(3, 2).unwrap();
        let coords = walk.clone().into_coords();
        assert_eq!(coords, vec![0, 0, 1, 0, 2, 0]);
        assert_eq!(Walk::from_coords(2, coords).unwrap(), walk);
    }
}
