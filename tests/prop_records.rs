use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use squadgen::config::GeneratorConfig;
use squadgen::record::Position;
use squadgen::sampler::{CategoricalSampler, RecordSampler};

fn default_sampler() -> (GeneratorConfig, RecordSampler) {
    let mut cfg = GeneratorConfig::default();
    cfg.output_directory = std::env::temp_dir();
    let sampler = RecordSampler::from_config(&cfg).unwrap();
    (cfg, sampler)
}

proptest! {
    #![proptest_config(proptest::test_runner::Config {
        failure_persistence: Some(Box::new(proptest::test_runner::FileFailurePersistence::WithSource("proptest-regressions"))),
        .. proptest::test_runner::Config::default()
    })]

    #[test]
    fn prop_record_invariants_hold_for_any_seed(seed in any::<u64>()) {
        let (cfg, sampler) = default_sampler();
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..32 {
            let rec = sampler.sample(&mut rng);
            let clubs = cfg.country_club_map.get(&rec.country).unwrap();
            prop_assert!(clubs.contains(&rec.club));
            prop_assert!((1..=150).contains(&rec.matches));
            let ok = match rec.position {
                Position::Goalkeeper => (-50..=0).contains(&rec.goals),
                Position::Defender => (0..=20).contains(&rec.goals),
                Position::Midfielder => (5..=30).contains(&rec.goals),
                Position::Forward => (10..=50).contains(&rec.goals),
            };
            prop_assert!(ok, "goals {} out of range for {}", rec.goals, rec.position.key());
        }
    }

    #[test]
    fn prop_zero_weight_category_is_never_drawn(seed in any::<u64>(), w in 0.01f64..10.0) {
        let sampler = CategoricalSampler::new(&[("never", 0.0), ("a", w), ("b", w * 2.0)]).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..64 {
            prop_assert_ne!(sampler.sample(&mut rng), "never");
        }
    }

    #[test]
    fn prop_same_seed_same_records(seed in any::<u64>()) {
        let (_, sampler) = default_sampler();
        let mut a = StdRng::seed_from_u64(seed);
        let mut b = StdRng::seed_from_u64(seed);
        for _ in 0..8 {
            prop_assert_eq!(sampler.sample(&mut a), sampler.sample(&mut b));
        }
    }
}
