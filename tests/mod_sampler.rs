use rand::SeedableRng;
use rand::rngs::StdRng;
use squadgen::config::GeneratorConfig;
use squadgen::record::Position;
use squadgen::sampler::{CategoricalSampler, RecordSampler};

fn default_sampler() -> RecordSampler {
    let mut cfg = GeneratorConfig::default();
    cfg.output_directory = std::env::temp_dir();
    RecordSampler::from_config(&cfg).unwrap()
}

#[test]
fn test_club_always_belongs_to_country() {
    let cfg = GeneratorConfig::default();
    let sampler = default_sampler();
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..10_000 {
        let rec = sampler.sample(&mut rng);
        let clubs = cfg.country_club_map.get(&rec.country).expect("unknown country");
        assert!(clubs.contains(&rec.club), "{} not a club of {}", rec.club, rec.country);
    }
}

#[test]
fn test_numeric_ranges_hold() {
    let sampler = default_sampler();
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..10_000 {
        let rec = sampler.sample(&mut rng);
        assert!((1..=150).contains(&rec.matches));
        let (lo, hi) = match rec.position {
            Position::Goalkeeper => (-50, 0),
            Position::Defender => (0, 20),
            Position::Midfielder => (5, 30),
            Position::Forward => (10, 50),
        };
        assert!(
            (lo..=hi).contains(&rec.goals),
            "goals {} out of [{lo}, {hi}] for {}",
            rec.goals,
            rec.position.key()
        );
    }
}

#[test]
fn test_names_are_nonempty() {
    let sampler = default_sampler();
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..100 {
        let rec = sampler.sample(&mut rng);
        assert!(!rec.full_name.trim().is_empty());
    }
}

// Chi-square goodness of fit of drawn positions against the configured
// 0.10/0.30/0.30/0.30 weights; 16.27 is the 0.999 quantile for 3 degrees of
// freedom, so a correct sampler fails this roughly once in a thousand seeds
// and the fixed seed keeps it deterministic.
#[test]
fn test_position_distribution_matches_weights() {
    let n = 50_000usize;
    let sampler = default_sampler();
    let mut rng = StdRng::seed_from_u64(4);
    let mut counts = [0usize; 4];
    for _ in 0..n {
        let rec = sampler.sample(&mut rng);
        let idx = Position::ALL.iter().position(|p| *p == rec.position).unwrap();
        counts[idx] += 1;
    }
    let weights = [0.10, 0.30, 0.30, 0.30];
    let chi2: f64 = counts
        .iter()
        .zip(weights.iter())
        .map(|(&observed, &w)| {
            let expected = w * n as f64;
            let d = observed as f64 - expected;
            d * d / expected
        })
        .sum();
    assert!(chi2 < 16.27, "chi-square statistic {chi2} too large; counts {counts:?}");
}

#[test]
fn test_seeded_runs_are_identical() {
    let sampler = default_sampler();
    let mut a = StdRng::seed_from_u64(7);
    let mut b = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        assert_eq!(sampler.sample(&mut a), sampler.sample(&mut b));
    }
}

#[test]
fn test_categorical_never_draws_zero_weight() {
    let sampler =
        CategoricalSampler::new(&[("a", 0.0), ("b", 0.5), ("c", 0.0), ("d", 0.5)]).unwrap();
    let mut rng = StdRng::seed_from_u64(8);
    for _ in 0..5_000 {
        let v = sampler.sample(&mut rng);
        assert!(v == "b" || v == "d");
    }
}

#[test]
fn test_categorical_rejects_zero_mass() {
    assert!(CategoricalSampler::new(&[("a", 0.0), ("b", 0.0)]).is_err());
}

#[test]
fn test_categorical_single_category() {
    let sampler = CategoricalSampler::new(&[(Position::Forward, 1.0)]).unwrap();
    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..100 {
        assert_eq!(sampler.sample(&mut rng), Position::Forward);
    }
}
