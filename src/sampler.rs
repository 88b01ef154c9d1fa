use fake::Fake;
use fake::faker::name::en::Name;
use rand::Rng;

use crate::config::{GeneratorConfig, GoalRanges, ValueRange};
use crate::errors::GenError;
use crate::record::{PlayerRecord, Position};

/// Inverse-CDF lookup over cumulative category weights. One uniform draw in
/// [0, 1) selects the first bucket whose cumulative weight covers it, so a
/// zero-weight category is never selected.
pub struct CategoricalSampler<T: Copy> {
    cumulative: Vec<(f64, T)>,
}

impl<T: Copy> CategoricalSampler<T> {
    /// Build the cumulative table in the given category order. Weights are
    /// normalized by their total, so callers validate the exact sum.
    ///
    /// # Errors
    /// Returns an error on a negative weight or zero total mass.
    pub fn new(weighted: &[(T, f64)]) -> Result<Self, GenError> {
        let mut total = 0.0;
        for (_, w) in weighted {
            if *w < 0.0 || !w.is_finite() {
                return Err(GenError::InvalidWeight(*w));
            }
            total += w;
        }
        if total <= 0.0 {
            return Err(GenError::ZeroWeightMass);
        }
        let mut acc = 0.0;
        let cumulative = weighted
            .iter()
            .map(|(value, w)| {
                acc += w / total;
                (acc, *value)
            })
            .collect();
        Ok(Self { cumulative })
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        let u: f64 = rng.random_range(0.0..1.0);
        for (cum, value) in &self.cumulative {
            if u < *cum {
                return *value;
            }
        }
        // Rounding in the cumulative sums can leave the last bucket short of 1.0.
        self.cumulative[self.cumulative.len() - 1].1
    }
}

/// Draws whole `PlayerRecord`s against a fixed taxonomy. Works with any
/// `Rng`, so a seeded `StdRng` reproduces an entire run.
pub struct RecordSampler {
    countries: Vec<String>,
    clubs: Vec<Vec<String>>,
    positions: CategoricalSampler<Position>,
    goal_ranges: GoalRanges,
    matches_range: ValueRange,
}

impl RecordSampler {
    /// # Errors
    /// Returns the first configuration invariant the config violates.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self, GenError> {
        config.validate()?;
        let mut countries = Vec::with_capacity(config.country_club_map.len());
        let mut clubs = Vec::with_capacity(config.country_club_map.len());
        for (country, club_list) in &config.country_club_map {
            countries.push(country.clone());
            clubs.push(club_list.clone());
        }
        let weighted: Vec<(Position, f64)> =
            Position::ALL.iter().map(|p| (*p, config.position_weights.get(*p))).collect();
        Ok(Self {
            countries,
            clubs,
            positions: CategoricalSampler::new(&weighted)?,
            goal_ranges: config.goal_ranges,
            matches_range: config.matches_range,
        })
    }

    /// Draw one record: uniform country, generated name, uniform club within
    /// that country, weighted position, then matches and position-conditioned
    /// goals. The draw order is fixed so seeded runs stay reproducible.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PlayerRecord {
        let idx = rng.random_range(0..self.countries.len());
        let country = self.countries[idx].clone();
        let full_name: String = Name().fake_with_rng(rng);
        let club_list = &self.clubs[idx];
        let club = club_list[rng.random_range(0..club_list.len())].clone();
        let position = self.positions.sample(rng);
        let matches = draw(self.matches_range, rng) as u32;
        let goals = draw(self.goal_ranges.get(position), rng);
        PlayerRecord { country, full_name, club, position, matches, goals }
    }
}

fn draw<R: Rng + ?Sized>(range: ValueRange, rng: &mut R) -> i32 {
    let v = rng.random_range(range.min..=range.max);
    if range.negate { -v } else { v }
}
