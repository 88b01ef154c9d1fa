use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::GenError;
use crate::fsutil;
use crate::record::Position;

/// Sample sizes generated by a default batch run, one output file each.
pub const DEFAULT_SAMPLE_SIZES: [usize; 10] =
    [100, 200, 500, 1000, 1200, 1500, 2000, 5000, 10000, 50000];

static DEFAULT_COUNTRY_CLUBS: Lazy<BTreeMap<String, Vec<String>>> = Lazy::new(|| {
    let table: [(&str, &[&str]); 10] = [
        ("Россия", &["ЦСКА", "Зенит", "Спартак", "Локомотив", "Краснодар"]),
        ("Бразилия", &["Фламенго", "Сантос", "Палмейрас", "Коринтианс"]),
        ("Германия", &["Бавария", "Боруссия Дортмунд", "РБ Лейпциг"]),
        ("Испания", &["Реал Мадрид", "Барселона", "Атлетико Мадрид"]),
        ("Франция", &["ПСЖ", "Олимпик Марсель", "Лион"]),
        ("Италия", &["Ювентус", "Милан", "Интер"]),
        ("Англия", &["Манчестер Юнайтед", "Ливерпуль", "Челси"]),
        ("Аргентина", &["Бока Хуниорс", "Ривер Плейт"]),
        ("Португалия", &["Бенфика", "Порту", "Спортинг"]),
        ("Нидерланды", &["Аякс", "ПСВ", "Фейеноорд"]),
    ];
    table
        .into_iter()
        .map(|(country, clubs)| {
            (country.to_string(), clubs.iter().map(|c| (*c).to_string()).collect())
        })
        .collect()
});

/// Inclusive integer bounds for one random draw. `negate` flips the sign of
/// the drawn value; the default goalkeeper goal range uses it so keepers land
/// in [-50, 0] as a distinguishable category, not a literal goal count.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: i32,
    pub max: i32,
    #[serde(default)]
    pub negate: bool,
}

impl ValueRange {
    #[must_use]
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max, negate: false }
    }

    #[must_use]
    pub const fn negated(min: i32, max: i32) -> Self {
        Self { min, max, negate: true }
    }
}

/// Categorical probabilities for drawing a position, in declared order.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionWeights {
    pub goalkeeper: f64,
    pub defender: f64,
    pub midfielder: f64,
    pub forward: f64,
}

impl Default for PositionWeights {
    fn default() -> Self {
        Self { goalkeeper: 0.10, defender: 0.30, midfielder: 0.30, forward: 0.30 }
    }
}

impl PositionWeights {
    #[must_use]
    pub fn get(&self, position: Position) -> f64 {
        match position {
            Position::Goalkeeper => self.goalkeeper,
            Position::Defender => self.defender,
            Position::Midfielder => self.midfielder,
            Position::Forward => self.forward,
        }
    }

    #[must_use]
    pub fn sum(&self) -> f64 {
        Position::ALL.iter().map(|p| self.get(*p)).sum()
    }
}

/// Goal bounds per position.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalRanges {
    pub goalkeeper: ValueRange,
    pub defender: ValueRange,
    pub midfielder: ValueRange,
    pub forward: ValueRange,
}

impl Default for GoalRanges {
    fn default() -> Self {
        Self {
            goalkeeper: ValueRange::negated(0, 50),
            defender: ValueRange::new(0, 20),
            midfielder: ValueRange::new(5, 30),
            forward: ValueRange::new(10, 50),
        }
    }
}

impl GoalRanges {
    #[must_use]
    pub fn get(&self, position: Position) -> ValueRange {
        match position {
            Position::Goalkeeper => self.goalkeeper,
            Position::Defender => self.defender,
            Position::Midfielder => self.midfielder,
            Position::Forward => self.forward,
        }
    }
}

/// Run configuration: the taxonomy tables, the sizes to generate and where to
/// write them. Loaded once at startup and read-only afterwards.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub sample_sizes: Vec<usize>,
    pub output_directory: PathBuf,
    pub country_club_map: BTreeMap<String, Vec<String>>,
    pub position_weights: PositionWeights,
    pub goal_ranges: GoalRanges,
    pub matches_range: ValueRange,
    /// Seed for reproducible runs; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            sample_sizes: DEFAULT_SAMPLE_SIZES.to_vec(),
            output_directory: fsutil::absolutize(Path::new("datasets")),
            country_club_map: DEFAULT_COUNTRY_CLUBS.clone(),
            position_weights: PositionWeights::default(),
            goal_ranges: GoalRanges::default(),
            matches_range: ValueRange::new(1, 150),
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Load configuration with precedence: explicit path > `SQUADGEN_CONFIG`
    /// env var > `./squadgen.toml` > built-in defaults. The first file that
    /// exists wins; a file that fails to parse is an error, not a fallback.
    ///
    /// # Errors
    /// Returns an error if a selected config file cannot be read or parsed.
    pub fn load(explicit: Option<&Path>) -> Result<Self, GenError> {
        let mut paths: Vec<PathBuf> = vec![];
        if let Some(p) = explicit {
            paths.push(p.to_path_buf());
        }
        if let Ok(p) = std::env::var("SQUADGEN_CONFIG") {
            paths.push(PathBuf::from(p));
        }
        if let Ok(cur) = std::env::current_dir() {
            paths.push(cur.join("squadgen.toml"));
        }
        for p in paths {
            if p.exists() {
                let s = std::fs::read_to_string(&p)?;
                let mut cfg: Self = toml::from_str(&s)?;
                cfg.output_directory = fsutil::absolutize(&cfg.output_directory);
                return Ok(cfg);
            }
        }
        Ok(Self::default())
    }

    /// Parse a configuration from TOML text; missing keys take defaults.
    ///
    /// # Errors
    /// Returns an error if the text is not valid TOML for this schema.
    pub fn from_toml_str(s: &str) -> Result<Self, GenError> {
        let mut cfg: Self = toml::from_str(s)?;
        cfg.output_directory = fsutil::absolutize(&cfg.output_directory);
        Ok(cfg)
    }

    /// Check every invariant the generator relies on: a writable output
    /// directory, a non-empty taxonomy with no empty club list, weights that
    /// sum to 1.0, and ordered numeric bounds.
    ///
    /// # Errors
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), GenError> {
        if self.country_club_map.is_empty() {
            return Err(GenError::NoCountries);
        }
        for (country, clubs) in &self.country_club_map {
            if clubs.is_empty() {
                return Err(GenError::EmptyClubList(country.clone()));
            }
        }
        for position in Position::ALL {
            if self.position_weights.get(position) < 0.0 {
                return Err(GenError::NegativeWeight(position.key()));
            }
        }
        let sum = self.position_weights.sum();
        if (sum - 1.0).abs() > 1e-9 {
            return Err(GenError::BadWeightSum(sum));
        }
        check_range("matches", self.matches_range)?;
        for position in Position::ALL {
            check_range("goals", self.goal_ranges.get(position))?;
        }
        if !self.output_directory.exists() {
            return Err(GenError::OutputDirMissing(self.output_directory.display().to_string()));
        }
        fsutil::probe_writable_dir(&self.output_directory).map_err(|e| {
            GenError::OutputDirUnwritable {
                path: self.output_directory.display().to_string(),
                reason: e.to_string(),
            }
        })?;
        Ok(())
    }
}

fn check_range(field: &'static str, range: ValueRange) -> Result<(), GenError> {
    if range.min > range.max {
        Err(GenError::InvalidRange { field, min: range.min, max: range.max })
    } else {
        Ok(())
    }
}
