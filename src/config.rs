//! Run configuration for the timing demos.
//!
//! Usage: `<demo> [ELEMENTS] [--seed N]`. Every argument is optional; the
//! element count falls back to the demo's own default.

use crate::error::DemoError;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    pub elements: usize,
    pub seed: Option<u64>,
}

impl BenchConfig {
    pub fn new(elements: usize) -> Self {
        BenchConfig { elements, seed: None }
    }

    /// Parse the process arguments (program name excluded).
    pub fn from_env(default_elements: usize) -> Result<Self, DemoError> {
        Self::parse(std::env::args().skip(1), default_elements)
    }

    pub fn parse<I, S>(args: I, default_elements: usize) -> Result<Self, DemoError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Self::new(default_elements);
        let mut elements_seen = false;
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let arg = arg.as_ref();
            if arg == "--seed" {
                let value = args
                    .next()
                    .ok_or_else(|| DemoError::invalid_argument("--seed", "", "missing value"))?;
                let value = value.as_ref();
                let seed = value
                    .parse::<u64>()
                    .map_err(|err| DemoError::invalid_argument("--seed", value, err.to_string()))?;
                config.seed = Some(seed);
            } else if !elements_seen {
                let elements = parse_elements(arg)?;
                config.elements = elements;
                elements_seen = true;
            } else {
                return Err(DemoError::invalid_argument(
                    "arguments",
                    arg,
                    "unexpected extra argument",
                ));
            }
        }

        Ok(config)
    }

    /// Random source for key generation: reproducible when a seed was given.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

fn parse_elements(value: &str) -> Result<usize, DemoError> {
    // Allow `1_000_000` the way it reads in source.
    let cleaned: String = value.chars().filter(|&c| c != '_').collect();
    let elements = cleaned
        .parse::<usize>()
        .map_err(|err| DemoError::invalid_argument("elements", value, err.to_string()))?;
    if elements == 0 {
        return Err(DemoError::invalid_argument(
            "elements",
            value,
            "must be greater than 0",
        ));
    }
    // Keys are i32.
    if elements > i32::MAX as usize {
        return Err(DemoError::invalid_argument(
            "elements",
            value,
            format!("must be at most {}", i32::MAX),
        ));
    }
    Ok(elements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_defaults_when_no_args() {
        let config = BenchConfig::parse(Vec::<String>::new(), 1_000).unwrap();
        assert_eq!(config, BenchConfig { elements: 1_000, seed: None });
    }

    #[test]
    fn test_elements_and_seed() {
        let config = BenchConfig::parse(["50_000", "--seed", "7"], 1_000).unwrap();
        assert_eq!(config.elements, 50_000);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_seed_before_elements() {
        let config = BenchConfig::parse(["--seed", "7", "20"], 1_000).unwrap();
        assert_eq!(config.elements, 20);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_rejects_zero_and_garbage() {
        assert!(matches!(
            BenchConfig::parse(["0"], 10),
            Err(DemoError::InvalidArgument { .. })
        ));
        assert!(matches!(
            BenchConfig::parse(["lots"], 10),
            Err(DemoError::InvalidArgument { .. })
        ));
        assert!(matches!(
            BenchConfig::parse(["--seed"], 10),
            Err(DemoError::InvalidArgument { .. })
        ));
        assert!(matches!(
            BenchConfig::parse(["1", "2"], 10),
            Err(DemoError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_rejects_counts_beyond_i32() {
        match BenchConfig::parse(["3_000_000_000"], 10) {
            Err(DemoError::InvalidArgument { name, reason, .. }) => {
                assert_eq!(name, "elements");
                assert_eq!(reason, "must be at most 2147483647");
            }
            other => panic!("expected InvalidArgument, got {:?}", other),
        }
        let config = BenchConfig::parse(["2147483647"], 10).unwrap();
        assert_eq!(config.elements, i32::MAX as usize);
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let config = BenchConfig { elements: 1, seed: Some(42) };
        let mut rng1 = config.rng();
        let mut rng2 = config.rng();
        let b: Vec<u32> = (0..5).map(|_| rng1.gen()).collect();
        let c: Vec<u32> = (0..5).map(|_| rng2.gen()).collect();
        assert_eq!(b, c);
    }
}
