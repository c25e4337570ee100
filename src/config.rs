//! Configuration for a multiplication run

use std::fmt;
use std::str::FromStr;

/// Which multiplication algorithm(s) to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Eight-product recursive block multiply
    Recursive,
    /// Seven-product Strassen multiply
    Strassen,
    /// Run both and check that they agree
    #[default]
    Both,
}

impl Algorithm {
    pub fn runs_recursive(self) -> bool {
        matches!(self, Algorithm::Recursive | Algorithm::Both)
    }

    pub fn runs_strassen(self) -> bool {
        matches!(self, Algorithm::Strassen | Algorithm::Both)
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "recursive" => Ok(Algorithm::Recursive),
            "strassen" => Ok(Algorithm::Strassen),
            "both" => Ok(Algorithm::Both),
            other => Err(format!("Unknown algorithm: {}", other)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Recursive => "recursive",
            Algorithm::Strassen => "strassen",
            Algorithm::Both => "both",
        };
        f.write_str(name)
    }
}

/// Configuration for one driver run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Matrix size (validated when the matrices are built)
    pub size: usize,
    pub algorithm: Algorithm,
    /// Print the input and result matrices
    pub print: bool,
    /// Seed for reproducible inputs (None = thread RNG)
    pub seed: Option<u64>,
    pub quiet: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            size: 8,
            algorithm: Algorithm::Both,
            print: false,
            seed: None,
            quiet: false,
        }
    }
}

impl RunConfig {
    pub fn new(size: usize, algorithm: Algorithm) -> Self {
        Self {
            size,
            algorithm,
            ..Self::default()
        }
    }

    pub fn from_args(matches: &clap::ArgMatches) -> Self {
        let size = matches.get_one::<usize>("size").copied().unwrap_or(8);

        let algorithm = matches
            .get_one::<String>("algorithm")
            .and_then(|s| s.parse().ok())
            .unwrap_or_default();

        Self {
            size,
            algorithm,
            print: matches.get_flag("print"),
            seed: matches.get_one::<u64>("seed").copied(),
            quiet: matches.get_flag("quiet"),
        }
    }
}
