use phf::{Map, phf_map};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Linear combinations of the diagonal and off-diagonal correlators stored by the
/// simulations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Correlator {
    Diagonal,
    OffDiagonal,
    /// `4 (diag - offd)`
    OrbitalCharge,
    /// `2 (3 diag + offd)`
    SpinCharge,
    /// `4 offd`
    SpinExchange,
}

static CORRELATOR_ALIASES: Map<&'static str, Correlator> = phf_map! {
    "diag" => Correlator::Diagonal,
    "diagonal" => Correlator::Diagonal,
    "offd" => Correlator::OffDiagonal,
    "off-diagonal" => Correlator::OffDiagonal,
    "orbital" => Correlator::OrbitalCharge,
    "orbital-charge" => Correlator::OrbitalCharge,
    "spin" => Correlator::SpinCharge,
    "spin-charge" => Correlator::SpinCharge,
    "exchange" => Correlator::SpinExchange,
    "spin-exchange" => Correlator::SpinExchange,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown correlator '{0}'")]
pub struct UnknownCorrelator(pub String);

impl Correlator {
    pub const ALL: [Correlator; 5] = [
        Correlator::Diagonal,
        Correlator::OffDiagonal,
        Correlator::OrbitalCharge,
        Correlator::SpinCharge,
        Correlator::SpinExchange,
    ];

    #[inline]
    pub fn combine(self, diag: f64, offd: f64) -> f64 {
        match self {
            Correlator::Diagonal => diag,
            Correlator::OffDiagonal => offd,
            Correlator::OrbitalCharge => 4.0 * (diag - offd),
            Correlator::SpinCharge => 2.0 * (3.0 * diag + offd),
            Correlator::SpinExchange => 4.0 * offd,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Correlator::Diagonal => "diagonal",
            Correlator::OffDiagonal => "off-diagonal",
            Correlator::OrbitalCharge => "orbital-charge",
            Correlator::SpinCharge => "spin-charge",
            Correlator::SpinExchange => "spin-exchange",
        }
    }
}

impl FromStr for Correlator {
    type Err = UnknownCorrelator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CORRELATOR_ALIASES
            .get(s.trim().to_ascii_lowercase().as_str())
            .copied()
            .ok_or_else(|| UnknownCorrelator(s.to_string()))
    }
}

impl fmt::Display for Correlator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
