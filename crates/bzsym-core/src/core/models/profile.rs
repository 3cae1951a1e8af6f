use serde::Serialize;

/// A real-space correlation profile: one value per integer distance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RealSpaceProfile {
    sites: Vec<i64>,
    values: Vec<f64>,
}

impl RealSpaceProfile {
    /// # Panics
    ///
    /// Panics if `sites` and `values` differ in length.
    pub fn new(sites: Vec<i64>, values: Vec<f64>) -> Self {
        assert_eq!(
            sites.len(),
            values.len(),
            "profile sites and values must be aligned"
        );
        Self { sites, values }
    }

    pub fn sites(&self) -> &[i64] {
        &self.sites
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    pub fn value_at(&self, site: i64) -> Option<f64> {
        self.sites
            .iter()
            .position(|&x| x == site)
            .map(|i| self.values[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (i64, f64)> + '_ {
        self.sites.iter().copied().zip(self.values.iter().copied())
    }
}
