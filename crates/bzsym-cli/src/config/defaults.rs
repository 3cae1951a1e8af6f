pub struct DefaultsConfig {
    pub correlator: String,
    pub axis: usize,
    pub x_min: i64,
    pub x_max: i64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            correlator: "orbital".to_string(),
            axis: 0,
            x_min: 0,
            x_max: 16,
        }
    }
}
