use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Settings {
    /// Number of ticks a question stays open before it times out.
    pub time_budget: u32,
    pub tick_interval: Duration,
    /// Seeds the question shuffle. Entropy is used when absent.
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            time_budget: 20,
            tick_interval: Duration::from_secs(1),
            seed: None,
        }
    }
}
