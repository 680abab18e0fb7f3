use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

/// Parameters for one batch-generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Number of records to generate. Zero is valid and yields an empty batch.
    pub count: usize,
    /// Seed for the random source; `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Explicit mechanism-of-action text applied verbatim to every record
    /// instead of sampling one from the fixed vocabulary.
    pub mechanism: Option<String>,
}

#[derive(Default)]
pub struct GenerationConfigBuilder {
    count: Option<usize>,
    seed: Option<u64>,
    mechanism: Option<String>,
}

impl GenerationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
    pub fn mechanism(mut self, mechanism: impl Into<String>) -> Self {
        self.mechanism = Some(mechanism.into());
        self
    }

    pub fn build(self) -> Result<GenerationConfig, ConfigError> {
        Ok(GenerationConfig {
            count: self.count.ok_or(ConfigError::MissingParameter("count"))?,
            seed: self.seed,
            mechanism: self.mechanism,
        })
    }
}
