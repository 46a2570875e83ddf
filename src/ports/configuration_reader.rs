//! ConfigurationReader port - looks up classification configurations.

use async_trait::async_trait;

use crate::domain::classification::Configuration;
use crate::domain::foundation::{ConfigId, DomainError};

/// Reader port for stored configurations.
#[async_trait]
pub trait ConfigurationReader: Send + Sync {
    /// Find a configuration by ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: ConfigId) -> Result<Option<Configuration>, DomainError>;

    /// Find the configuration flagged `is_default`.
    ///
    /// Returns `None` if no configuration carries the flag.
    async fn find_default(&self) -> Result<Option<Configuration>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn configuration_reader_is_object_safe() {
        fn _accepts_dyn(_reader: &dyn ConfigurationReader) {}
    }
}
