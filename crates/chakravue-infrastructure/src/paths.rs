//! Path management for ChakraVue client files.
//!
//! ```text
//! ~/.config/chakravue/         # Config directory
//! └── session.json             # Doctor session + device push token
//! ```

use std::path::PathBuf;

use chakravue_core::error::{ChakraError, Result};

/// Unified path resolution for the client's local files.
pub struct ChakraPaths;

impl ChakraPaths {
    /// Returns the chakravue configuration directory.
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("chakravue"))
            .ok_or_else(|| ChakraError::config("Could not determine config directory"))
    }

    /// Returns the path to the session settings file.
    pub fn session_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("session.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir() {
        let config_dir = ChakraPaths::config_dir().unwrap();
        assert!(config_dir.ends_with("chakravue"));
    }

    #[test]
    fn test_session_file() {
        let session_file = ChakraPaths::session_file().unwrap();
        assert!(session_file.ends_with("session.json"));
        let config_dir = ChakraPaths::config_dir().unwrap();
        assert!(session_file.starts_with(&config_dir));
    }
}
