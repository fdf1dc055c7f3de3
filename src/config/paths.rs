//! Path management for contas-cli
//!
//! Provides XDG-compliant path resolution for the data files.
//!
//! ## Path Resolution Order
//!
//! 1. `CONTAS_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/contas-cli` or `~/.config/contas-cli`
//! 3. Windows: `%APPDATA%\contas-cli`

use std::path::PathBuf;

use crate::error::ContasError;

/// Manages all paths used by contas-cli
#[derive(Debug, Clone)]
pub struct ContasPaths {
    /// Base directory for all contas-cli data
    base_dir: PathBuf,
}

impl ContasPaths {
    /// Create a new ContasPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, ContasError> {
        let base_dir = if let Ok(custom) = std::env::var("CONTAS_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create ContasPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/contas-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Path of the flat-file ledger (transacoes.csv)
    pub fn csv_file(&self) -> PathBuf {
        self.base_dir.join("transacoes.csv")
    }

    /// Path of the SQLite database (financas.db)
    pub fn db_file(&self) -> PathBuf {
        self.base_dir.join("financas.db")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), ContasError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ContasError::Io(format!("Failed to create base directory: {}", e)))?;
        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, ContasError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .map_err(|_| ContasError::Io("HOME environment variable not set".into()))
        })?;
    Ok(config_base.join("contas-cli"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, ContasError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| ContasError::Io("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("contas-cli"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContasPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.csv_file(), temp_dir.path().join("transacoes.csv"));
        assert_eq!(paths.db_file(), temp_dir.path().join("financas.db"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("nested").join("contas");
        let paths = ContasPaths::with_base_dir(base.clone());

        paths.ensure_directories().unwrap();
        assert!(base.exists());
    }
}
