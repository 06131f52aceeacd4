use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Application configuration
///
/// Generation defaults mirror what the original visualizer exposed: node
/// counts bounded to 3..=10, a standard directed graph with positive
/// weights, and an acyclic graph that allows negative weights.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub min_nodes: usize,
    pub max_nodes: usize,
    pub directed_avg_degree: usize,
    pub directed_min_weight: i64,
    pub directed_max_weight: i64,
    pub acyclic_avg_degree: usize,
    pub acyclic_min_weight: i64,
    pub acyclic_max_weight: i64,
    pub benchmark_node_counts: Vec<usize>,
    pub benchmark_avg_degree: usize,
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub max_log_file_size: u64,
    pub max_log_files: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_nodes: 3,
            max_nodes: 10,
            directed_avg_degree: 2,
            directed_min_weight: 1,
            directed_max_weight: 10,
            acyclic_avg_degree: 2,
            acyclic_min_weight: -10,
            acyclic_max_weight: 10,
            benchmark_node_counts: vec![100, 1_000, 10_000, 100_000],
            benchmark_avg_degree: 10,
            log_level: "info".to_string(),
            log_dir: "logs".to_string(),
            log_file: "graphpath".to_string(),
            max_log_file_size: 100 * 1024 * 1024, // 100MB
            max_log_files: 5,
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.min_nodes, 3);
        assert_eq!(config.max_nodes, 10);
        assert_eq!(config.acyclic_min_weight, -10);
        assert_eq!(config.benchmark_node_counts.len(), 4);
    }

    #[test]
    fn test_config_load_save() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temporary file");

        let config = Config::default();
        let toml_content =
            toml::to_string_pretty(&config).expect("Failed to serialize config to TOML");
        temp_file
            .write_all(toml_content.as_bytes())
            .expect("Failed to write TOML content to temporary file");

        let loaded_config =
            Config::load(temp_file.path()).expect("Failed to load config from temporary file");
        assert_eq!(config.directed_avg_degree, loaded_config.directed_avg_degree);
        assert_eq!(config.benchmark_node_counts, loaded_config.benchmark_node_counts);
        assert_eq!(config.log_level, loaded_config.log_level);
    }

    #[test]
    fn test_config_load_missing_file() {
        let result = Config::load("definitely/not/a/config.toml");
        assert!(result.is_err());
    }
}
