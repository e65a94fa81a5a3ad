//! Configuration management for the analysis CLI

use crate::error::{AudiokitError, Result};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Which framed feature the CLI computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FeatureKind {
    Zcr,
    Rms,
    Envelope,
}

impl FeatureKind {
    pub fn name(&self) -> &'static str {
        match self {
            FeatureKind::Zcr => "zero-crossing rate",
            FeatureKind::Rms => "RMS energy",
            FeatureKind::Envelope => "amplitude envelope",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub analysis: AnalysisConfig,
    pub feature: FeatureKind,
    pub input_path: PathBuf,
    pub dump_frames: usize,
    pub verbose: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub frame_length: usize,
    pub hop_length: usize,
    pub center: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            analysis: AnalysisConfig::default(),
            feature: FeatureKind::Zcr,
            input_path: PathBuf::from("input.wav"),
            dump_frames: 0,
            verbose: false,
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            frame_length: 2048,
            hop_length: 512,
            center: true,
        }
    }
}

impl Config {
    /// Get frame length (convenience method)
    pub fn frame_length(&self) -> usize {
        self.analysis.frame_length
    }

    /// Get hop length (convenience method)
    pub fn hop_length(&self) -> usize {
        self.analysis.hop_length
    }

    /// Get centered-framing flag (convenience method)
    pub fn center(&self) -> bool {
        self.analysis.center
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "audiokit", about = "WAV reader and audio feature extractor", version)]
pub struct Args {
    #[arg(help = "Input audio file path (WAV format)")]
    pub input: PathBuf,

    #[arg(short = 'f', long = "feature", value_enum, default_value = "zcr", help = "Framed feature to compute")]
    pub feature: FeatureKind,

    #[arg(long = "frame-length", default_value = "2048", help = "Analysis frame length (samples)")]
    pub frame_length: usize,

    #[arg(long = "hop-length", default_value = "512", help = "Hop between consecutive frames (samples)")]
    pub hop_length: usize,

    #[arg(long = "no-center", help = "Disable centered framing (no virtual zero padding)")]
    pub no_center: bool,

    #[arg(long = "dump-frames", default_value = "0", help = "Print the first N container frames as hex and signed samples")]
    pub dump_frames: usize,

    #[arg(short = 'c', long = "config", help = "Config file path (TOML format)")]
    pub config_file: Option<PathBuf>,

    #[arg(short = 'v', long = "verbose", help = "Enable verbose output mode")]
    pub verbose: bool,
}

impl Config {
    /// Create config from command line arguments and config file
    pub fn from_args_and_config(args: Args) -> Result<Self> {
        // First load config file (if provided)
        let mut config = if let Some(config_path) = &args.config_file {
            Self::from_file(config_path)?
        } else {
            Self::default()
        };

        // Command line arguments override config file settings
        config.input_path = args.input;
        config.feature = args.feature;
        config.analysis.frame_length = args.frame_length;
        config.analysis.hop_length = args.hop_length;
        config.analysis.center = !args.no_center;
        config.dump_frames = args.dump_frames;
        config.verbose = args.verbose;

        config.validate()?;

        Ok(config)
    }

    /// Load config from TOML config file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AudiokitError::io(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content).map_err(|e| {
            AudiokitError::invalid_argument(format!("Failed to parse config file: {}", e))
        })
    }

    /// Validate configuration parameter validity
    pub fn validate(&self) -> Result<()> {
        if self.analysis.frame_length < 2 {
            return Err(AudiokitError::invalid_argument(
                "Frame length must be at least 2",
            ));
        }
        if self.analysis.frame_length > 1 << 24 {
            return Err(AudiokitError::invalid_argument(
                "Frame length cannot exceed 16777216 samples",
            ));
        }
        if self.analysis.hop_length == 0 {
            return Err(AudiokitError::invalid_argument(
                "Hop length must be at least 1",
            ));
        }
        Ok(())
    }

    /// Save config to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| {
            AudiokitError::internal(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(path, content)
            .map_err(|e| AudiokitError::io(format!("Failed to write config file: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.frame_length(), 2048);
        assert_eq!(config.hop_length(), 512);
        assert!(config.center());
        assert_eq!(config.feature, FeatureKind::Zcr);
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.analysis.frame_length = 1;
        assert!(config.validate().is_err());
        config.analysis.frame_length = 2048;

        config.analysis.hop_length = 0;
        assert!(config.validate().is_err());
        config.analysis.hop_length = 512;

        config.analysis.frame_length = (1 << 24) + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_file_operations() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let config = Config::default();

        assert!(config.save_to_file(&config_path).is_ok());
        assert!(config_path.exists());

        let loaded = Config::from_file(&config_path).unwrap();
        assert_eq!(config.frame_length(), loaded.frame_length());
        assert_eq!(config.hop_length(), loaded.hop_length());
        assert_eq!(config.feature, loaded.feature);
    }

    #[test]
    fn test_args_override_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let mut file_config = Config::default();
        file_config.analysis.frame_length = 4096;
        file_config.save_to_file(&config_path).unwrap();

        let args = Args {
            input: PathBuf::from("x.wav"),
            feature: FeatureKind::Rms,
            frame_length: 1024,
            hop_length: 256,
            no_center: true,
            dump_frames: 3,
            config_file: Some(config_path),
            verbose: false,
        };

        let config = Config::from_args_and_config(args).unwrap();
        assert_eq!(config.frame_length(), 1024);
        assert_eq!(config.hop_length(), 256);
        assert!(!config.center());
        assert_eq!(config.feature, FeatureKind::Rms);
        assert_eq!(config.input_path, PathBuf::from("x.wav"));
    }

    #[test]
    fn test_feature_names() {
        assert_eq!(FeatureKind::Zcr.name(), "zero-crossing rate");
        assert_eq!(FeatureKind::Rms.name(), "RMS energy");
        assert_eq!(FeatureKind::Envelope.name(), "amplitude envelope");
    }
}
