//! INI file configuration adapter.

use crate::ports::config_port::ConfigPort;
use configparser::ini::Ini;
use std::path::Path;

pub struct FileConfigAdapter {
    config: Ini,
}

impl FileConfigAdapter {
    pub fn from_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let mut config = Ini::new();
        config.load(path).map_err(std::io::Error::other)?;
        Ok(Self { config })
    }

    pub fn from_string(content: &str) -> Result<Self, String> {
        let mut config = Ini::new();
        config.read(content.to_string())?;
        Ok(Self { config })
    }

    fn parse_bool(value: &str) -> Option<bool> {
        match value.to_lowercase().as_str() {
            "true" | "yes" | "1" => Some(true),
            "false" | "no" | "0" => Some(false),
            _ => None,
        }
    }
}

impl ConfigPort for FileConfigAdapter {
    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        self.config.get(section, key)
    }

    fn get_int(&self, section: &str, key: &str, default: i64) -> i64 {
        self.config
            .getint(section, key)
            .ok()
            .flatten()
            .unwrap_or(default)
    }

    fn get_double(&self, section: &str, key: &str, default: f64) -> f64 {
        self.config
            .getfloat(section, key)
            .ok()
            .flatten()
            .unwrap_or(default)
    }

    fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
        self.config
            .get(section, key)
            .as_ref()
            .and_then(|v| Self::parse_bool(v))
            .unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn from_string_parses_all_sections() {
        let content = r#"
[data]
directory = ./data

[backtest]
initial_cash = 10000.0
ticker = AAPL

[strategy]
kind = threshold
period = 20
"#;
        let adapter = FileConfigAdapter::from_string(content).unwrap();

        assert_eq!(
            adapter.get_string("data", "directory"),
            Some("./data".to_string())
        );
        assert_eq!(
            adapter.get_string("backtest", "ticker"),
            Some("AAPL".to_string())
        );
        assert_eq!(adapter.get_double("backtest", "initial_cash", 0.0), 10000.0);
        assert_eq!(adapter.get_int("strategy", "period", 0), 20);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let adapter = FileConfigAdapter::from_string("[backtest]\nticker = AAPL\n").unwrap();

        assert_eq!(adapter.get_string("backtest", "missing"), None);
        assert_eq!(adapter.get_string("nope", "ticker"), None);
        assert_eq!(adapter.get_int("strategy", "period", 20), 20);
        assert_eq!(adapter.get_double("backtest", "initial_cash", 10000.0), 10000.0);
        assert!(adapter.get_bool("report", "enabled", true));
    }

    #[test]
    fn non_numeric_values_fall_back_to_defaults() {
        let adapter =
            FileConfigAdapter::from_string("[strategy]\nperiod = twenty\n").unwrap();
        assert_eq!(adapter.get_int("strategy", "period", 20), 20);
        assert_eq!(adapter.get_double("strategy", "period", 1.5), 1.5);
    }

    #[test]
    fn bool_spellings() {
        let adapter = FileConfigAdapter::from_string(
            "[flags]\na = true\nb = yes\nc = 1\nd = false\ne = no\nf = 0\ng = maybe\n",
        )
        .unwrap();

        assert!(adapter.get_bool("flags", "a", false));
        assert!(adapter.get_bool("flags", "b", false));
        assert!(adapter.get_bool("flags", "c", false));
        assert!(!adapter.get_bool("flags", "d", true));
        assert!(!adapter.get_bool("flags", "e", true));
        assert!(!adapter.get_bool("flags", "f", true));
        assert!(adapter.get_bool("flags", "g", true));
    }

    #[test]
    fn from_file_reads_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[report]\noutput = report.txt\n").unwrap();

        let adapter = FileConfigAdapter::from_file(file.path()).unwrap();
        assert_eq!(
            adapter.get_string("report", "output"),
            Some("report.txt".to_string())
        );
    }

    #[test]
    fn from_file_missing_file_is_error() {
        assert!(FileConfigAdapter::from_file("/nonexistent/trendtrader.ini").is_err());
    }
}
