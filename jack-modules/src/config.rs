//! # Config
//!
//! How a unit is run: client name, frequency input rate, initial frequency and where control and
//! output go. Read from a TOML file and overridden from the command line.
use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::Path;
use synth_modules::prelude::*;

/// Optional settings as they come from a file or command-line flags.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// JACK client name. Defaults to the unit name.
    pub name: Option<String>,
    /// Rate of the frequency input, `audio` or `control`.
    pub rate: Option<String>,
    /// Frequency the input holds when the unit is constructed, in Hz.
    pub frequency: Option<f32>,
    /// Address to listen for `/frequency` OSC messages. Replaces the `frequency` port, so only
    /// valid for control-rate input.
    pub osc: Option<String>,
    /// Ports to connect the `phase` output to once the client is active.
    pub connect: Option<Vec<String>>,
}

/// Everything needed to start a unit, with defaults applied and values validated.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub name: String,
    pub rate: Rate,
    pub frequency: Frequency,
    pub osc: Option<SocketAddr>,
    pub connect: Vec<String>,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let config = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}.", path.display()))?;
        Config::parse(&config)
            .with_context(|| format!("Failed to parse config file {}.", path.display()))
    }

    pub fn parse(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Values set in `other` win.
    pub fn merge(self, other: Config) -> Config {
        Config {
            name: other.name.or(self.name),
            rate: other.rate.or(self.rate),
            frequency: other.frequency.or(self.frequency),
            osc: other.osc.or(self.osc),
            connect: other.connect.or(self.connect),
        }
    }

    pub fn settings(self, unit: &Unit) -> Result<Settings> {
        let rate = match self.rate {
            Some(ref rate) => parse_rate(rate)?,
            None => Rate::Control,
        };
        let osc = match self.osc {
            Some(ref address) => Some(
                address
                    .parse::<SocketAddr>()
                    .with_context(|| format!("Failed to parse OSC address `{}`.", address))?,
            ),
            None => None,
        };
        if osc.is_some() && rate == Rate::Audio {
            bail!("OSC frequency control requires control-rate input.");
        }
        Ok(Settings {
            name: self.name.unwrap_or_else(|| unit.name.to_string()),
            rate,
            frequency: self.frequency.unwrap_or(440.0),
            osc,
            connect: self.connect.unwrap_or_default(),
        })
    }
}

pub fn parse_rate(s: &str) -> Result<Rate> {
    match s {
        "audio" | "ar" => Ok(Rate::Audio),
        "control" | "kr" => Ok(Rate::Control),
        _ => bail!("Unknown rate `{}`, expected `audio` or `control`.", s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let settings = Config::parse("").unwrap().settings(&RampUpGen::UNIT).unwrap();
        assert_eq!(
            settings,
            Settings {
                name: "RampUpGen".to_string(),
                rate: Rate::Control,
                frequency: 440.0,
                osc: None,
                connect: vec![],
            }
        );
    }

    #[test]
    fn parses_all_fields() {
        let config = Config::parse(
            r#"
            name = "lfo"
            rate = "control"
            frequency = 0.5
            osc = "127.0.0.1:7771"
            connect = ["fn1_0:x"]
            "#,
        ).unwrap();
        let settings = config.settings(&RampUpGen::UNIT).unwrap();
        assert_eq!(settings.name, "lfo");
        assert_eq!(settings.frequency, 0.5);
        assert_eq!(settings.osc, Some("127.0.0.1:7771".parse().unwrap()));
        assert_eq!(settings.connect, vec!["fn1_0:x".to_string()]);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(Config::parse("phase = 0.5").is_err());
    }

    #[test]
    fn overrides_win() {
        let file = Config::parse("rate = \"audio\"\nfrequency = 110.0").unwrap();
        let flags = Config {
            frequency: Some(220.0),
            ..Config::default()
        };
        let settings = file.merge(flags).settings(&RampUpGen::UNIT).unwrap();
        assert_eq!(settings.rate, Rate::Audio);
        assert_eq!(settings.frequency, 220.0);
    }

    #[test]
    fn rejects_unknown_rate() {
        let config = Config::parse("rate = \"scalar\"").unwrap();
        let err = config.settings(&RampUpGen::UNIT).unwrap_err();
        assert!(err.to_string().contains("scalar"));
    }

    #[test]
    fn rejects_osc_for_audio_rate() {
        let config = Config::parse("rate = \"audio\"\nosc = \"127.0.0.1:7771\"").unwrap();
        assert!(config.settings(&RampUpGen::UNIT).is_err());
    }

    #[test]
    fn rejects_bad_osc_address() {
        let config = Config::parse("osc = \"localhost\"").unwrap();
        assert!(config.settings(&RampUpGen::UNIT).is_err());
    }

    #[test]
    fn rate_aliases() {
        assert_eq!(parse_rate("ar").unwrap(), Rate::Audio);
        assert_eq!(parse_rate("kr").unwrap(), Rate::Control);
    }
}
