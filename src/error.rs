//! Error types for Reception Desk
//!
//! Desk operations never fail; these errors cover the preferences file and
//! the platform directories it and the log files live in.

use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// The OS reported no home directory to derive config/data paths from
    #[snafu(display("No platform directories for {qualifier}.{organization}.{application}"))]
    ProjectDirs {
        qualifier: &'static str,
        organization: &'static str,
        application: &'static str,
    },

    #[snafu(context(false), display("Preferences I/O failed: {source}"))]
    Io { source: std::io::Error },

    #[snafu(context(false), display("Preferences file is not valid TOML: {source}"))]
    TomlDe { source: toml::de::Error },

    #[snafu(context(false), display("Preferences could not be encoded: {source}"))]
    TomlSe { source: toml::ser::Error },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert_with_question_mark() {
        fn read_missing() -> Result<String> {
            Ok(std::fs::read_to_string("/nonexistent/reception-desk.toml")?)
        }
        assert!(matches!(read_missing(), Err(Error::Io { .. })));
    }
}
