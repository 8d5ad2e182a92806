//! Property-test run profile parsing for CI and local overrides.
//!
//! Graph property suites read their case count and fork mode from here so a
//! CI job can scale every suite with two variables.

use std::{env, num::NonZeroU32};

/// Environment variable controlling proptest case counts.
pub const PROGTEST_CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Environment variable controlling proptest process forking.
pub const NETFRAY_PBT_FORK_ENV_KEY: &str = "NETFRAY_PBT_FORK";

/// Runtime profile for property-test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: NonZeroU32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Load a profile from environment variables with provided defaults.
    ///
    /// A zero `default_cases` is promoted to one so suites always run.
    ///
    /// # Examples
    ///
    /// ```
    /// use netfray_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        let default_cases = NonZeroU32::new(default_cases).unwrap_or(NonZeroU32::MIN);
        Self {
            cases: read_override(PROGTEST_CASES_ENV_KEY).unwrap_or(default_cases),
            fork: read_override(NETFRAY_PBT_FORK_ENV_KEY).unwrap_or(default_fork),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub fn cases(&self) -> u32 {
        self.cases.get()
    }

    /// Whether to run proptest cases in forked subprocesses.
    #[must_use]
    pub fn fork(&self) -> bool {
        self.fork
    }
}

/// Values that can be parsed from a profile environment variable.
trait ProfileValue: Sized {
    fn parse_override(raw: &str) -> Result<Self, String>;
}

impl ProfileValue for NonZeroU32 {
    fn parse_override(raw: &str) -> Result<Self, String> {
        raw.trim()
            .parse::<Self>()
            .map_err(|error| format!("expected a positive case count: {error}"))
    }
}

impl ProfileValue for bool {
    fn parse_override(raw: &str) -> Result<Self, String> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err("expected one of: true/false/1/0/yes/no/on/off".to_owned()),
        }
    }
}

/// Returns the parsed override for `key`, or `None` when it is unset or
/// malformed. Malformed values are logged and ignored.
fn read_override<T: ProfileValue>(key: &'static str) -> Option<T> {
    let raw = env::var(key).ok()?;
    match T::parse_override(&raw) {
        Ok(value) => Some(value),
        Err(reason) => {
            tracing::warn!(
                env = key,
                raw = %raw,
                reason = %reason,
                "ignoring invalid property-test profile override",
            );
            None
        }
    }
}
