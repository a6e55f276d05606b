//! Export layouts supported by the parser.
//!
//! WhatsApp writes a different timestamp prefix depending on the phone that
//! produced the export and the clock setting of that phone. [`FormatSpec`]
//! names one of the four combinations and owns both regular expressions
//! needed to read it: the delimiter used to split the text into entries and
//! the chrono patterns used to parse the matched timestamp. Keeping them on
//! one enum makes it impossible to split with one layout and parse with
//! another.
//!
//! | Variant | Example line |
//! |---------|--------------|
//! | [`Android12`](FormatSpec::Android12) | `15/01/24, 10:30 pm - Alice: Hi` |
//! | [`Android24`](FormatSpec::Android24) | `15/01/24, 22:30 - Alice: Hi` |
//! | [`Ios12`](FormatSpec::Ios12) | `[15/01/24, 10:30:45 PM] Alice: Hi` |
//! | [`Ios24`](FormatSpec::Ios24) | `[15/01/2024, 22:30:45] Alice: Hi` |
//!
//! # Example
//!
//! ```rust
//! use chatstat::format::{ClockFormat, Device, FormatSpec};
//! use std::str::FromStr;
//!
//! let spec = FormatSpec::from_parts(Device::Ios, ClockFormat::TwentyFourHour);
//! assert_eq!(spec, FormatSpec::Ios24);
//!
//! // The option names of the layout picker are accepted too
//! assert_eq!(FormatSpec::from_str("Android_12hour").unwrap(), FormatSpec::Android12);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChatstatError;

/// Device that produced the export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Device {
    Android,
    #[serde(rename = "iOS")]
    Ios,
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Device::Android => write!(f, "Android"),
            Device::Ios => write!(f, "iOS"),
        }
    }
}

impl FromStr for Device {
    type Err = ChatstatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "android" => Ok(Device::Android),
            "ios" => Ok(Device::Ios),
            _ => Err(ChatstatError::unknown_format(s)),
        }
    }
}

/// Clock setting of the device at export time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClockFormat {
    #[serde(rename = "12 hour")]
    TwelveHour,
    #[serde(rename = "24 hour")]
    TwentyFourHour,
}

impl fmt::Display for ClockFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClockFormat::TwelveHour => write!(f, "12-hour"),
            ClockFormat::TwentyFourHour => write!(f, "24-hour"),
        }
    }
}

impl FromStr for ClockFormat {
    type Err = ChatstatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        match compact.as_str() {
            "12" | "12h" | "12hour" => Ok(ClockFormat::TwelveHour),
            "24" | "24h" | "24hour" => Ok(ClockFormat::TwentyFourHour),
            _ => Err(ChatstatError::unknown_format(s)),
        }
    }
}

/// One of the four supported export layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormatSpec {
    /// `D/M/YY, H:MM am -`
    #[serde(rename = "android-12h", alias = "Android_12hour")]
    Android12,
    /// `D/M/YY, H:MM -`
    #[serde(rename = "android-24h", alias = "Android_24hour")]
    Android24,
    /// `[D/M/YY, H:MM:SS AM]`
    #[serde(rename = "ios-12h", alias = "iOS_12hour")]
    Ios12,
    /// `[D/M/YY, H:MM:SS]` or `[D/M/YYYY, H:MM:SS]`
    #[serde(rename = "ios-24h", alias = "iOS_24hour")]
    Ios24,
}

impl FormatSpec {
    /// Builds the layout from the (device, clock format) pair.
    pub fn from_parts(device: Device, clock: ClockFormat) -> Self {
        match (device, clock) {
            (Device::Android, ClockFormat::TwelveHour) => FormatSpec::Android12,
            (Device::Android, ClockFormat::TwentyFourHour) => FormatSpec::Android24,
            (Device::Ios, ClockFormat::TwelveHour) => FormatSpec::Ios12,
            (Device::Ios, ClockFormat::TwentyFourHour) => FormatSpec::Ios24,
        }
    }

    pub fn device(self) -> Device {
        match self {
            FormatSpec::Android12 | FormatSpec::Android24 => Device::Android,
            FormatSpec::Ios12 | FormatSpec::Ios24 => Device::Ios,
        }
    }

    pub fn clock(self) -> ClockFormat {
        match self {
            FormatSpec::Android12 | FormatSpec::Ios12 => ClockFormat::TwelveHour,
            FormatSpec::Android24 | FormatSpec::Ios24 => ClockFormat::TwentyFourHour,
        }
    }

    /// Returns the delimiter regex that marks the start of every entry.
    ///
    /// Matches the whole timestamp token including the trailing separator
    /// (`" - "` on Android, `"] "` on iOS). `\s` is Unicode-aware, so the
    /// narrow no-break spaces some locales put before the meridiem match too.
    pub fn segment_pattern(self) -> &'static str {
        match self {
            // 15/01/24, 10:30 pm - Alice: Hi
            FormatSpec::Android12 => r"\d{1,2}/\d{1,2}/\d{2},\s\d{1,2}:\d{2}\s[aApP][mM]\s*-\s",
            // 15/01/24, 22:30 - Alice: Hi
            FormatSpec::Android24 => r"\d{1,2}/\d{1,2}/\d{2},\s\d{1,2}:\d{2}\s*-\s",
            // [15/01/24, 10:30:45 PM] Alice: Hi
            FormatSpec::Ios12 => r"\[\d{1,2}/\d{1,2}/\d{2},\s\d{1,2}:\d{2}:\d{2}\s[AP]M\]\s*",
            // [15/01/2024, 22:30:45] Alice: Hi
            FormatSpec::Ios24 => r"\[\d{1,2}/\d{1,2}/\d{2,4},\s\d{1,2}:\d{2}:\d{2}\]\s*",
        }
    }

    /// Returns chrono parse patterns for a cleaned timestamp, tried in order.
    ///
    /// All patterns are day-first.
    pub fn parse_patterns(self) -> &'static [&'static str] {
        match self {
            FormatSpec::Android12 => &["%d/%m/%y, %I:%M %p -"],
            FormatSpec::Android24 => &["%d/%m/%y, %H:%M -"],
            FormatSpec::Ios12 => &["%d/%m/%y, %I:%M:%S %p"],
            FormatSpec::Ios24 => &["%d/%m/%y, %H:%M:%S", "%d/%m/%Y, %H:%M:%S"],
        }
    }

    /// Returns `true` for layouts that wrap the timestamp in brackets.
    pub fn is_bracketed(self) -> bool {
        self.device() == Device::Ios
    }

    /// Returns `true` when the meridiem marker is lowercased before parsing.
    pub fn lowercases_meridiem(self) -> bool {
        self == FormatSpec::Android12
    }

    /// Returns the canonical short name (`android-12h`, ...).
    pub fn name(self) -> &'static str {
        match self {
            FormatSpec::Android12 => "android-12h",
            FormatSpec::Android24 => "android-24h",
            FormatSpec::Ios12 => "ios-12h",
            FormatSpec::Ios24 => "ios-24h",
        }
    }

    /// Returns all layouts.
    pub fn all() -> &'static [FormatSpec] {
        &[
            FormatSpec::Android12,
            FormatSpec::Android24,
            FormatSpec::Ios12,
            FormatSpec::Ios24,
        ]
    }

    /// Returns all canonical names.
    pub fn all_names() -> &'static [&'static str] {
        &["android-12h", "android-24h", "ios-12h", "ios-24h"]
    }
}

impl fmt::Display for FormatSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.device(), self.clock())
    }
}

impl FromStr for FormatSpec {
    type Err = ChatstatError;

    /// Accepts `android-12h`, `android_12hour`, `iOS_24hour`, `ios-24` and
    /// similar spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(&['_', ' '][..], "-");
        let (device, clock) = normalized
            .split_once('-')
            .ok_or_else(|| ChatstatError::unknown_format(s))?;

        let device = device.parse::<Device>().map_err(|_| ChatstatError::unknown_format(s))?;
        let clock = clock
            .parse::<ClockFormat>()
            .map_err(|_| ChatstatError::unknown_format(s))?;

        Ok(FormatSpec::from_parts(device, clock))
    }
}
