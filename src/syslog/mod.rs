//! Syslog protocol
//!
//! Reference: RFC 3164

use core::convert::TryFrom;
use core::fmt;

pub mod header;

///Log importance
#[repr(u8)]
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Severity {
    ///system is unusable
    LOG_EMERG = 0,
    ///action must be taken immediately
    LOG_ALERT = 1,
    ///critical conditions
    LOG_CRIT = 2,
    ///error conditions
    LOG_ERR = 3,
    ///warning conditions
    LOG_WARNING = 4,
    ///normal but significant condition
    LOG_NOTICE = 5,
    ///informational
    LOG_INFO = 6,
    ///debug-level messages
    LOG_DEBUG = 7,
}

impl Severity {
    ///Encodes severity into priority with corresponding facility.
    ///
    ///Value is `facility * 8 + severity`, hence never exceeds 191.
    pub const fn priority(self, fac: Facility) -> u8 {
        (fac as u8) << 3 | self as u8
    }
}

impl TryFrom<u8> for Severity {
    type Error = InvalidArgument;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::LOG_EMERG),
            1 => Ok(Self::LOG_ALERT),
            2 => Ok(Self::LOG_CRIT),
            3 => Ok(Self::LOG_ERR),
            4 => Ok(Self::LOG_WARNING),
            5 => Ok(Self::LOG_NOTICE),
            6 => Ok(Self::LOG_INFO),
            7 => Ok(Self::LOG_DEBUG),
            other => Err(InvalidArgument::Severity(other)),
        }
    }
}

///Facility code, indicating source of log
#[repr(u8)]
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Facility {
    ///Kernel
    LOG_KERN = 0,
    ///User space application (default level)
    LOG_USER = 1,
    ///Mail system
    LOG_MAIL = 2,
    ///System daemon
    LOG_DAEMON = 3,
    ///Security
    LOG_AUTH = 4,
    ///Internal syslogd
    LOG_SYSLOG = 5,
    ///Line printer
    LOG_LPR = 6,
    ///News
    LOG_NEWS = 7,
    ///Unix-to-Unix Copy
    LOG_UUCP = 8,
    ///Cron daemon
    LOG_CRON = 9,
    ///Security (private)
    LOG_AUTHPRIV = 10,
    ///FTP daemon
    LOG_FTP = 11,
    ///NTP subsystem
    LOG_NTP = 12,
    ///Log audit
    LOG_AUDIT = 13,
    ///Log alert
    LOG_ALERT = 14,
    ///Clock daemon
    LOG_CLOCK = 15,
    ///Reserved for local use
    LOG_LOCAL0 = 16,
    ///Reserved for local use
    LOG_LOCAL1 = 17,
    ///Reserved for local use
    LOG_LOCAL2 = 18,
    ///Reserved for local use
    LOG_LOCAL3 = 19,
    ///Reserved for local use
    LOG_LOCAL4 = 20,
    ///Reserved for local use
    LOG_LOCAL5 = 21,
    ///Reserved for local use
    LOG_LOCAL6 = 22,
    ///Reserved for local use
    LOG_LOCAL7 = 23,
}

impl Default for Facility {
    #[inline(always)]
    fn default() -> Self {
        Self::LOG_USER
    }
}

impl TryFrom<u8> for Facility {
    type Error = InvalidArgument;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::LOG_KERN),
            1 => Ok(Self::LOG_USER),
            2 => Ok(Self::LOG_MAIL),
            3 => Ok(Self::LOG_DAEMON),
            4 => Ok(Self::LOG_AUTH),
            5 => Ok(Self::LOG_SYSLOG),
            6 => Ok(Self::LOG_LPR),
            7 => Ok(Self::LOG_NEWS),
            8 => Ok(Self::LOG_UUCP),
            9 => Ok(Self::LOG_CRON),
            10 => Ok(Self::LOG_AUTHPRIV),
            11 => Ok(Self::LOG_FTP),
            12 => Ok(Self::LOG_NTP),
            13 => Ok(Self::LOG_AUDIT),
            14 => Ok(Self::LOG_ALERT),
            15 => Ok(Self::LOG_CLOCK),
            16 => Ok(Self::LOG_LOCAL0),
            17 => Ok(Self::LOG_LOCAL1),
            18 => Ok(Self::LOG_LOCAL2),
            19 => Ok(Self::LOG_LOCAL3),
            20 => Ok(Self::LOG_LOCAL4),
            21 => Ok(Self::LOG_LOCAL5),
            22 => Ok(Self::LOG_LOCAL6),
            23 => Ok(Self::LOG_LOCAL7),
            other => Err(InvalidArgument::Facility(other)),
        }
    }
}

///Input that cannot be encoded into a RFC 3164 message
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InvalidArgument {
    ///Facility code outside of 0..=23
    Facility(u8),
    ///Severity level outside of 0..=7
    Severity(u8),
    ///Message text contains non-ASCII characters
    NotAscii,
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Facility(code) => fmt.write_fmt(format_args!("facility code {} is outside of 0..=23", code)),
            Self::Severity(level) => fmt.write_fmt(format_args!("severity level {} is outside of 0..=7", level)),
            Self::NotAscii => fmt.write_str("message text is not ASCII"),
        }
    }
}
