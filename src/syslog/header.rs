//! Syslog message components

use core::fmt;

use alloc::string::String;

use str_buf::StrBuf;

pub use super::{Facility, InvalidArgument, Severity};

#[repr(transparent)]
///Hostname, limited to 64 characters
pub struct Hostname(StrBuf<{ str_buf::capacity(64) }>);

impl Hostname {
    #[inline]
    ///Initializes with placeholder name, for use when machine name is not known.
    pub const fn unknown() -> Self {
        Self(StrBuf::from_str("unknown"))
    }

    #[inline]
    ///Gets hostname
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }

    #[inline]
    ///Creates new hostname
    ///
    ///It verifies that name is a non-empty single token of ASCII alphanumerics,
    ///`-` or `.`, returning None otherwise.
    pub const fn new(name: &str) -> Option<Self> {
        if name.is_empty() {
            None
        } else {
            match StrBuf::from_str_checked(name) {
                Ok(buffer) => {
                    let mut idx = 0;
                    loop {
                        let byt = buffer.as_slice()[idx];
                        if byt.is_ascii_alphanumeric() || byt == b'-' || byt == b'.' {
                            idx += 1;
                            if idx >= name.len() {
                                break Some(Self(buffer));
                            }
                        } else {
                            break None;
                        }
                    }
                }
                Err(_) => None,
            }
        }
    }
}

///Timestamp components
///
///The RFC 3164 timestamp carries no year and no timezone indication,
///so neither is stored here.
pub struct Timestamp {
    ///Months since January. Range 0-11
    pub month: u8,
    ///Day of the month. Range 1-31
    pub day: u8,
    ///Hours since midnight. Range 0-23
    pub hour: u8,
    ///Minutes after the hour. Range 0-59
    pub min: u8,
    ///Seconds after the minute. Range 0-60
    pub sec: u8,
}

impl Timestamp {
    ///Creates epoch start timestamp as default value when time is not available
    pub const fn epoch() -> Self {
        Self {
            month: 0,
            day: 1,
            hour: 0,
            min: 0,
            sec: 0,
        }
    }

    ///Creates new current time instance or fallbacks to epoch start
    pub fn now() -> Self {
        match time_c::Time::now_utc() {
            Some(time_c::Time { sec, min, hour, month_day, month, .. }) => Self {
                month: month.saturating_sub(1),
                day: month_day,
                hour,
                min,
                sec,
            },
            None => Self::epoch(),
        }
    }

    const fn rfc3164_month(&self) -> &'static str {
        match self.month {
            0 => "Jan",
            1 => "Feb",
            2 => "Mar",
            3 => "Apr",
            4 => "May",
            5 => "Jun",
            6 => "Jul",
            7 => "Aug",
            8 => "Sep",
            9 => "Oct",
            10 => "Nov",
            11 => "Dec",
            _ => unreach!(),
        }
    }
}

///RFC 3164 message
///
///Wire format is `<PRI>Mmm dd hh:mm:ss HOSTNAME MESSAGE` with day of month
///space padded to width 2 and time components zero padded to width 2.
///No line terminator is appended.
pub struct Rfc3164<'a> {
    ///Encoded priority
    pub pri: u8,
    ///Timestamp
    pub timestamp: Timestamp,
    ///Hostname
    pub hostname: &'a Hostname,
    ///Message text
    pub msg: &'a str,
}

impl<'a> Rfc3164<'a> {
    ///Writes wire representation of the message into `out`
    ///
    ///Output length is not limited here, even though RFC 3164 recommends
    ///payload of at most 1024 bytes. Staying within that limit is up to
    ///the caller or the transport.
    pub fn write_buffer(&self, out: &mut impl fmt::Write) -> fmt::Result {
        let Self { pri, timestamp, hostname, msg } = self;
        let hostname = hostname.as_str();
        let month = timestamp.rfc3164_month();
        let Timestamp { day, hour, min, sec, .. } = timestamp;
        fmt::Write::write_fmt(out, format_args!("<{pri}>{month} {day:>2} {hour:>02}:{min:>02}:{sec:>02} {hostname} {msg}"))
    }

    ///Encodes message into ASCII payload
    ///
    ///Message text that is not ASCII cannot be represented on the wire and
    ///fails with `InvalidArgument::NotAscii`. No character is ever substituted.
    pub fn encode(&self) -> Result<String, InvalidArgument> {
        if !self.msg.is_ascii() {
            return Err(InvalidArgument::NotAscii);
        }

        //PRI(3 + 2) + timestamp(15 + 1) + spaces
        let mut out = String::with_capacity(22 + self.hostname.as_str().len() + self.msg.len());
        //Writing into String cannot fail
        let _ = self.write_buffer(&mut out);
        Ok(out)
    }
}
