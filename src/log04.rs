//!Implementation for `log` crate interface

extern crate std;

use std::sync::Mutex;

use log04::{max_level, Level, Log, Metadata, Record, STATIC_MAX_LEVEL};

use crate::{Severity, SyslogClient, Transport};

use alloc::string::ToString;

impl From<Level> for Severity {
    #[inline(always)]
    fn from(level: Level) -> Self {
        match level {
            Level::Error => Self::LOG_ERR,
            Level::Warn => Self::LOG_WARNING,
            Level::Info => Self::LOG_NOTICE,
            Level::Debug => Self::LOG_INFO,
            Level::Trace => Self::LOG_DEBUG,
        }
    }
}

///Syslog client with log interface
///
///Write failures cannot be reported through the `Log` contract, so records
///that fail to send are dropped.
pub struct Rfc3164Logger<T: Transport> {
    client: Mutex<SyslogClient<T>>,
}

impl<T: Transport> Rfc3164Logger<T> {
    ///Creates new instance, taking ownership of the client
    pub const fn new(client: SyslogClient<T>) -> Self {
        Self {
            client: Mutex::new(client),
        }
    }
}

impl<T: Transport + Send> Log for Rfc3164Logger<T> {
    #[inline(always)]
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= max_level() && metadata.level() <= STATIC_MAX_LEVEL
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let severity = record.level().into();
        let mut client = match self.client.lock() {
            Ok(client) => client,
            Err(poisoned) => poisoned.into_inner(),
        };

        let _ = match record.args().as_str() {
            Some(text) => client.log(severity, text),
            None => client.log(severity, &record.args().to_string()),
        };
    }

    fn flush(&self) {
    }
}
