//! Minimal RFC 3164 syslog client for datagram transports
//!
//! The client binds a facility and hostname to an already connected
//! transport and exposes one method per severity level. Each call encodes
//! a single `<PRI>Mmm dd hh:mm:ss HOSTNAME MESSAGE` payload and sends it
//! exactly once. Delivery is best effort: there is no acknowledgment, no
//! buffering and no retry, losses are inherent to the transport.
//!
//! Known limitations:
//!
//! - Payload length is not limited, even though RFC 3164 recommends at most
//!   1024 bytes. Keeping messages within that bound is up to the caller.
//! - No internal synchronization. Concurrent calls on one client must be
//!   serialized by the caller.

#![no_std]
#![warn(missing_docs)]
#![allow(clippy::style)]

extern crate alloc;

use core::fmt;

#[doc(hidden)]
#[cfg(not(debug_assertions))]
macro_rules! unreach {
    () => {{
        unsafe {
            core::hint::unreachable_unchecked();
        }
    }};
}

#[doc(hidden)]
#[cfg(debug_assertions)]
macro_rules! unreach {
    () => {{
        unreachable!();
    }};
}

pub mod syslog;
pub use syslog::header::Hostname;
pub use syslog::{Facility, InvalidArgument, Severity};
pub mod transport;
pub use transport::Transport;
#[cfg(feature = "log04")]
pub mod log04;

///Failure of a single log call
#[derive(Debug)]
pub enum Error<E> {
    ///Input cannot be encoded into a RFC 3164 message.
    ///
    ///Nothing is sent.
    InvalidArgument(InvalidArgument),
    ///Underlying transport failed to send the payload.
    ///
    ///Error is propagated as is, the client itself remains usable.
    Transport(E),
    ///Client's transport is already released by `close`.
    UseAfterClose,
}

impl<E> From<InvalidArgument> for Error<E> {
    #[inline(always)]
    fn from(error: InvalidArgument) -> Self {
        Self::InvalidArgument(error)
    }
}

impl<E: fmt::Display> fmt::Display for Error<E> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(error) => fmt.write_fmt(format_args!("invalid argument: {}", error)),
            Self::Transport(error) => fmt.write_fmt(format_args!("transport error: {}", error)),
            Self::UseAfterClose => fmt.write_str("log call on closed client"),
        }
    }
}

macro_rules! severity_methods {
    ($($(#[$doc:meta])* $name:ident => $severity:ident,)+) => {
        $(
            $(#[$doc])*
            #[inline(always)]
            pub fn $name(&mut self, text: &str) -> Result<(), Error<T::Error>> {
                self.log(Severity::$severity, text)
            }
        )+
    };
}

///Syslog client owning a connected datagram transport
///
///State machine is Open (after construction) then Closed (after `close`,
///terminal). There is no reconnection.
pub struct SyslogClient<T: Transport> {
    facility: Facility,
    hostname: Hostname,
    transport: Option<T>,
}

impl<T: Transport> SyslogClient<T> {
    #[inline(always)]
    ///Creates new client around already connected `transport`.
    ///
    ///Use `Facility::default()` for the conventional user-level facility.
    pub const fn new(transport: T, hostname: Hostname, facility: Facility) -> Self {
        Self {
            facility,
            hostname,
            transport: Some(transport),
        }
    }

    #[inline(always)]
    ///Gets facility of this client
    pub const fn facility(&self) -> Facility {
        self.facility
    }

    #[inline(always)]
    ///Gets hostname label of this client
    pub const fn hostname(&self) -> &str {
        self.hostname.as_str()
    }

    #[inline(always)]
    ///Returns whether `close` was already called
    pub const fn is_closed(&self) -> bool {
        self.transport.is_none()
    }

    ///Encodes message with given `severity` and sends it through the transport.
    ///
    ///The payload is fully computed before any write is attempted, a failed
    ///call never sends a partial or malformed message.
    pub fn log(&mut self, severity: Severity, text: &str) -> Result<(), Error<T::Error>> {
        let transport = match self.transport.as_mut() {
            Some(transport) => transport,
            None => return Err(Error::UseAfterClose),
        };

        let message = syslog::header::Rfc3164 {
            pri: severity.priority(self.facility),
            timestamp: syslog::header::Timestamp::now(),
            hostname: &self.hostname,
            msg: text,
        };
        let payload = message.encode()?;

        transport.send(payload.as_bytes()).map_err(Error::Transport)
    }

    severity_methods! {
        ///Logs message with `LOG_ALERT` severity
        alert => LOG_ALERT,
        ///Logs message with `LOG_CRIT` severity
        critical => LOG_CRIT,
        ///Logs message with `LOG_ERR` severity
        error => LOG_ERR,
        ///Logs message with `LOG_WARNING` severity
        warning => LOG_WARNING,
        ///Logs message with `LOG_NOTICE` severity
        notice => LOG_NOTICE,
        ///Logs message with `LOG_INFO` severity
        info => LOG_INFO,
        ///Logs message with `LOG_DEBUG` severity
        debug => LOG_DEBUG,
    }

    ///Releases the transport, transitioning client into its terminal state.
    ///
    ///Any following `log` or `close` call fails with `UseAfterClose`.
    pub fn close(&mut self) -> Result<(), Error<T::Error>> {
        match self.transport.take() {
            Some(transport) => {
                transport.close();
                Ok(())
            }
            None => Err(Error::UseAfterClose),
        }
    }
}
