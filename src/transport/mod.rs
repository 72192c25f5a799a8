//!Transport layer
//!
//!The client treats its transport as a one way sink: bytes go out, nothing
//!comes back. Connection setup and address resolution happen before the
//!transport is handed over.

use core::fmt;

#[cfg(feature = "std")]
mod std;
#[cfg(feature = "std")]
pub use self::std::*;

///Datagram sink for encoded syslog messages
///
///Implementations are expected to be already connected to the collector.
///`send` transmits the whole payload synchronously and reports failure
///immediately. No implementation retries.
pub trait Transport {
    ///Internal Error Type
    type Error: fmt::Debug;

    ///Performs synchronous write of the full encoded payload
    fn send(&mut self, payload: &[u8]) -> Result<(), Self::Error>;

    ///Releases underlying resource.
    ///
    ///Called exactly once, by the owning client's shutdown.
    fn close(self);
}
