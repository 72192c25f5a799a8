extern crate std;

use core::time;
use std::sync::mpsc;
use std::{io, net};

use super::Transport;

///Local host address
///
///For use when you want to connect to locally running service
pub const LOCAL_HOST: net::IpAddr = net::IpAddr::V4(net::Ipv4Addr::new(127, 0, 0, 1));

///Default syslog collector port
pub const SYSLOG_PORT: u16 = 514;

///Default send timeout applied by `Udp::connect`
pub const DEFAULT_SEND_TIMEOUT: time::Duration = time::Duration::from_secs(4);

#[repr(transparent)]
///Syslog transport that uses channel to send syslog payloads.
///
///This is mostly useful for testing purposes.
pub struct InMemory<T>(mpsc::Sender<T>);

impl<T: for<'a> From<&'a [u8]>> InMemory<T> {
    #[inline(always)]
    ///Creates new in memory transport using provided sender
    pub fn new(chan: mpsc::Sender<T>) -> Self {
        Self(chan)
    }

    #[inline(always)]
    ///Returns reference to underlying channel
    pub fn channel(&self) -> &mpsc::Sender<T> {
        &self.0
    }
}

impl<T: for<'a> From<&'a [u8]>> Transport for InMemory<T> {
    type Error = mpsc::SendError<T>;

    #[inline(always)]
    fn send(&mut self, payload: &[u8]) -> Result<(), Self::Error> {
        self.0.send(payload.into())
    }

    #[inline(always)]
    fn close(self) {
    }
}

impl<T> Clone for InMemory<T> {
    #[inline(always)]
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }

    #[inline(always)]
    fn clone_from(&mut self, source: &Self) {
        self.0.clone_from(&source.0);
    }
}

#[repr(transparent)]
///UDP transport, connected to the collector on creation
pub struct Udp(net::UdpSocket);

impl Udp {
    ///Binds ephemeral local port and connects to the collector at `remote_addr`.
    ///
    ///Socket is created with `DEFAULT_SEND_TIMEOUT`, use `send_timeout` to
    ///change it.
    pub fn connect(remote_addr: net::SocketAddr) -> io::Result<Self> {
        let local_addr: net::SocketAddr = match remote_addr {
            net::SocketAddr::V4(_) => (net::Ipv4Addr::UNSPECIFIED, 0).into(),
            net::SocketAddr::V6(_) => (net::Ipv6Addr::UNSPECIFIED, 0).into(),
        };
        let socket = net::UdpSocket::bind(local_addr)?;
        socket.connect(remote_addr)?;
        socket.set_write_timeout(Some(DEFAULT_SEND_TIMEOUT))?;
        Ok(Self(socket))
    }

    ///Changes send timeout of underlying socket.
    ///
    ///`None` means blocking send without timeout.
    pub fn send_timeout(self, timeout: Option<time::Duration>) -> io::Result<Self> {
        self.0.set_write_timeout(timeout)?;
        Ok(self)
    }
}

impl Transport for Udp {
    type Error = io::Error;

    #[inline(always)]
    fn send(&mut self, payload: &[u8]) -> Result<(), Self::Error> {
        self.0.send(payload).map(|_| ())
    }

    #[inline(always)]
    fn close(self) {
        //Dropping the socket closes it
    }
}
