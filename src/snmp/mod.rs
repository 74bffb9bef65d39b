pub mod oid;
pub mod session;

pub use oid::{format_oid, parse_oid};
pub use session::{SessionOptions, SnmpSession, UdpSession};
