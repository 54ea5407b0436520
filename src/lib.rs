//! Administrative helpers for an Elasticsearch cluster.
//!
//! Two independent pieces live here:
//! - [Connection]: a blocking HTTP connection to one cluster node, with a handful of derived
//!   cluster-inspection queries (elected master, local node id, index list, shard allocator
//!   and translog flush settings).
//! - [TabularPrinter]: buffers rows of columns and writes them as a left-aligned table.
//!
//! The free functions in [utility] normalise the stringified booleans Elasticsearch likes to
//! return, and turn byte counts into human readable sizes.
//!
//! ```no_run
//! use esadmin::{Connection, ConnectionConfig, TabularPrinter};
//!
//! # fn main() -> esadmin::Result<()> {
//! let mut connection = Connection::open(ConnectionConfig::from_env()?)?;
//! let mut table = TabularPrinter::new();
//! table.row(&[&"master", &connection.master()?]);
//! table.row(&[&"allocator", &connection.allocator_disabled()?]);
//! table.row(&[&"flushing", &connection.flushing_disabled()?]);
//! print!("{}", table);
//! # Ok(())
//! # }
//! ```
#[macro_use]
extern crate serde_derive;

pub mod connection;
pub mod error;
pub mod tabular;
pub mod utility;

pub use connection::{AllocatorState, Connection, ConnectionConfig, EsVersion, FlushingState};
pub use error::{EsAdminError, Result};
pub use tabular::TabularPrinter;
