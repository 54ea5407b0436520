//! Module for talking to a single Elasticsearch node over HTTP.
//!
//! A [Connection] issues GET/PUT/POST/DELETE requests and decodes the JSON that comes back.
//! Only HTTP 200 counts as success. An empty body decodes as an empty object, a non-empty body
//! that is not JSON is an error.
//!
//! On top of that it answers a few questions about the cluster, using these endpoints:
//! - `/` for the version number ([Connection::es_version]).
//! - `/_cluster/state` for the elected master and the index names ([Connection::master],
//!   [Connection::master_node_id], [Connection::indices]).
//! - `/_nodes/_local` (1.0.0 and later) or `/_cluster/nodes/_local` (before 1.0.0) for the id
//!   of the node we are talking to ([Connection::my_node_id]).
//! - `/_settings` for the per index `index.translog.disable_flush` setting
//!   ([Connection::get_index_translog_disable_flush], [Connection::flushing_disabled]).
//! - `/_cluster/settings` for `cluster.routing.allocation.disable_allocation`
//!   ([Connection::allocator_disabled]).
//!
//! A connection holds one transport and a cached version; it is meant to be used by one caller
//! at a time. Use one connection per thread when querying concurrently.
//!
mod structs;
mod functions;

pub use structs::*;
