//! The structs
//!
use std::collections::BTreeMap;
use std::time::Duration;
use serde_json::{Map, Value};

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 9200;

pub const ROOT_ENDPOINT: &str = "/";
pub const CLUSTER_STATE_ENDPOINT: &str = "/_cluster/state";
pub const LOCAL_NODES_ENDPOINT: &str = "/_nodes/_local";
pub const LEGACY_LOCAL_NODES_ENDPOINT: &str = "/_cluster/nodes/_local";
pub const INDEX_SETTINGS_ENDPOINT: &str = "/_settings";
pub const CLUSTER_SETTINGS_ENDPOINT: &str = "/_cluster/settings";

pub const TRANSLOG_DISABLE_FLUSH: &str = "index.translog.disable_flush";
pub const DISABLE_ALLOCATION: &str = "cluster.routing.allocation.disable_allocation";
/// Reported for an index that does not set [TRANSLOG_DISABLE_FLUSH].
pub const UNKNOWN_SETTING: &str = "unknown";

/// Where and how to connect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    pub host: String,
    pub port: u16,
    /// Bounds the TCP reachability check in `connect()` and every request. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

/// A blocking HTTP connection to one cluster node.
///
/// Not safe for concurrent use: it owns a single transport and caches the server version
/// without any locking. The transport is released by [Connection::close] or on drop.
#[derive(Debug)]
pub struct Connection {
    pub(crate) config: ConnectionConfig,
    pub(crate) client: Option<reqwest::blocking::Client>,
    pub(crate) es_version: Option<EsVersion>,
}

/// The numeric parts of a version string, compared like a tuple.
///
/// `1.0.0-rc1` is `[1, 0, 0, 1]`, which orders after `[1, 0, 0]`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EsVersion(pub Vec<u64>);

/// Has the automatic shard allocator been disabled for this cluster?
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocatorState {
    Disabled,
    Enabled,
    Unknown,
}

/// Has automatic translog flushing been disabled on the indices of this cluster?
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlushingState {
    /// Disabled on all indices.
    Disabled,
    /// Enabled on all indices.
    Enabled,
    /// Disabled on some of the indices only; displayed as `some`.
    Partial,
    Unknown,
}

/// The root struct for deserializing `/`.
///
/// Only the version number is read.
///
/// ```text
/// {
///   "status" : 200,
///   "name" : "Thunderbird",
///   "version" : {
///     "number" : "1.0.0-rc1",
///     "build_hash" : "72cd1f1a3eee09505e036106146dc1949dc5dc87",
///     "build_timestamp" : "2014-01-13T10:06:05Z",
///     "build_snapshot" : false,
///     "lucene_version" : "4.6"
///   },
///   "tagline" : "You Know, for Search"
/// }
/// ```
#[derive(Deserialize, Debug)]
pub(crate) struct RootInfo {
    pub version: RootVersion,
}
#[derive(Deserialize, Debug)]
pub(crate) struct RootVersion {
    pub number: String,
}

/// The parts of `/_cluster/state` that are used.
///
/// ```text
/// {
///   "cluster_name": "elasticsearch",
///   "master_node": "1cTtMDGxTMGP0t-qiP3vXA",
///   "blocks": {},
///   "nodes": {
///     "1cTtMDGxTMGP0t-qiP3vXA": {
///       "name": "Thunderbird",
///       "transport_address": "inet[/10.0.0.1:9300]",
///       "attributes": {}
///     }
///   },
///   "metadata": {
///     "templates": {},
///     "indices": {
///       "logs-2014.01.01": { "state": "open", "settings": {}, "mappings": {}, "aliases": [] }
///     }
///   },
///   "routing_table": {},
///   "routing_nodes": {}
/// }
/// ```
/// `master_node` is absent (or null) while no master is elected.
#[derive(Deserialize, Debug)]
pub(crate) struct ClusterState {
    pub master_node: Option<String>,
    pub nodes: Option<BTreeMap<String, ClusterStateNode>>,
    pub metadata: Option<ClusterStateMetadata>,
}
#[derive(Deserialize, Debug)]
pub(crate) struct ClusterStateNode {
    pub name: Option<String>,
}
#[derive(Deserialize, Debug)]
pub(crate) struct ClusterStateMetadata {
    pub indices: Map<String, Value>,
}

/// `/_nodes/_local` and `/_cluster/nodes/_local`.
///
/// ```text
/// {
///   "cluster_name": "elasticsearch",
///   "nodes": {
///     "1cTtMDGxTMGP0t-qiP3vXA": { "name": "Thunderbird", ... }
///   }
/// }
/// ```
/// The node mapping holds exactly one node: the one answering the request.
#[derive(Deserialize, Debug)]
pub(crate) struct NodesInfo {
    pub nodes: Map<String, Value>,
}

/// One entry of `/_settings`, which maps index name to its (flat) settings.
///
/// ```text
/// {
///   "logs-2014.01.01": {
///     "settings": {
///       "index.number_of_shards": "5",
///       "index.translog.disable_flush": "true"
///     }
///   }
/// }
/// ```
#[derive(Deserialize, Debug)]
pub(crate) struct IndexSettings {
    pub settings: Map<String, Value>,
}

/// `/_cluster/settings`.
///
/// ```text
/// {
///   "persistent": { "cluster.routing.allocation.disable_allocation": "true" },
///   "transient": {}
/// }
/// ```
#[derive(Deserialize, Debug)]
pub(crate) struct ClusterSettings {
    pub persistent: Map<String, Value>,
    pub transient: Map<String, Value>,
}
