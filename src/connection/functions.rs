//! The impls and functions
//!
use std::collections::{BTreeMap, BTreeSet};
use std::env;
use std::fmt;
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::str::FromStr;
use std::sync::LazyLock;
use std::time::Duration;
use log::*;
use regex::Regex;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use super::structs::*;
use crate::error::{EsAdminError, Result};
use crate::utility::{booleanise, parse_bool};

// Everything except digits and the separators goes: 1.0.0-rc1 becomes 1.0.0-1.
static VERSION_NOISE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9.-]").expect("version noise regex should compile"));
static VERSION_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.-]").expect("version separator regex should compile"));

impl Default for ConnectionConfig {
    fn default() -> Self {
        ConnectionConfig::new(DEFAULT_HOST, DEFAULT_PORT)
    }
}

impl ConnectionConfig {
    pub fn new(
        host: impl Into<String>,
        port: u16,
    ) -> Self
    {
        ConnectionConfig {
            host: host.into(),
            port,
            timeout: None,
        }
    }
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
    /// Read `ESADMIN_HOST`, `ESADMIN_PORT` and `ESADMIN_TIMEOUT` (seconds) from the environment,
    /// after loading a `.env` file if there is one. Unset values fall back to the defaults.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        ConnectionConfig::from_vars(|name| env::var(name).ok())
    }
    pub(crate) fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = match lookup("ESADMIN_HOST") {
            Some(set_var) => {
                info!("host set via environment: ESADMIN_HOST: {}", set_var);
                set_var
            }
            None => {
                info!("host not set: using DEFAULT_HOST: {}", DEFAULT_HOST);
                DEFAULT_HOST.to_string()
            }
        };
        let port = match lookup("ESADMIN_PORT") {
            Some(set_var) => {
                info!("port set via environment: ESADMIN_PORT: {}", set_var);
                set_var
                    .trim()
                    .parse::<u16>()
                    .map_err(|e| EsAdminError::Config(format!("ESADMIN_PORT={}: {}", set_var, e)))?
            }
            None => {
                info!("port not set: using DEFAULT_PORT: {}", DEFAULT_PORT);
                DEFAULT_PORT
            }
        };
        let timeout = match lookup("ESADMIN_TIMEOUT") {
            Some(set_var) => {
                info!("timeout set via environment: ESADMIN_TIMEOUT: {}", set_var);
                let invalid = || EsAdminError::Config(format!("ESADMIN_TIMEOUT={}: expected a positive number of seconds", set_var));
                let seconds = set_var.trim().parse::<f64>().map_err(|_| invalid())?;
                let timeout = Duration::try_from_secs_f64(seconds).map_err(|e| {
                    EsAdminError::Config(format!("ESADMIN_TIMEOUT={}: {}", set_var, e))
                })?;
                // connect_timeout rejects a zero duration
                if timeout.is_zero() {
                    return Err(invalid());
                }
                Some(timeout)
            }
            None => None,
        };
        Ok(ConnectionConfig { host, port, timeout })
    }
}

impl EsVersion {
    /// Parse a version number as reported under `version.number` by `/`.
    pub fn parse(number: &str) -> Result<EsVersion> {
        let sanitized = VERSION_NOISE.replace_all(number, "");
        let parts = VERSION_SEPARATORS
            .split(&sanitized)
            .filter(|part| !part.is_empty())
            .map(|part| part.parse::<u64>())
            .collect::<std::result::Result<Vec<u64>, _>>()
            .map_err(|e| EsAdminError::schema(ROOT_ENDPOINT, format!("unparsable version number {:?}: {}", number, e)))?;
        if parts.is_empty() {
            return Err(EsAdminError::schema(ROOT_ENDPOINT, format!("version number {:?} contains no numbers", number)));
        }
        Ok(EsVersion(parts))
    }
    /// 1.0.0 replaced `/_cluster/nodes` with `/_nodes`.
    pub fn has_nodes_api(&self) -> bool {
        *self >= EsVersion(vec![1, 0, 0])
    }
    pub fn local_nodes_endpoint(&self) -> &'static str {
        if self.has_nodes_api() {
            LOCAL_NODES_ENDPOINT
        } else {
            LEGACY_LOCAL_NODES_ENDPOINT
        }
    }
}

impl FromStr for EsVersion {
    type Err = EsAdminError;

    fn from_str(number: &str) -> Result<Self> {
        EsVersion::parse(number)
    }
}

impl fmt::Display for EsVersion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|part| part.to_string()).collect();
        write!(f, "{}", parts.join("."))
    }
}

impl AllocatorState {
    pub fn as_str(&self) -> &'static str {
        match self {
            AllocatorState::Disabled => "disabled",
            AllocatorState::Enabled => "enabled",
            AllocatorState::Unknown => "unknown",
        }
    }
    /// Persistent settings are read first, then transient ones; the last recognised value wins.
    pub(crate) fn from_cluster_settings(settings: &ClusterSettings) -> AllocatorState {
        let mut state = AllocatorState::Unknown;
        for (scope, scope_settings) in [("persistent", &settings.persistent), ("transient", &settings.transient)] {
            if let Some(value) = scope_settings.get(DISABLE_ALLOCATION) {
                match parse_bool(value) {
                    Some(true) => state = AllocatorState::Disabled,
                    Some(false) => state = AllocatorState::Enabled,
                    None => debug!("{} {} has unrecognised value {}, ignored", scope, DISABLE_ALLOCATION, value),
                }
            }
        }
        state
    }
}

impl fmt::Display for AllocatorState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FlushingState {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlushingState::Disabled => "disabled",
            FlushingState::Enabled => "enabled",
            FlushingState::Partial => "some",
            FlushingState::Unknown => "unknown",
        }
    }
    /// Summarise the per index flags returned by [Connection::get_index_translog_disable_flush].
    pub fn from_index_flags(flags: &BTreeMap<String, Value>) -> FlushingState {
        let mut states: Vec<&Value> = Vec::new();
        for value in flags.values() {
            if !states.contains(&value) {
                states.push(value);
            }
        }

        let disabled = Value::Bool(true);
        if states.len() > 1 && states.contains(&&disabled) {
            FlushingState::Partial
        } else if states.len() == 1 {
            match states[0] {
                Value::Bool(true) => FlushingState::Disabled,
                Value::String(string) if string == UNKNOWN_SETTING => FlushingState::Unknown,
                _ => FlushingState::Enabled,
            }
        } else {
            FlushingState::Unknown
        }
    }
}

impl fmt::Display for FlushingState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Connection {
    pub fn new(
        host: impl Into<String>,
        port: u16,
    ) -> Self
    {
        Connection::with_config(ConnectionConfig::new(host, port))
    }
    pub fn with_config(config: ConnectionConfig) -> Self {
        Connection {
            config,
            client: None,
            es_version: None,
        }
    }
    /// Create and connect in one go.
    pub fn open(config: ConnectionConfig) -> Result<Self> {
        let mut connection = Connection::with_config(config);
        connection.connect()?;
        Ok(connection)
    }
    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }
    pub fn is_connected(&self) -> bool {
        self.client.is_some()
    }
    /// Check the node accepts TCP connections and set up the HTTP transport.
    pub fn connect(&mut self) -> Result<()> {
        let address = self.config.address();
        let socket_addresses: Vec<SocketAddr> = (self.config.host.as_str(), self.config.port)
            .to_socket_addrs()
            .map_err(|e| EsAdminError::Connection(format!("{}: {}", address, e)))?
            .collect();

        // plain TcpStream instead of port_scanner, which has no connect timeout
        let reachable = socket_addresses.iter().any(|socket_address| {
            let attempt = match self.config.timeout {
                Some(timeout) => TcpStream::connect_timeout(socket_address, timeout),
                None => TcpStream::connect(socket_address),
            };
            attempt
                .map_err(|e| debug!("{} ({}) cannot be reached: {}", address, socket_address, e))
                .is_ok()
        });
        if !reachable {
            warn!("{} cannot be reached", address);
            return Err(EsAdminError::Connection(format!("{}: not reachable", address)));
        }

        let client = Client::builder()
            .pool_max_idle_per_host(1)
            .timeout(self.config.timeout)
            .build()?;
        self.client = Some(client);
        info!("connected to {}", address);
        Ok(())
    }
    /// Release the transport. Closing a closed connection does nothing.
    pub fn close(&mut self) {
        if self.client.take().is_some() {
            info!("closed connection to {}", self.config.address());
        }
    }
    fn client(&mut self) -> Result<&Client> {
        if self.client.is_none() {
            debug!("not connected to {}, connecting", self.config.address());
            self.connect()?;
        }
        self.client
            .as_ref()
            .ok_or_else(|| EsAdminError::Connection(self.config.address()))
    }
    /// Send a request and decode the JSON response.
    ///
    /// Anything but HTTP 200 is an [EsAdminError::Http]. An empty body decodes to an empty object;
    /// a non-empty body that is not JSON is logged and returned as [EsAdminError::Decode].
    pub fn request(
        &mut self,
        method: Method,
        path: &str,
        data: Option<&str>,
    ) -> Result<Value>
    {
        let url = format!("http://{}{}", self.config.address(), path);
        let client = self.client()?;

        let mut request = client.request(method.clone(), url.as_str());
        if let Some(data) = data {
            if !data.is_empty() {
                request = request.header(CONTENT_TYPE, "application/json");
            }
            request = request.body(data.to_string());
        }
        let response = request.send()?;

        let status = response.status();
        debug!("{} {} = {}", method, url, status);
        if status != StatusCode::OK {
            return Err(EsAdminError::Http {
                status: status.as_u16(),
                method: method.to_string(),
                path: path.to_string(),
                data: data.map(str::to_string),
            });
        }

        let body = response.bytes()?;
        parse_body(&body)
    }
    pub fn get(&mut self, path: &str) -> Result<Value> {
        self.request(Method::GET, path, None)
    }
    pub fn put(&mut self, path: &str, data: &str) -> Result<Value> {
        self.request(Method::PUT, path, Some(data))
    }
    /// `None` sends an empty body.
    pub fn post(&mut self, path: &str, data: Option<&str>) -> Result<Value> {
        self.request(Method::POST, path, Some(data.unwrap_or("")))
    }
    /// `None` sends an empty body.
    pub fn delete(&mut self, path: &str, data: Option<&str>) -> Result<Value> {
        self.request(Method::DELETE, path, Some(data.unwrap_or("")))
    }
    fn cluster_state(&mut self) -> Result<ClusterState> {
        let state = self.get(CLUSTER_STATE_ENDPOINT)?;
        decode(state, CLUSTER_STATE_ENDPOINT)
    }
    /// Id of the elected master node.
    pub fn master_node_id(&mut self) -> Result<String> {
        let state = self.cluster_state()?;
        elected_master(&state)
    }
    /// Name of the elected master node.
    pub fn master(&mut self) -> Result<String> {
        let state = self.cluster_state()?;
        let id = elected_master(&state)?;
        state
            .nodes
            .as_ref()
            .and_then(|nodes| nodes.get(&id))
            .and_then(|node| node.name.clone())
            .ok_or_else(|| EsAdminError::schema(CLUSTER_STATE_ENDPOINT, format!("master node {} has no entry with a name in nodes", id)))
    }
    /// Version of the node, read from `/` on first use and cached after that.
    pub fn es_version(&mut self) -> Result<EsVersion> {
        if let Some(version) = &self.es_version {
            return Ok(version.clone());
        }
        let root: RootInfo = decode(self.get(ROOT_ENDPOINT)?, ROOT_ENDPOINT)?;
        let version = EsVersion::parse(&root.version.number)?;
        debug!("version number {} parsed as {:?}", root.version.number, version.0);
        self.es_version = Some(version.clone());
        Ok(version)
    }
    /// Id of the node this connection talks to.
    pub fn my_node_id(&mut self) -> Result<String> {
        let endpoint = self.es_version()?.local_nodes_endpoint();
        let info: NodesInfo = decode(self.get(endpoint)?, endpoint)?;
        info.nodes
            .keys()
            .next()
            .cloned()
            .ok_or_else(|| EsAdminError::schema(endpoint, "nodes is empty"))
    }
    /// Names of all indices in the cluster state.
    pub fn indices(&mut self) -> Result<BTreeSet<String>> {
        let state = self.cluster_state()?;
        state
            .metadata
            .map(|metadata| metadata.indices.keys().cloned().collect())
            .ok_or_else(|| EsAdminError::schema(CLUSTER_STATE_ENDPOINT, "missing field `metadata`"))
    }
    /// Position of the `index.translog.disable_flush` knob per index.
    ///
    /// `true` means autoflushing is disabled, `false` enabled, and `"unknown"` that the index
    /// uses the default setting. A value that is not a boolean is passed through unchanged.
    pub fn get_index_translog_disable_flush(&mut self) -> Result<BTreeMap<String, Value>> {
        let settings: BTreeMap<String, IndexSettings> = decode(self.get(INDEX_SETTINGS_ENDPOINT)?, INDEX_SETTINGS_ENDPOINT)?;
        Ok(translog_disable_flush(settings))
    }
    /// One word answer to "has the automatic shard allocator been disabled for this cluster?"
    pub fn allocator_disabled(&mut self) -> Result<AllocatorState> {
        let settings: ClusterSettings = decode(self.get(CLUSTER_SETTINGS_ENDPOINT)?, CLUSTER_SETTINGS_ENDPOINT)?;
        Ok(AllocatorState::from_cluster_settings(&settings))
    }
    /// One word answer to "has automatic translog flushing been disabled on all indices?"
    pub fn flushing_disabled(&mut self) -> Result<FlushingState> {
        let flags = self.get_index_translog_disable_flush()?;
        Ok(FlushingState::from_index_flags(&flags))
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        self.close();
    }
}

pub(crate) fn parse_body(body: &[u8]) -> Result<Value> {
    if body.is_empty() {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_slice(body).map_err(|source| {
        let body = String::from_utf8_lossy(body).into_owned();
        error!("Failed to parse JSON in response: {:?}", body);
        EsAdminError::Decode { source, body }
    })
}

fn decode<T: DeserializeOwned>(
    value: Value,
    endpoint: &str,
) -> Result<T>
{
    serde_json::from_value(value).map_err(|e| EsAdminError::schema(endpoint, e.to_string()))
}

fn elected_master(state: &ClusterState) -> Result<String> {
    state
        .master_node
        .clone()
        .ok_or_else(|| EsAdminError::schema(CLUSTER_STATE_ENDPOINT, "no elected master_node"))
}

fn translog_disable_flush(settings: BTreeMap<String, IndexSettings>) -> BTreeMap<String, Value> {
    settings
        .into_iter()
        .map(|(index, index_settings)| {
            let flag = index_settings
                .settings
                .get(TRANSLOG_DISABLE_FLUSH)
                .cloned()
                .unwrap_or_else(|| Value::String(UNKNOWN_SETTING.to_string()));
            (index, booleanise(flag))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;
    use serde_json::json;

    fn flags(value: Value) -> BTreeMap<String, Value> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn unit_parse_release_candidate_version() {
        let version = EsVersion::parse("1.0.0-rc1").unwrap();
        assert_eq!(version, EsVersion(vec![1, 0, 0, 1]));
        assert!(version >= EsVersion(vec![1, 0, 0]));
        assert!(version.has_nodes_api());
        assert_eq!(version.to_string(), "1.0.0.1");
    }

    #[test]
    fn unit_parse_versions_and_pick_nodes_endpoint() {
        assert_eq!(EsVersion::parse("0.90.10").unwrap().local_nodes_endpoint(), "/_cluster/nodes/_local");
        assert_eq!(EsVersion::parse("0.90.0.Beta1").unwrap(), EsVersion(vec![0, 90, 0, 1]));
        assert_eq!(EsVersion::parse("1.7.5").unwrap().local_nodes_endpoint(), "/_nodes/_local");
        assert_eq!(EsVersion::parse("2.0.0-beta").unwrap(), EsVersion(vec![2, 0, 0]));
        assert_eq!("7.17.9".parse::<EsVersion>().unwrap(), EsVersion(vec![7, 17, 9]));
        assert!(EsVersion(vec![1]) < EsVersion(vec![1, 0, 0]));
        assert!(!EsVersion(vec![1]).has_nodes_api());
    }

    #[test]
    fn unit_parse_version_without_numbers_fails() {
        let result = EsVersion::parse("unreleased");
        assert!(matches!(result, Err(EsAdminError::Schema { .. })));
        let result = EsVersion::parse("1.99999999999999999999999.0");
        assert!(matches!(result, Err(EsAdminError::Schema { .. })));
    }

    #[test]
    fn unit_allocator_persistent_only() {
        let settings: ClusterSettings = serde_json::from_value(json!({
            "persistent": { "cluster.routing.allocation.disable_allocation": "true" },
            "transient": {}
        })).unwrap();
        assert_eq!(AllocatorState::from_cluster_settings(&settings), AllocatorState::Disabled);
    }

    #[test]
    fn unit_allocator_transient_wins() {
        let settings: ClusterSettings = serde_json::from_value(json!({
            "persistent": { "cluster.routing.allocation.disable_allocation": "false" },
            "transient": { "cluster.routing.allocation.disable_allocation": true }
        })).unwrap();
        assert_eq!(AllocatorState::from_cluster_settings(&settings), AllocatorState::Disabled);

        let settings: ClusterSettings = serde_json::from_value(json!({
            "persistent": { "cluster.routing.allocation.disable_allocation": "true" },
            "transient": { "cluster.routing.allocation.disable_allocation": "FALSE" }
        })).unwrap();
        assert_eq!(AllocatorState::from_cluster_settings(&settings), AllocatorState::Enabled);
    }

    #[test]
    fn unit_allocator_unknown() {
        let settings: ClusterSettings = serde_json::from_value(json!({
            "persistent": { "cluster.routing.allocation.enable": "none" },
            "transient": {}
        })).unwrap();
        assert_eq!(AllocatorState::from_cluster_settings(&settings), AllocatorState::Unknown);
        assert_eq!(AllocatorState::Unknown.to_string(), "unknown");

        // an unrecognised transient value leaves the persistent answer in place
        let settings: ClusterSettings = serde_json::from_value(json!({
            "persistent": { "cluster.routing.allocation.disable_allocation": "false" },
            "transient": { "cluster.routing.allocation.disable_allocation": "sometimes" }
        })).unwrap();
        assert_eq!(AllocatorState::from_cluster_settings(&settings), AllocatorState::Enabled);
    }

    #[test]
    fn unit_flushing_states() {
        assert_eq!(FlushingState::from_index_flags(&flags(json!({"a": true, "b": true}))), FlushingState::Disabled);
        assert_eq!(FlushingState::from_index_flags(&flags(json!({"a": true, "b": false}))), FlushingState::Partial);
        assert_eq!(FlushingState::from_index_flags(&flags(json!({"a": true, "b": "unknown"}))), FlushingState::Partial);
        assert_eq!(FlushingState::from_index_flags(&flags(json!({"a": false, "b": false}))), FlushingState::Enabled);
        assert_eq!(FlushingState::from_index_flags(&flags(json!({"a": "unknown"}))), FlushingState::Unknown);
        assert_eq!(FlushingState::from_index_flags(&flags(json!({"a": false, "b": "unknown"}))), FlushingState::Unknown);
        assert_eq!(FlushingState::from_index_flags(&flags(json!({}))), FlushingState::Unknown);
        assert_eq!(FlushingState::Partial.to_string(), "some");
    }

    #[test]
    fn unit_translog_disable_flush_defaults_to_unknown() {
        let settings: BTreeMap<String, IndexSettings> = serde_json::from_value(json!({
            "logs-1": { "settings": { "index.translog.disable_flush": "true", "index.number_of_shards": "5" } },
            "logs-2": { "settings": { "index.translog.disable_flush": "False" } },
            "logs-3": { "settings": { "index.number_of_shards": "1" } },
            "logs-4": { "settings": { "index.translog.disable_flush": "later" } }
        })).unwrap();
        let result = translog_disable_flush(settings);
        assert_eq!(result["logs-1"], json!(true));
        assert_eq!(result["logs-2"], json!(false));
        assert_eq!(result["logs-3"], json!("unknown"));
        assert_eq!(result["logs-4"], json!("later"));
    }

    #[test]
    fn unit_parse_body() {
        assert_eq!(parse_body(b"").unwrap(), json!({}));
        assert_eq!(parse_body(br#"{"acknowledged":true}"#).unwrap(), json!({"acknowledged": true}));
        assert_eq!(parse_body(b"[1,2]").unwrap(), json!([1, 2]));
        match parse_body(b"<html>oops</html>") {
            Err(EsAdminError::Decode { body, .. }) => assert_eq!(body, "<html>oops</html>"),
            other => panic!("expected a decode error, got {:?}", other),
        }
        assert!(matches!(parse_body(b" "), Err(EsAdminError::Decode { .. })));
    }

    #[test]
    fn unit_cluster_state_without_master() {
        let state: ClusterState = serde_json::from_value(json!({
            "cluster_name": "elasticsearch",
            "nodes": {}
        })).unwrap();
        assert!(matches!(elected_master(&state), Err(EsAdminError::Schema { .. })));
    }

    #[test]
    fn unit_decode_reports_endpoint() {
        let result: Result<ClusterSettings> = decode(json!({"persistent": {}}), CLUSTER_SETTINGS_ENDPOINT);
        match result {
            Err(EsAdminError::Schema { endpoint, reason }) => {
                assert_eq!(endpoint, "/_cluster/settings");
                assert!(reason.contains("transient"));
            }
            other => panic!("expected a schema error, got {:?}", other),
        }
    }

    #[test]
    fn unit_config_from_vars() {
        let config = ConnectionConfig::from_vars(|_| None).unwrap();
        assert_eq!(config, ConnectionConfig::default());
        assert_eq!(config.address(), "localhost:9200");

        let config = ConnectionConfig::from_vars(|name| match name {
            "ESADMIN_HOST" => Some("es-1.local".to_string()),
            "ESADMIN_PORT" => Some("9201".to_string()),
            "ESADMIN_TIMEOUT" => Some("2.5".to_string()),
            _ => None,
        }).unwrap();
        assert_eq!(config, ConnectionConfig::new("es-1.local", 9201).with_timeout(Duration::from_millis(2500)));
    }

    #[test]
    fn unit_config_rejects_bad_values() {
        let result = ConnectionConfig::from_vars(|name| (name == "ESADMIN_PORT").then(|| "ninety-two hundred".to_string()));
        assert!(matches!(result, Err(EsAdminError::Config(_))));
        for timeout in ["-1", "0", "NaN", "inf", "1e300", "0.0000000001"] {
            let result = ConnectionConfig::from_vars(|name| (name == "ESADMIN_TIMEOUT").then(|| timeout.to_string()));
            assert!(matches!(result, Err(EsAdminError::Config(_))), "timeout {} should be rejected", timeout);
        }
    }

    #[test]
    fn unit_connect_to_closed_port_fails() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let mut connection = Connection::with_config(
            ConnectionConfig::new("127.0.0.1", port).with_timeout(Duration::from_secs(1)),
        );
        assert!(matches!(connection.connect(), Err(EsAdminError::Connection(_))));
        assert!(!connection.is_connected());
        // closing a connection that never opened is fine
        connection.close();
        connection.close();
    }
}
