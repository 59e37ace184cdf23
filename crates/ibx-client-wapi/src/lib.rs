// # Infoblox WAPI Client
//
// This crate provides the concrete `WapiClient` implementation for the ibx
// dispatcher, speaking the Infoblox WAPI (REST) over HTTPS.
//
// ## Behavior
//
// - One invocation, one operation: no retry logic, no backoff, no caching,
//   no background tasks. Errors propagate to the dispatcher untranslated.
// - Searches that match nothing are the `Ok(None)` path, never an error:
//   the WAPI answers such searches with `200` and an empty JSON array.
// - Creates rejected by the appliance with `400 Bad Request` (duplicate
//   object, invalid data) also take the `Ok(None)` path, so the dispatcher
//   reports the action's fixed "Unable to ..." message instead of aborting.
// - Updates and deletes resolve the target object reference by search
//   first; a missing target is `Ok(None)`.
// - HTTP status mapping: 401/403 authentication, 404 not found, 429 rate
//   limited, 5xx transient server error.
//
// ## Security
//
// - The password never appears in logs, Debug output, or error messages.
// - TLS verification is on unless `accept_invalid_certs` is set; many
//   appliances ship self-signed grid-master certificates, so the toggle
//   exists, but it is opt-in.
//
// ## API Reference
//
// - WAPI object model: https://<grid-master>/wapidoc/
// - Search: GET `/wapi/v<version>/<object>?<field>=<value>`
// - Create: POST `/wapi/v<version>/<object>`
// - Update: PUT `/wapi/v<version>/<objref>`
// - Delete: DELETE `/wapi/v<version>/<objref>`
// - Function call: POST `/wapi/v<version>/<objref>?_function=<name>`

use async_trait::async_trait;
use ibx_core::request::{InvocationRequest, Secret};
use ibx_core::traits::WapiClient;
use ibx_core::{Error, Result};
use serde_json::{Map, Value, json};
use std::time::Duration;

/// Default HTTP timeout for WAPI requests (30 seconds)
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for one appliance.
///
/// `Debug` is safe to log: the password field is a redacting [`Secret`].
#[derive(Debug, Clone)]
pub struct WapiConfig {
    /// Grid master host, address, or full `http(s)://` origin
    pub server: String,
    /// WAPI username
    pub username: String,
    /// WAPI password
    pub password: Secret,
    /// WAPI version segment of the URL, e.g. "2.3.1"
    pub api_version: String,
    /// DNS view record operations are scoped to
    pub dns_view: String,
    /// Network view address operations are scoped to
    pub net_view: String,
    /// Skip TLS certificate verification (self-signed grid masters)
    pub accept_invalid_certs: bool,
}

impl WapiConfig {
    /// Build connection settings from an invocation request
    pub fn from_request(request: &InvocationRequest) -> Self {
        Self {
            server: request.server.clone(),
            username: request.username.clone(),
            password: request.password.clone(),
            api_version: request.api_version.clone(),
            dns_view: request.dns_view.clone(),
            net_view: request.net_view.clone(),
            accept_invalid_certs: false,
        }
    }

    /// Toggle TLS certificate verification
    pub fn with_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }
}

/// `WapiClient` implementation backed by reqwest
pub struct WapiHttpClient {
    config: WapiConfig,
    client: reqwest::Client,
    base_url: String,
}

impl std::fmt::Debug for WapiHttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WapiHttpClient")
            .field("base_url", &self.base_url)
            .field("username", &self.config.username)
            .field("password", &"<REDACTED>")
            .finish()
    }
}

fn q(key: &str, value: &str) -> (String, String) {
    (key.to_string(), value.to_string())
}

impl WapiHttpClient {
    /// Create a client for one appliance.
    ///
    /// Fails fast on empty connection parameters; no network traffic is
    /// issued until the first operation.
    pub fn new(config: WapiConfig) -> Result<Self> {
        if config.server.is_empty() {
            return Err(Error::config("WAPI server cannot be empty"));
        }
        if config.username.is_empty() {
            return Err(Error::config("WAPI username cannot be empty"));
        }
        if config.password.is_empty() {
            return Err(Error::config("WAPI password cannot be empty"));
        }

        let client = reqwest::Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(|e| Error::wapi(format!("failed to build HTTP client: {e}")))?;

        let base_url = base_url(&config.server, &config.api_version);

        Ok(Self {
            config,
            client,
            base_url,
        })
    }

    fn object_url(&self, object_or_ref: &str) -> String {
        format!("{}/{}", self.base_url, object_or_ref)
    }

    fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        self.client
            .request(method, url)
            .basic_auth(&self.config.username, Some(self.config.password.expose()))
    }

    /// Search for objects. `Ok(None)` when the result set is empty.
    async fn search(
        &self,
        object: &str,
        query: Vec<(String, String)>,
    ) -> Result<Option<Value>> {
        let url = self.object_url(object);
        tracing::debug!(object, "WAPI search");

        let response = self
            .request(reqwest::Method::GET, &url)
            .query(&query)
            .send()
            .await
            .map_err(|e| Error::wapi(format!("HTTP request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(error_from_response("search", object, response).await);
        }

        let value: Value = response
            .json()
            .await
            .map_err(|e| Error::wapi(format!("failed to parse search response: {e}")))?;

        match value {
            Value::Array(items) if items.is_empty() => Ok(None),
            other => Ok(Some(other)),
        }
    }

    /// Search and return the first matching object reference
    async fn find_ref(
        &self,
        object: &str,
        query: Vec<(String, String)>,
    ) -> Result<Option<String>> {
        let Some(found) = self.search(object, query).await? else {
            return Ok(None);
        };

        found
            .as_array()
            .and_then(|items| items.first())
            .and_then(|item| item.get("_ref"))
            .and_then(Value::as_str)
            .map(|objref| Some(objref.to_string()))
            .ok_or_else(|| Error::wapi(format!("search result for '{object}' carries no _ref")))
    }

    /// Create an object. The appliance answers with the new object
    /// reference; a `400` rejection (duplicate, invalid data) is the
    /// "unable to create" path, not a hard error.
    async fn create(&self, object: &str, body: Value) -> Result<Option<Value>> {
        let url = self.object_url(object);
        tracing::debug!(object, "WAPI create");

        let response = self
            .request(reqwest::Method::POST, &url)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::wapi(format!("HTTP request failed: {e}")))?;

        if response.status() == reqwest::StatusCode::BAD_REQUEST {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read error body".to_string());
            tracing::warn!(object, "create rejected by appliance: {text}");
            return Ok(None);
        }

        if !response.status().is_success() {
            return Err(error_from_response("create", object, response).await);
        }

        let objref: Value = response
            .json()
            .await
            .map_err(|e| Error::wapi(format!("failed to parse create response: {e}")))?;
        Ok(Some(objref))
    }

    /// Update an object by reference; answers with the reference
    async fn update(&self, objref: &str, body: Value) -> Result<Value> {
        let url = self.object_url(objref);
        tracing::debug!(objref, "WAPI update");

        let response = self
            .request(reqwest::Method::PUT, &url)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::wapi(format!("HTTP request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(error_from_response("update", objref, response).await);
        }

        response
            .json()
            .await
            .map_err(|e| Error::wapi(format!("failed to parse update response: {e}")))
    }

    /// Delete an object by reference; answers with the reference
    async fn delete(&self, objref: &str) -> Result<Value> {
        let url = self.object_url(objref);
        tracing::debug!(objref, "WAPI delete");

        let response = self
            .request(reqwest::Method::DELETE, &url)
            .send()
            .await
            .map_err(|e| Error::wapi(format!("HTTP request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(error_from_response("delete", objref, response).await);
        }

        response
            .json()
            .await
            .map_err(|e| Error::wapi(format!("failed to parse delete response: {e}")))
    }

    /// Call a WAPI function on an object reference
    async fn call_function(&self, objref: &str, function: &str, body: Value) -> Result<Option<Value>> {
        let url = self.object_url(objref);
        tracing::debug!(objref, function, "WAPI function call");

        let response = self
            .request(reqwest::Method::POST, &url)
            .query(&[("_function", function)])
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::wapi(format!("HTTP request failed: {e}")))?;

        // The appliance reports exhaustion (no next available network) as a
        // 400 with an explanatory body
        if response.status() == reqwest::StatusCode::BAD_REQUEST {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read error body".to_string());
            tracing::warn!(objref, function, "function call rejected: {text}");
            return Ok(None);
        }

        if !response.status().is_success() {
            return Err(error_from_response(function, objref, response).await);
        }

        let value: Value = response
            .json()
            .await
            .map_err(|e| Error::wapi(format!("failed to parse function response: {e}")))?;
        Ok(Some(value))
    }

    /// Find an object by search, then update it. `Ok(None)` when nothing
    /// matches the search.
    async fn update_found(
        &self,
        object: &str,
        query: Vec<(String, String)>,
        body: Value,
    ) -> Result<Option<Value>> {
        let Some(objref) = self.find_ref(object, query).await? else {
            return Ok(None);
        };
        self.update(&objref, body).await.map(Some)
    }

    /// Find an object by search, then delete it. `Ok(None)` when nothing
    /// matches the search.
    async fn delete_found(
        &self,
        object: &str,
        query: Vec<(String, String)>,
    ) -> Result<Option<Value>> {
        let Some(objref) = self.find_ref(object, query).await? else {
            return Ok(None);
        };
        self.delete(&objref).await.map(Some)
    }

    fn net_view_query(&self, mut query: Vec<(String, String)>) -> Vec<(String, String)> {
        query.push(q("network_view", &self.config.net_view));
        query
    }

    fn dns_view_query(&self, mut query: Vec<(String, String)>) -> Vec<(String, String)> {
        query.push(q("view", &self.config.dns_view));
        query
    }
}

fn base_url(server: &str, api_version: &str) -> String {
    // Bare hostnames get the https scheme; a full origin (useful against a
    // test server) is taken as-is
    if server.starts_with("http://") || server.starts_with("https://") {
        format!("{}/wapi/v{}", server.trim_end_matches('/'), api_version)
    } else {
        format!("https://{server}/wapi/v{api_version}")
    }
}

fn with_fields(mut query: Vec<(String, String)>, fields: Option<&str>) -> Vec<(String, String)> {
    if let Some(fields) = fields {
        query.push(q("_return_fields", fields));
    }
    query
}

/// Map a non-success WAPI response onto a typed error
async fn error_from_response(
    operation: &str,
    target: &str,
    response: reqwest::Response,
) -> Error {
    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "unable to read error body".to_string());

    match status.as_u16() {
        401 | 403 => Error::auth(format!(
            "{operation} '{target}' rejected: invalid credentials or insufficient permissions (status {status})"
        )),
        404 => Error::not_found(format!("{operation} '{target}': {status} - {body}")),
        429 => Error::rate_limited(format!(
            "{operation} '{target}' throttled by the appliance (status {status})"
        )),
        500..=599 => Error::wapi(format!(
            "{operation} '{target}': appliance server error {status} - {body}"
        )),
        _ => Error::wapi(format!("{operation} '{target}' failed: {status} - {body}")),
    }
}

#[async_trait]
impl WapiClient for WapiHttpClient {
    async fn get_memberservers(&self) -> Result<Option<Value>> {
        self.search("member", Vec::new()).await
    }

    async fn get_dhcp_servers(&self) -> Result<Option<Value>> {
        self.search("member:dhcpproperties", Vec::new()).await
    }

    async fn get_dhcpfailover(&self) -> Result<Option<Value>> {
        self.search("dhcpfailover", Vec::new()).await
    }

    async fn get_network(&self, network: &str, fields: Option<&str>) -> Result<Option<Value>> {
        let query = self.net_view_query(vec![q("network", network)]);
        self.search("network", with_fields(query, fields)).await
    }

    async fn get_network_by_ip(
        &self,
        ip_address: &str,
        fields: Option<&str>,
    ) -> Result<Option<Value>> {
        let query = self.net_view_query(vec![q("contains_address", ip_address)]);
        self.search("network", with_fields(query, fields)).await
    }

    async fn get_network_by_comment(
        &self,
        comment: &str,
        fields: Option<&str>,
    ) -> Result<Option<Value>> {
        // `~` is the WAPI regex search modifier
        let query = self.net_view_query(vec![q("comment~", comment)]);
        self.search("network", with_fields(query, fields)).await
    }

    async fn get_next_available_network(
        &self,
        network: &str,
        cidr: Option<u32>,
        num: Option<u32>,
    ) -> Result<Option<Value>> {
        // The function lives on the parent object: prefer a container with
        // that CIDR, fall back to a plain network
        let container_query = self.net_view_query(vec![q("network", network)]);
        let objref = match self.find_ref("networkcontainer", container_query).await? {
            Some(objref) => Some(objref),
            None => {
                let network_query = self.net_view_query(vec![q("network", network)]);
                self.find_ref("network", network_query).await?
            }
        };
        let Some(objref) = objref else {
            return Ok(None);
        };

        let mut body = Map::new();
        if let Some(cidr) = cidr {
            body.insert("cidr".to_string(), json!(cidr));
        }
        body.insert("num".to_string(), json!(num.unwrap_or(1)));

        self.call_function(&objref, "next_available_network", Value::Object(body))
            .await
    }

    async fn get_network_container(
        &self,
        network: &str,
        fields: Option<&str>,
    ) -> Result<Option<Value>> {
        let query = self.net_view_query(vec![q("network", network)]);
        self.search("networkcontainer", with_fields(query, fields))
            .await
    }

    async fn get_range(
        &self,
        start_addr: &str,
        end_addr: &str,
        fields: Option<&str>,
    ) -> Result<Option<Value>> {
        let query =
            self.net_view_query(vec![q("start_addr", start_addr), q("end_addr", end_addr)]);
        self.search("range", with_fields(query, fields)).await
    }

    async fn get_dns_record(
        &self,
        record_type: &str,
        record: &str,
        fields: Option<&str>,
    ) -> Result<Option<Value>> {
        let object = format!("record:{}", record_type.to_lowercase());
        let query = self.dns_view_query(vec![q("name", record)]);
        self.search(&object, with_fields(query, fields)).await
    }

    async fn get_similar_dns_records(
        &self,
        record_type: &str,
        record: &str,
        fields: Option<&str>,
    ) -> Result<Option<Value>> {
        let object = format!("record:{}", record_type.to_lowercase());
        let query = self.dns_view_query(vec![q("name~", record)]);
        self.search(&object, with_fields(query, fields)).await
    }

    async fn get_fixedaddress(
        &self,
        ip_address: &str,
        fields: Option<&str>,
    ) -> Result<Option<Value>> {
        let query = self.net_view_query(vec![q("ipv4addr", ip_address)]);
        self.search("fixedaddress", with_fields(query, fields)).await
    }

    async fn get_fixedaddress_by_mac(
        &self,
        mac_address: &str,
        fields: Option<&str>,
    ) -> Result<Option<Value>> {
        let query = self.net_view_query(vec![q("mac", mac_address)]);
        self.search("fixedaddress", with_fields(query, fields)).await
    }

    async fn create_network(
        &self,
        network: &str,
        comment: Option<&str>,
        template: Option<&str>,
    ) -> Result<Option<Value>> {
        let mut body = Map::new();
        body.insert("network".to_string(), json!(network));
        body.insert("network_view".to_string(), json!(self.config.net_view));
        if let Some(comment) = comment {
            body.insert("comment".to_string(), json!(comment));
        }
        if let Some(template) = template {
            body.insert("template".to_string(), json!(template));
        }

        self.create("network", Value::Object(body)).await
    }

    async fn create_network_container(
        &self,
        network: &str,
        comment: Option<&str>,
    ) -> Result<Option<Value>> {
        let mut body = Map::new();
        body.insert("network".to_string(), json!(network));
        body.insert("network_view".to_string(), json!(self.config.net_view));
        if let Some(comment) = comment {
            body.insert("comment".to_string(), json!(comment));
        }

        self.create("networkcontainer", Value::Object(body)).await
    }

    async fn create_range(
        &self,
        network: &str,
        start_addr: &str,
        end_addr: &str,
        exc_start: Option<&str>,
        exc_end: Option<&str>,
        options: Option<&Value>,
        template: Option<&str>,
    ) -> Result<Option<Value>> {
        let mut body = Map::new();
        body.insert("network".to_string(), json!(network));
        body.insert("start_addr".to_string(), json!(start_addr));
        body.insert("end_addr".to_string(), json!(end_addr));
        body.insert("network_view".to_string(), json!(self.config.net_view));
        if let (Some(exc_start), Some(exc_end)) = (exc_start, exc_end) {
            body.insert(
                "exclude".to_string(),
                json!([{"start_address": exc_start, "end_address": exc_end}]),
            );
        }
        if let Some(options) = options {
            body.insert("options".to_string(), options.clone());
        }
        if let Some(template) = template {
            body.insert("template".to_string(), json!(template));
        }

        self.create("range", Value::Object(body)).await
    }

    async fn create_reservedaddress(
        &self,
        ip_address: &str,
        host: Option<&str>,
    ) -> Result<Option<Value>> {
        // A reservation is a fixed address matched by RESERVED instead of a MAC
        let mut body = Map::new();
        body.insert("ipv4addr".to_string(), json!(ip_address));
        body.insert("match_client".to_string(), json!("RESERVED"));
        body.insert("network_view".to_string(), json!(self.config.net_view));
        if let Some(host) = host {
            body.insert("name".to_string(), json!(host));
        }

        self.create("fixedaddress", Value::Object(body)).await
    }

    async fn create_fixedaddress(
        &self,
        ip_address: &str,
        mac_address: &str,
        host: Option<&str>,
    ) -> Result<Option<Value>> {
        let mut body = Map::new();
        body.insert("ipv4addr".to_string(), json!(ip_address));
        body.insert("mac".to_string(), json!(mac_address));
        body.insert("network_view".to_string(), json!(self.config.net_view));
        if let Some(host) = host {
            body.insert("name".to_string(), json!(host));
        }

        self.create("fixedaddress", Value::Object(body)).await
    }

    async fn create_ztp_fixedaddress(
        &self,
        ip_address: &str,
        mac_address: &str,
        host: Option<&str>,
        tftp_server: Option<&str>,
        cfg_file: Option<&str>,
        vendor_code: Option<&str>,
    ) -> Result<Option<Value>> {
        let mut body = Map::new();
        body.insert("ipv4addr".to_string(), json!(ip_address));
        body.insert("mac".to_string(), json!(mac_address));
        body.insert("network_view".to_string(), json!(self.config.net_view));
        if let Some(host) = host {
            body.insert("name".to_string(), json!(host));
        }
        if let Some(tftp_server) = tftp_server {
            body.insert("nextserver".to_string(), json!(tftp_server));
            body.insert("use_nextserver".to_string(), json!(true));
        }
        if let Some(cfg_file) = cfg_file {
            body.insert("bootfile".to_string(), json!(cfg_file));
            body.insert("use_bootfile".to_string(), json!(true));
        }
        if let Some(vendor_code) = vendor_code {
            body.insert(
                "options".to_string(),
                json!([{
                    "name": "vendor-encapsulated-options",
                    "num": 43,
                    "value": vendor_code,
                }]),
            );
            body.insert("use_options".to_string(), json!(true));
        }

        self.create("fixedaddress", Value::Object(body)).await
    }

    async fn create_a_record(&self, ip_address: &str, fqdn: &str) -> Result<Option<Value>> {
        let body = json!({
            "name": fqdn,
            "ipv4addr": ip_address,
            "view": self.config.dns_view,
        });
        self.create("record:a", body).await
    }

    async fn create_ptr_record(&self, ip_address: &str, fqdn: &str) -> Result<Option<Value>> {
        let body = json!({
            "ptrdname": fqdn,
            "ipv4addr": ip_address,
            "view": self.config.dns_view,
        });
        self.create("record:ptr", body).await
    }

    async fn create_dns_record(&self, ip_address: &str, fqdn: &str) -> Result<Option<Value>> {
        // Forward and reverse entries as a pair; a rejected A record aborts
        // before the PTR is attempted
        let Some(a_ref) = self.create_a_record(ip_address, fqdn).await? else {
            return Ok(None);
        };
        let Some(ptr_ref) = self.create_ptr_record(ip_address, fqdn).await? else {
            return Ok(Some(json!([a_ref])));
        };
        Ok(Some(json!([a_ref, ptr_ref])))
    }

    async fn update_network(
        &self,
        network: &str,
        comment: Option<&str>,
    ) -> Result<Option<Value>> {
        let query = self.net_view_query(vec![q("network", network)]);
        self.update_found("network", query, json!({"comment": comment.unwrap_or_default()}))
            .await
    }

    async fn update_network_container(
        &self,
        network: &str,
        comment: Option<&str>,
    ) -> Result<Option<Value>> {
        let query = self.net_view_query(vec![q("network", network)]);
        self.update_found(
            "networkcontainer",
            query,
            json!({"comment": comment.unwrap_or_default()}),
        )
        .await
    }

    async fn update_reservedaddress(
        &self,
        ip_address: &str,
        host: Option<&str>,
    ) -> Result<Option<Value>> {
        let query = self.net_view_query(vec![q("ipv4addr", ip_address)]);
        self.update_found(
            "fixedaddress",
            query,
            json!({"name": host.unwrap_or_default()}),
        )
        .await
    }

    async fn update_fixedaddress_by_ip_addr(
        &self,
        ip_address: &str,
        mac_address: Option<&str>,
        host: Option<&str>,
    ) -> Result<Option<Value>> {
        let mut body = Map::new();
        if let Some(mac_address) = mac_address {
            body.insert("mac".to_string(), json!(mac_address));
        }
        if let Some(host) = host {
            body.insert("name".to_string(), json!(host));
        }

        let query = self.net_view_query(vec![q("ipv4addr", ip_address)]);
        self.update_found("fixedaddress", query, Value::Object(body))
            .await
    }

    async fn update_fixedaddress_by_mac_addr(
        &self,
        mac_address: &str,
        host: Option<&str>,
    ) -> Result<Option<Value>> {
        let mut body = Map::new();
        if let Some(host) = host {
            body.insert("name".to_string(), json!(host));
        }

        let query = self.net_view_query(vec![q("mac", mac_address)]);
        self.update_found("fixedaddress", query, Value::Object(body))
            .await
    }

    async fn delete_network(&self, network: &str) -> Result<Option<Value>> {
        let query = self.net_view_query(vec![q("network", network)]);
        self.delete_found("network", query).await
    }

    async fn delete_network_container(&self, network: &str) -> Result<Option<Value>> {
        let query = self.net_view_query(vec![q("network", network)]);
        self.delete_found("networkcontainer", query).await
    }

    async fn delete_range(&self, start_addr: &str, end_addr: &str) -> Result<Option<Value>> {
        let query =
            self.net_view_query(vec![q("start_addr", start_addr), q("end_addr", end_addr)]);
        self.delete_found("range", query).await
    }

    async fn delete_reservedaddress(&self, ip_address: &str) -> Result<Option<Value>> {
        let query = self.net_view_query(vec![q("ipv4addr", ip_address)]);
        self.delete_found("fixedaddress", query).await
    }

    async fn delete_fixedaddress(&self, ip_address: &str) -> Result<Option<Value>> {
        let query = self.net_view_query(vec![q("ipv4addr", ip_address)]);
        self.delete_found("fixedaddress", query).await
    }

    async fn delete_fixedaddress_by_mac(&self, mac_address: &str) -> Result<Option<Value>> {
        let query = self.net_view_query(vec![q("mac", mac_address)]);
        self.delete_found("fixedaddress", query).await
    }

    async fn delete_dns_records(&self, fqdn: &str) -> Result<Option<Value>> {
        let mut deleted = Vec::new();

        for (object, key) in [("record:a", "name"), ("record:ptr", "ptrdname")] {
            let query = self.dns_view_query(vec![q(key, fqdn)]);
            let Some(found) = self.search(object, query).await? else {
                continue;
            };
            let Some(items) = found.as_array() else {
                continue;
            };
            for item in items {
                if let Some(objref) = item.get("_ref").and_then(Value::as_str) {
                    deleted.push(self.delete(objref).await?);
                }
            }
        }

        if deleted.is_empty() {
            Ok(None)
        } else {
            Ok(Some(Value::Array(deleted)))
        }
    }
}
