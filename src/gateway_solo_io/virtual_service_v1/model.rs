//! Typed model of a `gateway.solo.io/v1` VirtualService
//!
//! Field names serialize to the object's JSON names; the schema maps them to
//! the snake_case attribute names. Every spec field is optional. Free-form
//! protobuf `Struct` regions are kept as raw JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::client::HasApiResource;

/// Data source model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualServiceV1DataSourceData {
    /// Synthetic identifier, `<name>/<namespace>`
    pub id: Option<String>,

    pub api_version: Option<String>,

    pub kind: Option<String>,

    pub metadata: Metadata,

    pub spec: Option<VirtualServiceSpec>,
}

impl HasApiResource for VirtualServiceV1DataSourceData {
    const GROUP: &'static str = "gateway.solo.io";
    const VERSION: &'static str = "v1";
    const KIND: &'static str = "VirtualService";
    const PLURAL: &'static str = "virtualservices";
}

/// Object metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub name: String,

    pub namespace: String,

    pub labels: Option<BTreeMap<String, String>>,

    pub annotations: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualServiceSpec {
    pub display_name: Option<String>,

    pub ssl_config: Option<SslConfig>,

    pub virtual_host: Option<VirtualHost>,
}

/// Reference to another resource by name and namespace
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRef {
    pub name: Option<String>,

    pub namespace: Option<String>,
}

/// Message without fields, present or absent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Empty {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InjaTemplate {
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FractionalPercent {
    pub numerator: Option<i64>,

    /// One of HUNDRED, TEN_THOUSAND, MILLION
    pub denominator: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeFractionalPercent {
    pub default_value: Option<FractionalPercent>,

    pub runtime_key: Option<String>,
}

// ---------------------------------------------------------------------------
// TLS
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SslConfig {
    pub secret_ref: Option<ResourceRef>,

    pub ssl_files: Option<SslFiles>,

    pub sds: Option<SdsConfig>,

    pub sni_domains: Option<Vec<String>>,

    pub verify_subject_alt_name: Option<Vec<String>>,

    pub parameters: Option<SslParameters>,

    pub alpn_protocols: Option<Vec<String>>,

    pub one_way_tls: Option<bool>,

    pub disable_tls_session_resumption: Option<bool>,

    pub transport_socket_connect_timeout: Option<String>,

    pub ocsp_staple_policy: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SslFiles {
    pub tls_cert: Option<String>,

    pub tls_key: Option<String>,

    pub root_ca: Option<String>,

    pub ocsp_staple: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SdsConfig {
    pub target_uri: Option<String>,

    pub certificates_secret_name: Option<String>,

    pub validation_context_name: Option<String>,

    pub cluster_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SslParameters {
    pub minimum_protocol_version: Option<String>,

    pub maximum_protocol_version: Option<String>,

    pub cipher_suites: Option<Vec<String>>,

    pub ecdh_curves: Option<Vec<String>>,
}

// ---------------------------------------------------------------------------
// Virtual host and routes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualHost {
    pub domains: Option<Vec<String>>,

    pub routes: Option<Vec<Route>>,

    pub options: Option<VirtualHostOptions>,

    pub options_config_refs: Option<OptionsConfigRefs>,
}

/// Delegated option objects merged into the owner's options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsConfigRefs {
    pub delegate_options: Option<Vec<ResourceRef>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub matchers: Option<Vec<Matcher>>,

    pub inheritable_matchers: Option<bool>,

    pub inheritable_path_matchers: Option<bool>,

    pub route_action: Option<RouteAction>,

    pub redirect_action: Option<RedirectAction>,

    pub direct_response_action: Option<DirectResponseAction>,

    pub delegate_action: Option<DelegateAction>,

    pub graphql_api_ref: Option<ResourceRef>,

    pub options: Option<RouteOptions>,

    pub name: Option<String>,

    pub options_config_refs: Option<OptionsConfigRefs>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Matcher {
    pub prefix: Option<String>,

    pub exact: Option<String>,

    pub regex: Option<String>,

    pub case_sensitive: Option<bool>,

    pub headers: Option<Vec<HeaderMatcher>>,

    pub query_parameters: Option<Vec<QueryParameterMatcher>>,

    pub methods: Option<Vec<String>>,

    /// Matches HTTP CONNECT requests
    pub connect_matcher: Option<Empty>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderMatcher {
    pub name: Option<String>,

    pub value: Option<String>,

    pub regex: Option<bool>,

    pub invert_match: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryParameterMatcher {
    pub name: Option<String>,

    pub value: Option<String>,

    pub regex: Option<bool>,
}

// ---------------------------------------------------------------------------
// Route actions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteAction {
    pub single: Option<Destination>,

    pub multi: Option<MultiDestination>,

    pub upstream_group: Option<ResourceRef>,

    pub cluster_header: Option<String>,

    pub dynamic_forward_proxy: Option<DynamicForwardProxy>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub upstream: Option<ResourceRef>,

    pub kube: Option<KubeDestination>,

    pub consul: Option<ConsulDestination>,

    pub subset: Option<Subset>,

    pub destination_spec: Option<DestinationSpec>,
}

/// Function-level routing for function-capable upstreams
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationSpec {
    pub aws: Option<AwsDestinationSpec>,

    pub azure: Option<AzureDestinationSpec>,

    pub rest: Option<RestDestinationSpec>,

    pub grpc: Option<GrpcDestinationSpec>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwsDestinationSpec {
    pub logical_name: Option<String>,

    /// One of SYNC, ASYNC
    pub invocation_style: Option<String>,

    pub response_transformation: Option<bool>,

    pub unwrap_as_alb: Option<bool>,

    pub unwrap_as_api_gateway: Option<bool>,

    pub wrap_as_api_gateway: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AzureDestinationSpec {
    pub function_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestDestinationSpec {
    pub function_name: Option<String>,

    pub parameters: Option<FunctionParameters>,

    pub response_transformation: Option<TransformationTemplate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrpcDestinationSpec {
    pub package: Option<String>,

    pub service: Option<String>,

    pub function: Option<String>,

    pub parameters: Option<FunctionParameters>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionParameters {
    pub headers: Option<BTreeMap<String, String>>,

    pub path: Option<String>,
}

/// Kubernetes service destination
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KubeDestination {
    #[serde(rename = "ref")]
    pub ref_: Option<ResourceRef>,

    pub port: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsulDestination {
    pub service_name: Option<String>,

    pub tags: Option<Vec<String>>,

    pub data_centers: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subset {
    pub values: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiDestination {
    pub destinations: Option<Vec<WeightedDestination>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightedDestination {
    pub destination: Option<Destination>,

    pub weight: Option<i64>,

    pub options: Option<WeightedDestinationOptions>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightedDestinationOptions {
    pub header_manipulation: Option<HeaderManipulation>,

    pub transformations: Option<Transformations>,

    pub extensions: Option<Extensions>,

    pub extauth: Option<ExtAuthExtension>,

    pub buffer_per_route: Option<BufferPerRoute>,

    pub staged_transformations: Option<TransformationStages>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicForwardProxy {
    pub auto_host_rewrite_header: Option<String>,

    pub host_rewrite: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedirectAction {
    pub host_redirect: Option<String>,

    pub port_redirect: Option<i64>,

    pub path_redirect: Option<String>,

    pub prefix_rewrite: Option<String>,

    pub regex_rewrite: Option<RegexRewrite>,

    /// One of MOVED_PERMANENTLY, FOUND, SEE_OTHER, TEMPORARY_REDIRECT, PERMANENT_REDIRECT
    pub response_code: Option<String>,

    pub https_redirect: Option<bool>,

    pub strip_query: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegexRewrite {
    pub pattern: Option<RegexMatcher>,

    pub substitution: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegexMatcher {
    pub google_re2: Option<GoogleRe2>,

    pub regex: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleRe2 {
    pub max_program_size: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectResponseAction {
    pub status: Option<i64>,

    pub body: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DelegateAction {
    /// Deprecated in favor of `ref`
    pub name: Option<String>,

    /// Deprecated in favor of `ref`
    pub namespace: Option<String>,

    #[serde(rename = "ref")]
    pub ref_: Option<ResourceRef>,

    pub selector: Option<RouteTableSelector>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteTableSelector {
    pub labels: Option<BTreeMap<String, String>>,

    pub namespaces: Option<Vec<String>>,

    pub expressions: Option<Vec<LabelExpression>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelExpression {
    pub key: Option<String>,

    pub operator: Option<String>,

    pub values: Option<Vec<String>>,
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualHostOptions {
    pub extensions: Option<Extensions>,

    pub retries: Option<RetryPolicy>,

    pub stats: Option<Stats>,

    pub header_manipulation: Option<HeaderManipulation>,

    pub cors: Option<CorsPolicy>,

    pub transformations: Option<Transformations>,

    pub ratelimit_basic: Option<IngressRateLimit>,

    pub ratelimit_early: Option<RateLimitVhostExtension>,

    pub rate_limit_early_configs: Option<RateLimitConfigRefs>,

    pub ratelimit: Option<RateLimitVhostExtension>,

    pub rate_limit_configs: Option<RateLimitConfigRefs>,

    pub ratelimit_regular: Option<RateLimitVhostExtension>,

    pub rate_limit_regular_configs: Option<RateLimitConfigRefs>,

    pub waf: Option<WafSettings>,

    pub jwt: Option<JwtVhostExtension>,

    pub jwt_staged: Option<JwtStagedVhostExtension>,

    pub rbac: Option<RbacExtension>,

    pub extauth: Option<ExtAuthExtension>,

    pub dlp: Option<DlpConfig>,

    pub buffer_per_route: Option<BufferPerRoute>,

    pub csrf: Option<CsrfPolicy>,

    pub include_request_attempt_count: Option<bool>,

    pub include_attempt_count_in_response: Option<bool>,

    pub staged_transformations: Option<TransformationStages>,

    pub cors_policy_merge_settings: Option<CorsPolicyMergeSettings>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteOptions {
    pub transformations: Option<Transformations>,

    pub faults: Option<RouteFaults>,

    pub prefix_rewrite: Option<String>,

    pub timeout: Option<String>,

    pub retries: Option<RetryPolicy>,

    pub extensions: Option<Extensions>,

    pub tracing: Option<RouteTracing>,

    pub shadowing: Option<Shadowing>,

    pub header_manipulation: Option<HeaderManipulation>,

    pub host_rewrite: Option<String>,

    pub auto_host_rewrite: Option<bool>,

    pub host_rewrite_path_regex: Option<RegexRewrite>,

    pub host_rewrite_header: Option<String>,

    pub append_x_forwarded_host: Option<bool>,

    pub cors: Option<CorsPolicy>,

    pub lb_hash: Option<RouteLbHash>,

    pub upgrades: Option<Vec<UpgradeConfig>>,

    pub ratelimit_basic: Option<IngressRateLimit>,

    pub ratelimit_early: Option<RateLimitRouteExtension>,

    pub rate_limit_early_configs: Option<RateLimitConfigRefs>,

    pub ratelimit: Option<RateLimitRouteExtension>,

    pub rate_limit_configs: Option<RateLimitConfigRefs>,

    pub ratelimit_regular: Option<RateLimitRouteExtension>,

    pub rate_limit_regular_configs: Option<RateLimitConfigRefs>,

    pub waf: Option<WafSettings>,

    pub jwt: Option<JwtRouteExtension>,

    pub jwt_staged: Option<JwtStagedRouteExtension>,

    pub rbac: Option<RbacExtension>,

    pub extauth: Option<ExtAuthExtension>,

    pub dlp: Option<DlpConfig>,

    pub buffer_per_route: Option<BufferPerRoute>,

    pub csrf: Option<CsrfPolicy>,

    pub staged_transformations: Option<TransformationStages>,

    /// Filter metadata keyed by filter name, free-form
    pub envoy_metadata: Option<Value>,

    pub regex_rewrite: Option<RegexRewrite>,

    pub max_stream_duration: Option<MaxStreamDuration>,

    pub idle_timeout: Option<String>,
}

/// Extension configs keyed by plugin name, free-form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extensions {
    pub configs: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub virtual_clusters: Option<Vec<VirtualCluster>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualCluster {
    pub name: Option<String>,

    pub pattern: Option<String>,

    pub method: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteTracing {
    pub route_descriptor: Option<String>,

    pub trace_percentages: Option<TracePercentages>,

    pub propagate: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TracePercentages {
    pub client_sample_percentage: Option<f64>,

    pub random_sample_percentage: Option<f64>,

    pub overall_sample_percentage: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorsPolicyMergeSettings {
    /// One of DEFAULT, UNION
    pub expose_headers: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetryPolicy {
    pub retry_on: Option<String>,

    pub num_retries: Option<i64>,

    pub per_try_timeout: Option<String>,

    pub retry_back_off: Option<RetryBackOff>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetryBackOff {
    pub base_interval: Option<String>,

    pub max_interval: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorsPolicy {
    pub allow_origin: Option<Vec<String>>,

    pub allow_origin_regex: Option<Vec<String>>,

    pub allow_methods: Option<Vec<String>>,

    pub allow_headers: Option<Vec<String>>,

    pub expose_headers: Option<Vec<String>>,

    pub max_age: Option<String>,

    pub allow_credentials: Option<bool>,

    pub disable_for_route: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderManipulation {
    pub request_headers_to_add: Option<Vec<HeaderValueOption>>,

    pub request_headers_to_remove: Option<Vec<String>>,

    pub response_headers_to_add: Option<Vec<HeaderValueOption>>,

    pub response_headers_to_remove: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderValueOption {
    pub header: Option<HeaderValue>,

    pub append: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderValue {
    pub key: Option<String>,

    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteFaults {
    pub abort: Option<FaultAbort>,

    pub delay: Option<FaultDelay>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaultAbort {
    pub percentage: Option<f64>,

    pub http_status: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaultDelay {
    pub percentage: Option<f64>,

    pub fixed_delay: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeConfig {
    pub websocket: Option<EnabledConfig>,

    pub connect: Option<EnabledConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnabledConfig {
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaxStreamDuration {
    pub max_stream_duration: Option<String>,

    pub grpc_timeout_header_max: Option<String>,

    pub grpc_timeout_header_offset: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteLbHash {
    pub hash_policies: Option<Vec<HashPolicy>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HashPolicy {
    pub header: Option<String>,

    pub cookie: Option<CookieHash>,

    pub source_ip: Option<bool>,

    pub terminal: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CookieHash {
    pub name: Option<String>,

    pub ttl: Option<String>,

    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadowing {
    pub upstream: Option<ResourceRef>,

    pub percentage: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BufferPerRoute {
    pub disabled: Option<bool>,

    pub buffer: Option<Buffer>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Buffer {
    pub max_request_bytes: Option<i64>,
}

// ---------------------------------------------------------------------------
// Transformations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transformations {
    pub request_transformation: Option<Transformation>,

    pub clear_route_cache: Option<bool>,

    pub response_transformation: Option<Transformation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformationStages {
    pub early: Option<RequestResponseTransformations>,

    pub regular: Option<RequestResponseTransformations>,

    pub post_routing: Option<RequestResponseTransformations>,

    pub inherit_transformation: Option<bool>,

    pub log_request_response_info: Option<bool>,

    pub escape_characters: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestResponseTransformations {
    pub request_transforms: Option<Vec<RequestMatch>>,

    pub response_transforms: Option<Vec<ResponseMatch>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestMatch {
    pub matcher: Option<Matcher>,

    pub clear_route_cache: Option<bool>,

    pub request_transformation: Option<Transformation>,

    pub response_transformation: Option<Transformation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMatch {
    pub matchers: Option<Vec<HeaderMatcher>>,

    pub response_code_details: Option<String>,

    pub response_transformation: Option<Transformation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transformation {
    pub transformation_template: Option<TransformationTemplate>,

    pub header_body_transform: Option<HeaderBodyTransform>,

    pub xslt_transformation: Option<XsltTransformation>,

    pub log_request_response_info: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderBodyTransform {
    pub add_request_metadata: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XsltTransformation {
    pub xslt: Option<String>,

    pub set_content_type: Option<String>,

    pub non_xml_transform: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformationTemplate {
    pub advanced_templates: Option<bool>,

    pub extractors: Option<BTreeMap<String, Extraction>>,

    pub headers: Option<BTreeMap<String, InjaTemplate>>,

    pub headers_to_append: Option<Vec<HeaderToAppend>>,

    pub headers_to_remove: Option<Vec<String>>,

    pub body: Option<InjaTemplate>,

    pub passthrough: Option<Empty>,

    pub merge_extractors_to_body: Option<Empty>,

    pub merge_json_keys: Option<MergeJsonKeys>,

    /// One of ParseAsJson, DontParse
    pub parse_body_behavior: Option<String>,

    pub ignore_error_on_parse: Option<bool>,

    pub dynamic_metadata_values: Option<Vec<DynamicMetadataValue>>,

    pub escape_characters: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extraction {
    pub header: Option<String>,

    pub body: Option<Empty>,

    pub regex: Option<String>,

    pub subgroup: Option<i64>,

    pub replacement_text: Option<String>,

    /// One of EXTRACT, SINGLE_REPLACE, REPLACE_ALL
    pub mode: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderToAppend {
    pub key: Option<String>,

    pub value: Option<InjaTemplate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeJsonKeys {
    pub json_keys: Option<BTreeMap<String, OverridableTemplate>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverridableTemplate {
    pub tmpl: Option<InjaTemplate>,

    pub override_empty: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicMetadataValue {
    pub metadata_namespace: Option<String>,

    pub key: Option<String>,

    pub value: Option<InjaTemplate>,

    pub json_to_proto: Option<bool>,
}

// ---------------------------------------------------------------------------
// External auth
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtAuthExtension {
    pub disable: Option<bool>,

    pub config_ref: Option<ResourceRef>,

    pub custom_auth: Option<CustomAuth>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomAuth {
    pub context_extensions: Option<BTreeMap<String, String>>,

    pub name: Option<String>,
}

// ---------------------------------------------------------------------------
// Rate limiting
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngressRateLimit {
    pub authorized_limits: Option<RateLimit>,

    pub anonymous_limits: Option<RateLimit>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateLimit {
    /// One of UNKNOWN, SECOND, MINUTE, HOUR, DAY
    pub unit: Option<String>,

    pub requests_per_unit: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateLimitConfigRefs {
    pub refs: Option<Vec<ResourceRef>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateLimitVhostExtension {
    pub rate_limits: Option<Vec<RateLimitActions>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateLimitRouteExtension {
    pub include_vh_rate_limits: Option<bool>,

    pub rate_limits: Option<Vec<RateLimitActions>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateLimitActions {
    pub actions: Option<Vec<RateLimitAction>>,

    pub set_actions: Option<Vec<RateLimitAction>>,

    pub limit: Option<RateLimitOverride>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateLimitAction {
    pub source_cluster: Option<Empty>,

    pub destination_cluster: Option<Empty>,

    pub request_headers: Option<RequestHeadersAction>,

    pub remote_address: Option<Empty>,

    pub generic_key: Option<GenericKeyAction>,

    pub header_value_match: Option<HeaderValueMatchAction>,

    pub metadata: Option<MetadataAction>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestHeadersAction {
    pub header_name: Option<String>,

    pub descriptor_key: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericKeyAction {
    pub descriptor_value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderValueMatchAction {
    pub descriptor_value: Option<String>,

    pub expect_match: Option<bool>,

    pub headers: Option<Vec<EnvoyHeaderMatcher>>,
}

/// Envoy header matcher used by rate limit actions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvoyHeaderMatcher {
    pub name: Option<String>,

    pub exact_match: Option<String>,

    pub regex_match: Option<String>,

    pub range_match: Option<Int64Range>,

    pub present_match: Option<bool>,

    pub prefix_match: Option<String>,

    pub suffix_match: Option<String>,

    pub invert_match: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Int64Range {
    pub start: Option<i64>,

    pub end: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataAction {
    pub descriptor_key: Option<String>,

    pub metadata_key: Option<MetadataKey>,

    pub default_value: Option<String>,

    /// One of DYNAMIC, ROUTE_ENTRY
    pub source: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataKey {
    pub key: Option<String>,

    pub path: Option<Vec<MetadataPathSegment>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataPathSegment {
    pub key: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateLimitOverride {
    pub dynamic_metadata: Option<DynamicMetadataOverride>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicMetadataOverride {
    pub metadata_key: Option<MetadataKey>,
}

// ---------------------------------------------------------------------------
// Web application firewall
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WafSettings {
    pub disabled: Option<bool>,

    pub custom_intervention_message: Option<String>,

    pub core_rule_set: Option<CoreRuleSet>,

    pub rule_sets: Option<Vec<RuleSet>>,

    pub audit_logging: Option<AuditLogging>,

    pub request_headers_only: Option<bool>,

    pub response_headers_only: Option<bool>,

    pub config_map_rule_sets: Option<Vec<ConfigMapRuleSet>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreRuleSet {
    pub custom_settings_string: Option<String>,

    pub custom_settings_file: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleSet {
    pub rule_str: Option<String>,

    pub files: Option<Vec<String>>,

    pub directory: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogging {
    /// One of NEVER, RELEVANT_ONLY, ALWAYS
    pub action: Option<String>,

    /// One of FILTER_STATE, DYNAMIC_METADATA
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigMapRuleSet {
    pub config_map_ref: Option<ResourceRef>,

    pub data_map_keys: Option<Vec<String>>,
}

// ---------------------------------------------------------------------------
// JWT
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JwtVhostExtension {
    pub providers: Option<BTreeMap<String, JwtProvider>>,

    pub allow_missing_or_failed_jwt: Option<bool>,

    /// One of REQUIRE_VALID, ALLOW_MISSING, ALLOW_MISSING_OR_FAILED
    pub validation_policy: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JwtStagedVhostExtension {
    pub before_ext_auth: Option<JwtVhostExtension>,

    pub after_ext_auth: Option<JwtVhostExtension>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JwtRouteExtension {
    pub disable: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JwtStagedRouteExtension {
    pub before_ext_auth: Option<JwtRouteExtension>,

    pub after_ext_auth: Option<JwtRouteExtension>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JwtProvider {
    pub jwks: Option<Jwks>,

    pub audiences: Option<Vec<String>>,

    pub issuer: Option<String>,

    pub token_source: Option<TokenSource>,

    pub keep_token: Option<bool>,

    pub claims_to_headers: Option<Vec<ClaimToHeader>>,

    pub clock_skew_seconds: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Jwks {
    pub remote: Option<RemoteJwks>,

    pub local: Option<LocalJwks>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteJwks {
    pub url: Option<String>,

    pub upstream_ref: Option<ResourceRef>,

    pub cache_duration: Option<String>,

    pub async_fetch: Option<AsyncFetch>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AsyncFetch {
    pub fast_listener: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalJwks {
    pub key: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenSource {
    pub headers: Option<Vec<TokenHeaderSource>>,

    pub query_params: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenHeaderSource {
    pub header: Option<String>,

    pub prefix: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimToHeader {
    pub claim: Option<String>,

    pub header: Option<String>,

    pub append: Option<bool>,
}

// ---------------------------------------------------------------------------
// RBAC
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RbacExtension {
    pub disable: Option<bool>,

    pub policies: Option<BTreeMap<String, RbacPolicy>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RbacPolicy {
    pub principals: Option<Vec<RbacPrincipal>>,

    pub permissions: Option<RbacPermissions>,

    pub nested_claim_delimiter: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RbacPrincipal {
    pub jwt_principal: Option<JwtPrincipal>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JwtPrincipal {
    pub claims: Option<BTreeMap<String, String>>,

    pub provider: Option<String>,

    /// One of EXACT_STRING, BOOLEAN, LIST_CONTAINS
    pub matcher: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RbacPermissions {
    pub path_prefix: Option<String>,

    pub methods: Option<Vec<String>>,
}

// ---------------------------------------------------------------------------
// Data loss prevention
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DlpConfig {
    pub actions: Option<Vec<DlpAction>>,

    /// One of RESPONSE_BODY, ACCESS_LOGS, ALL
    pub enabled_for: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DlpAction {
    pub action_type: Option<String>,

    pub custom_action: Option<DlpCustomAction>,

    pub shadow: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DlpCustomAction {
    pub name: Option<String>,

    pub regex: Option<Vec<String>>,

    pub mask_char: Option<String>,

    pub percent: Option<Percent>,

    pub regex_actions: Option<Vec<DlpRegexAction>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Percent {
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DlpRegexAction {
    pub regex: Option<String>,

    pub subgroup: Option<i64>,
}

// ---------------------------------------------------------------------------
// CSRF
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CsrfPolicy {
    pub filter_enabled: Option<RuntimeFractionalPercent>,

    pub shadow_enabled: Option<RuntimeFractionalPercent>,

    pub additional_origins: Option<Vec<StringMatcher>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StringMatcher {
    pub exact: Option<String>,

    pub prefix: Option<String>,

    pub suffix: Option<String>,

    pub safe_regex: Option<RegexMatcher>,

    pub ignore_case: Option<bool>,
}
