//! Attribute schema of the VirtualService data source
//!
//! A field-by-field transcription of the model in `model.rs`: one function per
//! model struct, returning its attributes. Everything below `spec` is computed.

use k8s_provider_framework::{Attribute, ElementType, Schema};

fn string(name: &str, json_name: &str) -> Attribute {
    Attribute::string(name, json_name).computed()
}

fn boolean(name: &str, json_name: &str) -> Attribute {
    Attribute::bool(name, json_name).computed()
}

fn int64(name: &str, json_name: &str) -> Attribute {
    Attribute::int64(name, json_name).computed()
}

fn float64(name: &str, json_name: &str) -> Attribute {
    Attribute::float64(name, json_name).computed()
}

fn strings(name: &str, json_name: &str) -> Attribute {
    Attribute::list(name, json_name, ElementType::String).computed()
}

fn string_map(name: &str, json_name: &str) -> Attribute {
    Attribute::map(name, json_name, ElementType::String).computed()
}

fn dynamic(name: &str, json_name: &str) -> Attribute {
    Attribute::dynamic(name, json_name).computed()
}

fn object(name: &str, json_name: &str, attributes: Vec<Attribute>) -> Attribute {
    Attribute::single_nested(name, json_name, attributes).computed()
}

fn objects(name: &str, json_name: &str, attributes: Vec<Attribute>) -> Attribute {
    Attribute::list_nested(name, json_name, attributes).computed()
}

fn object_map(name: &str, json_name: &str, attributes: Vec<Attribute>) -> Attribute {
    Attribute::map_nested(name, json_name, attributes).computed()
}

fn empty(name: &str, json_name: &str) -> Attribute {
    object(name, json_name, Vec::new())
}

/// Schema of the `gateway_solo_io_virtual_service_v1` data source
pub fn schema() -> Schema {
    Schema::new(
        "Describes virtual hosts and the routes they serve, exposed to clients by a Gloo Gateway.",
        vec![
            Attribute::string("id", "id")
                .computed()
                .description("Contains the value 'metadata.name/metadata.namespace'."),
            Attribute::string("api_version", "apiVersion")
                .computed()
                .description("The API group of the requested resource."),
            Attribute::string("kind", "kind")
                .computed()
                .description("The type of the requested resource."),
            metadata(),
            object(
                "spec",
                "spec",
                vec![
                    string("display_name", "displayName")
                        .description("Display-only name of the virtual service."),
                    object("ssl_config", "sslConfig", ssl_config()).description(
                        "If set, the virtual service serves TLS and only accepts connections for its SNI domains.",
                    ),
                    object("virtual_host", "virtualHost", virtual_host()),
                ],
            ),
        ],
    )
}

fn metadata() -> Attribute {
    Attribute::single_nested(
        "metadata",
        "metadata",
        vec![
            Attribute::string("name", "name")
                .required()
                .description("The name of the resource."),
            Attribute::string("namespace", "namespace")
                .required()
                .description("The namespace of the resource."),
            string_map("labels", "labels")
                .description("Key/value pairs attached to the resource for organization and selection."),
            string_map("annotations", "annotations")
                .description("Unstructured key/value pairs attached to the resource."),
        ],
    )
    .required()
    .description("Data that helps uniquely identify this object.")
}

// ---------------------------------------------------------------------------
// Shared messages
// ---------------------------------------------------------------------------

fn resource_ref(name: &str, json_name: &str) -> Attribute {
    object(name, json_name, resource_ref_attributes())
}

fn resource_ref_attributes() -> Vec<Attribute> {
    vec![string("name", "name"), string("namespace", "namespace")]
}

fn inja_template(name: &str, json_name: &str) -> Attribute {
    object(name, json_name, vec![string("text", "text")])
}

fn fractional_percent() -> Vec<Attribute> {
    vec![
        int64("numerator", "numerator"),
        string("denominator", "denominator"),
    ]
}

fn runtime_fractional_percent(name: &str, json_name: &str) -> Attribute {
    object(
        name,
        json_name,
        vec![
            object("default_value", "defaultValue", fractional_percent()),
            string("runtime_key", "runtimeKey"),
        ],
    )
}

fn regex_matcher() -> Vec<Attribute> {
    vec![
        object(
            "google_re2",
            "googleRe2",
            vec![int64("max_program_size", "maxProgramSize")],
        ),
        string("regex", "regex"),
    ]
}

fn regex_rewrite(name: &str, json_name: &str) -> Attribute {
    object(
        name,
        json_name,
        vec![
            object("pattern", "pattern", regex_matcher()),
            string("substitution", "substitution"),
        ],
    )
}

fn options_config_refs() -> Attribute {
    object(
        "options_config_refs",
        "optionsConfigRefs",
        vec![objects("delegate_options", "delegateOptions", resource_ref_attributes())],
    )
    .description("VirtualHostOption or RouteOption objects whose options are merged in.")
}

// ---------------------------------------------------------------------------
// TLS
// ---------------------------------------------------------------------------

fn ssl_config() -> Vec<Attribute> {
    vec![
        resource_ref("secret_ref", "secretRef"),
        object(
            "ssl_files",
            "sslFiles",
            vec![
                string("tls_cert", "tlsCert"),
                string("tls_key", "tlsKey"),
                string("root_ca", "rootCa"),
                string("ocsp_staple", "ocspStaple"),
            ],
        ),
        object(
            "sds",
            "sds",
            vec![
                string("target_uri", "targetUri"),
                string("certificates_secret_name", "certificatesSecretName"),
                string("validation_context_name", "validationContextName"),
                string("cluster_name", "clusterName"),
            ],
        ),
        strings("sni_domains", "sniDomains"),
        strings("verify_subject_alt_name", "verifySubjectAltName"),
        object(
            "parameters",
            "parameters",
            vec![
                string("minimum_protocol_version", "minimumProtocolVersion"),
                string("maximum_protocol_version", "maximumProtocolVersion"),
                strings("cipher_suites", "cipherSuites"),
                strings("ecdh_curves", "ecdhCurves"),
            ],
        ),
        strings("alpn_protocols", "alpnProtocols"),
        boolean("one_way_tls", "oneWayTls"),
        boolean("disable_tls_session_resumption", "disableTlsSessionResumption"),
        string("transport_socket_connect_timeout", "transportSocketConnectTimeout"),
        string("ocsp_staple_policy", "ocspStaplePolicy"),
    ]
}

// ---------------------------------------------------------------------------
// Virtual host and routes
// ---------------------------------------------------------------------------

fn virtual_host() -> Vec<Attribute> {
    vec![
        strings("domains", "domains")
            .description("Domains (host/authority header) served by this virtual host."),
        objects("routes", "routes", route()),
        object("options", "options", virtual_host_options()),
        options_config_refs(),
    ]
}

fn route() -> Vec<Attribute> {
    vec![
        objects("matchers", "matchers", matcher()),
        boolean("inheritable_matchers", "inheritableMatchers"),
        boolean("inheritable_path_matchers", "inheritablePathMatchers"),
        object("route_action", "routeAction", route_action()).description(
            "Route requests to an upstream, a weighted set of upstreams or an upstream group.",
        ),
        object("redirect_action", "redirectAction", redirect_action()),
        object(
            "direct_response_action",
            "directResponseAction",
            vec![int64("status", "status"), string("body", "body")],
        ),
        object("delegate_action", "delegateAction", delegate_action())
            .description("Delegate routing for this route to one or more RouteTables."),
        resource_ref("graphql_api_ref", "graphqlApiRef"),
        object("options", "options", route_options()),
        string("name", "name"),
        options_config_refs(),
    ]
}

fn matcher() -> Vec<Attribute> {
    vec![
        string("prefix", "prefix"),
        string("exact", "exact"),
        string("regex", "regex"),
        boolean("case_sensitive", "caseSensitive"),
        objects("headers", "headers", header_matcher()),
        objects(
            "query_parameters",
            "queryParameters",
            vec![
                string("name", "name"),
                string("value", "value"),
                boolean("regex", "regex"),
            ],
        ),
        strings("methods", "methods"),
        empty("connect_matcher", "connectMatcher"),
    ]
}

fn header_matcher() -> Vec<Attribute> {
    vec![
        string("name", "name"),
        string("value", "value"),
        boolean("regex", "regex"),
        boolean("invert_match", "invertMatch"),
    ]
}

// ---------------------------------------------------------------------------
// Route actions
// ---------------------------------------------------------------------------

fn route_action() -> Vec<Attribute> {
    vec![
        object("single", "single", destination()),
        object(
            "multi",
            "multi",
            vec![objects(
                "destinations",
                "destinations",
                vec![
                    object("destination", "destination", destination()),
                    int64("weight", "weight"),
                    object("options", "options", weighted_destination_options()),
                ],
            )],
        ),
        resource_ref("upstream_group", "upstreamGroup"),
        string("cluster_header", "clusterHeader"),
        object(
            "dynamic_forward_proxy",
            "dynamicForwardProxy",
            vec![
                string("auto_host_rewrite_header", "autoHostRewriteHeader"),
                string("host_rewrite", "hostRewrite"),
            ],
        ),
    ]
}

fn destination() -> Vec<Attribute> {
    vec![
        resource_ref("upstream", "upstream"),
        object(
            "kube",
            "kube",
            vec![resource_ref("ref", "ref"), int64("port", "port")],
        ),
        object(
            "consul",
            "consul",
            vec![
                string("service_name", "serviceName"),
                strings("tags", "tags"),
                strings("data_centers", "dataCenters"),
            ],
        ),
        object("subset", "subset", vec![string_map("values", "values")]),
        object("destination_spec", "destinationSpec", destination_spec()),
    ]
}

fn destination_spec() -> Vec<Attribute> {
    let parameters = || {
        object(
            "parameters",
            "parameters",
            vec![string_map("headers", "headers"), string("path", "path")],
        )
    };

    vec![
        object(
            "aws",
            "aws",
            vec![
                string("logical_name", "logicalName"),
                string("invocation_style", "invocationStyle"),
                boolean("response_transformation", "responseTransformation"),
                boolean("unwrap_as_alb", "unwrapAsAlb"),
                boolean("unwrap_as_api_gateway", "unwrapAsApiGateway"),
                boolean("wrap_as_api_gateway", "wrapAsApiGateway"),
            ],
        ),
        object("azure", "azure", vec![string("function_name", "functionName")]),
        object(
            "rest",
            "rest",
            vec![
                string("function_name", "functionName"),
                parameters(),
                object(
                    "response_transformation",
                    "responseTransformation",
                    transformation_template(),
                ),
            ],
        ),
        object(
            "grpc",
            "grpc",
            vec![
                string("package", "package"),
                string("service", "service"),
                string("function", "function"),
                parameters(),
            ],
        ),
    ]
}

fn weighted_destination_options() -> Vec<Attribute> {
    vec![
        object("header_manipulation", "headerManipulation", header_manipulation()),
        object("transformations", "transformations", transformations()),
        extensions(),
        object("extauth", "extauth", ext_auth_extension()),
        object("buffer_per_route", "bufferPerRoute", buffer_per_route()),
        object(
            "staged_transformations",
            "stagedTransformations",
            transformation_stages(),
        ),
    ]
}

fn redirect_action() -> Vec<Attribute> {
    vec![
        string("host_redirect", "hostRedirect"),
        int64("port_redirect", "portRedirect"),
        string("path_redirect", "pathRedirect"),
        string("prefix_rewrite", "prefixRewrite"),
        regex_rewrite("regex_rewrite", "regexRewrite"),
        string("response_code", "responseCode"),
        boolean("https_redirect", "httpsRedirect"),
        boolean("strip_query", "stripQuery"),
    ]
}

fn delegate_action() -> Vec<Attribute> {
    vec![
        string("name", "name"),
        string("namespace", "namespace"),
        resource_ref("ref", "ref"),
        object(
            "selector",
            "selector",
            vec![
                string_map("labels", "labels"),
                strings("namespaces", "namespaces"),
                objects(
                    "expressions",
                    "expressions",
                    vec![
                        string("key", "key"),
                        string("operator", "operator"),
                        strings("values", "values"),
                    ],
                ),
            ],
        ),
    ]
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

fn virtual_host_options() -> Vec<Attribute> {
    vec![
        extensions(),
        object("retries", "retries", retry_policy()),
        object(
            "stats",
            "stats",
            vec![objects(
                "virtual_clusters",
                "virtualClusters",
                vec![
                    string("name", "name"),
                    string("pattern", "pattern"),
                    string("method", "method"),
                ],
            )],
        ),
        object("header_manipulation", "headerManipulation", header_manipulation()),
        object("cors", "cors", cors_policy()),
        object("transformations", "transformations", transformations()),
        object("ratelimit_basic", "ratelimitBasic", ingress_rate_limit()),
        object("ratelimit_early", "ratelimitEarly", rate_limit_vhost_extension()),
        object("rate_limit_early_configs", "rateLimitEarlyConfigs", rate_limit_config_refs()),
        object("ratelimit", "ratelimit", rate_limit_vhost_extension()),
        object("rate_limit_configs", "rateLimitConfigs", rate_limit_config_refs()),
        object("ratelimit_regular", "ratelimitRegular", rate_limit_vhost_extension()),
        object(
            "rate_limit_regular_configs",
            "rateLimitRegularConfigs",
            rate_limit_config_refs(),
        ),
        object("waf", "waf", waf_settings()),
        object("jwt", "jwt", jwt_vhost_extension()),
        object(
            "jwt_staged",
            "jwtStaged",
            vec![
                object("before_ext_auth", "beforeExtAuth", jwt_vhost_extension()),
                object("after_ext_auth", "afterExtAuth", jwt_vhost_extension()),
            ],
        ),
        object("rbac", "rbac", rbac_extension()),
        object("extauth", "extauth", ext_auth_extension()),
        object("dlp", "dlp", dlp_config()),
        object("buffer_per_route", "bufferPerRoute", buffer_per_route()),
        object("csrf", "csrf", csrf_policy()),
        boolean("include_request_attempt_count", "includeRequestAttemptCount"),
        boolean(
            "include_attempt_count_in_response",
            "includeAttemptCountInResponse",
        ),
        object(
            "staged_transformations",
            "stagedTransformations",
            transformation_stages(),
        ),
        object(
            "cors_policy_merge_settings",
            "corsPolicyMergeSettings",
            vec![string("expose_headers", "exposeHeaders")],
        ),
    ]
}

fn route_options() -> Vec<Attribute> {
    vec![
        object("transformations", "transformations", transformations()),
        object(
            "faults",
            "faults",
            vec![
                object(
                    "abort",
                    "abort",
                    vec![
                        float64("percentage", "percentage"),
                        int64("http_status", "httpStatus"),
                    ],
                ),
                object(
                    "delay",
                    "delay",
                    vec![
                        float64("percentage", "percentage"),
                        string("fixed_delay", "fixedDelay"),
                    ],
                ),
            ],
        ),
        string("prefix_rewrite", "prefixRewrite"),
        string("timeout", "timeout"),
        object("retries", "retries", retry_policy()),
        extensions(),
        object(
            "tracing",
            "tracing",
            vec![
                string("route_descriptor", "routeDescriptor"),
                object(
                    "trace_percentages",
                    "tracePercentages",
                    vec![
                        float64("client_sample_percentage", "clientSamplePercentage"),
                        float64("random_sample_percentage", "randomSamplePercentage"),
                        float64("overall_sample_percentage", "overallSamplePercentage"),
                    ],
                ),
                boolean("propagate", "propagate"),
            ],
        ),
        object(
            "shadowing",
            "shadowing",
            vec![
                resource_ref("upstream", "upstream"),
                float64("percentage", "percentage"),
            ],
        ),
        object("header_manipulation", "headerManipulation", header_manipulation()),
        string("host_rewrite", "hostRewrite"),
        boolean("auto_host_rewrite", "autoHostRewrite"),
        regex_rewrite("host_rewrite_path_regex", "hostRewritePathRegex"),
        string("host_rewrite_header", "hostRewriteHeader"),
        boolean("append_x_forwarded_host", "appendXForwardedHost"),
        object("cors", "cors", cors_policy()),
        object(
            "lb_hash",
            "lbHash",
            vec![objects(
                "hash_policies",
                "hashPolicies",
                vec![
                    string("header", "header"),
                    object(
                        "cookie",
                        "cookie",
                        vec![
                            string("name", "name"),
                            string("ttl", "ttl"),
                            string("path", "path"),
                        ],
                    ),
                    boolean("source_ip", "sourceIp"),
                    boolean("terminal", "terminal"),
                ],
            )],
        ),
        objects(
            "upgrades",
            "upgrades",
            vec![
                object("websocket", "websocket", vec![boolean("enabled", "enabled")]),
                object("connect", "connect", vec![boolean("enabled", "enabled")]),
            ],
        ),
        object("ratelimit_basic", "ratelimitBasic", ingress_rate_limit()),
        object("ratelimit_early", "ratelimitEarly", rate_limit_route_extension()),
        object("rate_limit_early_configs", "rateLimitEarlyConfigs", rate_limit_config_refs()),
        object("ratelimit", "ratelimit", rate_limit_route_extension()),
        object("rate_limit_configs", "rateLimitConfigs", rate_limit_config_refs()),
        object("ratelimit_regular", "ratelimitRegular", rate_limit_route_extension()),
        object(
            "rate_limit_regular_configs",
            "rateLimitRegularConfigs",
            rate_limit_config_refs(),
        ),
        object("waf", "waf", waf_settings()),
        object("jwt", "jwt", jwt_route_extension()),
        object(
            "jwt_staged",
            "jwtStaged",
            vec![
                object("before_ext_auth", "beforeExtAuth", jwt_route_extension()),
                object("after_ext_auth", "afterExtAuth", jwt_route_extension()),
            ],
        ),
        object("rbac", "rbac", rbac_extension()),
        object("extauth", "extauth", ext_auth_extension()),
        object("dlp", "dlp", dlp_config()),
        object("buffer_per_route", "bufferPerRoute", buffer_per_route()),
        object("csrf", "csrf", csrf_policy()),
        object(
            "staged_transformations",
            "stagedTransformations",
            transformation_stages(),
        ),
        dynamic("envoy_metadata", "envoyMetadata")
            .description("Filter metadata keyed by filter name."),
        regex_rewrite("regex_rewrite", "regexRewrite"),
        object(
            "max_stream_duration",
            "maxStreamDuration",
            vec![
                string("max_stream_duration", "maxStreamDuration"),
                string("grpc_timeout_header_max", "grpcTimeoutHeaderMax"),
                string("grpc_timeout_header_offset", "grpcTimeoutHeaderOffset"),
            ],
        ),
        string("idle_timeout", "idleTimeout"),
    ]
}

fn extensions() -> Attribute {
    object(
        "extensions",
        "extensions",
        vec![dynamic("configs", "configs").description("Plugin configs keyed by plugin name.")],
    )
}

fn retry_policy() -> Vec<Attribute> {
    vec![
        string("retry_on", "retryOn"),
        int64("num_retries", "numRetries"),
        string("per_try_timeout", "perTryTimeout"),
        object(
            "retry_back_off",
            "retryBackOff",
            vec![
                string("base_interval", "baseInterval"),
                string("max_interval", "maxInterval"),
            ],
        ),
    ]
}

fn cors_policy() -> Vec<Attribute> {
    vec![
        strings("allow_origin", "allowOrigin"),
        strings("allow_origin_regex", "allowOriginRegex"),
        strings("allow_methods", "allowMethods"),
        strings("allow_headers", "allowHeaders"),
        strings("expose_headers", "exposeHeaders"),
        string("max_age", "maxAge"),
        boolean("allow_credentials", "allowCredentials"),
        boolean("disable_for_route", "disableForRoute"),
    ]
}

fn header_manipulation() -> Vec<Attribute> {
    let header_value_options = |name: &str, json_name: &str| {
        objects(
            name,
            json_name,
            vec![
                object(
                    "header",
                    "header",
                    vec![string("key", "key"), string("value", "value")],
                ),
                boolean("append", "append"),
            ],
        )
    };

    vec![
        header_value_options("request_headers_to_add", "requestHeadersToAdd"),
        strings("request_headers_to_remove", "requestHeadersToRemove"),
        header_value_options("response_headers_to_add", "responseHeadersToAdd"),
        strings("response_headers_to_remove", "responseHeadersToRemove"),
    ]
}

fn buffer_per_route() -> Vec<Attribute> {
    vec![
        boolean("disabled", "disabled"),
        object(
            "buffer",
            "buffer",
            vec![int64("max_request_bytes", "maxRequestBytes")],
        ),
    ]
}

// ---------------------------------------------------------------------------
// Transformations
// ---------------------------------------------------------------------------

fn transformations() -> Vec<Attribute> {
    vec![
        object("request_transformation", "requestTransformation", transformation()),
        boolean("clear_route_cache", "clearRouteCache"),
        object("response_transformation", "responseTransformation", transformation()),
    ]
}

fn transformation_stages() -> Vec<Attribute> {
    vec![
        object("early", "early", request_response_transformations()),
        object("regular", "regular", request_response_transformations()),
        object("post_routing", "postRouting", request_response_transformations()),
        boolean("inherit_transformation", "inheritTransformation"),
        boolean("log_request_response_info", "logRequestResponseInfo"),
        boolean("escape_characters", "escapeCharacters"),
    ]
}

fn request_response_transformations() -> Vec<Attribute> {
    vec![
        objects(
            "request_transforms",
            "requestTransforms",
            vec![
                object("matcher", "matcher", matcher()),
                boolean("clear_route_cache", "clearRouteCache"),
                object("request_transformation", "requestTransformation", transformation()),
                object("response_transformation", "responseTransformation", transformation()),
            ],
        ),
        objects(
            "response_transforms",
            "responseTransforms",
            vec![
                objects("matchers", "matchers", header_matcher()),
                string("response_code_details", "responseCodeDetails"),
                object("response_transformation", "responseTransformation", transformation()),
            ],
        ),
    ]
}

fn transformation() -> Vec<Attribute> {
    vec![
        object(
            "transformation_template",
            "transformationTemplate",
            transformation_template(),
        ),
        object(
            "header_body_transform",
            "headerBodyTransform",
            vec![boolean("add_request_metadata", "addRequestMetadata")],
        ),
        object(
            "xslt_transformation",
            "xsltTransformation",
            vec![
                string("xslt", "xslt"),
                string("set_content_type", "setContentType"),
                boolean("non_xml_transform", "nonXmlTransform"),
            ],
        ),
        boolean("log_request_response_info", "logRequestResponseInfo"),
    ]
}

fn transformation_template() -> Vec<Attribute> {
    vec![
        boolean("advanced_templates", "advancedTemplates"),
        object_map(
            "extractors",
            "extractors",
            vec![
                string("header", "header"),
                empty("body", "body"),
                string("regex", "regex"),
                int64("subgroup", "subgroup"),
                string("replacement_text", "replacementText"),
                string("mode", "mode"),
            ],
        ),
        object_map("headers", "headers", vec![string("text", "text")]),
        objects(
            "headers_to_append",
            "headersToAppend",
            vec![string("key", "key"), inja_template("value", "value")],
        ),
        strings("headers_to_remove", "headersToRemove"),
        inja_template("body", "body"),
        empty("passthrough", "passthrough"),
        empty("merge_extractors_to_body", "mergeExtractorsToBody"),
        object(
            "merge_json_keys",
            "mergeJsonKeys",
            vec![object_map(
                "json_keys",
                "jsonKeys",
                vec![
                    inja_template("tmpl", "tmpl"),
                    boolean("override_empty", "overrideEmpty"),
                ],
            )],
        ),
        string("parse_body_behavior", "parseBodyBehavior"),
        boolean("ignore_error_on_parse", "ignoreErrorOnParse"),
        objects(
            "dynamic_metadata_values",
            "dynamicMetadataValues",
            vec![
                string("metadata_namespace", "metadataNamespace"),
                string("key", "key"),
                inja_template("value", "value"),
                boolean("json_to_proto", "jsonToProto"),
            ],
        ),
        boolean("escape_characters", "escapeCharacters"),
    ]
}

// ---------------------------------------------------------------------------
// External auth
// ---------------------------------------------------------------------------

fn ext_auth_extension() -> Vec<Attribute> {
    vec![
        boolean("disable", "disable"),
        resource_ref("config_ref", "configRef"),
        object(
            "custom_auth",
            "customAuth",
            vec![
                string_map("context_extensions", "contextExtensions"),
                string("name", "name"),
            ],
        ),
    ]
}

// ---------------------------------------------------------------------------
// Rate limiting
// ---------------------------------------------------------------------------

fn ingress_rate_limit() -> Vec<Attribute> {
    let rate_limit = |name: &str, json_name: &str| {
        object(
            name,
            json_name,
            vec![
                string("unit", "unit"),
                int64("requests_per_unit", "requestsPerUnit"),
            ],
        )
    };

    vec![
        rate_limit("authorized_limits", "authorizedLimits"),
        rate_limit("anonymous_limits", "anonymousLimits"),
    ]
}

fn rate_limit_config_refs() -> Vec<Attribute> {
    vec![objects("refs", "refs", resource_ref_attributes())]
}

fn rate_limit_vhost_extension() -> Vec<Attribute> {
    vec![objects("rate_limits", "rateLimits", rate_limit_actions())]
}

fn rate_limit_route_extension() -> Vec<Attribute> {
    vec![
        boolean("include_vh_rate_limits", "includeVhRateLimits"),
        objects("rate_limits", "rateLimits", rate_limit_actions()),
    ]
}

fn rate_limit_actions() -> Vec<Attribute> {
    vec![
        objects("actions", "actions", rate_limit_action()),
        objects("set_actions", "setActions", rate_limit_action()),
        object(
            "limit",
            "limit",
            vec![object(
                "dynamic_metadata",
                "dynamicMetadata",
                vec![object("metadata_key", "metadataKey", metadata_key())],
            )],
        ),
    ]
}

fn rate_limit_action() -> Vec<Attribute> {
    vec![
        empty("source_cluster", "sourceCluster"),
        empty("destination_cluster", "destinationCluster"),
        object(
            "request_headers",
            "requestHeaders",
            vec![
                string("header_name", "headerName"),
                string("descriptor_key", "descriptorKey"),
            ],
        ),
        empty("remote_address", "remoteAddress"),
        object(
            "generic_key",
            "genericKey",
            vec![string("descriptor_value", "descriptorValue")],
        ),
        object(
            "header_value_match",
            "headerValueMatch",
            vec![
                string("descriptor_value", "descriptorValue"),
                boolean("expect_match", "expectMatch"),
                objects(
                    "headers",
                    "headers",
                    vec![
                        string("name", "name"),
                        string("exact_match", "exactMatch"),
                        string("regex_match", "regexMatch"),
                        object(
                            "range_match",
                            "rangeMatch",
                            vec![int64("start", "start"), int64("end", "end")],
                        ),
                        boolean("present_match", "presentMatch"),
                        string("prefix_match", "prefixMatch"),
                        string("suffix_match", "suffixMatch"),
                        boolean("invert_match", "invertMatch"),
                    ],
                ),
            ],
        ),
        object(
            "metadata",
            "metadata",
            vec![
                string("descriptor_key", "descriptorKey"),
                object("metadata_key", "metadataKey", metadata_key()),
                string("default_value", "defaultValue"),
                string("source", "source"),
            ],
        ),
    ]
}

fn metadata_key() -> Vec<Attribute> {
    vec![
        string("key", "key"),
        objects("path", "path", vec![string("key", "key")]),
    ]
}

// ---------------------------------------------------------------------------
// Web application firewall
// ---------------------------------------------------------------------------

fn waf_settings() -> Vec<Attribute> {
    vec![
        boolean("disabled", "disabled"),
        string("custom_intervention_message", "customInterventionMessage"),
        object(
            "core_rule_set",
            "coreRuleSet",
            vec![
                string("custom_settings_string", "customSettingsString"),
                string("custom_settings_file", "customSettingsFile"),
            ],
        ),
        objects(
            "rule_sets",
            "ruleSets",
            vec![
                string("rule_str", "ruleStr"),
                strings("files", "files"),
                string("directory", "directory"),
            ],
        ),
        object(
            "audit_logging",
            "auditLogging",
            vec![string("action", "action"), string("location", "location")],
        ),
        boolean("request_headers_only", "requestHeadersOnly"),
        boolean("response_headers_only", "responseHeadersOnly"),
        objects(
            "config_map_rule_sets",
            "configMapRuleSets",
            vec![
                resource_ref("config_map_ref", "configMapRef"),
                strings("data_map_keys", "dataMapKeys"),
            ],
        ),
    ]
}

// ---------------------------------------------------------------------------
// JWT
// ---------------------------------------------------------------------------

fn jwt_vhost_extension() -> Vec<Attribute> {
    vec![
        object_map("providers", "providers", jwt_provider()),
        boolean("allow_missing_or_failed_jwt", "allowMissingOrFailedJwt"),
        string("validation_policy", "validationPolicy"),
    ]
}

fn jwt_route_extension() -> Vec<Attribute> {
    vec![boolean("disable", "disable")]
}

fn jwt_provider() -> Vec<Attribute> {
    vec![
        object(
            "jwks",
            "jwks",
            vec![
                object(
                    "remote",
                    "remote",
                    vec![
                        string("url", "url"),
                        resource_ref("upstream_ref", "upstreamRef"),
                        string("cache_duration", "cacheDuration"),
                        object(
                            "async_fetch",
                            "asyncFetch",
                            vec![boolean("fast_listener", "fastListener")],
                        ),
                    ],
                ),
                object("local", "local", vec![string("key", "key")]),
            ],
        ),
        strings("audiences", "audiences"),
        string("issuer", "issuer"),
        object(
            "token_source",
            "tokenSource",
            vec![
                objects(
                    "headers",
                    "headers",
                    vec![string("header", "header"), string("prefix", "prefix")],
                ),
                strings("query_params", "queryParams"),
            ],
        ),
        boolean("keep_token", "keepToken"),
        objects(
            "claims_to_headers",
            "claimsToHeaders",
            vec![
                string("claim", "claim"),
                string("header", "header"),
                boolean("append", "append"),
            ],
        ),
        int64("clock_skew_seconds", "clockSkewSeconds"),
    ]
}

// ---------------------------------------------------------------------------
// RBAC, DLP and CSRF
// ---------------------------------------------------------------------------

fn rbac_extension() -> Vec<Attribute> {
    vec![
        boolean("disable", "disable"),
        object_map(
            "policies",
            "policies",
            vec![
                objects(
                    "principals",
                    "principals",
                    vec![object(
                        "jwt_principal",
                        "jwtPrincipal",
                        vec![
                            string_map("claims", "claims"),
                            string("provider", "provider"),
                            string("matcher", "matcher"),
                        ],
                    )],
                ),
                object(
                    "permissions",
                    "permissions",
                    vec![
                        string("path_prefix", "pathPrefix"),
                        strings("methods", "methods"),
                    ],
                ),
                string("nested_claim_delimiter", "nestedClaimDelimiter"),
            ],
        ),
    ]
}

fn dlp_config() -> Vec<Attribute> {
    vec![
        objects(
            "actions",
            "actions",
            vec![
                string("action_type", "actionType"),
                object(
                    "custom_action",
                    "customAction",
                    vec![
                        string("name", "name"),
                        strings("regex", "regex"),
                        string("mask_char", "maskChar"),
                        object("percent", "percent", vec![float64("value", "value")]),
                        objects(
                            "regex_actions",
                            "regexActions",
                            vec![string("regex", "regex"), int64("subgroup", "subgroup")],
                        ),
                    ],
                ),
                boolean("shadow", "shadow"),
            ],
        ),
        string("enabled_for", "enabledFor"),
    ]
}

fn csrf_policy() -> Vec<Attribute> {
    vec![
        runtime_fractional_percent("filter_enabled", "filterEnabled"),
        runtime_fractional_percent("shadow_enabled", "shadowEnabled"),
        objects(
            "additional_origins",
            "additionalOrigins",
            vec![
                string("exact", "exact"),
                string("prefix", "prefix"),
                string("suffix", "suffix"),
                object("safe_regex", "safeRegex", regex_matcher()),
                boolean("ignore_case", "ignoreCase"),
            ],
        ),
    ]
}
