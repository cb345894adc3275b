#[cfg(test)]
mod tests {
    use super::super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn decode(body: &str) -> Result<Params, serde_json::Error> {
        Params::from_slice(body.as_bytes())
    }

    #[test]
    fn test_decode_full_envelope() {
        let params = decode(
            r#"{"query":"query Q($id: ID!) { node(id: $id) }","operationName":"Q","variables":{"id":"42"}}"#,
        )
        .unwrap();

        assert_eq!(params.query, "query Q($id: ID!) { node(id: $id) }");
        assert_eq!(params.operation_name.as_deref(), Some("Q"));
        assert_eq!(
            params.variables.unwrap().get("id"),
            Some(&json!("42"))
        );
    }

    #[test]
    fn test_decode_query_only() {
        let params = decode(r#"{"query":"{ hello }"}"#).unwrap();
        assert_eq!(params, Params::new("{ hello }"));
    }

    #[test]
    fn test_decode_missing_or_null_query_is_empty() {
        assert_eq!(decode("{}").unwrap().query, "");
        assert_eq!(decode(r#"{"query":null}"#).unwrap().query, "");
    }

    #[test]
    fn test_decode_empty_operation_name_is_none() {
        let params = decode(r#"{"query":"{ hello }","operationName":""}"#).unwrap();
        assert_eq!(params.operation_name, None);

        let params = decode(r#"{"query":"{ hello }","operationName":null}"#).unwrap();
        assert_eq!(params.operation_name, None);
    }

    #[test]
    fn test_decode_null_variables() {
        let params = decode(r#"{"query":"{ hello }","variables":null}"#).unwrap();
        assert_eq!(params.variables, None);
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let params = decode(r#"{"query":"{ hello }","extensions":{"persistedQuery":{}}}"#).unwrap();
        assert_eq!(params.query, "{ hello }");
    }

    #[test]
    fn test_decode_rejects_malformed_json() {
        assert!(decode("").is_err());
        assert!(decode("{").is_err());
        assert!(decode("query { hello }").is_err());
        assert!(decode(r#"{"query":"{ hello }"} trailing"#).is_err());
    }

    #[test]
    fn test_decode_rejects_non_object_top_level() {
        assert!(decode(r#"["{ hello }"]"#).is_err());
        assert!(decode(r#""{ hello }""#).is_err());
        assert!(decode("null").is_err());
        assert!(decode("42").is_err());
    }

    #[test]
    fn test_decode_rejects_wrong_field_types() {
        assert!(decode(r#"{"query":42}"#).is_err());
        assert!(decode(r#"{"query":"{ hello }","operationName":7}"#).is_err());
        assert!(decode(r#"{"query":"{ hello }","variables":[1,2]}"#).is_err());
        assert!(decode(r#"{"query":"{ hello }","variables":"id=1"}"#).is_err());
    }

    #[test]
    fn test_into_request_carries_all_fields() {
        let mut variables = serde_json::Map::new();
        variables.insert("name".to_string(), json!("gopher"));

        let request = Params::new("query Greet($name: String) { greet(name: $name) }")
            .operation_name("Greet")
            .variables(variables)
            .into_request();

        assert_eq!(request.query, "query Greet($name: String) { greet(name: $name) }");
        assert_eq!(request.operation_name.as_deref(), Some("Greet"));
        assert_eq!(
            request.variables.into_value().into_json().unwrap(),
            json!({ "name": "gopher" })
        );
    }

    #[test]
    fn test_into_request_without_optional_fields() {
        let request = Params::new("{ hello }").into_request();
        assert_eq!(request.operation_name, None);
        assert!(request.variables.is_empty());
    }

    #[test]
    fn test_framework_display() {
        assert_eq!(Framework::Axum.to_string(), "axum");
        assert_eq!(Framework::ActixWeb.to_string(), "actix-web");
        assert_eq!(Framework::Hyper.to_string(), "hyper");
    }

    #[test]
    fn test_request_context_accessors() {
        let (parts, ()) = http::Request::builder()
            .method(http::Method::POST)
            .uri("/graphql?debug=1")
            .header("user-agent", "curl/8.0")
            .body(())
            .unwrap()
            .into_parts();

        let addr = "127.0.0.1:4000".parse().unwrap();
        let ctx = RequestContext::new(Framework::Hyper, parts).with_remote_addr(Some(addr));

        assert_eq!(ctx.framework(), Framework::Hyper);
        assert_eq!(*ctx.method(), http::Method::POST);
        assert_eq!(ctx.uri().path(), "/graphql");
        assert_eq!(ctx.header("user-agent"), Some("curl/8.0"));
        assert_eq!(ctx.header("x-missing"), None);
        assert_eq!(ctx.remote_addr(), Some(addr));
    }
}
