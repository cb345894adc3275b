//! The bundled GraphiQL explorer page.

const ENDPOINT_PLACEHOLDER: &str = "{{endpoint}}";

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta http-equiv="X-UA-Compatible" content="IE=edge" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>GraphiQL</title>
    <link
      href="https://cdnjs.cloudflare.com/ajax/libs/graphiql/0.11.11/graphiql.min.css"
      rel="stylesheet"
    />
    <script src="https://cdnjs.cloudflare.com/ajax/libs/es6-promise/4.1.1/es6-promise.auto.min.js"></script>
    <script src="https://cdnjs.cloudflare.com/ajax/libs/fetch/2.0.3/fetch.min.js"></script>
    <script src="https://cdnjs.cloudflare.com/ajax/libs/react/16.2.0/umd/react.production.min.js"></script>
    <script src="https://cdnjs.cloudflare.com/ajax/libs/react-dom/16.2.0/umd/react-dom.production.min.js"></script>
    <script src="https://cdnjs.cloudflare.com/ajax/libs/graphiql/0.11.11/graphiql.min.js"></script>
  </head>
  <body style="width: 100%; height: 100%; margin: 0; overflow: hidden">
    <div id="graphiql" style="height: 100vh">Loading...</div>
    <script>
      function graphQLFetcher(graphQLParams) {
        return fetch({{endpoint}}, {
          method: "post",
          headers: { "Content-Type": "application/json" },
          body: JSON.stringify(graphQLParams),
          credentials: "include",
        })
          .then(function (response) {
            return response.text();
          })
          .then(function (responseBody) {
            try {
              return JSON.parse(responseBody);
            } catch (error) {
              return responseBody;
            }
          });
      }
      ReactDOM.render(
        React.createElement(GraphiQL, { fetcher: graphQLFetcher }),
        document.getElementById("graphiql")
      );
    </script>
  </body>
</html>
"#;

/// Render the explorer page for an endpoint mounted at `path`.
///
/// `path` ends up inside a `<script>` element as a JavaScript string
/// literal, so `<`, `>` and `&` are written as unicode escapes.
pub fn graphiql(path: &str) -> String {
    TEMPLATE.replace(ENDPOINT_PLACEHOLDER, &script_string_literal(path))
}

fn script_string_literal(value: &str) -> String {
    // JSON string syntax is valid JavaScript string syntax.
    serde_json::Value::String(value.to_owned())
        .to_string()
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graphiql_embeds_path_in_fetch_call() {
        let page = graphiql("/graphql");
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains(r#"fetch("/graphql", {"#));
        assert!(!page.contains(ENDPOINT_PLACEHOLDER));
    }

    #[test]
    fn test_graphiql_is_pure() {
        assert_eq!(graphiql("/api/graphql"), graphiql("/api/graphql"));
        assert_ne!(graphiql("/a"), graphiql("/b"));
    }

    #[test]
    fn test_graphiql_escapes_quotes() {
        let page = graphiql(r#"/q"uote\"#);
        assert!(page.contains(r#"fetch("/q\"uote\\", {"#));
    }

    #[test]
    fn test_graphiql_cannot_close_script() {
        let page = graphiql("/x</script><script>alert(1)</script>");
        assert_eq!(page.matches("</script>").count(), TEMPLATE.matches("</script>").count());
        assert!(page.contains(
            r#"fetch("/x\u003c/script\u003e\u003cscript\u003ealert(1)\u003c/script\u003e", {"#
        ));
    }
}
