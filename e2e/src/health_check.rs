#[cfg(test)]
mod health_check_e2e_tests {
    use ntex::{http::StatusCode, web::test::TestRequest};
    use ntex_graphql_adapter::{GraphQLHandler, HttpQueryResponse, StaticOptions};

    use crate::testkit::{call_adapter, ScriptedExecutor};

    fn handler() -> GraphQLHandler<ScriptedExecutor> {
        GraphQLHandler::new(
            ScriptedExecutor::new(|| Ok(HttpQueryResponse::new("{}"))),
            StaticOptions(()),
        )
    }

    #[ntex::test]
    async fn health_check_is_always_ok() {
        let res = call_adapter(handler(), "{}", TestRequest::get().uri("/health")).await;

        assert_eq!(res.status, StatusCode::OK);
    }

    #[ntex::test]
    async fn unknown_routes_are_not_found() {
        let res = call_adapter(handler(), "{}", TestRequest::get().uri("/nope")).await;

        assert_eq!(res.status, StatusCode::NOT_FOUND);
    }
}
