use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use twitter::{Credentials, TwitterApi, TwitterClient, TwitterError};

use crate::config::Config;
use crate::pipeline::{self, Outcome, Output};

pub static WELCOME_MESSAGE: &str = "Welcome to Twitter Miner";
pub static INVALID_FORMAT_MESSAGE: &str = "Invalid file format. Available formats are JSON & YAML.";

/// Produces a fresh authenticated client for every request
pub trait Connect: Send + Sync + 'static {
    type Api: TwitterApi;

    fn connect(&self) -> Result<Self::Api, TwitterError>;
}

impl Connect for Credentials {
    type Api = TwitterClient;

    fn connect(&self) -> Result<TwitterClient, TwitterError> {
        twitter::authenticate(self)
    }
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("account {0} not found")]
    NotFound(String),
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    #[error("rate limited")]
    RateLimited,
    #[error("twitter error: {0}")]
    Upstream(String),
    #[error("internal server error")]
    Internal,
}

#[derive(Serialize)]
struct ApiErrBody {
    error: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ApiErrBody {
            error: self.to_string(),
        })
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        log::error!("pipeline error: {e:?}");
        match e.downcast_ref::<TwitterError>() {
            Some(TwitterError::Authorization(reason)) => ApiError::Unauthorized(reason.clone()),
            Some(TwitterError::RateLimited { .. }) => ApiError::RateLimited,
            Some(err) => ApiError::Upstream(err.to_string()),
            None => ApiError::Internal,
        }
    }
}

impl From<TwitterError> for ApiError {
    fn from(e: TwitterError) -> Self {
        anyhow::Error::from(e).into()
    }
}

#[derive(Deserialize)]
pub struct FormatQuery {
    #[serde(default = "default_format")]
    format: String,
}

fn default_format() -> String {
    "json".to_owned()
}

pub fn configure<C: Connect>(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/account", web::get().to(account::<C>))
        .route("/account/{account_name}", web::get().to(account::<C>));
}

pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "message": WELCOME_MESSAGE }))
}

/// Export an account as a response body. Only JSON is served here.
pub async fn account<C: Connect>(
    connector: web::Data<C>,
    cfg: web::Data<Config>,
    path: Option<web::Path<String>>,
    query: web::Query<FormatQuery>,
) -> Result<HttpResponse, ApiError> {
    if query.format != "json" {
        return Ok(HttpResponse::Ok().json(json!({ "Message": INVALID_FORMAT_MESSAGE })));
    }

    let account = match path {
        Some(path) => path.into_inner(),
        None => cfg.server.default_account.clone(),
    };

    let api = connector.connect()?;
    let count = cfg.output.timeline_count;
    match pipeline::run(api, Some(&account), count, &Output::Response).await? {
        Outcome::Response(mapping) => Ok(HttpResponse::Ok().json(json!({ "result": mapping }))),
        Outcome::NotFound => Err(ApiError::NotFound(account)),
        Outcome::Written(_) => Err(ApiError::Internal),
    }
}

#[cfg(test)]
mod test {
    use actix_web::web::Data;
    use actix_web::{test, App};
    use serde_json::Value;

    use super::*;
    use crate::testing::{raw_status, raw_user, StubApi};

    impl Connect for StubApi {
        type Api = StubApi;

        fn connect(&self) -> Result<StubApi, TwitterError> {
            Ok(self.clone())
        }
    }

    macro_rules! app {
        ($api:expr) => {
            test::init_service(
                App::new()
                    .app_data(Data::new($api))
                    .app_data(Data::new(Config::default()))
                    .configure(configure::<StubApi>),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn welcome() {
        let app = app!(StubApi::missing());
        let req = test::TestRequest::get().uri("/").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(json!({"message": "Welcome to Twitter Miner"}), body);
    }

    #[actix_web::test]
    async fn account_json() {
        let api = StubApi::new(raw_user(), vec![raw_status()]);
        let app = app!(api.clone());
        let req = test::TestRequest::get()
            .uri("/account/Test?format=json")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(json!(1), body["result"]["id"]);
        assert_eq!(json!("999"), body["result"]["tweets"][0]["id"]);
        assert_eq!(json!({}), body["result"]["tweets"][0]["entities"]);
        assert_eq!(vec!["Test".to_owned()], api.looked_up());
        assert_eq!(vec![(1, 20)], api.timeline_requests());
    }

    #[actix_web::test]
    async fn default_account_and_format() {
        let api = StubApi::new(raw_user(), vec![raw_status()]);
        let app = app!(api.clone());
        let req = test::TestRequest::get().uri("/account").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(StatusCode::OK, resp.status());
        assert_eq!(vec!["elonmusk".to_owned()], api.looked_up());
    }

    #[actix_web::test]
    async fn invalid_format() {
        let api = StubApi::new(raw_user(), vec![raw_status()]);
        let app = app!(api.clone());
        let req = test::TestRequest::get()
            .uri("/account/Test?format=yaml")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(StatusCode::OK, resp.status());

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(json!({"Message": INVALID_FORMAT_MESSAGE}), body);
        assert!(api.looked_up().is_empty());
    }

    #[actix_web::test]
    async fn unknown_account() {
        let app = app!(StubApi::missing());
        let req = test::TestRequest::get().uri("/account/nobody").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(StatusCode::NOT_FOUND, resp.status());
    }

    #[actix_web::test]
    async fn rejected_credentials() {
        let app = app!(StubApi::unauthorized());
        let req = test::TestRequest::get().uri("/account/Test").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(StatusCode::UNAUTHORIZED, resp.status());
    }
}
