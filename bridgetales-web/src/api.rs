//! `fetch`-backed implementation of the story server port.

use crate::dom;
use async_trait::async_trait;
use bridgetales_core::api::{
    CONTINUE_FAILED, CONTINUE_PATH, GENERATE_FAILED, GENERATE_PATH, NEARBY_FAILED, NEARBY_PATH,
    PROFILE_FAILED, PROFILE_PATH, SAVE_BOOK_FAILED, SAVE_BOOK_PATH, VOICE_DEMO_PATH,
};
use bridgetales_core::{
    ApiError, Business, ClientConfig, ContinueRequest, FinishedBook, GenerateRequest,
    NearbyRequest, StoryApi, StoryResponse, UserProfile, Voice, voice_demo_query,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response, Url};

fn transport(err: &JsValue) -> ApiError {
    ApiError::Transport(dom::js_error_message(err))
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpStoryApi {
    config: ClientConfig,
}

impl HttpStoryApi {
    #[must_use]
    pub const fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Absolute URL for `path` with `pairs` encoded as its query string.
    ///
    /// # Errors
    /// Returns [`ApiError::Transport`] when the configured base is not a valid URL.
    pub fn url_with_query(&self, path: &str, pairs: &[(&str, String)]) -> Result<String, ApiError> {
        let url = Url::new(&self.config.endpoint(path)).map_err(|err| transport(&err))?;
        let params = url.search_params();
        for (name, value) in pairs {
            params.append(name, value);
        }
        Ok(url.href())
    }

    /// Address of the narrated voice sample for `voice`.
    ///
    /// # Errors
    /// Returns [`ApiError::Transport`] when the configured base is not a valid URL.
    pub fn voice_demo_url(&self, voice: Voice, text: &str) -> Result<String, ApiError> {
        self.url_with_query(VOICE_DEMO_PATH, &voice_demo_query(voice, text))
    }

    fn get_request(url: &str) -> Result<Request, ApiError> {
        let init = RequestInit::new();
        init.set_method("GET");
        Request::new_with_str_and_init(url, &init).map_err(|err| transport(&err))
    }

    fn json_request<B: Serialize>(url: &str, body: &B) -> Result<Request, ApiError> {
        let payload =
            serde_json::to_string(body).map_err(|err| ApiError::Decode(err.to_string()))?;
        let headers = Headers::new().map_err(|err| transport(&err))?;
        headers
            .set("Content-Type", "application/json")
            .map_err(|err| transport(&err))?;
        let init = RequestInit::new();
        init.set_method("POST");
        init.set_headers(&headers);
        init.set_body(&JsValue::from_str(&payload));
        Request::new_with_str_and_init(url, &init).map_err(|err| transport(&err))
    }

    /// Send `request`; a non-success status becomes [`ApiError::Status`] with
    /// the server's `detail` or `fallback`.
    #[allow(clippy::future_not_send)]
    async fn send(request: &Request, fallback: &str) -> Result<Response, ApiError> {
        let window =
            dom::window().ok_or_else(|| ApiError::Transport(String::from("window unavailable")))?;
        let value = JsFuture::from(window.fetch_with_request(request))
            .await
            .map_err(|err| transport(&err))?;
        let response: Response = value
            .dyn_into()
            .map_err(|_| ApiError::Decode(String::from("fetch did not return a Response")))?;
        if response.ok() {
            return Ok(response);
        }
        let body = match response.text() {
            Ok(promise) => JsFuture::from(promise)
                .await
                .ok()
                .and_then(|text| text.as_string())
                .unwrap_or_default(),
            Err(_) => String::new(),
        };
        Err(ApiError::from_status_body(response.status(), &body, fallback))
    }

    #[allow(clippy::future_not_send)]
    async fn decode<T: DeserializeOwned>(response: &Response) -> Result<T, ApiError> {
        let promise = response.json().map_err(|err| transport(&err))?;
        let value = JsFuture::from(promise)
            .await
            .map_err(|err| ApiError::Decode(dom::js_error_message(&err)))?;
        serde_wasm_bindgen::from_value(value).map_err(|err| ApiError::Decode(err.to_string()))
    }

    #[allow(clippy::future_not_send)]
    async fn post_ack<B: Serialize>(&self, path: &str, body: &B, fallback: &str) -> Result<(), ApiError> {
        let request = Self::json_request(&self.config.endpoint(path), body)?;
        Self::send(&request, fallback).await.map(|_| ())
    }
}

#[async_trait(?Send)]
impl StoryApi for HttpStoryApi {
    async fn generate_story(&self, request: &GenerateRequest) -> Result<StoryResponse, ApiError> {
        let url = self.url_with_query(GENERATE_PATH, &request.query_pairs())?;
        let response = Self::send(&Self::get_request(&url)?, GENERATE_FAILED).await?;
        Self::decode(&response).await
    }

    async fn continue_story(&self, request: &ContinueRequest) -> Result<StoryResponse, ApiError> {
        let http = Self::json_request(&self.config.endpoint(CONTINUE_PATH), request)?;
        let response = Self::send(&http, CONTINUE_FAILED).await?;
        Self::decode(&response).await
    }

    async fn find_nearby(&self, request: &NearbyRequest) -> Result<Vec<Business>, ApiError> {
        let http = Self::json_request(&self.config.endpoint(NEARBY_PATH), request)?;
        let response = Self::send(&http, NEARBY_FAILED).await?;
        Self::decode(&response).await
    }

    async fn save_profile(&self, profile: &UserProfile) -> Result<(), ApiError> {
        self.post_ack(PROFILE_PATH, profile, PROFILE_FAILED).await
    }

    async fn save_book(&self, book: &FinishedBook) -> Result<(), ApiError> {
        self.post_ack(SAVE_BOOK_PATH, book, SAVE_BOOK_FAILED).await
    }
}
