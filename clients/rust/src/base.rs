use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};

pub(crate) struct BaseClient {
    address: String,
    client: Client,
    token: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum APIError {
    Network,
    MalformedResponse,
    UnexpectedStatusCode(StatusCode),
}
pub type APIResponse<T> = Result<T, APIError>;

impl BaseClient {
    pub fn new(address: String) -> Self {
        Self {
            address: address.trim_end_matches('/').to_string(),
            client: Client::new(),
            token: None,
        }
    }

    pub fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    fn get_client(&self, method: Method, path: String) -> RequestBuilder {
        let url = format!("{}/{}", self.address, path);
        let builder = self.client.request(method, &url);

        if let Some(token) = &self.token {
            builder.bearer_auth(token)
        } else {
            builder
        }
    }

    fn check_status_code(
        &self,
        res: &Response,
        expected_status_code: StatusCode,
    ) -> Result<(), APIError> {
        let status = res.status();
        if status != expected_status_code {
            return Err(APIError::UnexpectedStatusCode(status));
        }
        Ok(())
    }

    async fn handle_api_response<T: DeserializeOwned>(
        &self,
        res: Response,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        self.check_status_code(&res, expected_status_code)?;
        res.json::<T>()
            .await
            .map_err(|_| APIError::MalformedResponse)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = match builder.send().await {
            Ok(res) => res,
            Err(_) => return Err(APIError::Network),
        };
        self.handle_api_response(res, expected_status_code).await
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        self.send(self.get_client(Method::GET, path), expected_status_code)
            .await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        self.send(self.get_client(Method::DELETE, path), expected_status_code)
            .await
    }

    pub async fn put<T: DeserializeOwned, S: Serialize>(
        &self,
        body: S,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        self.send(
            self.get_client(Method::PUT, path).json(&body),
            expected_status_code,
        )
        .await
    }

    pub async fn post<T: DeserializeOwned, S: Serialize>(
        &self,
        body: S,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        self.send(
            self.get_client(Method::POST, path).json(&body),
            expected_status_code,
        )
        .await
    }
}
