// Copyright (c) The Diem Core Contributors
// SPDX-License-Identifier: Apache-2.0

//! The HTTP layer underneath the client. Connection handling and per request timeouts live here;
//! the client only sees a status code and a body.

use crate::config::defaults;
use reqwest::{header::CONTENT_TYPE, Url};
use serde_json::Value;
use std::time::Duration;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: String) -> Self {
        Self { status, body }
    }

    pub fn ok(body: String) -> Self {
        Self::new(200, body)
    }
}

pub trait HttpTransport: Send + Sync {
    /// POSTs `body` as JSON to `url`. Only I/O failures are errors; any HTTP status is returned.
    fn post(&self, url: &Url, body: &Value) -> anyhow::Result<HttpResponse>;
}

pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    pub fn new() -> reqwest::Result<Self> {
        Self::with_timeout(defaults::HTTP_REQUEST_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> reqwest::Result<Self> {
        let client = reqwest::blocking::ClientBuilder::new()
            .use_native_tls()
            .timeout(timeout)
            .pool_idle_timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    fn post(&self, url: &Url, body: &Value) -> anyhow::Result<HttpResponse> {
        let response = self
            .client
            .post(url.clone())
            .header(CONTENT_TYPE, "application/json")
            .json(body)
            .send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(HttpResponse::new(status, body))
    }
}
