use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, FormData};

use crate::{Body, FormPart, HttpClient, HttpRequest, HttpResponse, Method, TransportError};

/// Browser `fetch` transport.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooClient;

#[async_trait(?Send)]
impl HttpClient for GlooClient {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = request;
        let mut builder = builder(method, &url);
        for (name, value) in &headers {
            builder = builder.header(name, value);
        }
        let request = match body {
            Body::Empty => builder.build(),
            Body::Json(json) => builder.body(json),
            Body::Multipart(parts) => builder.body(form_data(parts)?),
        }
        .map_err(|err| TransportError::Request(err.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|err| TransportError::NoResponse(err.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| TransportError::NoResponse(err.to_string()))?;
        Ok(HttpResponse { status, body })
    }
}

fn builder(method: Method, url: &str) -> RequestBuilder {
    match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Put => Request::put(url),
        Method::Delete => Request::delete(url),
    }
}

// The browser picks the multipart boundary, so no Content-Type header is set here.
fn form_data(parts: Vec<FormPart>) -> Result<FormData, TransportError> {
    let form = FormData::new().map_err(js_error)?;
    for FormPart { name, file } in parts {
        let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
        let sequence = js_sys::Array::of1(&bytes);
        let options = BlobPropertyBag::new();
        if let Some(content_type) = &file.content_type {
            options.set_type(content_type);
        }
        let blob =
            Blob::new_with_u8_array_sequence_and_options(&sequence, &options).map_err(js_error)?;
        form.append_with_blob_and_filename(&name, &blob, &file.file_name)
            .map_err(js_error)?;
    }
    Ok(form)
}

fn js_error(err: JsValue) -> TransportError {
    TransportError::Request(
        err.as_string()
            .unwrap_or_else(|| "unknown JS error".to_string()),
    )
}
