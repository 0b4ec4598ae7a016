use anyhow::anyhow;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Event, HtmlInputElement};

use foodiebaba_frontend_api::FileUpload;

/// Reads the files selected in an `<input type="file">`.
pub async fn selected_files(ev: &Event) -> anyhow::Result<Vec<FileUpload>> {
    let input = ev
        .target()
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        .ok_or_else(|| anyhow!("No file input"))?;
    let Some(list) = input.files() else {
        return Ok(vec![]);
    };
    let mut files = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        let Some(file) = list.get(i) else {
            continue;
        };
        let buffer = JsFuture::from(file.array_buffer())
            .await
            .map_err(|err| anyhow!("Unable to read {}: {err:?}", file.name()))?;
        let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
        let content_type = Some(file.type_()).filter(|t| !t.is_empty());
        files.push(FileUpload {
            file_name: file.name(),
            content_type,
            bytes,
        });
    }
    Ok(files)
}
