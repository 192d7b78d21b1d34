use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};
use wonderful_gallery_shared::{download::download_file_name, ArticleImage};

/// Strip scripts, event handlers and unknown tags from article HTML before
/// it is injected with `RawHtml`.
pub fn sanitize_html(content: &str) -> String {
    if content.trim().is_empty() {
        return String::new();
    }

    ammonia::Builder::default()
        .add_generic_attributes(&["class"])
        .clean(content)
        .to_string()
}

pub fn open_in_new_tab(url: &str) {
    if let Some(win) = web_sys::window() {
        if let Err(e) = win.open_with_url_and_target(url, "_blank") {
            web_sys::console::error_1(&format!("Failed to open {}: {:?}", url, e).into());
        }
    }
}

fn save_bytes(bytes: &[u8], file_name: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?;

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let options = BlobPropertyBag::new();
    options.set_type("application/octet-stream");
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    let object_url = Url::create_object_url_with_blob(&blob)?;

    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&object_url);
    anchor.set_download(file_name);
    body.append_child(&anchor)?;
    anchor.click();
    anchor.remove();

    Url::revoke_object_url(&object_url)
}

/// Count a download and hand the image to the browser as a file.
///
/// Returns the new counter value when the backend reported one. A failed
/// counter update is only logged; any failure while fetching or saving the
/// bytes falls back to opening the asset in a new tab.
pub async fn download_image(image: &ArticleImage, title: &str) -> Option<u64> {
    let new_count = match crate::api::record_image_download(image.id).await {
        Ok(receipt) if receipt.success => receipt.new_count,
        Ok(receipt) => {
            web_sys::console::warn_1(
                &format!(
                    "Download counter rejected image {}: {}",
                    image.id,
                    receipt.message.unwrap_or_default()
                )
                .into(),
            );
            None
        },
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to record download: {}", e).into());
            None
        },
    };

    let file_name = download_file_name(&image.image_url, title, image.id);
    let saved = match crate::api::fetch_image_bytes(&image.image_url).await {
        Ok(bytes) => save_bytes(&bytes, &file_name).map_err(|e| format!("{:?}", e)),
        Err(e) => Err(e.to_string()),
    };
    if let Err(e) = saved {
        web_sys::console::warn_1(&format!("Failed to save {}: {}", file_name, e).into());
        open_in_new_tab(&image.image_url);
    }

    new_count
}
