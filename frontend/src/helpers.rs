//! Small DOM utilities shared by the application's components.

/// How long a toast stays on screen, in milliseconds.
const TOAST_DURATION_MS: u32 = 3000;

const TOAST_STYLE: &str = "position: fixed; bottom: 20px; left: 50%; \
    transform: translateX(-50%); padding: 10px 20px; border-radius: 4px; \
    background: rgba(0, 0, 0, 0.8); color: #fff; z-index: 10000;";

/// Shows a temporary notification at the bottom of the page.
///
/// The toast is a plain `div` appended to `<body>` and removed again after
/// [`TOAST_DURATION_MS`]. Silently does nothing when there is no document.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };

    toast.set_text_content(Some(message));
    if toast.set_attribute("style", TOAST_STYLE).is_err() || body.append_child(&toast).is_err() {
        return;
    }

    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
        toast.remove();
    });
}
