#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;
use yew::Renderer;

use legacy_web::app::App;
use legacy_web::dom;
use legacy_web::timers::PeriodicTask;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document().expect("document");
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        dom::window()
            .expect("window")
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .expect("schedule timeout");
    });
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .expect("timeout resolves");
}

#[wasm_bindgen_test]
fn browser_globals_are_present() {
    assert!(dom::window().is_some());
    assert!(dom::document().is_some());
    let (origin, _path) = dom::location_base().expect("location");
    assert!(origin.starts_with("http"));
}

#[wasm_bindgen_test]
fn set_lang_updates_document_and_storage() {
    legacy_web::i18n::set_lang("en");
    let html = dom::document()
        .and_then(|doc| doc.document_element())
        .expect("html element");
    assert_eq!(html.get_attribute("lang").as_deref(), Some("en"));
    assert_eq!(html.get_attribute("dir").as_deref(), Some("ltr"));
    let stored = dom::window()
        .and_then(|win| win.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item("legacy.locale").ok().flatten());
    assert_eq!(stored.as_deref(), Some("en"));
    legacy_web::i18n::set_lang("es");
}

#[wasm_bindgen_test]
async fn periodic_task_stops_when_callback_returns_false() {
    use std::cell::Cell;
    use std::rc::Rc;

    let ticks = Rc::new(Cell::new(0_u32));
    let seen = Rc::clone(&ticks);
    let task = PeriodicTask::start(5, move || {
        seen.set(seen.get() + 1);
        seen.get() < 3
    })
    .expect("interval scheduled");
    sleep(100).await;
    assert_eq!(ticks.get(), 3);
    assert!(!task.is_running());
}

#[wasm_bindgen_test]
async fn dropping_a_task_cancels_it() {
    use std::cell::Cell;
    use std::rc::Rc;

    let ticks = Rc::new(Cell::new(0_u32));
    let seen = Rc::clone(&ticks);
    let task = PeriodicTask::start(5, move || {
        seen.set(seen.get() + 1);
        true
    })
    .expect("interval scheduled");
    assert!(task.is_running());
    drop(task);
    let frozen = ticks.get();
    sleep(50).await;
    assert_eq!(ticks.get(), frozen);
}

#[wasm_bindgen_test]
async fn app_renders_loading_screen_then_hero() {
    legacy_web::i18n::set_lang("es");
    Renderer::<App>::with_root(ensure_app_root()).render();
    sleep(10).await;
    let doc = dom::document().expect("document");
    assert!(doc.query_selector(".loading-screen").expect("query").is_some());
    assert!(doc.get_element_by_id("main").is_some());
    assert!(doc.get_element_by_id("regla-1").is_some());

    sleep(2_500).await;
    assert!(doc.query_selector(".loading-screen").expect("query").is_none());
    assert!(doc.get_element_by_id("home").is_some());
    assert!(doc.get_element_by_id("copy-ip-btn").is_some());
}

#[wasm_bindgen_test]
async fn key_press_skips_loading_screen() {
    legacy_web::i18n::set_lang("es");
    let root = ensure_app_root();
    Renderer::<App>::with_root(root.clone()).render();
    sleep(10).await;
    assert!(root.query_selector(".loading-screen").expect("query").is_some());

    let focused = dom::document()
        .and_then(|doc| doc.active_element())
        .expect("loading screen takes focus");
    assert!(focused.class_name().contains("loading-screen"));

    let init = web_sys::KeyboardEventInit::new();
    init.set_bubbles(true);
    init.set_key("Enter");
    let event = web_sys::KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init)
        .expect("keyboard event");
    focused.dispatch_event(&event).expect("dispatch keydown");
    sleep(50).await;

    assert!(root.query_selector(".loading-screen").expect("query").is_none());
    assert!(root.query_selector("#home").expect("query").is_some());
}
