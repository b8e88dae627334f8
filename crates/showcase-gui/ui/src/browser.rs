//! Thin adapters from the core's seams onto browser APIs.

use anyhow::anyhow;
use showcase_core::KeyValueStorage;
use showcase_core::ids::Clock;
use wasm_bindgen::JsCast;

/// `window.localStorage`, looked up on every call so a storage that
/// appears or disappears mid-session is handled like any other failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

fn local_storage()
-> anyhow::Result<web_sys::Storage> {
  let window = web_sys::window()
    .ok_or_else(|| {
      anyhow!("no window available")
    })?;
  window
    .local_storage()
    .map_err(|error| {
      anyhow!(
        "localStorage access denied: \
         {error:?}"
      )
    })?
    .ok_or_else(|| {
      anyhow!(
        "localStorage is disabled"
      )
    })
}

impl KeyValueStorage for LocalStorage {
  fn get(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>> {
    local_storage()?
      .get_item(key)
      .map_err(|error| {
        anyhow!(
          "failed reading {key}: \
           {error:?}"
        )
      })
  }

  fn set(
    &self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    local_storage()?
      .set_item(key, value)
      .map_err(|error| {
        anyhow!(
          "failed writing {key}: \
           {error:?}"
        )
      })
  }
}

/// Wall clock from `Date.now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
  fn now_millis(&self) -> u64 {
    let now = js_sys::Date::now();
    if now.is_finite() && now > 0.0 {
      now as u64
    } else {
      0
    }
  }
}

/// Document offset of the element with `id`, if there is one.
pub fn element_offset_top(
  id: &str
) -> Option<f64> {
  gloo::utils::document()
    .get_element_by_id(id)?
    .dyn_into::<web_sys::HtmlElement>()
    .ok()
    .map(|element| {
      f64::from(element.offset_top())
    })
}

pub fn smooth_scroll_to(top: f64) {
  let options =
    web_sys::ScrollToOptions::new();
  options.set_top(top);
  options.set_behavior(
    web_sys::ScrollBehavior::Smooth
  );
  gloo::utils::window()
    .scroll_to_with_scroll_to_options(
      &options
    );
}
