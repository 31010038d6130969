//! WebAssembly bindings for the search modal.
//!
//! Exposes the synchronous pipeline only. Debouncing in the browser belongs to
//! the event loop there (`setTimeout`), so the page keeps its timer and calls
//! `search()` once the input settles.
//!
//! ```js
//! const search = new SiteSearch(items);
//! const { results, groupedResults, suggestions } = search.search("бібліот");
//! ```

use crate::search::evaluate;
use crate::suggest::suggest;
use crate::types::{ContentIndex, ItemType, SearchableItem};
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

/// WASM-accessible site search over a validated content index.
#[wasm_bindgen]
pub struct SiteSearch {
    index: ContentIndex,
}

#[wasm_bindgen]
impl SiteSearch {
    /// Build from an array of searchable items. Throws on malformed items.
    #[wasm_bindgen(constructor)]
    pub fn new(items: JsValue) -> Result<SiteSearch, JsValue> {
        let items: Vec<SearchableItem> = from_value(items)?;
        let index = ContentIndex::from_items(items).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(SiteSearch { index })
    }

    /// Evaluate a settled query. Returns `{ results, groupedResults, ... }`.
    pub fn search(&self, query: &str) -> Result<JsValue, JsValue> {
        Ok(to_value(&evaluate(&self.index, query))?)
    }

    /// The fallback suggestions for this index.
    pub fn suggest(&self) -> Result<JsValue, JsValue> {
        Ok(to_value(&suggest(&self.index))?)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[wasm_bindgen(js_name = isEmpty)]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Group keys in display order.
    #[wasm_bindgen(js_name = groupKeys)]
    pub fn group_keys() -> js_sys::Array {
        ItemType::ALL
            .iter()
            .map(|kind| JsValue::from_str(kind.as_str()))
            .collect()
    }
}
