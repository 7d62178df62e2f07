//! Locale-aware ordering for registrant names.
//!
//! TRADE-OFFS
//! ==========
//! In the browser the panel sorts with `Intl.Collator("th")`, matching how
//! Thai names are alphabetized. Outside the browser (SSR and native tests)
//! there is no collator, so ordering falls back to code points. For Thai
//! consonant-initial names the two orderings agree.

#[cfg(test)]
#[path = "collate_test.rs"]
mod collate_test;

use std::cmp::Ordering;

/// Compare two display names with Thai collation where available.
#[must_use]
pub fn compare_names(a: &str, b: &str) -> Ordering {
    #[cfg(feature = "hydrate")]
    {
        collator_compare(a, b).unwrap_or_else(|| a.cmp(b))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        a.cmp(b)
    }
}

#[cfg(feature = "hydrate")]
fn collator_compare(a: &str, b: &str) -> Option<Ordering> {
    use wasm_bindgen::JsValue;

    let locales = js_sys::Array::of1(&JsValue::from_str("th"));
    let collator = js_sys::Intl::Collator::new(&locales, &js_sys::Object::new());
    let result = collator
        .compare()
        .call2(&JsValue::NULL, &JsValue::from_str(a), &JsValue::from_str(b))
        .ok()?
        .as_f64()?;
    if result < 0.0 {
        Some(Ordering::Less)
    } else if result > 0.0 {
        Some(Ordering::Greater)
    } else {
        Some(Ordering::Equal)
    }
}
