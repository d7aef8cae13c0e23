#[cfg(target_arch = "wasm32")]
use js_sys::{Array, Function, Intl, Object};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::BTreeMap;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

const LOCALE_STORAGE_KEY: &str = "tribal.locale";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LocaleMeta {
    pub code: &'static str,
    pub name: &'static str,
}

const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta {
        code: "en",
        name: "English",
    },
    LocaleMeta {
        code: "ne",
        name: "नेपाली",
    },
    LocaleMeta {
        code: "hi",
        name: "हिन्दी",
    },
];

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("en", include_str!("../i18n/en.json")),
    ("ne", include_str!("../i18n/ne.json")),
    ("hi", include_str!("../i18n/hi.json")),
];

pub struct I18nBundle {
    pub lang: String,
    translations: Value,
    fallback: Value,
}

fn load_translations(lang: &str) -> Option<Value> {
    let bundle = LOCALE_TABLE
        .iter()
        .find_map(|(code, data)| (*code == lang).then_some(*data))?;
    serde_json::from_str(bundle).ok()
}

fn build_bundle(lang: &str) -> Option<I18nBundle> {
    let fallback = load_translations("en")?;
    let translations = load_translations(lang)?;
    Some(I18nBundle {
        lang: lang.to_string(),
        translations,
        fallback,
    })
}

fn fallback_bundle() -> I18nBundle {
    let fallback = load_translations("en").unwrap_or(Value::Object(serde_json::Map::new()));
    I18nBundle {
        lang: "en".to_string(),
        translations: fallback.clone(),
        fallback,
    }
}

/// Supported locales with their native names.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    LOCALE_META
}

fn saved_lang() -> String {
    crate::dom::local_storage()
        .ok()
        .and_then(|storage| storage.get_item(LOCALE_STORAGE_KEY).ok().flatten())
        .unwrap_or_else(|| "en".to_string())
}

thread_local! {
    static CURRENT: RefCell<I18nBundle> = RefCell::new({
        let initial = saved_lang();
        build_bundle(&initial).unwrap_or_else(|| build_bundle("en").unwrap_or_else(fallback_bundle))
    });
}

/// Set the current language for internationalization
///
/// Unknown codes are ignored. Updates `<html lang>` and persists the choice
/// to localStorage for future visits.
pub fn set_lang(lang: &str) {
    let Some(bundle) = build_bundle(lang) else {
        log::debug!("ignoring unsupported locale {lang}");
        return;
    };
    CURRENT.with(|cell| cell.replace(bundle));
    if let Some(root) = crate::dom::document_root() {
        let _ = root.set_attribute("lang", lang);
    }
    if let Ok(storage) = crate::dom::local_storage() {
        let _ = storage.set_item(LOCALE_STORAGE_KEY, lang);
    }
}

/// Get the current active language code
#[must_use]
pub fn current_lang() -> String {
    CURRENT.with(|c| c.borrow().lang.clone())
}

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(obj, |current, k| current.get(k))
}

fn render_value(value: &Value, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = value.as_str()?.to_string();
    if let Some(args_map) = args {
        for (k, v) in args_map {
            let ph1 = format!("{{{{{k}}}}}"); // {{var}}
            let ph2 = format!("{{{k}}}"); // {var}
            text = text.replace(&ph1, v);
            text = text.replace(&ph2, v);
        }
    }
    Some(text)
}

fn resolve(key: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    CURRENT.with(|cell| {
        let bundle = cell.borrow();
        get_nested_value(&bundle.translations, key)
            .and_then(|v| render_value(v, args))
            .or_else(|| get_nested_value(&bundle.fallback, key).and_then(|v| render_value(v, args)))
    })
}

/// Translate a key to the current language
///
/// Falls back to English, then to the key itself.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key with variable substitution
///
/// Variables in the translated string use the format {key} or {{key}}.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    resolve(key, args).unwrap_or_else(|| key.to_string())
}

/// Format a number using the current locale via Intl
#[must_use]
pub fn fmt_number(num: f64) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        CURRENT.with(|c| {
            let lang = c.borrow().lang.clone();
            let locales = {
                let arr = Array::new();
                arr.push(&JsValue::from_str(&lang));
                arr
            };
            let nf = Intl::NumberFormat::new(&locales, &Object::new());
            let format_fn: Function = nf.format();
            format_fn
                .call1(&nf, &JsValue::from_f64(num))
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_else(|| num.to_string())
        })
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        num.to_string()
    }
}

/// Format a whole percentage for display, e.g. the text-size readout.
#[must_use]
pub fn fmt_pct(pct: u16) -> String {
    let mut vars = BTreeMap::new();
    let number = fmt_number(f64::from(pct));
    vars.insert("value", number.as_str());
    tr("format.percent", Some(&vars))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locale_keys(prefix: &str, value: &Value, out: &mut Vec<String>) {
        if let Value::Object(map) = value {
            for (k, v) in map {
                let next = if prefix.is_empty() {
                    k.clone()
                } else {
                    format!("{prefix}.{k}")
                };
                if v.is_object() {
                    locale_keys(&next, v, out);
                } else {
                    out.push(next);
                }
            }
        }
    }

    #[test]
    fn interpolation_handles_braced_forms() {
        let value = Value::String("Text size {value}, {{value}}".into());
        let mut args = BTreeMap::new();
        args.insert("value", "125%");
        let resolved = render_value(&value, Some(&args)).unwrap();
        assert_eq!(resolved, "Text size 125%, 125%");
    }

    #[test]
    fn every_locale_parses_and_covers_english_keys() {
        let english = load_translations("en").unwrap();
        let mut expected = Vec::new();
        locale_keys("", &english, &mut expected);
        assert!(!expected.is_empty());
        for meta in locales() {
            let bundle = load_translations(meta.code)
                .unwrap_or_else(|| panic!("{} bundle should parse", meta.code));
            for key in &expected {
                assert!(
                    get_nested_value(&bundle, key).is_some_and(Value::is_string),
                    "{} is missing {key}",
                    meta.code
                );
            }
        }
    }

    #[test]
    fn unknown_locale_is_ignored() {
        set_lang("en");
        set_lang("xx");
        assert_eq!(current_lang(), "en");
    }

    #[test]
    fn missing_keys_fall_back_to_the_key() {
        set_lang("ne");
        assert_eq!(t("no.such.key"), "no.such.key");
        assert_ne!(t("a11y.title"), "a11y.title");
        set_lang("en");
    }

    #[test]
    fn percent_readout_uses_locale_template() {
        set_lang("en");
        assert_eq!(fmt_pct(113), "113%");
    }
}
