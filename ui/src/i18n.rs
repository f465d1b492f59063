//! Internationalization (i18n) support for `verki-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/verki-ui.ftl   (fallback/reference)
//!   is-IS/verki-ui.ftl   (site default)
//! ```
//!
//! The site is Icelandic-first: `init()` selects `is-IS` regardless of the
//! browser/OS locale list, and the navbar switcher toggles between the two
//! supported languages. `en-US` stays the fluent fallback so a key missing
//! from the Icelandic catalog renders English rather than nothing (the
//! completeness tests keep that case out of release builds).
//!
//! Lookup surfaces:
//! - `t!("<key>")` – compile-time checked, for literal keys at callsites.
//! - `tr("<key>")` – runtime lookup for keys assembled from data (wizard step
//!   definitions). A missing key returns the key verbatim and logs the miss
//!   in debug builds; it is a defect, not a supported rendering path.
//!
//! Public API surface:
//! - `init()` – load localization bundles (safe to call multiple times).
//! - `set_language(tag: &str)` – switch language at runtime.
//! - `available_languages()` – discover embedded language tags (for a picker).
//! - `Language` – the two site languages with their locale mapping.
//! - `tr(key)` – runtime lookup with fallback-to-key.
//! - `fl` macro re-export (for direct keyed access when needed).
//! - `LOADER` – global `FluentLanguageLoader` consumed by helpers & `fl!` macro.
//!
//! NOTE: The hyphenated filename `verki-ui.ftl` is canonical across all locales.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("nav-home")
///     t!("login-signed-in", email = "jon@example.is")
///
/// This expands to `fl!(&*LOADER, ...)` keeping callsites short while
/// ensuring all lookups route through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
///
/// Fallback file path must be: `i18n/en-US/{DOMAIN}.ftl`
const DOMAIN: &str = "verki-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// The two languages the site ships. `code()` is what the rest of the app
/// passes around (and what the language signal holds); `locale()` is the
/// embedded catalog directory it maps onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Is,
    En,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::Is => "is",
            Language::En => "en",
        }
    }

    pub fn locale(self) -> &'static str {
        match self {
            Language::Is => "is-IS",
            Language::En => "en-US",
        }
    }

    /// Native-language display name for the switcher.
    pub fn label(self) -> &'static str {
        match self {
            Language::Is => "Íslenska",
            Language::En => "English",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::Is => Language::En,
            Language::En => Language::Is,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "is" => Some(Language::Is),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    pub const ALL: [Language; 2] = [Language::Is, Language::En];
}

impl Default for Language {
    fn default() -> Self {
        Language::Is
    }
}

/// Initialize i18n (idempotent). Selects the Icelandic default.
pub fn init() {
    INIT.call_once(|| {
        let requested: LanguageIdentifier = Language::default()
            .locale()
            .parse()
            .expect("valid default language identifier");
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &[requested]) {
            eprintln!("[i18n] Failed selecting languages ({err}); continuing with fallback");
        }
    });
}

/// Switch language at runtime. If `tag` cannot be parsed it is ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()), // Silently ignore invalid tags.
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Switch to one of the site languages.
pub fn set_site_language(lang: Language) -> Result<(), i18n_embed::I18nEmbedError> {
    set_language(lang.locale())
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Runtime lookup for keys that are not literals at the callsite (wizard step
/// definitions carry their title/prompt keys as data).
///
/// A key absent from every loaded catalog is returned verbatim so the UI
/// still renders something; the miss is logged in debug builds.
pub fn tr(key: &str) -> String {
    if LOADER.has(key) {
        LOADER.get(key)
    } else {
        #[cfg(debug_assertions)]
        eprintln!("[i18n] missing translation key: {key}");
        key.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fl;
    use std::sync::Mutex;

    // The loader's active language is process-global; tests that switch it
    // must not interleave.
    static LANG_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn both_site_locales_are_embedded() {
        let langs = available_languages();
        assert!(langs.iter().any(|l| l == "en-US"));
        assert!(langs.iter().any(|l| l == "is-IS"));
    }

    #[test]
    fn basic_lookup_works_in_default_language() {
        // The lock guards a unit value; recover from poison so one test's
        // genuine assertion failure doesn't cascade into false failures here.
        let _guard = LANG_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        init();
        set_site_language(Language::Is).unwrap();
        let s = fl!(&*LOADER, "nav-home");
        assert_eq!(s, "Heim");
    }

    #[test]
    fn tr_returns_localized_string_when_present() {
        // The lock guards a unit value; recover from poison so one test's
        // genuine assertion failure doesn't cascade into false failures here.
        let _guard = LANG_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        init();
        set_site_language(Language::En).unwrap();
        assert_eq!(tr("nav-home"), "Home");
        set_site_language(Language::Is).unwrap();
        assert_eq!(tr("nav-home"), "Heim");
    }

    #[test]
    fn tr_falls_back_to_key_when_absent() {
        // The lock guards a unit value; recover from poison so one test's
        // genuine assertion failure doesn't cascade into false failures here.
        let _guard = LANG_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        init();
        for lang in Language::ALL {
            set_site_language(lang).unwrap();
            assert_eq!(tr("no-such-key-anywhere"), "no-such-key-anywhere");
        }
        set_site_language(Language::default()).unwrap();
    }

    #[test]
    fn language_switch_applies_to_subsequent_lookups() {
        // The lock guards a unit value; recover from poison so one test's
        // genuine assertion failure doesn't cascade into false failures here.
        let _guard = LANG_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        init();
        set_site_language(Language::Is).unwrap();
        assert_eq!(tr("nav-post-job"), "Setja inn verk");
        set_site_language(Language::En).unwrap();
        assert_eq!(tr("nav-post-job"), "Post a job");
        set_site_language(Language::Is).unwrap();
        assert_eq!(tr("nav-post-job"), "Setja inn verk");
    }

    #[test]
    fn dynamic_language_switch_reverts_on_failure() {
        // The lock guards a unit value; recover from poison so one test's
        // genuine assertion failure doesn't cascade into false failures here.
        let _guard = LANG_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        init();
        let before = tr("nav-home");
        let _ = set_language("zz-ZZ");
        let after = tr("nav-home");
        assert_eq!(before, after);
    }

    #[test]
    fn code_locale_round_trip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code("de"), None);
    }
}
