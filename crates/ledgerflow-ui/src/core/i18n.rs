//! Localization
//!
//! Fluent-based string lookup over locale resources embedded in the binary.
//! A missing message falls back to the key itself so the UI never renders
//! nothing; the miss is logged instead.

use fluent::{FluentBundle, FluentResource};
use fluent_langneg::{negotiate_languages, NegotiationStrategy};
use once_cell::sync::Lazy;
use rust_embed::RustEmbed;
use thiserror::Error;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/locales"]
struct LocaleAssets;

static FALLBACK_LOCALE: Lazy<LanguageIdentifier> =
    Lazy::new(|| "en-US".parse().unwrap_or_default());

/// Errors raised while building a [`LocaleManager`].
#[derive(Debug, Error)]
pub enum LocaleError {
    /// The requested language tag did not parse.
    #[error("invalid language tag: {0}")]
    InvalidLanguageTag(String),
    /// No embedded resource exists for the negotiated locale.
    #[error("missing locale resource: {0}")]
    MissingResource(String),
    /// The FTL source failed to parse.
    #[error("failed to parse locale resource {0}")]
    ParseFailure(String),
}

/// Resolves translated strings by key for one negotiated locale.
pub struct LocaleManager {
    bundle: FluentBundle<FluentResource>,
    language: LanguageIdentifier,
}

impl LocaleManager {
    /// Build a manager for `requested` (e.g. `"en"`, `"de"`), negotiating
    /// against the embedded locales and falling back to en-US.
    pub fn new(requested: &str) -> Result<Self, LocaleError> {
        let requested_id: LanguageIdentifier = requested
            .parse()
            .map_err(|_| LocaleError::InvalidLanguageTag(requested.to_string()))?;

        let available = Self::available_locales();
        let negotiated = negotiate_languages(
            &[requested_id],
            &available,
            Some(&*FALLBACK_LOCALE),
            NegotiationStrategy::Filtering,
        );
        let language = negotiated
            .first()
            .copied()
            .cloned()
            .unwrap_or_else(|| FALLBACK_LOCALE.clone());

        let file_name = format!("{}.ftl", language);
        let file = LocaleAssets::get(&file_name)
            .ok_or_else(|| LocaleError::MissingResource(file_name.clone()))?;
        let source = String::from_utf8(file.data.into_owned())
            .map_err(|_| LocaleError::ParseFailure(file_name.clone()))?;
        let resource = FluentResource::try_new(source)
            .map_err(|_| LocaleError::ParseFailure(file_name.clone()))?;

        let mut bundle = FluentBundle::new(vec![language.clone()]);
        bundle
            .add_resource(resource)
            .map_err(|_| LocaleError::ParseFailure(file_name))?;

        tracing::debug!(%language, "locale loaded");
        Ok(Self { bundle, language })
    }

    /// The locale actually negotiated.
    pub fn language(&self) -> &LanguageIdentifier {
        &self.language
    }

    /// Look up the translation for `key`. Returns the key itself when no
    /// message exists.
    pub fn t(&self, key: &str) -> String {
        let Some(message) = self.bundle.get_message(key) else {
            tracing::warn!(key, language = %self.language, "missing locale key");
            return key.to_string();
        };
        let Some(pattern) = message.value() else {
            tracing::warn!(key, language = %self.language, "locale key has no value");
            return key.to_string();
        };
        let mut errors = Vec::new();
        let value = self.bundle.format_pattern(pattern, None, &mut errors);
        if !errors.is_empty() {
            tracing::warn!(key, ?errors, "locale formatting errors");
        }
        value.into_owned()
    }

    fn available_locales() -> Vec<LanguageIdentifier> {
        LocaleAssets::iter()
            .filter_map(|path| {
                path.as_ref()
                    .strip_suffix(".ftl")
                    .and_then(|tag| tag.parse().ok())
            })
            .collect()
    }
}
