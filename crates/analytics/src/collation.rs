use crate::error::AnalyticsError;
use icu_collator::{Collator, CollatorOptions, Strength};
use icu_locid::Locale;
use std::cmp::Ordering;
use std::fmt;

/// The catalog data is Russian-language, so ordering defaults to the Russian
/// collation tailoring.
pub const DEFAULT_LOCALE: &str = "ru";

/// A locale-aware, case-sensitive text comparison.
///
/// Built once per engine and passed by reference to every sorting site.
/// Linguistic order differs from code point order for many valid inputs:
/// uppercase Cyrillic letters have lower code points than all lowercase ones,
/// and letters with diacritics sort far from where a native reader expects
/// them. Sorting with `str::cmp` instead of this comparison would produce a
/// different, incorrect order.
pub struct TextOrder {
    collator: Collator,
}

impl TextOrder {
    /// Builds the comparison for a BCP-47 locale tag (e.g., "ru").
    ///
    /// Tertiary strength matches the case-sensitive comparison the circulation
    /// reports are defined against.
    pub fn new(locale: &str) -> Result<Self, AnalyticsError> {
        let parsed: Locale = locale
            .parse()
            .map_err(|_| AnalyticsError::UnsupportedLocale(locale.to_string()))?;

        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Tertiary);

        let collator =
            Collator::try_new(&parsed.into(), options).map_err(|e| AnalyticsError::Collation {
                locale: locale.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self { collator })
    }

    /// Compares two strings in linguistic order.
    pub fn cmp(&self, left: &str, right: &str) -> Ordering {
        self.collator.compare(left, right)
    }
}

impl fmt::Debug for TextOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextOrder").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn russian_order_is_linguistic_not_ordinal() {
        let order = TextOrder::new(DEFAULT_LOCALE).unwrap();

        // Ordinal comparison would put "Яблоко" first: 'Я' (U+042F) precedes
        // every lowercase Cyrillic letter (U+0430..). Collation does not.
        assert_eq!(order.cmp("апельсин", "Яблоко"), Ordering::Less);
        assert!("Яблоко" < "апельсин", "ordinal order must actually differ");
    }

    #[test]
    fn digits_sort_before_letters() {
        let order = TextOrder::new(DEFAULT_LOCALE).unwrap();
        assert_eq!(order.cmp("1984", "Белая гвардия"), Ordering::Less);
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let order = TextOrder::new(DEFAULT_LOCALE).unwrap();
        assert_ne!(order.cmp("мир", "Мир"), Ordering::Equal);
        assert_eq!(order.cmp("мир", "мир"), Ordering::Equal);
    }

    #[test]
    fn unknown_locale_is_rejected() {
        assert!(matches!(
            TextOrder::new("not a locale"),
            Err(AnalyticsError::UnsupportedLocale(_))
        ));
    }
}
