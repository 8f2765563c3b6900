//! Property tests for element id generation.

use proptest::prelude::*;

use figbridge::ElementId;

fn suffix_string() -> impl Strategy<Value = String> {
    // DOM-id friendly suffixes, as callers pass them.
    proptest::string::string_regex("[A-Za-z0-9_-]{0,16}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: two distinct registrations never render equal tokens for
    /// the same suffix.
    #[test]
    fn property_distinct_ids_distinct_tokens(suffix in suffix_string()) {
        let a = ElementId::next();
        let b = ElementId::next();
        prop_assert_ne!(a.css_id(Some(&suffix)), b.css_id(Some(&suffix)));
    }

    /// PROPERTY: rendering is deterministic for a fixed (id, suffix) pair.
    #[test]
    fn property_rendering_is_stable(suffix in suffix_string()) {
        let id = ElementId::next();
        prop_assert_eq!(id.css_id(Some(&suffix)), id.css_id(Some(&suffix)));
    }

    /// PROPERTY: the token is the bare token plus the suffix, verbatim.
    #[test]
    fn property_suffix_appends_to_bare_token(suffix in suffix_string()) {
        let id = ElementId::next();
        let expected = format!("{}{}", id.css_id(None), suffix);
        prop_assert_eq!(id.css_id(Some(&suffix)), expected);
    }

    /// PROPERTY: every token starts with the current process id.
    #[test]
    fn property_token_embeds_process_id(suffix in suffix_string()) {
        let id = ElementId::next();
        let pid = std::process::id().to_string();
        prop_assert!(id.css_id(Some(&suffix)).starts_with(&pid));
    }
}
