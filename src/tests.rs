//! Cross-tool properties

#[cfg(test)]
mod tests {
    use crate::*;

    fn samples() -> Vec<&'static str> {
        vec![
            "",
            "   ",
            "plain text",
            "<p>Hello &amp; <b>World</b></p>",
            "&lt;script&gt;alert(1)&lt;/script&gt;",
            "Hello \u{1F44B} World",
            "USA \u{1F1FA}\u{1F1F8}\tUK\n\n",
            "\u{1F468}\u{200D}\u{1F4BB} coding",
            "Caf\u{00E9} \u{FB01}nal H\u{2082}O \u{2122}",
            "unterminated <div class=\"x",
            "stray > bracket & &bogus; &#128512;",
            "&#x1F600; encoded emoji",
            "\u{00A0}\u{2003}wide\u{3000}spaces\u{00A0}",
        ]
    }

    #[test]
    fn clean_text_output_is_clean() {
        for s in samples() {
            let out = clean_text(s);
            assert!(!out.contains('<') && !out.contains('>'), "{s:?} -> {out:?}");
            assert!(!out.chars().any(is_emoji), "{s:?} -> {out:?}");
            assert!(!out.contains("  "), "{s:?} -> {out:?}");
            assert_eq!(out.trim(), out, "{s:?}");
        }
    }

    #[test]
    fn clean_text_decodes_numeric_emoji_before_removal() {
        assert_eq!(clean_text("&#x1F600; encoded emoji"), "encoded emoji");
    }

    #[test]
    fn stages_are_idempotent() {
        for s in samples() {
            let spaced = normalize_spaces(s);
            assert_eq!(normalize_spaces(&spaced), spaced);

            let nfkd = normalize_unicode(s);
            assert_eq!(normalize_unicode(&nfkd), nfkd);

            let stripped = remove_html(s);
            assert_eq!(remove_html(&stripped), stripped);

            let no_emoji = remove_emoji(s);
            assert_eq!(remove_emoji(&no_emoji), no_emoji);
        }
    }

    #[test]
    fn clean_text_output_is_a_fixed_point() {
        for s in samples() {
            let once = clean_text(s);
            assert_eq!(clean_text(&once), once, "{s:?}");
        }
    }

    #[test]
    fn remove_emoji_never_grows() {
        for s in samples() {
            assert!(remove_emoji(s).len() <= s.len());
        }
    }

    #[test]
    fn similarity_is_symmetric_and_bounded() {
        let samples = samples();
        for a in &samples {
            for b in &samples {
                let ab = similarity(a, b);
                assert_eq!(ab, similarity(b, a), "{a:?} vs {b:?}");
                assert!((0.0..=1.0).contains(&ab));
            }
            assert_eq!(similarity(a, a), 1.0);
        }
    }

    #[test]
    fn similarity_of_cleaned_text() {
        let a = clean_text("<h1>Caf\u{00E9}   Central</h1>");
        let b = clean_text("Cafe\u{0301} Central");
        assert_eq!(similarity(&a, &b), 1.0);
    }

    #[test]
    fn documented_examples() {
        assert_eq!(similarity("", ""), 1.0);
        assert_eq!(similarity("", "x"), 0.0);
        assert_eq!(
            multi_replace("abc abc abc", [("a", "X"), ("b", "Y")]),
            "XYc XYc XYc"
        );
        assert_eq!(multi_replace("aa", [("a", "b")]), "bb");
        assert_eq!(mask_email("user@example.com").unwrap(), "u***@example.com");
        assert!(matches!(
            mask_email("no-at-sign"),
            Err(StringExtError::InvalidEmail(_))
        ));
        assert_eq!(slugify("Hello, World! \u{2728}"), "hello-world");
        assert!(contains_all("", Vec::<&str>::new()));
    }

    #[test]
    fn pipeline_macro_chains_stages() {
        let out = crate::pipeline!("  <b>Hi</b>\u{1F600}there " => remove_html -> remove_emoji -> normalize_spaces);
        assert_eq!(out, "Hi there");
    }
}
