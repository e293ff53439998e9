use keyword_histogram_core::{Histogram, KeywordGroup, KeywordMatcher, Keywords, MatchMode};
use proptest::prelude::*;

fn mode_strategy() -> impl Strategy<Value = MatchMode> {
    prop_oneof![
        Just(MatchMode::Substring { as_words: false }),
        Just(MatchMode::Substring { as_words: true }),
        Just(MatchMode::Regex),
    ]
}

proptest! {
    #[test]
    fn group_count_is_sum_of_synonym_counts(
        synonyms in prop::collection::vec("[a-cA-C]{1,3}", 1..4),
        text in "[a-cA-C '\\-]{0,200}",
        mode in mode_strategy(),
    ) {
        let keywords = Keywords::new(vec![KeywordGroup::new(synonyms.clone())]).unwrap();
        let matcher = KeywordMatcher::new(&keywords, mode).unwrap();
        let label = keywords.groups()[0].label();

        let expected: u64 = synonyms
            .iter()
            .map(|s| KeywordMatcher::count_synonym(s, mode, &text).unwrap())
            .sum();
        prop_assert_eq!(matcher.count(&text).get(&label), Some(expected));
    }

    #[test]
    fn totals_equal_sum_over_files(
        cells in prop::collection::vec(("[a-d]\\.pdf", "[A-D]", 0u64..50), 0..40),
    ) {
        let mut histogram = Histogram::new();
        for (file, label, count) in &cells {
            histogram.add(file, label, *count);
        }

        let totals = histogram.totals(&[]);
        for (label, total) in totals.iter() {
            let expected: u64 = histogram
                .files()
                .filter_map(|(_, labels)| labels.get(label))
                .sum();
            prop_assert_eq!(total, expected);
        }
        prop_assert_eq!(totals.sum(), cells.iter().map(|(_, _, c)| c).sum::<u64>());
    }

    #[test]
    fn every_label_appears_for_every_document(
        texts in prop::collection::vec("[a-z ]{0,60}", 1..5),
        mode in mode_strategy(),
    ) {
        let keywords = Keywords::new(vec![
            KeywordGroup::single("ab"),
            KeywordGroup::new(["cd", "ef"]),
        ])
        .unwrap();
        let matcher = KeywordMatcher::new(&keywords, mode).unwrap();

        let mut histogram = Histogram::new();
        for (i, text) in texts.iter().enumerate() {
            histogram.record(&format!("{i}.pdf"), &matcher.count(text));
        }
        for (_, labels) in histogram.files() {
            prop_assert!(labels.contains_key("ab"));
            prop_assert!(labels.contains_key("cd/ef"));
        }
    }
}
