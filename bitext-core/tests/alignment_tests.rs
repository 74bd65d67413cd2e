//! End-to-end alignment behaviour

use bitext_core::*;

#[test]
fn test_equal_count_identity() {
    let aligned = align(&["句子一。", "句子二。"], "Sentence one. Sentence two.");
    assert_eq!(aligned, vec!["Sentence one.", "Sentence two."]);
}

#[test]
fn test_identity_is_verbatim_for_every_position() {
    let chinese = ["他来了。", "她走了！", "谁知道呢？", "完。"];
    let english = "He came.  She left! Who knows?   The end.";
    let expected = segment_english_sentences(english, SegmentationPolicy::Coarse);
    assert_eq!(expected.len(), chinese.len());
    assert_eq!(align(&chinese, english), expected);
}

#[test]
fn test_single_chinese_keeps_paragraph_untouched() {
    let paragraph = "This is the entire English paragraph, regardless of internal punctuation.";
    assert_eq!(align(&["只有一句中文。"], paragraph), vec![paragraph]);

    assert_eq!(
        align(&["单独一句。"], "Any English text here."),
        vec!["Any English text here."]
    );

    let multi = "  First sentence. Second sentence.  ";
    assert_eq!(align(&["单独一句。"], multi), vec![multi]);
}

#[test]
fn test_fast_paths_are_repeatable() {
    let chinese = ["句子一。", "句子二。"];
    let english = "Sentence one. Sentence two.";
    assert_eq!(align(&chinese, english), align(&chinese, english));

    let single = ["一句。"];
    assert_eq!(align(&single, english), align(&single, english));
}

#[test]
fn test_fewer_english_than_chinese() {
    let chinese = ["今天天气很好。", "我们去公园散步。", "然后回家吃饭。"];
    let english = "The weather is nice today. We went for a walk in the park.";
    let aligned = align(&chinese, english);

    assert_eq!(aligned.len(), 3);
    assert!(aligned.iter().any(String::is_empty));

    let mut used: Vec<&str> = aligned
        .iter()
        .flat_map(|s| s.split_whitespace())
        .collect();
    let mut words: Vec<&str> = english.split_whitespace().collect();
    used.sort_unstable();
    words.sort_unstable();
    assert_eq!(used, words);
}

#[test]
fn test_more_english_than_chinese_keeps_order_and_coverage() {
    let chinese = ["他打开门。", "外面下着大雨，街上空无一人。"];
    let english = "He opened the door. It was raining hard. The street was empty.";
    let aligned = align(&chinese, english);

    assert_eq!(aligned.len(), 2);
    assert!(aligned.iter().all(|s| !s.is_empty()));
    assert_eq!(aligned.join(" "), english);
}

#[test]
fn test_empty_paragraph_yields_empty_strings() {
    assert_eq!(align(&["一。", "二。"], ""), vec!["", ""]);
}

#[test]
fn test_no_chinese_sentences() {
    assert!(align::<&str>(&[], "Anything at all.").is_empty());
}

#[test]
fn test_output_length_always_matches_chinese() {
    let english = "One. Two. Three. Four. Five. Six. Seven.";
    for n in 1..12 {
        let chinese: Vec<String> = (0..n).map(|i| format!("第{i}句。")).collect();
        assert_eq!(align(&chinese, english).len(), n);
    }
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let chinese = ["一二三。", "四五六七。", "八九。", "十。"];
    let english = "Alpha beta gamma. Delta epsilon zeta eta. Theta iota. Kappa. Lambda mu. Nu xi omicron.";
    let options = AlignOptions::builder().seed(1234).build().unwrap();

    let first = align_with_options(&chinese, english, options.clone()).unwrap();
    let second = align_with_options(&chinese, english, options).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_report_describes_winning_attempt() {
    let chinese = ["他来了；", "他看见了；", "他征服了。"];
    let english = "He came; he saw; he conquered.";
    let report = Aligner::new().align_detailed(&chinese, english);

    let chosen = report.chosen_attempt().unwrap();
    assert_eq!(chosen.policy, SegmentationPolicy::Medium);
    assert_eq!(chosen.fast_path, Some(FastPath::EqualCount));
    assert_eq!(report.aligned_sentences, chosen.aligned_sentences);
    assert_eq!(report.attempts[0].policy, SegmentationPolicy::Coarse);
    assert_eq!(report.attempts[0].english_sentences.len(), 1);
}

#[test]
fn test_leading_empty_mapping_costs_more_than_dense() {
    let chinese = ["一二。", "三四。", "五六。"];
    let english = ["A b.", "C d.", "E f."];
    let scorer = PartitionScorer::default();

    let dense = scorer.score(&chinese, &english, &Partition::from_sizes(&[1, 1, 1]));
    let leading = scorer.score(&chinese, &english, &Partition::from_sizes(&[0, 1, 2]));
    assert!(leading.score - dense.score >= 45_000.0);
}

#[test]
fn test_invalid_options_are_rejected() {
    let options = AlignOptions {
        max_partitions: 0,
        ..AlignOptions::default()
    };
    assert!(matches!(
        align_with_options(&["一。"], "One.", options),
        Err(AlignError::InvalidConfig { .. })
    ));
}

#[test]
fn test_report_serializes() {
    let report = Aligner::new().align_detailed(&["一。", "二。", "三。"], "One. Two.");
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["aligned_sentences"].as_array().unwrap().len(), 3);
    assert_eq!(json["chosen_policy"], "coarse");
    assert!(json["attempts"][0]["best_partition"].is_array());
}
