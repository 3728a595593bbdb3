//! Order of results: score, rarity, and ties.

use crate::common::{make_doc, make_docs, repeat_word};
use docrank::{rank, rank_scored};

#[test]
fn test_more_occurrences_rank_higher() {
    let docs = vec![
        make_doc("once", "shoot the thing"),
        make_doc("thrice", "shoot shoot shoot"),
        make_doc("twice", "shoot it, shoot it"),
    ];
    assert_eq!(rank(&docs, "shoot"), vec!["thrice", "twice", "once"]);
}

#[test]
fn test_no_length_normalization() {
    let long = format!("{} shoot shoot", repeat_word("filler", 200));
    let docs = vec![make_doc("short", "shoot"), make_doc("long", &long)];
    assert_eq!(rank(&docs, "shoot"), vec!["long", "short"]);
}

#[test]
fn test_rare_term_beats_common_term() {
    let docs = vec![
        make_doc("common", "the the"),
        make_doc("rare", "island"),
        make_doc("filler1", "the"),
        make_doc("filler2", "the"),
    ];
    let result = rank(&docs, "the island");
    assert_eq!(result[0], "rare");
}

#[test]
fn test_equal_scores_keep_input_order() {
    let docs = make_docs(&["trash island", "island trash", "Trash, island."]);
    assert_eq!(rank(&docs, "trash island"), vec!["doc0", "doc1", "doc2"]);
}

#[test]
fn test_ties_below_a_leader_keep_input_order() {
    let docs = vec![
        make_doc("b", "island"),
        make_doc("leader", "island island"),
        make_doc("a", "island"),
        make_doc("none", "ocean"),
    ];
    assert_eq!(rank(&docs, "island"), vec!["leader", "b", "a"]);
}

#[test]
fn test_scores_strictly_positive_and_non_increasing() {
    let docs = make_docs(&[
        "trash island",
        "trash",
        "island island trash",
        "ocean",
        "the trash is a island",
    ]);
    let ranked = rank_scored(&docs, "trash island");
    assert!(ranked.iter().all(|r| r.score > 0.0));
    for pair in ranked.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}
