use index_forest::Trie;

#[test]
fn prefix_query_and_delete() {
    let mut trie = Trie::new();
    assert!(trie.insert("cat"));
    assert!(trie.insert("car"));
    assert!(trie.insert("dog"));
    assert_eq!(trie.len(), 3);

    let ca: Vec<String> = trie.words_with_prefix("ca");
    assert_eq!(ca, vec!["car".to_string(), "cat".to_string()]);

    assert!(trie.remove("cat"));
    assert!(!trie.search("cat"));
    assert!(trie.search("car"));
    assert_eq!(trie.len(), 2);
    trie.assert_valid().unwrap();
}

#[test]
fn search_requires_end_marker() {
    let mut trie = Trie::new();
    trie.insert("carpet");

    assert!(!trie.search("car"));
    assert!(trie.starts_with("car"));
    assert!(trie.starts_with("carpet"));
    assert!(!trie.starts_with("carpets"));
    assert!(trie.search("carpet"));
}

#[test]
fn reinsert_is_idempotent() {
    let mut trie = Trie::new();
    assert!(trie.insert("ant"));
    assert!(!trie.insert("ant"));
    assert_eq!(trie.len(), 1);

    assert!(trie.remove("ant"));
    assert!(!trie.remove("ant"));
    assert_eq!(trie.len(), 0);
    assert!(trie.is_empty());
    trie.assert_valid().unwrap();
}

#[test]
fn delete_prunes_only_dead_branches() {
    let mut trie = Trie::new();
    trie.insert("in");
    trie.insert("inn");
    trie.insert("inner");

    // "inner" prunes down to the surviving word "inn".
    assert!(trie.remove("inner"));
    assert!(trie.search("inn"));
    assert!(trie.search("in"));
    assert!(!trie.starts_with("inne"));
    trie.assert_valid().unwrap();

    // "in" is a prefix of "inn": nothing is pruned.
    assert!(trie.remove("in"));
    assert!(trie.search("inn"));
    assert!(trie.starts_with("in"));
    assert!(!trie.search("in"));
    assert_eq!(trie.len(), 1);
    trie.assert_valid().unwrap();
}

#[test]
fn enumeration_is_lexicographic() {
    let mut trie = Trie::new();
    for w in ["banana", "band", "bandana", "apple", "bat"] {
        trie.insert(w);
    }

    let all = trie.words_with_prefix("");
    assert_eq!(all, vec!["apple", "banana", "band", "bandana", "bat"]);

    let ban = trie.words_with_prefix("ban");
    assert_eq!(ban, vec!["banana", "band", "bandana"]);

    assert!(trie.words_with_prefix("z").is_empty());
}

#[test]
fn empty_word_is_a_valid_entry() {
    let mut trie = Trie::new();
    assert!(!trie.search(""));
    assert!(!trie.starts_with(""));

    assert!(trie.insert(""));
    assert!(trie.search(""));
    assert!(trie.starts_with(""));
    assert_eq!(trie.len(), 1);
    assert_eq!(trie.words_with_prefix(""), vec!["".to_string()]);

    assert!(trie.remove(""));
    assert!(!trie.search(""));
    assert_eq!(trie.len(), 0);
    trie.assert_valid().unwrap();
}

#[test]
fn unicode_words_walk_by_char() {
    let mut trie = Trie::new();
    trie.insert("früh");
    trie.insert("frühstück");

    assert!(trie.search("früh"));
    assert!(trie.starts_with("frü"));
    assert_eq!(
        trie.words_with_prefix("früh"),
        vec!["früh".to_string(), "frühstück".to_string()]
    );

    assert!(trie.remove("frühstück"));
    assert!(trie.search("früh"));
    trie.assert_valid().unwrap();
}

#[test]
fn clear_resets_to_empty_root() {
    let mut trie = Trie::new();
    for w in ["a", "ab", "abc"] {
        trie.insert(w);
    }
    trie.clear();
    assert!(trie.is_empty());
    assert!(!trie.starts_with("a"));
    assert!(trie.words_with_prefix("").is_empty());

    trie.insert("ab");
    assert!(trie.search("ab"));
    trie.assert_valid().unwrap();
}
