//! Behavioural tests for NGramIndex over the in-memory backend

use qntx_ngram::{IndexConfig, IndexError, MemoryStore, NGramIndex, NGramStore, TokenId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn random_string(rng: &mut StdRng, len: usize) -> String {
    (0..len)
        .map(|_| LETTERS[rng.gen_range(0..LETTERS.len())] as char)
        .collect()
}

#[test]
fn test_hello_world_scenario() {
    init_tracing();
    let mut index = NGramIndex::new(MemoryStore::new());
    let id1 = TokenId::from(1u128);
    let id2 = TokenId::from(2u128);

    index.add("hello", id1).unwrap();
    index.add("world", id2).unwrap();

    let results = index.search("hello", Some(0.0)).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].token_id, id1);
    assert_eq!(results[0].similarity, 1.0);
}

#[test]
fn test_code_found_among_noise() {
    init_tracing();
    let mut rng = StdRng::seed_from_u64(7);
    let mut index = NGramIndex::new(MemoryStore::new());
    let id1 = TokenId::from(1u128);
    let id2 = TokenId::from(2u128);
    let id3 = TokenId::from(3u128);

    index.add("Code is my life", id1).unwrap();
    index.add("Search", id2).unwrap();
    index.add("I write a lot of Codes", id3).unwrap();
    for i in 0..20_000u128 {
        let noise = random_string(&mut rng, 20);
        index.add(&noise, TokenId::from(1_000 + i)).unwrap();
    }

    let results = index.search("Code", Some(0.7)).unwrap();
    assert!(results.iter().any(|r| r.token_id == id1));
    assert!(results.iter().all(|r| r.similarity >= 0.7));

    let best = index.best_match("Code", Some(0.7)).unwrap();
    assert_eq!(best.token_id, id1);
}

#[test]
fn test_self_identity_for_random_strings() {
    let mut rng = StdRng::seed_from_u64(11);
    for n in 2..=8 {
        let config = IndexConfig::new().with_n(n).unwrap();
        let mut index = NGramIndex::with_config(MemoryStore::new(), config).unwrap();
        for i in 0..50u128 {
            let len = rng.gen_range(1..30);
            let text = random_string(&mut rng, len);
            let id = TokenId::from(i);
            index.add(&text, id).unwrap();

            let results = index.search(&text, Some(0.0)).unwrap();
            let hit = results.iter().find(|r| r.token_id == id).unwrap();
            assert_eq!(hit.similarity, 1.0, "n = {}, text = {:?}", n, text);
        }
    }
}

#[test]
fn test_threshold_monotonicity() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut index = NGramIndex::new(MemoryStore::new());
    for i in 0..500u128 {
        let text = random_string(&mut rng, 6);
        index.add(&text, TokenId::from(i)).unwrap();
    }

    for query in ["abcdef", "Hello", "zzzz", "aBcD"] {
        let mut previous = usize::MAX;
        for step in 0..=10 {
            let threshold = f64::from(step) / 10.0;
            let results = index.search(query, Some(threshold)).unwrap();
            assert!(results.len() <= previous);
            assert!(results.iter().all(|r| r.similarity >= threshold));
            assert!(results
                .iter()
                .all(|r| (0.0..=1.0).contains(&r.similarity)));
            previous = results.len();
        }
    }
}

#[test]
fn test_warp_one_is_exact_ratio() {
    let mut index = NGramIndex::new(MemoryStore::new());
    index.add("Code is my life", TokenId::from(1u128)).unwrap();

    let query = "Codes of life";
    let all = index.tokenize(query).unwrap().len() as f64;
    let counts = index
        .store()
        .count_shared(&index.tokenize(query).unwrap())
        .unwrap();
    let matched = *counts.get(&TokenId::from(1u128)).unwrap() as f64;

    let results = index.search(query, None).unwrap();
    assert_eq!(results[0].similarity, matched / all);
}

#[test]
fn test_empty_index_best_match_not_found() {
    let index = NGramIndex::new(MemoryStore::new());
    for threshold in [None, Some(0.0), Some(0.5), Some(1.0)] {
        assert!(matches!(
            index.best_match("query", threshold),
            Err(IndexError::NotFound)
        ));
    }
}

#[test]
fn test_boxed_backend_selected_at_runtime() {
    let store: Box<dyn NGramStore> = Box::new(MemoryStore::new());
    let mut index = NGramIndex::new(store);
    index.add("fuzzy", TokenId::from(5u128)).unwrap();
    let best = index.best_match("fuzy", None).unwrap();
    assert_eq!(best.token_id, TokenId::from(5u128));
}
