//! Index tests for SqliteStore

use qntx_ngram::{IndexConfig, IndexError, NGramIndex, NGramStore, TokenId};
use qntx_ngram_sqlite::{SqliteOptions, SqliteStore};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::thread;

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

fn in_memory_index() -> NGramIndex<SqliteStore> {
    init_tracing();
    NGramIndex::new(SqliteStore::in_memory().unwrap())
}

#[test]
fn test_hello_world_scenario() {
    let mut index = in_memory_index();
    let id1 = TokenId::from(1u128);

    index.add("hello", id1).unwrap();
    index.add("world", TokenId::from(2u128)).unwrap();

    let results = index.search("hello", Some(0.0)).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].token_id, id1);
    assert_eq!(results[0].similarity, 1.0);
}

#[test]
fn test_code_found_among_noise() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut index = in_memory_index();
    let id1 = TokenId::from(1u128);

    index.add("Code is my life", id1).unwrap();
    index.add("Search", TokenId::from(2u128)).unwrap();
    index.add("I write a lot of Codes", TokenId::from(3u128)).unwrap();
    for i in 0..2_000u128 {
        let noise = random_string(&mut rng, 20);
        index.add(&noise, TokenId::from(1_000 + i)).unwrap();
    }

    let results = index.search("Code", Some(0.7)).unwrap();
    assert!(results.iter().any(|r| r.token_id == id1));
}

#[test]
fn test_errors_match_memory_backend() {
    let mut index = in_memory_index();
    assert!(matches!(
        index.add("", TokenId::from(1u128)),
        Err(IndexError::InvalidInput(_))
    ));
    assert!(matches!(index.search("", None), Err(IndexError::InvalidInput(_))));
    assert!(matches!(
        index.best_match("anything", Some(0.0)),
        Err(IndexError::NotFound)
    ));
    assert!(matches!(
        index.search("anything", Some(1.01)),
        Err(IndexError::InvalidConfiguration(_))
    ));
    assert_eq!(index.store().posting_count().unwrap(), 0);
}

#[test]
fn test_postings_survive_reopen() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("index.db");
    let id = TokenId::from(77u128);

    {
        let mut index = NGramIndex::new(SqliteStore::open(&path).unwrap());
        index.add("persistent", id).unwrap();
        index.add("persistent", id).unwrap();
    }

    let index = NGramIndex::new(SqliteStore::open(&path).unwrap());
    let best = index.best_match("persistant", None).unwrap();
    assert_eq!(best.token_id, id);

    let first = index.tokenize("persistent").unwrap()[0];
    assert_eq!(index.store().association_count(first, id).unwrap(), Some(2));
}

#[test]
fn test_open_creates_parent_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("index.db");
    let store = SqliteStore::open_with_options(&path, &SqliteOptions::default()).unwrap();
    assert_eq!(store.posting_count().unwrap(), 0);
    assert!(path.exists());
}

#[test]
fn test_concurrent_writers_do_not_lose_increments() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("concurrent.db");
    let id = TokenId::from(9u128);

    // create the schema before the writers race
    drop(SqliteStore::open(&path).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let path = path.clone();
            thread::spawn(move || {
                let mut index = NGramIndex::new(SqliteStore::open(&path).unwrap());
                for _ in 0..25 {
                    index.add("hello", id).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let store = SqliteStore::open(&path).unwrap();
    let hashes = qntx_ngram::tokenize("hello", '$', 3).unwrap();
    for hash in hashes {
        assert_eq!(store.association_count(hash, id).unwrap(), Some(100));
    }
}

#[test]
fn test_custom_config_over_sqlite() {
    let config = IndexConfig::new().with_n(4).unwrap().with_pad('#');
    let mut index = NGramIndex::with_config(SqliteStore::in_memory().unwrap(), config).unwrap();
    index.add("fuzzy matching", TokenId::from(1u128)).unwrap();
    index.add("exact matching", TokenId::from(2u128)).unwrap();

    let best = index.best_match("fuzzy match", Some(0.5)).unwrap();
    assert_eq!(best.token_id, TokenId::from(1u128));
}

#[test]
fn test_concurrent_open_of_fresh_file() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fresh.db");

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let path = path.clone();
            thread::spawn(move || SqliteStore::open(&path).map(|_| ()))
        })
        .collect();
    for handle in handles {
        handle.join().unwrap().unwrap();
    }

    let store = SqliteStore::open(&path).unwrap();
    let applied: i64 = store
        .connection()
        .query_row("SELECT COUNT(*) FROM schema_migrations", [], |row| row.get(0))
        .unwrap();
    assert_eq!(applied, 2);
}
