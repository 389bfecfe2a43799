//! Unit tests for environment guards.

use super::*;
use std::sync::{Arc, Barrier};
use std::thread;

fn env_value(key: &str) -> String {
    match std::env::var(key) {
        Ok(value) => value,
        Err(err) => panic!("expected environment variable {key}: {err}"),
    }
}

fn preset(key: &str, value: Option<&str>) {
    with_lock(|| match value {
        // SAFETY: Serialised by ENV_MUTEX held via with_lock.
        Some(value) => unsafe { env_set_var(key, OsStr::new(value)) },
        // SAFETY: Serialised by ENV_MUTEX held via with_lock.
        None => unsafe { env_remove_var(key) },
    });
}

#[test]
fn set_var_restores_original() {
    let key = "YAML_MERGER_HELPERS_SET";
    preset(key, Some("orig.yaml"));
    {
        let _guard = set_var(key, "temp.yaml");
        assert_eq!(env_value(key), "temp.yaml");
    }
    assert_eq!(env_value(key), "orig.yaml");
    preset(key, None);
}

#[test]
fn remove_var_restores_value() {
    let key = "YAML_MERGER_HELPERS_REMOVE";
    preset(key, Some("keep.yaml"));
    {
        let _guard = remove_var(key);
        assert!(std::env::var(key).is_err());
    }
    assert_eq!(env_value(key), "keep.yaml");
    preset(key, None);
}

#[test]
fn stacked_guards_restore_in_lifo_order() {
    let key = "YAML_MERGER_HELPERS_STACK";
    preset(key, None);
    let outer = set_var(key, "v1");
    let inner = set_var(key, "v2");
    assert_eq!(env_value(key), "v2");
    drop(inner);
    assert_eq!(env_value(key), "v1");
    drop(outer);
    assert!(std::env::var(key).is_err());
}

#[test]
fn bind_sources_sets_and_unsets_for_the_scope() {
    let bound = "YAML_MERGER_HELPERS_BOUND";
    let unbound = "YAML_MERGER_HELPERS_UNBOUND";
    preset(bound, None);
    preset(unbound, Some("was-set.yaml"));
    {
        let _scope = bind_sources([
            (bound, Some(Path::new("main.yaml"))),
            (unbound, None),
        ]);
        assert_eq!(env_value(bound), "main.yaml");
        assert!(std::env::var(unbound).is_err());
    }
    assert!(std::env::var(bound).is_err());
    assert_eq!(env_value(unbound), "was-set.yaml");
    preset(unbound, None);
}

#[test]
fn concurrent_mutations_of_distinct_keys_restore_values() {
    const THREADS: usize = 4;
    const ITERATIONS: usize = 8;
    let keys: Vec<String> = (0..THREADS)
        .map(|i| format!("YAML_MERGER_HELPERS_CONCURRENT_{i}"))
        .collect();
    for key in &keys {
        preset(key, Some("original"));
    }
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = keys
        .iter()
        .cloned()
        .map(|key| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for iter in 0..ITERATIONS {
                    let value = format!("{key}-{iter}.yaml");
                    let guard = set_var(key.as_str(), &value);
                    assert_eq!(env_value(&key), value);
                    drop(guard);
                    assert_eq!(env_value(&key), "original");
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("worker thread panicked");
    }

    for key in keys {
        assert_eq!(env_value(&key), "original");
        preset(&key, None);
    }
}
