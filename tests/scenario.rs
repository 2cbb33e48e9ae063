//! End-to-end behaviour of the key manager and credential store together

use std::collections::HashMap;
use std::fs;

use passvault::storage::{CredentialStore, KeyManager, LoadReport, NOT_FOUND_MESSAGE};
use tempfile::TempDir;

#[test]
fn create_add_reload_lookup() {
    let temp_dir = TempDir::new().unwrap();
    let k1 = temp_dir.path().join("k1");
    let s1 = temp_dir.path().join("s1");

    {
        let mut keys = KeyManager::new();
        let key = keys.create_key(&k1).unwrap();
        let mut store = CredentialStore::with_key(key);
        store.create_file(&s1, None).unwrap();
        store.add_entry("example.com", "p@ss1").unwrap();
    }

    let mut keys = KeyManager::new();
    let key = keys.load_key(&k1).unwrap();
    let mut store = CredentialStore::with_key(key);
    store.load_file(&s1).unwrap();

    assert_eq!(store.get_entry("example.com"), Some("p@ss1"));
    assert_eq!(store.get_entry_or_message("unknown-site"), NOT_FOUND_MESSAGE);
}

#[test]
fn passwords_survive_reload_exactly() {
    let temp_dir = TempDir::new().unwrap();
    let key_path = temp_dir.path().join("vault.key");
    let store_path = temp_dir.path().join("passwords.txt");

    let passwords = [
        ("plain.com", "hunter2"),
        ("colon.com", "a:b:c"),
        ("spaces.com", "  padded  "),
        ("unicode.com", "пароль🔑"),
        ("newline.com", "line1\nline2"),
        ("empty.com", ""),
    ];

    let mut keys = KeyManager::new();
    let key = keys.create_key(&key_path).unwrap();
    let mut store = CredentialStore::with_key(key);
    store.create_file(&store_path, None).unwrap();
    for (site, password) in passwords {
        store.add_entry(site, password).unwrap();
    }

    let mut reloaded = CredentialStore::with_key(key);
    let report = reloaded.load_file(&store_path).unwrap();

    assert_eq!(
        report,
        LoadReport {
            loaded: passwords.len(),
            skipped: 0
        }
    );
    for (site, password) in passwords {
        assert_eq!(reloaded.get_entry(site), Some(password), "site {}", site);
    }
}

#[test]
fn appends_from_separate_sessions_accumulate() {
    let temp_dir = TempDir::new().unwrap();
    let key_path = temp_dir.path().join("vault.key");
    let store_path = temp_dir.path().join("passwords.txt");

    let mut keys = KeyManager::new();
    keys.create_key(&key_path).unwrap();

    let seed: HashMap<String, String> = [("first.com".to_string(), "1".to_string())]
        .into_iter()
        .collect();
    {
        let mut store = CredentialStore::with_key(keys.key().unwrap());
        store.create_file(&store_path, Some(&seed)).unwrap();
    }
    {
        let mut store = CredentialStore::with_key(keys.key().unwrap());
        store.load_file(&store_path).unwrap();
        store.add_entry("second.com", "2").unwrap();
        store.add_entry("first.com", "1b").unwrap();
    }

    assert_eq!(fs::read_to_string(&store_path).unwrap().lines().count(), 3);

    let mut store = CredentialStore::with_key(keys.key().unwrap());
    store.load_file(&store_path).unwrap();
    assert_eq!(store.sites(), vec!["first.com", "second.com"]);
    assert_eq!(store.get_entry("first.com"), Some("1b"));
}

#[test]
fn other_key_sees_only_its_own_records() {
    let temp_dir = TempDir::new().unwrap();
    let store_path = temp_dir.path().join("passwords.txt");

    let mut work = KeyManager::new();
    let mut home = KeyManager::new();
    let work_key = work.create_key(temp_dir.path().join("work.key")).unwrap();
    let home_key = home.create_key(temp_dir.path().join("home.key")).unwrap();

    let mut store = CredentialStore::with_key(work_key);
    store.create_file(&store_path, None).unwrap();
    store.add_entry("work.com", "w").unwrap();
    store.set_key(home_key);
    store.add_entry("home.com", "h").unwrap();

    let mut as_work = CredentialStore::with_key(work_key);
    let report = as_work.load_file(&store_path).unwrap();
    assert_eq!(report, LoadReport { loaded: 1, skipped: 1 });
    assert_eq!(as_work.sites(), vec!["work.com"]);

    let mut as_home = CredentialStore::with_key(home_key);
    as_home.load_file(&store_path).unwrap();
    assert_eq!(as_home.sites(), vec!["home.com"]);
}
