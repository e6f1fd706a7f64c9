use crate::index::{BucketKey, ChainedHashTable, Index, DEFAULT_BUCKET_COUNT};

#[test]
fn find_after_insert_returns_the_value() {
    let mut table = ChainedHashTable::new(13);
    for i in 0..1000u32 {
        table.insert(i, format!("value{i}"));
    }
    for i in 0..1000u32 {
        assert_eq!(table.find(&i), Some(&format!("value{i}")));
    }
    assert_eq!(table.count(), 1000);
}

#[test]
fn insert_existing_key_updates_instead_of_appending() {
    let mut table = ChainedHashTable::new(7);
    assert_eq!(table.insert(3u32, "first"), None);
    assert_eq!(table.insert(3u32, "second"), Some("first"));
    assert_eq!(table.count(), 1);
    assert_eq!(table.find(&3), Some(&"second"));
    assert_eq!(table.iter().count(), 1);
}

#[test]
fn delete_present_and_absent_keys() {
    let mut table = ChainedHashTable::new(5);
    table.insert(1u32, 'a');
    table.insert(6u32, 'b');
    table.insert(11u32, 'c');

    assert!(!table.delete(&42));
    assert_eq!(table.count(), 3);

    assert!(table.delete(&6));
    assert_eq!(table.count(), 2);
    assert_eq!(table.find(&6), None);
    assert_eq!(table.find(&1), Some(&'a'));
    assert_eq!(table.find(&11), Some(&'c'));

    assert!(!table.delete(&6));
    assert_eq!(table.count(), 2);
}

#[test]
fn integer_keys_hash_by_identity() {
    assert_eq!(24u32.bucket(11), 2);
    assert_eq!(11u64.bucket(11), 0);
    assert_eq!((-1i32).bucket(11), 10);

    // 1, 14 and 27 all land in bucket 1 of 13 and share one chain.
    let mut table = ChainedHashTable::new(13);
    table.insert(1u32, ());
    table.insert(14u32, ());
    table.insert(27u32, ());
    assert_eq!(table.longest_chain(), 3);
    let keys: Vec<u32> = table.iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, vec![1, 14, 27]);
}

#[test]
fn string_keys() {
    let mut table: ChainedHashTable<String, f64> = ChainedHashTable::default();
    assert_eq!(table.bucket_count(), DEFAULT_BUCKET_COUNT);
    table.insert("holographic".to_string(), 40.0);
    table.insert("mirror".to_string(), 30.0);
    assert_eq!(table.find(&"mirror".to_string()), Some(&30.0));
    assert!(table.contains(&"holographic".to_string()));
    assert!(!table.contains(&"chrome".to_string()));
    assert_eq!("abc".bucket(1000), "abc".to_string().bucket(1000));
}

#[test]
fn bucket_count_is_fixed() {
    let mut table = ChainedHashTable::new(0);
    assert_eq!(table.bucket_count(), 1);
    for i in 0..50u32 {
        table.insert(i, i);
    }
    assert_eq!(table.bucket_count(), 1);
    assert_eq!(table.longest_chain(), 50);
    assert_eq!(table.load_factor(), 50.0);

    let mut table = ChainedHashTable::new(10);
    for i in 0..25u32 {
        table.insert(i, i);
    }
    assert_eq!(table.bucket_count(), 10);
    assert_eq!(table.load_factor(), 2.5);
}

#[test]
fn find_mut_clear_and_for_each() {
    let mut table = ChainedHashTable::new(3);
    for i in 0..6u32 {
        table.insert(i, i * 10);
    }
    if let Some(value) = table.find_mut(&4) {
        *value += 1;
    }
    assert_eq!(table.find(&4), Some(&41));

    let mut sum = 0;
    table.for_each(|_, v| sum += *v);
    assert_eq!(sum, 0 + 10 + 20 + 30 + 41 + 50);

    table.clear();
    assert!(table.is_empty());
    assert_eq!(table.find(&4), None);
    assert_eq!(table.bucket_count(), 3);
}
