#![allow(clippy::unwrap_used)]

use article_harvest::{Fault, Record, RecordStore};

fn sample(url: &str, title: &str, claps: u64) -> Record {
    Record {
        url: url.to_string(),
        title: title.to_string(),
        subtitle: "a subtitle".to_string(),
        text: "some body text".to_string(),
        num_images: 2,
        image_urls: "https://cdn/a.jpg; https://cdn/b.jpg".to_string(),
        num_external_links: 3,
        author_name: "Ada".to_string(),
        author_url: "https://medium.com/@ada".to_string(),
        claps,
        reading_time: 4,
        keywords: "rust, search".to_string(),
        error: None,
    }
}

#[test]
fn append_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let store = RecordStore::new(dir.path().join("records.csv"));

    let records = vec![
        sample("https://medium.com/a", "First", 100),
        sample("https://medium.com/b", "Second", 200),
    ];
    store.append(&records).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded, records);
}

#[test]
fn second_append_does_not_repeat_the_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.csv");
    let store = RecordStore::new(&path);

    store.append(&[sample("https://medium.com/a", "First", 1)]).unwrap();
    store.append(&[sample("https://medium.com/b", "Second", 2)]).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let header_lines = contents.lines().filter(|l| l.starts_with("url,")).count();
    assert_eq!(header_lines, 1);

    let loaded = store.load().unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[1].url, "https://medium.com/b");
}

#[test]
fn insertion_order_and_duplicates_are_preserved() {
    let dir = tempfile::tempdir().unwrap();
    let store = RecordStore::new(dir.path().join("records.csv"));

    let record = sample("https://medium.com/a", "Same", 1);
    store.append(std::slice::from_ref(&record)).unwrap();
    store.append(std::slice::from_ref(&record)).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].url, loaded[1].url);
}

#[test]
fn fault_annotation_is_dropped_on_write() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.csv");
    let store = RecordStore::new(&path);

    let faulted = Record::faulted("https://medium.com/x", Fault::Request("timeout".into()));
    store.append(&[faulted]).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(!contents.contains("timeout"));

    let loaded = store.load().unwrap();
    assert_eq!(loaded[0].url, "https://medium.com/x");
    assert!(loaded[0].error.is_none());
}

#[test]
fn unparseable_numeric_fields_load_as_zero() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.csv");
    std::fs::write(
        &path,
        "url,title,subtitle,text,num_images,image_urls,num_external_links,author_name,author_url,claps,reading_time,keywords\n\
         https://medium.com/a,Title,,,not-a-number,,2,,,abc,5.0,\n",
    )
    .unwrap();

    let store = RecordStore::new(&path);
    let loaded = store.load().unwrap();
    assert_eq!(loaded[0].num_images, 0);
    assert_eq!(loaded[0].num_external_links, 2);
    assert_eq!(loaded[0].claps, 0);
    assert_eq!(loaded[0].reading_time, 5);
}
