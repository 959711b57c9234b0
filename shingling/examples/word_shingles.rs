use shingling::{shingle, ShingleConfig};

fn main() {
    let documents = vec![
        "Welcome to Jimbocho, the town of books and curry!",
        "Welcome to Jimbocho, the city of books and curry!",
    ];

    // Word trigrams separated by whitespace.
    let config = ShingleConfig::new(3, Some(' ')).unwrap();
    for doc in &documents {
        for s in config.shingles(doc) {
            println!("{}", s.join(" "));
        }
    }

    // Any token source works, including unbounded ones.
    let first = shingle(1u64.., 4).unwrap().nth(10).unwrap();
    assert_eq!(first, vec![11, 12, 13, 14]);

    // Window sizes must be positive.
    assert!(ShingleConfig::new(0, None).is_err());
}
