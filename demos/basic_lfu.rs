use freqcache::builder::CacheBuilder;
use freqcache::traits::{CoreCache, LfuCacheTrait};

fn main() {
    // Show the DISCARD tracing events alongside the listener output.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "freqcache=debug".into()),
        )
        .init();

    let mut cache = CacheBuilder::new(4)
        .eviction_listener(|key: &&str, value: i32| {
            println!("DISCARD: {key} (value {value})");
        })
        .build();

    cache.put("A", 1);
    cache.put("B", 2);
    cache.put("C", 3);
    cache.put("D", 4);

    cache.get(&"A");
    cache.get(&"B");

    // Cache is full; "C" and "D" sit at frequency 1 and "C" is older.
    cache.put("E", 5);

    println!("contains C? {}", cache.contains(&"C"));
    println!("frequency of A: {:?}", cache.frequency(&"A"));
}

// Expected output:
// DISCARD: C (value 3)
// contains C? false
// frequency of A: Some(2)
