//! Record queue example demonstrating framing, skip, and the MPMC wrapper

use recring::{QueueConfig, RecordRing, SharedRecordQueue};
use std::{sync::Arc, thread};

fn main() {
    println!("Record Queue Example");
    println!("====================");

    record_framing_example().expect("Record framing example failed");

    println!("\n{}", "=".repeat(50));

    shared_queue_example().expect("Shared queue example failed");
}

fn record_framing_example() -> Result<(), Box<dyn std::error::Error>> {
    println!("\n1. Record Framing Example");

    let ring = RecordRing::new(128)?;
    println!("Created ring with capacity: {}", ring.capacity());

    // One fixed record, then ten variable-length records.
    ring.enqueue(b"hello\0")?;
    println!("Next record length: {}", ring.peek_len());

    for i in 0..10u8 {
        let payload = vec![b'a' + i; i as usize + 1];
        ring.enqueue(&payload)?;
    }
    println!("Used bytes after production: {}", ring.len());

    // Drop the first record without copying it anywhere.
    println!("Skipping first record...");
    ring.skip();

    let mut buf = [0u8; 100];
    while !ring.is_empty() {
        let n = ring.dequeue(&mut buf);
        println!("  item = {}", String::from_utf8_lossy(&buf[..n]));
    }

    Ok(())
}

fn shared_queue_example() -> Result<(), Box<dyn std::error::Error>> {
    println!("\n2. Shared Queue Example (two producers, one consumer)");

    let config = QueueConfig::new("demo").with_capacity(256);
    let queue = Arc::new(SharedRecordQueue::from_config(&config)?);

    let mut producers = Vec::new();
    for id in 0..2u8 {
        let queue = queue.clone();
        producers.push(thread::spawn(move || {
            for seq in 0..5u8 {
                let payload = [b'A' + id, b'0' + seq];
                while queue.enqueue(&payload).unwrap() == 0 {
                    thread::yield_now();
                }
            }
        }));
    }

    for producer in producers {
        producer.join().unwrap();
    }

    let mut buf = [0u8; 16];
    let mut received = 0;
    while !queue.is_empty() {
        let n = queue.dequeue(&mut buf);
        println!("  received = {}", String::from_utf8_lossy(&buf[..n]));
        received += 1;
    }
    println!("Total records received: {}", received);

    Ok(())
}
