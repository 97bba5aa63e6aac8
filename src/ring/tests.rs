//! Tests for the byte store and record ring

use crate::config::QueueConfig;
use crate::error::QueueError;
use crate::ring::record::{RecordRing, MAX_RECORD_LEN};
use crate::ring::store::ByteStore;

#[test]
fn test_store_rounds_capacity_up() {
    let store = ByteStore::new(100).unwrap();
    assert_eq!(store.capacity(), 128);

    let store = ByteStore::new(128).unwrap();
    assert_eq!(store.capacity(), 128);

    let store = ByteStore::new(1).unwrap();
    assert_eq!(store.capacity(), 1);
}

#[test]
fn test_store_rejects_zero_capacity() {
    assert!(ByteStore::new(0).is_err());
}

#[test]
fn test_store_wrapped_copy_splits_at_boundary() {
    let store = ByteStore::new(8).unwrap();

    // Write 5 bytes starting 3 before the physical end; the copy must wrap.
    unsafe {
        store.write_wrapped(5, b"abcde");
    }

    let mut buf = [0u8; 5];
    unsafe {
        store.read_wrapped(5, &mut buf);
    }
    assert_eq!(&buf, b"abcde");

    // The same bytes are reachable through a counter that already wrapped
    // past 2^32 / the capacity many times over.
    let mut buf = [0u8; 5];
    unsafe {
        store.read_wrapped(5u32.wrapping_add(8 * 1000), &mut buf);
    }
    assert_eq!(&buf, b"abcde");
}

#[test]
fn test_ring_basic_enqueue_dequeue() {
    let ring = RecordRing::new(64).unwrap();

    assert!(ring.is_empty());
    assert!(!ring.is_full());
    assert_eq!(ring.capacity(), 64);
    assert_eq!(ring.available(), 64);

    assert_eq!(ring.enqueue(b"hello").unwrap(), 5);
    assert_eq!(ring.len(), 6); // 1 prefix byte + 5 payload bytes
    assert_eq!(ring.peek_len(), 5);

    let mut buf = [0u8; 16];
    assert_eq!(ring.dequeue(&mut buf), 5);
    assert_eq!(&buf[..5], b"hello");
    assert!(ring.is_empty());
}

#[test]
fn test_ring_len_counts_bytes_not_records() {
    let ring = RecordRing::new(64).unwrap();

    ring.enqueue(b"ab").unwrap();
    ring.enqueue(b"cdef").unwrap();

    assert_eq!(ring.len(), 3 + 5);
}

#[test]
fn test_zero_length_record_is_distinct_from_empty() {
    let ring = RecordRing::new(16).unwrap();

    assert_eq!(ring.enqueue(b"").unwrap(), 0);
    assert!(!ring.is_empty());
    assert_eq!(ring.len(), 1);
    assert_eq!(ring.peek_len(), 0);

    let mut buf = [0u8; 4];
    assert_eq!(ring.dequeue(&mut buf), 0);
    assert!(ring.is_empty());
}

#[test]
fn test_length_overflow_rejected() {
    let ring = RecordRing::new(1024).unwrap();
    let payload = vec![0u8; MAX_RECORD_LEN + 1];

    match ring.enqueue(&payload) {
        Err(QueueError::LengthOverflow { length, max }) => {
            assert_eq!(length, 256);
            assert_eq!(max, 255);
        }
        other => panic!("expected LengthOverflow, got {:?}", other),
    }
    assert!(ring.is_empty());

    // Exactly MAX_RECORD_LEN is accepted.
    let payload = vec![7u8; MAX_RECORD_LEN];
    assert_eq!(ring.enqueue(&payload).unwrap(), MAX_RECORD_LEN);
}

#[test]
fn test_full_ring_returns_zero_progress() {
    let ring = RecordRing::new(8).unwrap();

    assert_eq!(ring.enqueue(b"abc").unwrap(), 3); // footprint 4
    assert_eq!(ring.enqueue(b"def").unwrap(), 3); // footprint 4, now full
    assert!(ring.is_full());

    let len_before = ring.len();
    assert_eq!(ring.enqueue(b"x").unwrap(), 0);
    assert_eq!(ring.len(), len_before);

    // Even an empty record needs one free byte.
    assert_eq!(ring.enqueue(b"").unwrap(), 0);
}

#[test]
fn test_truncating_dequeue_consumes_whole_record() {
    let ring = RecordRing::new(32).unwrap();

    ring.enqueue(b"abcdefgh").unwrap();
    ring.enqueue(b"next").unwrap();

    let mut small = [0u8; 3];
    assert_eq!(ring.dequeue(&mut small), 3);
    assert_eq!(&small, b"abc");

    // The truncated record is gone; the next one is at the head.
    assert_eq!(ring.peek_len(), 4);
    let mut buf = [0u8; 8];
    assert_eq!(ring.dequeue(&mut buf), 4);
    assert_eq!(&buf[..4], b"next");
}

#[test]
fn test_zero_capacity_dest_still_consumes() {
    let ring = RecordRing::new(32).unwrap();
    ring.enqueue(b"data").unwrap();

    let mut empty: [u8; 0] = [];
    assert_eq!(ring.dequeue(&mut empty), 0);
    assert!(ring.is_empty());
}

#[test]
fn test_peek_is_idempotent() {
    let ring = RecordRing::new(32).unwrap();
    ring.enqueue(b"stable").unwrap();

    let len_before = ring.len();
    for _ in 0..5 {
        let mut buf = [0u8; 16];
        assert_eq!(ring.peek(&mut buf), 6);
        assert_eq!(&buf[..6], b"stable");
    }
    assert_eq!(ring.len(), len_before);

    // Peek also truncates without consuming.
    let mut small = [0u8; 2];
    assert_eq!(ring.peek(&mut small), 2);
    assert_eq!(&small, b"st");
    assert_eq!(ring.len(), len_before);
}

#[test]
fn test_skip_accounting() {
    let ring = RecordRing::new(64).unwrap();
    ring.enqueue(b"skipme").unwrap();
    ring.enqueue(b"keep").unwrap();

    let len_before = ring.len();
    assert!(ring.skip());
    assert_eq!(ring.len(), len_before - (1 + 6));

    let mut buf = [0u8; 8];
    assert_eq!(ring.dequeue(&mut buf), 4);
    assert_eq!(&buf[..4], b"keep");

    assert!(!ring.skip()); // empty
}

#[test]
fn test_wraparound_churn_preserves_records() {
    let ring = RecordRing::new(32).unwrap();
    let mut buf = [0u8; 64];

    // Push far more bytes through than the capacity, so the indices cross
    // the physical boundary many times.
    for round in 0..200u32 {
        let len = (round % 13 + 1) as usize;
        let payload: Vec<u8> = (0..len).map(|i| (round as u8).wrapping_add(i as u8)).collect();

        assert_eq!(ring.enqueue(&payload).unwrap(), len);
        assert_eq!(ring.peek_len(), len);
        assert_eq!(ring.dequeue(&mut buf), len);
        assert_eq!(&buf[..len], &payload[..]);
    }
    assert!(ring.is_empty());
}

#[test]
fn test_record_spanning_physical_boundary() {
    let ring = RecordRing::new(16).unwrap();
    let mut buf = [0u8; 16];

    // Advance the indices so the next record straddles the end of storage.
    ring.enqueue(b"0123456789").unwrap();
    ring.dequeue(&mut buf);

    ring.enqueue(b"wrapped-rec").unwrap();
    assert_eq!(ring.peek_len(), 11);
    assert_eq!(ring.dequeue(&mut buf), 11);
    assert_eq!(&buf[..11], b"wrapped-rec");
}

#[test]
fn test_fill_to_exact_capacity() {
    let ring = RecordRing::new(8).unwrap();

    // Footprint 8 == capacity.
    assert_eq!(ring.enqueue(b"1234567").unwrap(), 7);
    assert!(ring.is_full());
    assert_eq!(ring.available(), 0);

    let mut buf = [0u8; 8];
    assert_eq!(ring.dequeue(&mut buf), 7);
    assert_eq!(&buf[..7], b"1234567");
    assert!(ring.is_empty());
}

#[test]
fn test_reset_clears_ring() {
    let mut ring = RecordRing::new(32).unwrap();
    ring.enqueue(b"gone").unwrap();

    ring.reset();
    assert!(ring.is_empty());
    assert_eq!(ring.len(), 0);
    assert_eq!(ring.peek_len(), 0);
}

#[test]
fn test_from_config() {
    let config = QueueConfig::new("ring").with_capacity(100);
    let ring = RecordRing::from_config(&config).unwrap();
    assert_eq!(ring.capacity(), 128);

    let bad = QueueConfig::new("bad").with_capacity(0);
    assert!(RecordRing::from_config(&bad).is_err());
}
