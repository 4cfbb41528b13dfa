//! Thread stress tests for the allocation triad.
//!
//! The triad takes no locks of its own; these verify that the backend it
//! forwards to copes with concurrent allocate/release from many threads.

use standalone_rt::{allocate, reallocate, release};
use std::ptr;
use std::sync::mpsc;
use std::sync::{Arc, Barrier};
use std::thread;

// ---------------------------------------------------------------------------
// N threads doing rapid allocate/release cycles
// ---------------------------------------------------------------------------

fn stress_allocate_release_n_threads(num_threads: usize) {
    const ITERATIONS: usize = 10_000;
    const ALLOC_SIZE: usize = 128;

    let barrier = Arc::new(Barrier::new(num_threads));

    let handles: Vec<_> = (0..num_threads)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                unsafe {
                    for _ in 0..ITERATIONS {
                        let p = allocate(ALLOC_SIZE);
                        assert!(!p.is_null(), "allocate returned NULL under contention");
                        ptr::write_bytes(p, 0xCC, ALLOC_SIZE);
                        release(p);
                    }
                }
            })
        })
        .collect();

    for h in handles {
        h.join().expect("thread panicked during allocate/release stress");
    }
}

#[test]
fn stress_allocate_release_4_threads() {
    stress_allocate_release_n_threads(4);
}

#[test]
fn stress_allocate_release_16_threads() {
    stress_allocate_release_n_threads(16);
}

// ---------------------------------------------------------------------------
// Growing blocks concurrently keeps per-thread contents intact
// ---------------------------------------------------------------------------

#[test]
fn concurrent_reallocate_keeps_contents() {
    const THREADS: usize = 8;

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            thread::spawn(move || unsafe {
                let tag = t as u8 + 1;
                let mut size = 16;
                let mut p = allocate(size);
                assert!(!p.is_null());
                ptr::write_bytes(p, tag, size);
                while size < 64 * 1024 {
                    let new_size = size * 2;
                    p = reallocate(p, new_size);
                    assert!(!p.is_null());
                    let block = std::slice::from_raw_parts(p, size);
                    assert!(block.iter().all(|&b| b == tag), "thread {} lost data", t);
                    ptr::write_bytes(p, tag, new_size);
                    size = new_size;
                }
                release(p);
            })
        })
        .collect();

    for h in handles {
        h.join().expect("thread panicked during reallocate");
    }
}

// ---------------------------------------------------------------------------
// Cross-thread release: thread A allocates, thread B releases
// ---------------------------------------------------------------------------

/// Wrapper to allow sending `*mut u8` across thread boundaries.
struct SendPtr(*mut u8);
unsafe impl Send for SendPtr {}

#[test]
fn cross_thread_release() {
    const COUNT: usize = 1_000;
    const SIZE: usize = 64;

    let (tx, rx) = mpsc::channel::<SendPtr>();

    let producer = thread::spawn(move || {
        for i in 0..COUNT {
            let p = unsafe { allocate(SIZE) };
            assert!(!p.is_null());
            unsafe { ptr::write_bytes(p, (i % 251) as u8, SIZE) };
            tx.send(SendPtr(p)).expect("receiver hung up");
        }
    });

    let consumer = thread::spawn(move || {
        let mut received = 0;
        for SendPtr(p) in rx {
            unsafe { release(p) };
            received += 1;
        }
        received
    });

    producer.join().expect("producer panicked");
    let received = consumer.join().expect("consumer panicked");
    assert_eq!(received, COUNT);
}
