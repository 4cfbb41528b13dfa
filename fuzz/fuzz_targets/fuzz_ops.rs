#![no_main]

use libfuzzer_sys::fuzz_target;
use standalone_rt::{allocate, reallocate, release};

/// Fuzz target that interprets a byte slice as a sequence of triad operations.
///
/// Each operation is encoded as:
///   byte 0: opcode (0=allocate, 1=release, 2=reallocate, 3=release null)
///   byte 1-2: size (little-endian u16)
///   byte 3: slot index (which tracked pointer to operate on)
///
/// Every live block is filled with its slot's tag so reallocate can be
/// checked for data loss.
const MAX_SLOTS: usize = 64;

fn tag(slot: usize) -> u8 {
    (slot as u8) | 0x80
}

fuzz_target!(|data: &[u8]| {
    let mut slots: [*mut u8; MAX_SLOTS] = [std::ptr::null_mut(); MAX_SLOTS];
    let mut sizes: [usize; MAX_SLOTS] = [0; MAX_SLOTS];

    let mut i = 0;
    while i + 4 <= data.len() {
        let opcode = data[i] & 0x03;
        let size = u16::from_le_bytes([data[i + 1], data[i + 2]]) as usize;
        let slot = (data[i + 3] as usize) % MAX_SLOTS;
        i += 4;

        match opcode {
            0 => {
                unsafe { release(slots[slot]) };
                let size = size.max(1);
                let ptr = unsafe { allocate(size) };
                slots[slot] = ptr;
                sizes[slot] = if ptr.is_null() { 0 } else { size };
                if !ptr.is_null() {
                    unsafe { std::ptr::write_bytes(ptr, tag(slot), size) };
                }
            }
            1 => {
                unsafe { release(slots[slot]) };
                slots[slot] = std::ptr::null_mut();
                sizes[slot] = 0;
            }
            2 => {
                let size = size.max(1);
                let ptr = unsafe { reallocate(slots[slot], size) };
                if ptr.is_null() {
                    // The old block is still valid; keep tracking it.
                    continue;
                }
                let kept = sizes[slot].min(size);
                for j in 0..kept {
                    assert_eq!(
                        unsafe { *ptr.add(j) },
                        tag(slot),
                        "reallocate lost byte {} of slot {}",
                        j,
                        slot
                    );
                }
                unsafe { std::ptr::write_bytes(ptr, tag(slot), size) };
                slots[slot] = ptr;
                sizes[slot] = size;
            }
            3 => unsafe { release(std::ptr::null_mut()) },
            _ => unreachable!(),
        }
    }

    for slot in &mut slots {
        unsafe { release(*slot) };
        *slot = std::ptr::null_mut();
    }
});
