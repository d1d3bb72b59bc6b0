#![no_main]

use bufpool::{POOLED_MAX, SMALL_MAX, SizeClass};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (u64, u64)| {
    let (size, capacity) = (input.0 as usize, input.1 as usize);

    // Forward mapping: any in-range size gets a class whose capacity
    // covers it within the tier's waste bound, and the inverse recovers
    // the same class from that capacity.
    match SizeClass::for_size(size) {
        Some(class) => {
            let cap = class.capacity();
            assert!(cap >= size);
            if size <= SMALL_MAX {
                assert!(cap <= size * 2, "small tier waste bound");
                assert!(cap.is_power_of_two());
            } else {
                assert!(cap * 4 <= size * 5, "large tier waste bound");
            }
            assert_eq!(SizeClass::from_capacity(cap), Ok(class));
        }
        None => {
            // Only the degenerate and bypass ranges have no class.
            assert!(size == 0 || size > POOLED_MAX);
        }
    }

    // Inverse mapping: accepted capacities are exactly the fixed points
    // of the forward mapping.
    if let Ok(class) = SizeClass::from_capacity(capacity) {
        assert_eq!(class.capacity(), capacity);
        assert_eq!(SizeClass::for_size(capacity), Some(class));
    }
});
