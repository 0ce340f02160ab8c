#![no_main]

use bytestream::ByteReader;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut reader = ByteReader::new(data);
    let mut idx = 0usize;

    // Use input bytes to drive a bounded sequence of reads.
    while idx < data.len() && idx < 1024 {
        let op = data[idx] % 6;
        idx += 1;

        let before = reader.position();
        let ok = match op {
            0 => reader.read_u8().is_ok(),
            1 => reader.read_i32_le().is_ok(),
            2 => reader.read_u32_le().is_ok(),
            3 => reader.read_f32_le().is_ok(),
            4 => reader.read_u64_le().is_ok(),
            _ => reader.read_cstring().is_ok(),
        };
        // Failed reads never consume input.
        if !ok {
            assert_eq!(reader.position(), before);
        }
    }
});
