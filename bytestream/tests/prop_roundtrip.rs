use bytestream::{ByteReader, ByteWriter, MAX_CSTRING_BYTES};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    U8(u8),
    I32(i32),
    U32(u32),
    F32(u32),
    U64(u64),
    CString(String),
}

fn cstring_strategy() -> impl Strategy<Value = String> {
    // Printable text without NUL, trimmed to the byte limit.
    "\\PC{0,80}".prop_map(|s| {
        let mut end = s.len().min(MAX_CSTRING_BYTES);
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        s[..end].to_string()
    })
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<u8>().prop_map(Op::U8),
        any::<i32>().prop_map(Op::I32),
        any::<u32>().prop_map(Op::U32),
        // Raw bits so NaN payloads and signed zeros are covered too.
        any::<u32>().prop_map(Op::F32),
        any::<u64>().prop_map(Op::U64),
        cstring_strategy().prop_map(Op::CString),
    ]
}

proptest! {
    #[test]
    fn prop_roundtrip_ops(ops in prop::collection::vec(op_strategy(), 1..64)) {
        let mut writer = ByteWriter::new(Vec::new());

        for op in &ops {
            match op {
                Op::U8(v) => writer.write_u8(*v).unwrap(),
                Op::I32(v) => writer.write_i32_le(*v).unwrap(),
                Op::U32(v) => writer.write_u32_le(*v).unwrap(),
                Op::F32(bits) => writer.write_f32_le(f32::from_bits(*bits)).unwrap(),
                Op::U64(v) => writer.write_u64_le(*v).unwrap(),
                Op::CString(s) => writer.write_cstring(s).unwrap(),
            }
        }

        let bytes = writer.finish().unwrap();
        let mut reader = ByteReader::new(&bytes);

        for op in &ops {
            match op {
                Op::U8(v) => prop_assert_eq!(reader.read_u8().unwrap(), *v),
                Op::I32(v) => prop_assert_eq!(reader.read_i32_le().unwrap(), *v),
                Op::U32(v) => prop_assert_eq!(reader.read_u32_le().unwrap(), *v),
                Op::F32(bits) => prop_assert_eq!(reader.read_f32_le().unwrap().to_bits(), *bits),
                Op::U64(v) => prop_assert_eq!(reader.read_u64_le().unwrap(), *v),
                Op::CString(s) => prop_assert_eq!(reader.read_cstring().unwrap(), s.as_str()),
            }
        }
        prop_assert!(reader.is_empty());
    }

    #[test]
    fn prop_truncated_reads_never_panic(data in prop::collection::vec(any::<u8>(), 0..300)) {
        let mut reader = ByteReader::new(&data);
        while !reader.is_empty() {
            let before = reader.position();
            if reader.read_cstring().is_err() && reader.read_u64_le().is_err() {
                let _ = reader.read_u8();
            }
            prop_assert!(reader.position() > before);
        }
    }
}
