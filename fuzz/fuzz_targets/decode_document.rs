#![no_main]

use codec::{decode_document, encode_document_to_vec, CodecLimits};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let limits = CodecLimits::for_testing();
    let Ok(root) = decode_document(data, &limits) else {
        return;
    };

    // Anything that decodes re-encodes to the same bytes.
    let bytes = encode_document_to_vec(&root, &limits).expect("re-encode decoded tree");
    assert_eq!(bytes, data);

    // The YAML form keeps every byte too, NaN payloads included.
    let yaml = text::to_yaml_string(&root).expect("render decoded tree");
    let reloaded = text::from_yaml_str(&yaml).expect("reload rendered yaml");
    assert_eq!(reloaded, root);
    let rebuilt = encode_document_to_vec(&reloaded, &limits).expect("re-encode reloaded tree");
    assert_eq!(rebuilt, data);
});
