//! User-facing failure messages.

use codec::{CodecError, ErrorKind};
use text::TextError;
use wire::{DecodeError, WireTag};

/// Finds the failure class of the first codec or text error in the chain.
pub fn classify(err: &anyhow::Error) -> Option<ErrorKind> {
    err.chain().find_map(|cause| {
        cause
            .downcast_ref::<TextError>()
            .map(TextError::kind)
            .or_else(|| cause.downcast_ref::<CodecError>().map(CodecError::kind))
    })
}

/// One line describing `err`, led by its class.
pub fn failure_message(kind: ErrorKind, err: &anyhow::Error) -> String {
    if kind == ErrorKind::UnsupportedFeature && is_wide_string(err) {
        return format!("wide strings are not supported: {err:#}");
    }
    format!("{}: {err:#}", kind.describe())
}

/// The message to log for any failure, classified or not.
pub fn describe_failure(err: &anyhow::Error) -> String {
    classify(err).map_or_else(|| format!("{err:#}"), |kind| failure_message(kind, err))
}

fn is_wide_string(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        matches!(
            cause.downcast_ref::<DecodeError>(),
            Some(DecodeError::UnsupportedTag {
                tag: WireTag::WideString,
                ..
            })
        )
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use anyhow::Context;
    use codec::{decode_document, CodecLimits};

    fn decode_failure(bytes: &[u8]) -> anyhow::Error {
        decode_document(bytes, &CodecLimits::default())
            .map_err(TextError::from)
            .context("decode schema")
            .unwrap_err()
    }

    #[test]
    fn message_per_kind_is_distinct() {
        let err = anyhow::anyhow!("detail");
        let messages: HashSet<_> = ErrorKind::ALL
            .iter()
            .map(|&kind| failure_message(kind, &err))
            .collect();
        assert_eq!(messages.len(), ErrorKind::ALL.len());
        for kind in ErrorKind::ALL {
            let message = failure_message(kind, &err);
            assert!(message.starts_with(kind.describe()), "{message}");
            assert!(message.ends_with("detail"), "{message}");
        }
    }

    #[test]
    fn classifies_through_context() {
        assert_eq!(
            classify(&decode_failure(&[0, b'a'])),
            Some(ErrorKind::UnexpectedEndOfInput)
        );
        assert_eq!(
            classify(&decode_failure(&[200])),
            Some(ErrorKind::InvalidTag)
        );
        assert_eq!(
            classify(&decode_failure(&[8, 8])),
            Some(ErrorKind::TrailingData)
        );
    }

    #[test]
    fn classifies_bare_codec_and_text_errors() {
        let codec_err = anyhow::Error::new(CodecError::TrailingData {
            offset: 1,
            remaining: 1,
        });
        assert_eq!(classify(&codec_err), Some(ErrorKind::TrailingData));

        let text_err = text::from_yaml_str("- 1\n").map_err(anyhow::Error::new).unwrap_err();
        assert_eq!(classify(&text_err), Some(ErrorKind::UnsupportedFeature));
        assert!(!describe_failure(&text_err).starts_with("wide strings"));
    }

    #[test]
    fn unclassified_errors_pass_through() {
        let err = anyhow::anyhow!("path to schema does not exist: x.bin");
        assert_eq!(classify(&err), None);
        assert_eq!(describe_failure(&err), "path to schema does not exist: x.bin");
    }

    #[test]
    fn wide_string_has_its_own_message() {
        let err = decode_failure(&[5, b'w', 0, 0, 0, 8]);
        assert_eq!(classify(&err), Some(ErrorKind::UnsupportedFeature));
        let message = describe_failure(&err);
        assert!(message.starts_with("wide strings are not supported"), "{message}");
        assert_ne!(message, failure_message(ErrorKind::UnsupportedFeature, &anyhow::anyhow!("x")));
    }

    #[test]
    fn message_includes_context_chain() {
        let message = describe_failure(&decode_failure(&[200]));
        assert!(message.starts_with(ErrorKind::InvalidTag.describe()));
        assert!(message.contains("decode schema"));
        assert!(message.contains("200"));
    }
}
