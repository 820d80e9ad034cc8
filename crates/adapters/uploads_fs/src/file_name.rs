//! Stored filename generation.
//!
//! Names look like `1717243200123-9f86d081.png`: the upload time in Unix
//! milliseconds, eight random hex digits, then the client's extension when it
//! is short and alphanumeric. The client's base name is never reused.

use restohub_domain::time::Timestamp;

const MAX_EXTENSION_LEN: usize = 8;

/// Build a collision-resistant filename for an upload received at `now`.
#[must_use]
pub fn generate(original: Option<&str>, now: Timestamp) -> String {
    let random = uuid::Uuid::new_v4().simple().to_string();
    let stem = format!("{}-{}", now.timestamp_millis(), &random[..8]);
    match original.and_then(extension) {
        Some(ext) => format!("{stem}.{ext}"),
        None => stem,
    }
}

fn extension(original: &str) -> Option<String> {
    let (base, ext) = original.rsplit_once('.')?;
    if base.is_empty()
        || ext.is_empty()
        || ext.len() > MAX_EXTENSION_LEN
        || !ext.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> Timestamp {
        chrono::Utc
            .timestamp_millis_opt(1_717_243_200_123)
            .single()
            .unwrap()
    }

    #[test]
    fn should_prefix_with_millisecond_timestamp() {
        let name = generate(Some("menu.PNG"), at());
        assert!(name.starts_with("1717243200123-"));
        assert!(name.ends_with(".png"));
        assert_eq!(name.len(), "1717243200123-".len() + 8 + ".png".len());
    }

    #[test]
    fn should_generate_distinct_names_for_same_instant() {
        let a = generate(Some("a.jpg"), at());
        let b = generate(Some("a.jpg"), at());
        assert_ne!(a, b);
    }

    #[test]
    fn should_drop_extension_when_missing_or_suspicious() {
        let originals = [
            None,
            Some("noext"),
            Some(".hidden"),
            Some("x.tar/../../etc"),
            Some("x.averyverylongext"),
        ];
        for original in originals {
            let name = generate(original, at());
            assert!(!name.contains('.'), "{original:?} produced {name}");
        }
    }

    #[test]
    fn should_never_contain_path_separators() {
        let name = generate(Some("../../evil.sh"), at());
        assert!(!name.contains('/'));
        assert!(name.ends_with(".sh"));
    }
}
