use super::version::VersionTriple;

/// True if `tag` carries the configured prefix. An empty prefix matches every tag.
pub fn has_prefix(tag: &str, prefix: &str) -> bool {
    prefix.is_empty() || tag.starts_with(prefix)
}

/// Order tags by their parsed version, highest first.
///
/// Tags that do not carry `prefix` are dropped. Ordering is numeric on
/// `(major, minor, patch)`, so `v10.0.0` ranks above `v2.0.0`. The sort is
/// stable: tags that parse to the same triple keep their input order, and
/// unparseable tags (`0.0.0`) end up last.
pub fn rank_tags_descending(tags: &[String], prefix: &str) -> Vec<String> {
    let mut ranked: Vec<(VersionTriple, &String)> = tags
        .iter()
        .filter(|tag| has_prefix(tag, prefix))
        .map(|tag| (VersionTriple::from_tag(tag, prefix), tag))
        .collect();

    ranked.sort_by(|(a, _), (b, _)| b.cmp(a));

    ranked.into_iter().map(|(_, tag)| tag.clone()).collect()
}

/// The highest-ranked tag carrying `prefix`, if any
pub fn latest_tag(tags: &[String], prefix: &str) -> Option<String> {
    rank_tags_descending(tags, prefix).into_iter().next()
}
