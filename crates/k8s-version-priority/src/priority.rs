use crate::Version;

/// Parses `versions` and returns them sorted by priority, highest first.
///
/// The sort is stable, so versions of equal rank keep their input order, even
/// if they are spelled differently (`v1` and `v01`).
pub fn by_priority<I, S>(versions: I) -> Vec<Version>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut versions: Vec<_> = versions
        .into_iter()
        .map(|version| Version::parse(version.as_ref()))
        .collect();

    versions.sort_by(|lhs, rhs| rhs.cmp_priority(lhs));
    versions
}

/// Returns the item of `versions` with the highest priority, or [`None`] if
/// `versions` is empty.
///
/// The item is returned as it was passed in, so the original spelling is
/// preserved. Of several items with equal rank, the first one wins.
///
/// ```
/// use k8s_version_priority::highest_priority;
///
/// assert_eq!(highest_priority(["v1", "v2", "v10"]), Some("v10"));
/// assert_eq!(highest_priority(["v42alpha", "v42beta", "v42"]), Some("v42"));
/// assert_eq!(highest_priority(Vec::<String>::new()), None);
/// ```
pub fn highest_priority<I, S>(versions: I) -> Option<S>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut ranked: Vec<_> = versions
        .into_iter()
        .map(|item| (Version::parse(item.as_ref()), item))
        .collect();

    // Stable, so the first of several equally ranked items stays in front.
    ranked.sort_by(|(lhs, _), (rhs, _)| rhs.cmp_priority(lhs));
    ranked.into_iter().next().map(|(_, item)| item)
}
