use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

use tracing::trace;

use crate::Version;

/// Compare two versions by precedence.
///
/// Major, minor and patch are compared numerically first. With equal cores a
/// release is greater than any of its pre-releases, and two pre-releases are
/// compared identifier by identifier. Build metadata is never looked at.
pub fn compare(a: &Version, b: &Version) -> Ordering {
    a.major
        .cmp(&b.major)
        .then(a.minor.cmp(&b.minor))
        .then(a.patch.cmp(&b.patch))
        .then_with(|| {
            match (a.pre_release.is_empty(), b.pre_release.is_empty()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) => a.pre_release.cmp(&b.pre_release),
            }
        })
}

/// Sort versions in place, lowest precedence first.
///
/// The sort is stable: versions that only differ in build metadata keep the
/// order they came in.
pub fn sort(versions: &mut [Version]) {
    trace!(len = versions.len(), "sorting versions");
    versions.sort_by(compare);
}

/// Collect versions into a new `Vec` sorted like [`sort`].
pub fn sorted(versions: impl IntoIterator<Item = Version>) -> Vec<Version> {
    let mut versions = versions.into_iter().collect::<Vec<_>>();
    sort(&mut versions);
    versions
}

impl Version {
    pub fn less_than(&self, other: &Self) -> bool {
        compare(self, other).is_lt()
    }

    pub fn less_than_or_equal_to(&self, other: &Self) -> bool {
        compare(self, other).is_le()
    }

    pub fn greater_than(&self, other: &Self) -> bool {
        compare(self, other).is_gt()
    }

    pub fn greater_than_or_equal_to(&self, other: &Self) -> bool {
        compare(self, other).is_ge()
    }

    /// Equal precedence. Build metadata is ignored.
    pub fn equal_to(&self, other: &Self) -> bool {
        compare(self, other).is_eq()
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.equal_to(other)
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.pre_release.hash(state);
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[track_caller]
    fn v(version: &str) -> Version {
        Version::parse(version).unwrap()
    }

    #[test]
    fn test_core_ordering() {
        assert_eq!(Ordering::Greater, compare(&v("0.0.1"), &v("0.0.0")));
        assert_eq!(Ordering::Greater, compare(&v("1.0.0"), &v("0.9.9")));
        assert_eq!(Ordering::Greater, compare(&v("0.10.0"), &v("0.9.0")));
        assert_eq!(Ordering::Greater, compare(&v("0.99.0"), &v("0.10.0")));
        assert_eq!(Ordering::Greater, compare(&v("2.0.0"), &v("1.2.3")));
        assert_eq!(Ordering::Equal, compare(&v("1.2.3"), &v("1.2.3")));
        assert_eq!(Ordering::Less, compare(&v("1.2.3"), &v("1.2.4")));
    }

    #[test]
    fn test_release_beats_prerelease() {
        assert_eq!(Ordering::Greater, compare(&v("0.0.0"), &v("0.0.0-foo")));
        assert_eq!(Ordering::Greater, compare(&v("1.2.3"), &v("1.2.3-asdf")));
        assert_eq!(Ordering::Greater, compare(&v("1.2.3"), &v("1.2.3-4")));
        assert_eq!(Ordering::Less, compare(&v("1.0.0-zzz"), &v("1.0.0")));
        // Only with equal cores.
        assert_eq!(Ordering::Less, compare(&v("1.0.0"), &v("1.0.1-alpha")));
    }

    #[test]
    fn test_prerelease_ordering() {
        assert_eq!(Ordering::Greater, compare(&v("1.2.3-5"), &v("1.2.3-4")));
        assert_eq!(Ordering::Greater, compare(&v("1.2.3-5-foo"), &v("1.2.3-5")));
        assert_eq!(Ordering::Greater, compare(&v("1.2.3-5-foo"), &v("1.2.3-5-Foo")));
        assert_eq!(Ordering::Greater, compare(&v("1.2.3-a.10"), &v("1.2.3-a.5")));
        assert_eq!(Ordering::Greater, compare(&v("1.2.3-a.b"), &v("1.2.3-a.5")));
        assert_eq!(Ordering::Greater, compare(&v("1.2.3-a.b"), &v("1.2.3-a")));
        assert_eq!(Ordering::Less, compare(&v("1.2.3-alpha"), &v("1.2.3-alpha.1")));
        assert_eq!(
            Ordering::Greater,
            compare(&v("1.2.3-a.b.c.10.d.5"), &v("1.2.3-a.b.c.5.d.100"))
        );
    }

    #[test]
    fn test_build_metadata_is_ignored() {
        assert_eq!(Ordering::Greater, compare(&v("3.0.0+foobar"), &v("2.7.2")));
        assert_eq!(Ordering::Greater, compare(&v("3.0.0"), &v("2.7.2+asdf")));
        assert_eq!(Ordering::Equal, compare(&v("1.0.0+a"), &v("1.0.0+b")));
        assert_eq!(
            Ordering::Equal,
            compare(&v("1.0.0-rc.1+a"), &v("1.0.0-rc.1"))
        );
    }

    #[test]
    fn test_predicates() {
        let lower = v("1.0.0-alpha");
        let higher = v("1.0.0");

        assert!(lower.less_than(&higher));
        assert!(lower.less_than_or_equal_to(&higher));
        assert!(!lower.greater_than(&higher));
        assert!(!lower.greater_than_or_equal_to(&higher));
        assert!(!lower.equal_to(&higher));

        assert!(higher.greater_than(&lower));
        assert!(higher.equal_to(&v("1.0.0+build")));
        assert!(higher.less_than_or_equal_to(&v("1.0.0+build")));
        assert!(higher.greater_than_or_equal_to(&v("1.0.0+build")));
    }

    #[test]
    fn test_operators_match_compare() {
        assert!(v("1.0.0-alpha") < v("1.0.0-alpha.1"));
        assert!(v("1.0.0-alpha.1") < v("1.0.0-alpha.beta"));
        assert!(v("1.0.0-alpha.beta") < v("1.0.0-beta"));
        assert!(v("1.0.0-beta") < v("1.0.0-beta.2"));
        assert!(v("1.0.0-beta.2") < v("1.0.0-beta.11"));
        assert!(v("1.0.0-beta.11") < v("1.0.0-rc.1"));
        assert!(v("1.0.0-rc.1") < v("1.0.0"));
        assert_eq!(v("1.0.0").max(v("1.0.0-rc.1")).to_string(), "1.0.0");
    }

    #[test]
    fn test_hash_agrees_with_eq() {
        let set = ["1.0.0+a", "1.0.0+b", "1.0.0", "1.0.0-rc.1"]
            .into_iter()
            .map(v)
            .collect::<HashSet<_>>();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_sort_is_stable() {
        let mut versions = ["1.0.0+b", "0.1.0", "1.0.0+a", "1.0.0-rc.1", "1.0.0"]
            .into_iter()
            .map(v)
            .collect::<Vec<_>>();
        sort(&mut versions);
        let sorted = versions.iter().map(ToString::to_string).collect::<Vec<_>>();
        assert_eq!(
            sorted,
            ["0.1.0", "1.0.0-rc.1", "1.0.0+b", "1.0.0+a", "1.0.0"]
        );
    }

    #[test]
    fn test_sorted() {
        let versions = sorted(["3.1.1", "1.0.2", "1.0.0", "1.2.0"].into_iter().map(v));
        let sorted = versions.iter().map(ToString::to_string).collect::<Vec<_>>();
        assert_eq!(sorted, ["1.0.0", "1.0.2", "1.2.0", "3.1.1"]);
        assert!(super::sorted(Vec::new()).is_empty());
    }
}
