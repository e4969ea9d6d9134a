use std::cmp::Ordering;
use std::fmt;

/// The Joomla version requested on the command line.
///
/// `latest` resolves to the newest release at download time; `none` asks for
/// an empty virtual host with no application installed; anything else is a
/// release number (`3`, `3.4`, ...) or branch name passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSelector {
    Latest,
    None,
    Release(String),
}

impl VersionSelector {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "latest" => VersionSelector::Latest,
            "none" => VersionSelector::None,
            other => VersionSelector::Release(other.to_string()),
        }
    }

    /// Whether this selector installs a Joomla application at all.
    pub fn installs_joomla(&self) -> bool {
        !matches!(self, VersionSelector::None)
    }

    pub fn as_str(&self) -> &str {
        match self {
            VersionSelector::Latest => "latest",
            VersionSelector::None => "none",
            VersionSelector::Release(release) => release,
        }
    }
}

impl fmt::Display for VersionSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dotted release number, ordered by numeric segments rather than lexically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    segments: Vec<u32>,
}

impl Version {
    /// Parse a release string such as `3.4.1`.
    ///
    /// Returns `None` when any segment is not a plain number, which is how
    /// branch names are told apart from releases.
    pub fn parse(raw: &str) -> Option<Self> {
        let segments = raw
            .split('.')
            .map(|segment| segment.parse::<u32>())
            .collect::<Result<Vec<_>, _>>()
            .ok()?;
        if segments.is_empty() { None } else { Some(Self { segments }) }
    }
}

impl From<[u32; 3]> for Version {
    fn from(segments: [u32; 3]) -> Self {
        Self { segments: segments.to_vec() }
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        // Missing trailing segments count as zero, so 3.2 == 3.2.0.
        let len = self.segments.len().max(other.segments.len());
        for idx in 0..len {
            let left = self.segments.get(idx).copied().unwrap_or(0);
            let right = other.segments.get(idx).copied().unwrap_or(0);
            match left.cmp(&right) {
                Ordering::Equal => {}
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }
}
