//! Two-tier category table for the Netify Informatics catalogue.
//!
//! Category ids are compared as strings: the oracle reports the id as a
//! JSON number, but a missing or null id must map to "no match", so the
//! lookup key is the stringified id and absence can never collide with a
//! real entry.

/// Categories whose domains get a deny-list entry.
const BLOCK_IDS: &[(&str, &str)] = &[("3", "Ads"), ("16", "Malware")];

/// Categories whose domains are recorded and left alone.
const ALLOW_IDS: &[(&str, &str)] = &[
    ("1", "Unclassified"),
    ("2", "Adult"),
    ("4", "Arts and Entertainment"),
    ("5", "Business"),
    ("6", "Career and Education"),
    ("7", "Dating"),
    ("8", "Drugs"),
    ("9", "Financial"),
    ("10", "File Sharing"),
    ("11", "Gambling"),
    ("12", "Games"),
    ("13", "Government"),
    ("14", "Health"),
    ("15", "Mail"),
    ("17", "Messaging"),
    ("18", "News"),
    ("19", "Portal"),
    ("20", "Recreation"),
    ("21", "Reference"),
    ("22", "Science"),
    ("23", "Shopping"),
    ("24", "Social Media"),
    ("25", "Society"),
    ("26", "Sports"),
    ("27", "Technology"),
    ("28", "VPN and Proxy"),
    ("29", "Streaming Media"),
    ("30", "Cybersecurity"),
    ("31", "OS/Software Updates"),
    ("32", "VoIP/Conferencing"),
    ("33", "Device/IoT"),
    ("34", "Remote Desktop"),
    ("35", "CDN"),
    ("36", "Hosting"),
    ("37", "ISP/Telco"),
];

/// Outcome of a category-id lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryClass {
    /// Id is in the block tier
    Block(&'static str),
    /// Id is in the allow tier
    Allow(&'static str),
    /// Id is in neither tier, or absent
    Unknown,
}

/// Immutable two-tier id → label mapping.
///
/// This is configuration data, not runtime state; the default table is the
/// Netify catalogue with Ads and Malware in the block tier.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryTable {
    _priv: (),
}

impl CategoryTable {
    /// The built-in Netify table.
    #[must_use]
    pub const fn new() -> Self {
        Self { _priv: () }
    }

    /// Classify a stringified category id; `None` means the oracle had no
    /// id for the domain and always maps to [`CategoryClass::Unknown`].
    #[must_use]
    pub fn classify_id(&self, id: Option<&str>) -> CategoryClass {
        let Some(id) = id else {
            return CategoryClass::Unknown;
        };

        if let Some(label) = lookup(BLOCK_IDS, id) {
            return CategoryClass::Block(label);
        }
        if let Some(label) = lookup(ALLOW_IDS, id) {
            return CategoryClass::Allow(label);
        }
        CategoryClass::Unknown
    }
}

fn lookup(table: &'static [(&'static str, &'static str)], id: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(key, _)| *key == id)
        .map(|(_, label)| *label)
}
