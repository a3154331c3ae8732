/// Outcome of classifying one apex domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Domain already in the checked-domain cache; no oracle call made
    SkipCached,

    /// Domain belongs to a block-tier category
    Block {
        /// Deny-list regex matching the domain and all its subdomains
        pattern: String,
        /// Block-tier category label
        category: &'static str,
    },

    /// Domain belongs to an allow-tier category; recorded in the cache
    Allow {
        /// Allow-tier category label
        category: &'static str,
    },

    /// Category unrecognized or lookup failed; never cached
    Unknown,
}

impl Decision {
    /// True for decisions that produce a deny-list entry.
    #[must_use]
    pub const fn is_block(&self) -> bool {
        matches!(self, Self::Block { .. })
    }
}
