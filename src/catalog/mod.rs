//! Criteria catalog: the static table of selectable quiz criteria.
//!
//! Shape: domain → main criterion → sub criterion → detail entries.
//!
//! The table is compiled into the binary and never mutated. Callers only
//! see it through the lookup functions on [`CriteriaCatalog`]; a lookup that
//! misses at any level yields an empty list, never an error, since every
//! dependent selection must still be renderable (possibly empty).

mod data;

/// Finest-grained criterion level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubCriterion {
    name: &'static str,
    details: &'static [&'static str],
}

/// Top criterion level beneath a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainCriterion {
    name: &'static str,
    subs: &'static [SubCriterion],
}

/// One domain key and its criteria tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainCriteria {
    key: &'static str,
    mains: &'static [MainCriterion],
}

/// Immutable lookup table of selectable criteria.
#[derive(Debug, Clone, Copy)]
pub struct CriteriaCatalog {
    domains: &'static [DomainCriteria],
}

static BUILTIN: CriteriaCatalog = CriteriaCatalog::new(data::DOMAINS);

impl CriteriaCatalog {
    /// Build a catalog over a static table. Domain keys are expected to be unique.
    pub(crate) const fn new(domains: &'static [DomainCriteria]) -> Self {
        Self { domains }
    }

    /// The process-wide catalog shipped with the crate.
    pub fn builtin() -> &'static CriteriaCatalog {
        &BUILTIN
    }

    /// Domain keys in catalog order.
    pub fn domains(&self) -> Vec<&'static str> {
        self.domains.iter().map(|d| d.key).collect()
    }

    pub fn contains_domain(&self, domain: &str) -> bool {
        self.domain(domain).is_some()
    }

    /// Names of every main criterion under `domain`, in catalog order.
    pub fn list_main_criteria(&self, domain: &str) -> Vec<&'static str> {
        self.domain(domain)
            .map(|d| d.mains.iter().map(|m| m.name).collect())
            .unwrap_or_default()
    }

    /// Names of every sub criterion under `(domain, main)`.
    pub fn list_sub_criteria(&self, domain: &str, main: &str) -> Vec<&'static str> {
        self.main(domain, main)
            .map(|m| m.subs.iter().map(|s| s.name).collect())
            .unwrap_or_default()
    }

    /// Detail entries under `(domain, main, sub)`.
    pub fn list_details(&self, domain: &str, main: &str, sub: &str) -> Vec<&'static str> {
        self.main(domain, main)
            .and_then(|m| m.subs.iter().find(|s| s.name == sub))
            .map(|s| s.details.to_vec())
            .unwrap_or_default()
    }

    fn domain(&self, domain: &str) -> Option<&'static DomainCriteria> {
        self.domains.iter().find(|d| d.key == domain)
    }

    fn main(&self, domain: &str, main: &str) -> Option<&'static MainCriterion> {
        self.domain(domain)?.mains.iter().find(|m| m.name == main)
    }
}
