//! Selection state and its pure transition function.

use crate::catalog::CriteriaCatalog;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One level of the selection chain, ordered from root to leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Domain,
    Main,
    Sub,
    Detail,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Domain => "domain",
            Self::Main => "main criterion",
            Self::Sub => "sub criterion",
            Self::Detail => "detail criterion",
        })
    }
}

/// The user's current choice at each level. Empty string means unselected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    pub domain: String,
    pub main_criterion: String,
    pub sub_criterion: String,
    pub detail_criterion: String,
}

impl SelectionState {
    /// Fresh state with only the domain chosen.
    pub fn with_domain(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            ..Self::default()
        }
    }

    /// Current value at `level`.
    pub fn get(&self, level: Level) -> &str {
        match level {
            Level::Domain => &self.domain,
            Level::Main => &self.main_criterion,
            Level::Sub => &self.sub_criterion,
            Level::Detail => &self.detail_criterion,
        }
    }

    /// Set `level` to `value` and clear every descendant level.
    ///
    /// Ancestors are left untouched. Setting the leaf clears nothing.
    pub fn transition(&self, level: Level, value: impl Into<String>) -> SelectionState {
        let value = value.into();
        match level {
            Level::Domain => Self::with_domain(value),
            Level::Main => Self {
                domain: self.domain.clone(),
                main_criterion: value,
                ..Self::default()
            },
            Level::Sub => Self {
                domain: self.domain.clone(),
                main_criterion: self.main_criterion.clone(),
                sub_criterion: value,
                detail_criterion: String::new(),
            },
            Level::Detail => Self {
                detail_criterion: value,
                ..self.clone()
            },
        }
    }
}

/// Selectable options for every dependent level of a state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionLists {
    pub main: Vec<&'static str>,
    pub sub: Vec<&'static str>,
    pub detail: Vec<&'static str>,
}

impl OptionLists {
    /// Derive the option lists for `state` from the catalog.
    ///
    /// A level whose parent is unselected gets an empty list.
    pub fn derive(catalog: &CriteriaCatalog, state: &SelectionState) -> Self {
        Self {
            main: catalog.list_main_criteria(&state.domain),
            sub: catalog.list_sub_criteria(&state.domain, &state.main_criterion),
            detail: catalog.list_details(
                &state.domain,
                &state.main_criterion,
                &state.sub_criterion,
            ),
        }
    }

    /// Options offered at `level`. The domain level is not derived here.
    pub fn at(&self, level: Level) -> &[&'static str] {
        match level {
            Level::Domain => &[],
            Level::Main => &self.main,
            Level::Sub => &self.sub,
            Level::Detail => &self.detail,
        }
    }
}
