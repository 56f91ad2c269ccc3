//! Session-scoped controller that keeps a selection consistent with the catalog.

use crate::catalog::CriteriaCatalog;
use crate::models::{QuizmakerError, Result};
use crate::selection::{Level, OptionLists, SelectionState};
use tracing::debug;

/// Holds the selection for one session together with its derived options.
///
/// Every accepted change recomputes the option lists before returning, so
/// `options()` never lags behind `state()`.
#[derive(Debug, Clone)]
pub struct SelectionController<'c> {
    catalog: &'c CriteriaCatalog,
    state: SelectionState,
    options: OptionLists,
}

impl<'c> SelectionController<'c> {
    /// Start a session on `default_domain` with everything below it empty.
    pub fn new(catalog: &'c CriteriaCatalog, default_domain: &str) -> Result<Self> {
        if !catalog.contains_domain(default_domain) {
            return Err(QuizmakerError::InvalidSelection {
                level: Level::Domain,
                value: default_domain.to_string(),
            });
        }
        let state = SelectionState::with_domain(default_domain);
        let options = OptionLists::derive(catalog, &state);
        Ok(Self {
            catalog,
            state,
            options,
        })
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn options(&self) -> &OptionLists {
        &self.options
    }

    /// Domain keys the user may pick from.
    pub fn domain_options(&self) -> Vec<&'static str> {
        self.catalog.domains()
    }

    /// Change the value at `level`.
    ///
    /// The domain must be a catalog key. Any other level accepts the empty
    /// string or one of its currently listed options. A rejected value leaves
    /// the controller unchanged.
    pub fn select(&mut self, level: Level, value: &str) -> Result<&OptionLists> {
        let allowed = match level {
            Level::Domain => self.catalog.contains_domain(value),
            _ => value.is_empty() || self.options.at(level).iter().any(|o| *o == value),
        };
        if !allowed {
            return Err(QuizmakerError::InvalidSelection {
                level,
                value: value.to_string(),
            });
        }

        self.state = self.state.transition(level, value);
        self.options = OptionLists::derive(self.catalog, &self.state);
        debug!(
            level = %level,
            value = value,
            main_options = self.options.main.len(),
            sub_options = self.options.sub.len(),
            detail_options = self.options.detail.len(),
            "Selection changed"
        );
        Ok(&self.options)
    }

    pub fn set_domain(&mut self, domain: &str) -> Result<&OptionLists> {
        self.select(Level::Domain, domain)
    }

    pub fn set_main(&mut self, main: &str) -> Result<&OptionLists> {
        self.select(Level::Main, main)
    }

    pub fn set_sub(&mut self, sub: &str) -> Result<&OptionLists> {
        self.select(Level::Sub, sub)
    }

    pub fn set_detail(&mut self, detail: &str) -> Result<&OptionLists> {
        self.select(Level::Detail, detail)
    }
}
