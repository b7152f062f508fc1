//! Placeholder families and their candidate values

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TemplateError};

/// Vendor attribute that requests compile-time evaluation
pub const MSVC_CONSTEXPR_ATTRIBUTE: &str = "[[msvc::constexpr]]";

/// Standard compile-time evaluation qualifier
pub const CONSTEXPR_QUALIFIER: &str = "constexpr";

/// Which part of a declaration a placeholder controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceholderFamily {
    /// Qualifier on a function or constructor declaration
    Fn,
    /// Qualifier on the statement carrying the `return`
    Ret,
}

impl PlaceholderFamily {
    /// All families, in table order
    pub const ALL: [PlaceholderFamily; 2] = [PlaceholderFamily::Fn, PlaceholderFamily::Ret];

    /// Keyword that names the family in a placeholder
    pub fn keyword(&self) -> &'static str {
        match self {
            PlaceholderFamily::Fn => "fn",
            PlaceholderFamily::Ret => "ret",
        }
    }

    /// Resolve the family of a placeholder name
    ///
    /// The family is the one whose keyword starts the name, so `fn`,
    /// `fn_proxy` and `fn2` are all `Fn`, and `ret_proxy` is `Ret`.
    pub fn classify(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|family| name.starts_with(family.keyword()))
            .ok_or_else(|| TemplateError::UnknownPlaceholder(name.to_string()))
    }
}

impl FromStr for PlaceholderFamily {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|family| family.keyword() == s)
            .ok_or_else(|| TemplateError::UnknownPlaceholder(s.to_string()))
    }
}

impl fmt::Display for PlaceholderFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Candidate substitution values for each placeholder family
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateTable {
    fn_candidates: Vec<String>,
    ret_candidates: Vec<String>,
}

impl CandidateTable {
    /// Build a table that probes the given attribute spelling
    ///
    /// `fn` placeholders try nothing, `constexpr` and the attribute; `ret`
    /// placeholders try nothing and the attribute.
    pub fn with_attribute(attribute: impl Into<String>) -> Self {
        let attribute = attribute.into();
        Self {
            fn_candidates: vec![
                String::new(),
                CONSTEXPR_QUALIFIER.to_string(),
                attribute.clone(),
            ],
            ret_candidates: vec![String::new(), attribute],
        }
    }

    /// Candidate values for a family, in substitution order
    pub fn candidates(&self, family: PlaceholderFamily) -> &[String] {
        match family {
            PlaceholderFamily::Fn => &self.fn_candidates,
            PlaceholderFamily::Ret => &self.ret_candidates,
        }
    }
}

impl Default for CandidateTable {
    fn default() -> Self {
        Self::with_attribute(MSVC_CONSTEXPR_ATTRIBUTE)
    }
}
