//! Solver method definitions.
//!
//! Provides the [`Method`] enum naming the three supported methods,
//! used by the reporting layer to label summary rows.

/// Root-finding method variants.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Method {
    Bisection,
    FixedPoint,
    Newton,
}

impl Method {
    /// Method names for the summary table.
    pub const fn method_name(self) -> &'static str {
        match self {
            Method::Bisection  => "Bisection",
            Method::FixedPoint => "FixedPoint",
            Method::Newton     => "Newton",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.method_name())
    }
}
