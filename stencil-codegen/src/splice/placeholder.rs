//! The fixed catalogue of insertion markers.

use std::{fmt, str::FromStr};

use stencil_core::Error;

/// A named insertion marker in an aggregator file.
///
/// Each variant owns one token that is embedded verbatim (as a `//` comment,
/// valid in both TypeScript and SCSS) in the file it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    /// Route table entries (`route.ts`).
    Router,
    /// Import lines of the import aggregator (`import.ts`).
    Import,
    /// Controller entries of the import aggregator.
    Controller,
    /// Service entries of the import aggregator.
    Service,
    /// Directive entries of the import aggregator.
    Directive,
    /// Filter entries of the import aggregator.
    Filter,
    /// Font partials in `_common.scss`.
    ScssFont,
    /// Page partials in `_common.scss`.
    ScssPage,
    /// Component partials in `_common.scss`.
    ScssComponent,
    /// Directive partials in `_common.scss`.
    ScssDirective,
}

impl Placeholder {
    /// Every placeholder, in catalogue order.
    pub const ALL: [Placeholder; 10] = [
        Self::Router,
        Self::Import,
        Self::Controller,
        Self::Service,
        Self::Directive,
        Self::Filter,
        Self::ScssFont,
        Self::ScssPage,
        Self::ScssComponent,
        Self::ScssDirective,
    ];

    /// Short name used on the command line and in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Router => "router",
            Self::Import => "import",
            Self::Controller => "controller",
            Self::Service => "service",
            Self::Directive => "directive",
            Self::Filter => "filter",
            Self::ScssFont => "scss-font",
            Self::ScssPage => "scss-page",
            Self::ScssComponent => "scss-component",
            Self::ScssDirective => "scss-directive",
        }
    }

    /// The marker text searched for in target files.
    pub fn token(&self) -> &'static str {
        match self {
            Self::Router => "// <stencil:router/>",
            Self::Import => "// <stencil:import/>",
            Self::Controller => "// <stencil:controller/>",
            Self::Service => "// <stencil:service/>",
            Self::Directive => "// <stencil:directive/>",
            Self::Filter => "// <stencil:filter/>",
            Self::ScssFont => "// <stencil:scss-font/>",
            Self::ScssPage => "// <stencil:scss-page/>",
            Self::ScssComponent => "// <stencil:scss-component/>",
            Self::ScssDirective => "// <stencil:scss-directive/>",
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Placeholder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| Error::UnknownPlaceholder(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_tokens_are_unique() {
        let tokens: HashSet<_> = Placeholder::ALL.iter().map(|p| p.token()).collect();
        assert_eq!(tokens.len(), Placeholder::ALL.len());
    }

    #[test]
    fn test_no_token_contains_another() {
        for a in Placeholder::ALL {
            for b in Placeholder::ALL {
                if a != b {
                    assert!(!a.token().contains(b.token()), "{a} contains {b}");
                }
            }
        }
    }

    #[test]
    fn test_parse_roundtrip() {
        for p in Placeholder::ALL {
            assert_eq!(p.name().parse::<Placeholder>().unwrap(), p);
        }
    }

    #[test]
    fn test_parse_unknown() {
        let err = "routes".parse::<Placeholder>().unwrap_err();
        assert!(matches!(err, Error::UnknownPlaceholder(name) if name == "routes"));
    }
}
