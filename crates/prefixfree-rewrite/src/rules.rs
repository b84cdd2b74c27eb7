//! The rewrite rules as data.
//!
//! Each pipeline is an ordered list of steps. Order matters: later steps
//! must not re-corrupt what earlier ones produced, and the double-prefix
//! cleanup has to run after every step that inserts a prefix.

/// Which capability set a prefix rule draws its names from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Functions,
    Keywords,
    Properties,
}

/// What may follow a matched name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum After {
    /// `pattern` is part of the match and is replaced by `with`.
    Replace {
        pattern: &'static str,
        with: &'static str,
    },
    /// The name must be followed by whitespace, one of these characters, or
    /// the end of the text. The delimiter is left in place, so adjacent
    /// names are all prefixed.
    Delimiter(&'static str),
}

/// Insert the prefix before any `scope` name found between `before` and
/// `after`.
///
/// `before` must contain exactly one capture group. Names are matched
/// case-insensitively and keep their original spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixRule {
    pub name: &'static str,
    pub scope: Scope,
    pub before: &'static str,
    pub after: After,
}

pub const FUNCTIONS_IN_CSS: PrefixRule = PrefixRule {
    name: "functions",
    scope: Scope::Functions,
    before: r"(\s|:|,)",
    after: After::Replace {
        pattern: r"\s*\(",
        with: "(",
    },
};

pub const KEYWORDS_IN_CSS: PrefixRule = PrefixRule {
    name: "keywords",
    scope: Scope::Keywords,
    before: r"(\s|:)",
    after: After::Delimiter(";}"),
};

pub const PROPERTIES_IN_CSS: PrefixRule = PrefixRule {
    name: "properties",
    scope: Scope::Properties,
    before: r"(^|\{|\s|;)",
    after: After::Replace {
        pattern: r"\s*:",
        with: ":",
    },
};

pub const FUNCTIONS_IN_VALUE: PrefixRule = PrefixRule {
    name: "value functions",
    scope: Scope::Functions,
    before: r"(^|\s|,)",
    after: After::Replace {
        pattern: r"\s*\(",
        with: "(",
    },
};

pub const KEYWORDS_IN_VALUE: PrefixRule = PrefixRule {
    name: "value keywords",
    scope: Scope::Keywords,
    before: r"(^|\s)",
    after: After::Delimiter(""),
};

pub const PROPERTIES_IN_VALUE: PrefixRule = PrefixRule {
    name: "value properties",
    scope: Scope::Properties,
    before: r"(^|\s|,)",
    after: After::Delimiter(","),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Convert standard gradient angles to the legacy prefixed convention.
    /// Only compiled when `linear-gradient` needs the prefix.
    GradientAngles,
    Prefix(PrefixRule),
    /// Prefix property names inside the values of value-accepting
    /// declarations.
    PropertiesInValues,
    Selectors,
    AtRules,
    /// Collapse `-PREFIX` back to `-`.
    DoublePrefix,
    /// Expand the `-*-` placeholder to the prefix.
    Wildcard,
}

/// When a compiled step runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Always,
    /// Only when selectors and at-rules were requested.
    Raw,
    /// Only when the value belongs to a value-accepting property.
    ValueProperty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineStep {
    pub step: Step,
    pub gate: Gate,
}

const fn always(step: Step) -> PipelineStep {
    PipelineStep {
        step,
        gate: Gate::Always,
    }
}

/// Steps applied to whole stylesheets.
pub const STYLESHEET: &[PipelineStep] = &[
    always(Step::GradientAngles),
    always(Step::Prefix(FUNCTIONS_IN_CSS)),
    always(Step::Prefix(KEYWORDS_IN_CSS)),
    always(Step::Prefix(PROPERTIES_IN_CSS)),
    always(Step::PropertiesInValues),
    PipelineStep {
        step: Step::Selectors,
        gate: Gate::Raw,
    },
    PipelineStep {
        step: Step::AtRules,
        gate: Gate::Raw,
    },
    always(Step::DoublePrefix),
    always(Step::Wildcard),
];

/// Steps applied to a single property value.
pub const VALUE: &[PipelineStep] = &[
    always(Step::Prefix(FUNCTIONS_IN_VALUE)),
    always(Step::Prefix(KEYWORDS_IN_VALUE)),
    PipelineStep {
        step: Step::Prefix(PROPERTIES_IN_VALUE),
        gate: Gate::ValueProperty,
    },
];

/// Regex alternation of `names`, escaped and longest first so that a name
/// never shadows a longer one it is a prefix of.
pub fn alternation<'a, I>(names: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut names: Vec<&str> = names.into_iter().collect();
    names.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    names.dedup();
    names
        .iter()
        .map(|name| regex::escape(name))
        .collect::<Vec<_>>()
        .join("|")
}
