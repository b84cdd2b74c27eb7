//! Compiled pipeline steps.

use std::borrow::Cow;
use std::sync::LazyLock;

use prefixfree_common::{Capabilities, Prefix, PrefixError};
use regex::{Captures, Regex};
use tracing::debug;

use crate::gradient;
use crate::rules::{alternation, After, Gate, PipelineStep, PrefixRule, Scope, Step};

static WILDCARD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-\*-([a-zA-Z])").unwrap());

/// Conditions a pipeline run is evaluated under.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct RunContext {
    pub raw: bool,
    pub value_property: bool,
}

impl Gate {
    fn admits(self, ctx: RunContext) -> bool {
        match self {
            Gate::Always => true,
            Gate::Raw => ctx.raw,
            Gate::ValueProperty => ctx.value_property,
        }
    }
}

#[derive(Debug)]
pub(crate) enum Pass {
    /// `repeating` is set when the repeating variant is prefixed as well.
    GradientAngles {
        repeating: bool,
    },
    Prefix {
        regex: Regex,
        after: After,
    },
    PropertiesInValues {
        declarations: Regex,
        names: Regex,
    },
    Selectors(Regex),
    AtRules(Regex),
    DoublePrefix(String),
    Wildcard,
}

fn compile(pattern: &str) -> Result<Regex, PrefixError> {
    Regex::new(pattern).map_err(|e| PrefixError::Pattern(e.to_string()))
}

fn scope_names(caps: &Capabilities, scope: Scope) -> impl Iterator<Item = &str> {
    let set = match scope {
        Scope::Functions => &caps.sets.value_functions,
        Scope::Keywords => &caps.sets.value_keywords,
        Scope::Properties => &caps.sets.properties,
    };
    set.iter().map(String::as_str)
}

impl Pass {
    /// Compile `step` against `caps`. `None` when the step has nothing to
    /// do for these capabilities.
    pub(crate) fn compile(step: Step, caps: &Capabilities) -> Result<Option<Self>, PrefixError> {
        let pass = match step {
            Step::GradientAngles => {
                let functions = &caps.sets.value_functions;
                functions
                    .contains("linear-gradient")
                    .then(|| Pass::GradientAngles {
                        repeating: functions.contains("repeating-linear-gradient"),
                    })
            }
            Step::Prefix(rule) => Self::prefix_rule(rule, caps)?,
            Step::PropertiesInValues => {
                if caps.sets.properties.is_empty() || caps.value_properties.is_empty() {
                    None
                } else {
                    let declarations = compile(&format!(
                        r"(?i)\b({})\s*:([^;}}]+)(;|\}}|$)",
                        alternation(caps.value_properties.iter().map(String::as_str))
                    ))?;
                    let names = compile(&format!(
                        r"(?i)\b({})",
                        alternation(scope_names(caps, Scope::Properties))
                    ))?;
                    Some(Pass::PropertiesInValues {
                        declarations,
                        names,
                    })
                }
            }
            Step::Selectors => {
                if caps.selector_map.is_empty() {
                    None
                } else {
                    let alt = alternation(caps.selector_map.keys().map(String::as_str));
                    Some(Pass::Selectors(compile(&format!(r"({alt})\b"))?))
                }
            }
            Step::AtRules => {
                if caps.sets.at_rules.is_empty() {
                    None
                } else {
                    let alt = alternation(caps.sets.at_rules.iter().map(String::as_str));
                    Some(Pass::AtRules(compile(&format!(r"@({alt})\b"))?))
                }
            }
            Step::DoublePrefix => Some(Pass::DoublePrefix(format!("-{}", caps.prefix))),
            Step::Wildcard => Some(Pass::Wildcard),
        };
        Ok(pass)
    }

    fn prefix_rule(rule: PrefixRule, caps: &Capabilities) -> Result<Option<Self>, PrefixError> {
        let mut names = scope_names(caps, rule.scope).peekable();
        if names.peek().is_none() {
            return Ok(None);
        }
        let after = match rule.after {
            After::Replace { pattern, .. } => pattern,
            After::Delimiter(_) => "",
        };
        let pattern = format!("(?i){}({}){after}", rule.before, alternation(names));
        debug!(rule = rule.name, pattern = %pattern, "compiled prefix rule");
        Ok(Some(Pass::Prefix {
            regex: compile(&pattern)?,
            after: rule.after,
        }))
    }

    pub(crate) fn apply<'t>(&self, text: &'t str, caps: &Capabilities) -> Cow<'t, str> {
        let prefix = &caps.prefix;
        match self {
            Pass::GradientAngles { repeating } => gradient::correct_angles(text, *repeating),
            Pass::Prefix {
                regex,
                after: After::Replace { with, .. },
            } => regex.replace_all(text, |c: &Captures| {
                format!("{}{prefix}{}{with}", &c[1], &c[2])
            }),
            Pass::Prefix {
                regex,
                after: After::Delimiter(delimiters),
            } => prefix_delimited(text, regex, delimiters, prefix),
            Pass::PropertiesInValues {
                declarations,
                names,
            } => declarations.replace_all(text, |c: &Captures| {
                let property = c.get(1).map_or("", |m| m.as_str());
                let between = &c[0][property.len()..c[0].len() - c[2].len() - c[3].len()];
                format!(
                    "{property}{between}{}{}",
                    prefix_unassigned(&c[2], names, prefix),
                    &c[3]
                )
            }),
            Pass::Selectors(regex) => regex.replace_all(text, |c: &Captures| {
                caps.selector_map
                    .get(&c[1])
                    .cloned()
                    .unwrap_or_else(|| c[1].to_string())
            }),
            Pass::AtRules(regex) => {
                regex.replace_all(text, |c: &Captures| format!("@{prefix}{}", &c[1]))
            }
            Pass::DoublePrefix(needle) => {
                if text.contains(needle.as_str()) {
                    Cow::Owned(text.replace(needle.as_str(), "-"))
                } else {
                    Cow::Borrowed(text)
                }
            }
            Pass::Wildcard => {
                WILDCARD_RE.replace_all(text, |c: &Captures| format!("{prefix}{}", &c[1]))
            }
        }
    }
}

/// Prefix the name (capture group 2) of each `regex` match that is followed
/// by whitespace, one of `delimiters`, or the end of `text`.
fn prefix_delimited<'t>(
    text: &'t str,
    regex: &Regex,
    delimiters: &str,
    prefix: &Prefix,
) -> Cow<'t, str> {
    let mut out = String::new();
    let mut last = 0;
    for c in regex.captures_iter(text) {
        let Some(name) = c.get(2) else { continue };
        let delimited = text[name.end()..]
            .chars()
            .next()
            .map_or(true, |ch| ch.is_whitespace() || delimiters.contains(ch));
        if !delimited {
            continue;
        }
        out.push_str(&text[last..name.start()]);
        out.push_str(prefix.as_str());
        out.push_str(name.as_str());
        last = name.end();
    }
    if last == 0 {
        return Cow::Borrowed(text);
    }
    out.push_str(&text[last..]);
    Cow::Owned(out)
}

fn is_name_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '-' || ch == '_'
}

/// Prefix each whole property name `names` finds in `value`. Names inside a
/// longer identifier (`transform-box`, `-moz-transform`) and names directly
/// followed by a colon are skipped.
fn prefix_unassigned(value: &str, names: &Regex, prefix: &Prefix) -> String {
    let mut out = String::with_capacity(value.len());
    let mut last = 0;
    for m in names.find_iter(value) {
        let preceding = value[..m.start()].chars().next_back();
        let following = value[m.end()..].chars().next();
        if preceding.is_some_and(is_name_char)
            || following.is_some_and(|ch| ch == ':' || is_name_char(ch))
        {
            continue;
        }
        out.push_str(&value[last..m.start()]);
        out.push_str(prefix.as_str());
        out.push_str(m.as_str());
        last = m.end();
    }
    out.push_str(&value[last..]);
    out
}

/// An ordered list of compiled passes with their gates.
#[derive(Debug)]
pub(crate) struct Pipeline {
    passes: Vec<(Gate, Pass)>,
}

impl Pipeline {
    pub(crate) fn compile(steps: &[PipelineStep], caps: &Capabilities) -> Result<Self, PrefixError> {
        let mut passes = Vec::with_capacity(steps.len());
        for step in steps {
            if let Some(pass) = Pass::compile(step.step, caps)? {
                passes.push((step.gate, pass));
            }
        }
        Ok(Self { passes })
    }

    pub(crate) fn len(&self) -> usize {
        self.passes.len()
    }

    /// Run every admitted pass over `text`, in order.
    pub(crate) fn run(&self, text: &str, caps: &Capabilities, ctx: RunContext) -> String {
        let mut out = text.to_string();
        for (gate, pass) in &self.passes {
            if !gate.admits(ctx) {
                continue;
            }
            let rewritten = match pass.apply(&out, caps) {
                Cow::Owned(rewritten) => Some(rewritten),
                Cow::Borrowed(_) => None,
            };
            if let Some(rewritten) = rewritten {
                out = rewritten;
            }
        }
        out
    }
}
