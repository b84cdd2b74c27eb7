//! Candidate tables: the CSS features that may need a prefix, and the
//! declarations or rules used to test each one.

/// A value function candidate and the declaration that tests it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionCandidate {
    pub name: &'static str,
    pub property: &'static str,
    pub params: &'static str,
}

impl FunctionCandidate {
    /// Test value, optionally prefixed: `-webkit-calc(1px + 5%)`.
    pub fn value(&self, prefix: &str) -> String {
        format!("{prefix}{}({})", self.name, self.params)
    }
}

const GRADIENT_PROPERTY: &str = "background-image";
const GRADIENT_PARAMS: &str = "red, teal";

pub const FUNCTIONS: &[FunctionCandidate] = &[
    FunctionCandidate {
        name: "linear-gradient",
        property: GRADIENT_PROPERTY,
        params: GRADIENT_PARAMS,
    },
    FunctionCandidate {
        name: "calc",
        property: "width",
        params: "1px + 5%",
    },
    FunctionCandidate {
        name: "element",
        property: "background-image",
        params: "#foo",
    },
    FunctionCandidate {
        name: "cross-fade",
        property: "background-image",
        params: "url(a.png), url(b.png), 50%",
    },
    FunctionCandidate {
        name: "image-set",
        property: "background-image",
        params: "url(a.png) 1x, url(b.png) 2x",
    },
    FunctionCandidate {
        name: "repeating-linear-gradient",
        property: GRADIENT_PROPERTY,
        params: GRADIENT_PARAMS,
    },
    FunctionCandidate {
        name: "repeating-radial-gradient",
        property: GRADIENT_PROPERTY,
        params: GRADIENT_PARAMS,
    },
    FunctionCandidate {
        name: "radial-gradient",
        property: GRADIENT_PROPERTY,
        params: GRADIENT_PARAMS,
    },
];

/// Keyword → property used to test it. The keyword is prefixed wherever it
/// appears, not only in that property.
pub const KEYWORDS: &[(&str, &str)] = &[
    ("initial", "color"),
    ("grab", "cursor"),
    ("grabbing", "cursor"),
    ("zoom-in", "cursor"),
    ("zoom-out", "cursor"),
    ("box", "display"),
    ("flexbox", "display"),
    ("inline-flexbox", "display"),
    ("flex", "display"),
    ("inline-flex", "display"),
    ("grid", "display"),
    ("inline-grid", "display"),
    ("max-content", "width"),
    ("min-content", "width"),
    ("fit-content", "width"),
    ("fill-available", "width"),
    ("contain-floats", "width"),
];

/// Selector spelling → standard spelling it stands for (`None`: itself).
pub const SELECTORS: &[(&str, Option<&str>)] = &[
    (":any-link", None),
    ("::backdrop", None),
    (":fullscreen", None),
    (":full-screen", Some(":fullscreen")),
    ("::placeholder", None),
    (":placeholder", Some("::placeholder")),
    ("::input-placeholder", Some("::placeholder")),
    (":input-placeholder", Some("::placeholder")),
    (":read-only", None),
    (":read-write", None),
    ("::selection", None),
];

/// At-rule name → parameter needed for a minimal valid rule.
pub const AT_RULES: &[(&str, Option<&str>)] = &[
    ("keyframes", Some("name")),
    ("viewport", None),
    ("document", Some("regexp(\".\")")),
];
