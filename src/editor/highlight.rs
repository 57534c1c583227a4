//! Regex-driven syntax highlighter.
//!
//! One [`Grammar`] per syntax mode, each a short ordered list of anchored
//! token rules. Rendering scans a line left to right: the first rule matching
//! at the cursor wins and emits a classed span; anything no rule claims is
//! escaped and emitted verbatim. This is deliberately line-oriented - a
//! grammar never carries state across lines.

use std::collections::HashMap;

use regex::Regex;

use crate::domain::SyntaxMode;

/// Token categories the grammars emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Comment,
    Str,
    Number,
    Literal,
    Ident,
    Punct,
}

impl TokenKind {
    /// CSS class the stylesheet styles this token with.
    pub fn class(self) -> &'static str {
        match self {
            Self::Comment => "hl-comment",
            Self::Str => "hl-string",
            Self::Number => "hl-number",
            Self::Literal => "hl-literal",
            Self::Ident => "hl-ident",
            Self::Punct => "hl-punct",
        }
    }
}

#[derive(Debug)]
struct Rule {
    kind: TokenKind,
    // Anchored with `^`; matched against the unconsumed tail of the line.
    pattern: Regex,
}

/// Ordered token rules for one syntax mode.
#[derive(Debug)]
pub struct Grammar {
    rules: Vec<Rule>,
}

impl Grammar {
    fn build(rules: &[(TokenKind, &str)]) -> Result<Self, regex::Error> {
        let rules = rules
            .iter()
            .map(|(kind, pattern)| {
                Ok(Rule {
                    kind: *kind,
                    pattern: Regex::new(pattern)?,
                })
            })
            .collect::<Result<Vec<_>, regex::Error>>()?;
        Ok(Self { rules })
    }

    pub fn json() -> Result<Self, regex::Error> {
        Self::build(&[
            (TokenKind::Str, r#"^"(?:\\.|[^"\\])*""#),
            (TokenKind::Number, r"^-?\d+(?:\.\d+)?(?:[eE][+-]?\d+)?"),
            (TokenKind::Literal, r"^(?:true|false|null)\b"),
            (TokenKind::Punct, r"^[{}\[\],:]"),
        ])
    }

    pub fn css() -> Result<Self, regex::Error> {
        Self::build(&[
            (TokenKind::Comment, r"^/\*.*?\*/"),
            // Unterminated comment runs to the end of the line.
            (TokenKind::Comment, r"^/\*.*"),
            (TokenKind::Str, r#"^"[^"]*"|^'[^']*'"#),
            (TokenKind::Number, r"^-?(?:\d+\.?\d*|\.\d+)(?:%|[a-z]+)?"),
            (TokenKind::Ident, r"^-?[a-zA-Z][a-zA-Z0-9_-]*"),
            (TokenKind::Punct, r"^[{}:;,()]"),
        ])
    }

    /// Grammar with no rules: everything renders as plain escaped text.
    pub fn plaintext() -> Self {
        Self { rules: Vec::new() }
    }
}

/// Grammar table plus the rendering step.
#[derive(Debug)]
pub struct Highlighter {
    grammars: HashMap<SyntaxMode, Grammar>,
}

impl Highlighter {
    pub fn new() -> Self {
        Self {
            grammars: HashMap::new(),
        }
    }

    pub fn register(&mut self, mode: SyntaxMode, grammar: Grammar) {
        self.grammars.insert(mode, grammar);
    }

    /// Render one line of `mode` content as escaped, span-wrapped markup.
    ///
    /// A mode with no registered grammar degrades to escaped plain text.
    pub fn render(&self, mode: SyntaxMode, line: &str) -> String {
        let Some(grammar) = self.grammars.get(&mode) else {
            return escape(line);
        };

        let mut out = String::with_capacity(line.len());
        let mut rest = line;
        'scan: while !rest.is_empty() {
            for rule in &grammar.rules {
                if let Some(m) = rule.pattern.find(rest) {
                    if m.end() > 0 {
                        out.push_str(&format!(
                            "<span class=\"{}\">{}</span>",
                            rule.kind.class(),
                            escape(m.as_str())
                        ));
                        rest = &rest[m.end()..];
                        continue 'scan;
                    }
                }
            }
            // No rule claims this position; emit one character as plain text.
            let width = rest.chars().next().map_or(1, char::len_utf8);
            out.push_str(&escape(&rest[..width]));
            rest = &rest[width..];
        }
        out
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

/// Minimal HTML escaping for text nodes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
    out
}
