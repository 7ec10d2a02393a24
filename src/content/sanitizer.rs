use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::{NoExpand, Regex};
use serde::Deserialize;
use spdlog::warn;

use crate::error::GenerateError;

enum Pattern {
    Regex(Regex),
    Literal(&'static str),
}

/// A single substitution step of the body clean-up.
struct SanitizerRule {
    pattern: Pattern,
    replacement: &'static str,
}

impl SanitizerRule {
    fn regex(pattern: &str, replacement: &'static str) -> SanitizerRule {
        SanitizerRule {
            // Patterns are compile-time constants, covered by the tests below
            pattern: Pattern::Regex(Regex::new(pattern).unwrap()),
            replacement,
        }
    }

    fn remove(pattern: &str) -> SanitizerRule {
        Self::regex(pattern, "")
    }

    fn literal(pattern: &'static str, replacement: &'static str) -> SanitizerRule {
        SanitizerRule {
            pattern: Pattern::Literal(pattern),
            replacement,
        }
    }

    fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self.pattern {
            Pattern::Regex(ref re) => re.replace_all(text, NoExpand(self.replacement)),
            Pattern::Literal(lit) => {
                if text.contains(lit) {
                    Cow::Owned(text.replace(lit, self.replacement))
                } else {
                    Cow::Borrowed(text)
                }
            }
        }
    }
}

lazy_static! {
    // Order matters: the preformatted wrapper has to be unwrapped before the
    // remaining <pre> variants are simplified.
    // Every replacement is shorter than anything its pattern can match.
    static ref RULES: Vec<SanitizerRule> = vec![
        SanitizerRule::regex(
            r#"(?s)<div class="preformatted-block"[^>]*><label[^>]*>.*?</label><pre class="text">"#,
            "<pre>",
        ),
        SanitizerRule::literal("</pre></div>", "</pre>"),
        SanitizerRule::regex(r#"<pre class="text">"#, "<pre>"),

        // reader engagement
        SanitizerRule::remove(r#"(?is)<p(?:\s[^>]*)?>Thanks for reading.*?</p>"#),
        SanitizerRule::remove(r#"(?is)<div[^>]*class="[^"]*subscription[^"]*"[^>]*>.*?</div>"#),
        SanitizerRule::remove(r#"(?is)<button[^>]*subscribe[^>]*>.*?</button>"#),
        SanitizerRule::remove(r#"(?is)<a\s[^>]*subscribe[^>]*>.*?</a>"#),

        // audio embeds
        SanitizerRule::remove(r#"(?is)<iframe[^>]*spotify\.com[^>]*>.*?</iframe>"#),
        SanitizerRule::remove(r#"(?is)<div[^>]*class="[^"]*spotify[^"]*"[^>]*>.*?</div>"#),

        // "open image" affordances
        SanitizerRule::remove(r#"(?is)<button[^>]*>Open image.*?</button>"#),
        SanitizerRule::remove(r#"(?is)<a\s[^>]*class="[^"]*image-link[^"]*"[^>]*>\s*<button[^>]*>.*?</button>\s*</a>"#),
        SanitizerRule::remove(r#"(?is)<div[^>]*class="[^"]*image-button[^"]*"[^>]*>.*?</div>"#),
    ];
}

/// Applies the generic rules until the text stops changing.
/// Terminates since every firing rule strictly shortens the text.
pub fn apply_rules(raw: &str) -> String {
    let mut current = raw.to_string();
    loop {
        let mut next = current.clone();
        for rule in RULES.iter() {
            next = rule.apply(&next).into_owned();
        }
        if next == current {
            return next;
        }
        current = next;
    }
}

/// Exact-text correction for a single post.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Fixup {
    pub slug: String,
    pub find: String,
    pub replace: String,
}

impl Fixup {
    pub fn new(slug: &str, find: &str, replace: &str) -> Fixup {
        Fixup {
            slug: slug.to_string(),
            find: find.to_string(),
            replace: replace.to_string(),
        }
    }
}

pub struct FixupTable {
    entries: Vec<Fixup>,
}

impl Default for FixupTable {
    fn default() -> Self {
        FixupTable {
            entries: vec![
                // The leading spaces of the section marker get lost upstream
                Fixup::new("another-arctic", "<pre>I.\n\n", "<pre>      I.\n\n"),
            ],
        }
    }
}

impl FixupTable {
    pub fn empty() -> FixupTable {
        FixupTable { entries: vec![] }
    }

    /// Adds a fix-up. Rejects entries which would match their own output again.
    pub fn push(&mut self, fixup: Fixup) -> Result<(), GenerateError> {
        if fixup.find.is_empty() || fixup.replace.contains(&fixup.find) {
            return Err(GenerateError::Fixup { slug: fixup.slug });
        }
        self.entries.push(fixup);
        Ok(())
    }

    pub fn extend(&mut self, fixups: impl IntoIterator<Item = Fixup>) -> Result<(), GenerateError> {
        for fixup in fixups {
            self.push(fixup)?;
        }
        Ok(())
    }

    pub fn apply(&self, slug: &str, content: String) -> String {
        self.entries.iter()
            .filter(|f| f.slug == slug)
            .fold(content, |acc, f| acc.replace(&f.find, &f.replace))
    }
}

/// Upper bound on rule + fix-up rounds; fix-ups can undo each other.
const MAX_PASSES: usize = 32;

pub struct Sanitizer {
    fixups: FixupTable,
}

impl Sanitizer {
    pub fn new(fixups: FixupTable) -> Sanitizer {
        Sanitizer { fixups }
    }

    /// Runs the generic rules and the fix-ups of `slug` until the text settles.
    pub fn sanitize(&self, slug: &str, raw: &str) -> String {
        let mut current = self.fixups.apply(slug, apply_rules(raw));
        for _ in 1..MAX_PASSES {
            let next = self.fixups.apply(slug, apply_rules(&current));
            if next == current {
                return next;
            }
            current = next;
        }
        warn!("Fix-ups for {} keep changing the content, stopped after {} passes", slug, MAX_PASSES);
        current
    }
}
