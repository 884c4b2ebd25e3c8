//! CLDR pattern compilation.
//!
//! A pattern string mixes literal text with *fields*: runs of one repeated
//! symbol character whose run length selects padding or name length
//! downstream. One grammar serves both codecs — `yyyy-MM-dd` and `#,##0.00`
//! compile through the same scanner and the number and date/time codecs
//! agree on the token representation.
//!
//! Compilation is pure, locale-independent and idempotent, so a compiled
//! pattern can be cached by its source string and shared freely.

/// One token of a compiled pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternToken {
    Literal(String),
    /// `symbol` repeated `width` times in the source pattern.
    Field { symbol: char, width: usize },
}

/// An immutable compiled pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPattern {
    tokens: Vec<PatternToken>,
}

impl CompiledPattern {
    pub fn tokens(&self) -> &[PatternToken] {
        &self.tokens
    }
}

/// Field symbols: every ASCII letter (date/time fields), the digits and `#`
/// (number placeholders). Anything else is literal text.
fn is_field_symbol(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '#'
}

/// Compile a pattern string.
///
/// Runs of one field symbol become a single [`PatternToken::Field`];
/// everything else accumulates into coalesced literals. Text between ASCII
/// apostrophes is literal, with `''` as an escaped apostrophe both inside
/// and outside quoted runs. Symbols the codecs do not recognize still
/// compile (they may be rejected later); compilation itself never fails.
///
/// # Example
/// ```
/// use glotta::{compile, PatternToken};
///
/// let compiled = compile("yyyy-MM-dd");
/// assert_eq!(compiled.tokens()[0], PatternToken::Field { symbol: 'y', width: 4 });
/// assert_eq!(compiled.tokens()[1], PatternToken::Literal("-".to_string()));
/// ```
pub fn compile(pattern: &str) -> CompiledPattern {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\'' {
            if chars.peek() == Some(&'\'') {
                literal.push('\'');
                chars.next();
                continue;
            }
            // Quoted run: verbatim until the closing apostrophe; an
            // unterminated quote swallows the rest of the pattern.
            loop {
                match chars.next() {
                    None => break,
                    Some('\'') => {
                        if chars.peek() == Some(&'\'') {
                            literal.push('\'');
                            chars.next();
                        } else {
                            break;
                        }
                    }
                    Some(quoted) => literal.push(quoted),
                }
            }
        } else if is_field_symbol(c) {
            if !literal.is_empty() {
                tokens.push(PatternToken::Literal(std::mem::take(&mut literal)));
            }
            let mut width = 1;
            while chars.peek() == Some(&c) {
                width += 1;
                chars.next();
            }
            tokens.push(PatternToken::Field { symbol: c, width });
        } else {
            literal.push(c);
        }
    }
    if !literal.is_empty() {
        tokens.push(PatternToken::Literal(literal));
    }

    CompiledPattern { tokens }
}
