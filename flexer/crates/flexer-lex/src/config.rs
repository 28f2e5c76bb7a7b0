//! Scanner configuration.
//!
//! A [`LexerConfig`] bundles everything that makes the generic scanner scan a
//! particular language: symbols, keywords, comment delimiters, quote bytes,
//! the kinds given to literals, and optional literal rule overrides. It is
//! assembled with [`LexerConfigBuilder`], validated once by
//! [`LexerConfigBuilder::build`], and then only borrowed.
//!
//! # Example
//!
//! ```
//! use flexer_lex::{LexerConfig, TokenKind};
//!
//! const LET: TokenKind = TokenKind(TokenKind::FIRST_CUSTOM.0);
//! const ARROW: TokenKind = TokenKind(TokenKind::FIRST_CUSTOM.0 + 1);
//!
//! let config = LexerConfig::builder()
//!     .keyword("let", LET)
//!     .symbol("->", ARROW)
//!     .symbol("=", TokenKind::punct(b'='))
//!     .line_comment("//")
//!     .block_comment("/*", "*/", true)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.symbols().len(), 2);
//! assert_eq!(config.keywords().get(b"let"), Some(LET));
//! ```

use std::fmt;

use flexer_util::{ConfigError, ConfigResult};
use static_assertions::assert_impl_all;

use crate::rules::{LiteralClass, LiteralRule};
use crate::table::{KeywordEntry, KeywordTable, SymbolEntry, SymbolTable};
use crate::token::TokenKind;

/// Block comment delimiters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockComment {
    /// Opening delimiter, e.g. `/*`.
    pub start: Vec<u8>,
    /// Closing delimiter, e.g. `*/`.
    pub end: Vec<u8>,
    /// Whether an opening delimiter inside the comment opens a nested one.
    pub nested: bool,
    /// Level fill byte. When set, a run of it may appear before the last
    /// byte of each delimiter, and a comment only closes at a closer with a
    /// run of the same length (Lua's `--[==[ ... ]==]`).
    pub level: Option<u8>,
}

/// Comment syntax.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommentConfig {
    /// Line comment prefix, e.g. `//` or `#`.
    pub line: Option<Vec<u8>>,
    /// Block comment delimiters.
    pub block: Option<BlockComment>,
}

/// Kinds assigned to identifier and literal tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LiteralKinds {
    /// Kind of non-keyword identifiers.
    pub identifier: TokenKind,
    /// Kind of number literals.
    pub number: TokenKind,
    /// Kind of string literals.
    pub string: TokenKind,
    /// Kind of character literals.
    pub character: TokenKind,
}

impl Default for LiteralKinds {
    fn default() -> Self {
        Self {
            identifier: TokenKind::IDENTIFIER,
            number: TokenKind::NUMBER,
            string: TokenKind::STRING,
            character: TokenKind::CHAR,
        }
    }
}

impl LiteralKinds {
    /// Kind prefilled for a literal of `class`.
    #[inline]
    pub fn for_class(&self, class: LiteralClass) -> TokenKind {
        match class {
            LiteralClass::Number => self.number,
            LiteralClass::String => self.string,
            LiteralClass::Character => self.character,
        }
    }
}

/// Optional overrides for the default literal rules.
#[derive(Default)]
pub struct LiteralRules {
    number: Option<Box<dyn LiteralRule>>,
    string: Option<Box<dyn LiteralRule>>,
    character: Option<Box<dyn LiteralRule>>,
}

impl LiteralRules {
    /// Returns the override installed for `class`, if any.
    #[inline]
    pub fn get(&self, class: LiteralClass) -> Option<&dyn LiteralRule> {
        match class {
            LiteralClass::Number => self.number.as_deref(),
            LiteralClass::String => self.string.as_deref(),
            LiteralClass::Character => self.character.as_deref(),
        }
    }

    fn set(&mut self, class: LiteralClass, rule: Box<dyn LiteralRule>) {
        let slot = match class {
            LiteralClass::Number => &mut self.number,
            LiteralClass::String => &mut self.string,
            LiteralClass::Character => &mut self.character,
        };
        *slot = Some(rule);
    }
}

impl fmt::Debug for LiteralRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = |rule: &Option<Box<dyn LiteralRule>>| {
            if rule.is_some() {
                "custom"
            } else {
                "default"
            }
        };
        f.debug_struct("LiteralRules")
            .field("number", &label(&self.number))
            .field("string", &label(&self.string))
            .field("character", &label(&self.character))
            .finish()
    }
}

/// A validated, immutable scanner configuration.
#[derive(Debug)]
pub struct LexerConfig {
    symbols: SymbolTable,
    keywords: KeywordTable,
    comments: CommentConfig,
    string_quotes: Vec<u8>,
    char_quotes: Vec<u8>,
    kinds: LiteralKinds,
    rules: LiteralRules,
}

assert_impl_all!(LexerConfig: Send, Sync);

impl LexerConfig {
    /// Starts a new configuration with no symbols, no keywords, no
    /// comments, `"` as the string quote and `'` as the character quote.
    pub fn builder() -> LexerConfigBuilder {
        LexerConfigBuilder::new()
    }

    /// The symbol table.
    #[inline]
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// The keyword table.
    #[inline]
    pub fn keywords(&self) -> &KeywordTable {
        &self.keywords
    }

    /// Comment syntax.
    #[inline]
    pub fn comments(&self) -> &CommentConfig {
        &self.comments
    }

    /// Kinds assigned to identifiers and literals.
    #[inline]
    pub fn kinds(&self) -> &LiteralKinds {
        &self.kinds
    }

    /// Literal rule overrides.
    #[inline]
    pub fn rules(&self) -> &LiteralRules {
        &self.rules
    }

    /// Bytes that open a string literal.
    #[inline]
    pub fn string_quotes(&self) -> &[u8] {
        &self.string_quotes
    }

    /// Bytes that open a character literal.
    #[inline]
    pub fn char_quotes(&self) -> &[u8] {
        &self.char_quotes
    }

    /// Returns the literal class `byte` opens as a quote, if any.
    ///
    /// String quotes take precedence when a byte is listed in both sets.
    #[inline]
    pub fn quote_class(&self, byte: u8) -> Option<LiteralClass> {
        if self.string_quotes.contains(&byte) {
            Some(LiteralClass::String)
        } else if self.char_quotes.contains(&byte) {
            Some(LiteralClass::Character)
        } else {
            None
        }
    }
}

/// Builder for [`LexerConfig`].
#[derive(Debug)]
pub struct LexerConfigBuilder {
    symbols: Vec<SymbolEntry>,
    keywords: Vec<KeywordEntry>,
    comments: CommentConfig,
    string_quotes: Vec<u8>,
    char_quotes: Vec<u8>,
    kinds: LiteralKinds,
    rules: LiteralRules,
}

impl Default for LexerConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LexerConfigBuilder {
    /// Creates a builder with the defaults described on
    /// [`LexerConfig::builder`].
    pub fn new() -> Self {
        Self {
            symbols: Vec::new(),
            keywords: Vec::new(),
            comments: CommentConfig::default(),
            string_quotes: vec![b'"'],
            char_quotes: vec![b'\''],
            kinds: LiteralKinds::default(),
            rules: LiteralRules::default(),
        }
    }

    /// Adds a symbol. A kind of [`TokenKind::SKIP`] discards matches.
    pub fn symbol(mut self, text: impl AsRef<[u8]>, kind: TokenKind) -> Self {
        self.symbols.push(SymbolEntry::new(text, kind));
        self
    }

    /// Adds several symbols.
    pub fn symbols<I, T>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = (T, TokenKind)>,
        T: AsRef<[u8]>,
    {
        self.symbols
            .extend(symbols.into_iter().map(|(text, kind)| SymbolEntry::new(text, kind)));
        self
    }

    /// Adds a keyword.
    pub fn keyword(mut self, word: impl AsRef<[u8]>, kind: TokenKind) -> Self {
        self.keywords.push(KeywordEntry::new(word, kind));
        self
    }

    /// Adds several keywords.
    pub fn keywords<I, T>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = (T, TokenKind)>,
        T: AsRef<[u8]>,
    {
        self.keywords
            .extend(keywords.into_iter().map(|(word, kind)| KeywordEntry::new(word, kind)));
        self
    }

    /// Sets the line comment prefix.
    pub fn line_comment(mut self, prefix: impl AsRef<[u8]>) -> Self {
        self.comments.line = Some(prefix.as_ref().to_vec());
        self
    }

    /// Sets the block comment delimiters.
    pub fn block_comment(
        mut self,
        start: impl AsRef<[u8]>,
        end: impl AsRef<[u8]>,
        nested: bool,
    ) -> Self {
        self.comments.block = Some(BlockComment {
            start: start.as_ref().to_vec(),
            end: end.as_ref().to_vec(),
            nested,
            level: None,
        });
        self
    }

    /// Sets non-nesting block comment delimiters with a level fill byte.
    ///
    /// With `("--[[", "]]", b'=')`, `--[=[` opens a level-one comment that
    /// only `]=]` closes.
    pub fn leveled_block_comment(
        mut self,
        start: impl AsRef<[u8]>,
        end: impl AsRef<[u8]>,
        fill: u8,
    ) -> Self {
        self.comments.block = Some(BlockComment {
            start: start.as_ref().to_vec(),
            end: end.as_ref().to_vec(),
            nested: false,
            level: Some(fill),
        });
        self
    }

    /// Replaces the comment syntax wholesale.
    pub fn comments(mut self, comments: CommentConfig) -> Self {
        self.comments = comments;
        self
    }

    /// Replaces the set of bytes that open string literals.
    pub fn string_quotes(mut self, quotes: impl AsRef<[u8]>) -> Self {
        self.string_quotes = quotes.as_ref().to_vec();
        self
    }

    /// Replaces the set of bytes that open character literals.
    pub fn char_quotes(mut self, quotes: impl AsRef<[u8]>) -> Self {
        self.char_quotes = quotes.as_ref().to_vec();
        self
    }

    /// Sets the kinds of identifiers and literals.
    pub fn kinds(mut self, kinds: LiteralKinds) -> Self {
        self.kinds = kinds;
        self
    }

    /// Overrides the number rule.
    pub fn number_rule(self, rule: impl LiteralRule + 'static) -> Self {
        self.rule(LiteralClass::Number, rule)
    }

    /// Overrides the string rule.
    pub fn string_rule(self, rule: impl LiteralRule + 'static) -> Self {
        self.rule(LiteralClass::String, rule)
    }

    /// Overrides the character rule.
    pub fn char_rule(self, rule: impl LiteralRule + 'static) -> Self {
        self.rule(LiteralClass::Character, rule)
    }

    /// Overrides the rule for `class`.
    pub fn rule(mut self, class: LiteralClass, rule: impl LiteralRule + 'static) -> Self {
        self.rules.set(class, Box::new(rule));
        self
    }

    /// Validates the tables and produces the configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for empty or duplicated symbols, empty or
    /// non-identifier keywords, empty comment delimiters, a nesting block
    /// comment whose delimiters are equal, a level fill byte that ends a
    /// block delimiter, a symbol starting with a quote
    /// byte, or a keyword or literal kind equal to [`TokenKind::EOF`] or
    /// [`TokenKind::INVALID`].
    pub fn build(self) -> ConfigResult<LexerConfig> {
        validate_comments(&self.comments)?;
        validate_kinds(&self.kinds)?;

        for entry in &self.symbols {
            let Some(&first) = entry.text().first() else {
                continue;
            };
            if self.string_quotes.contains(&first) || self.char_quotes.contains(&first) {
                return Err(ConfigError::QuoteShadowed {
                    text: String::from_utf8_lossy(entry.text()).into_owned(),
                    quote: char::from(first),
                });
            }
        }

        let symbols = SymbolTable::new(self.symbols)?;
        let keywords = KeywordTable::new(self.keywords)?;

        tracing::debug!(
            symbols = symbols.len(),
            keywords = keywords.len(),
            "built lexer configuration"
        );

        Ok(LexerConfig {
            symbols,
            keywords,
            comments: self.comments,
            string_quotes: self.string_quotes,
            char_quotes: self.char_quotes,
            kinds: self.kinds,
            rules: self.rules,
        })
    }
}

fn validate_kinds(kinds: &LiteralKinds) -> ConfigResult<()> {
    let fields = [
        ("identifier", kinds.identifier),
        ("number", kinds.number),
        ("string", kinds.string),
        ("character", kinds.character),
    ];
    for (name, kind) in fields {
        if kind.is_reserved() {
            return Err(ConfigError::ReservedKind {
                owner: format!("{} kind", name),
                kind: kind.0,
            });
        }
    }
    Ok(())
}

fn validate_comments(comments: &CommentConfig) -> ConfigResult<()> {
    if comments.line.as_ref().is_some_and(|prefix| prefix.is_empty()) {
        return Err(ConfigError::EmptyCommentDelimiter {
            which: "line comment",
        });
    }
    if let Some(block) = &comments.block {
        if block.start.is_empty() {
            return Err(ConfigError::EmptyCommentDelimiter {
                which: "block comment start",
            });
        }
        if block.end.is_empty() {
            return Err(ConfigError::EmptyCommentDelimiter {
                which: "block comment end",
            });
        }
        if block.nested && block.start == block.end {
            return Err(ConfigError::NestedSymmetricComment {
                delimiter: String::from_utf8_lossy(&block.start).into_owned(),
            });
        }
        if let Some(fill) = block.level {
            if block.start.last() == Some(&fill) || block.end.last() == Some(&fill) {
                return Err(ConfigError::LevelFillConflict {
                    fill: char::from(fill),
                });
            }
        }
    }
    Ok(())
}
