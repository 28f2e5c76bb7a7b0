//! Symbol and keyword tables.
//!
//! Both tables are built once from the configuration and only read during a
//! scan. The symbol table answers "which configured symbol is the longest
//! prefix of the remaining input"; the keyword table answers "is this
//! identifier reserved".

use flexer_util::{ConfigError, ConfigResult, FxHashMap};

use crate::ascii::{is_ident_continue, is_ident_start};
use crate::token::TokenKind;

/// A fixed multi-byte (or single-byte) symbol and the kind it produces.
///
/// A kind of [`TokenKind::SKIP`] means the symbol is recognized and then
/// discarded, as if it were whitespace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolEntry {
    text: Box<[u8]>,
    kind: TokenKind,
}

impl SymbolEntry {
    /// Creates a symbol entry.
    pub fn new(text: impl AsRef<[u8]>, kind: TokenKind) -> Self {
        Self {
            text: text.as_ref().into(),
            kind,
        }
    }

    /// Creates a symbol that is recognized and discarded.
    pub fn skip(text: impl AsRef<[u8]>) -> Self {
        Self::new(text, TokenKind::SKIP)
    }

    /// The literal symbol text.
    #[inline]
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    /// The kind emitted on a match.
    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Returns true if a match is discarded instead of emitted.
    #[inline]
    pub fn is_skip(&self) -> bool {
        self.kind == TokenKind::SKIP
    }
}

/// A reserved word and the kind it produces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeywordEntry {
    word: Box<[u8]>,
    kind: TokenKind,
}

impl KeywordEntry {
    /// Creates a keyword entry.
    pub fn new(word: impl AsRef<[u8]>, kind: TokenKind) -> Self {
        Self {
            word: word.as_ref().into(),
            kind,
        }
    }

    /// The exact word.
    #[inline]
    pub fn word(&self) -> &[u8] {
        &self.word
    }

    /// The kind emitted for the word.
    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }
}

/// Symbols bucketed by first byte for longest-match lookup.
///
/// Each bucket holds indices into the entry list ordered longest first, so
/// the first entry that prefixes the input is the longest match.
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    entries: Vec<SymbolEntry>,
    buckets: FxHashMap<u8, Vec<usize>>,
}

impl SymbolTable {
    /// Validates `entries` and builds the table.
    ///
    /// Rejects empty symbols and symbols registered twice; two entries with
    /// the same text are the only way two equal-length matches could arise.
    pub fn new(entries: Vec<SymbolEntry>) -> ConfigResult<Self> {
        let mut seen: FxHashMap<&[u8], usize> = FxHashMap::default();
        for (index, entry) in entries.iter().enumerate() {
            if entry.text.is_empty() {
                return Err(ConfigError::EmptySymbol { index });
            }
            if let Some(&first) = seen.get(entry.text()) {
                return Err(ConfigError::DuplicateSymbol {
                    text: String::from_utf8_lossy(entry.text()).into_owned(),
                    first,
                    second: index,
                });
            }
            seen.insert(entry.text(), index);
        }

        let mut buckets: FxHashMap<u8, Vec<usize>> = FxHashMap::default();
        for (index, entry) in entries.iter().enumerate() {
            buckets.entry(entry.text[0]).or_default().push(index);
        }
        for bucket in buckets.values_mut() {
            // Stable, so equal lengths keep configuration order.
            bucket.sort_by(|&a, &b| entries[b].text.len().cmp(&entries[a].text.len()));
        }

        Ok(Self { entries, buckets })
    }

    /// Returns the longest configured symbol that prefixes `input`.
    ///
    /// # Example
    ///
    /// ```
    /// use flexer_lex::table::{SymbolEntry, SymbolTable};
    /// use flexer_lex::TokenKind;
    ///
    /// let table = SymbolTable::new(vec![
    ///     SymbolEntry::new("=", TokenKind::punct(b'=')),
    ///     SymbolEntry::new("==", TokenKind(300)),
    /// ])
    /// .unwrap();
    ///
    /// let entry = table.longest_match(b"== 1").unwrap();
    /// assert_eq!(entry.kind(), TokenKind(300));
    /// assert!(table.longest_match(b"+").is_none());
    /// ```
    #[inline]
    pub fn longest_match(&self, input: &[u8]) -> Option<&SymbolEntry> {
        let first = input.first()?;
        self.buckets
            .get(first)?
            .iter()
            .map(|&index| &self.entries[index])
            .find(|entry| input.starts_with(entry.text()))
    }

    /// All entries in configuration order.
    pub fn entries(&self) -> &[SymbolEntry] {
        &self.entries
    }

    /// Number of configured symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no symbols are configured.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

}

/// Exact-match reserved words.
#[derive(Clone, Debug, Default)]
pub struct KeywordTable {
    entries: Vec<KeywordEntry>,
    map: FxHashMap<Box<[u8]>, TokenKind>,
}

impl KeywordTable {
    /// Validates `entries` and builds the table.
    ///
    /// A keyword must be identifier-shaped, since it is only ever compared
    /// against a complete identifier run, and its kind must not be reserved.
    /// When a word is listed twice the first entry wins.
    pub fn new(entries: Vec<KeywordEntry>) -> ConfigResult<Self> {
        let mut map = FxHashMap::default();
        for (index, entry) in entries.iter().enumerate() {
            let word = entry.word();
            let Some((&head, tail)) = word.split_first() else {
                return Err(ConfigError::EmptyKeyword { index });
            };
            if !is_ident_start(head) || !tail.iter().all(|&b| is_ident_continue(b)) {
                return Err(ConfigError::KeywordNotIdentifier {
                    word: String::from_utf8_lossy(word).into_owned(),
                });
            }
            if entry.kind.is_reserved() {
                return Err(ConfigError::ReservedKind {
                    owner: format!("keyword {:?}", String::from_utf8_lossy(word)),
                    kind: entry.kind.0,
                });
            }
            map.entry(entry.word.clone()).or_insert(entry.kind);
        }
        Ok(Self { entries, map })
    }

    /// Looks up a complete identifier.
    #[inline]
    pub fn get(&self, ident: &[u8]) -> Option<TokenKind> {
        self.map.get(ident).copied()
    }

    /// All entries in configuration order.
    pub fn entries(&self) -> &[KeywordEntry] {
        &self.entries
    }

    /// Number of configured keywords, duplicates included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no keywords are configured.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
