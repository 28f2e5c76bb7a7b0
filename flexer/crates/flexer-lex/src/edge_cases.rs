//! Edge case tests for flexer-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, Lexer, LexerConfig, NumericValue, Position, SourceSpan, Token, TokenKind};

    const END: TokenKind = TokenKind(TokenKind::FIRST_CUSTOM.0);
    const EQ_EQ: TokenKind = TokenKind(TokenKind::FIRST_CUSTOM.0 + 1);

    fn config() -> LexerConfig {
        LexerConfig::builder()
            .keyword("end", END)
            .symbol("=", TokenKind::punct(b'='))
            .symbol("==", EQ_EQ)
            .symbol("+", TokenKind::punct(b'+'))
            .symbol(".", TokenKind::punct(b'.'))
            .line_comment("//")
            .block_comment("/*", "*/", true)
            .build()
            .unwrap()
    }

    fn lex_all(source: &str) -> Vec<Token> {
        tokenize(source, &config())
    }

    /// Scans to EOF, asserting on the way that every call made progress.
    fn lex_checked(source: &[u8], config: &LexerConfig) -> Vec<Token> {
        let mut lexer = Lexer::new(source, config);
        let mut tokens = Vec::new();
        loop {
            let before = lexer.offset();
            let token = lexer.next_token();
            if token.is_eof() {
                assert_eq!(lexer.offset(), source.len());
                break;
            }
            assert!(lexer.offset() > before, "no progress at offset {}", before);
            tokens.push(token);
        }
        tokens
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_single_char_ident() {
        let t = lex_all("x");
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].kind, TokenKind::IDENTIFIER);
        assert_eq!(t[0].span, SourceSpan::new(0, 1));
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let source = format!("{} = 1", name);
        let t = lex_all(&source);
        assert_eq!(t[0].span.len, 10000);
        assert_eq!(t[1].position, Position::new(1, 10002));
    }

    #[test]
    fn test_edge_keyword_prefix_and_superset() {
        let t = lex_all("end endx en _end");
        assert_eq!(t[0].kind, END);
        assert!(t[1..].iter().all(|t| t.kind == TokenKind::IDENTIFIER));
    }

    #[test]
    fn test_edge_equals_runs() {
        let kinds: Vec<_> = lex_all("= == === ====").iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::punct(b'='),
                EQ_EQ,
                EQ_EQ,
                TokenKind::punct(b'='),
                EQ_EQ,
                EQ_EQ,
            ]
        );
    }

    #[test]
    fn test_edge_hex_bounds() {
        let t = lex_all("0x0 0xFF 0xffffffffffffffff");
        assert_eq!(t[0].value, Some(NumericValue::Unsigned(0)));
        assert_eq!(t[1].value, Some(NumericValue::Unsigned(255)));
        assert_eq!(t[2].value, Some(NumericValue::Unsigned(u64::MAX)));
    }

    #[test]
    fn test_edge_hex_prefix_without_digits() {
        let source = "0x";
        let t = lex_all(source);
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].as_str(source), "0x");
        assert_eq!(t[0].value, Some(NumericValue::Unsigned(0)));
    }

    #[test]
    fn test_edge_binary() {
        let t = lex_all("0b0 0B1010");
        assert_eq!(t[1].value, Some(NumericValue::Unsigned(10)));
    }

    #[test]
    fn test_edge_dot_symbol_beats_leading_dot_number() {
        // With `.` configured as a symbol, `.5` is the symbol then a number.
        let t = lex_all(".5");
        assert_eq!(t[0].kind, TokenKind::punct(b'.'));
        assert_eq!(t[1].kind, TokenKind::NUMBER);
    }

    #[test]
    fn test_edge_empty_string() {
        let source = "\"\"";
        let t = lex_all(source);
        assert_eq!(t[0].kind, TokenKind::STRING);
        assert_eq!(t[0].span.len, 2);
    }

    #[test]
    fn test_edge_unterminated_string_at_end() {
        let source = "\"abc";
        let t = lex_all(source);
        assert_eq!(t.len(), 1);
        assert!(t[0].is_invalid());
        assert_eq!(t[0].span, SourceSpan::new(0, 4));
    }

    #[test]
    fn test_edge_unterminated_string_then_next_line() {
        let source = "\"abc\nend";
        let t = lex_all(source);
        assert!(t[0].is_invalid());
        assert_eq!(t[0].span.len, 4);
        assert_eq!(t[1].kind, END);
        assert_eq!(t[1].position, Position::new(2, 1));
    }

    #[test]
    fn test_edge_nested_comment_region() {
        let source = "/* a /* b */ c */";
        let config = config();
        let mut lexer = Lexer::new(source, &config);
        assert!(lexer.next_token().is_eof());
        assert_eq!(lexer.offset(), source.len());
    }

    #[test]
    fn test_edge_comment_delimiters_inside_line_comment() {
        let t = lex_all("// /* not a block\nx");
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].kind, TokenKind::IDENTIFIER);
    }

    #[test]
    fn test_edge_nul_bytes_are_data() {
        let config = config();
        let t = lex_checked(b"a\0b", &config);
        assert_eq!(t.len(), 3);
        assert!(t[1].is_invalid());
        assert_eq!(t[2].kind, TokenKind::IDENTIFIER);
    }

    #[test]
    fn test_edge_crlf_line_endings() {
        let t = lex_all("a\r\nb");
        assert_eq!(t[1].position, Position::new(2, 1));
    }

    #[test]
    fn test_edge_line_positions() {
        let t = lex_all("a\nb");
        assert_eq!(t[0].position, Position::new(1, 1));
        assert_eq!(t[1].position, Position::new(2, 1));
    }

    #[test]
    fn test_edge_all_bytes_make_progress() {
        let config = config();
        let source: Vec<u8> = (0..=255u8).collect();
        let tokens = lex_checked(&source, &config);
        assert!(!tokens.is_empty());
    }

    // ------------------------------------------------------------------------
    // PROPERTY-BASED TESTS - Using proptest for arbitrary inputs
    // ------------------------------------------------------------------------

    #[test]
    fn test_property_arbitrary_bytes_terminate() {
        use proptest::prelude::*;

        let config = config();
        proptest!(|(input in proptest::collection::vec(any::<u8>(), 0..256))| {
            let tokens = lex_checked(&input, &config);
            for token in &tokens {
                prop_assert!(!token.span.is_empty());
                prop_assert!(token.span.end() <= input.len());
            }
        });
    }

    #[test]
    fn test_property_spans_are_ordered_and_disjoint() {
        use proptest::prelude::*;

        let config = config();
        proptest!(|(input in "[a-z0-9 =+.\"/*\n]{0,120}")| {
            let tokens = tokenize(&input, &config);
            for pair in tokens.windows(2) {
                prop_assert!(pair[0].span.end() <= pair[1].span.offset);
                prop_assert!(pair[0].position < pair[1].position);
            }
        });
    }

    #[test]
    fn test_property_whitespace_only_is_eof() {
        use proptest::prelude::*;

        let config = config();
        proptest!(|(input in "[ \t\r\n\x0b\x0c]{0,64}")| {
            let mut lexer = Lexer::new(&input, &config);
            let token = lexer.next_token();
            prop_assert!(token.is_eof());
            prop_assert_eq!(token.span.offset, input.len());
        });
    }

    #[test]
    fn test_property_arbitrary_identifier_strings() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-zA-Z_][a-zA-Z0-9_]{0,100}")| {
            let tokens = lex_all(&input);
            prop_assert_eq!(tokens.len(), 1);
            let expected = if input == "end" { END } else { TokenKind::IDENTIFIER };
            prop_assert_eq!(tokens[0].kind, expected);
        });
    }

    #[test]
    fn test_property_arbitrary_decimal_number_strings() {
        use proptest::prelude::*;

        proptest!(|(value in any::<u64>())| {
            let input = value.to_string();
            let tokens = lex_all(&input);
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(tokens[0].value, Some(NumericValue::Unsigned(value)));
        });
    }

    #[test]
    fn test_property_arbitrary_hex_number_strings() {
        use proptest::prelude::*;

        proptest!(|(value in any::<u64>())| {
            let input = format!("0x{:x}_u64", value);
            let tokens = lex_all(&input);
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(tokens[0].span.len, input.len());
            prop_assert_eq!(tokens[0].value, Some(NumericValue::Unsigned(value)));
        });
    }

    #[test]
    fn test_property_arbitrary_string_literals() {
        use proptest::prelude::*;

        proptest!(|(input in "[^\"\\\\\\n]{0,100}")| {
            let source = format!("\"{}\"", input);
            let tokens = lex_all(&source);
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(tokens[0].kind, TokenKind::STRING);
            prop_assert_eq!(tokens[0].span.len, source.len());
        });
    }

    // ------------------------------------------------------------------------
    // STRESS TESTS - Performance and capacity boundaries
    // ------------------------------------------------------------------------

    #[test]
    fn test_stress_very_long_identifier_100k() {
        let source = "x".repeat(100_000);
        let tokens = lex_all(&source);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].span.len, 100_000);
    }

    #[test]
    fn test_stress_deep_comment_nesting() {
        let source = format!("{}{} x", "/*".repeat(10_000), "*/".repeat(10_000));
        let tokens = lex_all(&source);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::IDENTIFIER);
    }

    #[test]
    fn test_stress_many_tokens() {
        let source = "a + 1 ".repeat(10_000);
        let tokens = lex_all(&source);
        assert_eq!(tokens.len(), 30_000);
    }
}
