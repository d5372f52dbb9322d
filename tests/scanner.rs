#[cfg(test)]
mod scanner_tests {
    use pretty_assertions::assert_eq;

    use rox::scanner::*;
    use rox::token::*;

    fn assert_token_sequence(source: &str, expected: &[(TokenType, &str)]) {
        let scanner = Scanner::new(source);
        let tokens: Vec<_> = scanner.filter_map(Result::ok).collect();

        assert_eq!(tokens.len(), expected.len());

        for (actual, (expected_type, expected_lexeme)) in tokens.iter().zip(expected.iter()) {
            assert_eq!(actual.token_type, *expected_type);
            assert_eq!(actual.lexeme, *expected_lexeme);
        }
    }

    #[test]
    fn test_scanner_01_symbols() {
        assert_token_sequence(
            "({*.,+*})",
            &[
                (TokenType::LEFT_PAREN, "("),
                (TokenType::LEFT_BRACE, "{"),
                (TokenType::STAR, "*"),
                (TokenType::DOT, "."),
                (TokenType::COMMA, ","),
                (TokenType::PLUS, "+"),
                (TokenType::STAR, "*"),
                (TokenType::RIGHT_BRACE, "}"),
                (TokenType::RIGHT_PAREN, ")"),
                (TokenType::EOF, ""),
            ],
        );
    }

    #[test]
    fn test_scanner_02_two_char_operators_win() {
        assert_token_sequence(
            "!= ! == = <= < >= > /",
            &[
                (TokenType::BANG_EQUAL, "!="),
                (TokenType::BANG, "!"),
                (TokenType::EQUAL_EQUAL, "=="),
                (TokenType::EQUAL, "="),
                (TokenType::LESS_EQUAL, "<="),
                (TokenType::LESS, "<"),
                (TokenType::GREATER_EQUAL, ">="),
                (TokenType::GREATER, ">"),
                (TokenType::SLASH, "/"),
                (TokenType::EOF, ""),
            ],
        );
    }

    #[test]
    fn test_scanner_03_keywords_and_identifiers() {
        assert_token_sequence(
            "class orchid or _under fun2 nil",
            &[
                (TokenType::CLASS, "class"),
                (TokenType::IDENTIFIER, "orchid"),
                (TokenType::OR, "or"),
                (TokenType::IDENTIFIER, "_under"),
                (TokenType::IDENTIFIER, "fun2"),
                (TokenType::NIL, "nil"),
                (TokenType::EOF, ""),
            ],
        );
    }

    #[test]
    fn test_scanner_04_numbers_without_bare_dots() {
        let (tokens, errors) = Scanner::new("12.5 7. .5").scan_tokens();
        assert!(errors.is_empty());

        let kinds: Vec<TokenType> = tokens.iter().map(|t| t.token_type).collect();
        assert_eq!(
            kinds,
            vec![
                TokenType::NUMBER,
                TokenType::NUMBER,
                TokenType::DOT,
                TokenType::DOT,
                TokenType::NUMBER,
                TokenType::EOF,
            ]
        );

        assert_eq!(tokens[0].literal, Some(Literal::Number(12.5)));
        assert_eq!(tokens[1].literal, Some(Literal::Number(7.0)));
        assert_eq!(tokens[4].literal, Some(Literal::Number(5.0)));
    }

    #[test]
    fn test_scanner_05_comments_and_lines() {
        let source = "// nothing here\nvar a; // trailing\n\nprint a;";
        let (tokens, errors) = Scanner::new(source).scan_tokens();
        assert!(errors.is_empty());

        let lines: Vec<usize> = tokens.iter().map(|t| t.line).collect();
        assert_eq!(lines, vec![2, 2, 2, 4, 4, 4, 4]);
    }

    #[test]
    fn test_scanner_06_multiline_string() {
        let (tokens, errors) = Scanner::new("\"one\ntwo\" x").scan_tokens();
        assert!(errors.is_empty());

        assert_eq!(tokens[0].token_type, TokenType::STRING);
        assert_eq!(tokens[0].literal, Some(Literal::Str("one\ntwo".into())));
        assert_eq!(tokens[1].line, 2);
        assert_eq!(tokens.last().map(|t| t.line), Some(2));
    }

    #[test]
    fn test_scanner_07_unterminated_string() {
        let (tokens, errors) = Scanner::new("print \"abc\n").scan_tokens();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].to_string(), "[line 2] Error: Unterminated string.");

        let kinds: Vec<TokenType> = tokens.iter().map(|t| t.token_type).collect();
        assert_eq!(kinds, vec![TokenType::PRINT, TokenType::EOF]);
    }

    #[test]
    fn test_unexpected_chars_token_sequence() {
        let source = ",.$(#";
        let results: Vec<_> = Scanner::new(source).collect();

        // COMMA, DOT, error, LEFT_PAREN, error, EOF
        assert_eq!(results.len(), 6);
        assert!(matches!(&results[0], Ok(t) if t.token_type == TokenType::COMMA));
        assert!(matches!(&results[1], Ok(t) if t.token_type == TokenType::DOT));
        assert!(results[2].is_err());
        assert!(matches!(&results[3], Ok(t) if t.token_type == TokenType::LEFT_PAREN));
        assert!(results[4].is_err());
        assert!(matches!(&results[5], Ok(t) if t.token_type == TokenType::EOF));

        let messages: Vec<String> = results
            .iter()
            .filter_map(|r| r.as_ref().err().map(|e| e.to_string()))
            .collect();
        assert_eq!(
            messages,
            vec![
                "[line 1] Error: Unexpected character: $".to_string(),
                "[line 1] Error: Unexpected character: #".to_string(),
            ]
        );
    }

    #[test]
    fn test_scanner_08_multibyte_unexpected_character() {
        let (tokens, errors) = Scanner::new("a é b").scan_tokens();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].to_string(), "[line 1] Error: Unexpected character: é");
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn test_scanner_09_single_eof_and_fused() {
        let mut scanner = Scanner::new("");

        let eof = scanner.next();
        assert!(matches!(eof, Some(Ok(ref t)) if t.token_type == TokenType::EOF));
        assert!(scanner.next().is_none());
        assert!(scanner.next().is_none());
    }

    #[test]
    fn test_token_display() {
        let (tokens, _) = Scanner::new("1 \"hi\" foo").scan_tokens();
        let shown: Vec<String> = tokens.iter().map(ToString::to_string).collect();

        assert_eq!(
            shown,
            vec![
                "NUMBER 1 1.0",
                "STRING \"hi\" hi",
                "IDENTIFIER foo null",
                "EOF  null",
            ]
        );
    }

    #[test]
    fn test_scanner_10_large_integral_literal_keeps_trailing_zero() {
        let (tokens, errors) = Scanner::new("100000000000000000000 1.5 7").scan_tokens();
        assert!(errors.is_empty());

        let shown: Vec<String> = tokens.iter().map(ToString::to_string).collect();
        assert_eq!(
            shown,
            vec![
                "NUMBER 100000000000000000000 100000000000000000000.0",
                "NUMBER 1.5 1.5",
                "NUMBER 7 7.0",
                "EOF  null",
            ]
        );
    }

    #[test]
    fn test_scanner_11_keyword_literals_carry_no_value() {
        let (tokens, _) = Scanner::new("true false nil").scan_tokens();

        assert!(tokens.iter().all(|t| t.literal.is_none()));
        assert_eq!(tokens[0].to_string(), "TRUE true null");
    }
}
