//! Property-based tests for template_logger using proptest

use proptest::prelude::*;
use template_logger::prelude::*;
use template_logger::{render_template, tokens, DEFAULT_TEMPLATE, TOKEN_MESSAGE};

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
        Just(LogLevel::Critical),
    ]
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Test that LogLevel string conversions roundtrip correctly
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let as_str = level.to_str();
        let parsed: LogLevel = as_str.parse().unwrap();
        assert_eq!(level, parsed);
    }

    /// Test that every level has a fixed name, never a fallback
    #[test]
    fn test_log_level_name_is_total(level in any_level()) {
        let name = level.to_str();
        assert!(["DEBUG", "INFO", "WARN", "ERROR", "CRITICAL"].contains(&name));
        assert_ne!(name, "UNKNOWN");
    }

    /// Test that LogLevel ordering is consistent with the numeric values
    #[test]
    fn test_log_level_ordering(level1 in any_level(), level2 in any_level()) {
        let val1 = level1 as u8;
        let val2 = level2 as u8;

        assert_eq!(level1 <= level2, val1 <= val2);
        assert_eq!(level1 < level2, val1 < val2);
    }

    /// Test that LogLevel Display matches to_str
    #[test]
    fn test_log_level_display(level in any_level()) {
        assert_eq!(format!("{}", level), level.to_str());
    }

    /// Test that parsing accepts case-insensitive input including aliases
    #[test]
    fn test_log_level_case_insensitive(use_lower in any::<bool>()) {
        let spellings = vec![
            ("DEBUG", LogLevel::Debug),
            ("INFO", LogLevel::Info),
            ("WARN", LogLevel::Warn),
            ("WARNING", LogLevel::Warn),
            ("ERROR", LogLevel::Error),
            ("CRITICAL", LogLevel::Critical),
            ("FATAL", LogLevel::Critical),
        ];

        for (spelling, expected) in spellings {
            let input = if use_lower {
                spelling.to_lowercase()
            } else {
                spelling.to_string()
            };

            let parsed: std::result::Result<LogLevel, String> = input.parse();
            assert_eq!(parsed, Ok(expected), "Failed to parse: {}", input);
        }
    }

    /// Test that FromStr handles invalid input gracefully
    #[test]
    fn test_log_level_invalid_parse(invalid_str in "[xyzq0-9]+") {
        let result: std::result::Result<LogLevel, String> = invalid_str.parse();
        assert!(result.is_err(),
                "Expected parse error for '{}', got: {:?}", invalid_str, result);
    }
}

// ============================================================================
// Token Replacement Tests
// ============================================================================

proptest! {
    /// Test that exist is true exactly when replacing with "" changes the input
    #[test]
    fn test_exist_agrees_with_replace(input in ".*", token in ".{0,6}") {
        let changed = tokens::replace(&input, &token, "") != input;
        assert_eq!(tokens::exist(&input, &token), changed,
                   "exist and replace disagree for input={:?} token={:?}", input, token);
    }

    /// Test that replace is idempotent when the replacement cannot
    /// reintroduce the token (disjoint alphabets guarantee that here)
    #[test]
    fn test_replace_idempotent(
        input in ".*",
        token in "[a-z]{1,4}",
        replacement in "[A-Z0-9]{0,6}",
    ) {
        let once = tokens::replace(&input, &token, &replacement);
        let twice = tokens::replace(&once, &token, &replacement);
        assert_eq!(once, twice);
    }

    /// Test that replace terminates even when the replacement contains
    /// the token, and grows the string accordingly
    #[test]
    fn test_replace_terminates_with_self_referential_replacement(
        input in ".{0,40}",
        token in "[a-z]{1,3}",
    ) {
        let replacement = format!("<{}>", token);
        let output = tokens::replace(&input, &token, &replacement);

        // Each occurrence grew by two characters; absence leaves the input alone
        if tokens::exist(&input, &token) {
            assert!(output.len() > input.len());
        } else {
            assert_eq!(output, input);
        }
    }

    /// Test that after deleting a token, the token is gone unless the
    /// surrounding text reassembles it
    #[test]
    fn test_replace_removes_all_occurrences(
        prefix in "[a-m ]{0,10}",
        suffix in "[a-m ]{0,10}",
        token in "[n-z]{1,4}",
    ) {
        let input = format!("{}{}{}{}{}", prefix, token, suffix, token, prefix);
        let output = tokens::replace(&input, &token, "");
        assert!(!tokens::exist(&output, &token));
        assert_eq!(output, format!("{}{}{}", prefix, suffix, prefix));
    }
}

// ============================================================================
// Template Rendering Tests
// ============================================================================

proptest! {
    /// Test that a template built around %message% renders to exactly
    /// prefix + message + suffix when nothing else looks like a token
    #[test]
    fn test_render_substitutes_message_exactly(
        prefix in "[^%]{0,20}",
        suffix in "[^%]{0,20}",
        message in "[^%]{1,40}",
    ) {
        let identity = StaticIdentity::new("alice", "web-1");
        let template = format!("{}{}{}", prefix, TOKEN_MESSAGE, suffix);

        let output = render_template(&template, "t", "INFO", &message, &identity);
        assert_eq!(output, format!("{}{}{}", prefix, message, suffix));
        assert!(!output.contains(TOKEN_MESSAGE));
    }

    /// Test that rendering never panics on arbitrary templates and messages
    #[test]
    fn test_render_never_panics(template in ".*", message in ".*") {
        let identity = StaticIdentity::new("alice", "web-1");
        let _ = render_template(&template, "2024-01-15 09:30:00", "INFO", &message, &identity);
    }

    /// Test that templates without a percent sign render unchanged
    #[test]
    fn test_render_without_tokens_is_identity(template in "[^%]*") {
        let identity = StaticIdentity::new("alice", "web-1");
        let output = render_template(&template, "t", "INFO", "m", &identity);
        assert_eq!(output, template);
    }

    /// Test that the formatter accepts exactly the templates carrying %message%
    #[test]
    fn test_formatter_validation(
        prefix in "[^%]{0,20}",
        suffix in "[^%]{0,20}",
    ) {
        let with_message = format!("{}{}{}", prefix, TOKEN_MESSAGE, suffix);
        assert!(MessageFormatter::with_template(with_message).is_ok());

        let without_message = format!("{}{}", prefix, suffix);
        let mut formatter = MessageFormatter::new();
        let result = formatter.set_template(without_message);
        assert!(result.is_err());
        assert_eq!(formatter.template(), DEFAULT_TEMPLATE,
                   "Rejected template must leave the active one unchanged");
    }
}

// ============================================================================
// LogText Tests
// ============================================================================

proptest! {
    /// Test that the character count always matches the text
    #[test]
    fn test_log_text_length_invariant(text in ".*") {
        let log_text = LogText::from(text.as_str());
        assert_eq!(log_text.len(), text.chars().count());
        assert_eq!(log_text.as_str(), text);
    }

    /// Test that appending keeps text and count in step
    #[test]
    fn test_log_text_append_invariant(base in ".*", extra in ".*", c in any::<char>()) {
        let mut log_text = LogText::from(base.as_str());
        log_text += extra.as_str();
        log_text += c;

        assert_eq!(log_text.len(), log_text.as_str().chars().count());
        assert_eq!(
            log_text.as_str(),
            format!("{}{}{}", base, extra, c)
        );
    }
}

// ============================================================================
// Serialization Tests
// ============================================================================

proptest! {
    /// Test that LogLevel JSON serialization roundtrips
    #[test]
    fn test_log_level_json_roundtrip(level in any_level()) {
        let json_str = serde_json::to_string(&level).expect("serialize LogLevel");
        let deserialized: LogLevel = serde_json::from_str(&json_str).expect("deserialize LogLevel");
        assert_eq!(deserialized, level);
    }

    /// Test that LogMessage JSON serialization roundtrips
    #[test]
    fn test_log_message_json_roundtrip(message in ".*", level in any_level()) {
        let original = LogMessage::new(level, message.as_str());
        let json_str = serde_json::to_string(&original).expect("serialize LogMessage");
        let deserialized: LogMessage = serde_json::from_str(&json_str).expect("deserialize LogMessage");

        assert_eq!(deserialized.level, original.level);
        assert_eq!(deserialized.text, original.text);
        assert_eq!(deserialized.timestamp, original.timestamp);
    }
}
