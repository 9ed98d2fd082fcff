//! Tests for shred parsing and sheet reassembly

#[cfg(test)]
mod tests {
    use cursorgrid::PuzzleError;
    use cursorgrid::puzzles::shredded_paper::{PaperShred, solve};

    fn border() -> String {
        "█".repeat(25)
    }

    // Tests a full glyph run marks a border shred
    // Verified by requiring one glyph fewer
    #[test]
    fn test_border_shred() {
        let shred = PaperShred::parse(&border()).unwrap();

        assert!(shred.is_border());
    }

    // Tests a short glyph run is ordinary content
    // Verified by requiring only the first glyph to be a border glyph
    #[test]
    fn test_short_glyph_run_is_content() {
        let shred = PaperShred::parse("███ T rest").unwrap();

        assert!(!shred.is_border());
        assert_eq!(shred.indent(), 3);
        assert_eq!(shred.score(), 0);
        assert_eq!(shred.text(), "███ T rest");
    }

    // Tests indent counts characters, not bytes
    // Verified by counting bytes of the first token
    #[test]
    fn test_indent_counts_characters() {
        let shred = PaperShred::parse("▄▄▄▄ ▀x").unwrap();

        assert_eq!(shred.indent(), 4);
        assert_eq!(shred.score(), 11);
    }

    // Tests shreds without a scored token are rejected
    // Verified by defaulting unknown scores to zero
    #[test]
    fn test_unparseable_shreds() {
        for line in ["abc", "ab Zq", "ab  T"] {
            assert!(
                matches!(PaperShred::parse(line), Err(PuzzleError::InvalidInput { .. })),
                "accepted {line:?}"
            );
        }
    }

    // Tests shreds sort by indent then score
    // Verified by sorting on score before indent
    #[test]
    fn test_solve_orders_by_indent_then_score() {
        let lines = vec![
            border(),
            "xx C second".to_string(),
            "x O third".to_string(),
            "xx I first".to_string(),
            border(),
        ];

        assert_eq!(
            solve(&lines).unwrap(),
            "x O third\nxx I first\nxx C second"
        );
    }

    // Tests equal keys keep their input order
    // Verified by using an unstable sort
    #[test]
    fn test_solve_keeps_input_order_for_ties() {
        let lines = vec!["a T one".to_string(), "b T two".to_string()];

        assert_eq!(solve(&lines).unwrap(), "a T one\nb T two");
    }
}
