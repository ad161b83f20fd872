pub mod builder;
pub mod classify;
pub mod inline;
pub mod slug;

use crate::models::block::ParsedDocument;
use builder::BlockBuilder;
use classify::LineClassifier;

/// Parses a raw post body into ordered blocks plus the derived table of
/// contents.
///
/// Total over all input strings: there is no error case, and malformed
/// constructs degrade (malformed images are dropped, unterminated fences run
/// to end of input). Each call operates on its own input and produces a
/// fresh result, so concurrent parses need no coordination.
pub fn parse_document(input: &str) -> ParsedDocument {
    let classifier = LineClassifier;
    let mut builder = BlockBuilder::new();

    for line in input.lines() {
        builder.push(&classifier.classify(line));
    }

    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::block::{Block, CalloutKind};
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_input_parses_to_nothing() {
        let doc = parse_document("");
        assert!(doc.blocks.is_empty());
        assert!(doc.toc.is_empty());
    }

    #[test]
    fn blank_lines_are_separators_not_blocks() {
        let doc = parse_document("\n\nfyrsta\n\n\nönnur\n\n");
        assert_eq!(
            doc.blocks,
            vec![
                Block::Paragraph {
                    text: "fyrsta".to_string()
                },
                Block::Paragraph {
                    text: "önnur".to_string()
                },
            ]
        );
    }

    #[test]
    fn paragraph_joins_consecutive_text_lines_with_single_space() {
        let doc = parse_document("fyrsta lína\nönnur lína\nþriðja lína");
        assert_eq!(
            doc.blocks,
            vec![Block::Paragraph {
                text: "fyrsta lína önnur lína þriðja lína".to_string()
            }]
        );
    }

    #[test]
    fn heading_interrupts_paragraph() {
        let doc = parse_document("texti\n## Kafli\nmeira");
        assert_eq!(doc.blocks.len(), 3);
        assert!(matches!(&doc.blocks[1], Block::Heading { level: 2, .. }));
    }

    #[test]
    fn callout_joins_plain_continuation_lines() {
        let doc = parse_document("💡 fyrsta lína\nframhald í annarri\n\neftir");
        assert_eq!(
            doc.blocks[0],
            Block::Callout {
                kind: CalloutKind::Tip,
                text: "fyrsta lína framhald í annarri".to_string(),
            }
        );
        assert_eq!(
            doc.blocks[1],
            Block::Paragraph {
                text: "eftir".to_string()
            }
        );
    }

    #[test]
    fn list_right_after_callout_is_its_own_block() {
        let doc = parse_document("💡 ábending\n- fyrsti liður\n- annar liður");
        assert_eq!(
            doc.blocks,
            vec![
                Block::Callout {
                    kind: CalloutKind::Tip,
                    text: "ábending".to_string(),
                },
                Block::List {
                    items: vec!["fyrsti liður".to_string(), "annar liður".to_string()],
                },
            ]
        );
    }

    #[test]
    fn back_to_back_callouts_become_distinct_blocks() {
        let doc = parse_document("💡 fyrsta ábending\n⚠️ viðvörun strax á eftir");
        assert_eq!(
            doc.blocks,
            vec![
                Block::Callout {
                    kind: CalloutKind::Tip,
                    text: "fyrsta ábending".to_string(),
                },
                Block::Callout {
                    kind: CalloutKind::Warning,
                    text: "viðvörun strax á eftir".to_string(),
                },
            ]
        );
    }

    #[test]
    fn heading_terminates_callout() {
        let doc = parse_document("ℹ️ athugasemd\n## Næsti kafli");
        assert_eq!(doc.blocks.len(), 2);
        assert!(matches!(&doc.blocks[0], Block::Callout { .. }));
        assert!(matches!(&doc.blocks[1], Block::Heading { .. }));
    }

    #[test]
    fn code_fence_preserves_lines_verbatim() {
        let doc = parse_document("```\nlet x = 1;\n\n    indent(x);\n```");
        assert_eq!(
            doc.blocks,
            vec![Block::CodeBlock {
                code: "let x = 1;\n\n    indent(x);".to_string()
            }]
        );
    }

    #[test]
    fn unterminated_fence_runs_to_end_of_input() {
        let doc = parse_document("```\nhalf a block\nstill code");
        assert_eq!(
            doc.blocks,
            vec![Block::CodeBlock {
                code: "half a block\nstill code".to_string()
            }]
        );
    }

    #[test]
    fn quote_lines_are_separate_blocks() {
        let doc = parse_document("> fyrsta\n> önnur");
        assert_eq!(
            doc.blocks,
            vec![
                Block::Quote {
                    text: "fyrsta".to_string()
                },
                Block::Quote {
                    text: "önnur".to_string()
                },
            ]
        );
    }

    #[test]
    fn list_accumulates_contiguous_marker_lines_only() {
        let doc = parse_document("- einn\n* tveir\n- þrír\n\n- nýr listi");
        assert_eq!(
            doc.blocks,
            vec![
                Block::List {
                    items: vec!["einn".to_string(), "tveir".to_string(), "þrír".to_string()],
                },
                Block::List {
                    items: vec!["nýr listi".to_string()],
                },
            ]
        );
    }

    #[test]
    fn malformed_image_emits_no_block() {
        let doc = parse_document("fyrir\n![brotið](án endis\neftir");
        assert_eq!(
            doc.blocks,
            vec![
                Block::Paragraph {
                    text: "fyrir".to_string()
                },
                Block::Paragraph {
                    text: "eftir".to_string()
                },
            ]
        );
    }

    #[test]
    fn level_four_headings_stay_out_of_the_toc() {
        let doc = parse_document("## Tveir\n### Þrír\n#### Fjórir");
        assert_eq!(doc.blocks.len(), 3);
        assert_eq!(doc.toc.len(), 2);
        assert_eq!(doc.toc[0].level, 2);
        assert_eq!(doc.toc[1].level, 3);
    }

    #[test]
    fn duplicate_headings_share_one_slug() {
        let doc = parse_document("## Skref\ntexti\n## Skref");
        assert_eq!(doc.toc.len(), 2);
        assert_eq!(doc.toc[0].id, doc.toc[1].id);
    }
}
