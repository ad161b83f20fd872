use crate::models::block::{Block, CalloutKind, ParsedDocument, TocEntry};

use super::classify::{LineClass, LineKind};

/// The block currently being accumulated, if any.
#[derive(Debug, Clone)]
enum LeafState {
    None,
    Paragraph { lines: Vec<String> },
    List { items: Vec<String> },
    Callout { kind: CalloutKind, lines: Vec<String> },
    Fence { lines: Vec<String> },
}

/// Assembles classified lines into blocks, one forward pass, no backtracking.
///
/// Accumulation rules differ per open leaf: a fence swallows everything until
/// the closing fence, a list only continues on marker lines, and a callout or
/// paragraph only continues on plain text lines.
pub struct BlockBuilder {
    leaf: LeafState,
    blocks: Vec<Block>,
    toc: Vec<TocEntry>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            leaf: LeafState::None,
            blocks: Vec::new(),
            toc: Vec::new(),
        }
    }

    pub fn push(&mut self, line: &LineClass) {
        if let LeafState::Fence { .. } = self.leaf {
            self.consume_fence_line(line);
            return;
        }

        if let LeafState::Callout { .. } = self.leaf {
            // Plain text continues the callout body; any structural line
            // (or a blank) ends it and is handled on its own.
            if line.kind == LineKind::Text {
                self.extend_callout(line.raw.trim());
                return;
            }
            self.flush();
        }

        if let LeafState::List { .. } = self.leaf {
            if let LineKind::ListItem { text } = &line.kind {
                self.extend_list(text);
                return;
            }
            self.flush();
        }

        if let LeafState::Paragraph { .. } = self.leaf {
            if line.kind == LineKind::Text {
                self.extend_paragraph(line.raw.trim());
                return;
            }
            self.flush();
        }

        self.open_block(line);
    }

    pub fn finish(mut self) -> ParsedDocument {
        // EOF flush; an unterminated fence still emits its collected code.
        self.flush();
        ParsedDocument {
            blocks: self.blocks,
            toc: self.toc,
        }
    }

    fn open_block(&mut self, line: &LineClass) {
        match &line.kind {
            LineKind::Blank => {}
            LineKind::Heading { level, text, id } => {
                if *level == 2 || *level == 3 {
                    self.toc.push(TocEntry {
                        id: id.clone(),
                        title: text.clone(),
                        level: *level,
                    });
                }
                self.blocks.push(Block::Heading {
                    level: *level,
                    text: text.clone(),
                    id: id.clone(),
                });
            }
            LineKind::CalloutStart { kind, text } => {
                let lines = if text.is_empty() {
                    Vec::new()
                } else {
                    vec![text.clone()]
                };
                self.leaf = LeafState::Callout { kind: *kind, lines };
            }
            LineKind::Fence => self.leaf = LeafState::Fence { lines: Vec::new() },
            LineKind::Quote { text } => self.blocks.push(Block::Quote { text: text.clone() }),
            LineKind::Image { url, alt, caption } => self.blocks.push(Block::Image {
                url: url.clone(),
                alt: alt.clone(),
                caption: caption.clone(),
            }),
            // Malformed image syntax emits nothing at all.
            LineKind::MalformedImage => {}
            LineKind::ListItem { text } => {
                self.leaf = LeafState::List {
                    items: vec![text.clone()],
                }
            }
            LineKind::Text => {
                self.leaf = LeafState::Paragraph {
                    lines: vec![line.raw.trim().to_string()],
                }
            }
        }
    }

    fn consume_fence_line(&mut self, line: &LineClass) {
        if line.kind == LineKind::Fence {
            self.flush();
        } else if let LeafState::Fence { lines } = &mut self.leaf {
            lines.push(line.raw.clone());
        }
    }

    fn extend_callout(&mut self, text: &str) {
        if let LeafState::Callout { lines, .. } = &mut self.leaf {
            lines.push(text.to_string());
        }
    }

    fn extend_list(&mut self, item: &str) {
        if let LeafState::List { items } = &mut self.leaf {
            items.push(item.to_string());
        }
    }

    fn extend_paragraph(&mut self, text: &str) {
        if let LeafState::Paragraph { lines } = &mut self.leaf {
            lines.push(text.to_string());
        }
    }

    /// Emits the open leaf, if any, and returns to the neutral state.
    fn flush(&mut self) {
        match std::mem::replace(&mut self.leaf, LeafState::None) {
            LeafState::None => {}
            LeafState::Paragraph { lines } => self.blocks.push(Block::Paragraph {
                text: lines.join(" "),
            }),
            LeafState::List { items } => self.blocks.push(Block::List { items }),
            LeafState::Callout { kind, lines } => self.blocks.push(Block::Callout {
                kind,
                text: lines.join(" "),
            }),
            LeafState::Fence { lines } => self.blocks.push(Block::CodeBlock {
                code: lines.join("\n"),
            }),
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
