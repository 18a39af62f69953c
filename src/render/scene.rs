//! Scene description: what gets drawn, separate from how.

use image::Rgb;

/// Named colors used by a scene.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Canvas fill.
    pub background: Rgb<u8>,
    /// Default text.
    pub foreground: Rgb<u8>,
    /// Titles, rules and the selected menu entry.
    pub accent: Rgb<u8>,
    /// Safe commands and audit output.
    pub success: Rgb<u8>,
    /// Dangerous commands.
    pub warning: Rgb<u8>,
    /// Section headings.
    pub cyan: Rgb<u8>,
}

/// Dracula theme.
pub const DRACULA: Palette = Palette {
    background: Rgb([40, 42, 54]),
    foreground: Rgb([248, 248, 242]),
    accent: Rgb([189, 147, 249]),
    success: Rgb([80, 250, 123]),
    warning: Rgb([255, 121, 198]),
    cyan: Rgb([139, 233, 253]),
};

/// Text size class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    /// 24 px.
    Title,
    /// 16 px.
    Body,
    /// 14 px.
    Small,
}

impl TextStyle {
    /// Nominal pixel height.
    #[must_use]
    pub const fn px(self) -> u16 {
        match self {
            Self::Title => 24,
            Self::Body => 16,
            Self::Small => 14,
        }
    }
}

/// A run of text placed relative to the current cursor row.
#[derive(Debug, Clone)]
pub struct Span {
    /// Absolute horizontal position.
    pub x: i32,
    /// Vertical offset from the cursor.
    pub dy: i32,
    /// Text to draw.
    pub text: &'static str,
    /// Fill color.
    pub color: Rgb<u8>,
    /// Size class.
    pub style: TextStyle,
}

impl Span {
    /// A span on the cursor row.
    #[must_use]
    pub const fn new(x: i32, text: &'static str, color: Rgb<u8>, style: TextStyle) -> Self {
        Self { x, dy: 0, text, color, style }
    }

    /// Shift the span `dy` pixels below the cursor row.
    #[must_use]
    pub fn below(mut self, dy: i32) -> Self {
        self.dy = dy;
        self
    }
}

/// One step of the vertical layout.
#[derive(Debug, Clone)]
pub enum Block {
    /// Text spans sharing a cursor row, then advance the cursor.
    Line {
        /// Spans drawn at this row.
        spans: Vec<Span>,
        /// Cursor advance after drawing.
        advance: i32,
    },
    /// Horizontal rule at the cursor row, then advance the cursor.
    Rule {
        /// Left end.
        x0: i32,
        /// Right end (inclusive).
        x1: i32,
        /// Line thickness in pixels.
        thickness: u32,
        /// Fill color.
        color: Rgb<u8>,
        /// Cursor advance after drawing.
        advance: i32,
    },
}

impl Block {
    /// A single-span line.
    #[must_use]
    pub fn text(span: Span, advance: i32) -> Self {
        Self::Line { spans: vec![span], advance }
    }

    /// Cursor advance of this block.
    #[must_use]
    pub const fn advance(&self) -> i32 {
        match self {
            Self::Line { advance, .. } | Self::Rule { advance, .. } => *advance,
        }
    }
}

/// A complete fixed-size picture.
#[derive(Debug, Clone)]
pub struct Scene {
    /// Canvas width.
    pub width: u32,
    /// Canvas height.
    pub height: u32,
    /// Canvas fill.
    pub background: Rgb<u8>,
    /// Cursor row where the body starts.
    pub top: i32,
    /// Blocks laid out from `top` downward.
    pub body: Vec<Block>,
    /// Distance from the bottom edge where the footer starts.
    pub footer_offset: i32,
    /// Blocks laid out from the footer row downward.
    pub footer: Vec<Block>,
}

impl Scene {
    /// Cursor row where the footer starts.
    #[must_use]
    pub fn footer_top(&self) -> i32 {
        i32::try_from(self.height).unwrap_or(i32::MAX) - self.footer_offset
    }
}

const LEFT: i32 = 40;
const INDENT: i32 = 60;
const RIGHT: i32 = 1240;

/// The five-step steering scenario: a user corrects a dangerous git command.
#[must_use]
pub fn steering_scenario() -> Scene {
    use TextStyle::{Body, Small, Title};

    let p = DRACULA;

    let body = vec![
        Block::text(
            Span::new(LEFT, "STEERING INTERFACE DEMO - Phase 5 Human-in-the-Loop", p.accent, Title),
            50,
        ),
        Block::Rule { x0: LEFT, x1: RIGHT, thickness: 2, color: p.accent, advance: 30 },
        Block::text(
            Span::new(LEFT, "SCENARIO: User Corrects Dangerous Git Command", p.cyan, Body),
            40,
        ),
        // 1. command issued
        Block::text(Span::new(LEFT, "1.  User runs:", p.foreground, Body), 30),
        Block::text(Span::new(INDENT, "$ cwc deploy.yaml --step-mode", p.success, Body), 35),
        // 2. dangerous action proposed
        Block::text(Span::new(LEFT, "2.  Agent proposes:", p.warning, Body), 30),
        Block::Line {
            spans: vec![
                Span::new(INDENT, "git push origin main --force", p.warning, Body),
                Span::new(INDENT, "!!  DANGEROUS - Force push to main!", p.warning, Small).below(25),
            ],
            advance: 60,
        },
        // 3. steering menu
        Block::text(Span::new(LEFT, "3.  Steering Menu Appears:", p.cyan, Body), 30),
        Block::Line {
            spans: vec![
                Span::new(INDENT, "  [R]un", p.foreground, Body),
                Span::new(200, "[E]dit", p.accent, Body),
                Span::new(320, "[C]ontext", p.foreground, Body),
                Span::new(520, "[T]erminate", p.foreground, Body),
            ],
            advance: 35,
        },
        Block::text(Span::new(INDENT, "User selects: [E]dit", p.accent, Body), 40),
        // 4. correction
        Block::text(Span::new(LEFT, "4.  User Corrects:", p.success, Body), 30),
        Block::text(Span::new(INDENT, "From: git push origin main --force", p.warning, Small), 25),
        Block::text(Span::new(INDENT, "To:   git push origin dev", p.success, Small), 40),
        // 5. audit entry
        Block::text(Span::new(LEFT, "5.  Audit Trail Recorded:", p.success, Body), 30),
        Block::text(
            Span::new(INDENT, "[ok] Context injected into step 'deploy'", p.success, Small),
            25,
        ),
        Block::text(Span::new(INDENT, "   Type: parameter-adjustment", p.success, Small), 25),
        Block::text(
            Span::new(INDENT, "Training data: #git-safety #human-intervention", p.success, Small),
            0,
        ),
    ];

    let footer = vec![
        Block::Rule { x0: LEFT, x1: RIGHT, thickness: 1, color: p.accent, advance: 10 },
        Block::text(
            Span::new(
                LEFT,
                "* Human decision changed execution path * Audit trail proves intervention",
                p.accent,
                Small,
            ),
            0,
        ),
    ];

    Scene {
        width: 1280,
        height: 720,
        background: p.background,
        top: 40,
        body,
        footer_offset: 50,
        footer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(blocks: &[Block]) -> Vec<&'static str> {
        blocks
            .iter()
            .filter_map(|b| match b {
                Block::Line { spans, .. } => Some(spans.iter().map(|s| s.text)),
                Block::Rule { .. } => None,
            })
            .flatten()
            .collect()
    }

    #[test]
    fn canvas_is_720p() {
        let scene = steering_scenario();
        assert_eq!((scene.width, scene.height), (1280, 720));
        assert_eq!(scene.background, Rgb([40, 42, 54]));
    }

    #[test]
    fn five_numbered_steps_in_order() {
        let scene = steering_scenario();
        let steps: Vec<_> = texts(&scene.body)
            .into_iter()
            .filter(|t| t.len() > 2 && t.as_bytes()[0].is_ascii_digit() && &t[1..2] == ".")
            .collect();
        assert_eq!(
            steps,
            [
                "1.  User runs:",
                "2.  Agent proposes:",
                "3.  Steering Menu Appears:",
                "4.  User Corrects:",
                "5.  Audit Trail Recorded:",
            ]
        );
    }

    #[test]
    fn body_fits_above_footer() {
        let scene = steering_scenario();
        let body_end: i32 = scene.top + scene.body.iter().map(Block::advance).sum::<i32>();
        assert!(body_end < scene.footer_top());
        assert_eq!(scene.footer_top(), 670);
    }

    #[test]
    fn menu_highlights_edit() {
        let scene = steering_scenario();
        let menu = scene
            .body
            .iter()
            .find_map(|b| match b {
                Block::Line { spans, .. } if spans.len() == 4 => Some(spans),
                _ => None,
            })
            .unwrap();
        let edit = menu.iter().find(|s| s.text == "[E]dit").unwrap();
        assert_eq!(edit.color, DRACULA.accent);
        assert!(menu.iter().filter(|s| s.text != "[E]dit").all(|s| s.color == DRACULA.foreground));
    }

    #[test]
    fn all_text_is_ascii() {
        let scene = steering_scenario();
        assert!(texts(&scene.body).iter().chain(texts(&scene.footer).iter()).all(|t| t.is_ascii()));
    }

    #[test]
    fn below_offsets_span() {
        let span = Span::new(10, "x", DRACULA.foreground, TextStyle::Small).below(25);
        assert_eq!(span.dy, 25);
        assert_eq!(TextStyle::Small.px(), 14);
    }
}
