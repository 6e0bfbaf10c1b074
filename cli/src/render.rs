use crossterm::cursor::MoveToPreviousLine;
use crossterm::queue;
use crossterm::style::{Print, PrintStyledContent, Stylize};
use crossterm::terminal::{Clear, ClearType};
use kaboom_core::{DisplayCell, Outcome, Snapshot};
use std::io::{self, Write};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Glyphs {
    Emoji,
    Ascii,
}

/// Turns snapshots into terminal text.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Renderer {
    glyphs: Glyphs,
    compact: bool,
}

impl Renderer {
    pub fn new(glyphs: Glyphs, compact: bool) -> Self {
        Self { glyphs, compact }
    }

    pub fn glyph(&self, cell: DisplayCell) -> String {
        use DisplayCell::*;

        match (self.glyphs, cell) {
            (Glyphs::Emoji, Covered) => "⬛".into(),
            (Glyphs::Emoji, Flagged) => "🏳️".into(),
            (Glyphs::Emoji, ExplodedHazard) => "🔥".into(),
            (Glyphs::Emoji, ShownHazard) => "💣".into(),
            (Glyphs::Ascii, Covered) => "#".into(),
            (Glyphs::Ascii, Flagged) => "F".into(),
            (Glyphs::Ascii, ExplodedHazard) => "X".into(),
            (Glyphs::Ascii, ShownHazard) => "*".into(),
            (Glyphs::Ascii, Revealed(0)) => ".".into(),
            (_, Revealed(count)) => count.to_string(),
        }
    }

    fn separator(&self) -> &'static str {
        if self.compact { "" } else { " " }
    }

    /// Lines occupied by one frame: a blank line, the rows, a blank line.
    pub fn frame_height(snapshot: &Snapshot) -> u16 {
        u16::from(snapshot.size) + 2
    }

    pub fn queue_frame(&self, out: &mut impl Write, snapshot: &Snapshot) -> io::Result<()> {
        queue!(out, Print("\r\n"))?;
        for (row_index, row) in snapshot.rows().enumerate() {
            queue!(out, Print(" "))?;
            let row_start = row_index * usize::from(snapshot.size);
            for (col, &cell) in row.iter().enumerate() {
                let glyph = self.glyph(cell);
                let is_cursor = snapshot
                    .cursor
                    .is_some_and(|cursor| usize::from(cursor) == row_start + col);
                if is_cursor {
                    queue!(out, PrintStyledContent(glyph.red().underlined()))?;
                } else {
                    queue!(out, Print(glyph))?;
                }
                queue!(out, Print(self.separator()))?;
            }
            queue!(out, Print("\r\n"))?;
        }
        queue!(out, Print("\r\n"))
    }
}

pub fn outcome_message(outcome: Outcome) -> Option<&'static str> {
    match outcome {
        Outcome::InProgress => None,
        Outcome::Won => Some("🎉🎉🎉 You win! 🎉🎉🎉"),
        Outcome::Lost => Some("😵😵😵 You lose! 😵😵😵"),
    }
}

/// Draws frames in place, moving back over the previous frame before each redraw.
pub struct Painter<W: Write> {
    out: W,
    renderer: Renderer,
    previous_height: Option<u16>,
}

impl<W: Write> Painter<W> {
    pub fn new(out: W, renderer: Renderer) -> Self {
        Self {
            out,
            renderer,
            previous_height: None,
        }
    }

    pub fn paint(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        if let Some(height) = self.previous_height {
            queue!(
                self.out,
                MoveToPreviousLine(height),
                Clear(ClearType::FromCursorDown)
            )?;
        }
        self.renderer.queue_frame(&mut self.out, snapshot)?;
        self.out.flush()?;
        self.previous_height = Some(Renderer::frame_height(snapshot));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kaboom_core::{Board, Controller};
    use DisplayCell::*;

    fn row_text(renderer: &Renderer, row: &[DisplayCell]) -> String {
        let mut text = String::from(" ");
        for &cell in row {
            text.push_str(&renderer.glyph(cell));
            text.push_str(renderer.separator());
        }
        text
    }

    fn snapshot(size: u8, cells: Vec<DisplayCell>, cursor: Option<u16>) -> Snapshot {
        Snapshot {
            size,
            cells,
            cursor,
            outcome: Outcome::InProgress,
        }
    }

    #[test]
    fn emoji_row_is_space_separated() {
        let renderer = Renderer::new(Glyphs::Emoji, false);
        let row = [Covered, Revealed(0), Revealed(3), ShownHazard];
        assert_eq!(row_text(&renderer, &row), " ⬛ 0 3 💣 ");
    }

    #[test]
    fn compact_ascii_row() {
        let renderer = Renderer::new(Glyphs::Ascii, true);
        let row = [Covered, Flagged, Revealed(0), Revealed(2), ExplodedHazard, ShownHazard];
        assert_eq!(row_text(&renderer, &row), " #F.2X*");
    }

    #[test]
    fn frame_contains_every_row() {
        let renderer = Renderer::new(Glyphs::Ascii, false);
        let frame = snapshot(2, vec![Covered, Flagged, Revealed(1), Revealed(1)], None);

        let mut out = Vec::new();
        renderer.queue_frame(&mut out, &frame).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "\r\n # F \r\n 1 1 \r\n\r\n");
        assert_eq!(Renderer::frame_height(&frame), 4);
    }

    #[test]
    fn cursor_cell_is_styled() {
        let renderer = Renderer::new(Glyphs::Ascii, true);
        let game = Controller::new(Board::from_hazards(2, &[3]).unwrap());

        let mut out = Vec::new();
        renderer.queue_frame(&mut out, &game.snapshot()).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains('\x1b'));
        assert!(text.contains("#\r\n ##\r\n"));
    }

    #[test]
    fn repaint_moves_over_previous_frame() {
        let mut painter = Painter::new(Vec::new(), Renderer::new(Glyphs::Ascii, false));
        let frame = snapshot(3, vec![Covered; 9], None);

        painter.paint(&frame).unwrap();
        let first_len = painter.out.len();
        painter.paint(&frame).unwrap();

        let out = painter.out;
        assert!(!out.starts_with(b"\x1b["));
        assert!(out[first_len..].starts_with(b"\x1b[5F"));
    }

    #[test]
    fn messages_only_for_finished_games() {
        assert_eq!(outcome_message(Outcome::InProgress), None);
        assert!(outcome_message(Outcome::Won).unwrap().contains("win"));
        assert!(outcome_message(Outcome::Lost).unwrap().contains("lose"));
    }
}
