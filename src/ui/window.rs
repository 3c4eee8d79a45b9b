use std::{
    fmt::Display,
    io::{stdout, Stdout},
};

use crossterm::{
    cursor::{MoveToColumn, MoveUp},
    style::{Print, Stylize as _},
    terminal::{Clear, ClearType},
};
use std::fmt::Write as _;
use unicode_segmentation::UnicodeSegmentation as _;

/// Draws the clock's window: the border, a title in the top border,
/// and clearing out whatever was drawn in the previous frame.
pub struct Window {
    /// Whether or not to include borders in the output.
    borderless: bool,

    /// The top & bottom borders.
    ///
    /// If the option to not include borders is set, the bottom will be empty
    /// and the top will only hold the title.
    pub(crate) borders: [String; 2],

    /// The inner width of the window.
    width: usize,

    /// The output, currently just an [`Stdout`].
    out: Stdout,
}

impl Window {
    /// Initializes a new [Window].
    ///
    /// * `width` - Inner width of the window.
    /// * `borderless` - Whether to include borders in the window, or not.
    pub fn new(width: usize, borderless: bool) -> Self {
        let borders = if borderless {
            [String::new(), String::new()]
        } else {
            let middle = "─".repeat(width + 2);

            [format!("┌{middle}┐"), format!("└{middle}┘")]
        };

        Self {
            borders,
            borderless,
            width,
            out: stdout(),
        }
    }

    /// Puts `title` into the top border, cutting it short if it doesn't fit.
    pub fn title(&mut self, title: impl Display) {
        let title = title.to_string();
        let graphemes = title.graphemes(true);
        let len = graphemes.clone().count();
        let inner = self.width.saturating_sub(2);

        let (title, len) = if len > inner {
            let cut: String = graphemes.take(inner.saturating_sub(3)).collect();
            (format!("{cut}..."), inner)
        } else {
            (title, len)
        };

        self.borders[0] = if self.borderless {
            format!("  {title}")
        } else {
            format!("┌─ {title} {}─┐", "─".repeat(inner - len))
        };
    }

    /// Renders the window itself, but doesn't actually draw it.
    ///
    /// `testing` just determines whether to add special features
    /// like color resets and carriage returns.
    ///
    /// This returns both the final rendered window and also the full
    /// height of the rendered window.
    pub(crate) fn render(
        &self,
        content: Vec<String>,
        testing: bool,
    ) -> super::Result<(String, u16)> {
        let linefeed = if testing { "\n" } else { "\r\n" };
        let len: u16 = content.len().try_into()?;

        // Note that this will have a trailing newline, which we use later.
        let menu: String = content.into_iter().fold(String::new(), |mut output, x| {
            let padding = if self.borderless { " " } else { "│" };
            let center = if testing { x } else { x.reset().to_string() };

            // Writing into a `String` can't fail.
            let _ = write!(output, "{padding} {center} {padding}{linefeed}");

            output
        });

        // We're doing this because Windows is stupid and can't stand
        // writing to the last line repeatedly.
        #[cfg(windows)]
        let (height, suffix) = (len + 3, linefeed);
        #[cfg(not(windows))]
        let (height, suffix) = (len + 2, "");

        Ok((
            format!(
                "{}{linefeed}{menu}{}{suffix}",
                self.borders[0], self.borders[1]
            ),
            height,
        ))
    }

    /// Actually draws the window, with each element in `content` being on a new line.
    pub fn draw(&mut self, content: Vec<String>) -> super::Result<()> {
        let (rendered, height) = self.render(content, false)?;

        crossterm::execute!(
            self.out,
            Clear(ClearType::FromCursorDown),
            MoveToColumn(0),
            Print(rendered),
            MoveToColumn(0),
            MoveUp(height - 1),
        )?;

        Ok(())
    }
}
