use crate::utils::error::Result;

/// Line-oriented terminal seam between the menus and the outside world.
pub trait Console {
    /// Next input line without its line terminator, `None` once input is exhausted.
    fn read_line(&mut self) -> Result<Option<String>>;

    /// Writes `text` without a newline, used for prompts.
    fn write(&mut self, text: &str) -> Result<()>;

    fn write_line(&mut self, text: &str) -> Result<()> {
        self.write(text)?;
        self.write("\n")
    }
}
