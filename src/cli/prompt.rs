use crate::error::{ProcessingError, Result};
use crate::models::{City, DayFilter, FilterSelection, MonthFilter};
use crate::utils::constants::separator;
use std::io::{BufRead, Write};
use tracing::debug;

/// Line-oriented prompt/answer I/O over any reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` and read one line. `None` once input is exhausted.
    pub fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let answer = line.trim_end_matches(['\n', '\r']).to_string();
        debug!("answer to {:?}: {:?}", prompt, answer);
        Ok(Some(answer))
    }

    /// Like [`ask`](Self::ask) but end of input aborts the run.
    pub fn ask_required(&mut self, prompt: &str) -> Result<String> {
        self.ask(prompt)?.ok_or(ProcessingError::Cancelled)
    }

    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// Ask until `parse` accepts the answer, printing `invalid` after each miss.
fn prompt_until<R, W, T>(
    console: &mut Console<R, W>,
    prompt: &str,
    invalid: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T>
where
    R: BufRead,
    W: Write,
{
    loop {
        let answer = console.ask_required(prompt)?;
        match parse(&answer) {
            Some(value) => return Ok(value),
            None => console.say(invalid)?,
        }
    }
}

/// Ask for city, month and day, reprompting until each is valid.
pub fn collect_filters<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<FilterSelection> {
    console.say("Hello! Let's explore some US bikeshare data!")?;

    let city = prompt_until(
        console,
        "Please choose city from chicago, new york city or washington:",
        "Invalid input. Please choose correct city name.",
        City::parse,
    )?;

    let month = prompt_until(
        console,
        "Please enter a month from january to june or type \"all\" to display all months:",
        "Please enter a full valid month name",
        MonthFilter::parse,
    )?;

    let day = prompt_until(
        console,
        "Please enter a day of the week or type \"all\" to display all days:",
        "Please enter a full valid day of the week",
        DayFilter::parse,
    )?;

    console.say(&separator())?;
    Ok(FilterSelection::new(city, month, day))
}
