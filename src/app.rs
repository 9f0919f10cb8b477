// std imports
use std::io::{self, Write};

// local imports
use crate::{error::*, filtering::NameFilter};

// ---

#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Select names that do not match instead.
    pub invert: bool,
    /// Print only the number of selected names.
    pub count: bool,
    /// Print path components of each name instead of filtering.
    pub split: bool,
}

pub struct App {
    filter: NameFilter,
    options: Options,
}

impl App {
    pub fn new(filter: NameFilter, options: Options) -> Self {
        Self { filter, options }
    }

    /// Processes the names and writes the result, returning the number of selected names.
    ///
    /// In split mode every name counts as selected.
    pub fn run<I>(&self, names: I, output: &mut dyn Write) -> Result<usize>
    where
        I: IntoIterator<Item = io::Result<String>>,
    {
        let separator = self.filter.options().separator;
        let mut selected = 0;

        for name in names {
            let name = name?;

            if self.options.split {
                json::to_writer(&mut *output, &wildcard::split_path(&name, separator))?;
                writeln!(output)?;
                selected += 1;
                continue;
            }

            if self.filter.matches(&name) != self.options.invert {
                selected += 1;
                if !self.options.count {
                    writeln!(output, "{}", name)?;
                }
            }
        }

        if self.options.count {
            writeln!(output, "{}", selected)?;
        }

        log::debug!("selected {} names", selected);

        Ok(selected)
    }
}
