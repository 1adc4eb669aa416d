use super::*;
use crate::algebra::*;
use std::fmt::{Display, Formatter};
use std::io::Write;

impl<T> Scaling<T>
where
    T: FloatT,
{
    /// Writes a summary of the registered entries to `out`.
    ///
    /// Diagonals no longer than
    /// [`print_max_entries`](ScalingSettings::print_max_entries) are
    /// printed in full, longer ones as min / max / mean.
    pub fn print(&self, out: &mut dyn Write) -> std::io::Result<()> {
        write!(out, "scaling: {} entries", self.entries.len())?;
        if self.is_scaled() {
            write!(out, " (applied, depth = {})", self.depth)?;
        }
        writeln!(out)?;

        for (index, entry) in self.entries.iter().enumerate() {
            write!(
                out,
                "  [{}] {:<5} {:<11} ",
                index,
                entry.side(),
                entry.source_type()
            )?;

            let Some(d) = entry.diagonal() else {
                writeln!(out, "(identity)")?;
                continue;
            };
            let Ok(d) = d.try_read(index) else {
                writeln!(out, "(borrowed)")?;
                continue;
            };

            if d.len() <= self.settings.print_max_entries {
                let vals: Vec<String> = d.iter().map(|v| format!("{:.4e}", v)).collect();
                writeln!(out, "[{}]", vals.join(", "))?;
            } else {
                writeln!(
                    out,
                    "n = {}, min = {:.4e}, max = {:.4e}, mean = {:.4e}",
                    d.len(),
                    d.minimum(),
                    d.maximum(),
                    d.mean()
                )?;
            }
        }
        Ok(())
    }

    /// Writes [`print`](Scaling::print) output to the configured print
    /// target.  See [`ConfigurablePrintTarget`](crate::io::ConfigurablePrintTarget).
    pub fn report(&mut self) -> std::io::Result<()> {
        let mut stream = std::mem::take(&mut self.stream);
        let result = self.print(&mut stream).and_then(|_| stream.flush());
        self.stream = stream;
        result
    }
}

impl<T> Display for Scaling<T>
where
    T: FloatT,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut buf = Vec::new();
        self.print(&mut buf).map_err(|_| std::fmt::Error)?;
        f.write_str(&String::from_utf8_lossy(&buf))
    }
}
