use crate::domain::model::Container;
use crate::utils::error::Result;
use std::io::Write;

/// Builds the container, runs it, and reports the result.
///
/// Writes exactly two lines to `out`:
/// `Value is: This is not a # comment` then `Result: 15`.
pub fn run_demo<W: Write>(out: &mut W) -> Result<i32> {
    let container = Container::new();
    tracing::debug!("Container created with value {:?}", container.value());

    let result = container.compute(out)?;
    writeln!(out, "Result: {}", result)?;
    out.flush()?;

    Ok(result)
}
