//! Effective property dump — render an element's properties as text.
//!
//! Produces one `name = value` line per effective property, using the
//! literal syntax of deployment definitions. Values that come from the
//! specification's defaults are marked so they can be told apart from
//! explicit settings.
//!
//! ```text
//! // ping#1 (deployment spec org.example.ipc)
//! Retry = { 1, 2, 3 }
//! Timeout = 30 // default
//! ```

use std::io::Write;

use crate::accessor::{Origin, PropertyAccessor};
use crate::element::ModelElement;
use crate::index::DeclarationIndex;
use crate::model::PropertyValue;
use crate::Result;

/// Write the effective properties of `element` to `writer`.
pub fn write_effective_properties<I: DeclarationIndex>(
    accessor: &PropertyAccessor<I>,
    element: &dyn ModelElement,
    writer: &mut dyn Write,
) -> Result<()> {
    let rows = accessor.effective_properties(element)?;

    writeln!(
        writer,
        "// {} (deployment spec {})",
        element.label(),
        accessor.specification().name
    )?;

    for row in &rows {
        let marker = match row.origin {
            Origin::Explicit => "",
            Origin::Default => " // default",
        };
        writeln!(writer, "{} = {}{}", row.name, format_value(row.value), marker)?;
    }

    Ok(())
}

/// Format a value as a deployment literal.
pub fn format_value(value: &PropertyValue) -> String {
    value.to_string()
}
