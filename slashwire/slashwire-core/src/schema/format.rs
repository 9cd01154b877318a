use std::fmt::{Error, Result, Write as _};

use super::{FieldDescriptor, FieldKind, MessageDescriptor};

/// Format a message descriptor in a readable style:
/// scalar and enum fields are rendered in one line, message fields are
/// pretty-printed with their own fields nested below.
///
/// A message type that is already being printed higher up the tree is
/// rendered by name only, so recursive schemas terminate.
pub fn format_message_descriptor(
    descriptor: &MessageDescriptor,
) -> std::result::Result<String, Error> {
    let mut out = String::new();
    let mut stack = vec![descriptor.full_name];
    writeln!(out, "{}", descriptor.full_name)?;
    for field in descriptor.fields {
        format_field(field, 4, &mut stack, &mut out)?;
    }
    Ok(out)
}

fn format_field(
    field: &FieldDescriptor,
    indent: usize,
    stack: &mut Vec<&'static str>,
    out: &mut String,
) -> Result {
    let pad = " ".repeat(indent);
    let label = format!("{}({})", field.name, field.number);

    match field.kind {
        FieldKind::Message(nested) if !stack.contains(&nested.full_name) => {
            writeln!(out, "{pad}{label}:")?;
            writeln!(out, "{pad}    type: message {}", nested.full_name)?;
            writeln!(out, "{pad}    repeated: {}", field.repeated)?;
            writeln!(out, "{pad}    fields:")?;
            stack.push(nested.full_name);
            for child in nested.fields {
                format_field(child, indent + 8, stack, out)?;
            }
            stack.pop();
        }
        kind => {
            writeln!(
                out,
                "{pad}{label}: {{ type: {}, repeated: {}, wire: {} }}",
                kind.describe(),
                field.repeated,
                field.wire_category()
            )?;
        }
    }

    Ok(())
}
