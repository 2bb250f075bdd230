//! Human-readable rendering of the model.
//!
//! Output follows target-language declaration syntax closely enough for
//! diagnostics and trace fields. It is not an emitter.

use std::fmt;

use crate::{Method, Property, TypeDef, TypeParamDef};

pub(crate) fn write_comma_separated<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: &[T],
) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

fn write_parameters(f: &mut fmt::Formatter<'_>, parameters: &[TypeParamDef]) -> fmt::Result {
    if parameters.is_empty() {
        return Ok(());
    }
    f.write_str("<")?;
    write_comma_separated(f, parameters)?;
    f.write_str(">")
}

fn write_modifiers(f: &mut fmt::Formatter<'_>, modifiers: crate::Modifiers) -> fmt::Result {
    for m in modifiers.modifiers() {
        write!(f, "{} ", m.keyword())?;
    }
    Ok(())
}

impl fmt::Display for TypeParamDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        for (i, bound) in self.bounds.iter().enumerate() {
            f.write_str(if i == 0 { " extends " } else { " & " })?;
            write!(f, "{bound}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_modifiers(f, self.modifiers)?;
        write!(f, "{} {}", self.type_ref, self.name)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_modifiers(f, self.modifiers)?;
        if !self.parameters.is_empty() {
            write_parameters(f, &self.parameters)?;
            f.write_str(" ")?;
        }
        write!(f, "{} {}(", self.return_type, self.name)?;
        write_comma_separated(f, &self.arguments)?;
        f.write_str(")")?;
        if !self.exceptions.is_empty() {
            f.write_str(" throws ")?;
            write_comma_separated(f, &self.exceptions)?;
        }
        Ok(())
    }
}

/// Renders the declaration header only (`public class a.B<T> extends a.C`).
impl fmt::Display for TypeDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_modifiers(f, self.modifiers)?;
        write!(f, "{} {}", self.kind.keyword(), self.name)?;
        write_parameters(f, &self.parameters)?;
        if !self.extends_list.is_empty() {
            f.write_str(" extends ")?;
            write_comma_separated(f, &self.extends_list)?;
        }
        if !self.implements_list.is_empty() {
            f.write_str(" implements ")?;
            write_comma_separated(f, &self.implements_list)?;
        }
        Ok(())
    }
}
