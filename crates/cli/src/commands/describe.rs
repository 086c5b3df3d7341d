//! Print the help table for definitions given on the command line.
//!
//! Responsibilities:
//! - Parse `NAME=KIND:VALUE[::DESCRIPTION]` definitions.
//! - Register them and print the help table.
//!
//! Does NOT handle:
//! - Table layout (see `envdefaults::help`).

use anyhow::Result;
use envdefaults::{DefaultValue, Descriptor, Registry, SettingKind};

use crate::error::InputError;

/// Separator between the value and the optional description.
const DESCRIPTION_SEPARATOR: &str = "::";

/// Register every definition and print the table.
pub fn run(definitions: &[String]) -> Result<()> {
    for definition in definitions {
        let descriptor = parse_definition(definition)?;
        tracing::debug!(name = %descriptor.name, kind = %descriptor.kind(), "Parsed definition");
        Registry::global().register_descriptor(descriptor)?;
    }

    envdefaults::help();
    Ok(())
}

/// Parse `NAME=KIND:VALUE[::DESCRIPTION]`.
pub fn parse_definition(definition: &str) -> Result<Descriptor> {
    let malformed = || InputError::MalformedDefinition(definition.to_string());

    let (name, rest) = definition.split_once('=').ok_or_else(malformed)?;
    let (kind, rest) = rest.split_once(':').ok_or_else(malformed)?;
    let (value, description) = rest
        .split_once(DESCRIPTION_SEPARATOR)
        .unwrap_or((rest, ""));

    let kind: SettingKind = kind.parse().map_err(InputError::from)?;
    let default = DefaultValue::parse(kind, value)?;

    Ok(Descriptor::new(name.trim(), default, description.trim()))
}
