//! Scheme command - generate a Rust scheme declaration from a binary event
//!
//! Decodes a captured event, infers its scheme, and emits a source module
//! declaring it: a `use` list for the descriptor kinds the scheme touches
//! plus a `scheme()` constructor function.
//!
//! # Usage
//!
//! ```bash
//! herald scheme -b event.bin                 # declaration to stdout
//! herald scheme -b event.bin -o my_scheme.rs # declaration to a new file
//! ```
//!
//! Exit codes are stage-specific so scripts can tell failures apart:
//! 74 (I/O), 65 (the bytes do not decode), 70 (inference failed).

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use tracing::debug;

use herald_protocol::{decode, infer_scheme, Descriptor, DescriptorSet, Scheme};

// BSD sysexits, matching what shell tooling expects
const EX_DATAERR: u8 = 65;
const EX_SOFTWARE: u8 = 70;
const EX_IOERR: u8 = 74;

/// Scheme command arguments
#[derive(Args, Debug)]
pub struct SchemeArgs {
    /// Binary event file to infer the scheme from
    #[arg(short = 'b', value_name = "FILE")]
    binary_file: PathBuf,

    /// Output module file (must not exist; stdout when omitted)
    #[arg(short = 'o', value_name = "FILE")]
    module_file: Option<PathBuf>,
}

/// Run the scheme command
pub fn run(args: SchemeArgs) -> ExitCode {
    let bytes = match fs::read(&args.binary_file) {
        Ok(bytes) => bytes,
        Err(err) => return fail(EX_IOERR, format!("{}: {err}", args.binary_file.display())),
    };
    debug!(file = %args.binary_file.display(), len = bytes.len(), "read event");

    let event = match decode(&bytes) {
        Ok(event) => event,
        Err(err) => return fail(EX_DATAERR, err.to_string()),
    };

    let (kinds, scheme) = match infer_scheme(event.payload()) {
        Ok(inferred) => inferred,
        Err(err) => return fail(EX_SOFTWARE, err.to_string()),
    };

    let module = render_module(&kinds, &scheme);

    match args.module_file {
        Some(path) => {
            // Refuse to clobber an existing module
            let result = OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .and_then(|mut file| file.write_all(module.as_bytes()));
            if let Err(err) = result {
                return fail(EX_IOERR, format!("{}: {err}", path.display()));
            }
        }
        None => print!("{module}"),
    }

    ExitCode::SUCCESS
}

fn fail(code: u8, message: String) -> ExitCode {
    eprintln!("{message}");
    ExitCode::from(code)
}

// =============================================================================
// Declaration rendering
// =============================================================================

/// Render a complete module: descriptor use list plus `scheme()`
fn render_module(kinds: &DescriptorSet, scheme: &Scheme) -> String {
    let mut out = String::new();

    out.push_str("use herald_protocol::Descriptor::{\n");
    for kind in kinds {
        out.push_str("    ");
        out.push_str(variant_name(*kind));
        out.push_str(",\n");
    }
    out.push_str("};\n");
    out.push_str("use herald_protocol::{Key, Result, Scheme};\n");

    out.push_str("\npub fn scheme() -> Result<Scheme> {\n    Ok(");
    render_scheme(scheme, 1, &mut out);
    out.push_str(")\n}\n");

    out
}

/// Render one scheme node at the given indent level
fn render_scheme(scheme: &Scheme, indent: usize, out: &mut String) {
    let pad = "    ".repeat(indent);
    let inner = "    ".repeat(indent + 1);

    match scheme {
        Scheme::Leaf(descriptor) => {
            out.push_str("Scheme::Leaf(");
            out.push_str(variant_name(*descriptor));
            out.push(')');
        }
        Scheme::Object(fields) => {
            out.push_str("Scheme::object([\n");
            for (key, sub) in fields {
                out.push_str(&inner);
                out.push_str(&format!("(Key::new({:?})?, ", key.as_str()));
                render_scheme(sub, indent + 1, out);
                out.push_str("),\n");
            }
            out.push_str(&pad);
            out.push_str("])");
        }
        Scheme::List(elements) => {
            out.push_str("Scheme::list([\n");
            for sub in elements {
                out.push_str(&inner);
                render_scheme(sub, indent + 1, out);
                out.push_str(",\n");
            }
            out.push_str(&pad);
            out.push_str("])");
        }
    }
}

/// The Rust variant name for a descriptor, as it appears in source
const fn variant_name(descriptor: Descriptor) -> &'static str {
    match descriptor {
        Descriptor::Byte => "Byte",
        Descriptor::Short => "Short",
        Descriptor::Integer => "Integer",
        Descriptor::Long => "Long",
        Descriptor::Flag => "Flag",
        Descriptor::Float => "Float",
        Descriptor::Double => "Double",
        Descriptor::String => "String",
        Descriptor::Guid => "Guid",
        Descriptor::Null => "Null",
        Descriptor::ContainerDummy => "ContainerDummy",
        Descriptor::VectorDummy => "VectorDummy",
        Descriptor::VectorByte => "VectorByte",
        Descriptor::VectorShort => "VectorShort",
        Descriptor::VectorInteger => "VectorInteger",
        Descriptor::VectorLong => "VectorLong",
        Descriptor::VectorFlag => "VectorFlag",
        Descriptor::VectorFloat => "VectorFloat",
        Descriptor::VectorDouble => "VectorDouble",
        Descriptor::VectorString => "VectorString",
        Descriptor::VectorGuid => "VectorGuid",
        Descriptor::VectorNull => "VectorNull",
    }
}

#[cfg(test)]
#[path = "scheme_test.rs"]
mod scheme_test;
