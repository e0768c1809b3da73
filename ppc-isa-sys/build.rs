// Build script for ppc-isa-sys.
//
// Two phases:
//   1. Parse `isa/ppc.yaml` and resolve every table entry to its raw value.
//   2. Emit `constants.rs`: one type alias per table and one `pub const`
//      per entry, in the shape bindgen produces for C enums.
//
// The table path is exported as `links` metadata (`DEP_PPC_ISA_ISA_YAML`)
// so that `ppc-isa` generates its typed enums from the same source.

use std::collections::HashSet;
use std::env;
use std::fmt::Write as _;
use std::path::PathBuf;

use serde::Deserialize;

#[derive(Deserialize)]
struct IsaTables {
    max_operands: usize,
    tables: Vec<Table>,
}

#[derive(Deserialize)]
struct Table {
    c_type: String,
    prefix: String,
    #[serde(default)]
    ending: bool,
    doc: String,
    entries: Vec<Entry>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Entry {
    Name(String),
    Bank {
        bank: String,
        count: u32,
        doc: Option<String>,
    },
    Item {
        name: String,
        value: Option<u32>,
        field: Option<u32>,
        bits: Option<u32>,
        doc: Option<String>,
    },
}

struct Constant {
    name: String,
    value: u32,
    doc: Option<String>,
}

fn main() {
    let manifest = env::var("CARGO_MANIFEST_DIR").unwrap();
    let out_dir = env::var("OUT_DIR").unwrap();
    let isa_yaml = format!("{manifest}/isa/ppc.yaml");

    // Phase 1: parse and resolve
    let text = std::fs::read_to_string(&isa_yaml)
        .unwrap_or_else(|e| panic!("failed to read {isa_yaml}: {e}"));
    let isa: IsaTables =
        serde_yaml::from_str(&text).unwrap_or_else(|e| panic!("invalid {isa_yaml}: {e}"));

    // Phase 2: emit constants
    let mut out = String::new();
    writeln!(out, "// Generated from isa/ppc.yaml by build.rs. Do not edit.").unwrap();
    for table in &isa.tables {
        let constants = resolve(&table.prefix, &table.entries);
        let ty = &table.c_type;

        writeln!(out).unwrap();
        writeln!(out, "#[doc = {:?}]", table.doc).unwrap();
        writeln!(out, "pub type {ty} = u32;").unwrap();
        for c in &constants {
            if let Some(doc) = &c.doc {
                writeln!(out, "#[doc = {doc:?}]").unwrap();
            }
            writeln!(
                out,
                "pub const {}_{}: {ty} = {};",
                table.prefix,
                c.name.to_ascii_uppercase(),
                c.value
            )
            .unwrap();
        }
        if table.ending {
            let ending = constants.iter().map(|c| c.value).max().unwrap_or(0) + 1;
            writeln!(out, "/// One past the last valid value.").unwrap();
            writeln!(out, "pub const {}_ENDING: {ty} = {ending};", table.prefix).unwrap();
        }
    }
    writeln!(out).unwrap();
    writeln!(out, "/// Capacity of the operand array in [`cs_ppc`].").unwrap();
    writeln!(out, "pub const PPC_MAX_OPERANDS: usize = {};", isa.max_operands).unwrap();

    let out_path = PathBuf::from(&out_dir).join("constants.rs");
    std::fs::write(&out_path, out).expect("failed to write constants.rs");

    println!("cargo:isa_yaml={isa_yaml}");
    println!("cargo:rerun-if-changed=isa/ppc.yaml");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Resolve table entries to `(name, value)` pairs using C enum numbering.
///
/// Panics on duplicate names or values, since either would make the
/// generated constants ambiguous.
fn resolve(prefix: &str, entries: &[Entry]) -> Vec<Constant> {
    let mut out = Vec::new();
    let mut next = 0u32;
    for entry in entries {
        match entry {
            Entry::Name(name) => {
                out.push(Constant {
                    name: name.clone(),
                    value: next,
                    doc: None,
                });
                next += 1;
            }
            Entry::Bank { bank, count, doc } => {
                for i in 0..*count {
                    out.push(Constant {
                        name: format!("{bank}{i}"),
                        value: next,
                        doc: doc.as_ref().map(|d| format!("{d} {i}.")),
                    });
                    next += 1;
                }
            }
            Entry::Item {
                name,
                value,
                field,
                bits,
                doc,
            } => {
                let value = match (value, field, bits) {
                    (Some(v), None, None) => *v,
                    (None, Some(f), Some(b)) => (f << 5) | b,
                    (None, None, None) => next,
                    _ => panic!("{prefix}: entry `{name}` needs either `value` or `field` + `bits`"),
                };
                out.push(Constant {
                    name: name.clone(),
                    value,
                    doc: doc.clone(),
                });
                next = value + 1;
            }
        }
    }

    let mut names = HashSet::new();
    let mut values = HashSet::new();
    for c in &out {
        assert!(names.insert(c.name.as_str()), "{prefix}: duplicate name `{}`", c.name);
        assert!(values.insert(c.value), "{prefix}: duplicate value {} (`{}`)", c.value, c.name);
    }
    out
}
