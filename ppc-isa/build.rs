// Build script for ppc-isa.
//
// Generates `generated.rs`: one closed Rust enum per table in the shared
// ISA description, with discriminants bound to the raw `ppc-isa-sys`
// constants so the two crates cannot drift apart. The table path comes
// from the sys crate's `links` metadata.

use std::collections::HashSet;
use std::env;
use std::fmt::Write as _;
use std::path::PathBuf;

use serde::Deserialize;

#[derive(Deserialize)]
struct IsaTables {
    tables: Vec<Table>,
}

#[derive(Deserialize)]
struct Table {
    rust: String,
    prefix: String,
    label: String,
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

/// One resolved enum variant.
struct Variant {
    /// Engine name, e.g. `r3`.
    name: String,
    /// Rust variant identifier, e.g. `R3`.
    ident: String,
    /// Raw sys constant, e.g. `PPC_REG_R3`.
    constant: String,
    value: u32,
    doc: Option<String>,
}

fn main() {
    let isa_yaml = env::var("DEP_PPC_ISA_ISA_YAML")
        .expect("ppc-isa-sys did not export the ISA table path");
    let out_dir = env::var("OUT_DIR").unwrap();

    let text = std::fs::read_to_string(&isa_yaml)
        .unwrap_or_else(|e| panic!("failed to read {isa_yaml}: {e}"));
    let isa: IsaTables =
        serde_yaml::from_str(&text).unwrap_or_else(|e| panic!("invalid {isa_yaml}: {e}"));

    let mut out = String::new();
    writeln!(out, "// Generated from the ppc-isa-sys ISA table by build.rs. Do not edit.").unwrap();
    for table in &isa.tables {
        let variants = resolve(table);
        emit_enum(&mut out, table, &variants);
    }

    let out_path = PathBuf::from(&out_dir).join("generated.rs");
    std::fs::write(&out_path, out).expect("failed to write generated.rs");

    println!("cargo:rerun-if-changed={isa_yaml}");
    println!("cargo:rerun-if-changed=build.rs");
}

fn resolve(table: &Table) -> Vec<Variant> {
    let prefix = &table.prefix;
    let mut out = Vec::new();
    let mut next = 0u32;
    let push = |out: &mut Vec<Variant>, name: String, value: u32, doc: Option<String>| {
        out.push(Variant {
            ident: ident(&name),
            constant: format!("{prefix}_{}", name.to_ascii_uppercase()),
            name,
            value,
            doc,
        });
    };
    for entry in &table.entries {
        match entry {
            Entry::Name(name) => {
                push(&mut out, name.clone(), next, None);
                next += 1;
            }
            Entry::Bank { bank, count, doc } => {
                for i in 0..*count {
                    let doc = doc.as_ref().map(|d| format!("{d} {i}."));
                    push(&mut out, format!("{bank}{i}"), next, doc);
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
                push(&mut out, name.clone(), value, doc.clone());
                next = value + 1;
            }
        }
    }

    let mut idents = HashSet::new();
    for v in &out {
        assert!(
            idents.insert(v.ident.clone()),
            "{}: duplicate variant `{}`",
            table.rust,
            v.ident
        );
    }
    out
}

/// `r3` -> `R3`, `p8altivec` -> `P8altivec`.
fn ident(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => panic!("empty entry name"),
    }
}

fn emit_enum(out: &mut String, table: &Table, variants: &[Variant]) {
    let ty = &table.rust;
    let label = &table.label;

    writeln!(out).unwrap();
    writeln!(out, "#[doc = {:?}]", table.doc).unwrap();
    writeln!(
        out,
        "#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]"
    )
    .unwrap();
    writeln!(
        out,
        "#[cfg_attr(feature = \"serde\", derive(serde::Serialize, serde::Deserialize))]"
    )
    .unwrap();
    writeln!(out, "#[repr(u32)]").unwrap();
    writeln!(out, "pub enum {ty} {{").unwrap();
    for v in variants {
        let doc = match &v.doc {
            Some(d) => format!("{d} Raw value `{}`.", v.value),
            None => format!("`{}`, raw value `{}`.", v.name, v.value),
        };
        writeln!(out, "    #[doc = {doc:?}]").unwrap();
        if v.value == 0 {
            writeln!(out, "    #[default]").unwrap();
        }
        writeln!(out, "    {} = ppc_isa_sys::{},", v.ident, v.constant).unwrap();
    }
    writeln!(out, "}}").unwrap();

    writeln!(out).unwrap();
    writeln!(out, "impl {ty} {{").unwrap();
    writeln!(out, "    /// Every variant, in table order.").unwrap();
    writeln!(out, "    pub const ALL: &'static [Self] = &[").unwrap();
    for v in variants {
        writeln!(out, "        Self::{},", v.ident).unwrap();
    }
    writeln!(out, "    ];").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "    /// Raw engine value.").unwrap();
    writeln!(out, "    #[inline]").unwrap();
    writeln!(out, "    pub const fn raw(self) -> u32 {{").unwrap();
    writeln!(out, "        self as u32").unwrap();
    writeln!(out, "    }}").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "    /// Look up a variant by raw engine value.").unwrap();
    writeln!(out, "    pub const fn from_raw(raw: u32) -> Option<Self> {{").unwrap();
    writeln!(out, "        match raw {{").unwrap();
    for v in variants {
        writeln!(
            out,
            "            ppc_isa_sys::{} => Some(Self::{}),",
            v.constant, v.ident
        )
        .unwrap();
    }
    writeln!(out, "            _ => None,").unwrap();
    writeln!(out, "        }}").unwrap();
    writeln!(out, "    }}").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "    /// Engine name of this {label}.").unwrap();
    writeln!(out, "    pub const fn name(self) -> &'static str {{").unwrap();
    writeln!(out, "        match self {{").unwrap();
    for v in variants {
        writeln!(out, "            Self::{} => {:?},", v.ident, v.name).unwrap();
    }
    writeln!(out, "        }}").unwrap();
    writeln!(out, "    }}").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "    /// Look up a variant by engine name.").unwrap();
    writeln!(out, "    pub fn from_name(name: &str) -> Option<Self> {{").unwrap();
    writeln!(out, "        match name {{").unwrap();
    for v in variants {
        writeln!(out, "            {:?} => Some(Self::{}),", v.name, v.ident).unwrap();
    }
    writeln!(out, "            _ => None,").unwrap();
    writeln!(out, "        }}").unwrap();
    writeln!(out, "    }}").unwrap();
    writeln!(out, "}}").unwrap();

    writeln!(
        out,
        r#"
impl std::fmt::Display for {ty} {{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {{
        f.write_str(self.name())
    }}
}}

impl std::str::FromStr for {ty} {{
    type Err = crate::error::UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {{
        Self::from_name(s).ok_or_else(|| crate::error::UnknownValue::Name {{
            kind: {label:?},
            name: s.to_owned(),
        }})
    }}
}}

impl TryFrom<u32> for {ty} {{
    type Error = crate::error::UnknownValue;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {{
        Self::from_raw(raw).ok_or(crate::error::UnknownValue::Raw {{
            kind: {label:?},
            value: raw,
        }})
    }}
}}

impl From<{ty}> for u32 {{
    fn from(v: {ty}) -> u32 {{
        v.raw()
    }}
}}"#
    )
    .unwrap();
}
