//! Go source rendering for the generated `Name` methods.
//!
//! The output is laid out the way `gofmt` would print it, so skipping the
//! formatter still yields canonical source.

use std::fmt::Write as FmtWrite;

use crate::error::EnamegError;
use crate::model::{GeneratedUnit, TypeCases};

const RECEIVER: &str = "src";

/// Renders the complete generated file.
///
/// # Errors
///
/// Returns `EnamegError::Render` if writing into the buffer fails.
pub fn render(unit: &GeneratedUnit) -> Result<String, EnamegError> {
    let mut out = String::with_capacity(256 + unit.case_count() * 48);
    writeln!(out, "package {}", unit.package_name)?;
    out.push('\n');
    out.push_str("import (\n\t\"fmt\"\n)\n");
    for type_cases in &unit.types {
        out.push('\n');
        render_method(&mut out, type_cases)?;
    }
    Ok(out)
}

fn render_method(out: &mut String, type_cases: &TypeCases) -> Result<(), EnamegError> {
    let type_name = &type_cases.type_name;
    writeln!(out, "// Name returns the {type_name} Name.")?;
    writeln!(out, "func ({RECEIVER} {type_name}) Name() string {{")?;
    writeln!(out, "\tswitch {RECEIVER} {{")?;
    for case in &type_cases.cases {
        writeln!(out, "\tcase {}:", case.constant_name)?;
        writeln!(out, "\t\treturn \"{}\"", case.display_string)?;
    }
    writeln!(out, "\tdefault:")?;
    writeln!(out, "\t\treturn fmt.Sprintf(\"%v\", {RECEIVER})")?;
    writeln!(out, "\t}}")?;
    writeln!(out, "}}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CaseEntry;
    use rstest::rstest;

    fn case(constant_name: &str, display_string: &str) -> CaseEntry {
        CaseEntry {
            constant_name: constant_name.to_owned(),
            display_string: display_string.to_owned(),
        }
    }

    #[rstest]
    fn renders_one_method_per_type() {
        let unit = GeneratedUnit {
            package_name: "sample".to_owned(),
            types: vec![
                TypeCases {
                    type_name: "T".to_owned(),
                    cases: vec![case("T_A", "A"), case("T_B", "B")],
                },
                TypeCases {
                    type_name: "U".to_owned(),
                    cases: vec![case("U_Quote", "\\\"q\\\"")],
                },
            ],
        };

        let expected = concat!(
            "package sample\n",
            "\n",
            "import (\n",
            "\t\"fmt\"\n",
            ")\n",
            "\n",
            "// Name returns the T Name.\n",
            "func (src T) Name() string {\n",
            "\tswitch src {\n",
            "\tcase T_A:\n",
            "\t\treturn \"A\"\n",
            "\tcase T_B:\n",
            "\t\treturn \"B\"\n",
            "\tdefault:\n",
            "\t\treturn fmt.Sprintf(\"%v\", src)\n",
            "\t}\n",
            "}\n",
            "\n",
            "// Name returns the U Name.\n",
            "func (src U) Name() string {\n",
            "\tswitch src {\n",
            "\tcase U_Quote:\n",
            "\t\treturn \"\\\"q\\\"\"\n",
            "\tdefault:\n",
            "\t\treturn fmt.Sprintf(\"%v\", src)\n",
            "\t}\n",
            "}\n",
        );
        assert_eq!(render(&unit).expect("render"), expected);
    }

    #[rstest]
    fn type_without_cases_keeps_the_default_branch() {
        let unit = GeneratedUnit {
            package_name: "p".to_owned(),
            types: vec![TypeCases {
                type_name: "Empty".to_owned(),
                cases: vec![],
            }],
        };
        let rendered = render(&unit).expect("render");
        assert!(rendered.contains("\tswitch src {\n\tdefault:\n"));
    }
}
