//! Helpers shared by the integration tests.

use std::path::{Path, PathBuf};

/// Bison report for `start : test ; test : KW_TEST '(' number ')' | ;`.
pub const REPORT: &str = r#"<?xml version="1.0"?>
<bison-xml-report version="3.8.2">
  <grammar>
    <rules>
      <rule number="0"><lhs>$accept</lhs><rhs><symbol>start</symbol><symbol>$end</symbol></rhs></rule>
      <rule number="1"><lhs>start</lhs><rhs><symbol>test</symbol></rhs></rule>
      <rule number="2"><lhs>test</lhs><rhs><symbol>KW_TEST</symbol><symbol>'('</symbol><symbol>number</symbol><symbol>')'</symbol></rhs></rule>
      <rule number="3"><lhs>test</lhs><rhs><empty/></rhs></rule>
    </rules>
  </grammar>
</bison-xml-report>
"#;

/// Write a stand-in for bison into `dir` that copies `report` to the path
/// given by `--xml=` and exits successfully.
#[cfg(unix)]
pub fn stub_bison(dir: &Path, report: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let report_path = dir.join("report.xml");
    std::fs::write(&report_path, report).unwrap();

    let script = format!(
        "#!/bin/sh\nfor arg in \"$@\"; do\n  case \"$arg\" in\n    --xml=*) cp '{}' \"${{arg#--xml=}}\" ;;\n  esac\ndone\n",
        report_path.display()
    );
    let bison = dir.join("bison");
    std::fs::write(&bison, script).unwrap();
    std::fs::set_permissions(&bison, std::fs::Permissions::from_mode(0o755)).unwrap();
    bison
}
