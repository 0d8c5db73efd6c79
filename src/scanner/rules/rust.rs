//! Rule table for Rust sources.
//!
//! Unlike the C/PHP/Scala tables these rules are case-sensitive, except the
//! hardcoded-secret patterns at the end.

use super::RuleDef;
use crate::scanner::model::Severity::{Critical, High, Low, Medium};

pub(crate) const RULES: &[RuleDef] = &[
    // unsafe_code
    RuleDef {
        id: "rs-001",
        pattern: r"unsafe\s*\{",
        severity: Critical,
        category: "unsafe_code",
        message: "Unsafe code block detected",
    },
    RuleDef {
        id: "rs-002",
        pattern: r"unsafe\s+fn",
        severity: Critical,
        category: "unsafe_code",
        message: "Unsafe function definition",
    },
    RuleDef {
        id: "rs-003",
        pattern: r"unsafe\s+impl",
        severity: Critical,
        category: "unsafe_code",
        message: "Unsafe trait implementation",
    },
    // panic_risk
    RuleDef {
        id: "rs-004",
        pattern: r"\.unwrap\(\)",
        severity: High,
        category: "panic_risk",
        message: "Unchecked unwrap() call - may panic",
    },
    RuleDef {
        id: "rs-005",
        pattern: r"\.expect\(",
        severity: High,
        category: "panic_risk",
        message: "Unchecked expect() call - may panic",
    },
    RuleDef {
        id: "rs-006",
        pattern: r"panic!",
        severity: High,
        category: "panic_risk",
        message: "Explicit panic! macro usage",
    },
    RuleDef {
        id: "rs-007",
        pattern: r"unreachable!",
        severity: High,
        category: "panic_risk",
        message: "Unreachable code macro",
    },
    RuleDef {
        id: "rs-008",
        pattern: r"\.as_ref\(\)\.unwrap",
        severity: High,
        category: "panic_risk",
        message: "Potential null dereference",
    },
    RuleDef {
        id: "rs-009",
        pattern: r"\.as_mut\(\)\.unwrap",
        severity: High,
        category: "panic_risk",
        message: "Potential null dereference",
    },
    // raw_pointer
    RuleDef {
        id: "rs-010",
        pattern: r"\*mut\s+\w+",
        severity: Critical,
        category: "raw_pointer",
        message: "Raw mutable pointer usage",
    },
    RuleDef {
        id: "rs-011",
        pattern: r"\*const\s+\w+",
        severity: High,
        category: "raw_pointer",
        message: "Raw const pointer usage",
    },
    RuleDef {
        id: "rs-012",
        pattern: r"as\s+\*mut",
        severity: Critical,
        category: "raw_pointer",
        message: "Unsafe cast to raw mutable pointer",
    },
    RuleDef {
        id: "rs-013",
        pattern: r"as\s+\*const",
        severity: High,
        category: "raw_pointer",
        message: "Unsafe cast to raw const pointer",
    },
    RuleDef {
        id: "rs-014",
        pattern: r"std::ptr::null_mut",
        severity: High,
        category: "raw_pointer",
        message: "Null mutable pointer creation",
    },
    // ffi
    RuleDef {
        id: "rs-015",
        pattern: r#"extern\s+"C""#,
        severity: High,
        category: "ffi",
        message: "Foreign function interface declaration",
    },
    RuleDef {
        id: "rs-016",
        pattern: r"#\[no_mangle\]",
        severity: High,
        category: "ffi",
        message: "Function name mangling disabled",
    },
    // memory_management
    RuleDef {
        id: "rs-017",
        pattern: r"std::mem::transmute",
        severity: Critical,
        category: "memory_management",
        message: "Memory transmutation - extremely unsafe",
    },
    RuleDef {
        id: "rs-018",
        pattern: r"std::mem::forget",
        severity: Critical,
        category: "memory_management",
        message: "Memory intentionally leaked",
    },
    // global_state
    RuleDef {
        id: "rs-019",
        pattern: r"static\s+mut",
        severity: Critical,
        category: "global_state",
        message: "Static mutable variable - thread unsafe",
    },
    // randomness
    RuleDef {
        id: "rs-020",
        pattern: r"rand::thread_rng",
        severity: Medium,
        category: "randomness",
        message: "Thread-local random number generator",
    },
    // network_access
    RuleDef {
        id: "rs-021",
        pattern: r"std::net::TcpStream::connect",
        severity: Medium,
        category: "network_access",
        message: "TCP connection establishment",
    },
    // file_access
    RuleDef {
        id: "rs-022",
        pattern: r"std::fs::File::open",
        severity: Medium,
        category: "file_access",
        message: "File system access",
    },
    // checked_arithmetic
    RuleDef {
        id: "rs-023",
        pattern: r"\.checked_add\(",
        severity: Low,
        category: "checked_arithmetic",
        message: "Checked arithmetic operation",
    },
    RuleDef {
        id: "rs-024",
        pattern: r"\.checked_mul\(",
        severity: Low,
        category: "checked_arithmetic",
        message: "Checked arithmetic operation",
    },
    // sql_injection
    RuleDef {
        id: "rs-025",
        pattern: r#"format!\s*\(\s*["'][^"']*\{\}[^"']*["']"#,
        severity: High,
        category: "sql_injection",
        message: "String built with format! used in query position - injection risk",
    },
    // hardcoded_secrets (case-insensitive, matching the other language tables)
    RuleDef {
        id: "rs-026",
        pattern: r#"(?i)password\s*=\s*["'][^"']+["']"#,
        severity: Critical,
        category: "hardcoded_secrets",
        message: "Hardcoded password detected",
    },
    RuleDef {
        id: "rs-027",
        pattern: r#"(?i)secret\s*=\s*["'][^"']+["']"#,
        severity: Critical,
        category: "hardcoded_secrets",
        message: "Hardcoded secret detected",
    },
    RuleDef {
        id: "rs-028",
        pattern: r#"(?i)api_key\s*=\s*["'][^"']+["']"#,
        severity: Critical,
        category: "hardcoded_secrets",
        message: "Hardcoded API key detected",
    },
    RuleDef {
        id: "rs-029",
        pattern: r#"(?i)token\s*=\s*["'][^"']+["']"#,
        severity: Critical,
        category: "hardcoded_secrets",
        message: "Hardcoded token detected",
    },
];
