//! Rule table for C sources.
//!
//! All C rules match case-insensitively. The unchecked-call rules
//! (`c-006`, `c-026`..`c-029`) are necessarily over-eager: line-based
//! matching cannot see whether a later statement checks the return value.

use super::RuleDef;
use crate::scanner::model::Severity::{Critical, High, Low, Medium};

pub(crate) const RULES: &[RuleDef] = &[
    // buffer_overflow
    RuleDef {
        id: "c-001",
        pattern: r"(?i)\bstrcpy\s*\([^)]*\)",
        severity: Critical,
        category: "buffer_overflow",
        message: "Unsafe strcpy - potential buffer overflow",
    },
    RuleDef {
        id: "c-002",
        pattern: r"(?i)\bstrcat\s*\([^)]*\)",
        severity: Critical,
        category: "buffer_overflow",
        message: "Unsafe strcat - potential buffer overflow",
    },
    RuleDef {
        id: "c-003",
        pattern: r"(?i)\bgets\s*\([^)]*\)",
        severity: Critical,
        category: "buffer_overflow",
        message: "Unsafe gets - always vulnerable to buffer overflow",
    },
    RuleDef {
        id: "c-004",
        pattern: r"(?i)\bsprintf\s*\([^)]*\)",
        severity: Critical,
        category: "buffer_overflow",
        message: "Unsafe sprintf - potential buffer overflow",
    },
    RuleDef {
        id: "c-005",
        pattern: r"(?i)\bvsprintf\s*\([^)]*\)",
        severity: Critical,
        category: "buffer_overflow",
        message: "Unsafe vsprintf - potential buffer overflow",
    },
    // memory_management
    RuleDef {
        id: "c-006",
        pattern: r"(?i)\bmalloc\s*\([^)]*\)",
        severity: Critical,
        category: "memory_management",
        message: "Unchecked malloc return - potential NULL pointer dereference",
    },
    RuleDef {
        id: "c-007",
        pattern: r"(?i)\bfree\s*\([^)]*\)\s*;\s*[^;]*=\s*NULL",
        severity: Critical,
        category: "memory_management",
        message: "Double free potential - variable not set to NULL after free",
    },
    // format_string
    RuleDef {
        id: "c-008",
        pattern: r"(?i)\bprintf\s*\([^)]*\)",
        severity: Critical,
        category: "format_string",
        message: "Unsafe printf - potential format string vulnerability",
    },
    RuleDef {
        id: "c-009",
        pattern: r"(?i)\bfprintf\s*\([^)]*\)",
        severity: Critical,
        category: "format_string",
        message: "Unsafe fprintf - potential format string vulnerability",
    },
    // command_injection
    RuleDef {
        id: "c-010",
        pattern: r"(?i)\bsystem\s*\([^)]*\)",
        severity: Critical,
        category: "command_injection",
        message: "Command injection risk - system() call",
    },
    RuleDef {
        id: "c-011",
        pattern: r"(?i)\bpopen\s*\([^)]*\)",
        severity: Critical,
        category: "command_injection",
        message: "Command injection risk - popen() call",
    },
    RuleDef {
        id: "c-012",
        pattern: r"(?i)\bexecl\s*\([^)]*\)",
        severity: Critical,
        category: "command_injection",
        message: "Command injection risk - execl() call",
    },
    RuleDef {
        id: "c-013",
        pattern: r"(?i)\bexecv\s*\([^)]*\)",
        severity: Critical,
        category: "command_injection",
        message: "Command injection risk - execv() call",
    },
    // sql_injection
    RuleDef {
        id: "c-014",
        pattern: r"(?i)\bsqlite3_exec\s*\([^)]*\)",
        severity: Critical,
        category: "sql_injection",
        message: "Potential SQL injection - sqlite3_exec with user input",
    },
    RuleDef {
        id: "c-015",
        pattern: r"(?i)\bmysql_query\s*\([^)]*\)",
        severity: Critical,
        category: "sql_injection",
        message: "Potential SQL injection - mysql_query with user input",
    },
    RuleDef {
        id: "c-016",
        pattern: r"(?i)\bpg_query\s*\([^)]*\)",
        severity: Critical,
        category: "sql_injection",
        message: "Potential SQL injection - pg_query with user input",
    },
    // integer_overflow
    RuleDef {
        id: "c-017",
        pattern: r"(?i)\bint\s+\w+\s*=\s*\w+\s*\*\s*\w+",
        severity: Critical,
        category: "integer_overflow",
        message: "Potential integer overflow in multiplication",
    },
    RuleDef {
        id: "c-018",
        pattern: r"(?i)\blong\s+\w+\s*=\s*\w+\s*\*\s*\w+",
        severity: Critical,
        category: "integer_overflow",
        message: "Potential integer overflow in multiplication",
    },
    // race_condition
    RuleDef {
        id: "c-019",
        pattern: r"(?i)\baccess\s*\([^)]*\).*\bopen\s*\([^)]*\)",
        severity: Critical,
        category: "race_condition",
        message: "TOCTOU race condition - access() followed by open()",
    },
    RuleDef {
        id: "c-020",
        pattern: r"(?i)\bstat\s*\([^)]*\).*\bopen\s*\([^)]*\)",
        severity: Critical,
        category: "race_condition",
        message: "TOCTOU race condition - stat() followed by open()",
    },
    // hardcoded_secrets
    RuleDef {
        id: "c-021",
        pattern: r#"(?i)password\s*=\s*["'][^"']+["']"#,
        severity: Critical,
        category: "hardcoded_secrets",
        message: "Hardcoded password detected",
    },
    RuleDef {
        id: "c-022",
        pattern: r#"(?i)secret\s*=\s*["'][^"']+["']"#,
        severity: Critical,
        category: "hardcoded_secrets",
        message: "Hardcoded secret detected",
    },
    RuleDef {
        id: "c-023",
        pattern: r#"(?i)api_key\s*=\s*["'][^"']+["']"#,
        severity: Critical,
        category: "hardcoded_secrets",
        message: "Hardcoded API key detected",
    },
    RuleDef {
        id: "c-024",
        pattern: r#"(?i)token\s*=\s*["'][^"']+["']"#,
        severity: Critical,
        category: "hardcoded_secrets",
        message: "Hardcoded token detected",
    },
    // unsafe_functions
    RuleDef {
        id: "c-025",
        pattern: r"(?i)\bstrncpy\s*\([^)]*\)",
        severity: High,
        category: "unsafe_functions",
        message: "strncpy may not null-terminate - use strlcpy or ensure null termination",
    },
    RuleDef {
        id: "c-026",
        pattern: r"(?i)\bstrncat\s*\([^)]*\)",
        severity: High,
        category: "unsafe_functions",
        message: "strncat may not null-terminate - use strlcat or ensure null termination",
    },
    RuleDef {
        id: "c-027",
        pattern: r"(?i)\bscanf\s*\([^)]*\)",
        severity: High,
        category: "unsafe_functions",
        message: "Unsafe scanf - use fgets or scanf with width limits",
    },
    RuleDef {
        id: "c-028",
        pattern: r"(?i)\bsscanf\s*\([^)]*\)",
        severity: High,
        category: "unsafe_functions",
        message: "Unsafe sscanf - use strtok or sscanf with width limits",
    },
    // pointer_issues
    RuleDef {
        id: "c-029",
        pattern: r"(?i)\bvoid\s*\*\s*\w+\s*=",
        severity: High,
        category: "pointer_issues",
        message: "Void pointer usage - type safety concern",
    },
    RuleDef {
        id: "c-030",
        pattern: r"(?i)\bchar\s*\*\s*\w+\s*=\s*[^;]*\w+\[[^\]]*\]",
        severity: High,
        category: "pointer_issues",
        message: "Array to pointer conversion - potential buffer overflow",
    },
    // unchecked_returns
    RuleDef {
        id: "c-031",
        pattern: r"(?i)\bopen\s*\([^)]*\)",
        severity: High,
        category: "unchecked_returns",
        message: "Unchecked open() return - potential file operation failure",
    },
    RuleDef {
        id: "c-032",
        pattern: r"(?i)\bread\s*\([^)]*\)",
        severity: High,
        category: "unchecked_returns",
        message: "Unchecked read() return - potential I/O failure",
    },
    RuleDef {
        id: "c-033",
        pattern: r"(?i)\bwrite\s*\([^)]*\)",
        severity: High,
        category: "unchecked_returns",
        message: "Unchecked write() return - potential I/O failure",
    },
    // memory_leaks
    RuleDef {
        id: "c-034",
        pattern: r"(?i)\bcalloc\s*\([^)]*\)\s*;",
        severity: High,
        category: "memory_leaks",
        message: "Potential memory leak - calloc without corresponding free",
    },
    RuleDef {
        id: "c-035",
        pattern: r"(?i)\brealloc\s*\([^)]*\)\s*;",
        severity: High,
        category: "memory_leaks",
        message: "Potential memory leak - realloc without corresponding free",
    },
    // type_safety
    RuleDef {
        id: "c-036",
        pattern: r"(?i)\bint\s+\w+\s*=\s*\w+\s*\+\s*\w+",
        severity: High,
        category: "type_safety",
        message: "Potential integer overflow in addition",
    },
    RuleDef {
        id: "c-037",
        pattern: r"(?i)\bint\s+\w+\s*=\s*\w+\s*-\s*\w+",
        severity: High,
        category: "type_safety",
        message: "Potential integer underflow in subtraction",
    },
    // deprecated_functions
    RuleDef {
        id: "c-038",
        pattern: r"(?i)\bbzero\s*\([^)]*\)",
        severity: Medium,
        category: "deprecated_functions",
        message: "Deprecated bzero - use memset",
    },
    RuleDef {
        id: "c-039",
        pattern: r"(?i)\bbcopy\s*\([^)]*\)",
        severity: Medium,
        category: "deprecated_functions",
        message: "Deprecated bcopy - use memcpy or memmove",
    },
    RuleDef {
        id: "c-040",
        pattern: r"(?i)\brindex\s*\([^)]*\)",
        severity: Medium,
        category: "deprecated_functions",
        message: "Deprecated rindex - use strrchr",
    },
    // magic_numbers
    RuleDef {
        id: "c-041",
        pattern: r"(?i)\bif\s*\([^)]*==\s*\d{3,}\)",
        severity: Medium,
        category: "magic_numbers",
        message: "Magic number in condition - consider using named constant",
    },
    // unused_variables
    RuleDef {
        id: "c-042",
        pattern: r"(?i)\bint\s+\w+\s*=\s*\d+;",
        severity: Medium,
        category: "unused_variables",
        message: "Potential unused variable - check if used",
    },
    RuleDef {
        id: "c-043",
        pattern: r"(?i)\bchar\s+\w+\s*\[[^\]]*\];",
        severity: Medium,
        category: "unused_variables",
        message: "Potential unused array - check if used",
    },
    // naming_conventions
    RuleDef {
        id: "c-044",
        pattern: r"\bint\s+[a-z]+\w*[A-Z]",
        severity: Medium,
        category: "naming_conventions",
        message: "Mixed case variable name - consider consistent naming",
    },
    // comments
    RuleDef {
        id: "c-045",
        pattern: r"(?i)//.*TODO",
        severity: Low,
        category: "comments",
        message: "TODO comment found - should be addressed",
    },
    RuleDef {
        id: "c-046",
        pattern: r"(?i)//.*FIXME",
        severity: Low,
        category: "comments",
        message: "FIXME comment found - should be addressed",
    },
    RuleDef {
        id: "c-047",
        pattern: r"(?i)//.*HACK",
        severity: Low,
        category: "comments",
        message: "HACK comment found - should be reviewed",
    },
];
